use http::{HeaderMap, HeaderValue, Method};
use url::Url;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::timeout::TimeoutScope;

/// HTTP request built by a [`Client`]
///
/// A request is either ready to send, holding its timeout scope, or failed,
/// holding the error that occurred while it was built. The error is only
/// reported by [`Request::invoke`].
pub struct Request {
    client: Client,
    method: Method,
    state: State,
}

enum State {
    Ready {
        inner: reqwest::Request,
        scope: TimeoutScope,
    },
    Failed(Error),
}

impl Request {
    pub(crate) fn ready(client: Client, inner: reqwest::Request, scope: TimeoutScope) -> Self {
        Self {
            client,
            method: inner.method().clone(),
            state: State::Ready { inner, scope },
        }
    }

    pub(crate) fn failed(client: Client, method: Method, error: Error) -> Self {
        Self {
            client,
            method,
            state: State::Failed(error),
        }
    }

    /// Get the HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL, if the request was built
    pub fn url(&self) -> Option<&Url> {
        match &self.state {
            State::Ready { inner, .. } => Some(inner.url()),
            State::Failed(_) => None,
        }
    }

    /// Get the headers, if the request was built
    pub fn headers(&self) -> Option<&HeaderMap> {
        match &self.state {
            State::Ready { inner, .. } => Some(inner.headers()),
            State::Failed(_) => None,
        }
    }

    /// Get the construction error, if any
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Ready { .. } => None,
            State::Failed(error) => Some(error),
        }
    }

    /// Check if the request can be sent
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    /// Set a header
    ///
    /// An invalid name or value turns this into a failed request.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if !self.is_ready() {
            return self;
        }
        match parse_header(name, value) {
            Ok((name, value)) => {
                if let State::Ready { inner, .. } = &mut self.state {
                    inner.headers_mut().insert(name, value);
                }
            }
            // Dropping the ready state releases its timeout scope.
            Err(error) => self.state = State::Failed(error),
        }
        self
    }

    /// Send the request
    ///
    /// Cookies, redirects and proxying follow the client's configuration.
    /// The returned [`Response`] carries any error from building or sending.
    pub async fn invoke(self) -> Response {
        let (inner, scope) = match self.state {
            State::Ready { inner, scope } => (inner, scope),
            State::Failed(error) => return Response::failed(self.method, None, error),
        };

        let url = inner.url().clone();
        tracing::debug!(method = %self.method, %url, "sending request");

        match scope.run(self.client.execute(inner)).await {
            Ok(Ok(response)) => {
                tracing::trace!(status = %response.status(), %url, "response received");
                Response::live(self.method, url, response, scope)
            }
            Ok(Err(error)) | Err(error) => {
                scope.release();
                Response::failed(self.method, Some(url), error)
            }
        }
    }
}

fn parse_header(name: &str, value: &str) -> Result<(http::header::HeaderName, HeaderValue)> {
    let name = name.parse::<http::header::HeaderName>()?;
    let value = value.parse::<HeaderValue>()?;
    Ok((name, value))
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Request");
        debug.field("method", &self.method);
        match &self.state {
            State::Ready { inner, scope } => debug
                .field("url", &inner.url().as_str())
                .field("headers", inner.headers())
                .field("timeout", &scope.timeout()),
            State::Failed(error) => debug.field("error", error),
        };
        debug.finish()
    }
}

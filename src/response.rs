use futures::StreamExt;
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::error::{Error, Result};
use crate::timeout::TimeoutScope;

/// HTTP response returned by [`Request::invoke`](crate::Request::invoke)
///
/// Exactly one of [`discard`](Response::discard), [`json`](Response::json),
/// [`json_into`](Response::json_into) or [`write_to`](Response::write_to)
/// consumes it. Each one treats any status other than `200 OK` as an error,
/// and releases the request's timeout scope and closes the body before
/// returning.
pub struct Response {
    method: Method,
    url: Option<Url>,
    state: State,
}

enum State {
    Live {
        inner: reqwest::Response,
        scope: TimeoutScope,
    },
    Failed(Error),
}

impl Response {
    pub(crate) fn live(
        method: Method,
        url: Url,
        inner: reqwest::Response,
        scope: TimeoutScope,
    ) -> Self {
        Self {
            method,
            url: Some(url),
            state: State::Live { inner, scope },
        }
    }

    pub(crate) fn failed(method: Method, url: Option<Url>, error: Error) -> Self {
        Self {
            method,
            url,
            state: State::Failed(error),
        }
    }

    /// Get the method of the originating request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL that was requested, if the request was built
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Get the HTTP status code, if a response arrived
    pub fn status(&self) -> Option<StatusCode> {
        match &self.state {
            State::Live { inner, .. } => Some(inner.status()),
            State::Failed(_) => None,
        }
    }

    /// Get the response headers, if a response arrived
    pub fn headers(&self) -> Option<&HeaderMap> {
        match &self.state {
            State::Live { inner, .. } => Some(inner.headers()),
            State::Failed(_) => None,
        }
    }

    /// Get the error from building or sending the request, if any
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Live { .. } => None,
            State::Failed(error) => Some(error),
        }
    }

    /// Drop the response body
    pub async fn discard(self) -> Result<()> {
        let (inner, scope) = self.into_live()?;
        check_status(inner, &scope).await.map(drop)
    }

    /// Decode the response body as JSON
    ///
    /// Only the first JSON value is read; anything after it is ignored.
    pub async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (inner, scope) = self.into_live()?;
        let inner = check_status(inner, &scope).await?;
        let body = scope.run(inner.bytes()).await?.map_err(Error::Network)?;
        let mut deserializer = serde_json::Deserializer::from_slice(&body);
        T::deserialize(&mut deserializer).map_err(Error::Decode)
    }

    /// Decode the response body as JSON into an existing value
    ///
    /// `target` is left untouched on error.
    pub async fn json_into<T>(self, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        *target = self.json().await?;
        Ok(())
    }

    /// Stream the response body into a writer, returning the bytes written
    pub async fn write_to<W>(self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let (inner, scope) = self.into_live()?;
        let inner = check_status(inner, &scope).await?;

        let mut stream = inner.bytes_stream();
        let mut written = 0u64;
        scope
            .run(async {
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk.map_err(Error::Network)?;
                    writer
                        .write_all(&chunk)
                        .await
                        .map_err(|source| Error::Io { written, source })?;
                    written += chunk.len() as u64;
                }
                writer
                    .flush()
                    .await
                    .map_err(|source| Error::Io { written, source })?;
                Ok::<_, Error>(written)
            })
            .await?
    }

    fn into_live(self) -> Result<(reqwest::Response, TimeoutScope)> {
        match self.state {
            State::Live { inner, scope } => Ok((inner, scope)),
            State::Failed(error) => Err(error),
        }
    }
}

/// Reject anything but `200 OK`, reading the body into the error on a best-effort basis
async fn check_status(inner: reqwest::Response, scope: &TimeoutScope) -> Result<reqwest::Response> {
    let status = inner.status();
    if status == StatusCode::OK {
        return Ok(inner);
    }
    let body = match scope.run(inner.bytes()).await {
        Ok(Ok(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
        _ => String::new(),
    };
    Err(Error::status(status, body))
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Response");
        debug.field("method", &self.method).field("url", &self.url);
        match &self.state {
            State::Live { inner, .. } => debug.field("status", &inner.status()),
            State::Failed(error) => debug.field("error", error),
        };
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_response_returns_error() {
        let response = Response::failed(Method::GET, None, Error::invalid_request("broken"));
        assert!(response.status().is_none());
        assert!(response.headers().is_none());

        let mut sink = Vec::new();
        let error = response.write_to(&mut sink).await.unwrap_err();
        assert!(matches!(error, Error::InvalidRequest(_)));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_failed_response_json() {
        let error = Error::timeout(std::time::Duration::from_secs(1));
        let response = Response::failed(Method::POST, None, error);
        let mut target = 5u32;
        let error = response.json_into(&mut target).await.unwrap_err();
        assert!(error.is_timeout());
        assert_eq!(target, 5);
    }
}

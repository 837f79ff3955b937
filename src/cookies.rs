use std::sync::Arc;

use cookie::Cookie;
use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// Cookie jar shared by every request issued from a client
///
/// Storage, domain/path matching and expiry are handled by reqwest's jar;
/// responses populate it from `Set-Cookie` and requests replay it. Clones
/// share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    inner: Arc<Jar>,
}

impl CookieJar {
    /// Create a new empty cookie jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cookie as if `url` had answered with `Set-Cookie: cookie_str`
    pub fn add_cookie_str(&self, cookie_str: &str, url: &Url) {
        self.inner.add_cookie_str(cookie_str, url);
    }

    /// Get the `Cookie` header value that would be sent to `url`
    pub fn header_for(&self, url: &Url) -> Option<String> {
        self.inner
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Get the cookies that would be sent to `url`
    pub fn cookies_for(&self, url: &Url) -> Vec<Cookie<'static>> {
        match self.header_for(url) {
            Some(header) => Cookie::split_parse(header)
                .filter_map(|cookie| cookie.ok())
                .map(Cookie::into_owned)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Get the value of a named cookie that would be sent to `url`
    pub fn get(&self, url: &Url, name: &str) -> Option<String> {
        self.cookies_for(url)
            .into_iter()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
    }

    pub(crate) fn provider(&self) -> Arc<Jar> {
        self.inner.clone()
    }
}

//! User-Agent classification for [`http`] requests.
//!
//! # Example
//!
//! ```
//! use gadget::{http::UserAgentClassifierLayer, ua::UserAgent};
//! use http::{Request, header::USER_AGENT};
//! use tower_layer::Layer;
//! use tower_service::Service;
//! use std::{convert::Infallible, future::{Ready, ready}, task::{Context, Poll}};
//!
//! #[derive(Clone)]
//! struct Handler;
//!
//! impl Service<Request<()>> for Handler {
//!     type Response = String;
//!     type Error = Infallible;
//!     type Future = Ready<Result<String, Infallible>>;
//!
//!     fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
//!         Poll::Ready(Ok(()))
//!     }
//!
//!     fn call(&mut self, req: Request<()>) -> Self::Future {
//!         let ua: &UserAgent = req.extensions().get().unwrap();
//!         ready(Ok(ua.to_string()))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut service = UserAgentClassifierLayer::new().layer(Handler);
//!
//! let req = Request::builder()
//!     .header(USER_AGENT, "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:73.0) Gecko/20100101 Firefox/73.0")
//!     .body(())
//!     .unwrap();
//! let resp = service.call(req).await.unwrap();
//! assert_eq!(resp, "Firefox 73 on Linux Ubuntu");
//! # }
//! ```

use crate::ua::UserAgent;
use http::{HeaderMap, HeaderName, HeaderValue, Request, header::USER_AGENT};
use std::{
    fmt,
    task::{Context, Poll},
};
use tower_layer::Layer;
use tower_service::Service;

/// Classify the `User-Agent` header of a [`HeaderMap`].
///
/// A missing header is classified as an empty `User-Agent`.
/// Bytes that are not valid UTF-8 are replaced.
#[must_use]
pub fn parse_headers(headers: &HeaderMap) -> UserAgent {
    headers
        .get(USER_AGENT)
        .map(parse_header_value)
        .unwrap_or_default()
}

fn parse_header_value(value: &HeaderValue) -> UserAgent {
    UserAgent::new(&String::from_utf8_lossy(value.as_bytes()))
}

/// A [`Service`] that classifies the [`UserAgent`] of incoming [`Request`]s.
///
/// The [`Extensions`] of the [`Request`] are updated with the [`UserAgent`]
/// if the [`Request`] contains a `User-Agent` header (or the overwrite header).
///
/// [`Extensions`]: http::Extensions
pub struct UserAgentClassifier<S> {
    inner: S,
    overwrite_header: Option<HeaderName>,
}

impl<S> UserAgentClassifier<S> {
    /// Create a new [`UserAgentClassifier`] [`Service`].
    pub const fn new(inner: S, overwrite_header: Option<HeaderName>) -> Self {
        Self {
            inner,
            overwrite_header,
        }
    }

    /// Gets a reference to the underlying service.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Gets a mutable reference to the underlying service.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes `self`, returning the underlying service.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn classify(&self, headers: &HeaderMap) -> Option<UserAgent> {
        let value = self
            .overwrite_header
            .as_ref()
            .and_then(|header| headers.get(header))
            .or_else(|| headers.get(USER_AGENT))?;
        Some(parse_header_value(value))
    }
}

impl<S> fmt::Debug for UserAgentClassifier<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAgentClassifier")
            .field("inner", &self.inner)
            .field("overwrite_header", &self.overwrite_header)
            .finish()
    }
}

impl<S> Clone for UserAgentClassifier<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            overwrite_header: self.overwrite_header.clone(),
        }
    }
}

impl<S, Body> Service<Request<Body>> for UserAgentClassifier<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        match self.classify(req.headers()) {
            Some(ua) => {
                tracing::trace!(
                    user_agent.browser = %ua.browser(),
                    user_agent.os = %ua.os(),
                    "user agent classified from request"
                );
                req.extensions_mut().insert(ua);
            }
            None => {
                tracing::debug!("user agent classification not possible: no user agent header present");
            }
        }
        self.inner.call(req)
    }
}

/// A [`Layer`] that wraps a [`Service`] with a [`UserAgentClassifier`].
///
/// This [`Layer`] is used to classify the [`UserAgent`] of incoming [`Request`]s.
#[derive(Debug, Clone, Default)]
pub struct UserAgentClassifierLayer {
    overwrite_header: Option<HeaderName>,
}

impl UserAgentClassifierLayer {
    /// Create a new [`UserAgentClassifierLayer`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overwrite_header: None,
        }
    }

    /// Define a custom header which, when present, is classified
    /// instead of the `User-Agent` header.
    #[must_use]
    pub fn overwrite_header(mut self, header: HeaderName) -> Self {
        self.overwrite_header = Some(header);
        self
    }

    /// Define a custom header which, when present, is classified
    /// instead of the `User-Agent` header.
    pub fn set_overwrite_header(&mut self, header: HeaderName) -> &mut Self {
        self.overwrite_header = Some(header);
        self
    }
}

impl<S> Layer<S> for UserAgentClassifierLayer {
    type Service = UserAgentClassifier<S>;

    fn layer(&self, inner: S) -> Self::Service {
        UserAgentClassifier::new(inner, self.overwrite_header.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        convert::Infallible,
        future::{Ready, poll_fn, ready},
    };

    /// Returns the classified [`UserAgent`], if any.
    #[derive(Debug, Clone)]
    struct Echo;

    impl Service<Request<()>> for Echo {
        type Response = Option<UserAgent>;
        type Error = Infallible;
        type Future = Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: Request<()>) -> Self::Future {
            ready(Ok(req.extensions().get::<UserAgent>().cloned()))
        }
    }

    async fn classify(
        layer: &UserAgentClassifierLayer,
        headers: &[(&str, &str)],
    ) -> Option<UserAgent> {
        let mut service = layer.layer(Echo);
        let mut req = Request::builder();
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        poll_fn(|cx| service.poll_ready(cx)).await.unwrap();
        service.call(req.body(()).unwrap()).await.unwrap()
    }

    #[test]
    fn test_parse_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_headers(&headers), UserAgent::default());

        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:73.0) Gecko/20100101 Firefox/73.0"),
        );
        assert_eq!(parse_headers(&headers).to_string(), "Firefox 73 on Windows 7");

        headers.insert(
            USER_AGENT,
            HeaderValue::from_bytes(b"curl/7.68.0 \xff").unwrap(),
        );
        assert_eq!(parse_headers(&headers).to_string(), "curl 7.68");
    }

    #[tokio::test]
    async fn test_classifier_inserts_user_agent() {
        let ua = classify(
            &UserAgentClassifierLayer::new(),
            &[(
                "user-agent",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_3) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0.5 Safari/605.1.15",
            )],
        )
        .await
        .unwrap();
        assert_eq!(ua.browser(), "Safari 13.0");
        assert_eq!(ua.os(), "macOS 10.15");
    }

    #[tokio::test]
    async fn test_classifier_without_header() {
        assert_eq!(classify(&UserAgentClassifierLayer::new(), &[]).await, None);
    }

    #[tokio::test]
    async fn test_classifier_empty_header() {
        let ua = classify(&UserAgentClassifierLayer::new(), &[("user-agent", "")])
            .await
            .unwrap();
        assert!(ua.is_empty());
    }

    #[tokio::test]
    async fn test_classifier_overwrite_header() {
        let layer =
            UserAgentClassifierLayer::new().overwrite_header(HeaderName::from_static("x-test-ua"));

        let ua = classify(
            &layer,
            &[("user-agent", "curl/7.68.0"), ("x-test-ua", "Wget/1.20.3 (linux-gnu)")],
        )
        .await
        .unwrap();
        assert_eq!(ua.to_string(), "Wget 1.20");

        // falls back to the User-Agent header
        let ua = classify(&layer, &[("user-agent", "curl/7.68.0")])
            .await
            .unwrap();
        assert_eq!(ua.to_string(), "curl 7.68");
    }
}

//! Integration tests for icanmake3d.
//!
//! Tests drive the full storefront router in-process, session layer and
//! middleware included, so no server or network is needed.
//!
//! ```bash
//! cargo test -p icanmake3d-integration-tests
//! ```
//!
//! A [`TestClient`] keeps the session cookie between requests the way a
//! browser would; two clients are two independent shoppers.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header},
};
use icanmake3d_core::Catalog;
use icanmake3d_storefront::{app, config::StorefrontConfig, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Build the storefront router over the built-in catalog with default config.
///
/// # Panics
///
/// Panics if the default configuration or the built-in catalog is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_app() -> Router {
    let config = StorefrontConfig::from_lookup(|_| None).expect("default config");
    let catalog = Catalog::builtin().expect("built-in catalog");
    app(AppState::new(config, catalog))
}

/// A response status and headers with its decoded JSON body.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// An in-process HTTP client with a one-cookie jar.
pub struct TestClient {
    app: Router,
    cookie: Option<HeaderValue>,
}

impl TestClient {
    /// A new shopper with no session.
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// Send a POST request with an optional JSON body.
    pub async fn post(&mut self, uri: &str, body: Option<Value>) -> TestResponse {
        self.send(Method::POST, uri, body).await
    }

    /// Whether the server has issued this client a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    /// Add `item_id` to the cart.
    pub async fn add_to_cart(&mut self, item_id: &str) -> TestResponse {
        self.post("/api/cart/add", Some(serde_json::json!({ "item_id": item_id })))
            .await
    }

    /// Remove `item_id` from the cart.
    pub async fn remove_from_cart(&mut self, item_id: &str) -> TestResponse {
        self.post(
            "/api/cart/remove",
            Some(serde_json::json!({ "item_id": item_id })),
        )
        .await
    }

    #[allow(clippy::expect_used)]
    async fn send(&mut self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .expect("ascii cookie")
                .split(';')
                .next()
                .unwrap_or_default();
            self.cookie = Some(HeaderValue::from_str(pair).expect("valid cookie"));
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// The `id` of every object in a JSON array.
#[must_use]
pub fn ids(items: &Value) -> Vec<&str> {
    items
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("id").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

//! Integration tests for Gatehouse.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gatehouse-integration-tests
//! ```
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server or external service is needed.
//!
//! # Test Helpers
//!
//! [`TestStorefront`] builds the full router (session layer, access gate,
//! routes) plus a public test-only login route standing in for the host
//! platform's credential check.

use axum::{
    Form, Router,
    body::Body,
    http::{HeaderValue, Request, Response, StatusCode, header},
    routing::post,
};
use gatehouse_core::{Customer, CustomerGroupId, CustomerId, StoreId};
use gatehouse_storefront::config::StorefrontConfig;
use gatehouse_storefront::config_store::ScopedConfigStore;
use gatehouse_storefront::middleware::set_current_customer;
use gatehouse_storefront::state::AppState;
use gatehouse_storefront::{build_app, routes};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session};

/// Path of the test-only login route.
pub const TEST_LOGIN_PATH: &str = "/test/login";

/// Form accepted by the test login route.
#[derive(Debug, serde::Deserialize)]
struct LoginForm {
    customer_id: i32,
    store_id: i32,
    group_id: i32,
}

async fn test_login(session: Session, Form(form): Form<LoginForm>) -> StatusCode {
    let customer = Customer::new(
        CustomerId::new(form.customer_id),
        StoreId::new(form.store_id),
        CustomerGroupId::new(form.group_id),
    );
    match set_current_customer(&session, &customer).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// In-process storefront serving one store.
pub struct TestStorefront {
    app: Router,
}

impl TestStorefront {
    /// Build a storefront for `store_id` with the given gate settings.
    ///
    /// # Panics
    ///
    /// Panics if the test configuration is invalid.
    #[must_use]
    pub fn new(store_id: i32, config_store: ScopedConfigStore) -> Self {
        let store_id = store_id.to_string();
        let config = StorefrontConfig::from_lookup(|key| match key {
            "GATEHOUSE_BASE_URL" => Some("http://localhost:3000".to_string()),
            "GATEHOUSE_STORE_ID" => Some(store_id.clone()),
            _ => None,
        })
        .expect("valid test configuration");

        let public =
            routes::public_routes(&config.login_path).route(TEST_LOGIN_PATH, post(test_login));
        let state = AppState::new(config, config_store);
        Self {
            app: build_app(routes::gated_routes(), public, state, MemoryStore::default()),
        }
    }

    /// Send a request through the full middleware stack.
    ///
    /// # Panics
    ///
    /// Panics if the router fails, which it never does for axum routers.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// `GET path`, optionally with a session cookie.
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request("GET", path, cookie, Body::empty())).await
    }

    /// Log a customer in through the test route and return the session cookie.
    ///
    /// # Panics
    ///
    /// Panics if the login route does not set a session cookie.
    pub async fn login(&self, customer_id: i32, store_id: i32, group_id: i32) -> String {
        let body = format!("customer_id={customer_id}&store_id={store_id}&group_id={group_id}");
        let mut req = request("POST", TEST_LOGIN_PATH, None, Body::from(body));
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let response = self.send(req).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        session_cookie(&response).expect("login sets a session cookie")
    }
}

/// Build a request with an optional cookie header.
///
/// # Panics
///
/// Panics if `path` is not a valid URI.
#[must_use]
pub fn request(method: &str, path: &str, cookie: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(body).expect("valid request")
}

/// Extract `name=value` of the session cookie from a response.
#[must_use]
pub fn session_cookie<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(gatehouse_storefront::middleware::session::SESSION_COOKIE_NAME))
        .and_then(|value| value.split(';').next())
        .map(ToString::to_string)
}

/// `Location` header of a redirect response.
#[must_use]
pub fn location<B>(response: &Response<B>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

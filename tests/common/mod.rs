#![allow(dead_code)]

use axum::http::header::SET_COOKIE;
use axum::routing::get;
use axum::{Router, middleware};
use axum_test::{TestResponse, TestServer};
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Arc;

use pointmoney_login::api::handlers::{health_handler, not_found_handler};
use pointmoney_login::domain::entities::{Role, UserRecord};
use pointmoney_login::infrastructure::registry::InMemoryUserRegistry;
use pointmoney_login::infrastructure::session::SessionStore;
use pointmoney_login::state::AppState;
use pointmoney_login::web;
use pointmoney_login::web::middleware::web_auth;

pub fn admin_user() -> UserRecord {
    UserRecord::new("admin", "管理者", Role::Admin)
}

pub fn member_user() -> UserRecord {
    UserRecord::new("member01", "山田 太郎", Role::Member)
}

/// Registry with `admin`/`admin123`, `member01`/`member123` and an orphaned
/// `ghost`/`ghost123` credential that has no user record.
pub fn test_registry() -> InMemoryUserRegistry {
    let credentials: HashMap<String, String> = [
        ("admin", "admin123"),
        ("member01", "member123"),
        ("ghost", "ghost123"),
    ]
    .into_iter()
    .map(|(id, pw)| (id.to_string(), pw.to_string()))
    .collect();

    InMemoryUserRegistry::new(credentials, vec![admin_user(), member_user()]).unwrap()
}

pub fn create_test_state_with(registry: InMemoryUserRegistry, ttl_seconds: i64) -> AppState {
    let sessions = Arc::new(SessionStore::new(
        "test-signing-secret".to_string(),
        Duration::seconds(ttl_seconds),
    ));
    AppState::new(Arc::new(registry), sessions, false)
}

pub fn create_test_state() -> AppState {
    create_test_state_with(test_registry(), 3600)
}

/// Application routes without the rate limiter, which needs a peer address.
pub fn build_app(state: AppState) -> Router {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    Router::new()
        .merge(protected)
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(build_app(state)).unwrap()
}

/// Value of the named cookie in the response's `Set-Cookie` headers.
pub fn set_cookie_value(response: &TestResponse, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&prefix))
        .map(|v| {
            v[prefix.len()..]
                .split(';')
                .next()
                .unwrap_or_default()
                .to_string()
        })
}

pub fn location(response: &TestResponse) -> String {
    response
        .headers()
        .get(axum::http::header::LOCATION)
        .expect("response has no Location header")
        .to_str()
        .unwrap()
        .to_string()
}

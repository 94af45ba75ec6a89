mod common;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use std::net::SocketAddr;
use tower::ServiceExt;

use pointmoney_login::routes::app_router;

/// Sends a request through the full application stack as `peer`.
async fn send(
    app: &tower_http::normalize_path::NormalizePath<axum::Router>,
    peer: SocketAddr,
    method: &str,
    uri: &str,
) -> Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));

    app.clone().oneshot(request).await.unwrap()
}

fn peer(last_octet: u8) -> SocketAddr {
    SocketAddr::from(([10, 0, 0, last_octet], 40000))
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(common::create_test_state());

    let response = send(&app, peer(1), "GET", "/login/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = app_router(common::create_test_state());

    let response = send(&app, peer(1), "GET", "/static/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_json_not_found() {
    let app = app_router(common::create_test_state());

    let response = send(&app, peer(1), "GET", "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/nope");
}

#[tokio::test]
async fn test_protected_page_redirects_without_session() {
    let app = app_router(common::create_test_state());

    let response = send(&app, peer(1), "GET", "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_login_routes_are_rate_limited_per_peer() {
    let app = app_router(common::create_test_state());

    for _ in 0..10 {
        let response = send(&app, peer(1), "GET", "/login").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let limited = send(&app, peer(1), "GET", "/login").await;
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);

    let other = send(&app, peer(2), "GET", "/login").await;
    assert_eq!(other.status(), StatusCode::OK);

    let health = send(&app, peer(1), "GET", "/health").await;
    assert_eq!(health.status(), StatusCode::OK);
}

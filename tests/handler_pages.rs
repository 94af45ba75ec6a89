mod common;

use axum::http::StatusCode;
use pointmoney_login::application::messages::LOGGED_OUT;
use pointmoney_login::web::flash::Flash;

fn session_cookie(token: &str) -> String {
    format!("session_token={}", token)
}

#[tokio::test]
async fn test_home_requires_session() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/login");
}

#[tokio::test]
async fn test_home_rejects_unknown_token() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .get("/")
        .add_header("Cookie", session_cookie("forged-token"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/login");
}

#[tokio::test]
async fn test_home_for_member() {
    let state = common::create_test_state();
    let token = state.sessions.create(&common::member_user()).await.unwrap();
    let server = common::make_server(state);

    let response = server
        .get("/")
        .add_header("Cookie", session_cookie(&token))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("山田 太郎"));
    assert!(body.contains("member01"));
}

#[tokio::test]
async fn test_admin_page_for_admin() {
    let state = common::create_test_state();
    let token = state.sessions.create(&common::admin_user()).await.unwrap();
    let server = common::make_server(state);

    let response = server
        .get("/admin")
        .add_header("Cookie", session_cookie(&token))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("管理画面"));
    assert!(body.contains("member01"));
}

#[tokio::test]
async fn test_admin_page_redirects_member_home() {
    let state = common::create_test_state();
    let token = state.sessions.create(&common::member_user()).await.unwrap();
    let server = common::make_server(state);

    let response = server
        .get("/admin")
        .add_header("Cookie", session_cookie(&token))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/");
}

#[tokio::test]
async fn test_admin_page_requires_session() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/admin").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/login");
}

#[tokio::test]
async fn test_expired_session_redirects_to_login() {
    let state = common::create_test_state_with(common::test_registry(), 0);
    let token = state.sessions.create(&common::member_user()).await.unwrap();
    let server = common::make_server(state);

    let response = server
        .get("/")
        .add_header("Cookie", session_cookie(&token))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/login");
}

#[tokio::test]
async fn test_flash_shown_once_after_login() {
    let state = common::create_test_state();
    let server = common::make_server(state);

    let login = server
        .post("/login")
        .form(&[("login_id", "member01"), ("password", "member123")])
        .await;
    let token = common::set_cookie_value(&login, "session_token").unwrap();
    let flash = common::set_cookie_value(&login, "flash").unwrap();

    let response = server
        .get("/")
        .add_header("Cookie", format!("session_token={}; flash={}", token, flash))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("ログインしました"));
    assert_eq!(
        common::set_cookie_value(&response, "flash").as_deref(),
        Some("")
    );
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let state = common::create_test_state();
    let token = state.sessions.create(&common::admin_user()).await.unwrap();
    let server = common::make_server(state.clone());

    let response = server
        .post("/logout")
        .add_header("Cookie", session_cookie(&token))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/login");
    assert_eq!(
        common::set_cookie_value(&response, "session_token").as_deref(),
        Some("")
    );
    let flash = common::set_cookie_value(&response, "flash").unwrap();
    assert_eq!(Flash::decode(&flash), Some(Flash::success(LOGGED_OUT)));
    assert_eq!(state.sessions.active_count().await, 0);

    let after = server
        .get("/admin")
        .add_header("Cookie", session_cookie(&token))
        .await;
    after.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&after), "/login");
}

#[tokio::test]
async fn test_logout_without_session() {
    let server = common::make_server(common::create_test_state());

    let response = server.post("/logout").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/login");
}

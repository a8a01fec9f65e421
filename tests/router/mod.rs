//! Requests routed through the full application, session layer included.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use pawhaven::server::{model::app::AppState, router::routes};
use pawhaven_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::body_json;

async fn app() -> Result<Router, TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state: AppState = test.to_app_state();

    Ok(routes()
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default())))
}

fn request(method: Method, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// The `name=value` pair of the session cookie set by `resp`.
fn session_cookie(resp: &Response) -> String {
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("response sets a session cookie");

    set_cookie.split(';').next().unwrap_or_default().to_string()
}

async fn register(app: &Router, username: &str) -> String {
    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": username,
                "email": format!("{username}@example.org"),
                "password": "correct horse",
                "name": "Jane Doe"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    session_cookie(&resp)
}

#[tokio::test]
/// Expect unknown paths to answer with the JSON 404 envelope
async fn unknown_path_is_not_found() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request(Method::GET, "/api/kennels", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Endpoint not found");

    Ok(())
}

#[tokio::test]
/// Expect 405 for a known path with an unsupported method
async fn unsupported_method_is_rejected() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request(Method::PATCH, "/api/shelters", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Method not allowed");

    Ok(())
}

#[tokio::test]
/// Expect the session cookie from registration to authenticate later requests
async fn session_cookie_authenticates() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/api/auth/user", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let cookie = register(&app, "jane").await;
    let resp = app
        .oneshot(request(Method::GET, "/api/auth/user", Some(&cookie), None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["username"], "jane");
    assert_eq!(body["data"]["role"], "adopter");

    Ok(())
}

#[tokio::test]
/// Expect 400 for a query filter outside the allowed values
async fn invalid_query_filter_is_rejected() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request(Method::GET, "/api/pets?status=sleeping", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);

    Ok(())
}

#[tokio::test]
/// Expect an offset beyond the database's integer range to return an empty page
async fn oversized_offset_returns_empty_page() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(request(
            Method::GET,
            "/api/pets?offset=18446744073709551615",
            None,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["items"], json!([]));

    Ok(())
}

#[tokio::test]
/// Expect 403 when an adopter tries to add a pet
async fn adopters_cannot_create_pets() -> Result<(), TestError> {
    let app = app().await?;
    let cookie = register(&app, "jane").await;

    let resp = app
        .oneshot(request(
            Method::POST,
            "/api/pets",
            Some(&cookie),
            Some(json!({ "name": "Biscuit", "species": "dog" })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

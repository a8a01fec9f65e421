use pawhaven::server::{
    controller::auth::{get_user, login, logout, register},
    model::session::user::SessionUserId,
};

use super::*;

fn registration() -> serde_json::Value {
    json!({
        "username": "jane",
        "email": "jane@example.org",
        "password": "correct horse",
        "name": "Jane Doe"
    })
}

#[tokio::test]
/// Expect 201 with the new account stored in session
async fn register_logs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = register(
        State(test.to_app_state()),
        test.session.clone(),
        input(registration()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["username"], "jane");
    assert_eq!(body["data"]["role"], "adopter");

    let session_user = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user, body["data"]["id"].as_i64().map(|id| id as i32));

    Ok(())
}

#[tokio::test]
/// Expect 409 when the username is already registered
async fn register_rejects_duplicate_username() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_user("jane").await?;

    let resp = register(
        State(test.to_app_state()),
        test.session.clone(),
        input(registration()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 naming every invalid field
async fn register_reports_invalid_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = register(
        State(test.to_app_state()),
        test.session.clone(),
        input(json!({ "username": "jo", "email": "not-an-email", "password": "short" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    for field in ["username", "email", "password"] {
        assert!(body["errors"][field].is_array(), "missing error for {field}");
    }

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password and 200 for the right one
async fn login_checks_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    register(State(state.clone()), test.session.clone(), input(registration()))
        .await
        .into_response();
    test.session.flush().await?;

    let resp = login(
        State(state.clone()),
        test.session.clone(),
        input(json!({ "username": "jane", "password": "wrong password" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    let resp = login(
        State(state),
        test.session.clone(),
        input(json!({ "username": "jane", "password": "correct horse" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_some());

    Ok(())
}

#[tokio::test]
/// Expect logout to remove the user from session
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("jane").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let resp = logout(AuthUser::from(&user), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect the current profile without the password hash
async fn get_user_returns_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("jane").await?;

    let resp = get_user(State(test.to_app_state()), AuthUser::from(&user))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["email"], "jane@example.org");
    assert!(body["data"].get("password_hash").is_none());

    Ok(())
}

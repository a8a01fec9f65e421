use entity::sea_orm_active_enums::Role;
use pawhaven::server::{
    controller::training::{
        create_training_module, list_training_modules, update_training_progress,
        TrainingModuleListParams,
    },
    validation::Query,
};

use super::*;

fn safety_module() -> serde_json::Value {
    json!({
        "title": "Handling nervous dogs",
        "description": "Reading body language before approaching",
        "content": "Approach side on, avoid eye contact and let the dog come to you first.",
        "duration_minutes": 30,
        "difficulty": "beginner",
        "category": "safety",
        "is_required": true
    })
}

async fn create_module(state: &AppState, staff: &entity::users::Model) -> i32 {
    let resp = create_training_module(
        State(state.clone()),
        AuthUser::from(staff),
        input(safety_module()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    body_json(resp).await["data"]["id"].as_i64().unwrap() as i32
}

#[tokio::test]
/// Expect 400 for texts below their minimum length
async fn module_texts_have_minimum_lengths() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;

    let mut body = safety_module();
    body["title"] = json!("Dogs");
    body["content"] = json!("Too short");

    let resp = create_training_module(
        State(test.to_app_state()),
        AuthUser::from(&staff),
        input(body),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["errors"]["title"].is_array());
    assert!(body["errors"]["content"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect new modules to report not_started for the caller
async fn listing_includes_default_progress() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let volunteer = test.user().insert_user_with_role("val", Role::Volunteer).await?;
    let state: AppState = test.to_app_state();
    create_module(&state, &staff).await;

    let resp = list_training_modules(
        State(state),
        AuthUser::from(&volunteer),
        Query(TrainingModuleListParams {
            category: None,
            difficulty: None,
            required_only: true,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"][0]["progress"]["status"], "not_started");
    assert_eq!(body["data"][0]["progress"]["progress_percentage"], 0);

    Ok(())
}

#[tokio::test]
/// Expect the status to follow the percentage and completion to force 100
async fn progress_derives_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let volunteer = test.user().insert_user_with_role("val", Role::Volunteer).await?;
    let state: AppState = test.to_app_state();
    let module_id = create_module(&state, &staff).await;

    let resp = update_training_progress(
        State(state.clone()),
        AuthUser::from(&volunteer),
        Path(module_id),
        input(json!({ "progress_percentage": 40 })),
    )
    .await
    .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "in_progress");
    assert!(body["data"]["started_at"].is_string());

    let resp = update_training_progress(
        State(state),
        AuthUser::from(&volunteer),
        Path(module_id),
        input(json!({ "status": "completed" })),
    )
    .await
    .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["progress_percentage"], 100);
    assert!(body["data"]["completed_at"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect 400 outside 0..=100 and 404 for a missing module
async fn progress_is_checked() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let volunteer = test.user().insert_user_with_role("val", Role::Volunteer).await?;
    let state: AppState = test.to_app_state();

    let resp = update_training_progress(
        State(state.clone()),
        AuthUser::from(&volunteer),
        Path(1),
        input(json!({ "progress_percentage": 150 })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = update_training_progress(
        State(state),
        AuthUser::from(&volunteer),
        Path(1),
        input(json!({ "progress_percentage": 10 })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

use entity::sea_orm_active_enums::Role;
use pawhaven::server::controller::volunteer::{
    assign_volunteer_task, cancel_volunteer_task, complete_volunteer_task,
    create_volunteer_application, create_volunteer_task, start_volunteer_task,
    update_volunteer_application_status,
};

use super::*;

fn volunteer_application() -> serde_json::Value {
    json!({
        "application_type": "animal_care",
        "availability": "Weekday evenings",
        "motivation": "I walk dogs for neighbours already",
        "emergency_contact_name": "Sam Doe",
        "emergency_contact_phone": "+1 555 010 2030"
    })
}

#[tokio::test]
/// Expect a second application to conflict while the first is open
async fn one_open_application_per_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = create_volunteer_application(
        State(state.clone()),
        AuthUser::from(&user),
        input(volunteer_application()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = create_volunteer_application(
        State(state),
        AuthUser::from(&user),
        input(volunteer_application()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a missing motivation and a malformed phone number
async fn application_fields_are_validated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("jane").await?;

    let mut body = volunteer_application();
    body["motivation"] = json!(null);
    body["emergency_contact_phone"] = json!("call my mum");

    let resp = create_volunteer_application(
        State(test.to_app_state()),
        AuthUser::from(&user),
        input(body),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["errors"]["motivation"].is_array());
    assert!(body["errors"]["emergency_contact_phone"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect staff approval to mark the application approved
async fn staff_approves_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let user = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = create_volunteer_application(
        State(state.clone()),
        AuthUser::from(&user),
        input(volunteer_application()),
    )
    .await
    .into_response();
    let application_id = body_json(resp).await["data"]["id"].as_i64().unwrap() as i32;

    let resp = update_volunteer_application_status(
        State(state),
        AuthUser::from(&staff),
        Path(application_id),
        input(json!({ "status": "approved", "notes": "Great references" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "approved");
    assert_eq!(body["data"]["reviewed_by"], staff.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 naming shelter_id when the shelter does not exist
async fn task_requires_existing_shelter() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;

    let resp = create_volunteer_task(
        State(test.to_app_state()),
        AuthUser::from(&staff),
        input(json!({ "title": "Kennel cleaning", "shelter_id": 77 })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["errors"]["shelter_id"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect a volunteer to take, start and complete a task while others are refused
async fn task_lifecycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let volunteer = test.user().insert_user_with_role("val", Role::Volunteer).await?;
    let adopter = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = create_volunteer_task(
        State(state.clone()),
        AuthUser::from(&staff),
        input(json!({ "title": "Kennel cleaning", "task_date": "2099-03-01 08:00:00" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "open");
    assert_eq!(body["data"]["urgency"], "medium");
    let task_id = body["data"]["id"].as_i64().unwrap() as i32;

    let resp = assign_volunteer_task(
        State(state.clone()),
        AuthUser::from(&adopter),
        Path(task_id),
        input(json!({})),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = assign_volunteer_task(
        State(state.clone()),
        AuthUser::from(&volunteer),
        Path(task_id),
        input(json!({})),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["assigned_to"], volunteer.id);

    let resp = start_volunteer_task(State(state.clone()), AuthUser::from(&adopter), Path(task_id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = start_volunteer_task(State(state.clone()), AuthUser::from(&volunteer), Path(task_id))
        .await
        .into_response();
    assert_eq!(body_json(resp).await["data"]["status"], "in_progress");

    let resp = complete_volunteer_task(
        State(state.clone()),
        AuthUser::from(&volunteer),
        Path(task_id),
    )
    .await
    .into_response();
    assert_eq!(body_json(resp).await["data"]["status"], "completed");

    let resp = cancel_volunteer_task(State(state), AuthUser::from(&staff), Path(task_id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a volunteer ID outside the key range instead of assigning the caller
async fn assign_rejects_out_of_range_volunteer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let state: AppState = test.to_app_state();

    let resp = create_volunteer_task(
        State(state.clone()),
        AuthUser::from(&staff),
        input(json!({ "title": "Kennel cleaning" })),
    )
    .await
    .into_response();
    let task_id = body_json(resp).await["data"]["id"].as_i64().unwrap() as i32;

    let resp = assign_volunteer_task(
        State(state),
        AuthUser::from(&staff),
        Path(task_id),
        input(json!({ "volunteer_id": 4_294_967_296_i64 })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["errors"]["volunteer_id"].is_array());
    assert!(body["data"].is_null());

    Ok(())
}

use entity::sea_orm_active_enums::{PetStatus, Role};
use pawhaven::server::{
    controller::{
        appointment::create_appointment,
        notification::{list_notifications, mark_notifications_read, NotificationListParams},
    },
    validation::Query,
};

use super::*;

fn all() -> Query<NotificationListParams> {
    Query(NotificationListParams {
        unread_only: false,
        notification_type: None,
        limit: None,
        offset: None,
    })
}

/// Books an appointment so every staff account receives one notification.
async fn notify_staff(state: &AppState, adopter: &entity::users::Model, pet_id: i32, time: &str) {
    let resp = create_appointment(
        State(state.clone()),
        AuthUser::from(adopter),
        input(json!({
            "appointment_type": "meet_greet",
            "appointment_date": "2099-05-01",
            "appointment_time": time,
            "pet_id": pet_id
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
/// Expect 400 when neither mark_all nor notification_ids is given
async fn requires_a_target() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = mark_notifications_read(State(state.clone()), AuthUser::from(&user), input(json!({})))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = mark_notifications_read(
        State(state),
        AuthUser::from(&user),
        input(json!({ "notification_ids": [1, "two"] })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["errors"]["notification_ids"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect mark_all to clear only the caller's unread notifications
async fn mark_all_touches_only_own_rows() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let sam = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let ada = test.user().insert_user_with_role("ada", Role::Admin).await?;
    let jane = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let state: AppState = test.to_app_state();

    notify_staff(&state, &jane, pet.id, "10:00").await;
    notify_staff(&state, &jane, pet.id, "11:00").await;

    let resp = mark_notifications_read(
        State(state.clone()),
        AuthUser::from(&sam),
        input(json!({ "mark_all": true })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["marked_count"], 2);

    let resp = list_notifications(State(state), AuthUser::from(&ada), all())
        .await
        .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["total_count"], 2);
    assert_eq!(body["data"]["unread_count"], 2);
    assert_eq!(
        body["data"]["notifications"][0]["type_display"],
        "New Appointment"
    );

    Ok(())
}

#[tokio::test]
/// Expect ids belonging to someone else to be ignored
async fn ids_of_other_users_are_ignored() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let sam = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let jane = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let state: AppState = test.to_app_state();

    notify_staff(&state, &jane, pet.id, "10:00").await;

    let resp = list_notifications(State(state.clone()), AuthUser::from(&sam), all())
        .await
        .into_response();
    let notification_id = body_json(resp).await["data"]["notifications"][0]["id"].clone();

    let resp = mark_notifications_read(
        State(state.clone()),
        AuthUser::from(&jane),
        input(json!({ "notification_ids": [notification_id.clone()] })),
    )
    .await
    .into_response();
    assert_eq!(body_json(resp).await["data"]["marked_count"], 0);

    let resp = mark_notifications_read(
        State(state),
        AuthUser::from(&sam),
        input(json!({ "notification_ids": [notification_id] })),
    )
    .await
    .into_response();
    assert_eq!(body_json(resp).await["data"]["marked_count"], 1);

    Ok(())
}

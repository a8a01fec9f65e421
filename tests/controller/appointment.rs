use entity::sea_orm_active_enums::{PetStatus, Role};
use pawhaven::server::{
    controller::{
        appointment::{
            create_appointment, list_appointments, update_appointment_status,
            AppointmentListParams,
        },
        notification::{list_notifications, NotificationListParams},
    },
    validation::Query,
};

use super::*;

fn future_visit(pet_id: i32) -> serde_json::Value {
    json!({
        "appointment_type": "meet_greet",
        "appointment_date": "2099-05-01",
        "appointment_time": "14:30",
        "pet_id": pet_id
    })
}

async fn item_count(resp: axum::response::Response) -> usize {
    let body = body_json(resp).await;

    body["data"].as_array().map_or(0, Vec::len)
}

#[tokio::test]
/// Expect 201 at the pet's shelter with staff notified
async fn books_visit_and_notifies_staff() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let adopter = test.user().insert_user("jane").await?;
    let shelter = test.shelter().insert_shelter("Northside").await?;
    let pet = test
        .pet()
        .insert_pet_in_shelter("Biscuit", PetStatus::Available, Some(shelter.id))
        .await?;
    let state: AppState = test.to_app_state();

    let resp = create_appointment(
        State(state.clone()),
        AuthUser::from(&adopter),
        input(future_visit(pet.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["shelter_id"], shelter.id);
    assert_eq!(body["data"]["status"], "scheduled");

    let resp = list_notifications(
        State(state),
        AuthUser::from(&staff),
        Query(NotificationListParams {
            unread_only: true,
            notification_type: None,
            limit: None,
            offset: None,
        }),
    )
    .await
    .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["unread_count"], 1);
    assert_eq!(
        body["data"]["notifications"][0]["title"],
        "New Appointment Scheduled"
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 for a time in the past and 409 for a second booking at the same time
async fn rejects_past_and_double_bookings() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let adopter = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let state: AppState = test.to_app_state();

    let resp = create_appointment(
        State(state.clone()),
        AuthUser::from(&adopter),
        input(json!({
            "appointment_type": "adoption",
            "appointment_date": "2001-01-01",
            "appointment_time": "09:00"
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = create_appointment(
        State(state.clone()),
        AuthUser::from(&adopter),
        input(future_visit(pet.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = create_appointment(
        State(state),
        AuthUser::from(&adopter),
        input(future_visit(pet.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect the owner to cancel but not confirm, and staff to confirm
async fn owner_may_only_cancel() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let adopter = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let state: AppState = test.to_app_state();

    let resp = create_appointment(
        State(state.clone()),
        AuthUser::from(&adopter),
        input(future_visit(pet.id)),
    )
    .await
    .into_response();
    let appointment_id = body_json(resp).await["data"]["id"].as_i64().unwrap() as i32;

    let resp = update_appointment_status(
        State(state.clone()),
        AuthUser::from(&adopter),
        Path(appointment_id),
        input(json!({ "status": "confirmed" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = update_appointment_status(
        State(state.clone()),
        AuthUser::from(&staff),
        Path(appointment_id),
        input(json!({ "status": "confirmed" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = update_appointment_status(
        State(state),
        AuthUser::from(&adopter),
        Path(appointment_id),
        input(json!({ "status": "cancelled", "notes": "Moving away" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["status"], "cancelled");

    Ok(())
}

#[tokio::test]
/// Expect adopters to see only their own appointments and vets to see all
async fn listing_depends_on_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let vet = test.user().insert_user_with_role("vera", Role::Vet).await?;
    let jane = test.user().insert_user("jane").await?;
    let omar = test.user().insert_user("omar").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let state: AppState = test.to_app_state();

    for user in [&jane, &omar] {
        create_appointment(
            State(state.clone()),
            AuthUser::from(user),
            input(future_visit(pet.id)),
        )
        .await
        .into_response();
    }

    let resp = list_appointments(
        State(state.clone()),
        AuthUser::from(&jane),
        Query(AppointmentListParams { status: None }),
    )
    .await
    .into_response();
    assert_eq!(item_count(resp).await, 1);

    let resp = list_appointments(
        State(state),
        AuthUser::from(&vet),
        Query(AppointmentListParams { status: None }),
    )
    .await
    .into_response();
    assert_eq!(item_count(resp).await, 2);

    Ok(())
}

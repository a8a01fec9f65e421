use entity::sea_orm_active_enums::{FosterStatus, PetStatus, Role};
use pawhaven::server::controller::foster::{create_foster_record, update_foster_status};

use super::*;

#[tokio::test]
/// Expect 400 when the end date falls before the start date
async fn rejects_end_before_start() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let parent = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;

    let resp = create_foster_record(
        State(test.to_app_state()),
        AuthUser::from(&parent),
        input(json!({
            "pet_id": pet.id,
            "start_date": "2030-06-10",
            "end_date": "2030-06-01"
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["errors"]["end_date"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect 409 when the pet is already fostered
async fn rejects_unavailable_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let parent = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Fostered).await?;

    let resp = create_foster_record(
        State(test.to_app_state()),
        AuthUser::from(&parent),
        input(json!({ "pet_id": pet.id, "start_date": "2030-06-01" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect activation to foster the pet and completion to make it available again
async fn placement_lifecycle_moves_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let parent = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let record = test
        .record()
        .insert_foster_record(parent.id, pet.id, FosterStatus::Pending)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = update_foster_status(
        State(state.clone()),
        AuthUser::from(&staff),
        Path(record.id),
        input(json!({ "status": "active" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["pet_status"], "fostered");

    let resp = update_foster_status(
        State(state),
        AuthUser::from(&staff),
        Path(record.id),
        input(json!({ "status": "completed" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["foster_record"]["status"], "completed");
    assert_eq!(body["data"]["pet_status"], "available");

    Ok(())
}

#[tokio::test]
/// Expect 400 for a status outside the foster status enum
async fn rejects_unknown_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;

    let resp = update_foster_status(
        State(test.to_app_state()),
        AuthUser::from(&staff),
        Path(1),
        input(json!({ "status": "finished" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

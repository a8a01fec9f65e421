use entity::sea_orm_active_enums::{PetStatus, Role};
use pawhaven::server::{
    controller::pet::{create_pet, delete_pet, get_pet, update_pet},
    validation::Input,
};

use super::*;

#[tokio::test]
/// Expect 201 with defaults applied and the creating staff member recorded
async fn staff_creates_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let shelter = test.shelter().insert_shelter("Northside").await?;

    let resp = create_pet(
        State(test.to_app_state()),
        AuthUser::from(&staff),
        input(json!({ "name": "Biscuit", "species": "dog", "age": "3", "shelter_id": shelter.id })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "available");
    assert_eq!(body["data"]["gender"], "unknown");
    assert_eq!(body["data"]["age"], 3);
    assert_eq!(body["data"]["shelter_name"], "Northside");
    assert_eq!(body["data"]["added_by_staff_id"], staff.id);

    Ok(())
}

#[tokio::test]
/// Expect 403 when an adopter tries to add a pet
async fn adopter_cannot_create_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let adopter = test.user().insert_user("jane").await?;

    let resp = create_pet(
        State(test.to_app_state()),
        AuthUser::from(&adopter),
        input(json!({ "name": "Biscuit" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a missing name and an unknown gender
async fn create_pet_validates_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;

    let resp = create_pet(
        State(test.to_app_state()),
        AuthUser::from(&staff),
        input(json!({ "gender": "robot", "image_url": "not a url" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["errors"]["name"].is_array());
    assert!(body["errors"]["gender"].is_array());
    assert!(body["errors"]["image_url"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect 409 when staff try to move a pet off medical hold to anything but available
async fn update_pet_enforces_status_changes() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::MedicalHold).await?;
    let state: AppState = test.to_app_state();

    let resp = update_pet(
        State(state.clone()),
        AuthUser::from(&staff),
        Path(pet.id),
        input(json!({ "status": "adopted" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = update_pet(
        State(state),
        AuthUser::from(&staff),
        Path(pet.id),
        input(json!({ "status": "available", "breed": null })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "available");
    assert!(body["data"]["breed"].is_null());

    Ok(())
}

#[tokio::test]
/// Expect 404 for a pet that does not exist
async fn missing_pet_is_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Admin).await?;
    let state: AppState = test.to_app_state();

    let resp = get_pet(State(state.clone()), Path(42)).await.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = delete_pet(State(state.clone()), AuthUser::from(&staff), Path(42))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = update_pet(
        State(state),
        AuthUser::from(&staff),
        Path(42),
        Input::default(),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

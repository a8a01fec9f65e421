use entity::sea_orm_active_enums::{ApplicationStatus, PetStatus, Role};
use pawhaven::server::{
    controller::application::{
        create_application, list_applications, update_application_status, ApplicationListParams,
    },
    validation::Query,
};

use super::*;

#[tokio::test]
/// Expect 201 for an available pet and 409 for a second pending application
async fn one_pending_application_per_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let adopter = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let state: AppState = test.to_app_state();

    let resp = create_application(
        State(state.clone()),
        AuthUser::from(&adopter),
        input(json!({ "pet_id": pet.id, "notes": "Fenced garden" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = create_application(
        State(state),
        AuthUser::from(&adopter),
        input(json!({ "pet_id": pet.id })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 without a pet_id and 404 for a pet that does not exist
async fn create_application_checks_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let adopter = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = create_application(State(state.clone()), AuthUser::from(&adopter), input(json!({})))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = create_application(
        State(state),
        AuthUser::from(&adopter),
        input(json!({ "pet_id": 99 })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect approval to adopt the pet and a second approval for the same pet to leave it adopted
async fn approving_adopts_pet() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let jane = test.user().insert_user("jane").await?;
    let omar = test.user().insert_user("omar").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let first = test
        .record()
        .insert_application(jane.id, pet.id, ApplicationStatus::Pending)
        .await?;
    let second = test
        .record()
        .insert_application(omar.id, pet.id, ApplicationStatus::Pending)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = update_application_status(
        State(state.clone()),
        AuthUser::from(&staff),
        Path(first.id),
        input(json!({ "status": "approved" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["application"]["status"], "approved");
    assert_eq!(body["data"]["pet_status"], "adopted");

    let resp = update_application_status(
        State(state),
        AuthUser::from(&staff),
        Path(second.id),
        input(json!({ "status": "approved" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["pet_status"], "adopted");

    Ok(())
}

#[tokio::test]
/// Expect 403 for adopters deciding applications and 409 for an approved application
async fn decisions_are_guarded() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Admin).await?;
    let jane = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Adopted).await?;
    let application = test
        .record()
        .insert_application(jane.id, pet.id, ApplicationStatus::Approved)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = update_application_status(
        State(state.clone()),
        AuthUser::from(&jane),
        Path(application.id),
        input(json!({ "status": "withdrawn" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = update_application_status(
        State(state),
        AuthUser::from(&staff),
        Path(application.id),
        input(json!({ "status": "rejected" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect the staff listing to honor the status filter
async fn staff_list_filters_by_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let jane = test.user().insert_user("jane").await?;
    let rex = test.pet().insert_pet("Rex", PetStatus::Available).await?;
    let tom = test.pet().insert_pet("Tom", PetStatus::Available).await?;
    test.record()
        .insert_application(jane.id, rex.id, ApplicationStatus::Pending)
        .await?;
    test.record()
        .insert_application(jane.id, tom.id, ApplicationStatus::Rejected)
        .await?;

    let resp = list_applications(
        State(test.to_app_state()),
        AuthUser::from(&staff),
        Query(ApplicationListParams {
            status: Some(ApplicationStatus::Rejected),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["pet_name"], "Tom");

    Ok(())
}

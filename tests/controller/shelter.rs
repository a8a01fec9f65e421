use entity::sea_orm_active_enums::Role;
use pawhaven::server::controller::shelter::{create_shelter, delete_shelter, update_shelter};

use super::*;

fn shelter_body() -> serde_json::Value {
    json!({
        "name": "Harbor Street Shelter",
        "address": "12 Harbor Street",
        "phone": "+1 555 010 2030",
        "email": "hello@harbor.example.org",
        "website": "https://harbor.example.org"
    })
}

#[tokio::test]
/// Expect only admins to create shelters
async fn create_requires_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let admin = test.user().insert_user_with_role("ada", Role::Admin).await?;
    let state: AppState = test.to_app_state();

    let resp = create_shelter(State(state.clone()), AuthUser::from(&staff), input(shelter_body()))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = create_shelter(State(state), AuthUser::from(&admin), input(shelter_body()))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["name"], "Harbor Street Shelter");

    Ok(())
}

#[tokio::test]
/// Expect 400 naming each malformed contact field
async fn contact_fields_are_validated() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let admin = test.user().insert_user_with_role("ada", Role::Admin).await?;

    let mut body = shelter_body();
    body["email"] = json!("not-an-email");
    body["website"] = json!("harbor");

    let resp = create_shelter(State(test.to_app_state()), AuthUser::from(&admin), input(body))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["website"].is_array());

    Ok(())
}

#[tokio::test]
/// Expect null to clear an optional field while omitted fields stay
async fn update_patches_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let admin = test.user().insert_user_with_role("ada", Role::Admin).await?;
    let shelter = test.shelter().insert_shelter("Harbor").await?;

    let resp = update_shelter(
        State(test.to_app_state()),
        AuthUser::from(&admin),
        Path(shelter.id),
        input(json!({ "operating_hours": "9-5", "phone": null })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["name"], "Harbor");
    assert_eq!(body["data"]["operating_hours"], "9-5");
    assert!(body["data"]["phone"].is_null());

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting a missing shelter
async fn delete_missing_shelter() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_pet_tables().build().await?;
    let admin = test.user().insert_user_with_role("ada", Role::Admin).await?;

    let resp = delete_shelter(State(test.to_app_state()), AuthUser::from(&admin), Path(99))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

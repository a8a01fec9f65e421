use entity::sea_orm_active_enums::{PetStatus, Role};
use pawhaven::server::controller::report::get_dashboard;

use super::*;

#[tokio::test]
/// Expect 403 for adopters
async fn adopters_cannot_view_dashboard() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let adopter = test.user().insert_user("jane").await?;

    let resp = get_dashboard(State(test.to_app_state()), AuthUser::from(&adopter))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect counts by status, with the medical summary shown to vets only
async fn medical_summary_depends_on_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let vet = test.user().insert_user_with_role("vera", Role::Vet).await?;
    test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    test.pet().insert_pet("Rex", PetStatus::Available).await?;
    test.pet().insert_pet("Tom", PetStatus::Adopted).await?;
    let state: AppState = test.to_app_state();

    let resp = get_dashboard(State(state.clone()), AuthUser::from(&staff))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["pets"]["available"], 2);
    assert_eq!(body["data"]["pets"]["adopted"], 1);
    assert_eq!(body["data"]["users"]["vet"], 1);
    assert!(body["data"].get("medical").is_none());

    let resp = get_dashboard(State(state), AuthUser::from(&vet))
        .await
        .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["medical"]["recent_records"], 0);

    Ok(())
}

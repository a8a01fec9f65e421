use entity::sea_orm_active_enums::{ApplicationStatus, PetStatus, Role};
use pawhaven::server::controller::user::{delete_user, get_stats, update_profile, update_role};

use super::*;

#[tokio::test]
/// Expect admins to be unable to delete their own account
async fn admin_cannot_delete_self() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let admin = test.user().insert_user_with_role("ada", Role::Admin).await?;
    let jane = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = delete_user(State(state.clone()), AuthUser::from(&admin), Path(admin.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = delete_user(State(state.clone()), AuthUser::from(&admin), Path(jane.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = delete_user(State(state), AuthUser::from(&admin), Path(jane.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect role changes to be admin only and limited to known roles
async fn role_changes_are_guarded() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let admin = test.user().insert_user_with_role("ada", Role::Admin).await?;
    let jane = test.user().insert_user("jane").await?;
    let state: AppState = test.to_app_state();

    let resp = update_role(
        State(state.clone()),
        AuthUser::from(&staff),
        Path(jane.id),
        input(json!({ "role": "admin" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = update_role(
        State(state.clone()),
        AuthUser::from(&admin),
        Path(jane.id),
        input(json!({ "role": "superuser" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = update_role(
        State(state),
        AuthUser::from(&admin),
        Path(jane.id),
        input(json!({ "role": "volunteer" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["role"], "volunteer");

    Ok(())
}

#[tokio::test]
/// Expect 409 when the new email belongs to someone else
async fn profile_email_must_be_free() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let jane = test.user().insert_user("jane").await?;
    test.user().insert_user("omar").await?;

    let resp = update_profile(
        State(test.to_app_state()),
        AuthUser::from(&jane),
        input(json!({ "email": "omar@example.org" })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect the counters to cover only the caller's rows
async fn stats_count_own_rows() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let jane = test.user().insert_user("jane").await?;
    let omar = test.user().insert_user("omar").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    test.record()
        .insert_application(jane.id, pet.id, ApplicationStatus::Pending)
        .await?;
    test.record()
        .insert_application(omar.id, pet.id, ApplicationStatus::Pending)
        .await?;

    let resp = get_stats(State(test.to_app_state()), AuthUser::from(&jane))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["applications_total"], 1);
    assert_eq!(body["data"]["applications_pending"], 1);
    assert_eq!(body["data"]["favorites"], 0);

    Ok(())
}

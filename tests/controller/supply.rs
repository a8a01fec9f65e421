use entity::sea_orm_active_enums::{FosterStatus, PetStatus, Role};
use pawhaven::server::controller::supply::{create_supply_request, update_supply_status};

use super::*;

fn food_request(foster_record_id: i32) -> serde_json::Value {
    json!({
        "foster_record_id": foster_record_id,
        "item_name": "Kitten formula",
        "quantity": 2,
        "estimated_cost": "18.50"
    })
}

#[tokio::test]
/// Expect 201 with default category and urgency for an active placement
async fn requests_supplies_for_active_placement() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let parent = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Fostered).await?;
    let record = test
        .record()
        .insert_foster_record(parent.id, pet.id, FosterStatus::Active)
        .await?;

    let resp = create_supply_request(
        State(test.to_app_state()),
        AuthUser::from(&parent),
        input(food_request(record.id)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["category"], "other");
    assert_eq!(body["data"]["urgency"], "medium");
    assert_eq!(body["data"]["estimated_cost"], 18.5);
    assert_eq!(body["data"]["status_display"], "Pending");

    Ok(())
}

#[tokio::test]
/// Expect 400 for a zero or negative quantity
async fn quantity_must_be_positive() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let parent = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Fostered).await?;
    let record = test
        .record()
        .insert_foster_record(parent.id, pet.id, FosterStatus::Active)
        .await?;
    let state: AppState = test.to_app_state();

    for quantity in [0, -3] {
        let mut body = food_request(record.id);
        body["quantity"] = json!(quantity);

        let resp = create_supply_request(State(state.clone()), AuthUser::from(&parent), input(body))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert!(body["errors"]["quantity"].is_array());
    }

    Ok(())
}

#[tokio::test]
/// Expect 404 for someone else's placement and 400 for one that is not active
async fn placement_must_be_own_and_active() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let jane = test.user().insert_user("jane").await?;
    let omar = test.user().insert_user("omar").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;
    let record = test
        .record()
        .insert_foster_record(jane.id, pet.id, FosterStatus::Pending)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = create_supply_request(
        State(state.clone()),
        AuthUser::from(&omar),
        input(food_request(record.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = create_supply_request(
        State(state),
        AuthUser::from(&jane),
        input(food_request(record.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect staff to approve a pending request but not skip straight to delivered
async fn status_follows_fulfilment_order() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
    let parent = test.user().insert_user("jane").await?;
    let pet = test.pet().insert_pet("Biscuit", PetStatus::Fostered).await?;
    let record = test
        .record()
        .insert_foster_record(parent.id, pet.id, FosterStatus::Active)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = create_supply_request(
        State(state.clone()),
        AuthUser::from(&parent),
        input(food_request(record.id)),
    )
    .await
    .into_response();
    let request_id = body_json(resp).await["data"]["id"].as_i64().unwrap() as i32;

    let resp = update_supply_status(
        State(state.clone()),
        AuthUser::from(&parent),
        Path(request_id),
        input(json!({ "status": "approved" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = update_supply_status(
        State(state.clone()),
        AuthUser::from(&staff),
        Path(request_id),
        input(json!({ "status": "delivered" })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = update_supply_status(
        State(state),
        AuthUser::from(&staff),
        Path(request_id),
        input(json!({ "status": "approved", "actual_cost": 17.25 })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "approved");
    assert_eq!(body["data"]["actual_cost"], 17.25);

    Ok(())
}

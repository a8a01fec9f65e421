use entity::sea_orm_active_enums::{SupplyCategory, SupplyStatus, SupplyUrgency};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct NewSupplyRequest {
    pub foster_record_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub category: SupplyCategory,
    pub urgency: SupplyUrgency,
    pub description: Option<String>,
    pub estimated_cost: Option<f64>,
}

pub struct SupplyRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupplyRequestRepository<'a, C> {
    /// Creates a new instance of [`SupplyRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending supply request.
    pub async fn create(
        &self,
        request: NewSupplyRequest,
    ) -> Result<entity::supply_requests::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::supply_requests::ActiveModel {
            foster_record_id: ActiveValue::Set(request.foster_record_id),
            item_name: ActiveValue::Set(request.item_name),
            quantity: ActiveValue::Set(request.quantity),
            category: ActiveValue::Set(request.category),
            urgency: ActiveValue::Set(request.urgency),
            description: ActiveValue::Set(request.description),
            estimated_cost: ActiveValue::Set(request.estimated_cost),
            actual_cost: ActiveValue::Set(None),
            status: ActiveValue::Set(SupplyStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            delivered_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::supply_requests::Model>, DbErr> {
        entity::prelude::SupplyRequests::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Lists requests newest first, optionally narrowed to one foster parent's records.
    pub async fn list(
        &self,
        foster_parent_id: Option<i32>,
        status: Option<SupplyStatus>,
    ) -> Result<Vec<entity::supply_requests::Model>, DbErr> {
        let mut query = entity::prelude::SupplyRequests::find();

        if let Some(foster_parent_id) = foster_parent_id {
            query = query
                .join(
                    sea_orm::JoinType::InnerJoin,
                    entity::supply_requests::Relation::FosterRecords.def(),
                )
                .filter(entity::foster_records::Column::FosterParentId.eq(foster_parent_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::supply_requests::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::supply_requests::Column::CreatedAt)
            .order_by_desc(entity::supply_requests::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status; delivery stamps `delivered_at` and records the final cost when given.
    pub async fn update_status(
        &self,
        request: entity::supply_requests::Model,
        status: SupplyStatus,
        actual_cost: Option<f64>,
    ) -> Result<entity::supply_requests::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let mut request_am = request.into_active_model();
        request_am.status = ActiveValue::Set(status);
        if status == SupplyStatus::Delivered {
            request_am.delivered_at = ActiveValue::Set(Some(now));
        }
        if let Some(actual_cost) = actual_cost {
            request_am.actual_cost = ActiveValue::Set(Some(actual_cost));
        }
        request_am.updated_at = ActiveValue::Set(now);

        request_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod list {
        use entity::{
            prelude::*,
            sea_orm_active_enums::{FosterStatus, PetStatus, SupplyCategory, SupplyUrgency},
        };
        use pawhaven_test_utils::prelude::*;

        use crate::server::data::supply_request::{NewSupplyRequest, SupplyRequestRepository};

        fn request(foster_record_id: i32) -> NewSupplyRequest {
            NewSupplyRequest {
                foster_record_id,
                item_name: "Kibble".to_string(),
                quantity: 2,
                category: SupplyCategory::Food,
                urgency: SupplyUrgency::Medium,
                description: None,
                estimated_cost: Some(24.5),
            }
        }

        /// Expect a foster parent to only see requests on their own records
        #[tokio::test]
        async fn filters_by_foster_parent() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(FosterRecords)
                .with_table(SupplyRequests)
                .build()
                .await?;
            let jane = test.user().insert_user("jane").await?;
            let omar = test.user().insert_user("omar").await?;
            let pet = test.pet().insert_pet("Biscuit", PetStatus::Fostered).await?;
            let janes = test
                .record()
                .insert_foster_record(jane.id, pet.id, FosterStatus::Active)
                .await?;
            let omars = test
                .record()
                .insert_foster_record(omar.id, pet.id, FosterStatus::Active)
                .await?;

            let repo = SupplyRequestRepository::new(&test.db);
            repo.create(request(janes.id)).await?;
            repo.create(request(omars.id)).await?;

            let own = repo.list(Some(jane.id), None).await?;
            let all = repo.list(None, None).await?;

            assert_eq!(own.len(), 1);
            assert_eq!(own[0].foster_record_id, janes.id);
            assert_eq!(all.len(), 2);

            Ok(())
        }
    }
}

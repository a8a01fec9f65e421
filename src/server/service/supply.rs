use entity::sea_orm_active_enums::{FosterStatus, NotificationType, SupplyStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::supply::SupplyRequestDto,
    server::{
        data::{
            foster_record::FosterRecordRepository,
            notification::NewNotification,
            pet::PetRepository,
            supply_request::{NewSupplyRequest, SupplyRequestRepository},
            user::UserRepository,
        },
        error::Error,
        model::auth::AuthUser,
        service::notification::notify_staff,
    },
};

pub struct SupplyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupplyService<'a> {
    /// Creates a new instance of [`SupplyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests supplies for one of the caller's active foster placements and notifies staff.
    ///
    /// # Returns
    /// - `Ok(SupplyRequestDto)`: The pending request
    /// - `Err(Error::NotFound)`: The foster record does not exist or belongs to someone else
    /// - `Err(Error::BadRequest)`: The foster record is not active
    pub async fn create(
        &self,
        requester: &AuthUser,
        request: NewSupplyRequest,
    ) -> Result<SupplyRequestDto, Error> {
        let txn = self.db.begin().await?;

        let record = FosterRecordRepository::new(&txn)
            .get(request.foster_record_id)
            .await?
            .filter(|record| record.foster_parent_id == requester.id)
            .ok_or_else(|| {
                Error::NotFound(
                    "Foster record not found or you do not have permission to request supplies for it"
                        .to_string(),
                )
            })?;

        if record.status != FosterStatus::Active {
            return Err(Error::BadRequest(
                "Supply requests can only be made for active foster records".to_string(),
            ));
        }

        let pet_name = PetRepository::new(&txn)
            .get(record.pet_id)
            .await?
            .map(|pet| pet.name)
            .unwrap_or_default();
        let requester_name = UserRepository::new(&txn)
            .get(requester.id)
            .await?
            .and_then(|user| user.name)
            .unwrap_or_else(|| requester.username.clone());

        let request = SupplyRequestRepository::new(&txn).create(request).await?;

        notify_staff(
            &txn,
            NewNotification {
                notification_type: NotificationType::SupplyRequest,
                title: "New Supply Request".to_string(),
                message: format!(
                    "{} has requested {} (x{}) for foster pet {}. Urgency: {}.",
                    requester_name, request.item_name, request.quantity, pet_name, request.urgency
                ),
            },
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            supply_request_id = request.id,
            foster_record_id = record.id,
            "Requested {} x{}",
            request.item_name,
            request.quantity
        );

        Ok(SupplyRequestDto::from(request))
    }

    /// Requests newest first; staff and admins see all, others only their own.
    pub async fn list(
        &self,
        viewer: &AuthUser,
        status: Option<SupplyStatus>,
    ) -> Result<Vec<SupplyRequestDto>, Error> {
        let foster_parent_id = (!viewer.is_staff()).then_some(viewer.id);

        let requests = SupplyRequestRepository::new(self.db)
            .list(foster_parent_id, status)
            .await?;

        Ok(requests.into_iter().map(SupplyRequestDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use entity::{
            prelude::*,
            sea_orm_active_enums::{
                FosterStatus, NotificationType, PetStatus, Role, SupplyCategory, SupplyUrgency,
            },
        };
        use pawhaven_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::{
            data::supply_request::NewSupplyRequest, error::Error, model::auth::AuthUser,
            service::supply::SupplyService,
        };

        fn food(foster_record_id: i32) -> NewSupplyRequest {
            NewSupplyRequest {
                foster_record_id,
                item_name: "Kibble".to_string(),
                quantity: 2,
                category: SupplyCategory::Food,
                urgency: SupplyUrgency::High,
                description: None,
                estimated_cost: Some(24.5),
            }
        }

        /// Expect staff to be told who needs what for which pet
        #[tokio::test]
        async fn notifies_staff() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let parent = test.user().insert_user("jane").await?;
            let staff = test.user().insert_user_with_role("sam", Role::Staff).await?;
            let pet = test.pet().insert_pet("Rex", PetStatus::Fostered).await?;
            let record = test
                .record()
                .insert_foster_record(parent.id, pet.id, FosterStatus::Active)
                .await?;

            let request = SupplyService::new(&test.db)
                .create(&AuthUser::from(&parent), food(record.id))
                .await
                .unwrap();

            assert_eq!(request.status_display, "Pending");

            let notifications = Notifications::find().all(&test.db).await?;
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].user_id, staff.id);
            assert_eq!(
                notifications[0].notification_type,
                NotificationType::SupplyRequest
            );
            assert!(notifications[0].message.contains("Kibble (x2) for foster pet Rex"));

            Ok(())
        }

        /// Expect someone else's foster record to look missing
        #[tokio::test]
        async fn hides_foreign_record() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let parent = test.user().insert_user("jane").await?;
            let other = test.user().insert_user("sam").await?;
            let pet = test.pet().insert_pet("Rex", PetStatus::Fostered).await?;
            let record = test
                .record()
                .insert_foster_record(parent.id, pet.id, FosterStatus::Active)
                .await?;

            let result = SupplyService::new(&test.db)
                .create(&AuthUser::from(&other), food(record.id))
                .await;

            assert!(matches!(result, Err(Error::NotFound(_))));

            Ok(())
        }

        /// Expect 400 for a placement that has not started
        #[tokio::test]
        async fn requires_active_record() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let parent = test.user().insert_user("jane").await?;
            let pet = test.pet().insert_pet("Rex", PetStatus::Available).await?;
            let record = test
                .record()
                .insert_foster_record(parent.id, pet.id, FosterStatus::Pending)
                .await?;

            let result = SupplyService::new(&test.db)
                .create(&AuthUser::from(&parent), food(record.id))
                .await;

            assert!(matches!(result, Err(Error::BadRequest(_))));

            Ok(())
        }
    }
}

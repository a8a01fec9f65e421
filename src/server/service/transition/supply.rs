use entity::sea_orm_active_enums::{NotificationType, SupplyStatus};
use sea_orm::TransactionTrait;

use super::{Transition, TransitionService, TransitionTable};
use crate::{
    model::supply::SupplyRequestDto,
    server::{
        data::{
            foster_record::FosterRecordRepository,
            notification::{NewNotification, NotificationRepository},
            supply_request::SupplyRequestRepository,
        },
        error::Error,
        model::auth::AuthUser,
    },
};

pub static SUPPLY_TRANSITIONS: TransitionTable<SupplyStatus> = TransitionTable::new(
    "supply request",
    &[
        Transition::new(&[SupplyStatus::Pending], SupplyStatus::Approved),
        Transition::new(&[SupplyStatus::Approved], SupplyStatus::Ordered),
        Transition::new(&[SupplyStatus::Ordered], SupplyStatus::Shipped),
        Transition::new(&[SupplyStatus::Shipped], SupplyStatus::Delivered),
        Transition::new(
            &[
                SupplyStatus::Pending,
                SupplyStatus::Approved,
                SupplyStatus::Ordered,
            ],
            SupplyStatus::Cancelled,
        ),
    ],
);

fn foster_parent_notification(
    item_name: &str,
    status: SupplyStatus,
    reason: Option<&str>,
) -> NewNotification {
    let (title, message) = match status {
        SupplyStatus::Approved => (
            "Supply Request Approved",
            format!(
                "Your request for {} has been approved and will be processed soon.",
                item_name
            ),
        ),
        SupplyStatus::Ordered => (
            "Supply Request Ordered",
            format!(
                "Your requested {} has been ordered and will be shipped soon.",
                item_name
            ),
        ),
        SupplyStatus::Shipped => (
            "Supply Request Shipped",
            format!(
                "Your requested {} has been shipped and should arrive soon.",
                item_name
            ),
        ),
        SupplyStatus::Delivered => (
            "Supply Request Delivered",
            format!(
                "Your requested {} has been delivered. Thank you for fostering!",
                item_name
            ),
        ),
        SupplyStatus::Cancelled => (
            "Supply Request Cancelled",
            match reason {
                Some(reason) => format!(
                    "Your request for {} has been cancelled. Reason: {}",
                    item_name, reason
                ),
                None => format!(
                    "Your request for {} has been cancelled. Please contact us for more information.",
                    item_name
                ),
            },
        ),
        SupplyStatus::Pending => (
            "Supply Request Update",
            format!("Your request for {} is pending review.", item_name),
        ),
    };

    NewNotification {
        notification_type: NotificationType::SupplyUpdate,
        title: title.to_string(),
        message,
    }
}

impl<'a> TransitionService<'a> {
    /// Moves a supply request along its fulfilment steps and notifies the foster parent.
    ///
    /// Delivery stamps `delivered_at`; `actual_cost` is stored whenever given. `reason` only
    /// appears in the cancellation message.
    ///
    /// # Returns
    /// - `Ok(SupplyRequestDto)`: The updated request
    /// - `Err(Error::NotFound)`: No supply request with `request_id`
    /// - `Err(Error::TransitionError)`: The change is not in [`SUPPLY_TRANSITIONS`]
    pub async fn update_supply_status(
        &self,
        request_id: i32,
        status: SupplyStatus,
        actual_cost: Option<f64>,
        reason: Option<&str>,
        reviewer: &AuthUser,
    ) -> Result<SupplyRequestDto, Error> {
        let txn = self.db.begin().await?;

        let request_repo = SupplyRequestRepository::new(&txn);
        let request = request_repo
            .get(request_id)
            .await?
            .ok_or_else(|| Error::not_found("Supply request"))?;

        SUPPLY_TRANSITIONS.find(request.status, status)?;

        let record = FosterRecordRepository::new(&txn)
            .get(request.foster_record_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Foster record ID {} referenced by supply request ID {} does not exist",
                    request.foster_record_id, request.id
                ))
            })?;

        let request = request_repo
            .update_status(request, status, actual_cost)
            .await?;

        NotificationRepository::new(&txn)
            .create(
                record.foster_parent_id,
                foster_parent_notification(&request.item_name, status, reason),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            supply_request_id = request.id,
            reviewer_id = reviewer.id,
            "Supply request status changed to {}",
            status
        );

        Ok(SupplyRequestDto::from(request))
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row counts keyed by status (or role for users).
pub type StatusCounts = BTreeMap<String, u64>;

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub pets: StatusCounts,
    pub applications: StatusCounts,
    pub foster_records: StatusCounts,
    pub appointments: StatusCounts,
    pub supply_requests: StatusCounts,
    pub volunteer_applications: StatusCounts,
    pub volunteer_tasks: StatusCounts,
    pub users: StatusCounts,
    /// Present only for vets and admins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<MedicalSummaryDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MedicalSummaryDto {
    /// Records dated within the last 30 days
    pub recent_records: u64,
    /// Records whose next due date falls within the next 30 days
    pub upcoming_due: u64,
}

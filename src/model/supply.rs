use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{SupplyCategory, SupplyStatus, SupplyUrgency};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SupplyRequestDto {
    pub id: i32,
    pub foster_record_id: i32,
    pub item_name: String,
    pub quantity: i32,
    #[schema(value_type = String, example = "food")]
    pub category: SupplyCategory,
    #[schema(value_type = String, example = "medium")]
    pub urgency: SupplyUrgency,
    pub description: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    #[schema(value_type = String, example = "pending")]
    pub status: SupplyStatus,
    /// Label for `status`, e.g. `Pending`
    pub status_display: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub delivered_at: Option<NaiveDateTime>,
}

impl From<entity::supply_requests::Model> for SupplyRequestDto {
    fn from(request: entity::supply_requests::Model) -> Self {
        let status_display = title_case(request.status.as_str());

        Self {
            id: request.id,
            foster_record_id: request.foster_record_id,
            item_name: request.item_name,
            quantity: request.quantity,
            category: request.category,
            urgency: request.urgency,
            description: request.description,
            estimated_cost: request.estimated_cost,
            actual_cost: request.actual_cost,
            status: request.status,
            status_display,
            created_at: request.created_at,
            updated_at: request.updated_at,
            delivered_at: request.delivered_at,
        }
    }
}

fn title_case(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSupplyRequestDto {
    pub foster_record_id: i32,
    pub item_name: String,
    pub quantity: i32,
    #[schema(value_type = Option<String>, example = "food")]
    pub category: Option<SupplyCategory>,
    #[schema(value_type = Option<String>, example = "medium")]
    pub urgency: Option<SupplyUrgency>,
    pub description: Option<String>,
    pub estimated_cost: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSupplyStatusDto {
    #[schema(value_type = String, example = "delivered")]
    pub status: SupplyStatus,
    pub actual_cost: Option<f64>,
    /// Included in the notification when cancelling
    pub reason: Option<String>,
}

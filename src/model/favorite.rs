use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::pet::PetDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub favorited_at: NaiveDateTime,
    pub pet: PetDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFavoriteDto {
    pub pet_id: i32,
}

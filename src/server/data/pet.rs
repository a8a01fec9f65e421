use entity::sea_orm_active_enums::{PetGender, PetStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use super::Page;

pub struct NewPet {
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub gender: PetGender,
    pub description: Option<String>,
    pub status: PetStatus,
    pub shelter_id: Option<i32>,
    pub image_url: Option<String>,
    pub added_by_staff_id: Option<i32>,
}

/// Partial pet update; `None` leaves a column untouched.
#[derive(Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub species: Option<Option<String>>,
    pub breed: Option<Option<String>>,
    pub age: Option<Option<i32>>,
    pub gender: Option<PetGender>,
    pub description: Option<Option<String>>,
    pub status: Option<PetStatus>,
    pub shelter_id: Option<Option<i32>>,
    pub image_url: Option<Option<String>>,
}

#[derive(Default)]
pub struct PetFilter {
    pub status: Option<PetStatus>,
    pub species: Option<String>,
    pub shelter_id: Option<i32>,
}

pub struct PetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PetRepository<'a, C> {
    /// Creates a new instance of [`PetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, pet: NewPet) -> Result<entity::pets::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::pets::ActiveModel {
            name: ActiveValue::Set(pet.name),
            species: ActiveValue::Set(pet.species),
            breed: ActiveValue::Set(pet.breed),
            age: ActiveValue::Set(pet.age),
            gender: ActiveValue::Set(pet.gender),
            description: ActiveValue::Set(pet.description),
            status: ActiveValue::Set(pet.status),
            shelter_id: ActiveValue::Set(pet.shelter_id),
            image_url: ActiveValue::Set(pet.image_url),
            added_by_staff_id: ActiveValue::Set(pet.added_by_staff_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, pet_id: i32) -> Result<Option<entity::pets::Model>, DbErr> {
        entity::prelude::Pets::find_by_id(pet_id).one(self.db).await
    }

    pub async fn get_with_shelter(
        &self,
        pet_id: i32,
    ) -> Result<Option<(entity::pets::Model, Option<entity::shelters::Model>)>, DbErr> {
        entity::prelude::Pets::find_by_id(pet_id)
            .find_also_related(entity::prelude::Shelters)
            .one(self.db)
            .await
    }

    /// Lists pets newest first with their shelter and the total number matching `filter`.
    pub async fn list(
        &self,
        filter: PetFilter,
        page: Page,
    ) -> Result<
        (
            Vec<(entity::pets::Model, Option<entity::shelters::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let mut query = entity::prelude::Pets::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::pets::Column::Status.eq(status));
        }
        if let Some(species) = filter.species {
            query = query.filter(entity::pets::Column::Species.eq(species));
        }
        if let Some(shelter_id) = filter.shelter_id {
            query = query.filter(entity::pets::Column::ShelterId.eq(shelter_id));
        }

        let total = query.clone().count(self.db).await?;
        let pets = query
            .order_by_desc(entity::pets::Column::CreatedAt)
            .order_by_desc(entity::pets::Column::Id)
            .limit(page.limit)
            .offset(page.offset)
            .find_also_related(entity::prelude::Shelters)
            .all(self.db)
            .await?;

        Ok((pets, total))
    }

    pub async fn update(
        &self,
        pet: entity::pets::Model,
        update: PetUpdate,
    ) -> Result<entity::pets::Model, DbErr> {
        let mut pet_am = pet.into_active_model();

        if let Some(name) = update.name {
            pet_am.name = ActiveValue::Set(name);
        }
        if let Some(species) = update.species {
            pet_am.species = ActiveValue::Set(species);
        }
        if let Some(breed) = update.breed {
            pet_am.breed = ActiveValue::Set(breed);
        }
        if let Some(age) = update.age {
            pet_am.age = ActiveValue::Set(age);
        }
        if let Some(gender) = update.gender {
            pet_am.gender = ActiveValue::Set(gender);
        }
        if let Some(description) = update.description {
            pet_am.description = ActiveValue::Set(description);
        }
        if let Some(status) = update.status {
            pet_am.status = ActiveValue::Set(status);
        }
        if let Some(shelter_id) = update.shelter_id {
            pet_am.shelter_id = ActiveValue::Set(shelter_id);
        }
        if let Some(image_url) = update.image_url {
            pet_am.image_url = ActiveValue::Set(image_url);
        }
        pet_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        pet_am.update(self.db).await
    }

    /// Sets the pet's status only while it is one of `from`.
    ///
    /// The guard is part of the `UPDATE` statement itself, so a concurrent change that moved
    /// the pet out of `from` first makes this a no-op.
    ///
    /// # Returns
    /// - `Ok(true)`: The row matched the guard and was updated
    /// - `Ok(false)`: The pet is missing or its status is not in `from`
    pub async fn set_status_if(
        &self,
        pet_id: i32,
        from: &[PetStatus],
        to: PetStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Pets::update_many()
            .col_expr(entity::pets::Column::Status, Expr::value(to))
            .col_expr(
                entity::pets::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().naive_utc()),
            )
            .filter(entity::pets::Column::Id.eq(pet_id))
            .filter(entity::pets::Column::Status.is_in(from.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, pet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pets::delete_by_id(pet_id)
            .exec(self.db)
            .await
    }
}

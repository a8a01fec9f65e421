use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        pet_id: i32,
    ) -> Result<entity::favorites::Model, DbErr> {
        entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            pet_id: ActiveValue::Set(pet_id),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        user_id: i32,
        pet_id: i32,
    ) -> Result<Option<entity::favorites::Model>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(entity::favorites::Column::PetId.eq(pet_id))
            .one(self.db)
            .await
    }

    /// The user's favorites, most recent first, with the favorited pet.
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::favorites::Model, Option<entity::pets::Model>)>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorites::Column::CreatedAt)
            .order_by_desc(entity::favorites::Column::Id)
            .find_also_related(entity::prelude::Pets)
            .all(self.db)
            .await
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, user_id: i32, pet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(entity::favorites::Column::PetId.eq(pet_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod delete {
        use entity::{prelude::*, sea_orm_active_enums::PetStatus};
        use pawhaven_test_utils::prelude::*;

        use crate::server::data::favorite::FavoriteRepository;

        /// Expect only the caller's favorite to be removed
        #[tokio::test]
        async fn removes_only_own_favorite() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(Favorites)
                .build()
                .await?;
            let jane = test.user().insert_user("jane").await?;
            let omar = test.user().insert_user("omar").await?;
            let pet = test.pet().insert_pet("Biscuit", PetStatus::Available).await?;

            let repo = FavoriteRepository::new(&test.db);
            repo.create(jane.id, pet.id).await?;
            repo.create(omar.id, pet.id).await?;

            let result = repo.delete(jane.id, pet.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(repo.find(jane.id, pet.id).await?.is_none());
            assert!(repo.find(omar.id, pet.id).await?.is_some());

            Ok(())
        }
    }
}

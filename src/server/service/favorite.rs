use sea_orm::DatabaseConnection;

use crate::{
    model::{favorite::FavoriteDto, pet::PetDto},
    server::{
        data::{favorite::FavoriteRepository, pet::PetRepository, shelter::ShelterRepository},
        error::Error,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `pet_id` to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)`: The new favorite
    /// - `Err(Error::NotFound)`: No pet with `pet_id`
    /// - `Err(Error::Conflict)`: The pet is already a favorite
    pub async fn add(&self, user_id: i32, pet_id: i32) -> Result<FavoriteDto, Error> {
        let (pet, shelter) = PetRepository::new(self.db)
            .get_with_shelter(pet_id)
            .await?
            .ok_or_else(|| Error::not_found("Pet"))?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo.find(user_id, pet_id).await?.is_some() {
            return Err(Error::Conflict(
                "Pet is already in your favorites".to_string(),
            ));
        }

        let favorite = favorite_repo.create(user_id, pet_id).await?;

        Ok(FavoriteDto {
            id: favorite.id,
            favorited_at: favorite.created_at,
            pet: PetDto::from_model(pet, shelter),
        })
    }

    /// The user's favorites, most recent first, each with the pet and its shelter name.
    pub async fn list(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .list_by_user(user_id)
            .await?;

        let shelters = ShelterRepository::new(self.db).list().await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(favorite, pet)| {
                let pet = pet?;
                let shelter = pet
                    .shelter_id
                    .and_then(|id| shelters.iter().find(|s| s.id == id).cloned());

                Some(FavoriteDto {
                    id: favorite.id,
                    favorited_at: favorite.created_at,
                    pet: PetDto::from_model(pet, shelter),
                })
            })
            .collect())
    }

    pub async fn remove(&self, user_id: i32, pet_id: i32) -> Result<(), Error> {
        let result = FavoriteRepository::new(self.db)
            .delete(user_id, pet_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound("Pet is not in your favorites".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    mod add {
        use entity::{prelude::*, sea_orm_active_enums::PetStatus};
        use pawhaven_test_utils::prelude::*;

        use crate::server::{error::Error, service::favorite::FavoriteService};

        /// Expect a second favorite of the same pet to conflict
        #[tokio::test]
        async fn rejects_duplicate() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(Favorites)
                .build()
                .await?;
            let user = test.user().insert_user("jane").await?;
            let pet = test.pet().insert_pet("Rex", PetStatus::Available).await?;
            let service = FavoriteService::new(&test.db);

            service.add(user.id, pet.id).await.unwrap();
            let result = service.add(user.id, pet.id).await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }
    }

    mod list {
        use entity::{prelude::*, sea_orm_active_enums::PetStatus};
        use pawhaven_test_utils::prelude::*;

        use crate::server::service::favorite::FavoriteService;

        /// Expect favorites to include the pet's shelter name
        #[tokio::test]
        async fn includes_shelter_name() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(Favorites)
                .build()
                .await?;
            let user = test.user().insert_user("jane").await?;
            let shelter = test.shelter().insert_shelter("Northside").await?;
            let pet = test
                .pet()
                .insert_pet_in_shelter("Rex", PetStatus::Available, Some(shelter.id))
                .await?;
            let service = FavoriteService::new(&test.db);
            service.add(user.id, pet.id).await.unwrap();

            let favorites = service.list(user.id).await.unwrap();

            assert_eq!(favorites.len(), 1);
            assert_eq!(favorites[0].pet.shelter_name.as_deref(), Some("Northside"));

            Ok(())
        }
    }

    mod remove {
        use pawhaven_test_utils::prelude::*;

        use crate::server::{error::Error, service::favorite::FavoriteService};

        /// Expect 404 when the pet was never favorited
        #[tokio::test]
        async fn fails_when_not_favorited() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(entity::prelude::Favorites)
                .build()
                .await?;
            let user = test.user().insert_user("jane").await?;

            let result = FavoriteService::new(&test.db).remove(user.id, 1).await;

            assert!(matches!(result, Err(Error::NotFound(_))));

            Ok(())
        }
    }
}

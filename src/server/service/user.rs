//! User account services: profile, administration and per-user statistics.

use entity::sea_orm_active_enums::{ApplicationStatus, FosterStatus, Role};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    model::{
        api::ListDto,
        user::{UserDto, UserStatsDto},
    },
    server::{
        data::{
            appointment::AppointmentRepository,
            count_by,
            favorite::FavoriteRepository,
            notification::NotificationRepository,
            training::TrainingRepository,
            user::{ProfileUpdate, UserRepository},
            Page,
        },
        error::{auth::AuthError, Error},
        service::{auth::hash_password, retry::RetryContext},
    },
};

/// Requested profile changes; `None` leaves a field untouched.
#[derive(Default)]
pub struct ProfileChanges {
    pub name: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub password: Option<String>,
}

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// Runs on every authenticated request, so transient database failures are retried.
    ///
    /// # Returns
    /// - `Ok(Some(users::Model))`: User found
    /// - `Ok(None)`: User not found in database
    /// - `Err(Error::DbErr)`: Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<entity::users::Model>, Error> {
        let user_repo = &UserRepository::new(self.db);

        RetryContext::new()
            .run(&format!("get user ID {}", user_id), || async move {
                Ok(user_repo.get(user_id).await?)
            })
            .await
    }

    /// Applies `changes` to the user's own profile.
    ///
    /// # Returns
    /// - `Ok(UserDto)`: The updated profile
    /// - `Err(Error::NotFound)`: The user no longer exists
    /// - `Err(Error::Conflict)`: The new email belongs to another account
    pub async fn update_profile(
        &self,
        user_id: i32,
        changes: ProfileChanges,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get(user_id)
            .await?
            .ok_or_else(|| Error::not_found("User"))?;

        if let Some(email) = &changes.email {
            if user_repo.email_taken_by_other(email, user_id).await? {
                return Err(Error::Conflict("Email already in use".to_string()));
            }
        }

        let password_hash = changes
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = user_repo
            .update_profile(
                user,
                ProfileUpdate {
                    name: changes.name,
                    email: changes.email,
                    phone: changes.phone,
                    address: changes.address,
                    password_hash,
                },
            )
            .await?;

        Ok(UserDto::from(user))
    }

    pub async fn list(&self, role: Option<Role>, page: Page) -> Result<ListDto<UserDto>, Error> {
        let (users, total_count) = UserRepository::new(self.db).list(role, page).await?;

        Ok(ListDto {
            total_count,
            items: users.into_iter().map(UserDto::from).collect(),
        })
    }

    pub async fn update_role(&self, user_id: i32, role: Role) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .update_role(user_id, role)
            .await?
            .ok_or_else(|| Error::not_found("User"))?;

        tracing::info!(user_id = user.id, "Role changed to {}", role);

        Ok(UserDto::from(user))
    }

    /// Deletes an account; rows owned by the user cascade per the schema.
    ///
    /// # Returns
    /// - `Ok(())`: The account was deleted
    /// - `Err(Error::AuthError)`: An admin attempted to delete their own account
    /// - `Err(Error::NotFound)`: No user with `user_id`
    pub async fn delete(&self, actor_id: i32, user_id: i32) -> Result<(), Error> {
        if actor_id == user_id {
            return Err(
                AuthError::Forbidden("You cannot delete your own account".to_string()).into(),
            );
        }

        let result = UserRepository::new(self.db).delete(user_id).await?;
        if result.rows_affected == 0 {
            return Err(Error::not_found("User"));
        }

        tracing::info!(user_id, actor_id, "Deleted user");

        Ok(())
    }

    /// Counts the user's own records across the system.
    pub async fn stats(&self, user_id: i32) -> Result<UserStatsDto, Error> {
        let applications = count_by(
            self.db,
            entity::prelude::Applications::find()
                .filter(entity::applications::Column::UserId.eq(user_id)),
            entity::applications::Column::Status,
        )
        .await?;
        let foster_records = count_by(
            self.db,
            entity::prelude::FosterRecords::find()
                .filter(entity::foster_records::Column::FosterParentId.eq(user_id)),
            entity::foster_records::Column::Status,
        )
        .await?;

        let count_of = |counts: &std::collections::BTreeMap<String, u64>, status: &str| {
            counts.get(status).copied().unwrap_or_default()
        };

        Ok(UserStatsDto {
            applications_total: applications.values().sum(),
            applications_pending: count_of(&applications, ApplicationStatus::Pending.as_str()),
            applications_approved: count_of(&applications, ApplicationStatus::Approved.as_str()),
            foster_records_total: foster_records.values().sum(),
            foster_records_active: count_of(&foster_records, FosterStatus::Active.as_str()),
            favorites: FavoriteRepository::new(self.db).count_by_user(user_id).await?,
            unread_notifications: NotificationRepository::new(self.db)
                .count_unread(user_id)
                .await?,
            appointments_upcoming: AppointmentRepository::new(self.db)
                .count_upcoming(user_id, chrono::Utc::now().naive_utc())
                .await?,
            training_completed: TrainingRepository::new(self.db)
                .count_completed(user_id)
                .await?,
        })
    }
}

#[cfg(test)]
mod tests {
    mod get_user {
        use pawhaven_test_utils::prelude::*;

        use crate::server::{error::Error, service::user::UserService};

        /// Expect Some for an existing user
        #[tokio::test]
        async fn returns_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let user = test.user().insert_user("jane").await?;

            let result = UserService::new(&test.db).get_user(user.id).await;

            assert!(matches!(result, Ok(Some(found)) if found.id == user.id));

            Ok(())
        }

        /// Expect None for a user ID that does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let result = UserService::new(&test.db).get_user(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let result = UserService::new(&test.db).get_user(1).await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }

    mod update_profile {
        use pawhaven_test_utils::prelude::*;

        use crate::server::{
            error::Error,
            service::user::{ProfileChanges, UserService},
        };

        /// Expect a partial update to change only the given fields
        #[tokio::test]
        async fn updates_given_fields() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let user = test.user().insert_user("jane").await?;

            let updated = UserService::new(&test.db)
                .update_profile(
                    user.id,
                    ProfileChanges {
                        phone: Some(Some("555-0100".to_string())),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();

            assert_eq!(updated.phone.as_deref(), Some("555-0100"));
            assert_eq!(updated.email, user.email);

            Ok(())
        }

        /// Expect 409 when taking another account's email
        #[tokio::test]
        async fn rejects_taken_email() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let jane = test.user().insert_user("jane").await?;
            let sam = test.user().insert_user("sam").await?;

            let result = UserService::new(&test.db)
                .update_profile(
                    jane.id,
                    ProfileChanges {
                        email: Some(sam.email.clone()),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }
    }

    mod delete {
        use entity::sea_orm_active_enums::Role;
        use pawhaven_test_utils::prelude::*;

        use crate::server::{
            error::{auth::AuthError, Error},
            service::user::UserService,
        };

        /// Expect an admin not to be able to delete themselves
        #[tokio::test]
        async fn forbids_self_deletion() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let admin = test.user().insert_user_with_role("admin", Role::Admin).await?;

            let result = UserService::new(&test.db).delete(admin.id, admin.id).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::Forbidden(_)))
            ));

            Ok(())
        }

        /// Expect 404 for a user that does not exist
        #[tokio::test]
        async fn fails_for_missing_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let admin = test.user().insert_user_with_role("admin", Role::Admin).await?;

            let result = UserService::new(&test.db).delete(admin.id, admin.id + 1).await;

            assert!(matches!(result, Err(Error::NotFound(_))));

            Ok(())
        }
    }

    mod stats {
        use entity::sea_orm_active_enums::{ApplicationStatus, FosterStatus, PetStatus};
        use pawhaven_test_utils::prelude::*;

        use crate::server::service::user::UserService;

        /// Expect counts to cover only the user's own records
        #[tokio::test]
        async fn counts_own_records() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_all_tables().build().await?;
            let jane = test.user().insert_user("jane").await?;
            let sam = test.user().insert_user("sam").await?;
            let rex = test.pet().insert_pet("Rex", PetStatus::Available).await?;
            let tom = test.pet().insert_pet("Tom", PetStatus::Fostered).await?;
            test.record()
                .insert_application(jane.id, rex.id, ApplicationStatus::Pending)
                .await?;
            test.record()
                .insert_application(jane.id, tom.id, ApplicationStatus::Approved)
                .await?;
            test.record()
                .insert_application(sam.id, rex.id, ApplicationStatus::Pending)
                .await?;
            test.record()
                .insert_foster_record(jane.id, tom.id, FosterStatus::Active)
                .await?;

            let stats = UserService::new(&test.db).stats(jane.id).await.unwrap();

            assert_eq!(stats.applications_total, 2);
            assert_eq!(stats.applications_pending, 1);
            assert_eq!(stats.applications_approved, 1);
            assert_eq!(stats.foster_records_total, 1);
            assert_eq!(stats.foster_records_active, 1);
            assert_eq!(stats.favorites, 0);

            Ok(())
        }
    }
}

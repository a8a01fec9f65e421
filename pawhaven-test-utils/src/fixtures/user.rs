use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Placeholder stored in `password_hash` for fixture users; no password verifies against it.
pub const TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$invalid";

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the `adopter` role.
    pub async fn insert_user(&self, username: &str) -> Result<entity::users::Model, TestError> {
        self.insert_user_with_role(username, Role::Adopter).await
    }

    /// Insert a user with the given role; the email is derived from the username.
    pub async fn insert_user_with_role(
        &self,
        username: &str,
        role: Role,
    ) -> Result<entity::users::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Users::insert(entity::users::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@example.org", username)),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                name: ActiveValue::Set(Some(format!("Test {}", username))),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::Page;

/// Fields of a newly registered account.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Role,
}

/// Partial profile update; `None` leaves a column untouched.
#[derive(Default)]
pub struct ProfileUpdate {
    pub name: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub password_hash: Option<String>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user: NewUser) -> Result<entity::users::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::users::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            name: ActiveValue::Set(user.name),
            phone: ActiveValue::Set(user.phone),
            address: ActiveValue::Set(user.address),
            role: ActiveValue::Set(user.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .filter(entity::users::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Whether another account already uses `username` or `email`.
    pub async fn username_or_email_taken(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Users::find()
            .filter(
                Condition::any()
                    .add(entity::users::Column::Username.eq(username))
                    .add(entity::users::Column::Email.eq(email)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether an account other than `user_id` uses `email`.
    pub async fn email_taken_by_other(&self, email: &str, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Users::find()
            .filter(entity::users::Column::Email.eq(email))
            .filter(entity::users::Column::Id.ne(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists users newest first with the total number matching `role`.
    pub async fn list(
        &self,
        role: Option<Role>,
        page: Page,
    ) -> Result<(Vec<entity::users::Model>, u64), DbErr> {
        let mut query = entity::prelude::Users::find();

        if let Some(role) = role {
            query = query.filter(entity::users::Column::Role.eq(role));
        }

        let total = query.clone().count(self.db).await?;
        let users = query
            .order_by_desc(entity::users::Column::CreatedAt)
            .order_by_desc(entity::users::Column::Id)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        Ok((users, total))
    }

    /// IDs of every user holding one of `roles`.
    pub async fn ids_with_roles(&self, roles: &[Role]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Users::find()
            .select_only()
            .column(entity::users::Column::Id)
            .filter(entity::users::Column::Role.is_in(roles.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn update_profile(
        &self,
        user: entity::users::Model,
        update: ProfileUpdate,
    ) -> Result<entity::users::Model, DbErr> {
        let mut user_am = user.into_active_model();

        if let Some(name) = update.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(email) = update.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(phone) = update.phone {
            user_am.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = update.address {
            user_am.address = ActiveValue::Set(address);
        }
        if let Some(password_hash) = update.password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        user_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    pub async fn update_role(
        &self,
        user_id: i32,
        role: Role,
    ) -> Result<Option<entity::users::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.role = ActiveValue::Set(role);
        user_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Users::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

//! Account registration and password login.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{NewUser, UserRepository},
    error::{auth::AuthError, Error},
};

/// Details of a new self-registered account.
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Hashes `password` with Argon2id and a random salt into a PHC string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHashError(e.to_string()))
}

/// Checks `password` against a stored PHC string.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an adopter account.
    ///
    /// # Returns
    /// - `Ok(users::Model)`: The new account
    /// - `Err(Error::Conflict)`: The username or email is already registered
    pub async fn register(&self, registration: Registration) -> Result<entity::users::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .username_or_email_taken(&registration.username, &registration.email)
            .await?
        {
            return Err(Error::Conflict(
                "Username or email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&registration.password)?;

        let user = user_repo
            .create(NewUser {
                username: registration.username,
                email: registration.email,
                password_hash,
                name: registration.name,
                phone: registration.phone,
                address: registration.address,
                role: Role::Adopter,
            })
            .await?;

        tracing::info!(user_id = user.id, "Registered user {}", user.username);

        Ok(user)
    }

    /// Verifies a username and password.
    ///
    /// Unknown usernames and wrong passwords fail the same way so the response does not
    /// reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<entity::users::Model, Error> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials(username.to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        Ok(user)
    }
}

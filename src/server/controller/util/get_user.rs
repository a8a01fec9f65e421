use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::AuthUser, session::user::SessionUserId},
    service::user::UserService,
};

/// Resolves the session's user ID against the database.
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(AuthUser)`: User found, with their current role
/// - `Err(AuthError::UserNotInSession)`: No user ID in the session
/// - `Err(AuthError::UserNotInDatabase)`: The session's user was deleted; the session is cleared
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<AuthUser, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        SessionUserId::remove(session).await?;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; cleared session",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(AuthUser::from(&user))
}

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the logged in user's ID.
pub const SESSION_USER_ID_KEY: &str = "pawhaven:user:id";

/// ID of the user a session is logged in as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Logs the session in as `user_id`, replacing any previous user.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// The logged in user's ID, `None` for an anonymous session.
    ///
    /// A stored value that does not deserialize as an ID surfaces as a session error.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(user.map(|SessionUserId(id)| id))
    }

    /// Drops the user from the session, returning the ID that was stored.
    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user = session
            .remove::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?;

        Ok(user.map(|SessionUserId(id)| id))
    }
}

use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient infrastructure errors)
    Retry,
    /// Failed permanently (bad request, missing data, bugs)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query errors, constraint violations, type conversion and missing records
                // won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,
            Self::IoError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::ValidationError(_)
            | Self::TransitionError(_)
            | Self::NotFound(_)
            | Self::Conflict(_)
            | Self::BadRequest(_)
            | Self::InternalError(_)
            | Self::PasswordHashError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

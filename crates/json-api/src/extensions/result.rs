//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::error_handling::ApiError;

/// Map any error to a logged internal server error carrying `message`.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str, message: &'static str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::internal(message)
        })
    }
}

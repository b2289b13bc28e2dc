use async_graphql::{Error, ErrorExtensions};

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;

/// Same classification as the HTTP status mapping, carried as `extensions.code`.
impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> Error {
        let code = match self {
            ApplicationError::Domain(DecideError::ActivityNotFound) => "NOT_FOUND",
            ApplicationError::Domain(_) => "BAD_REQUEST",
            ApplicationError::Store(store_error) => {
                tracing::error!(error = %store_error, "activity store failure");
                "INTERNAL_SERVER_ERROR"
            }
        };
        Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", code))
    }
}

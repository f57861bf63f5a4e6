use poem::http::StatusCode;

use crate::domain::errors::DomainError;

pub fn domain_error(err: DomainError) -> poem::Error {
    let status = match &err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
        DomainError::Other(source) => {
            tracing::error!(error = ?source, "request failed");
            return poem::Error::from_string(
                "internal server error",
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    };
    poem::Error::from_string(err.to_string(), status)
}

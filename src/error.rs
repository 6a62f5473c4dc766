use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// PortalError
///
/// The complete failure taxonomy of the access-control core. Every fallible
/// operation in the credential store, session manager, guard, aggregator, and
/// repository surfaces one of these variants; nothing is silently swallowed.
#[derive(Debug, Error)]
pub enum PortalError {
    /// A required field was missing or empty. Recovered locally and surfaced
    /// to the client as a 400 with the offending field named.
    #[error("missing or invalid field: {0}")]
    Validation(String),

    /// The normalized email already exists in the target role collection.
    #[error("email is already registered")]
    DuplicateEmail,

    /// Another student already carries this USN.
    #[error("usn is already registered")]
    DuplicateUsn,

    /// Credential verification failed against the stored hash.
    #[error("invalid email or password")]
    WrongPassword,

    /// A looked-up record is absent. Delete handlers treat this as silent
    /// success (idempotent deletes); lookups surface it as 404.
    #[error("record not found")]
    NotFound,

    /// No session, or the session does not carry the required role.
    #[error("authentication required")]
    Unauthenticated,

    /// The actor is logged in but not entitled to the resource. Deliberately
    /// rendered identically to `Unauthenticated` so a rejection never reveals
    /// whether a resource exists under a different owner.
    #[error("not entitled to this resource")]
    Unauthorized,

    /// The record is permanently protected from deletion (the base admin).
    #[error("this record is protected and cannot be deleted")]
    ProtectedRecord,

    /// Collaborator-level persistence failure. Logged with detail, surfaced
    /// to the client as a generic server error.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PortalError::Validation(field) => (
                StatusCode::BAD_REQUEST,
                format!("missing or invalid field: {}", field),
            ),
            PortalError::DuplicateEmail => {
                (StatusCode::CONFLICT, "email is already registered".into())
            }
            PortalError::DuplicateUsn => {
                (StatusCode::CONFLICT, "usn is already registered".into())
            }
            // Login failures are uniform: a missing account and a wrong
            // password are indistinguishable to the client.
            PortalError::WrongPassword => {
                (StatusCode::UNAUTHORIZED, "invalid email or password".into())
            }
            PortalError::NotFound => (StatusCode::NOT_FOUND, "not found".into()),
            // Unauthenticated and Unauthorized produce byte-identical
            // responses; only the server-side logs tell them apart.
            PortalError::Unauthenticated | PortalError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized".into())
            }
            PortalError::ProtectedRecord => (
                StatusCode::FORBIDDEN,
                "this record is protected and cannot be deleted".into(),
            ),
            PortalError::Persistence(detail) => {
                tracing::error!(%detail, "persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": body }))).into_response()
    }
}

/// Rejects empty or whitespace-only required fields with a `Validation`
/// error naming the field.
pub fn require_field(name: &str, value: &str) -> Result<(), PortalError> {
    if value.trim().is_empty() {
        return Err(PortalError::Validation(name.to_string()));
    }
    Ok(())
}

//! Failure taxonomy for exchanges with the admissions service

use thiserror::Error;

/// Admissions client error types.
///
/// A hospital lookup that finds nothing is not represented here: the one
/// lookup-by-name operation reports absence as a normal `None` result.
#[derive(Debug, Error)]
pub enum AdmissionsError {
    /// The credential exchange failed or returned an unusable body
    #[error("authentication failed: {0}")]
    AuthenticationFailure(String),

    /// Transport-level failure reaching the collaborator
    #[error("admissions service unreachable: {0}")]
    ServiceUnavailable(String),

    /// Response body does not conform to the expected schema
    #[error("malformed response from admissions service: {0}")]
    DeserializationFailure(String),

    /// Missing, expired, or under-privileged credential; callers recover
    /// by re-authenticating as a sufficiently privileged actor
    #[error("not authorized by admissions service: {0}")]
    Unauthorized(String),

    /// Any other non-success response from the collaborator
    #[error("admissions service responded {status}: {message}")]
    ServiceError { status: u16, message: String },
}

impl From<reqwest::Error> for AdmissionsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdmissionsError::DeserializationFailure(err.to_string())
        } else {
            AdmissionsError::ServiceUnavailable(err.to_string())
        }
    }
}

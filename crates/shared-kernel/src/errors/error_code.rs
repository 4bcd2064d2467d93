// crates/shared-kernel/src/errors/error_code.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    NotFound,
    MalformedMessage,
    UnsupportedAction,
    InternalError,
    InfrastructureFailure,
    ServiceUnavailable,
    SetupFailed,
}

impl ErrorCode {
    /// Statut HTTP correspondant, utilisé par la couche API
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::ValidationFailed | ErrorCode::MalformedMessage | ErrorCode::UnsupportedAction => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::ServiceUnavailable => 503,
            ErrorCode::InternalError | ErrorCode::InfrastructureFailure | ErrorCode::SetupFailed => 500,
        }
    }
}

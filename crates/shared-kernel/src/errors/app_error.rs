use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Entrée invalide (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 2. Cas : Document introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 3. Cas : Messages d'ingestion rejetés
            DomainError::Decode(reason) => Self::new(ErrorCode::MalformedMessage, reason),
            DomainError::UnsupportedAction { code } => Self::new(
                ErrorCode::UnsupportedAction,
                format!("Unsupported action code {code}"),
            ),

            // 4. Cas : Moteur injoignable (503)
            DomainError::Unavailable(reason) => Self::new(ErrorCode::ServiceUnavailable, reason),

            // 5. Cas : Moteur en erreur (500), le corps de réponse part dans les détails
            DomainError::Rejected { status, body } => Self {
                code: ErrorCode::InfrastructureFailure,
                message: format!("Index engine rejected the request with status {status}"),
                details: Some(serde_json::json!({ "status": status, "body": body })),
            },

            DomainError::SetupFatal(reason) => Self::new(ErrorCode::SetupFailed, reason),

            DomainError::Infrastructure(reason) | DomainError::Internal(reason) => {
                Self::new(ErrorCode::InternalError, reason)
            }
        }
    }
}

// Pour transformer les erreurs Kafka (rdkafka) en AppError
#[cfg(feature = "kafka")]
impl From<rdkafka::error::KafkaError> for AppError {
    fn from(err: rdkafka::error::KafkaError) -> Self {
        tracing::error!("Kafka infrastructure error: {:?}", err);

        Self::new(
            ErrorCode::InfrastructureFailure,
            format!("Messaging system error: {}", err),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Message entrant illisible (JSON invalide, champ obligatoire absent)
    #[error("Malformed message: {0}")]
    Decode(String),

    /// Code d'action inconnu dans un message de changement
    #[error("Unsupported action code {code}")]
    UnsupportedAction {
        code: i32,
    },

    /// Moteur injoignable (connexion refusée, timeout)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Le moteur a répondu avec un statut non-succès
    #[error("Request rejected with status {status}: {body}")]
    Rejected {
        status: u16,
        body: String,
    },

    /// Échec irrécupérable au démarrage (index, connexion)
    #[error("Setup failure: {0}")]
    SetupFatal(String),

    /// Erreur liée à l'infrastructure (Kafka, socket, sérialisation)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Erreurs liées à un seul message : la boucle d'ingestion continue
    pub fn is_message_scoped(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::UnsupportedAction { .. } | Self::Validation { .. }
        )
    }
}

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Use Cases, Ports (index, sources de changements), compilateur.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Workers, API HTTP, bootstrap du process.
pub type AppResult<T> = std::result::Result<T, AppError>;

// crates/shared-kernel/src/infrastructure/env.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use std::str::FromStr;

/// Variable obligatoire
pub fn required(key: &str) -> AppResult<String> {
    std::env::var(key)
        .map_err(|_| AppError::new(ErrorCode::SetupFailed, format!("{key} must be set")))
}

/// Variable optionnelle avec valeur par défaut
pub fn or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Variable optionnelle typée ; une valeur présente mais illisible est une erreur
pub fn parsed_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::new(ErrorCode::SetupFailed, format!("Invalid {key}: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

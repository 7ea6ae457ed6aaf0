//! Error types for rutaboard-core
//!
//! Every failure here is user-reportable: the web layer turns these into
//! toasts, never into panics.

use thiserror::Error;

/// Core error type for rutaboard operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The execution flow was asked for an algorithm the scenario table
    /// does not know.
    #[error("Algoritmo no válido: {0}")]
    UnknownAlgorithm(String),

    /// An export was requested over an empty dataset; no file is produced.
    #[error("No hay datos para exportar")]
    EmptyExport,

    /// A structure could not be serialized for export.
    #[error("Error al serializar datos: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let err = CoreError::UnknownAlgorithm("unknown-algo".into());
        assert_eq!(err.to_string(), "Algoritmo no válido: unknown-algo");
        assert_eq!(
            CoreError::EmptyExport.to_string(),
            "No hay datos para exportar"
        );
    }
}

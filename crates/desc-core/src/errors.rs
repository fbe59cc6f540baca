//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo al persistir la descripción en el host. El publisher lo degrada a
/// una línea de log: ningún error de este core puede abortar el build.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SinkError {
    #[error("description rejected: {0}")] Rejected(String),
    #[error("internal: {0}")] Internal(String),
}

//! Resultado de una publicación en un checkpoint.

use desc_domain::EnvVars;

use super::Checkpoint;

/// Lo que produjo un `publish`: la descripción aplicada (None si el contexto
/// no existía y la operación fue no-op) y la contribución de entorno que el
/// caller puede registrar con alcance build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub checkpoint: Checkpoint,
    pub description: Option<String>,
    pub contributed: EnvVars,
}

impl Publication {
    /// Publicación vacía: contexto ausente, nada aplicado ni contribuido.
    pub fn skipped(checkpoint: Checkpoint) -> Self {
        Self { checkpoint,
               description: None,
               contributed: EnvVars::new() }
    }

    pub fn is_skipped(&self) -> bool {
        self.description.is_none()
    }
}

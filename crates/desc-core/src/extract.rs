//! Seam del extractor de facts de SCM.
//!
//! El core no sabe hablar con ningún backend concreto: recibe una capability
//! que, dada la ruta del workspace y el nodo de ejecución, devuelve el
//! mapping de facts derivados. Contrato (ver `desc-scm` para el backend git):
//! - Backend no soportado o ejecutable irresoluble -> mapping vacío.
//! - Fallo por fact (subproceso, I/O, parseo) -> `""` para ese fact.
//! - Nunca retorna error ni hace panic: la extracción es best-effort.

use std::path::Path;

use desc_domain::EnvVars;

use crate::listener::BuildListener;
use crate::model::Node;

pub trait FactExtractor {
    /// Deriva los facts contra `workspace`. `existing_env` participa en las
    /// reglas de precedencia del backend (p. ej. un `GIT_BRANCH` explícito
    /// del CI pisa a la rama inferida).
    fn extract(&self, workspace: &Path, node: &Node, existing_env: &EnvVars, listener: &mut dyn BuildListener) -> EnvVars;
}

/// Extractor nulo: nunca aporta facts. Útil para wiring de tests y para
/// hosts sin SCM configurado.
#[derive(Debug, Default)]
pub struct EmptyExtractor;

impl FactExtractor for EmptyExtractor {
    fn extract(&self, _workspace: &Path, _node: &Node, _existing_env: &EnvVars, _listener: &mut dyn BuildListener) -> EnvVars {
        EnvVars::new()
    }
}

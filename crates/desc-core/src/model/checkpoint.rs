//! Checkpoints del ciclo de vida de un build.
//!
//! El host invoca los callbacks en orden estricto dentro de un mismo build;
//! cada checkpoint dispara un recálculo completo de la descripción. El
//! último checkpoint en ejecutarse gana (sobrescritura incondicional).

use serde::{Deserialize, Serialize};

/// Puntos del ciclo de vida en los que se (re)publica la descripción.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Checkpoint {
    /// Antes de materializar el workspace. Workspace/nodo suelen no existir
    /// todavía, así que la extracción de SCM se omite.
    PreWork,
    /// Workspace y nodo ya conocidos: extracción completa y registro de la
    /// contribución de entorno con alcance build.
    PostSetup,
    /// Al finalizar el build: se repite extracción y expansión desde el
    /// estado actual para que la descripción persistida refleje el final.
    Teardown,
    /// Inicio de un build agregado (compuesto por sub-builds). Corre contra
    /// el contexto propio del agregado.
    AggregateStart,
    /// Fin de un build agregado.
    AggregateEnd,
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Checkpoint::PreWork => "pre-work",
            Checkpoint::PostSetup => "post-setup",
            Checkpoint::Teardown => "teardown",
            Checkpoint::AggregateStart => "aggregate-start",
            Checkpoint::AggregateEnd => "aggregate-end",
        };
        f.write_str(name)
    }
}

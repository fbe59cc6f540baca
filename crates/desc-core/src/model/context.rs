//! Contexto de build entregado por el host en cada checkpoint.

use std::path::PathBuf;

use desc_domain::EnvVars;
use uuid::Uuid;

/// Nodo de ejecución sobre el que corre el build. El resolver de ejecutables
/// del backend SCM puede depender de él (instalaciones por nodo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// Contexto creado por el host por cada intento de build. El core lo lee en
/// cada checkpoint (workspace/nodo pueden no estar disponibles al inicio);
/// la única mutación permitida es registrar la contribución de entorno.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub build_id: Uuid,
    pub workspace: Option<PathBuf>,
    pub node: Option<Node>,
    pub env: EnvVars,
}

impl BuildContext {
    /// Contexto mínimo: sin workspace ni nodo (estado típico en pre-work).
    pub fn new(env: EnvVars) -> Self {
        Self { build_id: Uuid::new_v4(),
               workspace: None,
               node: None,
               env }
    }

    /// Fija workspace y nodo (estado típico tras el checkout/setup).
    pub fn with_workspace<P: Into<PathBuf>>(mut self, workspace: P, node: Node) -> Self {
        self.workspace = Some(workspace.into());
        self.node = Some(node);
        self
    }

    /// Workspace + nodo disponibles: condición para ejecutar la extracción.
    pub fn can_extract(&self) -> bool {
        self.workspace.is_some() && self.node.is_some()
    }

    /// Registra variables nuevas con alcance build (persisten para los pasos
    /// posteriores). Last-writer-wins sobre el entorno existente.
    pub fn contribute(&mut self, vars: &EnvVars) {
        self.env.put_all(vars);
    }
}

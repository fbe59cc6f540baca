//! Capacidad de resolución del ejecutable del backend.
//!
//! Cada backend aporta una implementación explícita de `resolve(node)`; no
//! hay inspección de tipos en runtime. Una resolución fallida degrada a
//! mapping vacío antes de lanzar subproceso alguno.

use std::path::{Path, PathBuf};

use desc_core::Node;

pub trait GitExeResolver {
    /// Ruta del ejecutable para `node`, o None si no hay instalación
    /// utilizable en ese nodo.
    fn resolve(&self, node: &Node) -> Option<PathBuf>;
}

/// Ruta fija, configurada por el host (instalación conocida).
#[derive(Debug, Clone)]
pub struct FixedExe(pub PathBuf);

impl GitExeResolver for FixedExe {
    fn resolve(&self, _node: &Node) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Búsqueda en el PATH del proceso. Retorna None si el binario no aparece,
/// de modo que el extractor degrada sin intentar ejecutar nada.
#[derive(Debug, Clone)]
pub struct PathLookup {
    binary: String,
}

impl PathLookup {
    pub fn new<S: Into<String>>(binary: S) -> Self {
        Self { binary: binary.into() }
    }

    pub fn git() -> Self {
        Self::new("git")
    }
}

impl GitExeResolver for PathLookup {
    fn resolve(&self, _node: &Node) -> Option<PathBuf> {
        let path = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&path) {
            let candidate = dir.join(&self.binary);
            if is_executable(&candidate) {
                return Some(candidate);
            }
            #[cfg(windows)]
            {
                let candidate = dir.join(format!("{}.exe", self.binary));
                if is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

fn is_executable(path: &Path) -> bool {
    path.is_file()
}

//! Espacio de nombres de variables de entorno (`EnvVars`).
//!
//! Rol en el flujo:
//! - Cada checkpoint toma un snapshot del entorno del build, le superpone
//!   los facts derivados del SCM y expande la plantilla contra el resultado.
//! - El merge es por clave, last-writer-wins; el orden de inserción se
//!   conserva (IndexMap) para que la expansión sea reproducible.
//!
//! Invariantes:
//! - Claves case-sensitive y no vacías (clave vacía = `ValidationError`).
//! - La expansión nunca falla: un token `${NAME}` sin valor queda literal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Mapping plano nombre -> valor. Los valores pueden ser vacíos (los facts
/// de SCM degradan a `""` cuando la herramienta no responde).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVars {
    inner: IndexMap<String, String>,
}

impl EnvVars {
    /// Crea un namespace vacío.
    pub fn new() -> Self {
        Self { inner: IndexMap::new() }
    }

    /// Construye desde pares `(nombre, valor)`. Falla ante una clave vacía.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, DomainError>
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>
    {
        let mut env = Self::new();
        for (k, v) in pairs {
            env.insert(k, v)?;
        }
        Ok(env)
    }

    /// Inserta (o reemplaza) una variable. La clave no puede ser vacía.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) -> Result<(), DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::ValidationError("variable name must be non-empty".to_string()));
        }
        self.inner.insert(name, value.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Superpone `other` sobre `self` (las claves de `other` ganan).
    pub fn put_all(&mut self, other: &EnvVars) {
        for (k, v) in other.inner.iter() {
            self.inner.insert(k.clone(), v.clone());
        }
    }

    /// Versión no destructiva de `put_all`: snapshot + overlay.
    pub fn merged_with(&self, overlay: &EnvVars) -> EnvVars {
        let mut merged = self.clone();
        merged.put_all(overlay);
        merged
    }

    /// Expande tokens `${NAME}` contra este namespace.
    ///
    /// Sustitución plana, sin anidamiento ni condicionales. Un token cuyo
    /// nombre no está definido queda literal en la salida; un `${` sin `}`
    /// de cierre también. Determinista: misma entrada, misma salida.
    pub fn expand(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    match self.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("${");
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    // Token sin cerrar: se conserva tal cual hasta el final.
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl<'a> IntoIterator for &'a EnvVars {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

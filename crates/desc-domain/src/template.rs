//! Plantilla de descripción (`DescriptionTemplate`).
//!
//! Cadena inmutable fijada al configurar el job; puede referenciar cualquier
//! variable de entorno, incluidos los cuatro facts derivados del SCM. La
//! sintaxis es sustitución plana `${NAME}` (ver `EnvVars::expand`).

use serde::{Deserialize, Serialize};

use crate::env_vars::EnvVars;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionTemplate {
    raw: String,
}

impl DescriptionTemplate {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Expande la plantilla contra `env`. Azúcar sobre `EnvVars::expand`.
    pub fn expand(&self, env: &EnvVars) -> String {
        env.expand(&self.raw)
    }
}

impl std::fmt::Display for DescriptionTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for DescriptionTemplate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_delegates_to_env() {
        let tpl = DescriptionTemplate::new("rev ${GIT_REVISION}");
        let env = EnvVars::from_pairs([("GIT_REVISION", "deadbeef")]).unwrap();
        assert_eq!(tpl.expand(&env), "rev deadbeef");
    }
}

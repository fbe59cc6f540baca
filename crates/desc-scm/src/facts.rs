//! Conjunto de facts derivados del SCM.

use desc_core::constants;
use desc_domain::EnvVars;
use serde::{Deserialize, Serialize};

/// Los cuatro facts del contrato. Cada valor puede ser `""` (la consulta
/// correspondiente falló o no produjo salida); nunca falta una clave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmFacts {
    pub branch: String,
    pub revision: String,
    pub revision_short: String,
    pub author: String,
}

impl ScmFacts {
    /// Convierte al mapping que se superpone al entorno del build. Las
    /// claves son constantes no vacías, así que la inserción no puede fallar.
    pub fn into_env_vars(self) -> EnvVars {
        let mut env = EnvVars::new();
        env.insert(constants::GIT_BRANCH, self.branch).expect("fact key is non-empty");
        env.insert(constants::GIT_REVISION, self.revision).expect("fact key is non-empty");
        env.insert(constants::GIT_REVISION_SHORT, self.revision_short).expect("fact key is non-empty");
        env.insert(constants::GIT_AUTHOR, self.author).expect("fact key is non-empty");
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_vars_always_carry_the_four_keys() {
        let env = ScmFacts::default().into_env_vars();
        for key in constants::FACT_KEYS {
            assert_eq!(env.get(key), Some(""));
        }
    }
}

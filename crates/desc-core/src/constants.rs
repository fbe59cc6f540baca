//! Constantes del contrato de variables producidas.
//!
//! Los nombres de los cuatro facts derivados del SCM son parte del contrato
//! con los pasos posteriores del build: siempre strings, `""` cuando no se
//! pudieron determinar. Cambiarlos rompe plantillas existentes.

/// Rama del commit actual (normalizada: sin prefijo `remoto/`, `HEAD` -> default).
pub const GIT_BRANCH: &str = "GIT_BRANCH";
/// Hash completo del commit actual.
pub const GIT_REVISION: &str = "GIT_REVISION";
/// Hash abreviado del commit actual.
pub const GIT_REVISION_SHORT: &str = "GIT_REVISION_SHORT";
/// Autor del commit actual.
pub const GIT_AUTHOR: &str = "GIT_AUTHOR";

/// Las cuatro claves, en el orden en que se registran.
pub const FACT_KEYS: [&str; 4] = [GIT_BRANCH, GIT_REVISION, GIT_REVISION_SHORT, GIT_AUTHOR];

/// Marcador de detached-HEAD que reporta la herramienta.
pub const DETACHED_HEAD: &str = "HEAD";
/// Nombre de rama por defecto al que se reescribe `HEAD`.
pub const DEFAULT_BRANCH: &str = "master";

//! Descriptor del backend SCM configurado en el job.
//!
//! Unión etiquetada de backends conocidos con despacho por match explícito;
//! el default para cualquier otra configuración es `Unsupported`, que
//! produce mapping vacío (no un error).

use crate::git::GitScm;

pub enum Scm {
    /// VCS distribuido soportado (git).
    Git(GitScm),
    /// Cualquier otro backend: la extracción no aporta nada.
    Unsupported,
}

impl Scm {
    /// Construye el descriptor a partir del nombre de tipo que reporta la
    /// configuración del host. Solo se reconoce el backend git.
    pub fn from_type_name(type_name: &str, git: GitScm) -> Self {
        match type_name {
            "git" | "GitSCM" => Scm::Git(git),
            _ => Scm::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::PathLookup;

    #[test]
    fn unknown_type_names_map_to_unsupported() {
        let scm = Scm::from_type_name("SubversionSCM", GitScm::new(Box::new(PathLookup::git())));
        assert!(matches!(scm, Scm::Unsupported));
    }

    #[test]
    fn git_type_names_are_recognized() {
        let scm = Scm::from_type_name("git", GitScm::new(Box::new(PathLookup::git())));
        assert!(matches!(scm, Scm::Git(_)));
    }
}

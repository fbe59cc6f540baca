//! Backend git: deriva los cuatro facts desde el workspace.
//!
//! - Cuatro invocaciones independientes de la herramienta; el fallo de una
//!   no contamina a las demás (degrada a `""` y se anota en el listener).
//! - Precedencia de rama: un `GIT_BRANCH` explícito del CI pisa a la rama
//!   inferida con `br --contains`.
//! - Normalización: se recorta el prefijo hasta el último `/`
//!   (`origin/main` -> `main`) y `HEAD` se reescribe a la rama default.

use std::path::Path;

use desc_core::{constants, BuildListener, FactExtractor, Node};
use desc_domain::EnvVars;

use crate::descriptor::Scm;
use crate::facts::ScmFacts;
use crate::query::{branch_line, first_line, run_query};
use crate::resolver::GitExeResolver;

pub struct GitScm {
    resolver: Box<dyn GitExeResolver>,
}

impl GitScm {
    pub fn new(resolver: Box<dyn GitExeResolver>) -> Self {
        Self { resolver }
    }

    /// Deriva los facts contra `workspace`, o None si el ejecutable no se
    /// resuelve para `node` (en cuyo caso no se intenta ningún subproceso).
    pub fn derive_facts(&self, workspace: &Path, node: &Node, existing_env: &EnvVars, listener: &mut dyn BuildListener) -> Option<ScmFacts> {
        let exe = self.resolver.resolve(node)?;

        let revision = fact(&exe, &["log", "-n", "1", "--pretty=format:%H"], workspace, "revision", listener);
        let revision_short = fact(&exe, &["log", "-n", "1", "--pretty=format:%h"], workspace, "short revision", listener);
        let derived_branch = branch_fact(&exe, &["br", "--contains", revision.as_str()], workspace, listener);
        let author = fact(&exe, &["log", "-n", "1", "--pretty=format:%an"], workspace, "author", listener);

        let branch = normalize_branch(derived_branch, existing_env);

        Some(ScmFacts { branch,
                        revision,
                        revision_short,
                        author })
    }
}

impl std::fmt::Debug for GitScm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitScm").finish_non_exhaustive()
    }
}

/// Una consulta genérica: primera línea de stdout, `""` ante cualquier fallo.
fn fact(exe: &Path, args: &[&str], workspace: &Path, what: &str, listener: &mut dyn BuildListener) -> String {
    match run_query(exe, args, workspace) {
        Ok(lines) => first_line(&lines),
        Err(e) => {
            listener.log(&format!("scm {what} query failed: {e}"));
            log::warn!("scm {what} query failed in {}: {e}", workspace.display());
            String::new()
        }
    }
}

/// La consulta de rama, con la regla "no branch" (segunda línea).
fn branch_fact(exe: &Path, args: &[&str], workspace: &Path, listener: &mut dyn BuildListener) -> String {
    match run_query(exe, args, workspace) {
        Ok(lines) => branch_line(&lines),
        Err(e) => {
            listener.log(&format!("scm branch query failed: {e}"));
            log::warn!("scm branch query failed in {}: {e}", workspace.display());
            String::new()
        }
    }
}

/// Normalización de rama: override explícito del entorno, recorte del
/// prefijo separado por `/`, y reescritura del marcador detached-HEAD.
fn normalize_branch(derived: String, existing_env: &EnvVars) -> String {
    let mut branch = match existing_env.get(constants::GIT_BRANCH) {
        Some(explicit) => explicit.to_string(),
        None => derived,
    };
    if let Some(idx) = branch.rfind('/') {
        branch = branch[idx + 1..].to_string();
    }
    if branch == constants::DETACHED_HEAD {
        branch = constants::DEFAULT_BRANCH.to_string();
    }
    branch
}

/// Adaptador del descriptor al seam `FactExtractor` del core. Despacho por
/// match explícito sobre la unión de backends.
pub struct ScmFactExtractor {
    scm: Scm,
}

impl ScmFactExtractor {
    pub fn new(scm: Scm) -> Self {
        Self { scm }
    }
}

impl FactExtractor for ScmFactExtractor {
    fn extract(&self, workspace: &Path, node: &Node, existing_env: &EnvVars, listener: &mut dyn BuildListener) -> EnvVars {
        match &self.scm {
            Scm::Unsupported => EnvVars::new(),
            Scm::Git(git) => match git.derive_facts(workspace, node, existing_env, listener) {
                Some(facts) => facts.into_env_vars(),
                None => EnvVars::new(),
            },
        }
    }
}

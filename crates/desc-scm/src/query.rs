//! Invocación de la herramienta SCM como subproceso.
//!
//! Un intento por fact, sin retry ni timeout. `Command::output` espera al
//! hijo y drena stdout/stderr en todos los caminos de salida, incluido el
//! fallo, así que no quedan handles vivos. El parseo toma la primera línea
//! de stdout; la regla "no branch" (segunda línea) aplica solo a la
//! consulta de rama.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Marcador que emite la herramienta en estado detached/rebase al preguntar
/// qué ramas contienen el commit.
pub(crate) const NO_BRANCH_MARKER: &str = "no branch";

/// Fallo de una consulta individual. Siempre se degrada a `""` para ese
/// fact; nunca cruza el límite del extractor.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("launch failed: {0}")]
    Launch(#[from] std::io::Error),
    #[error("exit code {0}")]
    ExitCode(i32),
}

/// Ejecuta `<exe> <args>` en `workspace` y retorna las líneas de stdout
/// (texto de plataforma, decodificación lossy, sin terminadores).
pub(crate) fn run_query(exe: &Path, args: &[&str], workspace: &Path) -> Result<Vec<String>, QueryError> {
    let output = Command::new(exe).args(args).current_dir(workspace).output()?;
    if !output.status.success() {
        return Err(QueryError::ExitCode(output.status.code().unwrap_or(-1)));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(|l| l.trim_end_matches('\r').to_string()).collect())
}

/// Primera línea de la salida (`""` si no hubo salida).
pub(crate) fn first_line(lines: &[String]) -> String {
    lines.first().cloned().unwrap_or_default()
}

/// Variante para la consulta de rama: si la primera línea contiene
/// `"no branch"` y existe una segunda, se prefiere la segunda.
pub(crate) fn branch_line(lines: &[String]) -> String {
    match lines.first() {
        Some(first) if first.contains(NO_BRANCH_MARKER) && lines.len() > 1 => lines[1].clone(),
        Some(first) => first.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_line_takes_only_the_first() {
        assert_eq!(first_line(&lines(&["abc", "def"])), "abc");
        assert_eq!(first_line(&[]), "");
    }

    #[test]
    fn branch_line_prefers_second_on_no_branch() {
        assert_eq!(branch_line(&lines(&["no branch, rebasing main", "main"])), "main");
    }

    #[test]
    fn branch_line_keeps_single_no_branch_line() {
        // Sin segunda línea disponible no hay fallback.
        assert_eq!(branch_line(&lines(&["no branch, rebasing main"])), "no branch, rebasing main");
    }

    #[test]
    fn branch_line_plain_output() {
        assert_eq!(branch_line(&lines(&["main", "feature-x"])), "main");
        assert_eq!(branch_line(&[]), "");
    }

    #[cfg(unix)]
    #[test]
    fn run_query_captures_first_line() {
        // /bin/echo imprime sus argumentos: suficiente para validar el
        // contrato primera-línea sin depender de git.
        let out = run_query(Path::new("/bin/echo"), &["hola", "mundo"], Path::new("/tmp")).unwrap();
        assert_eq!(first_line(&out), "hola mundo");
    }

    #[test]
    fn run_query_missing_executable_is_an_error() {
        let err = run_query(Path::new("/definitely/not/here/scm-tool"), &["x"], Path::new(".")).unwrap_err();
        assert!(matches!(err, QueryError::Launch(_)));
    }
}

//! Capacidad de logging por build (`BuildListener`).
//!
//! Se pasa por referencia a cada checkpoint: ningún estado mutable de build
//! queda capturado en el core, y cada invocación es función pura de
//! (contexto, entorno, listener). Las líneas son advisory: la descripción es
//! cosmética y sus fallos nunca bloquean el build.

/// Sumidero de líneas de log con alcance build.
pub trait BuildListener {
    fn log(&mut self, line: &str);
}

/// Listener que descarta todo.
#[derive(Debug, Default)]
pub struct NullListener;

impl BuildListener for NullListener {
    fn log(&mut self, _line: &str) {}
}

/// Listener que acumula líneas en memoria (tests y diagnóstico).
#[derive(Debug, Default)]
pub struct BufferListener {
    pub lines: Vec<String>,
}

impl BuildListener for BufferListener {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

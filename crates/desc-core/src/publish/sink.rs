use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SinkError;
use crate::model::Checkpoint;

/// Primitiva del host "persistir la descripción del build". La escritura es
/// incondicional: el último checkpoint en ejecutarse gana.
pub trait DescriptionSink {
    fn set_description(&mut self, build_id: Uuid, checkpoint: Checkpoint, text: &str) -> Result<(), SinkError>;
}

/// Registro append-only de una escritura (para el sink in-memory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub seq: u64, // asignado por el sink in-memory (orden append)
    pub build_id: Uuid,
    pub checkpoint: Checkpoint,
    pub text: String,
    pub ts: DateTime<Utc>, // metadato diagnóstico
}

/// Sink in-memory: conserva el historial por build y expone el valor
/// vigente (la última escritura). Los builds están aislados por `build_id`.
pub struct InMemorySink { pub inner: HashMap<Uuid, Vec<DescriptionRecord>> }

impl Default for InMemorySink { fn default() -> Self { Self { inner: HashMap::new() } } }

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descripción vigente de un build (None si nunca se publicó).
    pub fn current(&self, build_id: Uuid) -> Option<&str> {
        self.inner.get(&build_id).and_then(|v| v.last()).map(|r| r.text.as_str())
    }

    /// Historial completo de escrituras de un build (orden ascendente por seq).
    pub fn history(&self, build_id: Uuid) -> Vec<DescriptionRecord> {
        self.inner.get(&build_id).cloned().unwrap_or_default()
    }
}

impl DescriptionSink for InMemorySink {
    fn set_description(&mut self, build_id: Uuid, checkpoint: Checkpoint, text: &str) -> Result<(), SinkError> {
        let vec = self.inner.entry(build_id).or_insert_with(Vec::new);
        let seq = vec.len() as u64;
        vec.push(DescriptionRecord { seq,
                                     build_id,
                                     checkpoint,
                                     text: text.to_string(),
                                     ts: Utc::now() });
        Ok(())
    }
}

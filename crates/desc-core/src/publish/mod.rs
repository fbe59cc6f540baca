//! Publicación de la descripción: trait del sink y motor de checkpoints.

mod setter;
mod sink;

pub use setter::DescriptionSetter;
pub use sink::{DescriptionRecord, DescriptionSink, InMemorySink};

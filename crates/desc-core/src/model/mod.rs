//! Modelos neutrales (BuildContext, Checkpoint, Publication,...)

pub mod checkpoint;
pub mod context;
pub mod publication;

pub use checkpoint::Checkpoint;
pub use context::{BuildContext, Node};
pub use publication::Publication;

// desc-scm library entry point
pub mod descriptor;
pub mod facts;
pub mod git;
pub mod query;
pub mod resolver;

pub use descriptor::Scm;
pub use facts::ScmFacts;
pub use git::{GitScm, ScmFactExtractor};
pub use query::QueryError;
pub use resolver::{FixedExe, GitExeResolver, PathLookup};

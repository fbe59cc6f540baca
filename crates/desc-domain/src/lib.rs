// desc-domain library entry point
pub mod env_vars;
pub mod error;
pub mod template;
pub use env_vars::EnvVars;
pub use error::DomainError;
pub use template::DescriptionTemplate;

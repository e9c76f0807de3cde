pub use crate::errors::{ErrorCategory, ErrorKind, RecastError, SourceContext};
pub use crate::engine::translate;

pub mod ast;
pub mod cli;
pub mod emit;
pub mod engine;
pub mod errors;
pub mod profiles;
pub mod syntax;

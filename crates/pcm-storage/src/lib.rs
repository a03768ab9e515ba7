//! File-side collaborators of the minifier: source path validation and
//! scoped output writing.

pub mod validator;
pub mod writer;

pub use validator::PathValidator;
pub use writer::{write_output, OutputWriter};

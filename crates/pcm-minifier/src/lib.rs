//! PHP code minifier. Strips redundant whitespace from PHP source while
//! leaving inline markup untouched.
//!
//! Stages:
//! 1. Validation: source path checks ([`pcm_storage::PathValidator`])
//! 2. Lexing: code/markup segments ([`pcm_lexer::Lexer`])
//! 3. Reassembly: minimal-space joining of code tokens ([`Reassembler`])
//! 4. Output: optional write to a target file

pub mod pipeline;
pub mod reassembler;
pub mod symbols;

pub use pcm_core::{ErrorKind, MinifierConfig, MinifyError, Result};
pub use pcm_lexer::{PhpScanner, Scanner};
pub use pipeline::{Minifier, MinifyResult};
pub use reassembler::Reassembler;

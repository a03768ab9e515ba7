//! Lexing for the PHP code minifier.
//!
//! Stages:
//! 1. Scanning: raw source → classified units ([`Scanner`], [`PhpScanner`])
//! 2. Padding correction: heredoc/nowdoc indentation removal
//! 3. Normalization: whitespace collapse, line comments to block form
//! 4. Segmentation: ordered code/markup [`Segment`](pcm_core::Segment)s

pub mod lexer;
pub mod normalize;
pub mod padding;
pub mod scanner;
pub mod traits;

pub use lexer::Lexer;
pub use scanner::PhpScanner;
pub use traits::Scanner;

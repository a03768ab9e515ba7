//! Shared types, errors and configuration for the PHP code minifier.

pub mod config;
pub mod error;
pub mod types;

pub use config::MinifierConfig;
pub use error::{ErrorKind, MinifyError, Result};
pub use types::{RawUnit, Segment, SegmentKind, TokenRecord, UnitCategory};

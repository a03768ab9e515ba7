use pcm_core::{RawUnit, Result};

/// Low-level lexical scanner feeding the [`Lexer`](crate::Lexer).
pub trait Scanner: Send + Sync {
    /// Split `text` into ordered, classified units. Concatenating the unit
    /// texts must give back `text`.
    fn scan(&self, text: &str) -> Result<Vec<RawUnit>>;

    /// Scanner name for diagnostics.
    fn name(&self) -> &'static str;
}

impl<S: Scanner + ?Sized> Scanner for &S {
    fn scan(&self, text: &str) -> Result<Vec<RawUnit>> {
        (**self).scan(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

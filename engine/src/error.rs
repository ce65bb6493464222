use thiserror::Error;

/// Errors produced by dictionary string inputs.
///
/// Absent words and prefixes are not errors; those surface as `None`
/// from the query operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DictError {
    /// A word or prefix contained a symbol outside `'a'..='z'` and `'\''`.
    #[error("invalid symbol {symbol:?} at byte {position}, expected 'a'..'z' or apostrophe")]
    InvalidSymbol { symbol: char, position: usize },
}

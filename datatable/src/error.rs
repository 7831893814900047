//! Error types

/// Errors raised while parsing or validating table parameters.
///
/// Table operations themselves never fail; these surface only where a caller
/// asks for validation up front (config or sort order text).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Sort order text was neither `asc` nor `desc`.
    #[error("Invalid sort order '{0}': expected 'asc' or 'desc'")]
    InvalidSortOrder(String),

    /// Page size must be at least 1.
    #[error("Invalid rows on page {0}: must be at least 1")]
    InvalidRowsOnPage(usize),

    /// Active page is 1-based.
    #[error("Invalid active page {0}: pages start at 1")]
    InvalidActivePage(usize),
}

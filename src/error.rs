use thiserror::Error;

/// Defines errors a translator backend may surface
///
/// The facade never propagates these to callers; a failing lookup is logged
/// and degrades to the original text.
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Error when failing to read a catalog source
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Error when failing to parse a catalog document
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Error when a catalog document has an unusable shape
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    /// Error raised by a custom backend
    #[error("Translator backend failed: {0}")]
    Backend(String),
}

//! Error types for xylem conversions.

use thiserror::Error;

/// Errors that can occur while converting a value tree to XML.
///
/// The conversion has a narrow failure surface: oddly-shaped data is skipped
/// rather than rejected, so the only hard errors are a bad configuration or a
/// failure reported by one of the external collaborators (value resolution or
/// DOM construction).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Value resolution failed: {0}")]
    Resolve(String),

    #[error("DOM construction failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

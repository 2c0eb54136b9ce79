//! Error types for htm-element.

/// Errors raised by htm-element.
///
/// Setters and `render` never fail. Errors come from writing markup to a
/// sink, encoding an href query or parsing declarative options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to write markup: {0}")]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	Markup(#[from] htm_markup::Error),
	#[error("invalid element options: {0}")]
	Options(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for pattern parsing.

use thiserror::Error;

/// Errors that can occur when parsing a printf-style pattern.
///
/// The formatting entry points never surface these: they parse patterns
/// lossily and fall back to literal text. `Pattern::parse` exposes them
/// for callers that want strict validation up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown conversion at position {position}: found '{found}'")]
    UnknownConversion { position: usize, found: char },

    #[error("unterminated directive at position {position}")]
    UnterminatedDirective { position: usize },
}

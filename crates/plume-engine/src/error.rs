use thiserror::Error;

/// Errors reported by the plume engine.
///
/// All of these surface at construction/validation time. Ticking an
/// animation that was built successfully never fails.
#[derive(Debug, Error)]
pub enum PlumeError {
    /// A color string was not `#rrggbb` (the leading `#` is optional).
    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),

    /// A configuration option is outside its accepted range.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    /// A color stop ratio outside `[0, 1]`.
    #[error("color stop ratio {0} is outside [0, 1]")]
    StopOutOfRange(f64),

    /// Options document could not be parsed.
    #[error("malformed options: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlumeError {
    pub(crate) fn option(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption { option, reason: reason.into() }
    }
}

use thiserror::Error;

/// Top-level error type for the linealis engine.
#[derive(Debug, Error)]
pub enum LinealisError {
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Errors reported by strict input validation.
///
/// The baseline pipeline never produces these: malformed numeric text parses
/// to `NaN` and flows through every formula unchanged, surfacing only as
/// non-finite display text. Validation is opt-in via
/// [`Session::strict`](crate::session::Session::strict).
#[derive(Debug, Error)]
pub enum FormError {
    #[error("field {field} is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`LinealisError`].
pub type Result<T> = std::result::Result<T, LinealisError>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Lower bound of the plotted viewport on both axes.
pub const PLOT_MIN: f64 = -10.0;

/// Upper bound of the plotted viewport on both axes.
pub const PLOT_MAX: f64 = 10.0;

/// Sampling step along a line when generating plottable points.
pub const PLOT_STEP: f64 = 0.5;

/// Abscissa of the fixed reference point used by the deriver and renderer.
///
/// For a non-vertical line the reference point is `(1, m + b)`.
pub const FIXED_REF_X: f64 = 1.0;

use crate::math::{Point2, Vector2, FIXED_REF_X};

/// The single normalized representation of a line in the plane.
///
/// Every input form resolves to one of these two variants. A vertical line
/// carries its x position directly instead of an infinite-slope sentinel, so
/// the deriver and renderer never compare against a magic float value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalLine {
    /// A vertical line `x = x` with undefined slope.
    Vertical { x: f64 },

    /// A non-vertical line `y = slope·x + intercept`.
    Sloped { slope: f64, intercept: f64 },
}

impl CanonicalLine {
    /// Returns whether the line is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical { .. })
    }

    /// Returns whether the line is horizontal.
    #[must_use]
    #[allow(clippy::float_cmp)] // a resolved zero slope is stored, not computed
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Sloped { slope, .. } if *slope == 0.0)
    }

    /// Returns the slope, or `None` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Self::Vertical { .. } => None,
            Self::Sloped { slope, .. } => Some(slope),
        }
    }

    /// Returns the y-intercept, or `None` for a vertical line.
    #[must_use]
    pub fn y_intercept(&self) -> Option<f64> {
        match *self {
            Self::Vertical { .. } => None,
            Self::Sloped { intercept, .. } => Some(intercept),
        }
    }

    /// Returns the x-intercept, or `None` for a horizontal line.
    #[must_use]
    pub fn x_intercept(&self) -> Option<f64> {
        match *self {
            Self::Vertical { x } => Some(x),
            Self::Sloped { .. } if self.is_horizontal() => None,
            Self::Sloped { slope, intercept } => Some(-intercept / slope),
        }
    }

    /// Evaluates `y` at the given `x`, or `None` for a vertical line.
    #[must_use]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Self::Vertical { .. } => None,
            Self::Sloped { slope, intercept } => Some(slope * x + intercept),
        }
    }

    /// The fixed reference point: `(1, m + b)`, or `(x, 0)` when vertical.
    #[must_use]
    pub fn reference_point(&self) -> Point2 {
        match *self {
            Self::Vertical { x } => Point2::new(x, 0.0),
            Self::Sloped { slope, intercept } => {
                Point2::new(FIXED_REF_X, slope * FIXED_REF_X + intercept)
            }
        }
    }

    /// Inclination angle against the positive x axis, in degrees.
    #[must_use]
    pub fn inclination_degrees(&self) -> f64 {
        match *self {
            Self::Vertical { .. } => 90.0,
            Self::Sloped { slope, .. } => slope.atan().to_degrees(),
        }
    }

    /// A direction vector of the line: `(0, 1)` when vertical, else `(1, m)`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        match *self {
            Self::Vertical { .. } => Vector2::new(0.0, 1.0),
            Self::Sloped { slope, .. } => Vector2::new(1.0, slope),
        }
    }

    /// A normal vector of the line.
    ///
    /// `(1, 0)` when vertical, `(0, 1)` when horizontal, else `(m, -1)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        match *self {
            Self::Vertical { .. } => Vector2::new(1.0, 0.0),
            Self::Sloped { .. } if self.is_horizontal() => Vector2::new(0.0, 1.0),
            Self::Sloped { slope, .. } => Vector2::new(slope, -1.0),
        }
    }
}

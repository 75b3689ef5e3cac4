use crate::error::{FormError, Result};

use super::CanonicalLine;

/// Raw numeric parameters for one of the seven supported input forms.
///
/// Exactly one variant is active at a time (the selected tab); its field
/// values are read fresh at calculation time and resolved to a
/// [`CanonicalLine`] via [`InputForm::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputForm {
    /// `y = m·x + b`.
    SlopeIntercept { m: f64, b: f64 },

    /// `y - y0 = m·(x - x0)`.
    PointSlope { m: f64, x0: f64, y0: f64 },

    /// The line through `(x1, y1)` and `(x2, y2)`.
    TwoPoints { x1: f64, y1: f64, x2: f64, y2: f64 },

    /// `x/a + y/b = 1` with x-intercept `a` and y-intercept `b`.
    Intercept { a: f64, b: f64 },

    /// The line through `(x0, y0)` along the direction vector `(u, v)`.
    PointDirection { x0: f64, y0: f64, u: f64, v: f64 },

    /// The line through `(x0, y0)` with normal vector `(a, b)`.
    PointNormal { x0: f64, y0: f64, a: f64, b: f64 },

    /// `a·x + b·y + c = 0`.
    General { a: f64, b: f64, c: f64 },
}

/// Fieldless tag identifying an input form, used by the tab interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SlopeIntercept,
    PointSlope,
    TwoPoints,
    Intercept,
    PointDirection,
    PointNormal,
    General,
}

impl FormKind {
    /// All seven form tags, in tab order.
    pub const ALL: [Self; 7] = [
        Self::SlopeIntercept,
        Self::PointSlope,
        Self::TwoPoints,
        Self::Intercept,
        Self::PointDirection,
        Self::PointNormal,
        Self::General,
    ];

    /// Human-readable name of the form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SlopeIntercept => "slope-intercept",
            Self::PointSlope => "point-slope",
            Self::TwoPoints => "two-point",
            Self::Intercept => "intercept",
            Self::PointDirection => "point-direction",
            Self::PointNormal => "point-normal",
            Self::General => "general",
        }
    }
}

impl InputForm {
    /// Returns the tag of the active variant.
    #[must_use]
    pub fn kind(&self) -> FormKind {
        match self {
            Self::SlopeIntercept { .. } => FormKind::SlopeIntercept,
            Self::PointSlope { .. } => FormKind::PointSlope,
            Self::TwoPoints { .. } => FormKind::TwoPoints,
            Self::Intercept { .. } => FormKind::Intercept,
            Self::PointDirection { .. } => FormKind::PointDirection,
            Self::PointNormal { .. } => FormKind::PointNormal,
            Self::General { .. } => FormKind::General,
        }
    }

    /// Normalizes the form to its canonical representation.
    ///
    /// Total over all numeric input: degenerate coefficients divide by zero
    /// and yield non-finite values rather than an error, and `NaN` fields
    /// pass through untouched. Use [`InputForm::validate`] first when strict
    /// behavior is wanted.
    #[must_use]
    #[allow(clippy::float_cmp)] // zero checks test user-entered values, not computed ones
    pub fn resolve(&self) -> CanonicalLine {
        match *self {
            Self::SlopeIntercept { m, b } => CanonicalLine::Sloped {
                slope: m,
                intercept: b,
            },
            Self::PointSlope { m, x0, y0 } => CanonicalLine::Sloped {
                slope: m,
                intercept: y0 - m * x0,
            },
            Self::TwoPoints { x1, y1, x2, y2 } => {
                if x1 == x2 {
                    CanonicalLine::Vertical { x: x1 }
                } else {
                    let slope = (y2 - y1) / (x2 - x1);
                    CanonicalLine::Sloped {
                        slope,
                        intercept: y1 - slope * x1,
                    }
                }
            }
            Self::Intercept { a, b } => {
                if a == 0.0 {
                    CanonicalLine::Vertical { x: 0.0 }
                } else {
                    CanonicalLine::Sloped {
                        slope: -b / a,
                        intercept: b,
                    }
                }
            }
            Self::PointDirection { x0, y0, u, v } => {
                if u == 0.0 {
                    CanonicalLine::Vertical { x: x0 }
                } else {
                    let slope = v / u;
                    CanonicalLine::Sloped {
                        slope,
                        intercept: y0 - slope * x0,
                    }
                }
            }
            Self::PointNormal { x0, y0, a, b } => {
                if b == 0.0 {
                    CanonicalLine::Vertical { x: x0 }
                } else {
                    CanonicalLine::Sloped {
                        slope: -a / b,
                        intercept: (a * x0 + b * y0) / b,
                    }
                }
            }
            Self::General { a, b, c } => {
                if b == 0.0 {
                    CanonicalLine::Vertical { x: -c / a }
                } else {
                    CanonicalLine::Sloped {
                        slope: -a / b,
                        intercept: -c / b,
                    }
                }
            }
        }
    }

    /// Checks the form for degenerate input.
    ///
    /// This is the opt-in strict mode; the baseline pipeline resolves
    /// degenerate input silently.
    ///
    /// # Errors
    ///
    /// - `FormError::NonFinite` if any field is `NaN` or infinite
    /// - `FormError::DegenerateInput` for coincident points or all-zero
    ///   coefficients
    /// - `FormError::ZeroVector` for a zero direction or normal vector
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(FormError::NonFinite { field, value }.into());
            }
        }
        match *self {
            Self::TwoPoints { x1, y1, x2, y2 } if x1 == x2 && y1 == y2 => {
                Err(FormError::DegenerateInput("the two points coincide".into()).into())
            }
            Self::Intercept { a, b } if a == 0.0 && b == 0.0 => {
                Err(FormError::DegenerateInput("both intercepts are zero".into()).into())
            }
            Self::PointDirection { u, v, .. } if u == 0.0 && v == 0.0 => {
                Err(FormError::ZeroVector.into())
            }
            Self::PointNormal { a, b, .. } if a == 0.0 && b == 0.0 => {
                Err(FormError::ZeroVector.into())
            }
            Self::General { a, b, .. } if a == 0.0 && b == 0.0 => Err(FormError::DegenerateInput(
                "coefficients a and b are both zero".into(),
            )
            .into()),
            _ => Ok(()),
        }
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::SlopeIntercept { m, b } => vec![("m", m), ("b", b)],
            Self::PointSlope { m, x0, y0 } => vec![("m", m), ("x0", x0), ("y0", y0)],
            Self::TwoPoints { x1, y1, x2, y2 } => {
                vec![("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]
            }
            Self::Intercept { a, b } => vec![("a", a), ("b", b)],
            Self::PointDirection { x0, y0, u, v } => {
                vec![("x0", x0), ("y0", y0), ("u", u), ("v", v)]
            }
            Self::PointNormal { x0, y0, a, b } => {
                vec![("x0", x0), ("y0", y0), ("a", a), ("b", b)]
            }
            Self::General { a, b, c } => vec![("a", a), ("b", b), ("c", c)],
        }
    }
}

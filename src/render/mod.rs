use crate::geometry::CanonicalLine;
use crate::math::FIXED_REF_X;

/// Shown for the intercept form when the line passes through the origin.
const NOT_APPLICABLE: &str = "not applicable (passes through origin)";

/// Formatted display output: one string per equation form plus the scalar
/// readouts.
///
/// Every displayed float is rounded to one decimal place. Non-finite values
/// print their standard markers; rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationTexts {
    /// Slope, or `"undefined"` for a vertical line.
    pub slope: String,
    /// x-intercept, or `"none"` for a horizontal line.
    pub x_intercept: String,
    /// y-intercept, or `"none"` for a vertical line.
    pub y_intercept: String,
    /// Inclination angle in degrees, with a `°` suffix.
    pub angle: String,
    /// Direction vector, e.g. `(1, 2.0)`.
    pub direction_vector: String,
    /// Normal vector, e.g. `(2.0, -1)`.
    pub normal_vector: String,

    pub slope_intercept: String,
    pub point_slope: String,
    pub two_points: String,
    pub intercept: String,
    pub point_direction: String,
    pub point_normal: String,
    pub general: String,
}

/// Renders every equation form and scalar readout for a canonical line.
///
/// Non-vertical, non-horizontal forms are expressed in terms of the fixed
/// reference point `(1, m + b)` and the x-intercept. Output is deterministic:
/// identical input yields byte-identical text.
#[must_use]
#[allow(clippy::float_cmp)] // a resolved zero slope is stored, not computed
pub fn render(line: &CanonicalLine) -> EquationTexts {
    match *line {
        CanonicalLine::Vertical { x } => render_vertical(x),
        CanonicalLine::Sloped { slope, intercept } if slope == 0.0 => render_horizontal(intercept),
        CanonicalLine::Sloped { slope, intercept } => render_sloped(slope, intercept),
    }
}

fn render_vertical(x: f64) -> EquationTexts {
    // Every form collapses to the identity x = <value>; the raw value is
    // shown unrounded.
    let axis = format!("x = {x}");
    EquationTexts {
        slope: "undefined".to_owned(),
        x_intercept: format!("{x}"),
        y_intercept: "none".to_owned(),
        angle: "90°".to_owned(),
        direction_vector: "(0, 1)".to_owned(),
        normal_vector: "(1, 0)".to_owned(),
        slope_intercept: axis.clone(),
        point_slope: axis.clone(),
        two_points: axis.clone(),
        intercept: axis,
        point_direction: format!("(x-{x})/0 = (y-0)/1"),
        point_normal: format!("1(x-{x}) + 0(y-0) = 0"),
        general: format!("x - {x} = 0"),
    }
}

#[allow(clippy::float_cmp)]
fn render_horizontal(b: f64) -> EquationTexts {
    EquationTexts {
        slope: "0.0".to_owned(),
        x_intercept: "none".to_owned(),
        y_intercept: format!("{b:.1}"),
        angle: "0°".to_owned(),
        direction_vector: "(1, 0)".to_owned(),
        normal_vector: "(0, 1)".to_owned(),
        slope_intercept: format!("y = {b:.1}"),
        point_slope: format!("y - {b:.1} = 0(x - 0)"),
        two_points: format!("(y-{b:.1})/0 = (x-0)/1"),
        intercept: if b == 0.0 {
            NOT_APPLICABLE.to_owned()
        } else {
            format!("y = {b:.1}")
        },
        point_direction: format!("(x-{FIXED_REF_X})/1 = (y-{b:.1})/0"),
        point_normal: format!("0(x-{FIXED_REF_X}) + 1(y-{b:.1}) = 0"),
        general: format!("y - {b:.1} = 0"),
    }
}

#[allow(clippy::float_cmp)]
fn render_sloped(m: f64, b: f64) -> EquationTexts {
    let ref_y = m * FIXED_REF_X + b;
    let xi = -b / m;
    let angle = m.atan().to_degrees();

    // Unit coefficients are suppressed: "x" and "-x", never "1.0x".
    let mut slope_intercept = String::from("y = ");
    if m.abs() != 1.0 {
        slope_intercept.push_str(&format!("{m:.1}"));
    } else if m == -1.0 {
        slope_intercept.push('-');
    }
    slope_intercept.push('x');
    if b > 0.0 {
        slope_intercept.push_str(&format!(" + {b:.1}"));
    } else if b < 0.0 {
        slope_intercept.push_str(&format!(" - {:.1}", b.abs()));
    }

    let intercept = if xi != 0.0 && b != 0.0 {
        format!("x/{xi:.1} + y/{b:.1} = 1")
    } else {
        NOT_APPLICABLE.to_owned()
    };

    let mut general = format!("{m:.1}x - y");
    if b > 0.0 {
        general.push_str(&format!(" + {b:.1} = 0"));
    } else if b < 0.0 {
        general.push_str(&format!(" - {:.1} = 0", b.abs()));
    } else {
        general.push_str(" = 0");
    }

    EquationTexts {
        slope: format!("{m:.1}"),
        x_intercept: format!("{xi:.1}"),
        y_intercept: format!("{b:.1}"),
        angle: format!("{angle:.1}°"),
        direction_vector: format!("(1, {m:.1})"),
        normal_vector: format!("({m:.1}, -1)"),
        slope_intercept,
        point_slope: format!("y - {ref_y:.1} = {m:.1}(x - {FIXED_REF_X})"),
        two_points: format!(
            "(y-{ref_y:.1})/{:.1} = (x-{FIXED_REF_X})/{:.1}",
            b - ref_y,
            xi - FIXED_REF_X
        ),
        intercept,
        point_direction: format!("(x-{FIXED_REF_X})/1 = (y-{ref_y:.1})/{m:.1}"),
        point_normal: format!("{m:.1}(x-{FIXED_REF_X}) - 1(y-{ref_y:.1}) = 0"),
        general,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::InputForm;

    fn rendered(form: InputForm) -> EquationTexts {
        render(&form.resolve())
    }

    #[test]
    fn example_line_scalars() {
        // y = 2x + 1
        let texts = rendered(InputForm::SlopeIntercept { m: 2.0, b: 1.0 });
        assert_eq!(texts.slope, "2.0");
        assert_eq!(texts.x_intercept, "-0.5");
        assert_eq!(texts.y_intercept, "1.0");
        assert_eq!(texts.angle, "63.4°");
        assert_eq!(texts.direction_vector, "(1, 2.0)");
        assert_eq!(texts.normal_vector, "(2.0, -1)");
    }

    #[test]
    fn example_line_equations() {
        let texts = rendered(InputForm::SlopeIntercept { m: 2.0, b: 1.0 });
        assert_eq!(texts.slope_intercept, "y = 2.0x + 1.0");
        assert_eq!(texts.point_slope, "y - 3.0 = 2.0(x - 1)");
        assert_eq!(texts.two_points, "(y-3.0)/-2.0 = (x-1)/-1.5");
        assert_eq!(texts.intercept, "x/-0.5 + y/1.0 = 1");
        assert_eq!(texts.point_direction, "(x-1)/1 = (y-3.0)/2.0");
        assert_eq!(texts.point_normal, "2.0(x-1) - 1(y-3.0) = 0");
        assert_eq!(texts.general, "2.0x - y + 1.0 = 0");
    }

    #[test]
    fn unit_slope_suppresses_the_coefficient() {
        let texts = rendered(InputForm::SlopeIntercept { m: 1.0, b: 2.0 });
        assert_eq!(texts.slope_intercept, "y = x + 2.0");

        let texts = rendered(InputForm::SlopeIntercept { m: -1.0, b: 3.0 });
        assert_eq!(texts.slope_intercept, "y = -x + 3.0");
    }

    #[test]
    fn negative_intercept_renders_as_subtraction() {
        let texts = rendered(InputForm::SlopeIntercept { m: 2.0, b: -1.5 });
        assert_eq!(texts.slope_intercept, "y = 2.0x - 1.5");
        assert_eq!(texts.general, "2.0x - y - 1.5 = 0");
    }

    #[test]
    fn zero_intercept_omits_the_term() {
        let texts = rendered(InputForm::SlopeIntercept { m: 2.0, b: 0.0 });
        assert_eq!(texts.slope_intercept, "y = 2.0x");
        assert_eq!(texts.general, "2.0x - y = 0");
        assert_eq!(texts.intercept, NOT_APPLICABLE);
    }

    #[test]
    fn vertical_line_round_trip() {
        let texts = rendered(InputForm::TwoPoints {
            x1: 2.0,
            y1: 0.0,
            x2: 2.0,
            y2: 5.0,
        });
        assert_eq!(texts.slope, "undefined");
        assert_eq!(texts.x_intercept, "2");
        assert_eq!(texts.y_intercept, "none");
        assert_eq!(texts.angle, "90°");
        assert_eq!(texts.direction_vector, "(0, 1)");
        assert_eq!(texts.normal_vector, "(1, 0)");
        assert_eq!(texts.slope_intercept, "x = 2");
        assert_eq!(texts.point_direction, "(x-2)/0 = (y-0)/1");
        assert_eq!(texts.point_normal, "1(x-2) + 0(y-0) = 0");
        assert_eq!(texts.general, "x - 2 = 0");
    }

    #[test]
    fn horizontal_line_round_trip() {
        let texts = rendered(InputForm::SlopeIntercept { m: 0.0, b: -1.0 });
        assert_eq!(texts.slope, "0.0");
        assert_eq!(texts.x_intercept, "none");
        assert_eq!(texts.angle, "0°");
        assert_eq!(texts.direction_vector, "(1, 0)");
        assert_eq!(texts.normal_vector, "(0, 1)");
        assert_eq!(texts.slope_intercept, "y = -1.0");
        assert_eq!(texts.point_slope, "y - -1.0 = 0(x - 0)");
        assert_eq!(texts.two_points, "(y--1.0)/0 = (x-0)/1");
        assert_eq!(texts.intercept, "y = -1.0");
        assert_eq!(texts.point_direction, "(x-1)/1 = (y--1.0)/0");
        assert_eq!(texts.point_normal, "0(x-1) + 1(y--1.0) = 0");
        assert_eq!(texts.general, "y - -1.0 = 0");
    }

    #[test]
    fn horizontal_line_through_origin_has_no_intercept_form() {
        let texts = rendered(InputForm::SlopeIntercept { m: 0.0, b: 0.0 });
        assert_eq!(texts.intercept, NOT_APPLICABLE);
    }

    #[test]
    fn rendering_is_idempotent() {
        let form = InputForm::PointSlope {
            m: 2.0,
            x0: 0.0,
            y0: 1.0,
        };
        assert_eq!(rendered(form), rendered(form));
    }

    #[test]
    fn degenerate_input_renders_non_finite_markers() {
        let texts = rendered(InputForm::General {
            a: 0.0,
            b: 0.0,
            c: 1.0,
        });
        assert_eq!(texts.slope, "undefined");
        assert!(texts.general.contains("inf"), "{}", texts.general);
    }

    #[test]
    fn nan_input_renders_nan_markers() {
        let texts = rendered(InputForm::SlopeIntercept {
            m: f64::NAN,
            b: 1.0,
        });
        assert!(texts.slope.contains("NaN"), "{}", texts.slope);
        assert!(texts.general.contains("NaN"), "{}", texts.general);
    }
}

use crate::geometry::CanonicalLine;
use crate::math::{Point2, PLOT_MAX, PLOT_MIN, PLOT_STEP};

/// Renderable geometry for one line.
///
/// Fully materialized, recomputed from scratch on every call; a new set
/// completely replaces the previous one on the plot surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryArtifacts {
    /// Dense samples along the line itself.
    pub line_points: Vec<Point2>,

    /// Intercepts and reference points, drawn as markers.
    pub key_points: Vec<Point2>,

    /// Endpoints of the drawn direction vector.
    pub direction_segment: [Point2; 2],

    /// Endpoints of the drawn normal vector.
    pub normal_segment: [Point2; 2],
}

/// Samples plottable geometry for a canonical line.
///
/// Line points cover the viewport at half-unit spacing (41 samples). The
/// direction and normal segments are anchored at the reference point for a
/// general line, at the y-intercept for a horizontal line, and on the x axis
/// for a vertical line.
#[must_use]
#[allow(clippy::float_cmp)] // a resolved zero slope is stored, not computed
pub fn derive(line: &CanonicalLine) -> GeometryArtifacts {
    match *line {
        CanonicalLine::Vertical { x } => GeometryArtifacts {
            line_points: viewport_samples().map(|y| Point2::new(x, y)).collect(),
            key_points: (0..=10)
                .map(|i| Point2::new(x, PLOT_MIN + 2.0 * f64::from(i)))
                .collect(),
            direction_segment: [Point2::new(x, 0.0), Point2::new(x, 2.0)],
            normal_segment: [Point2::new(x, 0.0), Point2::new(x + 2.0, 0.0)],
        },
        CanonicalLine::Sloped { slope, intercept: b } if slope == 0.0 => {
            let mut key_points = vec![Point2::new(0.0, b)];
            if b != 0.0 {
                // The guard tests b, not the slope; the division yields an
                // infinite x that lands outside the viewport.
                key_points.push(Point2::new(-b / slope, 0.0));
            }
            GeometryArtifacts {
                line_points: viewport_samples().map(|x| Point2::new(x, b)).collect(),
                key_points,
                direction_segment: [Point2::new(0.0, b), Point2::new(2.0, b)],
                normal_segment: [Point2::new(0.0, b), Point2::new(0.0, b + 2.0)],
            }
        }
        CanonicalLine::Sloped { slope, intercept } => {
            let reference = line.reference_point();
            GeometryArtifacts {
                line_points: viewport_samples()
                    .map(|x| Point2::new(x, slope * x + intercept))
                    .collect(),
                key_points: vec![
                    Point2::new(0.0, intercept),
                    Point2::new(-intercept / slope, 0.0),
                    reference,
                ],
                direction_segment: [
                    reference,
                    Point2::new(reference.x + 1.0, reference.y + slope),
                ],
                normal_segment: [
                    reference,
                    Point2::new(reference.x + slope, reference.y - 1.0),
                ],
            }
        }
    }
}

/// Sample positions from one viewport edge to the other, step 0.5, inclusive.
fn viewport_samples() -> impl Iterator<Item = f64> {
    let steps = ((PLOT_MAX - PLOT_MIN) / PLOT_STEP).round() as i32;
    (0..=steps).map(|i| PLOT_MIN + PLOT_STEP * f64::from(i))
}

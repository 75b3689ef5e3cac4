use crate::math::{Point2, PLOT_MAX, PLOT_MIN};
use crate::tessellation::GeometryArtifacts;

/// Rendering surface for the four plotted datasets.
///
/// Implemented by whatever draws the chart; the engine only fills the slots
/// and triggers a redraw. Each call fully replaces the slot's previous
/// contents.
pub trait PlotSurface {
    /// Replaces the dense line samples.
    fn set_line_points(&mut self, points: &[Point2]);

    /// Replaces the marker points (intercepts and reference point).
    fn set_key_points(&mut self, points: &[Point2]);

    /// Replaces the drawn direction vector.
    fn set_direction_segment(&mut self, segment: [Point2; 2]);

    /// Replaces the drawn normal vector.
    fn set_normal_segment(&mut self, segment: [Point2; 2]);

    /// Repaints the surface from the current slot contents.
    fn redraw(&mut self);

    /// Pushes a full set of artifacts into the four slots and redraws.
    fn apply(&mut self, artifacts: &GeometryArtifacts) {
        self.set_line_points(&artifacts.line_points);
        self.set_key_points(&artifacts.key_points);
        self.set_direction_segment(artifacts.direction_segment);
        self.set_normal_segment(artifacts.normal_segment);
        self.redraw();
    }
}

/// Affine mapping between pixel space and the plotted plane.
///
/// The plane is the fixed −10..10 viewport on both axes. Pixel space has its
/// origin at the top-left corner of the surface with y growing downward, as
/// delivered by pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMapping {
    width_px: f64,
    height_px: f64,
}

impl PlaneMapping {
    /// Creates a mapping for a surface of the given pixel size.
    #[must_use]
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Converts a pixel position to plane coordinates.
    #[must_use]
    pub fn plane_at(&self, px: f64, py: f64) -> Point2 {
        let span = PLOT_MAX - PLOT_MIN;
        Point2::new(
            PLOT_MIN + px / self.width_px * span,
            PLOT_MAX - py / self.height_px * span,
        )
    }

    /// Converts plane coordinates back to a pixel position.
    #[must_use]
    pub fn pixel_at(&self, point: &Point2) -> (f64, f64) {
        let span = PLOT_MAX - PLOT_MIN;
        (
            (point.x - PLOT_MIN) / span * self.width_px,
            (PLOT_MAX - point.y) / span * self.height_px,
        )
    }

    /// One-decimal coordinate readout for the pointer position.
    #[must_use]
    pub fn readout(&self, px: f64, py: f64) -> String {
        let point = self.plane_at(px, py);
        format!("({:.1}, {:.1})", point.x, point.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[derive(Default)]
    struct RecordingSurface {
        line_points: Vec<Point2>,
        key_points: Vec<Point2>,
        direction_segment: Option<[Point2; 2]>,
        normal_segment: Option<[Point2; 2]>,
        redraws: usize,
    }

    impl PlotSurface for RecordingSurface {
        fn set_line_points(&mut self, points: &[Point2]) {
            self.line_points = points.to_vec();
        }

        fn set_key_points(&mut self, points: &[Point2]) {
            self.key_points = points.to_vec();
        }

        fn set_direction_segment(&mut self, segment: [Point2; 2]) {
            self.direction_segment = Some(segment);
        }

        fn set_normal_segment(&mut self, segment: [Point2; 2]) {
            self.normal_segment = Some(segment);
        }

        fn redraw(&mut self) {
            self.redraws += 1;
        }
    }

    #[test]
    fn apply_fills_all_slots_and_redraws() {
        use crate::geometry::CanonicalLine;

        let artifacts = crate::tessellation::derive(&CanonicalLine::Sloped {
            slope: 2.0,
            intercept: 1.0,
        });
        let mut surface = RecordingSurface::default();
        surface.apply(&artifacts);

        assert_eq!(surface.line_points.len(), 41);
        assert_eq!(surface.key_points.len(), 3);
        assert!(surface.direction_segment.is_some());
        assert!(surface.normal_segment.is_some());
        assert_eq!(surface.redraws, 1);
    }

    #[test]
    fn pixel_corners_map_to_viewport_corners() {
        let mapping = PlaneMapping::new(400.0, 400.0);

        let top_left = mapping.plane_at(0.0, 0.0);
        assert!((top_left.x - PLOT_MIN).abs() < TOLERANCE);
        assert!((top_left.y - PLOT_MAX).abs() < TOLERANCE);

        let bottom_right = mapping.plane_at(400.0, 400.0);
        assert!((bottom_right.x - PLOT_MAX).abs() < TOLERANCE);
        assert!((bottom_right.y - PLOT_MIN).abs() < TOLERANCE);

        let center = mapping.plane_at(200.0, 200.0);
        assert!(center.x.abs() < TOLERANCE);
        assert!(center.y.abs() < TOLERANCE);
    }

    #[test]
    fn pixel_round_trip() {
        let mapping = PlaneMapping::new(640.0, 480.0);
        let point = Point2::new(3.5, -7.0);
        let (px, py) = mapping.pixel_at(&point);
        let back = mapping.plane_at(px, py);
        assert!((back.x - point.x).abs() < TOLERANCE);
        assert!((back.y - point.y).abs() < TOLERANCE);
    }

    #[test]
    fn readout_rounds_to_one_decimal() {
        let mapping = PlaneMapping::new(400.0, 400.0);
        assert_eq!(mapping.readout(200.0, 200.0), "(0.0, 0.0)");
        assert_eq!(mapping.readout(250.0, 100.0), "(2.5, 5.0)");
    }
}

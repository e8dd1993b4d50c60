use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Angle of "straight up" in screen coordinates (y grows downward).
pub const UP: f64 = -std::f64::consts::FRAC_PI_2;

/// A straight line segment in the diagram plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl LineSegment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }
}

/// Moves both endpoints of a segment inward by `amount`.
///
/// Segments shorter than `2 * amount` (including zero-length ones) are
/// returned unchanged, so very close atoms never produce an inverted stroke.
pub fn shorten_line(segment: LineSegment, amount: f64) -> LineSegment {
    let length = segment.length();
    if length == 0.0 || length < 2.0 * amount {
        return segment;
    }
    let step = segment.direction() * (amount / length);
    LineSegment::new(segment.start + step, segment.end - step)
}

/// Translates a segment perpendicular to its direction by a signed `offset`.
///
/// The normal is the direction rotated by +90°, so `+d` and `-d` give the two
/// rails of a multi-line bond. A zero-length segment has no normal and is
/// returned unchanged.
pub fn offset_line(segment: LineSegment, offset: f64) -> LineSegment {
    let length = segment.length();
    if length == 0.0 {
        return segment;
    }
    let direction = segment.direction() / length;
    let shift = Vector2::new(-direction.y, direction.x) * offset;
    LineSegment::new(segment.start + shift, segment.end + shift)
}

/// Angle of the vector pointing from `from` to `to`, in radians.
pub fn angle_towards(from: &Point2<f64>, to: &Point2<f64>) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Offset of length `radius` in the direction `angle`.
pub fn polar_offset(angle: f64, radius: f64) -> Vector2<f64> {
    Vector2::new(angle.cos() * radius, angle.sin() * radius)
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    fn assert_point_eq(actual: Point2<f64>, expected: Point2<f64>) {
        assert!(
            (actual - expected).norm() < TOLERANCE,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn shorten_line_moves_both_endpoints_inward() {
        let shortened = shorten_line(segment(0.0, 0.0, 10.0, 0.0), 2.0);

        assert_point_eq(shortened.start, Point2::new(2.0, 0.0));
        assert_point_eq(shortened.end, Point2::new(8.0, 0.0));
    }

    #[test]
    fn shorten_line_follows_diagonal_direction() {
        let shortened = shorten_line(segment(0.0, 0.0, 3.0, 4.0), 1.0);

        assert_point_eq(shortened.start, Point2::new(0.6, 0.8));
        assert_point_eq(shortened.end, Point2::new(2.4, 3.2));
        assert!((shortened.length() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn shorten_line_leaves_too_short_segments_unchanged() {
        let original = segment(0.0, 0.0, 3.0, 0.0);

        assert_eq!(shorten_line(original, 2.0), original);
        assert_eq!(shorten_line(original, 10.0), original);
    }

    #[test]
    fn shorten_line_leaves_zero_length_segment_unchanged() {
        let point = segment(1.0, 1.0, 1.0, 1.0);
        let shortened = shorten_line(point, 0.0);

        assert_eq!(shortened, point);
        assert!(shortened.start.x.is_finite());
    }

    #[test]
    fn offset_line_translates_along_left_normal() {
        let shifted = offset_line(segment(0.0, 0.0, 10.0, 0.0), 3.0);

        assert_point_eq(shifted.start, Point2::new(0.0, 3.0));
        assert_point_eq(shifted.end, Point2::new(10.0, 3.0));
    }

    #[test]
    fn opposite_offsets_are_parallel_and_two_offsets_apart() {
        let base = segment(1.0, 2.0, 7.0, 10.0);
        let d = 2.5;
        let upper = offset_line(base, d);
        let lower = offset_line(base, -d);

        let direction = base.direction().normalize();
        assert!((upper.direction().normalize() - direction).norm() < TOLERANCE);
        assert!((lower.direction().normalize() - direction).norm() < TOLERANCE);

        let gap = upper.start - lower.start;
        let along = gap.dot(&direction);
        let perpendicular = (gap - direction * along).norm();
        assert!(along.abs() < TOLERANCE);
        assert!((perpendicular - 2.0 * d).abs() < TOLERANCE);
    }

    #[test]
    fn offset_line_leaves_zero_length_segment_unchanged() {
        let point = segment(4.0, -2.0, 4.0, -2.0);
        assert_eq!(offset_line(point, 5.0), point);
    }

    #[test]
    fn angle_towards_uses_screen_orientation() {
        let origin = Point2::new(0.0, 0.0);

        assert!((angle_towards(&origin, &Point2::new(1.0, 0.0))).abs() < TOLERANCE);
        assert!((angle_towards(&origin, &Point2::new(0.0, -1.0)) - UP).abs() < TOLERANCE);
        assert!((angle_towards(&origin, &Point2::new(-1.0, 0.0)) - PI).abs() < TOLERANCE);
    }

    #[test]
    fn polar_offset_has_requested_radius() {
        let offset = polar_offset(FRAC_PI_2, 4.0);
        assert!((offset - Vector2::new(0.0, 4.0)).norm() < TOLERANCE);
        assert!((polar_offset(1.234, 7.0).norm() - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn normalize_angle_wraps_into_full_turn() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < TOLERANCE);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < TOLERANCE);
        assert_eq!(normalize_angle(0.0), 0.0);
    }
}

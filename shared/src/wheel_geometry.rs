use crate::constants::{
    FULL_TURN, LABEL_RADIUS_RATIO, MAX_TILT_DEG, MOBILE_BREAKPOINT_PX, TILT_RANGE_PX,
    WHEEL_SIZE_LARGE, WHEEL_SIZE_SMALL,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn wheel_size_for_width(viewport_width: f64) -> u32 {
    if viewport_width < MOBILE_BREAKPOINT_PX {
        WHEEL_SIZE_SMALL
    } else {
        WHEEL_SIZE_LARGE
    }
}

pub fn segment_angle(segments: usize) -> f64 {
    FULL_TURN / segments.max(1) as f64
}

/// Angle is measured clockwise from twelve o'clock.
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let radians = (angle_deg - 90.0).to_radians();
    Point {
        x: center_x + radius * radians.cos(),
        y: center_y + radius * radians.sin(),
    }
}

/// SVG path for one wedge, closed through the center.
pub fn describe_arc(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    // An arc whose endpoints coincide renders nothing, so a full turn is two halves
    if end_angle - start_angle >= FULL_TURN {
        let top = polar_to_cartesian(x, y, radius, start_angle);
        let bottom = polar_to_cartesian(x, y, radius, start_angle + FULL_TURN / 2.0);
        return format!(
            "M {} {} A {} {} 0 1 0 {} {} A {} {} 0 1 0 {} {} Z",
            top.x, top.y, radius, radius, bottom.x, bottom.y, radius, radius, top.x, top.y
        );
    }

    let start = polar_to_cartesian(x, y, radius, end_angle);
    let end = polar_to_cartesian(x, y, radius, start_angle);
    let large_arc_flag = if end_angle - start_angle <= 180.0 { "0" } else { "1" };

    format!(
        "M {} {} A {} {} 0 {} 0 {} {} L {} {} L {} {}",
        start.x, start.y, radius, radius, large_arc_flag, end.x, end.y, x, y, start.x, start.y
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub position: Point,
    pub rotation: f64,
}

pub fn label_anchor(center: f64, radius: f64, index: usize, segments: usize) -> LabelAnchor {
    let seg = segment_angle(segments);
    let mid = index as f64 * seg + seg / 2.0;
    LabelAnchor {
        position: polar_to_cartesian(center, center, radius * LABEL_RADIUS_RATIO, mid),
        rotation: mid + 90.0,
    }
}

/// CSS-style cubic-bezier timing curve anchored at (0,0) and (1,1).
/// 3D tilt of the wheel toward the pointer, as `(rotate_x, rotate_y)` degrees.
/// Offsets are measured from the wheel center with y growing downward.
pub fn pointer_tilt(offset_x: f64, offset_y: f64) -> (f64, f64) {
    let scale = |offset: f64| (offset / TILT_RANGE_PX).clamp(-1.0, 1.0) * MAX_TILT_DEG;
    (-scale(offset_y), scale(offset_x))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    fn sample(a: f64, b: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    }

    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        // x(s) is monotone for control x values in [0,1]
        let (mut lo, mut hi) = (0.0, 1.0);
        let mut s = 0.5;
        for _ in 0..40 {
            let x = Self::sample(self.x1, self.x2, s);
            if (x - t).abs() < 1e-7 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, s).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_wheel_size_breakpoint() {
        assert_eq!(wheel_size_for_width(375.0), 320);
        assert_eq!(wheel_size_for_width(767.9), 320);
        assert_eq!(wheel_size_for_width(768.0), 500);
        assert_eq!(wheel_size_for_width(1440.0), 500);
    }

    #[test]
    fn test_polar_zero_points_up() {
        let p = polar_to_cartesian(100.0, 100.0, 50.0, 0.0);
        assert!(close(p.x, 100.0));
        assert!(close(p.y, 50.0));

        let p = polar_to_cartesian(100.0, 100.0, 50.0, 90.0);
        assert!(close(p.x, 150.0));
        assert!(close(p.y, 100.0));
    }

    #[test]
    fn test_describe_arc_large_flag() {
        let small = describe_arc(50.0, 50.0, 50.0, 0.0, 90.0);
        assert!(small.contains(" 0 0 0 "));
        let half = describe_arc(50.0, 50.0, 50.0, 0.0, 180.0);
        assert!(half.contains(" 0 0 0 "));
        let large = describe_arc(50.0, 50.0, 50.0, 0.0, 270.0);
        assert!(large.contains(" 0 1 0 "));
    }

    #[test]
    fn test_describe_arc_closes_through_center() {
        let path = describe_arc(50.0, 50.0, 50.0, 0.0, 90.0);
        assert!(path.starts_with("M 100 50"));
        assert!(path.contains("L 50 50"));
        assert!(path.ends_with("L 100 50"));
    }

    #[test]
    fn test_describe_arc_full_circle() {
        let path = describe_arc(50.0, 50.0, 50.0, 0.0, 360.0);
        assert!(path.starts_with("M 50 0 A 50 50 0 1 0 "));
        assert_eq!(path.matches(" A ").count(), 2);
        assert!(path.ends_with("50 0 Z"));
        assert!(!path.contains("L 50 50"));

        let bottom = polar_to_cartesian(50.0, 50.0, 50.0, 180.0);
        assert!(close(bottom.x, 50.0) && close(bottom.y, 100.0));
    }

    #[test]
    fn test_pointer_tilt() {
        assert_eq!(pointer_tilt(0.0, 0.0), (0.0, 0.0));
        let (x, y) = pointer_tilt(50.0, -100.0);
        assert!(close(x, 5.0));
        assert!(close(y, 2.5));
        let (x, y) = pointer_tilt(-400.0, 400.0);
        assert!(close(x, -5.0));
        assert!(close(y, -5.0));
    }

    #[test]
    fn test_label_anchor_on_mid_angle() {
        let anchor = label_anchor(100.0, 100.0, 0, 4);
        assert!(close(anchor.rotation, 135.0));
        let expected = polar_to_cartesian(100.0, 100.0, 72.0, 45.0);
        assert!(close(anchor.position.x, expected.x));
        assert!(close(anchor.position.y, expected.y));
    }

    #[test]
    fn test_bezier_endpoints_and_monotone() {
        let curve = CubicBezier::new(0.2, 0.8, 0.2, 1.0);
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-1.0), 0.0);
        assert_eq!(curve.ease(2.0), 1.0);

        let mut prev = 0.0;
        for i in 1..=100 {
            let v = curve.ease(i as f64 / 100.0);
            assert!(v + 1e-6 >= prev);
            prev = v;
        }
        // strong ease-out: most of the distance is covered early
        assert!(curve.ease(0.3) > 0.6);
    }

    #[test]
    fn test_linear_bezier() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        assert!((linear.ease(0.5) - 0.5).abs() < 1e-4);
    }
}

use glam::Vec2;

/// Rotate `point` about `center` by `angle` radians.
///
/// Sign convention: `x' = cos·dx + sin·dy`, `y' = cos·dy − sin·dx`. This is the
/// mirror of the textbook counter-clockwise matrix, i.e. positive angles turn
/// clockwise in a y-up frame. The star field's trail segments depend on it:
/// rotating by `-rotation` here matches a canvas `rotate(rotation)` transform.
#[inline]
pub fn rotate_around(center: Vec2, point: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Vec2::new(cos * d.x + sin * d.y + center.x, cos * d.y - sin * d.x + center.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn zero_angle_is_identity() {
        let c = Vec2::new(3.0, -2.0);
        let p = Vec2::new(10.0, 7.0);
        assert!(close(rotate_around(c, p, 0.0), p));
    }

    #[test]
    fn quarter_turn_uses_mirrored_convention() {
        // (1, 0) about the origin by +90° lands on (0, -1), not (0, 1).
        let p = rotate_around(Vec2::ZERO, Vec2::X, FRAC_PI_2);
        assert!(close(p, Vec2::new(0.0, -1.0)), "{p}");
    }

    #[test]
    fn negative_angle_matches_canvas_rotation() {
        // canvas rotate(θ) maps (dx, dy) to (dx cosθ − dy sinθ, dx sinθ + dy cosθ)
        let theta = 0.7_f32;
        let c = Vec2::new(400.0, 300.0);
        let p = Vec2::new(400.0, 450.0);
        let d = p - c;
        let canvas = c + Vec2::new(
            d.x * theta.cos() - d.y * theta.sin(),
            d.x * theta.sin() + d.y * theta.cos(),
        );
        assert!(close(rotate_around(c, p, -theta), canvas));
    }

    #[test]
    fn preserves_distance_to_center() {
        let c = Vec2::new(5.0, 5.0);
        let p = Vec2::new(9.0, 2.0);
        let r = rotate_around(c, p, 2.3);
        assert!(((r - c).length() - (p - c).length()).abs() < 1e-4);
    }

    #[test]
    fn half_turn_mirrors_through_center() {
        let c = Vec2::new(1.0, 1.0);
        let p = Vec2::new(4.0, 1.0);
        assert!(close(rotate_around(c, p, PI), Vec2::new(-2.0, 1.0)));
    }
}

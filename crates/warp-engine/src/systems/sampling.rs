//! Named random distributions used when spawning stars and particles.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::core::rng::Rng;

/// Star angular speed band, degrees per time unit.
pub const STAR_SPEED_DEG: (f32, f32) = (1.5, 4.0);
/// Star stroke width band.
pub const STAR_SIZE: (f32, f32) = (0.5, 4.5);
/// Vertical jitter added to a star's expanded position.
pub const EXPANSE_JITTER: f32 = 20.0;

/// Orbital radius: the mean of one draw from the inner band
/// `[1, 1 + max_orbit/2)` and one from the outer band
/// `[max_orbit, 1.5·max_orbit)`.
///
/// Density peaks around `0.75·max_orbit`.
pub fn orbital_radius(rng: &mut Rng, max_orbit: f32) -> f32 {
    let inner = rng.range(1.0, 1.0 + max_orbit / 2.0);
    let outer = rng.range(max_orbit, max_orbit * 1.5);
    (inner + outer) / 2.0
}

/// Angular speed in radians per time unit, uniform over `STAR_SPEED_DEG`.
pub fn angular_speed(rng: &mut Rng) -> f32 {
    rng.range(STAR_SPEED_DEG.0, STAR_SPEED_DEG.1) * PI / 180.0
}

/// Phase offset, uniform over `[0, 2π)`.
pub fn start_rotation(rng: &mut Rng) -> f32 {
    rng.range(0.0, TAU)
}

/// Star stroke width, uniform over `STAR_SIZE`.
pub fn star_size(rng: &mut Rng) -> f32 {
    rng.range(STAR_SIZE.0, STAR_SIZE.1)
}

/// Jitter added to the banded expanse position, uniform over `[0, EXPANSE_JITTER)`.
pub fn expanse_jitter(rng: &mut Rng) -> f32 {
    rng.range(0.0, EXPANSE_JITTER)
}

/// Per-particle speed cap, uniform over `range`.
pub fn max_speed(rng: &mut Rng, range: (f32, f32)) -> f32 {
    rng.range(range.0, range.1)
}

/// Per-particle steering force cap, uniform over `range`.
pub fn max_force(rng: &mut Rng, range: (f32, f32)) -> f32 {
    rng.range(range.0, range.1)
}

/// Particle stroke width, uniform over `range`.
pub fn particle_size(rng: &mut Rng, range: (f32, f32)) -> f32 {
    rng.range(range.0, range.1)
}

/// Uniform point in a `width × height` box centred on the origin.
pub fn point_in_viewport(rng: &mut Rng, width: f32, height: f32) -> Vec2 {
    let hw = width.max(0.0) / 2.0;
    let hh = height.max(0.0) / 2.0;
    Vec2::new(rng.range(-hw, hw), rng.range(-hh, hh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbital_radius_stays_in_band() {
        let mut rng = Rng::new(11);
        let max_orbit = 305.0;
        for _ in 0..5000 {
            let r = orbital_radius(&mut rng, max_orbit);
            assert!(r >= (1.0 + max_orbit) / 2.0 - 1e-3, "r = {r}");
            assert!(r < (1.0 + max_orbit / 2.0 + max_orbit * 1.5) / 2.0, "r = {r}");
        }
    }

    #[test]
    fn orbital_radius_peaks_mid_band() {
        let mut rng = Rng::new(5);
        let max_orbit = 300.0;
        let n = 20_000;
        let mean: f32 = (0..n).map(|_| orbital_radius(&mut rng, max_orbit)).sum::<f32>() / n as f32;
        // E = (76 + 375) / 2 = 225.5, roughly 0.75 · max_orbit
        assert!((mean - 225.5).abs() < 3.0, "mean = {mean}");
    }

    #[test]
    fn angular_speed_in_degree_band() {
        let mut rng = Rng::new(8);
        for _ in 0..1000 {
            let s = angular_speed(&mut rng).to_degrees();
            assert!(s >= 1.5 - 1e-4 && s < 4.0 + 1e-4, "s = {s}");
        }
    }

    #[test]
    fn particle_limits_respect_ranges() {
        let mut rng = Rng::new(21);
        for _ in 0..1000 {
            let s = max_speed(&mut rng, (1.0, 8.0));
            let f = max_force(&mut rng, (0.05, 0.9));
            let w = particle_size(&mut rng, (0.5, 4.5));
            assert!((1.0..8.0).contains(&s));
            assert!((0.05..0.9).contains(&f));
            assert!((0.5..4.5).contains(&w));
        }
    }

    #[test]
    fn viewport_points_are_centered() {
        let mut rng = Rng::new(2);
        for _ in 0..1000 {
            let p = point_in_viewport(&mut rng, 800.0, 600.0);
            assert!(p.x >= -400.0 && p.x < 400.0);
            assert!(p.y >= -300.0 && p.y < 300.0);
        }
        assert_eq!(point_in_viewport(&mut rng, 0.0, -5.0), Vec2::ZERO);
    }
}

//! Seek steering and Euler integration for swarm agents.

use glam::Vec2;

/// Motion state of a steered agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Hard cap on |velocity|, also the desired speed when seeking.
    pub max_speed: f32,
    /// Cap on the steering force produced by a single `seek`.
    pub max_force: f32,
}

impl Kinematics {
    pub fn new(position: Vec2, max_speed: f32, max_force: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            max_speed: sanitize_limit(max_speed),
            max_force: sanitize_limit(max_force),
        }
    }

    /// Steer toward `target` at full speed. No braking on arrival, so agents
    /// overshoot and circle a moving target instead of parking on it.
    pub fn seek(&mut self, target: Vec2) {
        if !target.is_finite() {
            return;
        }
        let desired = (target - self.position).normalize_or_zero() * self.max_speed;
        let steer = (desired - self.velocity).clamp_length_max(self.max_force);
        self.apply_force(steer);
    }

    pub fn apply_force(&mut self, force: Vec2) {
        if force.is_finite() {
            self.acceleration += force;
        }
    }

    /// velocity += acceleration (capped at `max_speed`), position += velocity,
    /// acceleration reset.
    pub fn integrate(&mut self) {
        self.velocity = (self.velocity + self.acceleration).clamp_length_max(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

fn sanitize_limit(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_accelerates_toward_target() {
        let mut k = Kinematics::new(Vec2::ZERO, 4.0, 0.5);
        k.seek(Vec2::new(100.0, 0.0));
        assert!((k.acceleration - Vec2::new(0.5, 0.0)).length() < 1e-6);
        k.integrate();
        assert!(k.position.x > 0.0);
        assert_eq!(k.acceleration, Vec2::ZERO);
    }

    #[test]
    fn velocity_never_exceeds_max_speed() {
        let mut k = Kinematics::new(Vec2::ZERO, 3.0, 50.0);
        let targets = [
            Vec2::new(1e6, 0.0),
            Vec2::new(-1e6, 1e6),
            Vec2::new(0.0, -5.0),
            Vec2::new(3.0, 3.0),
        ];
        for step in 0..500 {
            k.seek(targets[step % targets.len()]);
            k.apply_force(Vec2::new(1e4, -1e4));
            k.integrate();
            assert!(k.speed() <= 3.0 + 1e-4, "step {step}: |v| = {}", k.speed());
        }
    }

    #[test]
    fn acceleration_resets_after_integrate() {
        let mut k = Kinematics::new(Vec2::ZERO, 2.0, 1.0);
        k.apply_force(Vec2::new(0.3, 0.4));
        k.integrate();
        assert_eq!(k.acceleration, Vec2::ZERO);
        assert!((k.velocity - Vec2::new(0.3, 0.4)).length() < 1e-6);
    }

    #[test]
    fn seek_on_target_adds_only_braking() {
        // Sitting on the target: desired is zero, steering just opposes velocity.
        let mut k = Kinematics::new(Vec2::new(5.0, 5.0), 2.0, 0.1);
        k.velocity = Vec2::new(1.0, 0.0);
        k.seek(Vec2::new(5.0, 5.0));
        assert!((k.acceleration - Vec2::new(-0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn non_finite_inputs_are_ignored() {
        let mut k = Kinematics::new(Vec2::ZERO, f32::INFINITY, f32::NAN);
        assert_eq!(k.max_speed, 0.0);
        assert_eq!(k.max_force, 0.0);

        let mut k = Kinematics::new(Vec2::ZERO, 2.0, 1.0);
        k.seek(Vec2::new(f32::NAN, 0.0));
        k.apply_force(Vec2::new(f32::INFINITY, 0.0));
        k.integrate();
        assert!(k.position.is_finite());
        assert!(k.velocity.is_finite());
    }

    #[test]
    fn overshoots_instead_of_settling() {
        let mut k = Kinematics::new(Vec2::ZERO, 5.0, 1.0);
        let target = Vec2::new(20.0, 0.0);
        let mut passed = false;
        for _ in 0..60 {
            k.seek(target);
            k.integrate();
            if k.position.x > target.x {
                passed = true;
                break;
            }
        }
        assert!(passed, "seek should carry the agent past the target");
    }
}

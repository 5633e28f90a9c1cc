//! Orientation shared by the point and link transforms

use std::f64::consts::TAU;

use glam::{Quat, Vec2};

use super::config::RotationMode;
use super::pointer::PointerState;

/// Euler rotation (x, y) in radians, damped toward a target each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub angles: Vec2,
    /// Accumulated drift target, kept within one turn
    drift: f64,
}

impl Orientation {
    /// Close `damping` of the remaining gap to `target`.
    /// For damping in (0, 1) the approach is monotone and never overshoots.
    #[inline]
    pub fn approach(&mut self, target: Vec2, damping: f32) {
        self.angles += (target - self.angles) * damping;
    }

    /// Move toward this frame's target for `mode`.
    pub fn step(&mut self, mode: RotationMode, pointer: Option<PointerState>, tilt: f32, damping: f32) {
        let target = match mode {
            RotationMode::Pointer => pointer_target(pointer, tilt),
            RotationMode::Drift { rate } => self.advance_drift(rate),
            RotationMode::Fixed => return,
        };
        self.approach(target, damping);
    }

    /// Add `rate` to the drift target. Whole turns are shifted out of both
    /// the target and the angles so neither grows without bound.
    fn advance_drift(&mut self, rate: f32) -> Vec2 {
        self.drift += rate as f64;
        if self.drift.abs() >= TAU {
            let shift = self.drift.div_euclid(TAU) * TAU;
            self.drift -= shift;
            self.angles -= Vec2::splat(shift as f32);
        }
        Vec2::splat(self.drift as f32)
    }

    pub fn quat(&self) -> Quat {
        Quat::from_rotation_y(self.angles.y) * Quat::from_rotation_x(self.angles.x)
    }
}

/// Tilt toward the pointer; rest orientation when there is none.
pub fn pointer_target(pointer: Option<PointerState>, tilt: f32) -> Vec2 {
    match pointer {
        Some(p) => Vec2::new(-p.y * tilt, p.x * tilt),
        None => Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Angular difference folded into (-pi, pi]
    fn wrapped_delta(a: f32, b: f32) -> f32 {
        let d = (b - a).rem_euclid(std::f32::consts::TAU);
        if d > std::f32::consts::PI {
            d - std::f32::consts::TAU
        } else {
            d
        }
    }

    #[test]
    fn test_converges_monotonically_without_overshoot() {
        let target = Vec2::new(0.4, -0.3);
        let mut o = Orientation::default();
        let mut prev_gap = (target - o.angles).length();
        for _ in 0..100 {
            o.approach(target, 0.1);
            let gap = (target - o.angles).length();
            assert!(gap < prev_gap);
            // Same side of the target on every axis
            assert!(o.angles.x <= target.x && o.angles.y >= target.y);
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-4);
    }

    #[test]
    fn test_full_damping_snaps() {
        let mut o = Orientation::default();
        o.approach(Vec2::new(1.0, 2.0), 1.0);
        assert_eq!(o.angles, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_pointer_targets() {
        let p = Some(PointerState::new(1.0, 0.5));
        assert_eq!(pointer_target(p, 0.5), Vec2::new(-0.25, 0.5));
        assert_eq!(pointer_target(None, 0.5), Vec2::ZERO);

        let mut o = Orientation::default();
        o.step(RotationMode::Pointer, p, 0.5, 1.0);
        assert_eq!(o.angles, Vec2::new(-0.25, 0.5));
    }

    #[test]
    fn test_fixed_never_moves() {
        let mut o = Orientation { angles: Vec2::ONE, ..Default::default() };
        for _ in 0..10 {
            o.step(RotationMode::Fixed, Some(PointerState::new(1.0, 1.0)), 0.5, 0.5);
        }
        assert_eq!(o.angles, Vec2::ONE);
    }

    #[test]
    fn test_drift_accumulates_rate() {
        let mut o = Orientation::default();
        for _ in 0..10 {
            o.step(RotationMode::Drift { rate: 0.001 }, None, 0.5, 1.0);
        }
        assert!((o.angles - Vec2::splat(0.01)).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_drift_step_constant_after_many_turns() {
        // Start where a frame-count based target would have lost precision
        let mut o = Orientation { drift: TAU - 0.0005, ..Default::default() };
        o.angles = Vec2::splat(o.drift as f32);
        let rate = 0.001;
        for _ in 0..20_000 {
            let before = o.angles;
            o.step(RotationMode::Drift { rate }, None, 0.5, 1.0);
            assert!((wrapped_delta(before.x, o.angles.x) - rate).abs() < 1e-5);
            assert!(o.drift.abs() < TAU);
            assert!(o.angles.x.abs() <= std::f32::consts::TAU + 0.01);
        }
    }

    #[test]
    fn test_drift_wrap_preserves_gap() {
        let mut damped = Orientation { drift: TAU - 0.0005, ..Default::default() };
        damped.step(RotationMode::Drift { rate: 0.001 }, None, 0.5, 0.1);
        // Target wrapped to 0.0005, angles shifted by the same turn
        assert!((damped.drift - 0.0005).abs() < 1e-9);
        let expected = (-TAU as f32) * 0.9 + 0.0005 * 0.1;
        assert!((damped.angles.x - expected).abs() < 1e-4);
    }
}

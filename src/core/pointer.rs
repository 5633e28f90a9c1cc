//! Pointer state and its mapping into field space

use glam::Vec3;

/// Pointer position normalized to [-1, 1] on both axes, +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Normalize absolute pixel coordinates against the viewport size.
    /// Returns None for an empty viewport.
    pub fn from_pixels(px: f32, py: f32, width: f32, height: f32) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        Some(Self::new(
            (px / width) * 2.0 - 1.0,
            -((py / height) * 2.0 - 1.0),
        ))
    }

    /// Pointer position in field coordinates (z = 0 plane).
    #[inline]
    pub fn to_field(self, scale: f32) -> Vec3 {
        Vec3::new(self.x * scale, self.y * scale, 0.0)
    }
}

/// Linear falloff weight: `influence` at the target, 0 at and beyond `capture`.
#[inline]
pub fn pull_weight(distance: f32, capture: f32, influence: f32) -> f32 {
    if distance >= capture {
        return 0.0;
    }
    (capture - distance) / capture * influence
}

/// Move `point` toward `target` by its falloff weight.
#[inline]
pub fn attract(point: Vec3, target: Vec3, capture: f32, influence: f32) -> Vec3 {
    let weight = pull_weight(point.distance(target), capture, influence);
    if weight == 0.0 {
        return point;
    }
    point + (target - point) * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels() {
        let p = PointerState::from_pixels(0.0, 0.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState { x: -1.0, y: 1.0 });

        let p = PointerState::from_pixels(400.0, 300.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState { x: 0.0, y: 0.0 });

        let p = PointerState::from_pixels(800.0, 600.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState { x: 1.0, y: -1.0 });

        // Outside the viewport clamps
        let p = PointerState::from_pixels(1600.0, -600.0, 800.0, 600.0).unwrap();
        assert_eq!(p, PointerState { x: 1.0, y: 1.0 });

        assert_eq!(PointerState::from_pixels(10.0, 10.0, 0.0, 600.0), None);
    }

    #[test]
    fn test_to_field() {
        let p = PointerState::new(0.5, -1.0);
        assert_eq!(p.to_field(2.5), Vec3::new(1.25, -2.5, 0.0));
    }

    #[test]
    fn test_no_pull_at_or_beyond_capture() {
        assert_eq!(pull_weight(2.0, 2.0, 0.5), 0.0);
        assert_eq!(pull_weight(3.0, 2.0, 0.5), 0.0);
        assert_eq!(pull_weight(0.0, 2.0, 0.5), 0.5);

        let point = Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(attract(point, Vec3::ZERO, 2.0, 0.5), point);
    }

    #[test]
    fn test_pull_continuous_at_boundary() {
        let just_inside = pull_weight(2.0 - 1e-4, 2.0, 0.5);
        assert!(just_inside > 0.0 && just_inside < 1e-4);
    }

    #[test]
    fn test_attract_moves_toward_target() {
        let target = Vec3::new(1.0, 1.0, 0.0);
        let point = Vec3::new(1.0, 2.0, 0.0); // distance 1, weight 0.25
        let moved = attract(point, target, 2.0, 0.5);
        assert!((moved - Vec3::new(1.0, 1.75, 0.0)).length() < 1e-6);
        assert!(moved.distance(target) < point.distance(target));
    }
}

//! Perspective projection of field coordinates onto a 2D viewport
//!
//! Used by the CPU painter; a GPU path would upload `point_data()` /
//! `segment_data()` and do the same in a vertex shader.

use glam::{Quat, Vec2, Vec3};

/// Camera on the +z axis looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Vertical field of view, radians
    pub fov_y: f32,
    pub camera_distance: f32,
    pub near: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 75f32.to_radians(),
            camera_distance: 12.0,
            near: 0.1,
        }
    }
}

/// A projected point: pixel position plus size attenuation factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub pos: Vec2,
    /// 1.0 at the origin's depth, larger when closer to the camera
    pub scale: f32,
}

impl Projection {
    /// Project `p` after `rotation` into the viewport rectangle
    /// `[origin, origin + size]` (pixels, +y down). None when behind the near plane.
    pub fn project(&self, p: Vec3, rotation: Quat, origin: Vec2, size: Vec2) -> Option<Projected> {
        let r = rotation * p;
        let depth = self.camera_distance - r.z;
        if depth < self.near {
            return None;
        }

        let focal = 1.0 / (self.fov_y * 0.5).tan();
        let half_height = size.y * 0.5;
        let ndc = Vec2::new(r.x, -r.y) * (focal / depth);
        Some(Projected {
            pos: origin + size * 0.5 + ndc * half_height,
            scale: self.camera_distance / depth,
        })
    }
}

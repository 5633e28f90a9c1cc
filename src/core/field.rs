//! Particle field animator
//!
//! Owns the point cloud, the proximity graph fixed at construction and the
//! edge geometry derived from both. The host calls [`ParticleField::update`]
//! once per display refresh and reads the buffers back for drawing.

use glam::{Quat, Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::FieldConfig;
use super::error::ConfigError;
use super::graph::{build_edges, write_segments, Edge, Segment};
use super::pointer::{attract, PointerState};
use super::rotation::Orientation;
use super::sampling::sample_points;

/// Per-frame input supplied by the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Latest pointer position, if the pointer is over the view
    pub pointer: Option<PointerState>,
    /// False while the drawing surface is not mounted yet
    pub surface_ready: bool,
}

impl FrameInput {
    pub fn ready(pointer: Option<PointerState>) -> Self {
        Self {
            pointer,
            surface_ready: true,
        }
    }
}

#[derive(Debug)]
pub struct ParticleField {
    config: FieldConfig,
    points: Vec<Vec3>,
    edges: Vec<Edge>,
    segments: Vec<Segment>,
    orientation: Orientation,
    /// Oscillation clock; f64 so the fixed step stays exact over long sessions
    time: f64,
    frame: u64,
}

impl ParticleField {
    /// Sample a new field with the caller's RNG.
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let points = sample_points(config.distribution, config.radius, config.point_count, rng);
        Ok(Self::build(config, points))
    }

    /// Reproducible field from a fixed seed.
    pub fn seeded(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, &mut SmallRng::seed_from_u64(seed))
    }

    /// Field over known coordinates. `point_count` is taken from `points`.
    pub fn from_points(mut config: FieldConfig, points: Vec<Vec3>) -> Result<Self, ConfigError> {
        config.point_count = points.len();
        config.validate()?;
        Ok(Self::build(config, points))
    }

    fn build(config: FieldConfig, points: Vec<Vec3>) -> Self {
        let edges = build_edges(&points, config.threshold);
        let mut segments = vec![Segment::default(); edges.len()];
        write_segments(&points, &edges, &mut segments);

        debug!(
            points = points.len(),
            edges = edges.len(),
            threshold = config.threshold,
            "Particle field built"
        );

        Self {
            config,
            points,
            edges,
            segments,
            orientation: Orientation::default(),
            time: 0.0,
            frame: 0,
        }
    }

    /// Advance one frame. Returns false (and changes nothing) when the
    /// surface is not ready.
    pub fn update(&mut self, input: &FrameInput) -> bool {
        if !input.surface_ready {
            trace!(frame = self.frame, "Surface not ready, frame skipped");
            return false;
        }

        self.time += f64::from(self.config.time_step);
        self.frame += 1;

        if self.config.oscillation {
            let t = self.time;
            let k = self.config.amplitude;
            for (i, p) in self.points.iter_mut().enumerate() {
                *p += oscillation_offset(t, i, k);
            }
        }

        if self.config.pointer_influence {
            if let Some(pointer) = input.pointer {
                let target = pointer.to_field(self.config.radius * self.config.pointer_scale);
                let capture = self.config.capture_radius;
                let influence = self.config.influence;
                for p in self.points.iter_mut() {
                    *p = attract(*p, target, capture, influence);
                }
            }
        }

        write_segments(&self.points, &self.edges, &mut self.segments);

        self.orientation.step(
            self.config.rotation,
            input.pointer,
            self.config.tilt,
            self.config.damping,
        );

        true
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Points as packed xyz triples.
    pub fn point_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Segments as packed (x, y, z, x, y, z) sextuples.
    pub fn segment_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.segments)
    }

    /// Rotation applied to both points and segments.
    pub fn orientation(&self) -> Vec2 {
        self.orientation.angles
    }

    /// Same rotation as a quaternion, for transforming the buffers.
    pub fn rotation(&self) -> Quat {
        self.orientation.quat()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Per-point oscillation step. Each component is bounded by `k`.
#[inline]
pub fn oscillation_offset(t: f64, index: usize, k: f32) -> Vec3 {
    let i = index as f64;
    let phase = t + i;
    Vec3::new(
        phase.sin() as f32 * k,
        phase.cos() as f32 * k,
        (t + 0.5 * i).sin() as f32 * k,
    )
}

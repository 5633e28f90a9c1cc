//! Proximity graph over the initial point set
//!
//! - Edge: fixed pair of point indices, `a < b`
//! - Segment: GPU-ready pair of endpoint positions (24 bytes)

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Connection between two points, recorded once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    #[inline]
    pub fn indices(self) -> (usize, usize) {
        (self.a as usize, self.b as usize)
    }
}

/// Line segment endpoints as rendered.
/// Layout is 6 consecutive f32s so a slice casts straight into a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Segment {
    pub start: [f32; 3],
    pub end: [f32; 3],
}

impl Segment {
    #[inline]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start: start.to_array(),
            end: end.to_array(),
        }
    }

    #[inline]
    pub fn start(&self) -> Vec3 {
        Vec3::from_array(self.start)
    }

    #[inline]
    pub fn end(&self) -> Vec3 {
        Vec3::from_array(self.end)
    }
}

/// All pairs `(i, j)`, `i < j`, closer than `threshold`. O(N²), run once.
pub fn build_edges(points: &[Vec3], threshold: f32) -> Vec<Edge> {
    let threshold_sq = threshold * threshold;
    let mut edges = Vec::new();
    for (i, p) in points.iter().enumerate() {
        for (j, q) in points.iter().enumerate().skip(i + 1) {
            if p.distance_squared(*q) < threshold_sq {
                edges.push(Edge { a: i as u32, b: j as u32 });
            }
        }
    }
    edges
}

/// Copy current endpoint coordinates into `segments`, one slot per edge.
pub fn write_segments(points: &[Vec3], edges: &[Edge], segments: &mut [Segment]) {
    debug_assert_eq!(edges.len(), segments.len());
    for (edge, segment) in edges.iter().zip(segments.iter_mut()) {
        let (a, b) = edge.indices();
        *segment = Segment::new(points[a], points[b]);
    }
}

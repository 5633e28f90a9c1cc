//! Initial point distributions

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::config::Distribution;

/// Sample `count` points for the given distribution.
pub fn sample_points<R: Rng + ?Sized>(
    distribution: Distribution,
    radius: f32,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    match distribution {
        Distribution::Sphere => (0..count).map(|_| on_sphere(radius, rng)).collect(),
        Distribution::Cube { extent } => (0..count).map(|_| in_cube(extent, rng)).collect(),
    }
}

/// Uniform point on a sphere surface.
///
/// Drawing φ as `acos(2u - 1)` instead of uniformly keeps the density even
/// near the poles.
pub fn on_sphere<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        radius * sin_phi * cos_theta,
        radius * sin_phi * sin_theta,
        radius * cos_phi,
    )
}

/// Uniform point in `[-extent/2, extent/2)^3`.
pub fn in_cube<R: Rng + ?Sized>(extent: f32, rng: &mut R) -> Vec3 {
    let mut coord = || (rng.gen::<f32>() - 0.5) * extent;
    Vec3::new(coord(), coord(), coord())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sphere_points_on_surface() {
        let mut rng = SmallRng::seed_from_u64(7);
        let points = sample_points(Distribution::Sphere, 5.0, 500, &mut rng);
        assert_eq!(points.len(), 500);
        for p in &points {
            assert!((p.length() - 5.0).abs() < 1e-3, "{p} not on sphere");
        }
    }

    #[test]
    fn test_sphere_not_clustered_at_poles() {
        // Uniform-on-sphere means z = R cos(phi) is uniform in [-R, R],
        // so about a third of the points land in the middle band.
        let mut rng = SmallRng::seed_from_u64(11);
        let points = sample_points(Distribution::Sphere, 1.0, 6000, &mut rng);
        let middle = points.iter().filter(|p| p.z.abs() < 1.0 / 3.0).count();
        let fraction = middle as f32 / points.len() as f32;
        assert!((fraction - 1.0 / 3.0).abs() < 0.05, "middle band fraction {fraction}");
    }

    #[test]
    fn test_cube_points_inside_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let points = sample_points(Distribution::Cube { extent: 10.0 }, 5.0, 1000, &mut rng);
        assert_eq!(points.len(), 1000);
        for p in &points {
            assert!(p.abs().max_element() <= 5.0);
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = sample_points(Distribution::Sphere, 2.0, 20, &mut SmallRng::seed_from_u64(42));
        let b = sample_points(Distribution::Sphere, 2.0, 20, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}

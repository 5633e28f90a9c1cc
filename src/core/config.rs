//! Construction constants for a particle field
//!
//! Everything here is fixed for the lifetime of one `ParticleField`.
//! Variants of the effect (static cloud, drifting cloud, pointer-tracking
//! cloud) are expressed as flags on one config rather than separate types.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// How the initial point set is distributed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    /// Uniform on the surface of a sphere of `FieldConfig::radius`
    #[default]
    Sphere,
    /// Uniform inside an axis-aligned cube centered on the origin
    Cube { extent: f32 },
}

/// Where the orientation target comes from each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RotationMode {
    /// Tilt toward the pointer; relax to rest when there is none
    #[default]
    Pointer,
    /// Constant angular drift of `rate` radians per frame on both axes
    Drift { rate: f32 },
    /// Orientation never changes
    Fixed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of points (N)
    pub point_count: usize,
    pub distribution: Distribution,
    /// Sphere radius (R), also the scale for mapping the pointer
    pub radius: f32,
    /// Connection threshold (T): pairs closer than this get an edge
    pub threshold: f32,
    /// Oscillation amplitude (k)
    pub amplitude: f32,
    /// Clock increment per update
    pub time_step: f32,
    /// Pointer capture radius
    pub capture_radius: f32,
    /// Pointer pull strength at zero distance, in [0, 1]
    pub influence: f32,
    /// Pointer [-1, 1] coordinates are multiplied by `radius * pointer_scale`
    pub pointer_scale: f32,
    /// Fraction of the remaining orientation gap closed per frame
    pub damping: f32,
    /// Orientation target at the viewport edge, radians (pointer mode)
    pub tilt: f32,
    pub oscillation: bool,
    pub pointer_influence: bool,
    pub rotation: RotationMode,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: 100,
            distribution: Distribution::Sphere,
            radius: 5.0,
            threshold: 3.0,
            amplitude: 0.01,
            time_step: 0.01,
            capture_radius: 2.0,
            influence: 0.5,
            pointer_scale: 0.5,
            damping: 0.1,
            tilt: 0.5,
            oscillation: true,
            pointer_influence: true,
            rotation: RotationMode::Pointer,
        }
    }
}

impl FieldConfig {
    /// The hero page's original static cloud: 1000 points in a 10-unit cube,
    /// slowly drifting, no pointer tracking.
    pub fn classic() -> Self {
        Self {
            point_count: 1000,
            distribution: Distribution::Cube { extent: 10.0 },
            threshold: 0.5,
            oscillation: false,
            pointer_influence: false,
            rotation: RotationMode::Drift { rate: 0.001 },
            damping: 1.0,
            ..Self::default()
        }
    }

    /// Look up a preset by name (`default` or `classic`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.point_count == 0 {
            return Err(ConfigError::NoPoints);
        }

        positive("radius", self.radius)?;
        positive("threshold", self.threshold)?;
        positive("time_step", self.time_step)?;
        positive("capture_radius", self.capture_radius)?;
        if let Distribution::Cube { extent } = self.distribution {
            positive("extent", extent)?;
        }

        non_negative("amplitude", self.amplitude)?;
        fraction("influence", self.influence)?;
        non_negative("pointer_scale", self.pointer_scale)?;
        non_negative("tilt", self.tilt)?;
        if let RotationMode::Drift { rate } = self.rotation {
            if !rate.is_finite() {
                return Err(ConfigError::NotFinite { name: "rate", value: rate });
            }
        }

        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

/// Blend factor: 0 leaves the point alone, 1 moves it onto the target.
fn fraction(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Fraction { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
        assert_eq!(FieldConfig::classic().validate(), Ok(()));
        assert_eq!(FieldConfig::preset("classic"), Some(FieldConfig::classic()));
        assert_eq!(FieldConfig::preset("nope"), None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cfg = FieldConfig { point_count: 0, ..FieldConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoPoints));

        let cfg = FieldConfig { threshold: 0.0, ..FieldConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { name: "threshold", .. })
        ));

        let cfg = FieldConfig { radius: f32::NAN, ..FieldConfig::default() };
        assert!(cfg.validate().is_err());

        for influence in [-0.1, 1.5, 3.0, f32::NAN] {
            let cfg = FieldConfig { influence, ..FieldConfig::default() };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::Fraction { name: "influence", .. })
            ));
        }
        for influence in [0.0, 1.0] {
            let cfg = FieldConfig { influence, ..FieldConfig::default() };
            assert_eq!(cfg.validate(), Ok(()));
        }

        let cfg = FieldConfig {
            rotation: RotationMode::Drift { rate: f32::INFINITY },
            ..FieldConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NotFinite { name: "rate", .. }));
        assert!(err.to_string().contains("finite"));
        assert!(!err.to_string().contains("non-negative"));

        // Negative drift spins the other way and is allowed
        let cfg = FieldConfig {
            rotation: RotationMode::Drift { rate: -0.002 },
            ..FieldConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));

        let cfg = FieldConfig {
            distribution: Distribution::Cube { extent: -1.0 },
            ..FieldConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_damping_range() {
        for damping in [0.0, -0.5, 1.5] {
            let cfg = FieldConfig { damping, ..FieldConfig::default() };
            assert_eq!(cfg.validate(), Err(ConfigError::Damping(damping)));
        }
        let cfg = FieldConfig { damping: 1.0, ..FieldConfig::default() };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "point_count": 40,
            "distribution": { "kind": "cube", "extent": 4.0 },
            "rotation": { "kind": "drift", "rate": 0.002 }
        }"#;
        let cfg: FieldConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.point_count, 40);
        assert_eq!(cfg.distribution, Distribution::Cube { extent: 4.0 });
        assert_eq!(cfg.rotation, RotationMode::Drift { rate: 0.002 });
        assert_eq!(cfg.threshold, 3.0);
        assert!(cfg.oscillation);
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(Distribution::default(), Distribution::Sphere);
        assert_eq!(RotationMode::default(), RotationMode::Pointer);
    }
}

//! Headless runner for the particle field
//!
//! Steps the animator at 60 Hz with a synthetic orbiting pointer and logs
//! per-second stats. Run with: cargo run --features cli --bin neural-cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::{Duration, Instant};

    use neural_field::core::{FieldConfig, FrameInput, ParticleField, PointerState};
    use tracing::{debug, info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,neural_field=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("NEURAL_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading field config");
            serde_json::from_str::<FieldConfig>(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => {
            let name = std::env::var("NEURAL_PRESET").unwrap_or_else(|_| "default".to_string());
            FieldConfig::preset(&name).unwrap_or_else(|| {
                warn!(preset = %name, "Unknown preset, using default");
                FieldConfig::default()
            })
        }
    };
    let frames: u64 = match std::env::var("NEURAL_FRAMES") {
        Ok(v) => v.parse()?,
        Err(_) => 600,
    };
    let seed: u64 = match std::env::var("NEURAL_SEED") {
        Ok(v) => v.parse()?,
        Err(_) => 0,
    };
    debug!(config = %serde_json::to_string(&config)?, "Resolved config");

    let mut field = ParticleField::seeded(config, seed)?;
    let initial = field.points().to_vec();
    info!(
        points = field.points().len(),
        edges = field.edges().len(),
        frames,
        seed,
        "Field ready"
    );

    let mut ticker = tokio::time::interval(Duration::from_micros(16_667));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut worst_step = Duration::ZERO;

    for frame in 0..frames {
        ticker.tick().await;

        // Pointer circles the viewport every 4 seconds
        let angle = frame as f32 / 240.0 * std::f32::consts::TAU;
        let pointer = PointerState::new(angle.cos() * 0.6, angle.sin() * 0.6);

        let started = Instant::now();
        field.update(&FrameInput::ready(Some(pointer)));
        worst_step = worst_step.max(started.elapsed());

        if field.frame() % 60 == 0 {
            let drift = field
                .points()
                .iter()
                .zip(&initial)
                .map(|(p, q)| p.distance(*q))
                .fold(0.0f32, f32::max);
            let rotation = field.orientation();
            info!(
                frame = field.frame(),
                max_drift = format!("{drift:.3}"),
                rot_x = format!("{:.3}", rotation.x),
                rot_y = format!("{:.3}", rotation.y),
                worst_step_us = worst_step.as_micros() as u64,
                "stats"
            );
        }
    }

    info!(frames = field.frame(), worst_step_us = worst_step.as_micros() as u64, "Done");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

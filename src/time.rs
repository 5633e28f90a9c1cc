//! Platform-agnostic time utilities
//!
//! Provides a unified way to get elapsed time in seconds since app start.

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Rolling frames-per-second over the last 60 ticks.
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(61),
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(now_seconds());
    }

    pub fn tick_at(&mut self, now: f64) {
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps(), 0.0);
        fps.tick_at(1.0);
        assert_eq!(fps.fps(), 0.0);

        for i in 1..=100 {
            fps.tick_at(1.0 + i as f64 / 50.0);
        }
        assert!((fps.fps() - 50.0).abs() < 1e-6);
    }
}

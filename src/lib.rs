//! Neural network background - particle-link animation
//!
//! A fixed point cloud sampled on a sphere, linked by a proximity graph
//! built once, animated per frame by oscillation and pointer attraction.
//!
//! - `core`: platform-agnostic animator, always built (CLI + tests)
//! - `app`: egui viewer (`--features wasm`)
//! - `web`: browser entry point and DOM pointer listener

pub mod core;
pub mod time;

#[cfg(feature = "wasm")]
pub mod app;
#[cfg(feature = "wasm")]
pub mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod web;

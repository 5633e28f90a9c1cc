//! Platform-agnostic core module - shared between WASM viewer and CLI

pub mod config;
pub mod error;
pub mod field;
pub mod graph;
pub mod listener;
pub mod pointer;
pub mod projection;
pub mod rotation;
pub mod sampling;

pub use config::{Distribution, FieldConfig, RotationMode};
pub use error::{ConfigError, ListenerError};
pub use field::{FrameInput, ParticleField};
pub use graph::{Edge, Segment};
pub use listener::{PointerCell, PointerSink, PointerSource, PointerSubscription};
pub use pointer::PointerState;
pub use projection::{Projected, Projection};

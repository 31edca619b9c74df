//! Parameter definitions with units, defaults and documented tuning ranges.
//!
//! Every default the engine starts from lives here:
//! - Wave shape and particle grid layout
//! - Colors, lights and bloom
//! - Camera state, projection and recording setup

mod bloom;
mod camera;
mod color;
mod lighting;
mod render;
mod wave;

// Re-export all types
pub use bloom::BloomParameters;
pub use camera::CameraState;
pub use color::{ColorParameters, ColorParseError, ColorSlot, Rgb};
pub use lighting::{default_lights, LightSource, LIGHT_COUNT};
pub use render::{RecordingConfig, RenderConfig};
pub use wave::{DriftConfig, ParticleGridConfig, WaveParameters};

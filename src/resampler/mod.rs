//! The resampler facade and its configuration.

mod config;
pub use config::{Flags, ResamplerConfig};

mod pipeline;
pub use pipeline::LeftoverSlot;

mod resampler;
pub use resampler::Resampler;

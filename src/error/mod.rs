//! Errors that can occur when creating or re-configuring a [`Resampler`](crate::Resampler).

mod error;
pub use error::ResamplerError;

//! Channel remapping.
//!
//! [`MixMatrix`] is computed once from the input and output
//! [`ChannelMap`](crate::channel::ChannelMap)s, then applied
//! to every frame.

mod matrix;
pub use matrix::MixMatrix;

mod remap;
pub(crate) use remap::Remapper;

pub(crate) mod lfe;

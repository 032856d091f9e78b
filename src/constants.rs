//! Shared constants.

//---------------------------------------------------------------------------------------------------- Constants
/// The maximum amount of channels a [`StreamSpec`](crate::format::StreamSpec) may have.
pub const MAX_CHANNELS: usize = 32;

/// The maximum sample rate a [`StreamSpec`](crate::format::StreamSpec) may have.
///
/// This is `48_000 * 16`.
pub const MAX_RATE: u32 = 768_000;

/// The default size of a single allocator "slab" in bytes.
///
/// [`Resampler::max_block_size`](crate::Resampler::max_block_size)
/// is computed such that every intermediate buffer fits within this.
pub const DEFAULT_SLAB_SIZE: usize = 64 * 1024;

/// Headroom frames reserved on top of the exact
/// rate-ratio output estimate of a single `run()`.
pub(crate) const EXTRA_FRAMES: usize = 128;

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn max_rate() {
		assert_eq!(MAX_RATE, 48_000 * 16);
	}

	#[test]
	fn slab_fits_extra_frames() {
		// The largest possible frame must still
		// leave room for the headroom frames.
		let max_frame = MAX_CHANNELS * 4;
		assert!(DEFAULT_SLAB_SIZE / max_frame > EXTRA_FRAMES);
	}
}

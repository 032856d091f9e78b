//---------------------------------------------------------------------------------------------------- use
use crate::{
	constants::{MAX_CHANNELS,MAX_RATE},
	error::ResamplerError,
	format::SampleFormat,
};

//---------------------------------------------------------------------------------------------------- StreamSpec
/// The sample format, frame rate and channel count of one side of a [`Resampler`](crate::Resampler).
///
/// ```rust
/// # use henkan::format::*;
/// let spec = StreamSpec::new(SampleFormat::S16Le, 48_000, 2);
/// assert_eq!(spec.frame_size(), 4);
/// assert!(spec.validate().is_ok());
///
/// let bad = StreamSpec::new(SampleFormat::S16Le, 0, 2);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamSpec {
	/// Encoding of each sample.
	pub format: SampleFormat,
	/// Frames per second (Hz).
	pub rate: u32,
	/// Samples per frame.
	pub channels: u8,
}

impl StreamSpec {
	#[inline]
	#[must_use]
	/// Create a new [`StreamSpec`].
	///
	/// This does not validate the input, see [`Self::validate`].
	pub const fn new(format: SampleFormat, rate: u32, channels: u8) -> Self {
		Self { format, rate, channels }
	}

	#[inline]
	#[must_use]
	/// Size of a single sample in bytes.
	pub const fn sample_size(&self) -> usize {
		self.format.sample_size()
	}

	#[inline]
	#[must_use]
	/// Size of a single frame (one sample per channel) in bytes.
	pub const fn frame_size(&self) -> usize {
		self.format.sample_size() * self.channels as usize
	}

	#[inline]
	#[must_use]
	/// Channel count as a `usize`.
	pub const fn channel_count(&self) -> usize {
		self.channels as usize
	}

	/// Check the rate and channel count invariants.
	///
	/// # Errors
	/// [`ResamplerError::InvalidFormat`] if:
	/// - the rate is `0` or greater than [`MAX_RATE`]
	/// - the channel count is `0` or greater than [`MAX_CHANNELS`]
	pub fn validate(&self) -> Result<(), ResamplerError> {
		validate_rate(self.rate)?;
		if self.channels == 0 {
			return Err(ResamplerError::InvalidFormat("channel count must be non-zero"));
		}
		if self.channels as usize > MAX_CHANNELS {
			return Err(ResamplerError::InvalidFormat("too many channels"));
		}
		Ok(())
	}
}

/// Check a single rate, shared with the rate setters.
pub(crate) fn validate_rate(rate: u32) -> Result<(), ResamplerError> {
	if rate == 0 {
		return Err(ResamplerError::InvalidFormat("rate must be non-zero"));
	}
	if rate > MAX_RATE {
		return Err(ResamplerError::InvalidFormat("rate is too high"));
	}
	Ok(())
}

impl std::fmt::Display for StreamSpec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}ch {}Hz", self.format, self.channels, self.rate)
	}
}

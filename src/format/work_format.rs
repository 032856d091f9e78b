//---------------------------------------------------------------------------------------------------- use
use crate::format::SampleFormat;
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- WorkFormat
/// The internal precision a [`Resampler`](crate::Resampler) remaps and resamples in.
///
/// This is chosen once at construction, see
/// [`Resampler::work_format`](crate::Resampler::work_format).
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WorkFormat {
	/// Native endian signed 16-bit integers.
	S16,
	/// Native endian 32-bit floats.
	F32,
}

impl WorkFormat {
	#[inline]
	#[must_use]
	/// The [`SampleFormat`] that has the exact same memory layout.
	pub const fn sample_format(self) -> SampleFormat {
		match self {
			Self::S16 => SampleFormat::S16NE,
			Self::F32 => SampleFormat::F32NE,
		}
	}

	#[inline]
	#[must_use]
	/// Size of a single sample in bytes.
	pub const fn sample_size(self) -> usize {
		self.sample_format().sample_size()
	}
}

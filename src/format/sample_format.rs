//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- SampleFormat
/// The encoding of a single sample in a stream.
///
/// Multi-byte formats carry an explicit byte order.
/// The `*NE` associated constants select the native-endian variant.
///
/// ```rust
/// # use henkan::format::*;
/// assert_eq!("s16le".parse::<SampleFormat>().unwrap(), SampleFormat::S16Le);
/// assert_eq!(SampleFormat::F32Be.to_string(), "float32be");
/// assert_eq!(SampleFormat::S24Le.sample_size(), 3);
/// ```
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleFormat {
	#[strum(serialize = "u8")]
	/// Unsigned 8-bit PCM.
	U8,
	#[strum(serialize = "alaw")]
	/// 8-bit G.711 A-law.
	Alaw,
	#[strum(serialize = "ulaw")]
	/// 8-bit G.711 μ-law.
	Ulaw,
	#[strum(serialize = "s16le")]
	/// Signed 16-bit PCM, little endian.
	S16Le,
	#[strum(serialize = "s16be")]
	/// Signed 16-bit PCM, big endian.
	S16Be,
	#[strum(serialize = "float32le")]
	/// 32-bit IEEE floating point, little endian, range `-1.0..=1.0`.
	F32Le,
	#[strum(serialize = "float32be")]
	/// 32-bit IEEE floating point, big endian, range `-1.0..=1.0`.
	F32Be,
	#[strum(serialize = "s32le")]
	/// Signed 32-bit PCM, little endian.
	S32Le,
	#[strum(serialize = "s32be")]
	/// Signed 32-bit PCM, big endian.
	S32Be,
	#[strum(serialize = "s24le")]
	/// Signed 24-bit PCM packed in 3 bytes, little endian.
	S24Le,
	#[strum(serialize = "s24be")]
	/// Signed 24-bit PCM packed in 3 bytes, big endian.
	S24Be,
	#[strum(serialize = "s24-32le")]
	/// Signed 24-bit PCM in the LSBs of 32-bit words, little endian.
	S24_32Le,
	#[strum(serialize = "s24-32be")]
	/// Signed 24-bit PCM in the LSBs of 32-bit words, big endian.
	S24_32Be,
}

impl SampleFormat {
	#[cfg(target_endian = "little")]
	/// Native endian [`Self::S16Le`] or [`Self::S16Be`].
	pub const S16NE: Self = Self::S16Le;
	#[cfg(target_endian = "big")]
	/// Native endian [`Self::S16Le`] or [`Self::S16Be`].
	pub const S16NE: Self = Self::S16Be;

	#[cfg(target_endian = "little")]
	/// Native endian [`Self::F32Le`] or [`Self::F32Be`].
	pub const F32NE: Self = Self::F32Le;
	#[cfg(target_endian = "big")]
	/// Native endian [`Self::F32Le`] or [`Self::F32Be`].
	pub const F32NE: Self = Self::F32Be;

	#[cfg(target_endian = "little")]
	/// Native endian [`Self::S32Le`] or [`Self::S32Be`].
	pub const S32NE: Self = Self::S32Le;
	#[cfg(target_endian = "big")]
	/// Native endian [`Self::S32Le`] or [`Self::S32Be`].
	pub const S32NE: Self = Self::S32Be;

	#[inline]
	#[must_use]
	/// Size of a single sample in bytes.
	pub const fn sample_size(self) -> usize {
		match self {
			Self::U8 | Self::Alaw | Self::Ulaw => 1,
			Self::S16Le | Self::S16Be => 2,
			Self::S24Le | Self::S24Be => 3,
			Self::F32Le | Self::F32Be |
			Self::S32Le | Self::S32Be |
			Self::S24_32Le | Self::S24_32Be => 4,
		}
	}

	#[inline]
	#[must_use]
	/// Is this a signed 16-bit format (of either byte order)?
	pub const fn is_s16(self) -> bool {
		matches!(self, Self::S16Le | Self::S16Be)
	}

	#[inline]
	#[must_use]
	/// Does this format carry more precision than signed 16-bit PCM?
	///
	/// ```rust
	/// # use henkan::format::*;
	/// assert!(SampleFormat::F32Le.is_more_precise_than_s16());
	/// assert!(SampleFormat::S24Be.is_more_precise_than_s16());
	/// assert!(!SampleFormat::S16Le.is_more_precise_than_s16());
	/// assert!(!SampleFormat::Ulaw.is_more_precise_than_s16());
	/// ```
	pub const fn is_more_precise_than_s16(self) -> bool {
		matches!(
			self,
			Self::F32Le | Self::F32Be |
			Self::S32Le | Self::S32Be |
			Self::S24Le | Self::S24Be |
			Self::S24_32Le | Self::S24_32Be
		)
	}

	#[inline]
	#[must_use]
	/// Is this a little endian format?
	///
	/// Single byte formats return `true`.
	pub const fn is_le(self) -> bool {
		!matches!(
			self,
			Self::S16Be | Self::F32Be | Self::S32Be | Self::S24Be | Self::S24_32Be
		)
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use strum::IntoEnumIterator;

	#[test]
	fn names_roundtrip() {
		for format in SampleFormat::iter() {
			let name = format.to_string();
			assert_eq!(name.parse::<SampleFormat>().unwrap(), format);
		}
	}

	#[test]
	fn native_endian() {
		assert_eq!(SampleFormat::S16NE.is_le(), cfg!(target_endian = "little"));
		assert_eq!(SampleFormat::F32NE.sample_size(), 4);
		assert!(SampleFormat::S16NE.is_s16());
	}

	#[test]
	fn sizes() {
		assert_eq!(SampleFormat::U8.sample_size(), 1);
		assert_eq!(SampleFormat::Alaw.sample_size(), 1);
		assert_eq!(SampleFormat::S16Be.sample_size(), 2);
		assert_eq!(SampleFormat::S24Be.sample_size(), 3);
		assert_eq!(SampleFormat::S24_32Le.sample_size(), 4);
	}
}

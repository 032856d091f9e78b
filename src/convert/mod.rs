//! Sample format conversion.
//!
//! Converts between the stream's [`SampleFormat`] bytes
//! and the working [`Sample`] type, in both directions.

mod g711;

//---------------------------------------------------------------------------------------------------- use
use crate::{
	format::SampleFormat,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- Zero-copy
/// View `bytes` as working samples without copying.
///
/// Returns `None` if `format` is not the native-endian form
/// of the working format, or if `bytes` is not aligned for `S`.
pub(crate) fn view<S: Sample>(format: SampleFormat, bytes: &[u8]) -> Option<&[S]> {
	if format != S::WORK.sample_format() {
		return None;
	}

	bytemuck::try_cast_slice(bytes).ok()
}

/// Whether a conversion from `format` into `S` is a plain copy.
pub(crate) fn is_identity<S: Sample>(format: SampleFormat) -> bool {
	format == S::WORK.sample_format()
}

//---------------------------------------------------------------------------------------------------- Decode
// Decodes fixed-width chunks of `$bytes` into `$out`.
macro_rules! decode_chunks {
	($bytes:expr, $out:expr, $width:literal, |$c:ident| $e:expr) => {
		for (o, $c) in $out.iter_mut().zip($bytes.chunks_exact($width)) {
			*o = $e;
		}
	};
}

/// Convert `bytes` in `format` into working samples, appended to `out`.
///
/// `bytes` must hold a whole number of samples.
pub(crate) fn to_work<S: Sample>(format: SampleFormat, bytes: &[u8], out: &mut Vec<S>) {
	let size = format.sample_size();
	debug_assert_eq!(bytes.len() % size, 0);

	let start = out.len();
	out.resize(start + bytes.len() / size, S::default());
	let out = &mut out[start..];

	use SampleFormat as F;
	match format {
		F::U8 => decode_chunks!(bytes, out, 1, |c| S::from_u8(c[0])),
		F::Alaw => decode_chunks!(bytes, out, 1, |c| S::from_i16(g711::alaw_to_linear(c[0]))),
		F::Ulaw => decode_chunks!(bytes, out, 1, |c| S::from_i16(g711::ulaw_to_linear(c[0]))),

		F::S16Le => decode_chunks!(bytes, out, 2, |c| S::from_i16(i16::from_le_bytes([c[0], c[1]]))),
		F::S16Be => decode_chunks!(bytes, out, 2, |c| S::from_i16(i16::from_be_bytes([c[0], c[1]]))),

		F::F32Le => decode_chunks!(bytes, out, 4, |c| S::from_f32(f32::from_le_bytes([c[0], c[1], c[2], c[3]]))),
		F::F32Be => decode_chunks!(bytes, out, 4, |c| S::from_f32(f32::from_be_bytes([c[0], c[1], c[2], c[3]]))),

		F::S32Le => decode_chunks!(bytes, out, 4, |c| S::from_i32(i32::from_le_bytes([c[0], c[1], c[2], c[3]]))),
		F::S32Be => decode_chunks!(bytes, out, 4, |c| S::from_i32(i32::from_be_bytes([c[0], c[1], c[2], c[3]]))),

		// 24-bit values are placed in the upper 24 bits of an `i32`.
		F::S24Le => decode_chunks!(bytes, out, 3, |c| S::from_i32(i32::from_le_bytes([0, c[0], c[1], c[2]]))),
		F::S24Be => decode_chunks!(bytes, out, 3, |c| S::from_i32(i32::from_be_bytes([c[0], c[1], c[2], 0]))),

		// The 24 valid bits are the low bits, the padding byte is ignored.
		F::S24_32Le => decode_chunks!(bytes, out, 4, |c| S::from_i32(i32::from_le_bytes([c[0], c[1], c[2], c[3]]) << 8)),
		F::S24_32Be => decode_chunks!(bytes, out, 4, |c| S::from_i32(i32::from_be_bytes([c[0], c[1], c[2], c[3]]) << 8)),
	}
}

//---------------------------------------------------------------------------------------------------- Encode
// Encodes `$samples` into fixed-width chunks of `$bytes`.
macro_rules! encode_chunks {
	($samples:expr, $bytes:expr, $width:literal, |$s:ident| $e:expr) => {
		for (c, $s) in $bytes.chunks_exact_mut($width).zip($samples) {
			c.copy_from_slice(&$e);
		}
	};
}

/// Round a full scale `i32` into 24 bits.
#[inline]
fn to_24(s: i32) -> i32 {
	((i64::from(s) + 0x80) >> 8).min(0x7F_FFFF) as i32
}

/// Convert working samples into `format`, appended to `out`.
pub(crate) fn from_work<S: Sample>(format: SampleFormat, samples: &[S], out: &mut Vec<u8>) {
	let size = format.sample_size();

	let start = out.len();
	out.resize(start + samples.len() * size, 0);
	let out = &mut out[start..];

	use SampleFormat as F;
	match format {
		F::U8 => encode_chunks!(samples, out, 1, |s| [s.to_u8()]),
		F::Alaw => encode_chunks!(samples, out, 1, |s| [g711::linear_to_alaw(s.to_i16())]),
		F::Ulaw => encode_chunks!(samples, out, 1, |s| [g711::linear_to_ulaw(s.to_i16())]),

		F::S16Le => encode_chunks!(samples, out, 2, |s| s.to_i16().to_le_bytes()),
		F::S16Be => encode_chunks!(samples, out, 2, |s| s.to_i16().to_be_bytes()),

		F::F32Le => encode_chunks!(samples, out, 4, |s| s.to_f32().to_le_bytes()),
		F::F32Be => encode_chunks!(samples, out, 4, |s| s.to_f32().to_be_bytes()),

		F::S32Le => encode_chunks!(samples, out, 4, |s| s.to_i32().to_le_bytes()),
		F::S32Be => encode_chunks!(samples, out, 4, |s| s.to_i32().to_be_bytes()),

		F::S24Le => encode_chunks!(samples, out, 3, |s| {
			let b = to_24(s.to_i32()).to_le_bytes();
			[b[0], b[1], b[2]]
		}),
		F::S24Be => encode_chunks!(samples, out, 3, |s| {
			let b = to_24(s.to_i32()).to_be_bytes();
			[b[1], b[2], b[3]]
		}),

		F::S24_32Le => encode_chunks!(samples, out, 4, |s| to_24(s.to_i32()).to_le_bytes()),
		F::S24_32Be => encode_chunks!(samples, out, 4, |s| to_24(s.to_i32()).to_be_bytes()),
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use strum::IntoEnumIterator;

	#[test]
	fn s16_into_s16_is_exact() {
		let samples: Vec<i16> = vec![i16::MIN, -1, 0, 1, 1234, i16::MAX];

		for format in [SampleFormat::S16Le, SampleFormat::S16Be] {
			let mut bytes = vec![];
			from_work(format, &samples, &mut bytes);
			let mut back = vec![];
			to_work::<i16>(format, &bytes, &mut back);
			assert_eq!(back, samples);
		}
	}

	#[test]
	fn byte_order() {
		let mut bytes = vec![];
		from_work(SampleFormat::S16Le, &[0x0102_i16], &mut bytes);
		assert_eq!(bytes, [0x02, 0x01]);

		bytes.clear();
		from_work(SampleFormat::S16Be, &[0x0102_i16], &mut bytes);
		assert_eq!(bytes, [0x01, 0x02]);

		bytes.clear();
		from_work(SampleFormat::S24Le, &[0x0102_i16], &mut bytes);
		assert_eq!(bytes, [0x00, 0x02, 0x01]);

		bytes.clear();
		from_work(SampleFormat::S24_32Be, &[0x0102_i16], &mut bytes);
		assert_eq!(bytes, [0x00, 0x01, 0x02, 0x00]);
	}

	#[test]
	fn s24_sign_extension() {
		let mut out = vec![];
		to_work::<i16>(SampleFormat::S24Le, &[0x00, 0x00, 0x80], &mut out);
		to_work::<i16>(SampleFormat::S24_32Le, &[0x00, 0x00, 0x80, 0x7F], &mut out);
		assert_eq!(out, [i16::MIN, i16::MIN]);
	}

	#[test]
	fn u8_is_offset_binary() {
		let mut out = vec![];
		to_work::<i16>(SampleFormat::U8, &[0x80, 0x00], &mut out);
		assert_eq!(out, [0, i16::MIN]);
	}

	#[test]
	fn float_half_scale() {
		let mut out = vec![];
		to_work::<i16>(SampleFormat::F32Le, &0.5_f32.to_le_bytes(), &mut out);
		assert_eq!(out, [16_384]);
	}

	#[test]
	fn silence_is_preserved() {
		// Every format encodes and decodes silence as silence.
		for format in SampleFormat::iter() {
			let mut bytes = vec![];
			from_work(format, &[0.0_f32; 4], &mut bytes);
			assert_eq!(bytes.len(), 4 * format.sample_size());

			let mut back = vec![];
			to_work::<f32>(format, &bytes, &mut back);
			for s in back {
				assert!(s.abs() < 0.001, "{format}: {s}");
			}
		}
	}

	#[test]
	fn appends() {
		let mut out = vec![7_i16];
		to_work::<i16>(SampleFormat::S16Le, &[1, 0], &mut out);
		assert_eq!(out, [7, 1]);
	}

	#[test]
	fn zero_copy_view() {
		let samples = [1_i16, 2, 3];
		let bytes: &[u8] = bytemuck::cast_slice(&samples);
		assert_eq!(view::<i16>(SampleFormat::S16NE, bytes), Some(&samples[..]));
		assert_eq!(view::<f32>(SampleFormat::S16NE, bytes), None);
		assert!(is_identity::<f32>(SampleFormat::F32NE));
	}
}

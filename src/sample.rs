//! Working sample types.
//!
//! Everything between the two format conversions operates on
//! a single [`Sample`] type, chosen once by the [`WorkFormat`].

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::NativeBackend,
	format::WorkFormat,
};
use symphonia::core::conv::FromSample;

//---------------------------------------------------------------------------------------------------- Sample
/// A working format sample, either [`i16`] or [`f32`].
///
/// The conversions are `symphonia`'s: widening is
/// lossless, narrowing rounds and clamps.
pub(crate) trait Sample:
	Copy + Default + PartialEq + PartialOrd +
	std::fmt::Debug + bytemuck::Pod + Send + Sync + 'static
{
	/// The matching [`WorkFormat`].
	const WORK: WorkFormat;

	/// The backends that only exist for this sample type.
	type Native: NativeBackend<Self>;

	fn from_u8(s: u8) -> Self;
	fn from_i16(s: i16) -> Self;
	fn from_i32(s: i32) -> Self;
	fn from_f32(s: f32) -> Self;

	fn to_u8(self) -> u8;
	fn to_i16(self) -> i16;
	fn to_i32(self) -> i32;
	fn to_f32(self) -> f32;

	/// Absolute value, saturating at the maximum.
	fn magnitude(self) -> Self;

	/// Dot product of one input frame with one row of a mixing matrix.
	///
	/// `gains` is the float row, `gains_q16` the same row in 16.16 fixed point.
	fn mix(frame: &[Self], gains: &[f32], gains_q16: &[i32]) -> Self;
}

macro_rules! impl_conversions {
	($t:ty) => {
		#[inline(always)] fn from_u8(s: u8) -> Self { <$t>::from_sample(s) }
		#[inline(always)] fn from_i16(s: i16) -> Self { <$t>::from_sample(s) }
		#[inline(always)] fn from_i32(s: i32) -> Self { <$t>::from_sample(s) }
		#[inline(always)] fn from_f32(s: f32) -> Self { <$t>::from_sample(s) }

		#[inline(always)] fn to_u8(self) -> u8 { u8::from_sample(self) }
		#[inline(always)] fn to_i16(self) -> i16 { i16::from_sample(self) }
		#[inline(always)] fn to_i32(self) -> i32 { i32::from_sample(self) }
		#[inline(always)] fn to_f32(self) -> f32 { f32::from_sample(self) }
	};
}

impl Sample for i16 {
	const WORK: WorkFormat = WorkFormat::S16;
	type Native = crate::backend::FixedBackend;

	impl_conversions!(i16);

	#[inline]
	fn magnitude(self) -> Self {
		self.saturating_abs()
	}

	#[inline]
	fn mix(frame: &[Self], _: &[f32], gains_q16: &[i32]) -> Self {
		let acc = frame
			.iter()
			.zip(gains_q16)
			.fold(0_i64, |acc, (s, g)| acc + i64::from(*s) * i64::from(*g));

		(acc >> 16).clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
	}
}

impl Sample for f32 {
	const WORK: WorkFormat = WorkFormat::F32;
	type Native = crate::backend::FloatBackend;

	impl_conversions!(f32);

	#[inline]
	fn magnitude(self) -> Self {
		self.abs()
	}

	#[inline]
	fn mix(frame: &[Self], gains: &[f32], _: &[i32]) -> Self {
		frame
			.iter()
			.zip(gains)
			.fold(0.0, |acc, (s, g)| acc + s * g)
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn widening_is_lossless() {
		for s in [i16::MIN, -12_345, -1, 0, 1, 12_345, i16::MAX] {
			assert_eq!(i16::from_f32(s.to_f32()), s);
			assert_eq!(i16::from_i32(s.to_i32()), s);
		}
	}

	#[test]
	fn narrowing_clamps() {
		assert_eq!(i16::from_f32(2.0), i16::MAX);
		assert!(i16::from_f32(-2.0) <= -i16::MAX);
		assert_eq!(i16::from_f32(0.5), 16_384);
		assert_eq!(i16::from_f32(0.0), 0);
	}

	#[test]
	fn magnitude() {
		assert_eq!(i16::MIN.magnitude(), i16::MAX);
		assert_eq!((-5_i16).magnitude(), 5);
		assert_eq!((-0.25_f32).magnitude(), 0.25);
	}

	#[test]
	fn mix() {
		// 0.5 * a + 0.5 * b
		let q16 = [0x8000, 0x8000];
		let f = [0.5, 0.5];
		assert_eq!(i16::mix(&[1000, 3000], &f, &q16), 2000);
		assert_eq!(f32::mix(&[0.25, 0.75], &f, &q16), 0.5);

		// Saturation.
		let q16 = [0x10000, 0x10000];
		assert_eq!(i16::mix(&[i16::MAX, i16::MAX], &f, &q16), i16::MAX);
	}
}

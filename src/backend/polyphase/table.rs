//! Supported rate pairs of [`Method::PolyphaseFixed`](crate::backend::Method::PolyphaseFixed).

//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	IntoStaticStr,
};
use super::coefficients::{
	DOWN_2,
	DOWN_2_3,
	DOWN_3,
	DOWN_7_8,
	UP_10_7,
	UP_16_21,
	UP_21_20,
	UP_2,
	UP_3,
	UP_3_2,
};

//---------------------------------------------------------------------------------------------------- StageSpec
/// One upsample-by-`l`, filter, downsample-by-`m` stage.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub(crate) struct StageSpec {
	/// Upsampling factor, also the amount of phases.
	pub(crate) l: usize,
	/// Downsampling factor.
	pub(crate) m: usize,
	/// Taps per phase.
	pub(crate) taps: usize,
	/// `l` phases of `taps` Q15 coefficients each.
	pub(crate) coefficients: &'static [i32],
}

const fn stage(l: usize, m: usize, taps: usize, coefficients: &'static [i32]) -> StageSpec {
	StageSpec { l, m, taps, coefficients }
}

//---------------------------------------------------------------------------------------------------- RatePair
/// An exact `(input, output)` rate pair with a filter cascade.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum RatePair {
	Up8kTo16k,
	Down16kTo8k,
	Up16kTo48k,
	Down48kTo16k,
	Up8kTo48k,
	Down48kTo8k,
	Up24kTo48k,
	Down48kTo24k,
	Up32kTo48k,
	Down48kTo32k,
	Up22kTo44k,
	Down44kTo22k,
	Up44kTo48k,
	Down48kTo44k,
}

impl RatePair {
	/// Look up the entry for `input` Hz -> `output` Hz.
	pub(crate) const fn new(input: u32, output: u32) -> Option<Self> {
		Some(match (input, output) {
			(8_000,  16_000) => Self::Up8kTo16k,
			(16_000, 8_000)  => Self::Down16kTo8k,
			(16_000, 48_000) => Self::Up16kTo48k,
			(48_000, 16_000) => Self::Down48kTo16k,
			(8_000,  48_000) => Self::Up8kTo48k,
			(48_000, 8_000)  => Self::Down48kTo8k,
			(24_000, 48_000) => Self::Up24kTo48k,
			(48_000, 24_000) => Self::Down48kTo24k,
			(32_000, 48_000) => Self::Up32kTo48k,
			(48_000, 32_000) => Self::Down48kTo32k,
			(22_050, 44_100) => Self::Up22kTo44k,
			(44_100, 22_050) => Self::Down44kTo22k,
			(44_100, 48_000) => Self::Up44kTo48k,
			(48_000, 44_100) => Self::Down48kTo44k,
			_ => return None,
		})
	}

	/// `(input, output)` in Hz.
	pub(crate) const fn rates(self) -> (u32, u32) {
		match self {
			Self::Up8kTo16k    => (8_000, 16_000),
			Self::Down16kTo8k  => (16_000, 8_000),
			Self::Up16kTo48k   => (16_000, 48_000),
			Self::Down48kTo16k => (48_000, 16_000),
			Self::Up8kTo48k    => (8_000, 48_000),
			Self::Down48kTo8k  => (48_000, 8_000),
			Self::Up24kTo48k   => (24_000, 48_000),
			Self::Down48kTo24k => (48_000, 24_000),
			Self::Up32kTo48k   => (32_000, 48_000),
			Self::Down48kTo32k => (48_000, 32_000),
			Self::Up22kTo44k   => (22_050, 44_100),
			Self::Down44kTo22k => (44_100, 22_050),
			Self::Up44kTo48k   => (44_100, 48_000),
			Self::Down48kTo44k => (48_000, 44_100),
		}
	}

	/// The cascade, first stage first.
	pub(crate) const fn stages(self) -> &'static [StageSpec] {
		const S_UP_2: StageSpec     = stage(2, 1, 24, &UP_2);
		const S_DOWN_2: StageSpec   = stage(1, 2, 48, &DOWN_2);
		const S_UP_3: StageSpec     = stage(3, 1, 24, &UP_3);
		const S_DOWN_3: StageSpec   = stage(1, 3, 72, &DOWN_3);
		const S_UP_3_2: StageSpec   = stage(3, 2, 36, &UP_3_2);
		const S_DOWN_2_3: StageSpec = stage(2, 3, 36, &DOWN_2_3);
		// 160/147
		const S_UP_10_7: StageSpec  = stage(10, 7, 24, &UP_10_7);
		const S_UP_16_21: StageSpec = stage(16, 21, 32, &UP_16_21);
		// 147/160
		const S_UP_21_20: StageSpec = stage(21, 20, 24, &UP_21_20);
		const S_DOWN_7_8: StageSpec = stage(7, 8, 32, &DOWN_7_8);

		match self {
			Self::Up8kTo16k | Self::Up24kTo48k | Self::Up22kTo44k       => &[S_UP_2],
			Self::Down16kTo8k | Self::Down48kTo24k | Self::Down44kTo22k => &[S_DOWN_2],
			Self::Up16kTo48k   => &[S_UP_3],
			Self::Down48kTo16k => &[S_DOWN_3],
			Self::Up8kTo48k    => &[S_UP_2, S_UP_3],
			Self::Down48kTo8k  => &[S_DOWN_3, S_DOWN_2],
			Self::Up32kTo48k   => &[S_UP_3_2],
			Self::Down48kTo32k => &[S_DOWN_2_3],
			Self::Up44kTo48k   => &[S_UP_10_7, S_UP_16_21],
			Self::Down48kTo44k => &[S_UP_21_20, S_DOWN_7_8],
		}
	}
}

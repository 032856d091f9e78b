//! LFE crossover post-filter.
//!
//! When the LFE output is synthesized from the full range inputs,
//! the LFE channel is low-passed and every other channel high-passed
//! at the crossover frequency, with a Linkwitz-Riley 4th order split
//! (two cascaded Butterworth state-variable filters).

//---------------------------------------------------------------------------------------------------- use
use crate::{
	channel::ChannelMap,
	sample::Sample,
};
use std::f32::consts::{FRAC_1_SQRT_2, PI};

//---------------------------------------------------------------------------------------------------- Svf
/// Coefficients of a 2-pole Butterworth state-variable filter.
#[derive(Copy,Clone,Debug,PartialEq)]
struct Coefficients {
	k: f32,
	a1: f32,
	a2: f32,
	a3: f32,
}

impl Coefficients {
	fn new(cutoff: f32, rate: f32) -> Self {
		// Keep the cutoff below Nyquist.
		let cutoff = cutoff.clamp(1.0, rate * 0.49);

		let g = (PI * cutoff / rate).tan();
		let k = 1.0 / FRAC_1_SQRT_2;
		let a1 = 1.0 / (1.0 + g * (g + k));
		let a2 = g * a1;
		let a3 = g * a2;

		Self { k, a1, a2, a3 }
	}
}

#[derive(Copy,Clone,Debug,Default,PartialEq)]
struct Svf {
	ic1eq: f32,
	ic2eq: f32,
}

impl Svf {
	/// Returns `(low, high)`.
	#[inline]
	fn process(&mut self, c: &Coefficients, x: f32) -> (f32, f32) {
		let v3 = x - self.ic2eq;
		let v1 = c.a1 * self.ic1eq + c.a2 * v3;
		let v2 = self.ic2eq + c.a2 * self.ic1eq + c.a3 * v3;
		self.ic1eq = 2.0 * v1 - self.ic1eq;
		self.ic2eq = 2.0 * v2 - self.ic2eq;

		(v2, x - c.k * v1 - v2)
	}
}

//---------------------------------------------------------------------------------------------------- LfeFilter
/// Per-channel crossover state.
#[derive(Copy,Clone,Debug,Default,PartialEq)]
struct Channel {
	lfe: bool,
	stages: [Svf; 2],
}

/// Splits the spectrum between the LFE and the other channels.
#[derive(Clone,Debug,PartialEq)]
pub(crate) struct LfeFilter {
	crossover: u32,
	coefficients: Coefficients,
	channels: Vec<Channel>,
}

impl LfeFilter {
	/// Create a filter for frames in the `map` layout at `rate`.
	pub(crate) fn new(map: &ChannelMap, crossover: u32, rate: u32) -> Self {
		let channels = map
			.positions()
			.iter()
			.map(|p| Channel { lfe: p.is_lfe(), ..Default::default() })
			.collect();

		Self {
			crossover,
			coefficients: Coefficients::new(crossover as f32, rate as f32),
			channels,
		}
	}

	/// The crossover frequency in Hz.
	pub(crate) const fn crossover(&self) -> u32 {
		self.crossover
	}

	/// Recompute the coefficients for a new output rate.
	pub(crate) fn set_rate(&mut self, rate: u32) {
		self.coefficients = Coefficients::new(self.crossover as f32, rate as f32);
	}

	/// Filter interleaved frames in place.
	pub(crate) fn process<S: Sample>(&mut self, frames: &mut [S]) {
		let c = &self.coefficients;

		for frame in frames.chunks_exact_mut(self.channels.len()) {
			for (sample, channel) in frame.iter_mut().zip(&mut self.channels) {
				let x = sample.to_f32();

				let y = if channel.lfe {
					let (low, _) = channel.stages[0].process(c, x);
					channel.stages[1].process(c, low).0
				} else {
					let (_, high) = channel.stages[0].process(c, x);
					channel.stages[1].process(c, high).1
				};

				*sample = S::from_f32(y);
			}
		}
	}

	/// Forget all filter history.
	pub(crate) fn reset(&mut self) {
		for channel in &mut self.channels {
			channel.stages = Default::default();
		}
	}

	/// The stream was rewound, the history no longer matches.
	pub(crate) fn rewind(&mut self) {
		self.reset();
	}
}

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{
		window::{kaiser, quantize_q15, sinc},
		Resample,
	},
	error::ResamplerError,
};

//---------------------------------------------------------------------------------------------------- Constants
/// Zero crossings of the interpolation kernel on each side.
const ZERO_CROSSINGS: usize = 16;

/// Kernel table points per zero crossing.
const OVERSAMPLE: usize = 256;

/// Kaiser window shape.
const BETA: f64 = 8.0;

/// Fraction of the lower Nyquist frequency the passband extends to.
const ROLLOFF: f64 = 0.95;

//---------------------------------------------------------------------------------------------------- SincFixed
/// [`Method::SincFixed`](crate::backend::Method::SincFixed).
///
/// Band limited interpolation with a Kaiser windowed sinc kernel.
/// The kernel is tabulated once and linearly interpolated, the taps
/// for every output frame are quantized to Q15 and applied in fixed point.
///
/// The output clock is tracked exactly as an input frame index
/// plus a fraction in units of `1 / output` Hz.
#[derive(Clone,Debug,PartialEq)]
pub(crate) struct SincFixed {
	channels: usize,
	input: u64,
	output: u64,
	/// Cutoff relative to the input Nyquist frequency.
	cutoff: f64,
	/// Half the kernel width, in input frames.
	half: usize,
	/// `ZERO_CROSSINGS * OVERSAMPLE` kernel points, plus zeroed guard points.
	table: Vec<f64>,
	/// Interleaved input frames still needed.
	history: Vec<i16>,
	/// Frame in `history` the next output is interpolated after.
	position: usize,
	/// Numerator of the fractional part of `position`, over `output`.
	fraction: u64,
	taps: Vec<f64>,
	taps_q15: Vec<i32>,
}

impl SincFixed {
	pub(crate) fn new(channels: usize, input: u32, output: u32) -> Self {
		let table = (0..ZERO_CROSSINGS * OVERSAMPLE + 2)
			.map(|n| {
				if n >= ZERO_CROSSINGS * OVERSAMPLE {
					return 0.0;
				}
				let x = n as f64 / OVERSAMPLE as f64;
				sinc(x) * kaiser(x / ZERO_CROSSINGS as f64, BETA)
			})
			.collect();

		let mut this = Self {
			channels,
			input: 0,
			output: 0,
			cutoff: 0.0,
			half: 0,
			table,
			history: vec![],
			position: 0,
			fraction: 0,
			taps: vec![],
			taps_q15: vec![],
		};

		this.set_rates(input, output);
		<Self as Resample<i16>>::reset(&mut this);
		this
	}

	fn set_rates(&mut self, input: u32, output: u32) {
		self.input = u64::from(input);
		self.output = u64::from(output);
		self.cutoff = ROLLOFF * (f64::from(output) / f64::from(input)).min(1.0);
		self.half = (ZERO_CROSSINGS as f64 / self.cutoff).ceil() as usize;
		self.taps.resize(self.half * 2, 0.0);
		self.taps_q15.resize(self.half * 2, 0);
	}

	/// Kernel value `x` zero crossings away from the center.
	#[inline]
	fn kernel(&self, x: f64) -> f64 {
		let index = x.abs() * OVERSAMPLE as f64;
		let i = index as usize;
		if i >= ZERO_CROSSINGS * OVERSAMPLE {
			return 0.0;
		}
		let frac = index - i as f64;
		self.table[i] * (1.0 - frac) + self.table[i + 1] * frac
	}

	/// Compute the Q15 taps for the current fraction.
	///
	/// Tap `j` weights history frame `position + 1 - half + j`.
	fn compute_taps(&mut self) {
		let f = self.fraction as f64 / self.output as f64;

		for j in 0..self.half * 2 {
			let distance = (j + 1) as f64 - self.half as f64 - f;
			self.taps[j] = self.kernel(distance * self.cutoff);
		}

		let sum: f64 = self.taps.iter().sum();
		self.taps.iter_mut().for_each(|t| *t /= sum);
		quantize_q15(&self.taps, &mut self.taps_q15);
	}
}

impl Resample<i16> for SincFixed {
	fn resample(&mut self, input: &[i16], output: &mut Vec<i16>) -> (usize, usize) {
		let ch = self.channels;
		self.history.extend_from_slice(input);
		let len = self.history.len() / ch;

		let mut written = 0;
		while self.position + self.half < len {
			self.compute_taps();

			let first = (self.position + 1 - self.half) * ch;
			let window = &self.history[first..first + self.half * 2 * ch];

			for c in 0..ch {
				let acc = window[c..]
					.iter()
					.step_by(ch)
					.zip(&self.taps_q15)
					.fold(0_i64, |acc, (x, t)| acc + i64::from(*x) * i64::from(*t));

				output.push((acc >> 15).clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16);
			}
			written += 1;

			self.position += (self.input / self.output) as usize;
			self.fraction += self.input % self.output;
			if self.fraction >= self.output {
				self.fraction -= self.output;
				self.position += 1;
			}
		}

		// Forget frames no future output can reach.
		let drop = (self.position + 1).saturating_sub(self.half).min(len);
		self.history.drain(..drop * ch);
		self.position -= drop;

		(written, 0)
	}

	fn reset(&mut self) {
		// Input frame 0 lands right after `half` frames of silence.
		self.history.clear();
		self.history.resize(self.half * self.channels, 0);
		self.position = self.half;
		self.fraction = 0;
		self.taps.fill(0.0);
		self.taps_q15.fill(0);
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		let old_output = self.output;
		self.set_rates(input, output);
		self.fraction = self.fraction * self.output / old_output;

		// A wider kernel needs more history before `position`.
		let pad = self.half.saturating_sub(self.position + 1);
		if pad > 0 {
			self.history.splice(0..0, std::iter::repeat(0).take(pad * self.channels));
			self.position += pad;
		}

		Ok(())
	}

	fn delay(&self) -> usize {
		self.half
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::{rms, sine_i16};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn run(s: &mut SincFixed, input: &[i16]) -> Vec<i16> {
		let mut out = vec![];
		s.resample(input, &mut out);
		out
	}

	#[test]
	fn silence() {
		for (i, o) in [(44_100, 48_000), (48_000, 8_000), (11_025, 96_000)] {
			let mut s = SincFixed::new(2, i, o);
			assert!(run(&mut s, &vec![0; 4_000]).iter().all(|x| *x == 0));
		}
	}

	#[test]
	fn dc_is_preserved() {
		let mut s = SincFixed::new(1, 44_100, 48_000);
		let out = run(&mut s, &vec![12_345; 4_410]);
		let settled = &out[s.half * 2..];
		assert!(settled.iter().all(|x| (*x - 12_345).abs() <= 1));
	}

	#[test]
	fn long_run_rate() {
		for (i, o) in [(44_100, 48_000), (48_000, 44_100), (8_000, 48_000), (96_000, 22_050)] {
			let mut s = SincFixed::new(1, i, o);
			let input = vec![0; i as usize / 100];
			let total: usize = (0..1_000).map(|_| s.resample(&input, &mut vec![]).0).sum();

			// 10 seconds, minus the kernel's latency.
			let expected = o as usize * 10;
			let latency = s.half * o as usize / i as usize + 2;
			assert!(total <= expected && total + latency >= expected, "{i} -> {o}: {total}");
			assert!(s.history.len() <= (s.half * 2 + i as usize / 100) * 2);
		}
	}

	#[test]
	fn sine_amplitude() {
		let amplitude = 0.5;
		let mut s = SincFixed::new(1, 44_100, 48_000);
		let out = run(&mut s, &sine_i16(1_000.0, 44_100, 44_100, amplitude));

		let settled = &out[out.len() / 4..out.len() / 4 + 4_800];
		let peak = rms(settled.iter().map(|x| f32::from(*x) / 32768.0)) * std::f32::consts::SQRT_2;
		assert!((peak - amplitude).abs() < amplitude * 0.02, "{peak}");
	}

	#[test]
	fn variable_rate() {
		let mut s = SincFixed::new(1, 48_000, 48_000);
		let input = vec![100; 4_800];
		let before = s.resample(&input, &mut vec![]).0;
		s.update_rates(48_000, 8_000).unwrap();
		let after = s.resample(&input, &mut vec![]).0;
		assert!(before > after * 5, "{before} {after}");

		// Widening the kernel pads history.
		assert!(s.position + 1 >= s.half);
		s.update_rates(48_000, 48_000).unwrap();
		let back = s.resample(&input, &mut vec![]).0;
		assert!(back > after * 5);
	}

	#[test]
	fn reset() {
		let mut s = SincFixed::new(2, 44_100, 48_000);
		let fresh = s.clone();
		run(&mut s, &vec![7; 2_000]);
		assert_ne!(s, fresh);
		s.reset();
		assert_eq!(s, fresh);
	}

	proptest! {
		#[test]
		fn chunking_is_exact(split in proptest::collection::vec(1_usize..500, 1..6)) {
			let input = sine_i16(1_234.0, 44_100, 3_000, 0.7);

			let mut s = SincFixed::new(1, 44_100, 48_000);
			let whole = run(&mut s, &input);

			let mut s = SincFixed::new(1, 44_100, 48_000);
			let mut pieces = vec![];
			let mut rest = &input[..];
			for frames in split.iter().cycle() {
				if rest.is_empty() {
					break;
				}
				let (chunk, tail) = rest.split_at((*frames).min(rest.len()));
				pieces.extend(run(&mut s, chunk));
				rest = tail;
			}

			prop_assert_eq!(pieces, whole);
		}
	}
}

//! Fixed-point polyphase FIR resampling.
//!
//! Every supported rate pair is a cascade of at most two
//! upsample-by-L, filter, downsample-by-M stages. Each stage's
//! filter is split into L phases so the upsampled signal is never
//! materialized, output samples are computed straight from the
//! delay line with the phase that lines up with them.
//!
//! The phase filters are constant tables, see [`coefficients`].

mod coefficients;
mod table;
pub(crate) use table::RatePair;
use table::StageSpec;

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Method, Resample},
	error::ResamplerError,
};

//---------------------------------------------------------------------------------------------------- Stage
/// State of one cascade stage, for all channels.
#[derive(Clone,Debug,PartialEq,Eq)]
struct Stage {
	l: usize,
	m: usize,
	taps: usize,
	/// `l` phases of `taps` Q15 coefficients each.
	coefficients: &'static [i32],
	/// Next phase to emit, in `[0, l)` between input samples.
	phase: usize,
	/// `taps` samples per channel, newest first.
	delay: Vec<i16>,
	/// The frame last computed.
	frame: Vec<i16>,
}

impl Stage {
	fn new(spec: StageSpec, channels: usize) -> Self {
		Self {
			l: spec.l,
			m: spec.m,
			taps: spec.taps,
			coefficients: spec.coefficients,
			phase: 0,
			delay: vec![0; spec.taps * channels],
			frame: vec![0; channels],
		}
	}

	/// Shift every channel's delay line and insert `frame` at the front.
	fn insert(&mut self, frame: &[i16]) {
		for (line, x) in self.delay.chunks_exact_mut(self.taps).zip(frame) {
			line.copy_within(..self.taps - 1, 1);
			line[0] = *x;
		}
	}

	/// Compute the output frame at the current phase.
	fn compute(&mut self) {
		let coefficients = &self.coefficients[self.phase * self.taps..(self.phase + 1) * self.taps];

		for (y, line) in self.frame.iter_mut().zip(self.delay.chunks_exact(self.taps)) {
			let acc = line
				.iter()
				.zip(coefficients)
				.fold(0_i64, |acc, (x, c)| acc + i64::from(*x) * i64::from(*c));

			*y = (acc >> 15).clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16;
		}
	}

	fn reset(&mut self) {
		self.phase = 0;
		self.delay.fill(0);
	}
}

/// Feed one frame into the first of `stages`, pushing whatever
/// comes out of the last stage onto `output`.
fn feed(stages: &mut [Stage], frame: &[i16], output: &mut Vec<i16>) {
	let Some((stage, rest)) = stages.split_first_mut() else {
		output.extend_from_slice(frame);
		return;
	};

	stage.insert(frame);

	while stage.phase < stage.l {
		stage.compute();
		feed(rest, &stage.frame, output);
		stage.phase += stage.m;
	}

	stage.phase -= stage.l;
}

//---------------------------------------------------------------------------------------------------- Polyphase
/// [`Method::PolyphaseFixed`].
#[derive(Clone,Debug,PartialEq,Eq)]
pub(crate) struct Polyphase {
	channels: usize,
	pair: RatePair,
	stages: Vec<Stage>,
}

impl Polyphase {
	pub(crate) fn new(channels: usize, input: u32, output: u32) -> Result<Self, ResamplerError> {
		let pair = RatePair::new(input, output).ok_or(ResamplerError::RateUnsupported {
			method: Method::PolyphaseFixed,
			input,
			output,
		})?;

		Ok(Self {
			channels,
			pair,
			stages: pair.stages().iter().map(|s| Stage::new(*s, channels)).collect(),
		})
	}
}

impl Resample<i16> for Polyphase {
	fn resample(&mut self, input: &[i16], output: &mut Vec<i16>) -> (usize, usize) {
		let frames = input.len() / self.channels;
		let (i, o) = self.pair.rates();

		let start = output.len();
		output.reserve((frames * o as usize / i as usize + 2) * self.channels);

		for frame in input.chunks_exact(self.channels) {
			feed(&mut self.stages, frame, output);
		}

		((output.len() - start) / self.channels, 0)
	}

	fn reset(&mut self) {
		self.stages.iter_mut().for_each(Stage::reset);
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		*self = Self::new(self.channels, input, output)?;
		Ok(())
	}

	fn delay(&self) -> usize {
		// Each stage's group delay is about half its taps,
		// in that stage's input samples.
		let (input, _) = self.pair.rates();
		let mut rate = u64::from(input);
		let mut delay = 0;

		for s in &self.stages {
			delay += s.taps as u64 / 2 * u64::from(input) / rate;
			rate = rate * s.l as u64 / s.m as u64;
		}

		delay as usize
	}
}

//! The resampler facade.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::Method,
	channel::ChannelMap,
	constants::EXTRA_FRAMES,
	error::ResamplerError,
	format::{StreamSpec, WorkFormat, validate_rate},
	macros::{debug2, info2, trace2},
	remap::MixMatrix,
	resampler::{
		pipeline::{LeftoverSlot, Pipeline},
		Flags,
		ResamplerConfig,
	},
};

//---------------------------------------------------------------------------------------------------- Work
/// The pipeline, in the chosen working format.
#[derive(Debug)]
enum Work {
	S16(Pipeline<i16>),
	F32(Pipeline<f32>),
}

// Forwards `$expr` to the pipeline of either working format.
macro_rules! work {
	($work:expr, |$p:ident| $e:expr) => {
		match $work {
			Work::S16($p) => $e,
			Work::F32($p) => $e,
		}
	};
}

//---------------------------------------------------------------------------------------------------- Resampler
/// Converts the sample format, channel layout and sample rate of a stream.
///
/// ```rust
/// # use henkan::{*,format::*,channel::*};
/// let config = ResamplerConfig::new(
///     StreamSpec::new(SampleFormat::S16Le, 44_100, 1),
///     ChannelMap::mono(),
///     StreamSpec::new(SampleFormat::F32Le, 48_000, 2),
///     ChannelMap::stereo(),
/// );
/// let mut resampler = Resampler::new(config).unwrap();
///
/// // 10ms of mono silence.
/// let input = vec![0_u8; 441 * 2];
/// let output = resampler.run(&input);
///
/// // Some frames of stereo float32 silence come out.
/// assert_eq!(output.len() % 8, 0);
/// assert!(output.iter().all(|b| *b == 0));
/// ```
#[derive(Debug)]
pub struct Resampler {
	config: ResamplerConfig,
	method: Method,
	work_format: WorkFormat,
	matrix: MixMatrix,
	/// Input and output are identical, `run()` returns its input.
	passthrough: bool,
	work: Work,
}

impl Resampler {
	//---------------------------------------------------------------------------------------------------- Init
	/// Create a `Resampler`.
	///
	/// This validates the config, resolves [`ResamplerConfig::method`]
	/// into the method that actually runs, picks the [`WorkFormat`] and
	/// builds the [`MixMatrix`] along with every processing stage.
	///
	/// # Errors
	/// - [`ResamplerError::InvalidFormat`] if the config is invalid
	/// - Any error of [`Method::resolve`]
	/// - [`ResamplerError::Backend`] if a library backend could not be built
	pub fn new(config: ResamplerConfig) -> Result<Self, ResamplerError> {
		config.validate()?;

		let method = config.method.resolve(
			config.input.rate,
			config.output.rate,
			config.flags.variable_rate,
			config.allow_fallback,
		)?;

		let work_format = method.work_format(config.input.format, config.output.format);
		let matrix = MixMatrix::build(&config.input_map, &config.output_map, &config.flags);

		info2!(
			"Resampler - {} {} {} -> {} {} {}, method: {method}, work format: {work_format:?}",
			config.input.format, config.input.rate, config.input_map,
			config.output.format, config.output.rate, config.output_map,
		);
		debug2!("Resampler - mix matrix:\n{matrix}");

		let work = match work_format {
			WorkFormat::S16 => Work::S16(Pipeline::new(&config, method, &matrix)?),
			WorkFormat::F32 => Work::F32(Pipeline::new(&config, method, &matrix)?),
		};

		let passthrough =
			method == Method::Copy &&
			config.input == config.output &&
			config.input_map == config.output_map;

		Ok(Self {
			config,
			method,
			work_format,
			matrix,
			passthrough,
			work,
		})
	}

	//---------------------------------------------------------------------------------------------------- Run
	/// Convert a chunk of input.
	///
	/// The returned bytes are valid until the next mutable call.
	/// If input and output are identical, `input` itself is returned.
	///
	/// Frames the backend could not consume yet are kept
	/// and prepended to the `input` of the next call.
	///
	/// # Panics
	/// If `input.len()` is not a multiple of the input frame size.
	pub fn run<'a>(&'a mut self, input: &'a [u8]) -> &'a [u8] {
		let frame_size = self.config.input.frame_size();
		assert!(
			input.len() % frame_size == 0,
			"input length {} is not a multiple of the frame size {frame_size}",
			input.len(),
		);

		if self.passthrough {
			return input;
		}

		work!(&mut self.work, |p| p.run(input))
	}

	//---------------------------------------------------------------------------------------------------- Sizes
	/// The input bytes needed for at least `out_bytes` of output.
	///
	/// Leftover frames are not taken into account.
	///
	/// ```rust
	/// # use henkan::{*,format::*};
	/// let config = ResamplerConfig::with_default_maps(
	///     StreamSpec::new(SampleFormat::S16Le, 44_100, 2),
	///     StreamSpec::new(SampleFormat::S16Le, 48_000, 2),
	/// ).unwrap();
	/// let resampler = Resampler::new(config).unwrap();
	///
	/// // 480 output frames need 441 input frames.
	/// assert_eq!(resampler.request(480 * 4), 441 * 4);
	/// ```
	pub fn request(&self, out_bytes: usize) -> usize {
		let (in_rate, out_rate) = self.rates();
		let frames = div_ceil(out_bytes as u128, self.config.output.frame_size() as u128);
		let frames = div_ceil(frames * u128::from(in_rate), u128::from(out_rate));
		frames_to_bytes(frames, self.config.input.frame_size())
	}

	/// The most output bytes `run()` can return for `in_bytes` of input.
	///
	/// Leftover frames are taken into account.
	pub fn result(&self, in_bytes: usize) -> usize {
		let (in_rate, out_rate) = self.rates();
		let frames = div_ceil(in_bytes as u128, self.config.input.frame_size() as u128);
		let frames = frames + self.leftover_frames() as u128;
		let frames = div_ceil(frames * u128::from(out_rate), u128::from(in_rate));
		frames_to_bytes(frames, self.config.output.frame_size())
	}

	/// The largest input in bytes for which every intermediate
	/// buffer of `run()` fits in [`ResamplerConfig::slab_size`].
	///
	/// This is never less than 1 input frame.
	pub fn max_block_size(&self) -> usize {
		let input = &self.config.input;
		let output = &self.config.output;

		let channels = input.channel_count().max(output.channel_count());
		let sample_size = input.sample_size()
			.max(output.sample_size())
			.max(self.work_format.sample_size());
		let max_fs = channels * sample_size;

		let frames = (self.config.slab_size / max_fs)
			.saturating_sub(EXTRA_FRAMES)
			.saturating_sub(self.leftover_frames());

		let (in_rate, out_rate) = self.rates();
		let frames = (frames as u64 * in_rate / in_rate.max(out_rate)) as usize;

		if frames == 0 {
			input.frame_size()
		} else {
			frames * input.frame_size()
		}
	}

	//---------------------------------------------------------------------------------------------------- Rates
	/// Change the input rate.
	///
	/// This is a no-op if the rate did not change.
	///
	/// # Errors
	/// [`ResamplerError::InvalidFormat`] for an invalid rate, or the
	/// error of the backend if it cannot run at the new rate.
	/// On error the previous rates stay in place.
	pub fn set_input_rate(&mut self, rate: u32) -> Result<(), ResamplerError> {
		validate_rate(rate)?;
		if rate == self.config.input.rate {
			return Ok(());
		}

		work!(&mut self.work, |p| p.update_rates(rate, self.config.output.rate))?;
		debug2!("Resampler - input rate {} -> {rate}", self.config.input.rate);
		self.config.input.rate = rate;
		Ok(())
	}

	/// Change the output rate.
	///
	/// This is a no-op if the rate did not change.
	///
	/// # Errors
	/// Same as [`Self::set_input_rate`].
	pub fn set_output_rate(&mut self, rate: u32) -> Result<(), ResamplerError> {
		validate_rate(rate)?;
		if rate == self.config.output.rate {
			return Ok(());
		}

		work!(&mut self.work, |p| p.update_rates(self.config.input.rate, rate))?;
		debug2!("Resampler - output rate {} -> {rate}", self.config.output.rate);
		self.config.output.rate = rate;
		Ok(())
	}

	//---------------------------------------------------------------------------------------------------- Reset
	/// Forget all history and leftover frames.
	///
	/// The configuration is kept.
	pub fn reset(&mut self) {
		trace2!("Resampler - reset");
		work!(&mut self.work, |p| p.reset());
	}

	/// The stream was rewound by `out_frames` output frames.
	///
	/// This is a [`Self::reset`] that also rewinds the LFE filter.
	pub fn rewind(&mut self, out_frames: usize) {
		trace2!("Resampler - rewind {out_frames} frames");
		work!(&mut self.work, |p| p.rewind());
	}

	//---------------------------------------------------------------------------------------------------- Getters
	#[inline]
	#[must_use]
	/// The method that actually runs.
	pub const fn method(&self) -> Method {
		self.method
	}

	#[inline]
	#[must_use]
	/// The current input format, including the current rate.
	pub const fn input_spec(&self) -> &StreamSpec {
		&self.config.input
	}

	#[inline]
	#[must_use]
	/// The current output format, including the current rate.
	pub const fn output_spec(&self) -> &StreamSpec {
		&self.config.output
	}

	#[inline]
	#[must_use]
	/// The input channel map.
	pub const fn input_map(&self) -> &ChannelMap {
		&self.config.input_map
	}

	#[inline]
	#[must_use]
	/// The output channel map.
	pub const fn output_map(&self) -> &ChannelMap {
		&self.config.output_map
	}

	#[inline]
	#[must_use]
	/// The format samples are processed in.
	pub const fn work_format(&self) -> WorkFormat {
		self.work_format
	}

	#[inline]
	#[must_use]
	/// The channel mixing matrix.
	pub const fn matrix(&self) -> &MixMatrix {
		&self.matrix
	}

	#[inline]
	#[must_use]
	/// The flags this `Resampler` was created with.
	pub const fn flags(&self) -> &Flags {
		&self.config.flags
	}

	#[must_use]
	/// The frames carried over to the next `run()`.
	pub fn leftover_frames(&self) -> usize {
		work!(&self.work, |p| p.leftover().frames)
	}

	#[must_use]
	/// The buffer the leftover frames are kept in.
	pub fn leftover_slot(&self) -> LeftoverSlot {
		work!(&self.work, |p| p.leftover().slot)
	}

	#[must_use]
	/// The crossover frequency of the LFE filter.
	///
	/// `None` if no LFE channel was synthesized or
	/// [`ResamplerConfig::crossover_freq`] was not set.
	pub fn crossover_freq(&self) -> Option<u32> {
		work!(&self.work, |p| p.crossover())
	}

	#[must_use]
	/// Frames held back by the leftover and the backend history.
	pub fn delay(&self) -> usize {
		work!(&self.work, |p| p.delay())
	}

	/// The current `(input, output)` rates.
	fn rates(&self) -> (u64, u64) {
		(u64::from(self.config.input.rate), u64::from(self.config.output.rate))
	}
}

//---------------------------------------------------------------------------------------------------- Free functions
/// `ceil(a / b)`, `u128::div_ceil()` needs a newer Rust.
///
/// This cannot overflow, unlike `(a + b - 1) / b`.
const fn div_ceil(a: u128, b: u128) -> u128 {
	a / b + (a % b != 0) as u128
}

/// `frames * frame_size`, saturating at the last whole frame `usize` can hold.
fn frames_to_bytes(frames: u128, frame_size: usize) -> usize {
	usize::try_from(frames * frame_size as u128)
		.unwrap_or(usize::MAX - usize::MAX % frame_size)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		channel::ChannelPosition as P,
		format::SampleFormat,
		tests::{config, interleave, rms, s16_bytes, s16_samples, sine_i16},
	};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use strum::IntoEnumIterator;

	/// Run `input` in chunks of `chunk` frames, collecting the output.
	fn run_chunked(r: &mut Resampler, input: &[u8], chunk: usize) -> Vec<u8> {
		let chunk = chunk * r.input_spec().frame_size();
		input.chunks(chunk).flat_map(|c| r.run(c).to_vec()).collect()
	}

	#[test]
	fn copy_is_bit_identical() {
		let mut r = Resampler::new(config(Method::Auto, (48_000, 2), (48_000, 2))).unwrap();
		assert_eq!(r.method(), Method::Copy);

		let input = s16_bytes(&interleave(&sine_i16(440.0, 48_000, 1_000, 0.9), 2));
		for chunk in [1, 7, 480, 1_000] {
			assert_eq!(run_chunked(&mut r, &input, chunk), input);
		}

		// Same pointer, nothing was copied.
		assert_eq!(r.run(&input).as_ptr(), input.as_ptr());
	}

	#[test]
	fn copy_with_format_conversion() {
		let mut c = config(Method::Copy, (48_000, 1), (48_000, 1));
		c.output.format = SampleFormat::S32NE;
		let mut r = Resampler::new(c).unwrap();
		assert_eq!(r.work_format(), WorkFormat::S16);

		let input = s16_bytes(&[0, 1, -1, i16::MAX, i16::MIN]);
		let output: Vec<i32> = r.run(&input)
			.chunks_exact(4)
			.map(|b| i32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
			.collect();

		assert_eq!(output, [0, 1 << 16, -1 << 16, i32::from(i16::MAX) << 16, i32::from(i16::MIN) << 16]);
	}

	#[test]
	fn equal_rates_resolve_to_copy() {
		for method in Method::iter() {
			let r = Resampler::new(config(method, (44_100, 2), (44_100, 2))).unwrap();
			assert_eq!(r.method(), Method::Copy);
		}
	}

	#[test]
	fn mono_to_stereo() {
		let mut r = Resampler::new(config(Method::Auto, (48_000, 1), (48_000, 2))).unwrap();
		assert_eq!(r.matrix().row(0), &[1.0]);
		assert_eq!(r.matrix().row(1), &[1.0]);

		let mono = [0, 1_000, -1_000, 32_767, -32_768];
		let stereo = s16_samples(r.run(&s16_bytes(&mono)));
		assert_eq!(stereo, interleave(&mono, 2));
	}

	#[test]
	fn stereo_to_mono() {
		let mut r = Resampler::new(config(Method::Auto, (48_000, 2), (48_000, 1))).unwrap();
		let out = s16_samples(r.run(&s16_bytes(&[1_000, 3_000, -2_000, 0])));
		assert_eq!(out, [2_000, -1_000]);
	}

	#[test]
	fn leftover_slot() {
		let r = Resampler::new(config(Method::Trivial, (44_100, 2), (48_000, 1))).unwrap();
		assert_eq!(r.leftover_slot(), LeftoverSlot::RemapOutput);

		let r = Resampler::new(config(Method::Trivial, (44_100, 2), (48_000, 2))).unwrap();
		assert_eq!(r.leftover_slot(), LeftoverSlot::RemapOutput);

		let r = Resampler::new(config(Method::Trivial, (44_100, 1), (48_000, 6))).unwrap();
		assert_eq!(r.leftover_slot(), LeftoverSlot::ToWorkFormatOutput);
	}

	#[test]
	fn silence_for_every_method() {
		for method in Method::iter().filter(|m| m.is_available()) {
			for (input, output) in [((48_000, 2), (44_100, 1)), ((44_100, 1), (48_000, 6)), ((16_000, 2), (8_000, 2))] {
				let Ok(mut r) = Resampler::new(config(method, input, output)) else {
					continue;
				};

				let silence = vec![0_u8; 4_800 * r.input_spec().frame_size()];
				let out = run_chunked(&mut r, &silence, 333);
				assert!(!out.is_empty(), "{method}");
				assert!(out.iter().all(|b| *b == 0), "{method}");
			}
		}
	}

	#[test]
	fn long_run_rate() {
		for method in [Method::Trivial, Method::SincFixed, Method::PolyphaseFixed, Method::Auto] {
			let mut r = Resampler::new(config(method, (44_100, 2), (48_000, 2))).unwrap();
			let input = vec![0_u8; 44_100 * 4];

			let mut frames = 0;
			for _ in 0..10 {
				frames += run_chunked(&mut r, &input, 441).len() / 4;
			}

			// Frames held back are counted at the output rate.
			let lost = (480_000 - frames as i64).unsigned_abs() as usize;
			let tolerance = r.delay() * 48_000 / 44_100 + 1_024;
			assert!(lost <= tolerance, "{method}: {frames} frames, delay {}", r.delay());
		}
	}

	#[test]
	fn sine_survives() {
		let mut r = Resampler::new(config(Method::SincFixed, (44_100, 1), (48_000, 2))).unwrap();
		let input = s16_bytes(&sine_i16(1_000.0, 44_100, 44_100, 0.5));
		let out = s16_samples(&run_chunked(&mut r, &input, 512));

		let settled = &out[out.len() / 2..];
		let level = rms(settled.iter().map(|s| f32::from(*s) / 32768.0)) * std::f32::consts::SQRT_2;
		assert!((level - 0.5).abs() < 0.02, "{level}");
	}

	#[test]
	fn errors_without_fallback() {
		let mut c = config(Method::PolyphaseFixed, (44_100, 2), (32_000, 2));
		c.allow_fallback = false;
		assert_eq!(
			Resampler::new(c.clone()).unwrap_err(),
			ResamplerError::RateUnsupported { method: Method::PolyphaseFixed, input: 44_100, output: 32_000 },
		);

		c.allow_fallback = true;
		assert_eq!(Resampler::new(c).unwrap().method(), Method::SincFixed);

		let mut c = config(Method::Peaks, (44_100, 2), (48_000, 2));
		c.allow_fallback = false;
		assert_eq!(Resampler::new(c).unwrap_err(), ResamplerError::UnsupportedMethod(Method::Peaks));
	}

	#[test]
	fn invalid_config() {
		let mut c = config(Method::Auto, (44_100, 2), (48_000, 2));
		c.input_map = ChannelMap::mono();
		assert!(matches!(Resampler::new(c), Err(ResamplerError::InvalidFormat(_))));

		let c = config(Method::Auto, (0, 2), (48_000, 2));
		assert!(matches!(Resampler::new(c), Err(ResamplerError::InvalidFormat(_))));
	}

	#[test]
	fn request_result() {
		let r = Resampler::new(config(Method::Trivial, (44_100, 2), (48_000, 2))).unwrap();
		assert_eq!(r.request(480 * 4), 441 * 4);
		assert_eq!(r.request(1), 4);
		assert_eq!(r.result(441 * 4), 480 * 4);
		assert_eq!(r.result(1), 2 * 4);
		assert_eq!(r.request(0), 0);

		// Sizes near the limit saturate instead of overflowing.
		assert_eq!(div_ceil(u128::MAX, 1), u128::MAX);
		assert_eq!(div_ceil(u128::MAX, 2), u128::MAX / 2 + 1);
		assert_eq!(div_ceil(u128::MAX - 1, u128::MAX), 1);
		assert_eq!(r.request(usize::MAX) % 4, 0);
		assert!(r.request(usize::MAX) < usize::MAX);
		assert_eq!(r.result(usize::MAX), usize::MAX - usize::MAX % 4);
	}

	#[test]
	fn max_block_size() {
		// s16 stereo everywhere: 4 byte frames.
		let r = Resampler::new(config(Method::Trivial, (44_100, 2), (48_000, 2))).unwrap();
		let frames = 65_536 / 4 - 128;
		assert_eq!(r.max_block_size(), frames * 44_100 / 48_000 * 4);

		// Downsampling does not scale.
		let r = Resampler::new(config(Method::Trivial, (48_000, 2), (44_100, 2))).unwrap();
		assert_eq!(r.max_block_size(), frames * 4);

		// Tiny slabs still allow a single frame.
		let mut c = config(Method::Trivial, (44_100, 2), (48_000, 2));
		c.slab_size = 16;
		assert_eq!(Resampler::new(c).unwrap().max_block_size(), 4);
	}

	#[test]
	fn set_rates() {
		let mut c = config(Method::SincFixed, (44_100, 2), (48_000, 2));
		c.flags.variable_rate = true;
		let mut r = Resampler::new(c).unwrap();

		r.set_input_rate(44_100).unwrap();
		r.set_output_rate(96_000).unwrap();
		assert_eq!(r.output_spec().rate, 96_000);
		assert_eq!(r.result(441 * 4), 960 * 4);

		assert!(r.set_input_rate(0).is_err());
		assert!(r.set_output_rate(crate::constants::MAX_RATE + 1).is_err());
		assert_eq!(r.input_spec().rate, 44_100);
		assert_eq!(r.output_spec().rate, 96_000);

		let out = r.run(&[0; 4 * 441]);
		assert!(out.iter().all(|b| *b == 0));
	}

	#[test]
	fn set_rate_rejected_by_backend() {
		let mut r = Resampler::new(config(Method::PolyphaseFixed, (8_000, 1), (16_000, 1))).unwrap();
		assert_eq!(r.method(), Method::PolyphaseFixed);

		let err = r.set_output_rate(17_000).unwrap_err();
		assert!(matches!(err, ResamplerError::RateUnsupported { .. }), "{err:?}");
		assert_eq!(r.output_spec().rate, 16_000);

		r.set_output_rate(48_000).unwrap();
		assert_eq!(r.output_spec().rate, 48_000);
	}

	#[test]
	fn reset_clears_history() {
		let mut r = Resampler::new(config(Method::SincFixed, (44_100, 1), (48_000, 1))).unwrap();
		let input = s16_bytes(&sine_i16(440.0, 44_100, 1_000, 0.5));

		let first = r.run(&input).to_vec();
		r.reset();
		assert_eq!(r.leftover_frames(), 0);
		assert_eq!(r.run(&input), first);

		r.rewind(100);
		assert_eq!(r.run(&input), first);
	}

	#[test]
	fn lfe_crossover() {
		let mut c = config(Method::Auto, (48_000, 2), (48_000, 6));
		c.flags.produce_lfe = true;
		c.crossover_freq = Some(120);
		let mut r = Resampler::new(c.clone()).unwrap();
		assert!(r.matrix().lfe_synthesized());
		assert_eq!(r.crossover_freq(), Some(120));

		// A high tone is kept out of the LFE channel.
		let input = s16_bytes(&interleave(&sine_i16(4_000.0, 48_000, 4_800, 0.5), 2));
		let out = s16_samples(r.run(&input));
		let lfe = c.output_map.positions().iter().position(|p| *p == P::Lfe).unwrap();
		let tail = &out[out.len() / 2..];
		let level = rms(tail.iter().skip(lfe).step_by(6).map(|s| f32::from(*s) / 32768.0));
		assert!(level < 0.01, "{level}");

		// Disabling the fill does not disable the LFE.
		c.flags.no_fill_sink = true;
		let r = Resampler::new(c.clone()).unwrap();
		assert!(r.matrix().lfe_synthesized());
		assert_eq!(r.crossover_freq(), Some(120));

		c.crossover_freq = None;
		assert_eq!(Resampler::new(c).unwrap().crossover_freq(), None);
	}

	#[test]
	#[should_panic]
	fn partial_frame_panics() {
		let mut r = Resampler::new(config(Method::Auto, (44_100, 2), (48_000, 2))).unwrap();
		r.run(&[0; 3]);
	}

	#[test]
	#[cfg(feature = "rubato")]
	fn rubato_leftover() {
		let mut r = Resampler::new(config(Method::Sinc, (44_100, 2), (48_000, 2))).unwrap();
		assert_eq!(r.work_format(), WorkFormat::F32);

		let before = r.max_block_size();

		// Less than one chunk of input is all kept.
		let out = r.run(&[0; 4 * 100]);
		assert!(out.is_empty());
		assert_eq!(r.leftover_frames(), 100);
		assert!(r.delay() >= 100);
		assert!(r.max_block_size() < before);
		assert_eq!(r.result(0), div_ceil(100 * 48_000, 44_100) as usize * 4);

		r.reset();
		assert_eq!(r.leftover_frames(), 0);
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(16))]

		#[test]
		fn chunking_is_exact(split in 1_usize..2_000, method in prop::sample::select(vec![
			Method::Trivial,
			Method::SincFixed,
			Method::PolyphaseFixed,
			Method::Peaks,
		])) {
			let (input, output) = if method == Method::Peaks { (48_000, 16_000) } else { (16_000, 48_000) };
			let c = config(method, (input, 1), (output, 2));
			let bytes = s16_bytes(&sine_i16(997.0, input, 2_000, 0.8));

			let mut whole = Resampler::new(c.clone()).unwrap();
			let expected = whole.run(&bytes).to_vec();

			let mut split_r = Resampler::new(c).unwrap();
			let mut got = split_r.run(&bytes[..split * 2]).to_vec();
			got.extend_from_slice(split_r.run(&bytes[split * 2..]));

			prop_assert_eq!(got, expected);
		}
	}
}

//! The per-format processing pipeline behind [`Resampler`](crate::Resampler).

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Backend, Method, Resample},
	convert,
	error::ResamplerError,
	format::SampleFormat,
	macros::{debug2, trace2},
	remap::{lfe::LfeFilter, MixMatrix, Remapper},
	resampler::ResamplerConfig,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- LeftoverSlot
/// Which intermediate buffer carries the frames
/// the backend could not consume over to the next `run()`.
///
/// This is the buffer that feeds the backend, so it
/// follows the stage order and is fixed at construction.
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeftoverSlot {
	/// Remap runs first, the leftover are remapped frames.
	RemapOutput,
	/// Resample runs first, the leftover are decoded input frames.
	ToWorkFormatOutput,
}

/// Frames carried over between `run()` calls.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub(crate) struct Leftover {
	pub(crate) slot: LeftoverSlot,
	pub(crate) frames: usize,
}

//---------------------------------------------------------------------------------------------------- Location
/// Where the samples of the current stage live.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
enum Location {
	/// The caller's input, viewed without copying.
	Caller,
	ToWork,
	Remap,
	Resample,
}

//---------------------------------------------------------------------------------------------------- Pipeline
/// Every stage of a `Resampler` working on samples of type `S`.
///
/// All buffers are grow-only, their length is the
/// amount of valid samples, not their capacity.
#[derive(Debug)]
pub(crate) struct Pipeline<S: Sample> {
	input_format: SampleFormat,
	output_format: SampleFormat,
	input_channels: usize,

	remapper: Option<Remapper>,
	remap_first: bool,
	backend: Backend<S>,
	/// The channel count the backend sees.
	backend_channels: usize,
	lfe: Option<LfeFilter>,
	leftover: Leftover,

	to_work: Vec<S>,
	remap: Vec<S>,
	resample: Vec<S>,
	out: Vec<u8>,
}

impl<S: Sample> Pipeline<S> {
	/// Build every stage for an already validated `config`.
	pub(crate) fn new(
		config: &ResamplerConfig,
		method: Method,
		matrix: &MixMatrix,
	) -> Result<Self, ResamplerError> {
		let input_channels = config.input.channel_count();
		let output_channels = config.output.channel_count();

		// Whichever side has fewer channels is resampled.
		let remap_first = output_channels <= input_channels;
		let backend_channels = if remap_first { output_channels } else { input_channels };

		let backend = Backend::new(
			method,
			backend_channels,
			config.input.rate,
			config.output.rate,
			config.flags.variable_rate,
		)?;

		let remapper = if matrix.is_identity() { None } else { Some(Remapper::new(matrix)) };

		let lfe = match config.crossover_freq {
			Some(freq) if matrix.lfe_synthesized() => {
				Some(LfeFilter::new(&config.output_map, freq, config.output.rate))
			},
			_ => None,
		};

		let slot = if remap_first { LeftoverSlot::RemapOutput } else { LeftoverSlot::ToWorkFormatOutput };

		debug2!(
			"Pipeline - backend: {}, channels: {backend_channels}, remap: {}, lfe: {}, leftover: {slot:?}",
			backend.method(),
			remapper.is_some(),
			lfe.is_some(),
		);

		Ok(Self {
			input_format: config.input.format,
			output_format: config.output.format,
			input_channels,
			remapper,
			remap_first,
			backend,
			backend_channels,
			lfe,
			leftover: Leftover { slot, frames: 0 },
			to_work: Vec::new(),
			remap: Vec::new(),
			resample: Vec::new(),
			out: Vec::new(),
		})
	}

	//---------------------------------------------------------------------------------------------------- Getters
	pub(crate) const fn leftover(&self) -> Leftover {
		self.leftover
	}

	/// The crossover frequency of the LFE filter, if it exists.
	pub(crate) fn crossover(&self) -> Option<u32> {
		self.lfe.as_ref().map(LfeFilter::crossover)
	}

	/// Leftover and backend history, in frames.
	pub(crate) fn delay(&self) -> usize {
		self.leftover.frames + self.backend.delay()
	}

	//---------------------------------------------------------------------------------------------------- Control
	pub(crate) fn reset(&mut self) {
		self.backend.reset();
		self.slot_mut().clear();
		self.leftover.frames = 0;
		if let Some(lfe) = &mut self.lfe {
			lfe.reset();
		}
	}

	pub(crate) fn rewind(&mut self) {
		self.backend.reset();
		self.slot_mut().clear();
		self.leftover.frames = 0;
		if let Some(lfe) = &mut self.lfe {
			lfe.rewind();
		}
	}

	/// Rates change in the backend first, nothing
	/// changes if the backend rejects them.
	pub(crate) fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		self.backend.update_rates(input, output)?;
		if let Some(lfe) = &mut self.lfe {
			lfe.set_rate(output);
		}
		Ok(())
	}

	//---------------------------------------------------------------------------------------------------- Run
	/// Push `input` through every stage.
	///
	/// `input` must hold whole input frames.
	pub(crate) fn run<'a>(&'a mut self, input: &'a [u8]) -> &'a [u8] {
		let carry = self.leftover.frames * self.backend_channels;

		//------------------------------------------------ Decode
		// The leftover must be prepended, so the
		// caller's input cannot be used directly then.
		let zero_copy = match self.leftover.slot {
			LeftoverSlot::ToWorkFormatOutput if carry != 0 => None,
			_ => convert::view::<S>(self.input_format, input),
		};

		let (caller, mut loc) = match zero_copy {
			Some(samples) => (samples, Location::Caller),
			None => {
				let keep = if self.leftover.slot == LeftoverSlot::ToWorkFormatOutput { carry } else { 0 };
				self.to_work.truncate(keep);
				convert::to_work(self.input_format, input, &mut self.to_work);
				(&[][..], Location::ToWork)
			},
		};

		trace2!(
			"run - {} frames in, {} leftover, {:?}",
			input.len() / (self.input_format.sample_size() * self.input_channels),
			self.leftover.frames,
			loc,
		);

		//------------------------------------------------ Remap + Resample
		if self.remap_first {
			loc = self.remap_into_slot(loc, caller, carry);
		}

		loc = self.resample(loc, caller);

		if !self.remap_first {
			loc = self.remap(loc, caller);
		}

		//------------------------------------------------ LFE
		if self.lfe.is_some() {
			if loc == Location::Caller {
				self.resample.clear();
				self.resample.extend_from_slice(caller);
				loc = Location::Resample;
			}

			let samples = match loc {
				Location::Caller   => &mut self.resample[..],
				Location::ToWork   => &mut self.to_work[..],
				Location::Remap    => &mut self.remap[..],
				Location::Resample => &mut self.resample[..],
			};

			if let Some(lfe) = &mut self.lfe {
				lfe.process(samples);
			}
		}

		//------------------------------------------------ Encode
		let samples: &'a [S] = match loc {
			Location::Caller   => caller,
			Location::ToWork   => &self.to_work[..],
			Location::Remap    => &self.remap[..],
			Location::Resample => &self.resample[..],
		};

		if convert::is_identity::<S>(self.output_format) {
			return bytemuck::cast_slice(samples);
		}

		self.out.clear();
		convert::from_work(self.output_format, samples, &mut self.out);
		&self.out
	}

	/// Remap ahead of the backend.
	///
	/// The backend input must end up in the leftover
	/// slot (or the caller's input) afterwards.
	fn remap_into_slot(&mut self, loc: Location, caller: &[S], carry: usize) -> Location {
		if let Some(remapper) = &self.remapper {
			let input = match loc {
				Location::Caller => caller,
				_ => &self.to_work[..],
			};
			self.remap.truncate(carry);
			remapper.apply(input, &mut self.remap);
			return Location::Remap;
		}

		match loc {
			Location::Caller if carry == 0 => loc,
			Location::Caller => {
				self.remap.extend_from_slice(caller);
				Location::Remap
			},
			_ if carry == 0 => {
				// The slot is empty, trade buffers instead of copying.
				std::mem::swap(&mut self.to_work, &mut self.remap);
				self.to_work.clear();
				Location::Remap
			},
			_ => {
				self.remap.extend_from_slice(&self.to_work);
				Location::Remap
			},
		}
	}

	/// Remap after the backend.
	fn remap(&mut self, loc: Location, caller: &[S]) -> Location {
		let Some(remapper) = &self.remapper else {
			return loc;
		};

		let input = match loc {
			Location::Caller   => caller,
			Location::ToWork   => &self.to_work[..],
			Location::Remap    => return loc,
			Location::Resample => &self.resample[..],
		};

		self.remap.clear();
		remapper.apply(input, &mut self.remap);
		Location::Remap
	}

	/// Run the backend and keep what it did not consume.
	fn resample(&mut self, loc: Location, caller: &[S]) -> Location {
		if matches!(self.backend, Backend::Copy(_)) {
			return loc;
		}

		let input = match loc {
			Location::Caller   => caller,
			Location::ToWork   => &self.to_work[..],
			Location::Remap    => &self.remap[..],
			Location::Resample => return loc,
		};

		self.resample.clear();
		let (_, unconsumed) = self.backend.resample(input, &mut self.resample);
		let tail = (unconsumed * self.backend_channels).min(input.len());
		let start = input.len() - tail;

		if loc == Location::Caller {
			let slot = self.slot_mut();
			slot.clear();
			slot.extend_from_slice(&caller[start..]);
		} else {
			self.slot_mut().drain(..start);
		}

		self.leftover.frames = tail / self.backend_channels;
		Location::Resample
	}

	fn slot_mut(&mut self) -> &mut Vec<S> {
		match self.leftover.slot {
			LeftoverSlot::RemapOutput => &mut self.remap,
			LeftoverSlot::ToWorkFormatOutput => &mut self.to_work,
		}
	}
}

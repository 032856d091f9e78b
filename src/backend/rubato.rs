//! `rubato` backed floating point resamplers.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Method, NativeBackend, Resample},
	error::ResamplerError,
	macros::{debug2, error2},
};
use ::rubato::{
	FftFixedIn,
	Resampler as _,
	SincFixedIn,
	SincInterpolationParameters,
	SincInterpolationType,
	WindowFunction,
};

//---------------------------------------------------------------------------------------------------- Constants
/// Input frames per `rubato` call.
const CHUNK: usize = 256;

/// Sinc interpolation kernel length.
const SINC_LEN: usize = 128;

/// How far a variable rate [`Method::Sinc`] may stray from its starting ratio.
const MAX_RELATIVE_RATIO: f64 = 10.0;

/// FFT sub-chunks per chunk.
const SUB_CHUNKS: usize = 2;

const SINC_PARAMETERS: SincInterpolationParameters = SincInterpolationParameters {
	sinc_len: SINC_LEN,
	f_cutoff: 0.95,
	interpolation: SincInterpolationType::Linear,
	oversampling_factor: 256,
	window: WindowFunction::BlackmanHarris2,
};

//---------------------------------------------------------------------------------------------------- Kind
// The `rubato::Resampler` trait is not object safe.
enum Kind {
	Sinc(SincFixedIn<f32>),
	Fft(FftFixedIn<f32>),
}

impl Kind {
	fn new(
		method: Method,
		channels: usize,
		input: u32,
		output: u32,
		variable_rate: bool,
	) -> Result<Self, ResamplerError> {
		let to_error = |e: ::rubato::ResamplerConstructionError| ResamplerError::Backend(e.to_string().into());

		match method {
			Method::Sinc => {
				let ratio = f64::from(output) / f64::from(input);
				let relative = if variable_rate { MAX_RELATIVE_RATIO } else { 1.0 };
				SincFixedIn::new(ratio, relative, SINC_PARAMETERS, CHUNK, channels)
					.map(Self::Sinc)
					.map_err(to_error)
			},
			Method::Fft => {
				FftFixedIn::new(input as usize, output as usize, CHUNK, SUB_CHUNKS, channels)
					.map(Self::Fft)
					.map_err(to_error)
			},
			_ => Err(ResamplerError::UnsupportedMethod(method)),
		}
	}

	fn input_frames_next(&self) -> usize {
		match self {
			Self::Sinc(r) => r.input_frames_next(),
			Self::Fft(r) => r.input_frames_next(),
		}
	}

	fn output_frames_max(&self) -> usize {
		match self {
			Self::Sinc(r) => r.output_frames_max(),
			Self::Fft(r) => r.output_frames_max(),
		}
	}

	fn process_into_buffer(
		&mut self,
		input: &[Vec<f32>],
		output: &mut [Vec<f32>],
	) -> Result<(usize, usize), ::rubato::ResampleError> {
		match self {
			Self::Sinc(r) => r.process_into_buffer(input, output, None),
			Self::Fft(r) => r.process_into_buffer(input, output, None),
		}
	}

	fn set_resample_ratio(&mut self, ratio: f64) -> Result<(), ::rubato::ResampleError> {
		match self {
			Self::Sinc(r) => r.set_resample_ratio(ratio, false),
			Self::Fft(r) => r.set_resample_ratio(ratio, false),
		}
	}
}

//---------------------------------------------------------------------------------------------------- Rubato
/// [`Method::Sinc`] and [`Method::Fft`].
///
/// `rubato` consumes fixed size chunks, frames that
/// do not fill a whole chunk are reported as unconsumed.
pub(crate) struct Rubato {
	method: Method,
	channels: usize,
	input: u32,
	output: u32,
	variable_rate: bool,
	kind: Kind,
	/// Planar scratch buffers, one per channel.
	planar_in: Vec<Vec<f32>>,
	planar_out: Vec<Vec<f32>>,
}

impl std::fmt::Debug for Rubato {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Rubato")
			.field("method", &self.method)
			.field("channels", &self.channels)
			.field("input", &self.input)
			.field("output", &self.output)
			.field("variable_rate", &self.variable_rate)
			.finish_non_exhaustive()
	}
}

impl Rubato {
	fn rebuild(&mut self) -> Result<(), ResamplerError> {
		self.kind = Kind::new(self.method, self.channels, self.input, self.output, self.variable_rate)?;
		Ok(())
	}
}

impl NativeBackend<f32> for Rubato {
	fn new(
		method: Method,
		channels: usize,
		input: u32,
		output: u32,
		variable_rate: bool,
	) -> Result<Self, ResamplerError> {
		let kind = Kind::new(method, channels, input, output, variable_rate)?;
		let planar_in = vec![Vec::with_capacity(CHUNK); channels];
		let planar_out = vec![Vec::with_capacity(kind.output_frames_max()); channels];

		Ok(Self {
			method,
			channels,
			input,
			output,
			variable_rate,
			kind,
			planar_in,
			planar_out,
		})
	}

	fn method(&self) -> Method {
		self.method
	}
}

impl Resample<f32> for Rubato {
	fn resample(&mut self, input: &[f32], output: &mut Vec<f32>) -> (usize, usize) {
		let ch = self.channels;
		let frames = input.len() / ch;

		let mut consumed = 0;
		let mut written = 0;

		loop {
			let need = self.kind.input_frames_next();
			if frames - consumed < need {
				break;
			}

			let chunk = &input[consumed * ch..(consumed + need) * ch];
			for (c, planar) in self.planar_in.iter_mut().enumerate() {
				planar.clear();
				planar.extend(chunk[c..].iter().step_by(ch));
			}

			let max = self.kind.output_frames_max();
			self.planar_out.iter_mut().for_each(|p| p.resize(max, 0.0));

			match self.kind.process_into_buffer(&self.planar_in, &mut self.planar_out) {
				Ok((used, produced)) => {
					output.reserve(produced * ch);
					for frame in 0..produced {
						output.extend(self.planar_out.iter().map(|p| p[frame]));
					}
					consumed += used;
					written += produced;
				},
				Err(e) => {
					// Drop the chunk rather than carrying it forever.
					error2!("rubato - {e}");
					consumed += need;
				},
			}
		}

		(written, frames - consumed)
	}

	fn reset(&mut self) {
		if let Err(e) = self.rebuild() {
			error2!("rubato - reset: {e}");
		}
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		let ratio = f64::from(output) / f64::from(input);

		if self.variable_rate && self.kind.set_resample_ratio(ratio).is_ok() {
			self.input = input;
			self.output = output;
			return Ok(());
		}

		debug2!("rubato - rebuilding for {input} -> {output}");
		let kind = Kind::new(self.method, self.channels, input, output, self.variable_rate)?;
		self.kind = kind;
		self.input = input;
		self.output = output;
		Ok(())
	}

	fn delay(&self) -> usize {
		// Approximate, in input frames.
		match self.kind {
			Kind::Sinc(_) => SINC_LEN / 2,
			Kind::Fft(_) => CHUNK / 2,
		}
	}
}

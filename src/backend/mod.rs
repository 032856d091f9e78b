//! Resampling backends.
//!
//! Every backend converts interleaved frames of one [`Sample`] type
//! from an input rate to an output rate behind the same [`Resample`] contract.
//! [`Backend`] dispatches over them, backends that only exist for
//! a single sample type live behind [`Sample::Native`].

//---------------------------------------------------------------------------------------------------- Mod
mod method;
pub use method::Method;

mod copy;
mod peaks;
pub(crate) mod polyphase;
mod sinc_fixed;
mod trivial;
mod window;

pub(crate) use copy::Passthrough;
pub(crate) use peaks::Peaks;
pub(crate) use polyphase::Polyphase;
pub(crate) use sinc_fixed::SincFixed;
pub(crate) use trivial::Trivial;

//---------------------------------------------------------------------------------------------------- use
use crate::{
	error::ResamplerError,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- Resample
/// The contract every backend fulfills.
pub(crate) trait Resample<S> {
	/// Resample the whole interleaved frames of `input`, appending to `output`.
	///
	/// Returns `(frames_written, frames_unconsumed)`. Unconsumed
	/// frames are always the tail of `input` and must be fed again.
	fn resample(&mut self, input: &[S], output: &mut Vec<S>) -> (usize, usize);

	/// Forget all history.
	fn reset(&mut self);

	/// Switch to new rates, keeping as much state as possible.
	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError>;

	/// Frames of input held back inside the backend.
	fn delay(&self) -> usize {
		0
	}
}

/// Backends specific to a single [`Sample`] type.
pub(crate) trait NativeBackend<S: Sample>: Resample<S> + std::fmt::Debug + Sized + Send {
	fn new(
		method: Method,
		channels: usize,
		input: u32,
		output: u32,
		variable_rate: bool,
	) -> Result<Self, ResamplerError>;

	fn method(&self) -> Method;
}

//---------------------------------------------------------------------------------------------------- FixedBackend
/// `i16` only backends.
#[derive(Clone,Debug,PartialEq)]
pub(crate) enum FixedBackend {
	Polyphase(Polyphase),
	SincFixed(SincFixed),
}

impl NativeBackend<i16> for FixedBackend {
	fn new(
		method: Method,
		channels: usize,
		input: u32,
		output: u32,
		_: bool,
	) -> Result<Self, ResamplerError> {
		match method {
			Method::PolyphaseFixed => Polyphase::new(channels, input, output).map(Self::Polyphase),
			Method::SincFixed => Ok(Self::SincFixed(SincFixed::new(channels, input, output))),
			_ => Err(ResamplerError::UnsupportedMethod(method)),
		}
	}

	fn method(&self) -> Method {
		match self {
			Self::Polyphase(_) => Method::PolyphaseFixed,
			Self::SincFixed(_) => Method::SincFixed,
		}
	}
}

impl Resample<i16> for FixedBackend {
	fn resample(&mut self, input: &[i16], output: &mut Vec<i16>) -> (usize, usize) {
		match self {
			Self::Polyphase(b) => b.resample(input, output),
			Self::SincFixed(b) => b.resample(input, output),
		}
	}

	fn reset(&mut self) {
		match self {
			Self::Polyphase(b) => b.reset(),
			Self::SincFixed(b) => b.reset(),
		}
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		match self {
			Self::Polyphase(b) => b.update_rates(input, output),
			Self::SincFixed(b) => b.update_rates(input, output),
		}
	}

	fn delay(&self) -> usize {
		match self {
			Self::Polyphase(b) => b.delay(),
			Self::SincFixed(b) => b.delay(),
		}
	}
}

//---------------------------------------------------------------------------------------------------- FloatBackend
cfg_if::cfg_if! {
	if #[cfg(feature = "rubato")] {
		mod rubato;
		/// `f32` only backends.
		pub(crate) use self::rubato::Rubato as FloatBackend;
	} else {
		/// `f32` only backends, none without `rubato`.
		#[derive(Clone,Debug,PartialEq)]
		pub(crate) enum FloatBackend {}

		impl NativeBackend<f32> for FloatBackend {
			fn new(
				method: Method,
				_: usize,
				_: u32,
				_: u32,
				_: bool,
			) -> Result<Self, ResamplerError> {
				Err(ResamplerError::BackendUnavailable(method))
			}

			fn method(&self) -> Method {
				match *self {}
			}
		}

		impl Resample<f32> for FloatBackend {
			fn resample(&mut self, _: &[f32], _: &mut Vec<f32>) -> (usize, usize) {
				match *self {}
			}

			fn reset(&mut self) {
				match *self {}
			}

			fn update_rates(&mut self, _: u32, _: u32) -> Result<(), ResamplerError> {
				match *self {}
			}
		}
	}
}

//---------------------------------------------------------------------------------------------------- Backend
/// A resolved backend for working samples of type `S`.
#[derive(Debug)]
pub(crate) enum Backend<S: Sample> {
	Copy(Passthrough),
	Trivial(Trivial),
	Peaks(Peaks<S>),
	Native(S::Native),
}

impl<S: Sample> Backend<S> {
	/// Create the backend for an already resolved `method`.
	pub(crate) fn new(
		method: Method,
		channels: usize,
		input: u32,
		output: u32,
		variable_rate: bool,
	) -> Result<Self, ResamplerError> {
		Ok(match method {
			Method::Copy    => Self::Copy(Passthrough::new(channels, input, output)?),
			Method::Trivial => Self::Trivial(Trivial::new(channels, input, output)),
			Method::Peaks   => Self::Peaks(Peaks::new(channels, input, output)?),
			Method::Auto    => return Err(ResamplerError::UnsupportedMethod(method)),
			Method::PolyphaseFixed |
			Method::SincFixed |
			Method::Sinc |
			Method::Fft => Self::Native(<S::Native as NativeBackend<S>>::new(method, channels, input, output, variable_rate)?),
		})
	}

	/// The method this backend implements.
	pub(crate) fn method(&self) -> Method {
		match self {
			Self::Copy(_)    => Method::Copy,
			Self::Trivial(_) => Method::Trivial,
			Self::Peaks(_)   => Method::Peaks,
			Self::Native(b)  => b.method(),
		}
	}
}

impl<S: Sample> Resample<S> for Backend<S> {
	fn resample(&mut self, input: &[S], output: &mut Vec<S>) -> (usize, usize) {
		match self {
			Self::Copy(b)    => b.resample(input, output),
			Self::Trivial(b) => b.resample(input, output),
			Self::Peaks(b)   => b.resample(input, output),
			Self::Native(b)  => b.resample(input, output),
		}
	}

	fn reset(&mut self) {
		match self {
			Self::Copy(b)    => Resample::<S>::reset(b),
			Self::Trivial(b) => Resample::<S>::reset(b),
			Self::Peaks(b)   => b.reset(),
			Self::Native(b)  => b.reset(),
		}
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		match self {
			Self::Copy(b)    => Resample::<S>::update_rates(b, input, output),
			Self::Trivial(b) => Resample::<S>::update_rates(b, input, output),
			Self::Peaks(b)   => b.update_rates(input, output),
			Self::Native(b)  => b.update_rates(input, output),
		}
	}

	fn delay(&self) -> usize {
		match self {
			Self::Native(b) => b.delay(),
			_ => 0,
		}
	}
}

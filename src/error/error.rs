//---------------------------------------------------------------------------------------------------- use
use crate::backend::Method;
use std::borrow::Cow;

//---------------------------------------------------------------------------------------------------- ResamplerError
/// All `henkan` errors.
///
/// These are only ever returned when creating a [`Resampler`](crate::Resampler)
/// or when changing its rates, [`Resampler::run`](crate::Resampler::run) never fails.
///
/// Fallbacks between methods (e.g. `PolyphaseFixed` -> `SincFixed`) are not errors,
/// they are only returned if [`ResamplerConfig::allow_fallback`](crate::ResamplerConfig::allow_fallback)
/// is `false` or if no fallback applies.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ResamplerError {
	#[error("invalid stream format: {0}")]
	/// A [`StreamSpec`](crate::format::StreamSpec) or
	/// [`ChannelMap`](crate::channel::ChannelMap) was malformed.
	///
	/// e.g. a rate of `0`, too many channels, or
	/// a channel map whose length does not match the channel count.
	InvalidFormat(&'static str),

	#[error("resample method `{0}` does not support this configuration")]
	/// An explicitly requested method was rejected
	/// due to its capability constraints.
	UnsupportedMethod(Method),

	#[error("resample method `{0}` is not available in this build")]
	/// The method's backend was compiled out.
	BackendUnavailable(Method),

	#[error("resample method `{method}` does not support {input} Hz -> {output} Hz")]
	/// A rate-pair table constrained backend does not
	/// contain an entry for the requested rates.
	RateUnsupported {
		/// The method that was requested.
		method: Method,
		/// Input rate in Hz.
		input: u32,
		/// Output rate in Hz.
		output: u32,
	},

	#[error("backend error: {0}")]
	/// A wrapped library failed to (re)build its state.
	///
	/// The `str` will contain more information.
	Backend(Cow<'static, str>),
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn display() {
		let e = ResamplerError::RateUnsupported {
			method: Method::PolyphaseFixed,
			input: 44_100,
			output: 11_025,
		};
		assert_eq!(e.to_string(), "resample method `polyphase-fixed` does not support 44100 Hz -> 11025 Hz");

		let e = ResamplerError::InvalidFormat("rate must be non-zero");
		assert_eq!(e.to_string(), "invalid stream format: rate must be non-zero");

		let e = ResamplerError::BackendUnavailable(Method::Fft);
		assert_eq!(e.to_string(), "resample method `fft` is not available in this build");
	}
}

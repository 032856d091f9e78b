//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::polyphase::RatePair,
	error::ResamplerError,
	format::{SampleFormat, WorkFormat},
	macros::{info2, warn2},
};
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- Method
/// Resampling method hint.
///
/// This is what a [`ResamplerConfig`](crate::ResamplerConfig) asks for,
/// the method actually used after fallbacks is [`Resampler::method`](crate::Resampler::method).
///
/// ```rust
/// # use henkan::*;
/// assert_eq!(Method::PolyphaseFixed.to_string(), "polyphase-fixed");
/// assert_eq!("sinc-fixed".parse::<Method>().unwrap(), Method::SincFixed);
/// ```
#[derive(Copy,Clone,Debug,Default,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Method {
	#[default]
	/// Pick the best available method.
	Auto,
	/// Pass-through, input and output rates must be equal.
	Copy,
	/// Nearest neighbour.
	///
	/// Cheap and low quality, supports variable rates.
	Trivial,
	/// Peak decimation, emits the maximum magnitude of every window.
	///
	/// Only supports downsampling, for level meters.
	Peaks,
	/// Fixed-point two-stage polyphase FIR filters.
	///
	/// Only supports a fixed table of rate pairs and no variable rate.
	PolyphaseFixed,
	/// Fixed-point windowed sinc interpolation.
	///
	/// Supports any rate pair and variable rates.
	SincFixed,
	/// Floating point sinc interpolation (`rubato`).
	Sinc,
	/// Floating point FFT based rational resampling (`rubato`).
	///
	/// Does not support variable rates.
	Fft,
}

impl Method {
	#[must_use]
	/// Was this method's backend compiled in?
	pub const fn is_available(self) -> bool {
		match self {
			Self::Sinc | Self::Fft => cfg!(feature = "rubato"),
			_ => true,
		}
	}

	#[must_use]
	/// Can this method change rates while running?
	pub const fn supports_variable_rate(self) -> bool {
		!matches!(self, Self::Copy | Self::PolyphaseFixed | Self::Fft)
	}

	#[must_use]
	/// Can this method convert `input` Hz into `output` Hz?
	pub fn supports_rates(self, input: u32, output: u32) -> bool {
		match self {
			Self::Copy => input == output,
			Self::Peaks => output <= input,
			Self::PolyphaseFixed => RatePair::new(input, output).is_some(),
			_ => true,
		}
	}

	#[must_use]
	/// The working format this method runs in, given the stream formats on each side.
	///
	/// ```rust
	/// # use henkan::{*,format::*};
	/// assert_eq!(Method::PolyphaseFixed.work_format(SampleFormat::F32Le, SampleFormat::F32Le), WorkFormat::S16);
	/// assert_eq!(Method::Sinc.work_format(SampleFormat::S16Le, SampleFormat::S16Le), WorkFormat::F32);
	/// assert_eq!(Method::Trivial.work_format(SampleFormat::S16Le, SampleFormat::F32Le), WorkFormat::S16);
	/// assert_eq!(Method::Trivial.work_format(SampleFormat::U8, SampleFormat::S24Le), WorkFormat::F32);
	/// assert_eq!(Method::Copy.work_format(SampleFormat::U8, SampleFormat::Alaw), WorkFormat::S16);
	/// ```
	pub const fn work_format(self, input: SampleFormat, output: SampleFormat) -> WorkFormat {
		match self {
			Self::PolyphaseFixed | Self::SincFixed => WorkFormat::S16,
			Self::Sinc | Self::Fft => WorkFormat::F32,
			Self::Auto | Self::Copy | Self::Trivial | Self::Peaks => {
				if input.is_s16() || output.is_s16() {
					WorkFormat::S16
				} else if input.is_more_precise_than_s16() || output.is_more_precise_than_s16() {
					WorkFormat::F32
				} else {
					WorkFormat::S16
				}
			},
		}
	}

	/// Resolve this hint into the concrete method to run.
	///
	/// Substitutions are logged. If `allow_fallback` is `false`,
	/// substituting an explicitly requested method is an error.
	///
	/// # Errors
	/// - [`ResamplerError::RateUnsupported`] if the rate table misses
	/// - [`ResamplerError::BackendUnavailable`] if the backend was compiled out
	/// - [`ResamplerError::UnsupportedMethod`] if a capability constraint is violated
	pub fn resolve(
		self,
		input: u32,
		output: u32,
		variable_rate: bool,
		allow_fallback: bool,
	) -> Result<Self, ResamplerError> {
		let mut method = self;
		let equal = input == output && !variable_rate;

		// Rate table miss.
		if method == Self::PolyphaseFixed && !equal && !method.supports_rates(input, output) {
			if !allow_fallback {
				return Err(ResamplerError::RateUnsupported { method, input, output });
			}
			info2!("resolve - {method} does not support {input} -> {output}, falling back to {}", Self::SincFixed);
			method = Self::SincFixed;
		}

		// Nothing to resample.
		if equal {
			if method != Self::Copy {
				info2!("resolve - equal rates, {method} -> {}", Self::Copy);
			}
			return Ok(Self::Copy);
		}

		if !method.is_available() {
			if !allow_fallback {
				return Err(ResamplerError::BackendUnavailable(method));
			}
			warn2!("resolve - {method} is not available, falling back to {}", Self::Auto);
			method = Self::Auto;
		}

		let capable = method.supports_rates(input, output)
			&& (!variable_rate || method.supports_variable_rate());
		if !capable {
			if !allow_fallback {
				return Err(ResamplerError::UnsupportedMethod(method));
			}
			warn2!("resolve - {method} cannot do {input} -> {output} (variable: {variable_rate}), falling back to {}", Self::Auto);
			method = Self::Auto;
		}

		if method == Self::Auto {
			method = Self::auto(variable_rate);
			info2!("resolve - {} -> {method}", Self::Auto);
		}

		Ok(method)
	}

	/// The best available method.
	const fn auto(variable_rate: bool) -> Self {
		if Self::Sinc.is_available() {
			Self::Sinc
		} else if variable_rate {
			Self::Trivial
		} else if Self::Fft.is_available() {
			Self::Fft
		} else {
			Self::SincFixed
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use strum::IntoEnumIterator;

	fn resolve(method: Method, input: u32, output: u32, variable: bool) -> Method {
		method.resolve(input, output, variable, true).unwrap()
	}

	#[test]
	fn names() {
		for m in Method::iter() {
			assert_eq!(m.to_string().parse::<Method>().unwrap(), m);
		}
		assert_eq!(Method::Fft.as_ref(), "fft");
	}

	#[test]
	fn equal_rates_copy() {
		for m in Method::iter() {
			assert_eq!(resolve(m, 48_000, 48_000, false), Method::Copy);
		}
	}

	#[test]
	fn variable_rate_never_copy() {
		assert_eq!(resolve(Method::Copy, 48_000, 48_000, true), Method::auto(true));
		assert_ne!(resolve(Method::Auto, 48_000, 48_000, true), Method::Copy);
	}

	#[test]
	fn polyphase_table() {
		assert_eq!(resolve(Method::PolyphaseFixed, 8_000, 16_000, false), Method::PolyphaseFixed);
		assert_eq!(resolve(Method::PolyphaseFixed, 44_100, 48_000, false), Method::PolyphaseFixed);
		assert_eq!(resolve(Method::PolyphaseFixed, 44_100, 11_025, false), Method::SincFixed);

		assert_eq!(
			Method::PolyphaseFixed.resolve(44_100, 11_025, false, false),
			Err(ResamplerError::RateUnsupported { method: Method::PolyphaseFixed, input: 44_100, output: 11_025 }),
		);
	}

	#[test]
	fn polyphase_variable_rate() {
		assert_eq!(resolve(Method::PolyphaseFixed, 8_000, 16_000, true), Method::auto(true));
		assert_eq!(
			Method::PolyphaseFixed.resolve(8_000, 16_000, true, false),
			Err(ResamplerError::UnsupportedMethod(Method::PolyphaseFixed)),
		);
	}

	#[test]
	fn peaks_downsample_only() {
		assert_eq!(resolve(Method::Peaks, 48_000, 100, false), Method::Peaks);
		assert_eq!(resolve(Method::Peaks, 100, 48_000, false), Method::auto(false));
		assert_eq!(
			Method::Peaks.resolve(100, 48_000, false, false),
			Err(ResamplerError::UnsupportedMethod(Method::Peaks)),
		);
	}

	#[test]
	fn copy_unequal_rates() {
		assert_eq!(resolve(Method::Copy, 44_100, 48_000, false), Method::auto(false));
		assert_eq!(
			Method::Copy.resolve(44_100, 48_000, false, false),
			Err(ResamplerError::UnsupportedMethod(Method::Copy)),
		);
	}

	#[test]
	fn auto() {
		let m = resolve(Method::Auto, 44_100, 48_000, false);
		assert!(m.is_available());
		assert_ne!(m, Method::Auto);

		let m = resolve(Method::Auto, 44_100, 48_000, true);
		assert!(m.supports_variable_rate());
	}

	#[test]
	#[cfg(feature = "rubato")]
	fn auto_rubato() {
		assert_eq!(resolve(Method::Auto, 44_100, 48_000, false), Method::Sinc);
		assert_eq!(resolve(Method::Fft, 44_100, 48_000, false), Method::Fft);
		assert_eq!(resolve(Method::Fft, 44_100, 48_000, true), Method::Sinc);
	}

	#[test]
	#[cfg(not(feature = "rubato"))]
	fn auto_native() {
		assert_eq!(resolve(Method::Auto, 44_100, 48_000, false), Method::SincFixed);
		assert_eq!(resolve(Method::Auto, 44_100, 48_000, true), Method::Trivial);
		assert_eq!(resolve(Method::Sinc, 44_100, 48_000, false), Method::SincFixed);
		assert_eq!(
			Method::Fft.resolve(44_100, 48_000, false, false),
			Err(ResamplerError::BackendUnavailable(Method::Fft)),
		);
	}
}

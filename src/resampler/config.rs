//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::Method,
	channel::ChannelMap,
	constants::DEFAULT_SLAB_SIZE,
	error::ResamplerError,
	format::StreamSpec,
};

//---------------------------------------------------------------------------------------------------- Flags
/// Behavior flags of a [`Resampler`](crate::Resampler).
///
/// ```rust
/// # use henkan::*;
/// let flags = Flags {
///     produce_lfe: true,
///     ..Flags::NONE
/// };
/// assert!(!flags.variable_rate);
/// ```
#[derive(Copy,Clone,Debug,Default,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
	/// The rates will be changed while running.
	///
	/// This excludes [`Method::Copy`], [`Method::PolyphaseFixed`] and [`Method::Fft`].
	pub variable_rate: bool,
	/// Do not remap at all, channel `n` is copied into channel `n`.
	pub no_remap: bool,
	/// Do not mix, only channels with identical positions are connected.
	pub no_remix: bool,
	/// Synthesize an unconnected LFE output from all inputs.
	pub produce_lfe: bool,
	/// Mix an unconnected LFE input into the left/right/center outputs.
	pub consume_lfe: bool,
	/// Do not fill unconnected outputs from other channels on
	/// the same side, and send mono only to the most suitable outputs.
	pub no_fill_sink: bool,
}

impl Flags {
	/// Every flag is `false`.
	pub const NONE: Self = Self {
		variable_rate: false,
		no_remap:      false,
		no_remix:      false,
		produce_lfe:   false,
		consume_lfe:   false,
		no_fill_sink:  false,
	};
}

//---------------------------------------------------------------------------------------------------- ResamplerConfig
/// Construction config for a [`Resampler`](crate::Resampler).
///
/// Everything except the rates is fixed once the `Resampler` is created,
/// see [`Resampler::set_input_rate`](crate::Resampler::set_input_rate) and
/// [`Resampler::set_output_rate`](crate::Resampler::set_output_rate).
#[derive(Clone,Debug,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResamplerConfig {
	/// The format of the bytes passed to [`Resampler::run`](crate::Resampler::run).
	pub input: StreamSpec,
	/// The position of every input channel.
	pub input_map: ChannelMap,
	/// The format of the bytes returned from [`Resampler::run`](crate::Resampler::run).
	pub output: StreamSpec,
	/// The position of every output channel.
	pub output_map: ChannelMap,

	/// The requested resampling method.
	pub method: Method,
	/// Behavior flags.
	pub flags: Flags,

	/// If set and an LFE output channel is synthesized, the LFE channel
	/// is low-passed and all other channels high-passed at this frequency in Hz.
	pub crossover_freq: Option<u32>,

	/// The size in bytes that every intermediate buffer of a
	/// single [`Resampler::run`](crate::Resampler::run) should fit in,
	/// see [`Resampler::max_block_size`](crate::Resampler::max_block_size).
	pub slab_size: usize,

	/// Whether an explicitly requested [`Self::method`] may be
	/// substituted with another one when it cannot be used.
	///
	/// If `false`, that substitution is an error.
	/// Switching to [`Method::Copy`] for equal rates always happens.
	pub allow_fallback: bool,
}

impl ResamplerConfig {
	/// A config with [`Method::Auto`], [`Flags::NONE`] and default tunables.
	///
	/// ```rust
	/// # use henkan::{*,format::*,channel::*};
	/// let config = ResamplerConfig::new(
	///     StreamSpec::new(SampleFormat::S16Le, 44_100, 2),
	///     ChannelMap::stereo(),
	///     StreamSpec::new(SampleFormat::F32Le, 48_000, 1),
	///     ChannelMap::mono(),
	/// );
	///
	/// assert_eq!(config.method,         Method::Auto);
	/// assert_eq!(config.flags,          Flags::NONE);
	/// assert_eq!(config.crossover_freq, None);
	/// assert_eq!(config.slab_size,      henkan::constants::DEFAULT_SLAB_SIZE);
	/// assert_eq!(config.allow_fallback, true);
	/// ```
	#[must_use]
	pub const fn new(
		input: StreamSpec,
		input_map: ChannelMap,
		output: StreamSpec,
		output_map: ChannelMap,
	) -> Self {
		Self {
			input,
			input_map,
			output,
			output_map,
			method:         Method::Auto,
			flags:          Flags::NONE,
			crossover_freq: None,
			slab_size:      DEFAULT_SLAB_SIZE,
			allow_fallback: true,
		}
	}

	#[must_use]
	/// Same as [`Self::new`] with the conventional
	/// layouts of [`ChannelMap::default_for`].
	pub fn with_default_maps(input: StreamSpec, output: StreamSpec) -> Option<Self> {
		Some(Self::new(
			input,
			ChannelMap::default_for(input.channels)?,
			output,
			ChannelMap::default_for(output.channels)?,
		))
	}

	/// Check the formats, maps and tunables.
	///
	/// # Errors
	/// [`ResamplerError::InvalidFormat`] describing the first problem found.
	pub fn validate(&self) -> Result<(), ResamplerError> {
		self.input.validate()?;
		self.output.validate()?;
		self.input_map.validate(&self.input)?;
		self.output_map.validate(&self.output)?;

		if self.crossover_freq == Some(0) {
			return Err(ResamplerError::InvalidFormat("crossover frequency must be non-zero"));
		}

		if self.slab_size == 0 {
			return Err(ResamplerError::InvalidFormat("slab size must be non-zero"));
		}

		Ok(())
	}
}

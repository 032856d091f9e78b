//! Real-time sample rate conversion and channel remapping.
//!
//! [`Resampler`] converts a stream between two sample formats,
//! channel layouts and sample rates. It is created once from
//! a [`ResamplerConfig`] and then called repeatedly with
//! [`Resampler::run`] from the audio thread.
//!
//! ```rust
//! # use henkan::{*,format::*,channel::*};
//! let mut config = ResamplerConfig::new(
//!     StreamSpec::new(SampleFormat::S16Le, 44_100, 2),
//!     ChannelMap::stereo(),
//!     StreamSpec::new(SampleFormat::S16Le, 48_000, 6),
//!     ChannelMap::default_for(6).unwrap(),
//! );
//! config.method = Method::SincFixed;
//! config.flags.produce_lfe = true;
//!
//! let mut resampler = Resampler::new(config).unwrap();
//! assert_eq!(resampler.method(), Method::SincFixed);
//! assert_eq!(resampler.work_format(), WorkFormat::S16);
//!
//! // 441 frames in, about 480 frames out.
//! let input = vec![0_u8; 441 * 4];
//! let max = resampler.result(input.len());
//! let output = resampler.run(&input);
//! assert!(output.len() <= max);
//! ```
//!
//! ## Stages
//! Every `run()` goes through:
//! 1. Conversion into the [`WorkFormat`] (skipped if the input already is)
//! 2. Channel remapping with a [`MixMatrix`] and resampling with the [`Method`] backend,
//!    whichever side has fewer channels is resampled
//! 3. An optional LFE crossover filter
//! 4. Conversion into the output [`SampleFormat`](format::SampleFormat)
//!
//! Frames the backend could not use yet are carried over to the next `run()`,
//! see [`LeftoverSlot`].
//!
//! ## Features
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `rubato` | yes     | [`Method::Sinc`] and [`Method::Fft`] backed by [`rubato`](https://docs.rs/rubato)
//! | `log`    | no      | Logging with [`log`](https://docs.rs/log)
//! | `serde`  | no      | `serde` derives on the config types

//---------------------------------------------------------------------------------------------------- Lints
#![allow(
    clippy::len_zero,
    clippy::type_complexity,
    clippy::module_inception,
)]

#![deny(
    nonstandard_style,
    deprecated,
    missing_docs,
)]

#![forbid(
    unused_mut,
    unused_unsafe,
    future_incompatible,
    break_with_label_and_loop,
    coherence_leak_check,
    duplicate_macro_attributes,
    exported_private_dependencies,
    for_loops_over_fallibles,
    large_assignments,
    overlapping_range_endpoints,
    semicolon_in_expressions_from_macros,
    redundant_semicolons,
    unconditional_recursion,
    unreachable_patterns,
    unused_allocation,
    unused_braces,
    unused_comparisons,
    unused_doc_comments,
    unused_parens,
    unused_labels,
    while_true,
    keyword_idents,
    non_ascii_idents,
    noop_method_call,
	unreachable_pub,
    single_use_lifetimes,
)]

//---------------------------------------------------------------------------------------------------- Public API
mod resampler;
pub use resampler::{Flags, LeftoverSlot, Resampler, ResamplerConfig};

pub mod backend;
pub use backend::Method;

pub mod remap;
pub use remap::MixMatrix;

pub mod error;
pub use error::ResamplerError;

pub mod channel;
pub mod constants;
pub mod format;
pub use format::WorkFormat;

//---------------------------------------------------------------------------------------------------- Private Usage
mod convert;
mod macros;
mod sample;

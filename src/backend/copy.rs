//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Method, Resample},
	error::ResamplerError,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- Passthrough
/// [`Method::Copy`], input and output rates are equal.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub(crate) struct Passthrough {
	channels: usize,
}

impl Passthrough {
	pub(crate) fn new(channels: usize, input: u32, output: u32) -> Result<Self, ResamplerError> {
		if input == output {
			Ok(Self { channels })
		} else {
			Err(ResamplerError::UnsupportedMethod(Method::Copy))
		}
	}
}

impl<S: Sample> Resample<S> for Passthrough {
	fn resample(&mut self, input: &[S], output: &mut Vec<S>) -> (usize, usize) {
		output.extend_from_slice(input);
		(input.len() / self.channels, 0)
	}

	fn reset(&mut self) {}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		*self = Self::new(self.channels, input, output)?;
		Ok(())
	}
}

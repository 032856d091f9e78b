//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::Resample,
	error::ResamplerError,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- Trivial
/// [`Method::Trivial`](crate::backend::Method::Trivial), nearest neighbour.
///
/// Output frame `n` is input frame `floor(n * input / output)`.
/// The two counters are relative to the last time they were
/// normalized, so they never overflow.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub(crate) struct Trivial {
	channels: usize,
	input: u64,
	output: u64,
	/// Input frames consumed.
	i_counter: u64,
	/// Output frames produced.
	o_counter: u64,
}

impl Trivial {
	pub(crate) const fn new(channels: usize, input: u32, output: u32) -> Self {
		Self {
			channels,
			input: input as u64,
			output: output as u64,
			i_counter: 0,
			o_counter: 0,
		}
	}
}

impl<S: Sample> Resample<S> for Trivial {
	fn resample(&mut self, input: &[S], output: &mut Vec<S>) -> (usize, usize) {
		let frames = input.len() / self.channels;
		let ch = self.channels;

		output.reserve((frames as u64 * self.output / self.input) as usize * ch + ch);

		let mut written = 0;
		loop {
			let index = (self.o_counter * self.input / self.output).saturating_sub(self.i_counter) as usize;
			if index >= frames {
				break;
			}

			output.extend_from_slice(&input[index * ch..(index + 1) * ch]);
			written += 1;
			self.o_counter += 1;
		}

		self.i_counter += frames as u64;

		while self.i_counter >= self.input {
			self.i_counter -= self.input;
			self.o_counter -= self.output;
		}

		(written, 0)
	}

	fn reset(&mut self) {
		self.i_counter = 0;
		self.o_counter = 0;
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		*self = Self::new(self.channels, input, output);
		Ok(())
	}
}

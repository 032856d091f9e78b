//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Method, Resample},
	error::ResamplerError,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- Peaks
/// [`Method::Peaks`], peak decimation.
///
/// Output frame `n` holds, per channel, the maximum magnitude of input
/// frames `[n * input / output, (n + 1) * input / output)`.
/// A window may span multiple calls.
#[derive(Clone,Debug,PartialEq)]
pub(crate) struct Peaks<S> {
	input: u64,
	output: u64,
	i_counter: u64,
	o_counter: u64,
	/// Running maximum of the current window, per channel.
	max: Vec<S>,
}

impl<S: Sample> Peaks<S> {
	pub(crate) fn new(channels: usize, input: u32, output: u32) -> Result<Self, ResamplerError> {
		if output > input {
			return Err(ResamplerError::UnsupportedMethod(Method::Peaks));
		}

		Ok(Self {
			input: u64::from(input),
			output: u64::from(output),
			i_counter: 0,
			o_counter: 0,
			max: vec![S::default(); channels],
		})
	}

	fn accumulate(&mut self, frames: &[S]) {
		for frame in frames.chunks_exact(self.max.len()) {
			for (max, s) in self.max.iter_mut().zip(frame) {
				let s = s.magnitude();
				if s > *max {
					*max = s;
				}
			}
		}
	}
}

impl<S: Sample> Resample<S> for Peaks<S> {
	fn resample(&mut self, input: &[S], output: &mut Vec<S>) -> (usize, usize) {
		let ch = self.max.len();
		let frames = input.len() / ch;

		let mut start = 0;
		let mut written = 0;
		loop {
			// Exclusive end of the current window, relative to `input`.
			let end = ((self.o_counter + 1) * self.input / self.output).saturating_sub(self.i_counter) as usize;
			if end > frames {
				break;
			}

			self.accumulate(&input[start * ch..end * ch]);
			output.extend_from_slice(&self.max);
			self.max.fill(S::default());

			written += 1;
			start = end;
			self.o_counter += 1;
		}

		self.accumulate(&input[start * ch..]);
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
		self.max.fill(S::default());
	}

	fn update_rates(&mut self, input: u32, output: u32) -> Result<(), ResamplerError> {
		*self = Self::new(self.max.len(), input, output)?;
		Ok(())
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn downsample_only() {
		assert!(Peaks::<i16>::new(1, 8_000, 16_000).is_err());
		assert!(Peaks::<i16>::new(1, 8_000, 8_000).is_ok());
	}

	#[test]
	fn maximum_magnitude() {
		let mut p = Peaks::<i16>::new(2, 4, 1).unwrap();
		let mut out = vec![];
		let input = [
			1, 0,
			-7, 2,
			3, i16::MIN,
			2, 1,
			// Second window, split over calls.
			5, 5,
		];
		assert_eq!(p.resample(&input, &mut out), (1, 0));
		assert_eq!(out, [7, i16::MAX]);

		assert_eq!(p.resample(&[-9, 0, 1, 1, 0, 0], &mut out), (1, 0));
		assert_eq!(out, [7, i16::MAX, 9, 5]);
	}

	#[test]
	fn rate() {
		let mut p = Peaks::<f32>::new(1, 48_000, 100).unwrap();
		let mut out = vec![];
		let mut total = 0;
		for _ in 0..10 {
			total += p.resample(&[0.5; 4_800], &mut out).0;
		}
		assert_eq!(total, 100);
		assert!(out.iter().all(|s| *s == 0.5));
	}
}

//---------------------------------------------------------------------------------------------------- use
use crate::{
	remap::MixMatrix,
	sample::Sample,
};

//---------------------------------------------------------------------------------------------------- Remapper
/// Applies a [`MixMatrix`] to interleaved frames.
#[derive(Clone,Debug,PartialEq)]
pub(crate) struct Remapper {
	inputs: usize,
	outputs: usize,
	gains: Vec<f32>,
	/// `gains` in 16.16 fixed point, for `i16`.
	gains_q16: Vec<i32>,
	/// Set if every output is a plain copy of (at most) one input.
	permutation: Option<Vec<Option<usize>>>,
}

impl Remapper {
	pub(crate) fn new(matrix: &MixMatrix) -> Self {
		let gains: Vec<f32> = matrix.rows().take(matrix.outputs()).flatten().copied().collect();
		let gains_q16 = gains.iter().map(|g| (g * 65536.0).round() as i32).collect();

		Self {
			inputs: matrix.inputs(),
			outputs: matrix.outputs(),
			gains,
			gains_q16,
			permutation: matrix.permutation(),
		}
	}

	/// Remap whole frames of `input`, appending the result to `output`.
	pub(crate) fn apply<S: Sample>(&self, input: &[S], output: &mut Vec<S>) {
		debug_assert_eq!(input.len() % self.inputs, 0);

		let frames = input.len() / self.inputs;
		let start = output.len();
		output.resize(start + frames * self.outputs, S::default());
		let output = &mut output[start..];

		let frames = input
			.chunks_exact(self.inputs)
			.zip(output.chunks_exact_mut(self.outputs));

		match &self.permutation {
			Some(sources) => for (i, o) in frames {
				for (sample, source) in o.iter_mut().zip(sources) {
					*sample = source.map_or_else(S::default, |s| i[s]);
				}
			},

			None => for (i, o) in frames {
				let rows = self.gains.chunks_exact(self.inputs).zip(self.gains_q16.chunks_exact(self.inputs));
				for (sample, (gains, gains_q16)) in o.iter_mut().zip(rows) {
					*sample = S::mix(i, gains, gains_q16);
				}
			},
		}
	}
}

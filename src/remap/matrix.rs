//---------------------------------------------------------------------------------------------------- use
use crate::{
	channel::{ChannelMap, ChannelPosition},
	resampler::Flags,
};

//---------------------------------------------------------------------------------------------------- Constants
/// Gain of an unconnected left/right/center input mixed into same side outputs.
const RESIDUAL_GAIN: f32 = 1.0 / 9.0;
/// Gain of an unconnected LFE input, when it is consumed.
const LFE_GAIN: f32 = 0.375;
/// Gain of an unconnected center input mixed into left/right outputs.
const CENTER_GAIN: f32 = 0.5;

//---------------------------------------------------------------------------------------------------- MixMatrix
/// A static channel mixing matrix.
///
/// Rows are output channels, columns are input channels.
/// Every row sums to at most `1.0`.
///
/// ```rust
/// # use henkan::{*,channel::*,remap::*};
/// let m = MixMatrix::build(&ChannelMap::mono(), &ChannelMap::stereo(), &Flags::NONE);
/// assert_eq!(m.row(0), &[1.0]);
/// assert_eq!(m.row(1), &[1.0]);
///
/// let m = MixMatrix::build(&ChannelMap::stereo(), &ChannelMap::mono(), &Flags::NONE);
/// assert_eq!(m.row(0), &[0.5, 0.5]);
/// ```
#[derive(Clone,Debug,PartialEq)]
pub struct MixMatrix {
	inputs: usize,
	outputs: usize,
	/// Row-major, `outputs * inputs`.
	gains: Vec<f32>,
	lfe_synthesized: bool,
}

impl MixMatrix {
	#[must_use]
	/// Compute the matrix mapping `input` channels onto `output` channels.
	///
	/// - [`Flags::no_remap`]: channel `n` is copied to channel `n`, extra channels are dropped or silent
	/// - [`Flags::no_remix`]: only channels with identical positions are connected
	/// - otherwise the full up/down-mixing rules apply
	pub fn build(input: &ChannelMap, output: &ChannelMap, flags: &Flags) -> Self {
		let mut this = Self {
			inputs: input.len(),
			outputs: output.len(),
			gains: vec![0.0; input.len() * output.len()],
			lfe_synthesized: false,
		};

		if flags.no_remap {
			for n in 0..this.inputs.min(this.outputs) {
				this.set(n, n, 1.0);
			}
		} else if flags.no_remix {
			for (o, b) in output.positions().iter().enumerate() {
				for (i, a) in input.positions().iter().enumerate() {
					if a == b {
						this.set(o, i, 1.0);
					}
				}
			}
		} else {
			this.remix(input.positions(), output.positions(), flags);
		}

		this.normalize();
		this
	}

	fn remix(&mut self, input: &[ChannelPosition], output: &[ChannelPosition], flags: &Flags) {
		let n_in = input.len();

		let in_left   = input.iter().filter(|p| p.is_left()).count();
		let in_right  = input.iter().filter(|p| p.is_right()).count();
		let in_center = input.iter().filter(|p| p.is_center()).count();

		let mono_map = mono_map(output, flags);
		let mut connected = vec![false; n_in];

		for (o, &b) in output.iter().enumerate() {
			let mut o_connected = false;

			// Identical names, mono input/output.
			for (i, &a) in input.iter().enumerate() {
				let gain = if a == b {
					1.0
				} else if a == ChannelPosition::Mono && mono_map[o] > 0.0 {
					mono_map[o]
				} else if b == ChannelPosition::Mono {
					1.0 / n_in as f32
				} else {
					continue;
				};

				self.set(o, i, gain);
				o_connected = true;
				connected[i] = true;
			}

			// Rear/side surround confusion.
			if !o_connected {
				for (i, &a) in input.iter().enumerate() {
					if !connected[i] && a.is_surround_alias(b) {
						self.set(o, i, 1.0);
						o_connected = true;
						connected[i] = true;
					}
				}
			}

			if o_connected {
				continue;
			}

			// The LFE is synthesized regardless of `no_fill_sink`.
			if b.is_lfe() {
				if flags.produce_lfe {
					// Feeding the LFE does not count as connecting the input.
					for i in 0..n_in {
						self.set(o, i, 1.0 / n_in as f32);
					}
					self.lfe_synthesized = true;
				}
				continue;
			}

			if flags.no_fill_sink {
				continue;
			}

			// Fill an unconnected output from same side inputs.
			if b.is_left() {
				for (i, a) in input.iter().enumerate() {
					if a.is_left() {
						self.set(o, i, 1.0 / in_left as f32);
						connected[i] = true;
					}
				}
			} else if b.is_right() {
				for (i, a) in input.iter().enumerate() {
					if a.is_right() {
						self.set(o, i, 1.0 / in_right as f32);
						connected[i] = true;
					}
				}
			} else if b.is_center() {
				if in_center > 0 {
					for (i, a) in input.iter().enumerate() {
						if a.is_center() {
							self.set(o, i, 1.0 / in_center as f32);
							connected[i] = true;
						}
					}
				} else if in_left + in_right > 0 {
					for (i, a) in input.iter().enumerate() {
						if a.is_left() || a.is_right() {
							self.set(o, i, 1.0 / (in_left + in_right) as f32);
							connected[i] = true;
						}
					}
				}
			}
		}

		self.residual(input, output, &connected, flags);
	}

	/// Mix inputs that are still unconnected in at low gain.
	fn residual(
		&mut self,
		input: &[ChannelPosition],
		output: &[ChannelPosition],
		connected: &[bool],
		flags: &Flags,
	) {
		let unconnected = || input.iter().enumerate().filter(|(i, _)| !connected[*i]);

		let mut n_left = 0;
		let mut n_right = 0;
		let mut n_center = 0;
		let mut n_lfe = 0;
		for (_, a) in unconnected() {
			if a.is_left() {
				n_left += 1;
			} else if a.is_right() {
				n_right += 1;
			} else if a.is_center() {
				n_center += 1;
			} else if a.is_lfe() {
				n_lfe += 1;
			}
		}

		let mut center_mixed_in = false;
		for (i, a) in unconnected() {
			for (o, b) in output.iter().enumerate() {
				if a.is_left() && b.is_left() {
					self.set(o, i, RESIDUAL_GAIN / n_left as f32);
				} else if a.is_right() && b.is_right() {
					self.set(o, i, RESIDUAL_GAIN / n_right as f32);
				} else if a.is_center() && b.is_center() {
					self.set(o, i, RESIDUAL_GAIN / n_center as f32);
					center_mixed_in = true;
				} else if a.is_lfe() && flags.consume_lfe && (b.is_left() || b.is_right() || b.is_center()) {
					self.set(o, i, LFE_GAIN / n_lfe as f32);
				}
			}
		}

		if n_center == 0 || center_mixed_in {
			return;
		}

		// No center output took the center inputs,
		// spread them over left/right outputs instead,
		// preferring outputs with the same front/rear/side placement.
		let sided = |b: &ChannelPosition| b.is_left() || b.is_right();

		let mut found = vec![false; input.len()];
		let mut n_per_output = vec![0_usize; output.len()];

		for (i, a) in unconnected().filter(|(_, a)| a.is_center()) {
			found[i] = output
				.iter()
				.filter(|b| sided(b))
				.any(|b| b.placement() == a.placement());

			for (o, b) in output.iter().enumerate().filter(|(_, b)| sided(b)) {
				if !found[i] || a.placement() == b.placement() {
					n_per_output[o] += 1;
				}
			}
		}

		for (o, b) in output.iter().enumerate() {
			if !sided(b) || n_per_output[o] == 0 {
				continue;
			}

			for (i, a) in unconnected().filter(|(_, a)| a.is_center()) {
				if !found[i] || a.placement() == b.placement() {
					self.set(o, i, CENTER_GAIN / n_per_output[o] as f32);
				}
			}
		}
	}

	/// Scale every row summing above `1.0` down to exactly `1.0`.
	fn normalize(&mut self) {
		if self.inputs == 0 {
			return;
		}

		for row in self.gains.chunks_exact_mut(self.inputs) {
			let sum: f32 = row.iter().sum();
			if sum > 1.0 {
				row.iter_mut().for_each(|g| *g /= sum);
			}
		}
	}

	#[inline]
	fn set(&mut self, output: usize, input: usize, gain: f32) {
		self.gains[output * self.inputs + input] = gain;
	}

	//-------------------------------------------------- Getters
	#[inline]
	#[must_use]
	/// Amount of input channels (columns).
	pub const fn inputs(&self) -> usize {
		self.inputs
	}

	#[inline]
	#[must_use]
	/// Amount of output channels (rows).
	pub const fn outputs(&self) -> usize {
		self.outputs
	}

	#[inline]
	#[must_use]
	/// The gain from `input` channel into `output` channel.
	///
	/// # Panics
	/// If either index is out of bounds.
	pub fn gain(&self, output: usize, input: usize) -> f32 {
		assert!(input < self.inputs);
		self.gains[output * self.inputs + input]
	}

	#[inline]
	#[must_use]
	/// The gains of a single `output` channel, one per input channel.
	///
	/// # Panics
	/// If `output` is out of bounds.
	pub fn row(&self, output: usize) -> &[f32] {
		let start = output * self.inputs;
		&self.gains[start..start + self.inputs]
	}

	/// Iterate over all rows.
	pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
		// `chunks_exact(0)` panics.
		self.gains.chunks_exact(self.inputs.max(1))
	}

	#[inline]
	#[must_use]
	/// Did the matrix synthesize an LFE output channel from the other inputs?
	pub const fn lfe_synthesized(&self) -> bool {
		self.lfe_synthesized
	}

	#[must_use]
	/// Is this an identity matrix?
	pub fn is_identity(&self) -> bool {
		self.inputs == self.outputs && self.permutation().map_or(false, |p| {
			p.iter().enumerate().all(|(o, i)| *i == Some(o))
		})
	}

	/// If every row has at most a single gain of exactly `1.0`
	/// and nothing else, return the source input of every output.
	pub(crate) fn permutation(&self) -> Option<Vec<Option<usize>>> {
		self.rows()
			.take(self.outputs)
			.map(|row| {
				let mut source = None;
				for (i, g) in row.iter().enumerate() {
					if *g == 0.0 {
						continue;
					}
					if *g != 1.0 || source.is_some() {
						return None;
					}
					source = Some(i);
				}
				Some(source)
			})
			.collect()
	}
}

impl std::fmt::Display for MixMatrix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("     ")?;
		for i in 0..self.inputs {
			write!(f, "  I{i:02}")?;
		}
		for (o, row) in self.rows().take(self.outputs).enumerate() {
			write!(f, "\n O{o:02}")?;
			for g in row {
				write!(f, " {g:.3}")?;
			}
		}
		Ok(())
	}
}

//---------------------------------------------------------------------------------------------------- Mono
/// The gain a mono input feeds into each output channel.
fn mono_map(output: &[ChannelPosition], flags: &Flags) -> Vec<f32> {
	let non_lfe = || output.iter().map(|p| if p.is_lfe() { 0.0 } else { 1.0 });

	// Mono goes everywhere except the LFE.
	if !flags.no_fill_sink {
		return non_lfe().collect();
	}

	let pick = |f: &dyn Fn(ChannelPosition) -> bool| -> Vec<f32> {
		output.iter().map(|p| if f(*p) { 1.0 } else { 0.0 }).collect()
	};

	if output.contains(&ChannelPosition::Mono) {
		return pick(&|p| p == ChannelPosition::Mono);
	}

	if output.contains(&ChannelPosition::FrontCenter) {
		return pick(&|p| p == ChannelPosition::FrontCenter);
	}

	if output.contains(&ChannelPosition::FrontLeft) && output.contains(&ChannelPosition::FrontRight) {
		return pick(&|p| matches!(p, ChannelPosition::FrontLeft | ChannelPosition::FrontRight));
	}

	// Nothing suitable, spread evenly.
	let n = output.iter().filter(|p| !p.is_lfe()).count().max(1) as f32;
	non_lfe().map(|g| g / n).collect()
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::channel::ChannelPosition as P;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn map(p: &[P]) -> ChannelMap {
		ChannelMap::new(p.to_vec())
	}

	fn build(i: &[P], o: &[P], flags: Flags) -> MixMatrix {
		MixMatrix::build(&map(i), &map(o), &flags)
	}

	fn approx(a: f32, b: f32) -> bool {
		(a - b).abs() < 1e-6
	}

	#[test]
	fn mono_to_stereo() {
		let m = build(&[P::Mono], &[P::FrontLeft, P::FrontRight], Flags::NONE);
		assert_eq!(m.row(0), &[1.0]);
		assert_eq!(m.row(1), &[1.0]);
		assert!(!m.lfe_synthesized());
	}

	#[test]
	fn stereo_to_mono() {
		let m = build(&[P::FrontLeft, P::FrontRight], &[P::Mono], Flags::NONE);
		assert_eq!(m.row(0), &[0.5, 0.5]);
	}

	#[test]
	fn identity() {
		let stereo = [P::FrontLeft, P::FrontRight];
		let m = build(&stereo, &stereo, Flags::NONE);
		assert!(m.is_identity());

		// Same set, different order.
		let m = build(&stereo, &[P::FrontRight, P::FrontLeft], Flags::NONE);
		assert!(!m.is_identity());
		assert_eq!(m.permutation(), Some(vec![Some(1), Some(0)]));
	}

	#[test]
	fn no_remap() {
		let flags = Flags { no_remap: true, ..Flags::NONE };
		let m = build(&[P::FrontRight, P::FrontLeft, P::Lfe], &[P::FrontLeft, P::FrontRight], flags);
		assert_eq!(m.row(0), &[1.0, 0.0, 0.0]);
		assert_eq!(m.row(1), &[0.0, 1.0, 0.0]);
	}

	#[test]
	fn no_remix() {
		let flags = Flags { no_remix: true, ..Flags::NONE };
		let m = build(&[P::FrontLeft, P::FrontRight], &[P::FrontRight, P::FrontCenter], flags);
		assert_eq!(m.row(0), &[0.0, 1.0]);
		assert_eq!(m.row(1), &[0.0, 0.0]);
	}

	#[test]
	fn surround_alias() {
		let rear = [P::FrontLeft, P::FrontRight, P::RearLeft, P::RearRight];
		let side = [P::FrontLeft, P::FrontRight, P::SideLeft, P::SideRight];
		let m = build(&rear, &side, Flags::NONE);
		assert!(m.is_identity());
	}

	#[test]
	fn stereo_to_quad_fills_rear() {
		let m = build(
			&[P::FrontLeft, P::FrontRight],
			&[P::FrontLeft, P::FrontRight, P::RearLeft, P::RearRight],
			Flags::NONE,
		);
		assert_eq!(m.row(2), &[1.0, 0.0]);
		assert_eq!(m.row(3), &[0.0, 1.0]);

		let flags = Flags { no_fill_sink: true, ..Flags::NONE };
		let m = build(
			&[P::FrontLeft, P::FrontRight],
			&[P::FrontLeft, P::FrontRight, P::RearLeft, P::RearRight],
			flags,
		);
		assert_eq!(m.row(2), &[0.0, 0.0]);
		assert_eq!(m.row(3), &[0.0, 0.0]);
	}

	#[test]
	fn center_from_left_right() {
		let m = build(&[P::FrontLeft, P::FrontRight], &[P::FrontCenter], Flags::NONE);
		assert_eq!(m.row(0), &[0.5, 0.5]);
	}

	#[test]
	fn produce_lfe() {
		let out = [P::FrontLeft, P::FrontRight, P::Lfe];

		let m = build(&[P::FrontLeft, P::FrontRight], &out, Flags::NONE);
		assert_eq!(m.row(2), &[0.0, 0.0]);
		assert!(!m.lfe_synthesized());

		let flags = Flags { produce_lfe: true, ..Flags::NONE };
		let m = build(&[P::FrontLeft, P::FrontRight], &out, flags);
		assert_eq!(m.row(2), &[0.5, 0.5]);
		assert!(m.lfe_synthesized());
	}

	#[test]
	fn produce_lfe_without_fill() {
		let flags = Flags { produce_lfe: true, no_fill_sink: true, ..Flags::NONE };
		let m = MixMatrix::build(&ChannelMap::stereo(), &ChannelMap::default_for(6).unwrap(), &flags);
		assert!(m.lfe_synthesized());

		// FL FR FC LFE RL RR, only the LFE is synthesized.
		assert_eq!(m.row(0), &[1.0, 0.0]);
		assert_eq!(m.row(1), &[0.0, 1.0]);
		assert_eq!(m.row(2), &[0.0, 0.0]);
		assert_eq!(m.row(3), &[0.5, 0.5]);
		assert_eq!(m.row(4), &[0.0, 0.0]);
		assert_eq!(m.row(5), &[0.0, 0.0]);
	}

	#[test]
	fn surround_51_to_stereo() {
		let input = [P::FrontLeft, P::FrontRight, P::FrontCenter, P::Lfe, P::RearLeft, P::RearRight];
		let stereo = [P::FrontLeft, P::FrontRight];

		// FL + RL/9 + FC/2, normalized.
		let m = build(&input, &stereo, Flags::NONE);
		let sum = 1.0 + 1.0 / 9.0 + 0.5;
		let left = m.row(0);
		assert!(approx(left[0], 1.0 / sum));
		assert!(approx(left[1], 0.0));
		assert!(approx(left[2], 0.5 / sum));
		assert!(approx(left[3], 0.0));
		assert!(approx(left[4], (1.0 / 9.0) / sum));
		assert!(approx(left[5], 0.0));

		// The LFE is mixed in when consumed.
		let flags = Flags { consume_lfe: true, ..Flags::NONE };
		let m = build(&input, &stereo, flags);
		let sum = 1.0 + 1.0 / 9.0 + 0.5 + 0.375;
		assert!(approx(m.gain(1, 3), 0.375 / sum));
		assert!(approx(m.gain(1, 1), 1.0 / sum));
	}

	#[test]
	fn rear_center_prefers_rear_outputs() {
		let m = build(
			&[P::FrontLeft, P::FrontRight, P::RearCenter],
			&[P::FrontLeft, P::FrontRight, P::RearLeft, P::RearRight],
			Flags::NONE,
		);
		// Front outputs do not get the rear center.
		assert_eq!(m.gain(0, 2), 0.0);
		assert_eq!(m.gain(1, 2), 0.0);
		// Rear outputs are filled from every left/right input, plus half the center each.
		let rl = m.row(2);
		let sum = 1.0 + 0.5;
		assert!(approx(rl[0], 1.0 / sum));
		assert!(approx(rl[2], 0.5 / sum));
	}

	#[test]
	fn mono_without_fill() {
		let flags = Flags { no_fill_sink: true, ..Flags::NONE };

		let m = build(&[P::Mono], &[P::FrontLeft, P::FrontRight, P::FrontCenter], flags);
		assert_eq!(m.row(0), &[0.0]);
		assert_eq!(m.row(2), &[1.0]);

		let m = build(&[P::Mono], &[P::FrontLeft, P::FrontRight, P::Lfe], flags);
		assert_eq!(m.row(0), &[1.0]);
		assert_eq!(m.row(1), &[1.0]);
		assert_eq!(m.row(2), &[0.0]);

		// No suitable output, spread over the non-LFE channels.
		let m = build(&[P::Mono], &[P::RearLeft, P::RearRight, P::Lfe, P::Aux(0)], flags);
		assert!(approx(m.gain(0, 0), 1.0 / 3.0));
		assert!(approx(m.gain(3, 0), 1.0 / 3.0));
		assert_eq!(m.gain(2, 0), 0.0);
	}

	#[test]
	fn degenerate() {
		let m = build(&[P::Mono], &[P::Mono], Flags::NONE);
		assert!(m.is_identity());

		let eight = ChannelMap::default_for(8).unwrap();
		let m = MixMatrix::build(&eight, &ChannelMap::mono(), &Flags::NONE);
		assert!(approx(m.row(0).iter().sum(), 1.0));
		assert!(m.row(0).iter().all(|g| approx(*g, 1.0 / 8.0)));
	}

	fn position() -> impl Strategy<Value = P> {
		prop_oneof![
			proptest::sample::select(P::NAMED.to_vec()),
			(0_u8..4).prop_map(P::Aux),
		]
	}

	fn flags() -> impl Strategy<Value = Flags> {
		proptest::array::uniform6(any::<bool>()).prop_map(|b| Flags {
			variable_rate: false,
			no_remap: b[0],
			no_remix: b[1],
			produce_lfe: b[2],
			consume_lfe: b[3],
			no_fill_sink: b[4],
		})
	}

	proptest! {
		#[test]
		fn row_sums_never_exceed_one(
			input in proptest::collection::vec(position(), 1..=8),
			output in proptest::collection::vec(position(), 1..=8),
			flags in flags(),
		) {
			let m = build(&input, &output, flags);
			prop_assert_eq!(m.rows().count(), output.len());
			for row in m.rows() {
				let sum: f32 = row.iter().sum();
				prop_assert!(sum <= 1.0 + 1e-5, "{sum}\n{m}");
				prop_assert!(row.iter().all(|g| *g >= 0.0 && g.is_finite()));
			}
		}
	}
}

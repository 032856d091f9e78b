//! ITU-T G.711 A-law and μ-law companding.

//---------------------------------------------------------------------------------------------------- Constants
const SIGN_BIT: i32 = 0x80;
const QUANT_MASK: i32 = 0x0F;
const SEG_SHIFT: i32 = 4;
const SEG_MASK: i32 = 0x70;

/// μ-law bias, added before segment search.
const BIAS: i32 = 0x84;
/// μ-law clip level, in 14-bit magnitude.
const CLIP: i32 = 8159;

/// Segment end points for A-law, 13-bit magnitude.
const SEG_AEND: [i32; 8] = [0x1F, 0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF];
/// Segment end points for μ-law, 14-bit magnitude.
const SEG_UEND: [i32; 8] = [0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF, 0x1FFF];

#[inline]
fn segment(value: i32, table: &[i32; 8]) -> i32 {
	table
		.iter()
		.position(|end| value <= *end)
		.map_or(8, |i| i as i32)
}

//---------------------------------------------------------------------------------------------------- A-law
/// Compress a linear sample into an A-law byte.
pub(crate) fn linear_to_alaw(sample: i16) -> u8 {
	let mut pcm = i32::from(sample) >> 3;

	let mask = if pcm >= 0 {
		0xD5
	} else {
		pcm = -pcm - 1;
		0x55
	};

	let seg = segment(pcm, &SEG_AEND);
	if seg >= 8 {
		return (0x7F ^ mask) as u8;
	}

	let shift = if seg < 2 { 1 } else { seg };
	let aval = (seg << SEG_SHIFT) | ((pcm >> shift) & QUANT_MASK);

	(aval ^ mask) as u8
}

/// Expand an A-law byte into a linear sample.
pub(crate) fn alaw_to_linear(byte: u8) -> i16 {
	let a = i32::from(byte) ^ 0x55;

	let mut t = (a & QUANT_MASK) << 4;
	let seg = (a & SEG_MASK) >> SEG_SHIFT;
	match seg {
		0 => t += 8,
		1 => t += 0x108,
		_ => t = (t + 0x108) << (seg - 1),
	}

	(if a & SIGN_BIT != 0 { t } else { -t }) as i16
}

//---------------------------------------------------------------------------------------------------- μ-law
/// Compress a linear sample into a μ-law byte.
pub(crate) fn linear_to_ulaw(sample: i16) -> u8 {
	let mut pcm = i32::from(sample) >> 2;

	let mask = if pcm < 0 {
		pcm = -pcm;
		0x7F
	} else {
		0xFF
	};

	let pcm = pcm.min(CLIP) + (BIAS >> 2);

	let seg = segment(pcm, &SEG_UEND);
	if seg >= 8 {
		return (0x7F ^ mask) as u8;
	}

	let uval = (seg << SEG_SHIFT) | ((pcm >> (seg + 1)) & QUANT_MASK);
	(uval ^ mask) as u8
}

/// Expand a μ-law byte into a linear sample.
pub(crate) fn ulaw_to_linear(byte: u8) -> i16 {
	let u = i32::from(!byte);

	let t = (((u & QUANT_MASK) << 3) + BIAS) << ((u & SEG_MASK) >> SEG_SHIFT);

	(if u & SIGN_BIT != 0 { BIAS - t } else { t - BIAS }) as i16
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn within(original: i16, decoded: i16) -> bool {
		let (o, d) = (i32::from(original), i32::from(decoded));
		(o - d).abs() <= o.abs() / 8 + 64
	}

	#[test]
	fn alaw_silence() {
		assert_eq!(linear_to_alaw(0), 0xD5);
		assert_eq!(alaw_to_linear(0xD5), 8);
	}

	#[test]
	fn ulaw_silence() {
		assert_eq!(linear_to_ulaw(0), 0xFF);
		assert_eq!(ulaw_to_linear(0xFF), 0);
	}

	#[test]
	fn extremes() {
		assert_eq!(alaw_to_linear(0xAA), 32_256);
		assert_eq!(alaw_to_linear(0x2A), -32_256);
		assert_eq!(ulaw_to_linear(0x80), 32_124);
		assert_eq!(ulaw_to_linear(0x00), -32_124);

		// No overflow on the most negative sample.
		assert_eq!(alaw_to_linear(linear_to_alaw(i16::MIN)), -32_256);
		assert_eq!(ulaw_to_linear(linear_to_ulaw(i16::MIN)), -32_124);
	}

	#[test]
	fn every_byte_round_trips() {
		// Expanding then compressing any code is the identity,
		// except μ-law's negative zero which compresses to positive zero.
		for b in 0..=u8::MAX {
			assert_eq!(linear_to_alaw(alaw_to_linear(b)), b);
			if b != 0x7F {
				assert_eq!(linear_to_ulaw(ulaw_to_linear(b)), b);
			}
		}
	}

	#[test]
	fn quantization_error_is_bounded() {
		for s in (i16::MIN..=i16::MAX).step_by(97) {
			assert!(within(s, alaw_to_linear(linear_to_alaw(s))), "alaw {s}");
			assert!(within(s, ulaw_to_linear(linear_to_ulaw(s))), "ulaw {s}");
		}
	}
}

//! Kaiser windowed sinc helpers shared by the fixed-point backends.

//---------------------------------------------------------------------------------------------------- Functions
/// Normalized sinc, `sin(πx) / πx`.
#[inline]
pub(super) fn sinc(x: f64) -> f64 {
	if x.abs() < 1e-12 {
		1.0
	} else {
		let px = std::f64::consts::PI * x;
		px.sin() / px
	}
}

/// Zeroth order modified Bessel function of the first kind.
pub(super) fn bessel_i0(x: f64) -> f64 {
	let half = x / 2.0;
	let mut sum = 1.0;
	let mut term = 1.0;
	let mut k = 1.0;

	// Converges fast for the betas used here.
	while term > sum * 1e-12 {
		term *= (half / k) * (half / k);
		sum += term;
		k += 1.0;
	}

	sum
}

/// Kaiser window at `t` in `[-1.0, 1.0]`, zero outside.
#[inline]
pub(super) fn kaiser(t: f64, beta: f64) -> f64 {
	if t.abs() > 1.0 {
		return 0.0;
	}
	bessel_i0(beta * (1.0 - t * t).sqrt()) / bessel_i0(beta)
}

/// Quantize `taps` into Q15 so that they sum to exactly `1 << 15`.
///
/// `taps` must already sum to roughly `1.0`.
pub(super) fn quantize_q15(taps: &[f64], out: &mut [i32]) {
	debug_assert_eq!(taps.len(), out.len());

	for (q, t) in out.iter_mut().zip(taps) {
		*q = (t * 32768.0).round() as i32;
	}

	// Put the rounding error on the largest tap.
	let error = (1 << 15) - out.iter().sum::<i32>();
	if let Some(max) = out.iter_mut().max_by_key(|q| q.abs()) {
		*max += error;
	}
}

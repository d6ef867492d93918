use std::f32::consts::PI;

/// Weights of the eight taps `x0 - 3 ..= x0 + 4` for a fractional offset `t` in `[0, 1)`.
///
/// The weights are normalized to sum to one.
#[inline]
pub(crate) fn lanczos4_weights(t: f32) -> [f32; 8] {
    let mut weights = [0.0f32; 8];
    let mut sum = 0.0;

    for (i, w) in weights.iter_mut().enumerate() {
        let d = t + 3.0 - i as f32;
        *w = if d.abs() < 1e-6 {
            1.0
        } else {
            let pd = PI * d;
            4.0 * pd.sin() * (pd / 4.0).sin() / (pd * pd)
        };
        sum += *w;
    }

    weights.iter_mut().for_each(|w| *w /= sum);
    weights
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    #[test]
    fn lanczos4_weights_normalized() {
        for t in [0.0, 0.1, 0.5, 0.9] {
            let weights = super::lanczos4_weights(t);
            assert_relative_eq!(weights.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn lanczos4_weights_peak_at_center_tap() {
        let weights = super::lanczos4_weights(0.0);
        assert_relative_eq!(weights[3], 1.0, epsilon = 1e-5);
    }
}

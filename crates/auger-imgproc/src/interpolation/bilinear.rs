/// Weights of the two taps `x0` and `x0 + 1` for a fractional offset `t` in `[0, 1)`.
#[inline]
pub(crate) fn bilinear_weights(t: f32) -> [f32; 2] {
    [1.0 - t, t]
}

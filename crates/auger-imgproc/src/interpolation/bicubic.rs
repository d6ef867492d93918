// Keys cubic convolution with a = -0.75, the common choice of image libraries.
const A: f32 = -0.75;

/// Weights of the four taps `x0 - 1 ..= x0 + 2` for a fractional offset `t` in `[0, 1)`.
#[inline]
pub(crate) fn bicubic_weights(t: f32) -> [f32; 4] {
    let w0 = ((A * (t + 1.0) - 5.0 * A) * (t + 1.0) + 8.0 * A) * (t + 1.0) - 4.0 * A;
    let w1 = ((A + 2.0) * t - (A + 3.0)) * t * t + 1.0;
    let w2 = ((A + 2.0) * (1.0 - t) - (A + 3.0)) * (1.0 - t) * (1.0 - t) + 1.0;
    let w3 = 1.0 - w0 - w1 - w2;
    [w0, w1, w2, w3]
}

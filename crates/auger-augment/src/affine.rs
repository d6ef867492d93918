use auger_image::ImageSize;
use rand::Rng;

use crate::params::AugmentParams;

/// Random draws of one affine augmentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineParams {
    /// Shear ratio.
    pub shear: f32,
    /// Rotation angle in degrees.
    pub angle: i32,
    /// Overall scale factor.
    pub scale: f32,
    /// Width over height distortion, centered on 1.
    pub ratio: f32,
}

impl Default for AffineParams {
    fn default() -> Self {
        Self {
            shear: 0.0,
            angle: 0,
            scale: 1.0,
            ratio: 1.0,
        }
    }
}

impl AffineParams {
    /// Draw the affine parameters from `rng`.
    ///
    /// The draw order is shear, angle, rotate list index, scale and ratio. The
    /// angle is always drawn even when it is overridden afterwards: a non-empty
    /// `rotate_list` replaces it and a positive `rotate` replaces both.
    pub fn sample<R: Rng + ?Sized>(params: &AugmentParams, rotate_list: &[i32], rng: &mut R) -> Self {
        let shear =
            rng.random::<f32>() * params.max_shear_ratio * 2.0 - params.max_shear_ratio;

        let max_angle = params.max_rotate_angle.max(0);
        let mut angle = rng.random_range(-max_angle..=max_angle);
        if !rotate_list.is_empty() {
            angle = rotate_list[rng.random_range(0..rotate_list.len())];
        }
        if params.rotate > 0 {
            angle = params.rotate;
        }

        let scale = rng.random::<f32>() * (params.max_random_scale - params.min_random_scale)
            + params.min_random_scale;
        let ratio = rng.random::<f32>() * params.max_aspect_ratio * 2.0
            - params.max_aspect_ratio
            + 1.0;

        Self {
            shear,
            angle,
            scale,
            ratio,
        }
    }

    /// Canvas extent `(width, height)` of the transformed image, before truncation.
    pub fn canvas_extent(&self, src: ImageSize, min_img_size: f32, max_img_size: f32) -> (f32, f32) {
        let clamp = |v: f32| min_img_size.max(max_img_size.min(v));
        (
            clamp(self.scale * src.width as f32),
            clamp(self.scale * src.height as f32),
        )
    }

    /// Size of the output canvas in whole pixels.
    pub fn canvas_size(&self, src: ImageSize, min_img_size: f32, max_img_size: f32) -> ImageSize {
        let (width, height) = self.canvas_extent(src, min_img_size, max_img_size);
        // float to int casts saturate, negative extents give an empty canvas
        ImageSize {
            width: width as usize,
            height: height as usize,
        }
    }

    /// The 2x3 matrix mapping `src` coordinates into a canvas of extent `canvas`.
    ///
    /// The linear part composes rotation, shear and the aspect ratio scales
    /// `hs = 2 * scale / (1 + ratio)` and `ws = ratio * hs`. The translation
    /// centers the transformed image in the canvas.
    pub fn matrix(&self, src: ImageSize, canvas: (f32, f32)) -> [f32; 6] {
        let angle = (self.angle as f64).to_radians();
        let (a, b) = (angle.cos() as f32, angle.sin() as f32);
        let s = self.shear;

        let hs = 2.0 * self.scale / (1.0 + self.ratio);
        let ws = self.ratio * hs;

        let m00 = hs * a - s * b * ws;
        let m01 = hs * b + s * a * ws;
        let m10 = -b * ws;
        let m11 = a * ws;

        let (w, h) = (src.width as f32, src.height as f32);
        let tx = (canvas.0 - (m00 * w + m01 * h)) / 2.0;
        let ty = (canvas.1 - (m10 * w + m11 * h)) / 2.0;

        [m00, m01, tx, m10, m11, ty]
    }
}

use super::interpolate::{fetch, BorderMode};
use auger_image::{Image, ImageDtype};

/// Kernel for the pixel area relation used when shrinking an image.
///
/// Averages the source pixels covered by the box `[x_start, x_end) x [y_start, y_end)`,
/// weighting partially covered pixels by their covered fraction.
pub(crate) fn area_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    (x_start, x_end): (f32, f32),
    (y_start, y_end): (f32, f32),
) -> [f32; C] {
    let mut pixel = [0.0; C];
    let mut total = 0.0;

    let mut y = y_start.floor();
    while y < y_end {
        let wy = (y + 1.0).min(y_end) - y.max(y_start);
        let mut x = x_start.floor();
        while x < x_end {
            let wx = (x + 1.0).min(x_end) - x.max(x_start);
            let w = wx * wy;
            if w > 0.0 {
                let tap = fetch(image, x as isize, y as isize, &BorderMode::Replicate);
                for (acc, v) in pixel.iter_mut().zip(tap.iter()) {
                    *acc += w * v;
                }
                total += w;
            }
            x += 1.0;
        }
        y += 1.0;
    }

    if total > 0.0 {
        pixel.iter_mut().for_each(|p| *p /= total);
    }

    pixel
}

#[cfg(test)]
mod tests {
    use auger_image::{Image, ImageError};

    #[test]
    fn area_average_of_block() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 2].into(), vec![0, 10, 20, 30])?;
        let [v] = super::area_interpolation(&image, (0.0, 2.0), (0.0, 2.0));
        assert_eq!(v, 15.0);

        let [half] = super::area_interpolation(&image, (0.5, 1.5), (0.0, 1.0));
        assert_eq!(half, 5.0);
        Ok(())
    }
}

use image::{Rgba, RgbaImage};

const KAISER_ALPHA: f64 = 0.25;

/// Zeroth order modified Bessel function of the first kind, summed until the
/// series stops changing.
pub fn bessel_order_zero(x: f64) -> f64 {
    let mut r = 1.0;
    let mut t = 1.0;
    let mut k = 1u32;
    loop {
        let factor = x / f64::from(k);
        t *= 0.25 * factor * factor;
        let val = t + r;
        if val == r {
            break;
        }
        r = val;
        k += 1;
    }
    r
}

/// Kaiser-Bessel window on `[-1, 1]`; inputs outside are clamped.
pub fn window_kaiser_bessel(x: f64) -> f64 {
    let x = x.clamp(-1.0, 1.0);
    bessel_order_zero(KAISER_ALPHA * (1.0 - x * x).sqrt()) / bessel_order_zero(KAISER_ALPHA)
}

/// Point-samples `src` at even offsets into a `size`x`size` image and weights
/// each sample by the separable window `K(x/size - 0.5) * K(y/size - 0.5)`.
///
/// Fully transparent samples leave the destination at `[0, 0, 0, 0]`. Color is
/// scaled by the weight without regard to coverage.
pub fn downsample_kaiser(src: &RgbaImage, size: u32) -> RgbaImage {
    let (sw, sh) = src.dimensions();
    let inv = 1.0 / f64::from(size);
    let col_weights: Vec<f64> = (0..size)
        .map(|x| window_kaiser_bessel(f64::from(x) * inv - 0.5))
        .collect();

    let mut dst = RgbaImage::new(size, size);
    for (x, y, px) in dst.enumerate_pixels_mut() {
        let sx = (2 * x).min(sw.saturating_sub(1));
        let sy = (2 * y).min(sh.saturating_sub(1));
        let [r, g, b, a] = src.get_pixel(sx, sy).0;
        if a == 0 {
            continue;
        }
        let w = col_weights[x as usize] * window_kaiser_bessel(f64::from(y) * inv - 0.5);
        // `as u8` truncates toward zero
        *px = Rgba([(f64::from(r) * w) as u8, (f64::from(g) * w) as u8, (f64::from(b) * w) as u8, (f64::from(a) / 255.0 * w * 255.0) as u8]);
    }
    dst
}

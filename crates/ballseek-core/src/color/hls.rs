use crate::consts::ACHROMATIC_EPSILON;

/// A pixel in the 8-bit HLS scale: `h` is degrees / 2 (0..180),
/// `l` and `s` span 0..255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hls {
    pub h: u8,
    pub l: u8,
    pub s: u8,
}

/// Convert an RGB pixel to 8-bit HLS.
///
/// Hue comes from the dominant channel and wraps into [0, 360) degrees before
/// halving. Achromatic pixels (max == min) get hue and saturation 0.
/// Quantization rounds half to even.
pub fn rgb_to_hls(rgb: [u8; 3]) -> Hls {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;

    let vmax = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let diff = vmax - vmin;
    let l = (vmax + vmin) * 0.5;

    let (mut h, s) = if diff > ACHROMATIC_EPSILON {
        let s = if l < 0.5 {
            diff / (vmax + vmin)
        } else {
            diff / (2.0 - vmax - vmin)
        };
        let scale = 60.0 / diff;
        let h = if vmax == r {
            (g - b) * scale
        } else if vmax == g {
            (b - r) * scale + 120.0
        } else {
            (r - g) * scale + 240.0
        };
        (h, s)
    } else {
        (0.0, 0.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    Hls {
        h: quantize(h * 0.5),
        l: quantize(l * 255.0),
        s: quantize(s * 255.0),
    }
}

fn quantize(v: f32) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

//! Display colors and HSV hue cycling
//!
//! Asteroids carry a hue that drifts every tick; the tint is re-derived from
//! it so colors shimmer while they fall.

/// RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub const fn from_array(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Wrap any real hue into [0, 1)
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if h >= 1.0 { 0.0 } else { h }
}

/// Convert HSV (all in [0, 1], hue may be any real) to RGB
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color3 {
    if saturation <= 0.0 {
        return Color3::gray(value);
    }

    let hf = wrap_hue(hue) * 6.0;
    let sector = hf.floor();
    let f = hf - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match sector as u32 % 6 {
        0 => Color3::new(value, t, p),
        1 => Color3::new(q, value, p),
        2 => Color3::new(p, value, t),
        3 => Color3::new(p, q, value),
        4 => Color3::new(t, p, value),
        _ => Color3::new(value, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: Color3, b: Color3) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
    }

    #[test]
    fn test_primary_hues() {
        assert!(approx(hsv_to_rgb(0.0, 1.0, 1.0), Color3::new(1.0, 0.0, 0.0)));
        assert!(approx(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Color3::new(0.0, 1.0, 0.0)));
        assert!(approx(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Color3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(0.37, 0.0, 0.6), Color3::gray(0.6));
        assert_eq!(hsv_to_rgb(0.37, -2.0, 0.25), Color3::gray(0.25));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(approx(hsv_to_rgb(1.25, 0.9, 0.95), hsv_to_rgb(0.25, 0.9, 0.95)));
        assert!(approx(hsv_to_rgb(-0.75, 0.9, 0.95), hsv_to_rgb(0.25, 0.9, 0.95)));
    }

    #[test]
    fn test_wrap_hue_tiny_negative() {
        let h = wrap_hue(-1e-9);
        assert!((0.0..1.0).contains(&h));
    }

    proptest! {
        #[test]
        fn prop_channels_in_unit_range(
            hue in -100.0f32..100.0,
            sat in 0.0f32..=1.0,
            val in 0.0f32..=1.0,
        ) {
            let c = hsv_to_rgb(hue, sat, val);
            for ch in c.to_array() {
                prop_assert!((0.0..=1.0 + 1e-6).contains(&ch), "channel {} out of range", ch);
            }
        }
    }
}

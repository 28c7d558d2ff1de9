use serde::Deserialize;

/// RGB color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("expected #RRGGBB, got {hex:?}"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| format!("invalid hex color {hex:?}: {e}"))
        };

        Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_u8(self) -> (u8, u8, u8) {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Component-wise linear blend.
pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
    }
}

/// Writes a sequence gradient into `colors`: entry `i` of `n` gets `lerp(a, b, i / n)`.
///
/// The gradient follows point order, not spatial position.
pub fn fill_gradient(colors: &mut [f32], a: Rgb, b: Rgb) {
    let count = colors.len() / 3;

    for (i, rgb) in colors.chunks_exact_mut(3).enumerate() {
        let c = lerp(a, b, i as f32 / count as f32);
        rgb.copy_from_slice(&c.to_array());
    }
}

/// Paints every entry with the same color.
pub fn fill_flat(colors: &mut [f32], c: Rgb) {
    let rgb = c.to_array();

    for chunk in colors.chunks_exact_mut(3) {
        chunk.copy_from_slice(&rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let pink = Rgb::from_hex("#FF0D92").unwrap();
        assert_eq!(pink.to_u8(), (0xFF, 0x0D, 0x92));

        let blue = Rgb::from_hex("0d92f4").unwrap();
        assert_eq!(blue.to_u8(), (0x0D, 0x92, 0xF4));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(1.0, 0.0, 0.5);
        let b = Rgb::new(0.0, 1.0, 0.5);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn gradient_follows_point_order() {
        let mut colors = vec![0.0; 4 * 3];
        fill_gradient(&mut colors, Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0));

        assert_eq!(&colors[0..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&colors[3..6], &[0.25, 0.25, 0.25]);
        assert_eq!(&colors[9..12], &[0.75, 0.75, 0.75]);
    }

    #[test]
    fn flat_fill_overwrites_everything() {
        let mut colors = vec![0.3; 5 * 3];
        fill_flat(&mut colors, Rgb::new(0.1, 0.2, 0.3));

        for rgb in colors.chunks_exact(3) {
            assert_eq!(rgb, &[0.1, 0.2, 0.3]);
        }
    }
}

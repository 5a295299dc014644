use std::fmt;

/// 8-bit RGB color as written to the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub const fn black() -> Color {
        Color { r: 0, g: 0, b: 0 }
    }

    pub const fn white() -> Color {
        Color {
            r: 255,
            g: 255,
            b: 255,
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// Formats as the `r g b` triple used in P3 pixel data.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_a_pixel_triple() {
        assert_eq!(Color::new(200, 0, 128).to_string(), "200 0 128");
        assert_eq!(Color::white().to_string(), "255 255 255");
    }

    #[test]
    fn array_conversions() {
        let color = Color::from([1, 2, 3]);
        assert_eq!(color, Color::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(color), [1, 2, 3]);
        assert_eq!(Color::default(), Color::black());
    }
}

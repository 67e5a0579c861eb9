use core::fmt;
use std::str::FromStr;

use crate::{
    error::Error,
    helpers::{hex_nibble, hex_pair},
    named,
};

/// An ARGB color that converts losslessly to and from the color types of
/// the `rgb`, `tiny-skia`, `image` and `palette` ecosystems.
///
/// All conversions map channel for channel; no color-space math is applied.
/// Sources without an alpha channel get a fully opaque alpha of 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha component.
    pub a: u8,
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Creates an opaque color from red, green and blue components.
    ///
    /// Wider values are narrowed to 8 bits with wraparound, matching
    /// byte-truncation semantics.
    pub const fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self {
            a: 255,
            r: red as u8,
            g: green as u8,
            b: blue as u8,
        }
    }

    /// Creates a color from alpha, red, green and blue components.
    ///
    /// Wider values are narrowed to 8 bits with wraparound.
    pub const fn argb(alpha: i32, red: i32, green: i32, blue: i32) -> Self {
        Self {
            a: alpha as u8,
            r: red as u8,
            g: green as u8,
            b: blue as u8,
        }
    }

    /// Unpacks a 32-bit ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Parses a hex color string.
    ///
    /// A leading `#` is stripped. Accepted forms are `RGB` (each nibble
    /// duplicated, so `#F80` equals `#FF8800`), `RRGGBB` (alpha 255) and
    /// `AARRGGBB`. Anything else is an [`Error::ColorParsing`].
    pub fn from_hex(code: &str) -> crate::Result<Self> {
        code.parse()
    }

    /// Resolves a CSS color name (case-insensitive), e.g. `"rebeccapurple"`.
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name)
    }

    /// Returns the same color with a replaced alpha component.
    pub const fn with_alpha(self, alpha: i32) -> Self {
        Self {
            a: alpha as u8,
            ..self
        }
    }

    /// Packs the channels into a 32-bit value as `(A<<24)|(R<<16)|(G<<8)|B`.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Perceived lightness from 0 (black) to 100 (white), where 50 is the
    /// perceptual middle grey of an 18% grey card.
    ///
    /// Computed as `round(100 * (0.299R + 0.587G + 0.114B) / 255)` with
    /// half-away-from-zero rounding.
    pub fn luminance(self) -> f64 {
        let y = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        (y * 100.0 / 255.0).round()
    }
}

/// Parses a hex color string: `RGB`, `RRGGBB` or `AARRGGBB`, with an
/// optional leading `#`.
impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim_start_matches('#');
        match code.len() {
            8 => Ok(Self {
                a: hex_pair(code, 0)?,
                r: hex_pair(code, 2)?,
                g: hex_pair(code, 4)?,
                b: hex_pair(code, 6)?,
            }),
            6 => Ok(Self {
                a: 255,
                r: hex_pair(code, 0)?,
                g: hex_pair(code, 2)?,
                b: hex_pair(code, 4)?,
            }),
            3 => Ok(Self {
                a: 255,
                r: hex_nibble(code, 0)?,
                g: hex_nibble(code, 1)?,
                b: hex_nibble(code, 2)?,
            }),
            _ => Err(Error::ColorParsing(String::from(s))),
        }
    }
}

/// Formats the color as `#` followed by the unpadded upper-hex digits of
/// A, R, G and B, in that order.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:X}{:X}{:X}{:X}", self.a, self.r, self.g, self.b)
    }
}

impl From<rgb::RGB8> for Color {
    fn from(c: rgb::RGB8) -> Self {
        Self::rgb(c.r.into(), c.g.into(), c.b.into())
    }
}

impl From<Color> for rgb::RGB8 {
    fn from(c: Color) -> Self {
        rgb::RGB8 {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

impl From<rgb::RGBA8> for Color {
    fn from(c: rgb::RGBA8) -> Self {
        Self {
            a: c.a,
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

impl From<Color> for rgb::RGBA8 {
    fn from(c: Color) -> Self {
        rgb::RGBA8 {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<tiny_skia::ColorU8> for Color {
    fn from(c: tiny_skia::ColorU8) -> Self {
        Self {
            a: c.alpha(),
            r: c.red(),
            g: c.green(),
            b: c.blue(),
        }
    }
}

impl From<Color> for tiny_skia::ColorU8 {
    fn from(c: Color) -> Self {
        tiny_skia::ColorU8::from_rgba(c.r, c.g, c.b, c.a)
    }
}

impl From<tiny_skia::Color> for Color {
    fn from(c: tiny_skia::Color) -> Self {
        c.to_color_u8().into()
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(c: Color) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(c: image::Rgb<u8>) -> Self {
        Self {
            a: 255,
            r: c.0[0],
            g: c.0[1],
            b: c.0[2],
        }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(c: image::Rgba<u8>) -> Self {
        Self {
            a: c.0[3],
            r: c.0[0],
            g: c.0[1],
            b: c.0[2],
        }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

// 16-bit channels pass bytes through unchanged: values widen on the way
// out and keep the low byte on the way back, so round-trips are exact.
impl From<image::Rgb<u16>> for Color {
    fn from(c: image::Rgb<u16>) -> Self {
        Self {
            a: 255,
            r: c.0[0] as u8,
            g: c.0[1] as u8,
            b: c.0[2] as u8,
        }
    }
}

impl From<Color> for image::Rgb<u16> {
    fn from(c: Color) -> Self {
        image::Rgb([u16::from(c.r), u16::from(c.g), u16::from(c.b)])
    }
}

impl From<image::Rgba<u16>> for Color {
    fn from(c: image::Rgba<u16>) -> Self {
        Self {
            a: c.0[3] as u8,
            r: c.0[0] as u8,
            g: c.0[1] as u8,
            b: c.0[2] as u8,
        }
    }
}

impl From<Color> for image::Rgba<u16> {
    fn from(c: Color) -> Self {
        image::Rgba([
            u16::from(c.r),
            u16::from(c.g),
            u16::from(c.b),
            u16::from(c.a),
        ])
    }
}

impl From<palette::Srgb<u8>> for Color {
    fn from(c: palette::Srgb<u8>) -> Self {
        Self {
            a: 255,
            r: c.red,
            g: c.green,
            b: c.blue,
        }
    }
}

impl From<Color> for palette::Srgb<u8> {
    fn from(c: Color) -> Self {
        palette::Srgb::new(c.r, c.g, c.b)
    }
}

impl From<palette::Srgba<u8>> for Color {
    fn from(c: palette::Srgba<u8>) -> Self {
        Self {
            a: c.alpha,
            r: c.red,
            g: c.green,
            b: c.blue,
        }
    }
}

impl From<Color> for palette::Srgba<u8> {
    fn from(c: Color) -> Self {
        palette::Srgba::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_long_form_with_implicit_alpha() {
        let c: Color = "#1A2B3C".parse().unwrap();
        assert_eq!(c, Color::argb(255, 0x1A, 0x2B, 0x3C));
        assert_eq!(c.to_string(), "#FF1A2B3C");
        // case-insensitive
        assert_eq!("#1a2b3c".parse::<Color>().unwrap(), c);
    }

    #[test]
    fn parses_eight_digit_form() {
        let c: Color = "80FF0000".parse().unwrap();
        assert_eq!(c, Color::argb(0x80, 0xFF, 0, 0));
    }

    #[test]
    fn short_form_duplicates_nibbles() {
        assert_eq!(
            "#FFF".parse::<Color>().unwrap(),
            "#FFFFFF".parse::<Color>().unwrap()
        );
        assert_eq!(
            "#F80".parse::<Color>().unwrap(),
            Color::rgb(0xFF, 0x88, 0x00)
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        for code in ["#F", "#FF", "#FFFF", "#FFFFF", "#FFFFFFF", "#FFFFFFFFF", ""] {
            let got = code.parse::<Color>();
            assert_eq!(
                got,
                Err(Error::ColorParsing(String::from(code))),
                "{:?} should not parse",
                code
            );
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#12345G".parse::<Color>().is_err());
        assert!("#ЖЖЖ".parse::<Color>().is_err());
    }

    #[test]
    fn integer_constructors_wrap() {
        assert_eq!(Color::rgb(256, 257, -1), Color::rgb(0, 1, 255));
        assert_eq!(Color::argb(300, 0, 0, 0).a, 44);
    }

    #[test]
    fn argb_packing() {
        assert_eq!(Color::argb(0, 0, 0, 0).to_argb(), 0);
        assert_eq!(Color::argb(255, 255, 255, 255).to_argb(), 0xFFFF_FFFF);
        let c = Color::argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x1234_5678);
        assert_eq!(Color::from_argb(0x1234_5678), c);
    }

    #[test]
    fn from_argb_extracts_all_channels() {
        // plain bit extraction: small values land in the blue channel
        // and a zero alpha channel stays zero
        assert_eq!(Color::from_argb(0x12), Color::argb(0, 0, 0, 0x12));
        assert_eq!(Color::from_argb(0x0012_3456), Color::argb(0, 0x12, 0x34, 0x56));
        assert_eq!(Color::from_argb(Color::argb(0, 1, 2, 3).to_argb()), Color::argb(0, 1, 2, 3));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::rgb(10, 20, 30).with_alpha(0x80);
        assert_eq!(c, Color::argb(0x80, 10, 20, 30));
    }

    #[test]
    fn display_does_not_pad() {
        // single-digit bytes render with one hex digit, like the original
        assert_eq!(Color::argb(255, 1, 2, 3).to_string(), "#FF123");
    }

    #[test]
    fn luminance_endpoints() {
        assert_eq!(Color::rgb(255, 255, 255).luminance(), 100.0);
        assert_eq!(Color::rgb(0, 0, 0).luminance(), 0.0);
        // 0.299 + 0.587 + 0.114 = 1, so a flat grey keeps its level
        assert_eq!(Color::rgb(128, 128, 128).luminance(), 50.0);
    }

    #[test]
    fn rgb_crate_round_trip() {
        let c = Color::argb(9, 10, 11, 12);
        assert_eq!(Color::from(rgb::RGBA8::from(c)), c);
        let opaque = Color::rgb(10, 11, 12);
        assert_eq!(Color::from(rgb::RGB8::from(opaque)), opaque);
    }

    #[test]
    fn tiny_skia_round_trip() {
        let c = Color::argb(9, 10, 11, 12);
        assert_eq!(Color::from(tiny_skia::ColorU8::from(c)), c);
        assert_eq!(Color::from(tiny_skia::Color::from(c)), c);
    }

    #[test]
    fn image_round_trip() {
        let c = Color::argb(9, 10, 11, 12);
        assert_eq!(Color::from(image::Rgba::<u8>::from(c)), c);
        assert_eq!(Color::from(image::Rgba::<u16>::from(c)), c);
        let opaque = Color::rgb(10, 11, 12);
        assert_eq!(Color::from(image::Rgb::<u8>::from(opaque)), opaque);
        assert_eq!(Color::from(image::Rgb::<u16>::from(opaque)), opaque);
    }

    #[test]
    fn wide_image_channels_keep_low_byte() {
        let c = Color::from(image::Rgb([0x01FF_u16, 0x0002, 0x0103]));
        assert_eq!(c, Color::rgb(0xFF, 0x02, 0x03));
    }

    #[test]
    fn palette_round_trip() {
        let c = Color::argb(9, 10, 11, 12);
        assert_eq!(Color::from(palette::Srgba::<u8>::from(c)), c);
        let opaque = Color::rgb(10, 11, 12);
        assert_eq!(Color::from(palette::Srgb::<u8>::from(opaque)), opaque);
    }

    #[test]
    fn alpha_defaults_to_opaque_for_rgb_sources() {
        assert_eq!(Color::from(rgb::RGB8 { r: 1, g: 2, b: 3 }).a, 255);
        assert_eq!(Color::from(image::Rgb([1u8, 2, 3])).a, 255);
        assert_eq!(Color::from(palette::Srgb::new(1u8, 2, 3)).a, 255);
    }
}

//! The six cube colors and the exact-match quantizer that maps raw pixels onto them.
//!
//! Only five exact channel combinations are recognized. Every other pixel,
//! including anti-aliased edges and transparent areas, becomes orange.

use std::fmt::Display;

use crate::{color::RGBAColorFormat, error::Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaletteLabel {
    White = 0,
    Red = 1,
    Blue = 2,
    Green = 3,
    Yellow = 4,
    Orange = 5,
}

impl PaletteLabel {
    pub const ALL: [PaletteLabel; 6] = [
        PaletteLabel::White,
        PaletteLabel::Red,
        PaletteLabel::Blue,
        PaletteLabel::Green,
        PaletteLabel::Yellow,
        PaletteLabel::Orange,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Single uppercase letter used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            PaletteLabel::White => 'W',
            PaletteLabel::Red => 'R',
            PaletteLabel::Blue => 'B',
            PaletteLabel::Green => 'G',
            PaletteLabel::Yellow => 'Y',
            PaletteLabel::Orange => 'O',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteLabel::White => "white",
            PaletteLabel::Red => "red",
            PaletteLabel::Blue => "blue",
            PaletteLabel::Green => "green",
            PaletteLabel::Yellow => "yellow",
            PaletteLabel::Orange => "orange",
        }
    }
}

impl TryFrom<u8> for PaletteLabel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PaletteLabel::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidPaletteCode(value))
    }
}

impl Display for PaletteLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&RGBAColorFormat> for PaletteLabel {
    fn from(value: &RGBAColorFormat) -> Self {
        quantize(value)
    }
}

/// Maps a pixel onto the cube palette. The match arms are checked in order and
/// alpha is ignored.
pub fn quantize(pixel: &RGBAColorFormat) -> PaletteLabel {
    match pixel.rgb() {
        (255, 255, 255) => PaletteLabel::White,
        (255, 0, 0) => PaletteLabel::Red,
        (0, 0, 255) => PaletteLabel::Blue,
        (0, 255, 0) => PaletteLabel::Green,
        (255, 255, 0) => PaletteLabel::Yellow,
        _ => PaletteLabel::Orange,
    }
}

#[cfg(test)]
mod test {
    use super::{quantize, PaletteLabel};
    use crate::{color::RGBAColorFormat, error::Error};

    #[test]
    fn quantize_exact_matches() {
        let cases: [((u8, u8, u8), PaletteLabel); 5] = [
            ((255, 255, 255), PaletteLabel::White),
            ((255, 0, 0), PaletteLabel::Red),
            ((0, 0, 255), PaletteLabel::Blue),
            ((0, 255, 0), PaletteLabel::Green),
            ((255, 255, 0), PaletteLabel::Yellow),
        ];
        for (rgb, expected) in cases {
            let label = quantize(&RGBAColorFormat::from(rgb));
            assert_eq!(label, expected, "{:?} quantized wrongly", rgb);
        }
    }

    #[test]
    fn quantize_falls_back_to_orange() {
        let near_misses: [(u8, u8, u8); 5] = [
            (10, 10, 10),
            (0, 0, 0),
            (254, 255, 255),
            (255, 128, 0),
            (0, 255, 255),
        ];
        for rgb in near_misses {
            assert_eq!(
                quantize(&RGBAColorFormat::from(rgb)),
                PaletteLabel::Orange,
                "{:?} should fall back to orange",
                rgb
            );
        }
    }

    #[test]
    fn quantize_ignores_alpha() {
        assert_eq!(
            quantize(&RGBAColorFormat::new(255, 0, 0, 0)),
            PaletteLabel::Red
        );
        assert_eq!(
            quantize(&RGBAColorFormat::new(0, 0, 0, 0)),
            PaletteLabel::Orange
        );
    }

    #[test]
    fn quantize_is_total_over_all_colors() {
        let mut counts = [0_usize; 6];
        for red in 0..=u8::MAX {
            for green in 0..=u8::MAX {
                for blue in 0..=u8::MAX {
                    let label = quantize(&RGBAColorFormat::opaque(red, green, blue));
                    counts[label.code() as usize] += 1;
                }
            }
        }
        assert_eq!(&counts[..5], &[1, 1, 1, 1, 1]);
        assert_eq!(counts[5], 256 * 256 * 256 - 5);
    }

    #[test]
    fn palette_codes_round_trip() {
        for label in PaletteLabel::ALL {
            assert_eq!(PaletteLabel::try_from(label.code()).unwrap(), label);
        }
        assert_eq!(PaletteLabel::White.code(), 0);
        assert_eq!(PaletteLabel::Orange.code(), 5);
    }

    #[test]
    fn reject_unknown_palette_code() {
        if let Err(Error::InvalidPaletteCode(code)) = PaletteLabel::try_from(6) {
            assert_eq!(code, 6);
            return;
        }
        panic!("Unknown palette code was not rejected");
    }
}

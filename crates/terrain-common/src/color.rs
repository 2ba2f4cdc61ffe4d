//! 24-bit RGB colours and exact HSV conversion.

use std::fmt;

use num_traits::{Signed, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{ContourError, ContourResult};
use crate::exact::{self, Rational};

/// A 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_rgb24(rgb: u32) -> ContourResult<Self> {
        if rgb > 0xff_ffff {
            return Err(ContourError::invalid_range(
                format!("{:#08x}", rgb),
                "0x000000",
                "0xffffff",
            ));
        }
        Ok(Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    }

    pub fn to_rgb24(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Six lowercase hex digits, without a leading `#`.
    pub fn to_hex(&self) -> String {
        format!("{:06x}", self.to_rgb24())
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// Map a unit value in `[0, 1]` to a byte with `round(u * 255)`.
    pub fn unit_to_byte(u: &Rational) -> ContourResult<u8> {
        exact::ensure_unit(u)?;
        let scaled = (u * Rational::from_integer(255.into())).round();
        let byte = exact::to_integer(&scaled)?;
        byte.to_u8()
            .ok_or_else(|| ContourError::invalid_range(&byte, 0, 255))
    }

    /// Build from three unit channel values.
    pub fn from_units(r: &Rational, g: &Rational, b: &Rational) -> ContourResult<Self> {
        Ok(Self::rgb(
            Self::unit_to_byte(r)?,
            Self::unit_to_byte(g)?,
            Self::unit_to_byte(b)?,
        ))
    }

    /// Convert an HSV triple to RGB.
    ///
    /// Hue is in whole degrees `[0, 360]` (360 is the same as 0), saturation
    /// and value in percent `[0, 100]`. The arithmetic is exact up to the
    /// final rounding of each channel.
    pub fn hsv(hue: u32, saturation: u32, value: u32) -> ContourResult<Self> {
        if hue > 360 {
            return Err(ContourError::invalid_range(hue, 0, 360));
        }
        if saturation > 100 {
            return Err(ContourError::invalid_range(saturation, 0, 100));
        }
        if value > 100 {
            return Err(ContourError::invalid_range(value, 0, 100));
        }

        let hue = hue % 360;
        let s = exact::rational(i64::from(saturation), 100)?;
        let v = exact::rational(i64::from(value), 100)?;
        let one = exact::rational(1, 1)?;
        let zero = exact::rational(0, 1)?;

        let chroma = &v * &s;
        // hpart mod 2 == (hue mod 120) / 60
        let hpart_mod_2 = exact::rational(i64::from(hue % 120), 60)?;
        let x = (&one - (&hpart_mod_2 - &one).abs()) * &chroma;
        let m = &v - &chroma;

        let (r, g, b) = match hue / 60 {
            0 => (chroma, x, zero),
            1 => (x, chroma, zero),
            2 => (zero, chroma, x),
            3 => (zero, x, chroma),
            4 => (x, zero, chroma),
            _ => (chroma, zero, x),
        };

        Self::from_units(&(r + &m), &(g + &m), &(b + &m))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb24_round_trip_and_range() {
        let c = Color::from_rgb24(0x604040).unwrap();
        assert_eq!(c, Color::rgb(0x60, 0x40, 0x40));
        assert_eq!(c.to_hex(), "604040");
        assert!(Color::from_rgb24(0x100_0000).is_err());
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#305030"), Some(Color::rgb(0x30, 0x50, 0x30)));
        assert_eq!(Color::from_hex("30503"), None);
        assert_eq!(Color::from_hex("zz5030"), None);
    }

    #[test]
    fn test_unit_to_byte() {
        assert_eq!(Color::unit_to_byte(&exact::rational(0, 1).unwrap()).unwrap(), 0);
        assert_eq!(Color::unit_to_byte(&exact::rational(1, 1).unwrap()).unwrap(), 255);
        assert_eq!(Color::unit_to_byte(&exact::rational(1, 2).unwrap()).unwrap(), 128);
        assert!(matches!(
            Color::unit_to_byte(&exact::rational(3, 2).unwrap()),
            Err(ContourError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_hsv_sectors() {
        assert_eq!(Color::hsv(240, 20, 50).unwrap(), Color::rgb(102, 102, 128));
        assert_eq!(Color::hsv(140, 20, 50).unwrap(), Color::rgb(102, 128, 111));
        assert_eq!(Color::hsv(40, 20, 50).unwrap(), Color::rgb(128, 111, 102));
        assert_eq!(Color::hsv(0, 20, 50).unwrap(), Color::rgb(128, 102, 102));
    }

    #[test]
    fn test_hsv_full_circle_wraps() {
        assert_eq!(Color::hsv(360, 20, 50).unwrap(), Color::hsv(0, 20, 50).unwrap());
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Color::hsv(0, 100, 100).unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::hsv(120, 100, 100).unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::hsv(240, 100, 100).unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::hsv(0, 0, 100).unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_hsv_rejects_out_of_range() {
        assert!(Color::hsv(361, 20, 50).is_err());
        assert!(Color::hsv(0, 101, 50).is_err());
        assert!(Color::hsv(0, 20, 101).is_err());
    }
}

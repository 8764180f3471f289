use std::{
    fmt::{self, Display},
    num::ParseIntError,
    ops::Index,
    str::FromStr,
};
use thiserror::Error;

/// sRGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color([f64; 3]);

impl Color {
    pub const WHITE: Self = Self([1., 1., 1.]);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from([r, g, b])
    }
}

impl Index<usize> for Color {
    type Output = f64;
    fn index(&'_ self, i: usize) -> &'_ Self::Output {
        &self.0[i]
    }
}

impl From<[u8; 3]> for Color {
    fn from(color: [u8; 3]) -> Self {
        Self(color.map(|c| c as f64 / 255.))
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [
            (c[0] * 255.).round() as u8,
            (c[1] * 255.).round() as u8,
            (c[2] * 255.).round() as u8,
        ]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b]: [u8; 3] = (*self).into();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("{0}")]
    Int(#[from] ParseIntError),
    #[error("unexpected length {0}, should be 3 or 6")]
    Length(usize),
    #[error("color should be preceded by a pound symbol")]
    MissingPound,
    #[error("'{0}' contains characters that are not hex digits")]
    NotHex(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = input.strip_prefix('#') {
            // from_str_radix would take a leading sign as part of the number
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorParseError::NotHex(hex.to_owned()));
            }
            let parsed = u32::from_str_radix(hex, 16)?;
            let mut res = [0.; 3];
            match hex.len() {
                3 => {
                    for (i, res_i) in res.iter_mut().enumerate() {
                        // Hex shorthand: 0xFFF is 1.0, 1.0, 1.0
                        let digit = (parsed >> (8 - 4 * i) & 0xF) as u8;
                        *res_i = (digit << 4 | digit) as f64 / 255.;
                    }
                }
                6 => {
                    for (i, res_i) in res.iter_mut().enumerate() {
                        *res_i = ((parsed >> (16 - 8 * i) & 0xFF) as u8) as f64 / 255.;
                    }
                }
                other => return Err(ColorParseError::Length(other)),
            }
            Ok(Self(res))
        } else {
            Err(ColorParseError::MissingPound)
        }
    }
}

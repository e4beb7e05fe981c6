use std::fmt;
use std::str::FromStr;

use crate::foundation::error::RevealError;

/// Opaque sRGB color written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Construct from channel bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, RevealError> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| RevealError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if s.len() != 6 || !s.is_ascii() {
            return Err(RevealError::validation(
                "hex color must be #RRGGBB (case-insensitive)",
            ));
        }
        Ok(Self::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Colors of the caption's two-tone reveal gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionPalette {
    /// Color above the gradient band (matches the mask overlay fill).
    pub ink: HexColor,
    /// Color below the gradient band.
    pub accent: HexColor,
}

impl Default for CaptionPalette {
    fn default() -> Self {
        Self {
            ink: HexColor::rgb(0x11, 0x11, 0x17),
            accent: HexColor::rgb(0xe6, 0x64, 0x61),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/palette.rs"]
mod tests;

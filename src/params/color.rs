//! RGB colors and the three color slots of the particle shader.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing hex color strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Linear RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_u32(packed: u32) -> Self {
        let channel = |shift: u32| ((packed >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::Length(hex.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Digits(hex.to_string()))?;
        Ok(Self::from_u32(packed))
    }

    /// Format as `#rrggbb`
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Padded to a vec4 for uniform buffers
    pub fn to_vec4(&self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Which of the three shader colors a write targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Ambient,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 3] = [ColorSlot::Primary, ColorSlot::Secondary, ColorSlot::Ambient];
}

/// Particle color scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorParameters {
    /// Color of particles in wave troughs
    pub primary: Rgb,

    /// Color of particles on wave crests
    pub secondary: Rgb,

    /// Flat light added to every particle (scaled by 0.5 in the shader)
    pub ambient: Rgb,
}

impl Default for ColorParameters {
    fn default() -> Self {
        Self {
            primary: Rgb::from_u32(0xffdbb8),
            secondary: Rgb::from_u32(0xffae00),
            ambient: Rgb::from_u32(0x777777),
        }
    }
}

impl ColorParameters {
    pub fn get(&self, slot: ColorSlot) -> Rgb {
        match slot {
            ColorSlot::Primary => self.primary,
            ColorSlot::Secondary => self.secondary,
            ColorSlot::Ambient => self.ambient,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, color: Rgb) {
        match slot {
            ColorSlot::Primary => self.primary = color,
            ColorSlot::Secondary => self.secondary = color,
            ColorSlot::Ambient => self.ambient = color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        let a = Rgb::from_hex("#ffae00").unwrap();
        let b: Rgb = "ffae00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.r, 1.0);
        assert!((a.g - 174.0 / 255.0).abs() < 1e-6);
        assert_eq!(a.b, 0.0);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(ColorParameters::default().primary.to_hex(), "#ffdbb8");
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(matches!(Rgb::from_hex("#fff"), Err(ColorParseError::Length(_))));
        assert!(matches!(Rgb::from_hex("#gggggg"), Err(ColorParseError::Digits(_))));
    }
}

//! Color names and hex parsing for `draw`.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::ImgtoolsError;

/// An RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a strict hex color: `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Multiply the alpha channel by `opacity` (clamped to 0..=1).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = (f32::from(self.a) * opacity.clamp(0.0, 1.0)).round();
        Self {
            a: alpha.clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl FromStr for Color {
    type Err = ImgtoolsError;

    /// Accepts a known color name (case-insensitive) or a strict hex value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NamedColor::from_name(s)
            .map(NamedColor::color)
            .or_else(|| Self::from_hex(s))
            .ok_or_else(|| ImgtoolsError::UnrecognizedColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// The closed set of color names understood by `draw --color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Brown,
    Purple,
    Lime,
    Black,
    White,
    Gray,
}

impl NamedColor {
    pub const ALL: [NamedColor; 12] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Cyan,
        NamedColor::Magenta,
        NamedColor::Brown,
        NamedColor::Purple,
        NamedColor::Lime,
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Cyan => "cyan",
            NamedColor::Magenta => "magenta",
            NamedColor::Brown => "brown",
            NamedColor::Purple => "purple",
            NamedColor::Lime => "lime",
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
        }
    }

    pub fn color(self) -> Color {
        match self {
            NamedColor::Red => Color::rgb(0xff, 0x00, 0x00),
            NamedColor::Green | NamedColor::Lime => Color::rgb(0x00, 0xff, 0x00),
            NamedColor::Blue => Color::rgb(0x00, 0x00, 0xff),
            NamedColor::Yellow => Color::rgb(0xff, 0xff, 0x00),
            NamedColor::Cyan => Color::rgb(0x00, 0xff, 0xff),
            NamedColor::Magenta => Color::rgb(0xff, 0x00, 0xff),
            NamedColor::Brown => Color::rgb(0x8b, 0x45, 0x13),
            NamedColor::Purple => Color::rgb(0x80, 0x00, 0x80),
            NamedColor::Black => Color::rgb(0x00, 0x00, 0x00),
            NamedColor::White => Color::rgb(0xff, 0xff, 0xff),
            NamedColor::Gray => Color::rgb(0x80, 0x80, 0x80),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|named| named.name().eq_ignore_ascii_case(name))
    }
}

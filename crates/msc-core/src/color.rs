//! Color handling for MSC drawing backends
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colour attributes (`linecolour`, `textbgcolour`, ...)
//! carry CSS colour strings; backends reduce them to packed 24-bit RGB values.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgb24().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use msc_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_rgb24(), 0xff0000);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create a colour from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub fn from_rgb24(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Packed `0xRRGGBB` value of this colour, alpha discarded.
    pub fn to_rgb24(self) -> u32 {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        u32::from_be_bytes([0, rgba.r, rgba.g, rgba.b])
    }

    pub fn black() -> Self {
        Self::from_rgb24(0x000000)
    }

    pub fn white() -> Self {
        Self::from_rgb24(0xffffff)
    }

    pub fn red() -> Self {
        Self::from_rgb24(0xff0000)
    }

    pub fn orange() -> Self {
        Self::from_rgb24(0xffb000)
    }

    pub fn yellow() -> Self {
        Self::from_rgb24(0xffff00)
    }

    pub fn green() -> Self {
        Self::from_rgb24(0x00ff00)
    }

    pub fn blue() -> Self {
        Self::from_rgb24(0x0000ff)
    }

    pub fn indigo() -> Self {
        Self::from_rgb24(0x440088)
    }

    pub fn violet() -> Self {
        Self::from_rgb24(0xd020ff)
    }

    pub fn grey() -> Self {
        Self::from_rgb24(0x888888)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

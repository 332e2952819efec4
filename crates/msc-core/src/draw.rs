//! Drawing-backend capability.
//!
//! The IR never draws. This module defines the surface a layout stage paints
//! through, so that layout code can be written once against [`DrawBackend`]
//! and run on any concrete output format.
//!
//! # Overview
//!
//! - [`DrawBackend`]: line, text, shape and arc primitives plus measurement
//! - [`Palette`]: a bounded colour table with a deterministic fallback,
//!   for backends whose output format limits the number of colours
//! - [`FontSize`], [`TextAnchor`], [`Point`], [`Ellipse`]: primitive arguments

use log::debug;

use crate::{color::Color, error::DrawError};

/// Maximum number of colours a [`Palette`] allocates by default.
pub const MAX_COLOURS: usize = 128;

/// A pixel position, origin at the top left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> u32 {
        self.x
    }

    pub fn y(self) -> u32 {
        self.y
    }
}

/// The ellipse an elliptical arc is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    centre: Point,
    width: u32,
    height: u32,
}

impl Ellipse {
    pub fn new(centre: Point, width: u32, height: u32) -> Self {
        Self {
            centre,
            width,
            height,
        }
    }

    pub fn centre(self) -> Point {
        self.centre
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

/// Named font sizes a backend must support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontSize {
    /// 8 point
    Tiny,
    /// 12 point, the initial size of every backend
    #[default]
    Small,
}

impl FontSize {
    /// Size in points.
    pub fn points(self) -> f32 {
        match self {
            Self::Tiny => 8.0,
            Self::Small => 12.0,
        }
    }
}

/// Which end of a text run sits on the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text ends at the anchor.
    Left,
    /// Text is centred on the anchor.
    Centre,
    /// Text starts at the anchor.
    Right,
}

/// The primitives a concrete drawing surface provides to layout.
///
/// All drawing uses the current pen (see [`set_pen`](Self::set_pen)) and the
/// current font size. Angles are in degrees, clockwise from three o'clock.
pub trait DrawBackend {
    /// Draw a solid line segment.
    fn line(&mut self, from: Point, to: Point);

    /// Draw a dashed line segment.
    fn dashed_line(&mut self, from: Point, to: Point);

    /// Draw text with its baseline at `at.y`, positioned horizontally by `anchor`.
    fn text(&mut self, at: Point, text: &str, anchor: TextAnchor);

    /// Width of `text` in pixels at the current font size.
    fn text_width(&self, text: &str) -> u32;

    /// Height of a line of text in pixels at the current font size.
    fn text_height(&self) -> u32;

    /// Fill the rectangle spanned by two opposite corners.
    fn filled_rectangle(&mut self, corner: Point, opposite: Point);

    /// Fill a triangle.
    fn filled_triangle(&mut self, vertices: [Point; 3]);

    /// Draw a solid elliptical arc from `start` to `end` degrees.
    fn arc(&mut self, ellipse: Ellipse, start: u32, end: u32);

    /// Draw a dashed elliptical arc from `start` to `end` degrees.
    fn dashed_arc(&mut self, ellipse: Ellipse, start: u32, end: u32);

    /// Select the pen colour for subsequent primitives.
    fn set_pen(&mut self, color: Color);

    /// Select the font size for subsequent text.
    fn set_font_size(&mut self, size: FontSize);

    /// Flush output and release backend resources.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError`] if the output cannot be written.
    fn close(self: Box<Self>) -> Result<(), DrawError>;
}

/// Reference to an allocated [`Palette`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PenRef(usize);

impl PenRef {
    /// Slot index in the palette.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A bounded colour table.
///
/// White and black are allocated first. Once the table is full, any colour
/// not already present maps to the black slot.
#[derive(Debug, Clone)]
pub struct Palette {
    colours: Vec<u32>,
    capacity: usize,
    black: PenRef,
}

impl Palette {
    /// Create a palette holding up to [`MAX_COLOURS`] colours.
    pub fn new() -> Self {
        Self::with_capacity(MAX_COLOURS)
    }

    /// Create a palette holding up to `capacity` colours.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is below 2, the room needed for white and black.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity >= 2, "palette needs room for white and black");

        let mut colours = Vec::with_capacity(capacity);
        colours.push(Color::white().to_rgb24());
        colours.push(Color::black().to_rgb24());
        Self {
            colours,
            capacity,
            black: PenRef(1),
        }
    }

    /// Slot for `color`, allocating one if the colour is new and space remains.
    pub fn pen_for(&mut self, color: Color) -> PenRef {
        let rgb = color.to_rgb24();
        if let Some(index) = self.colours.iter().position(|c| *c == rgb) {
            return PenRef(index);
        }

        if self.colours.len() < self.capacity {
            self.colours.push(rgb);
            return PenRef(self.colours.len() - 1);
        }

        debug!(rgb, capacity = self.capacity; "Palette full, using black");
        self.black
    }

    /// Packed RGB value stored in `pen`'s slot.
    pub fn rgb(&self, pen: PenRef) -> Option<u32> {
        self.colours.get(pen.0).copied()
    }

    /// Number of allocated slots.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always `false`: white and black are allocated on construction.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Returns `true` once no further colour can be allocated.
    pub fn is_full(&self) -> bool {
        self.colours.len() >= self.capacity
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

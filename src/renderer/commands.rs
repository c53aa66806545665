//! Abstract drawing primitives
//!
//! Coordinates are integer pixels in playfield space, origin top-left.

use serde::{Deserialize, Serialize};

/// RGBA colour, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    /// Translucent veil drawn over the court behind the winner banner
    pub const WINNER_MASK: Color = Color::rgba(100, 100, 100, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Which font a piece of text is set in. The host maps roles to real fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontRole {
    Title,
    Menu,
    Score,
    Winner,
}

impl FontRole {
    pub fn family(&self) -> &'static str {
        match self {
            FontRole::Score => "Fixed Width",
            FontRole::Title | FontRole::Menu | FontRole::Winner => "Verdana",
        }
    }

    /// Point size
    pub fn size(&self) -> u32 {
        match self {
            FontRole::Title => 60,
            FontRole::Menu => 10,
            FontRole::Score => 80,
            FontRole::Winner => 18,
        }
    }

    pub fn bold(&self) -> bool {
        true
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Dashed stroke, `dash` pixels on then `dash` pixels off
    DashedLine {
        from: (i32, i32),
        to: (i32, i32),
        width: f32,
        dash: f32,
        color: Color,
    },
    /// Text anchored at its baseline-left corner
    Text {
        text: String,
        x: i32,
        y: i32,
        font: FontRole,
        color: Color,
    },
}

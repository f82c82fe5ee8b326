use egui::Color32;
use serde::{Deserialize, Serialize};

/// Smallest selectable pen size, in surface pixels.
pub const MIN_PEN_SIZE: u32 = 1;
/// Largest selectable pen size, in surface pixels.
pub const MAX_PEN_SIZE: u32 = 50;

/// Footprint of the pen tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenShape {
    Round,
    Square,
}

/// The closed set of paint colors offered by the UI.
///
/// Each color has two forms: an RGB triple for direct pixel writes and a
/// `Color32` for the antialiased stroke renderer. Painted pixels are always
/// fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenColor {
    White,
    Black,
    Red,
    Blue,
}

impl PenColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PenColor::White => [255, 255, 255],
            PenColor::Black => [0, 0, 0],
            PenColor::Red => [255, 0, 0],
            PenColor::Blue => [0, 0, 255],
        }
    }

    pub fn color32(self) -> Color32 {
        let [r, g, b] = self.rgb();
        Color32::from_rgb(r, g, b)
    }

    pub fn label(self) -> &'static str {
        match self {
            PenColor::White => "White",
            PenColor::Black => "Black",
            PenColor::Red => "Red",
            PenColor::Blue => "Blue",
        }
    }
}

/// Pen settings supplied by the host on every pointer event.
///
/// Tools treat this as a value snapshot and never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOptions {
    pub shape: PenShape,
    pub size: u32,
    pub color: PenColor,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            shape: PenShape::Round,
            size: 5,
            color: PenColor::Black,
        }
    }
}

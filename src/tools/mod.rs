use crate::canvas::Canvas;
use crate::options::ToolOptions;

mod pixel_pen;
mod smooth_pen;

pub use pixel_pen::PixelPenTool;
pub use smooth_pen::SmoothPenTool;

/// Tool trait defines the shared contract for the two pens.
///
/// Coordinates are already in surface space (the controller applies the
/// view transform first). Tools report nothing back; their effects are
/// observable only through the canvas.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions);

    /// Handle pointer movement while the pointer is held down.
    fn on_pointer_move(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions);

    /// Handle pointer release, ending the stroke session.
    fn on_pointer_up(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions);
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum ToolType {
    SmoothPen(SmoothPenTool),
    PixelPen(PixelPenTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::SmoothPen(tool) => tool.name(),
            Self::PixelPen(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions) {
        match self {
            Self::SmoothPen(tool) => tool.on_pointer_down(canvas, x, y, options),
            Self::PixelPen(tool) => tool.on_pointer_down(canvas, x, y, options),
        }
    }

    fn on_pointer_move(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions) {
        match self {
            Self::SmoothPen(tool) => tool.on_pointer_move(canvas, x, y, options),
            Self::PixelPen(tool) => tool.on_pointer_move(canvas, x, y, options),
        }
    }

    fn on_pointer_up(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions) {
        match self {
            Self::SmoothPen(tool) => tool.on_pointer_up(canvas, x, y, options),
            Self::PixelPen(tool) => tool.on_pointer_up(canvas, x, y, options),
        }
    }
}

impl ToolType {
    pub fn is_smooth_pen(&self) -> bool {
        matches!(self, Self::SmoothPen(_))
    }

    pub fn is_pixel_pen(&self) -> bool {
        matches!(self, Self::PixelPen(_))
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::SmoothPen(SmoothPenTool::default())
    }
}

// Factory function to create a new tool of the specified type
pub fn new_tool(tool_type: &str) -> Option<ToolType> {
    match tool_type {
        "smooth" => Some(ToolType::SmoothPen(SmoothPenTool::default())),
        "pixel" => Some(ToolType::PixelPen(PixelPenTool::default())),
        _ => None,
    }
}

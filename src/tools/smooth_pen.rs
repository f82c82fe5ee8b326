use egui::pos2;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::options::{PenShape, ToolOptions};
use crate::stroke::StrokeCap;
use crate::tools::Tool;

/// The antialiased pen.
///
/// Delegates all rendering to the canvas's stroke layer, which the host
/// paints with its native path renderer. The tool itself holds no session
/// state: the path being drawn lives in the layer between events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmoothPenTool;

fn cap_for(shape: PenShape) -> StrokeCap {
    match shape {
        PenShape::Round => StrokeCap::Round,
        PenShape::Square => StrokeCap::Butt,
    }
}

impl Tool for SmoothPenTool {
    fn name(&self) -> &'static str {
        "smooth"
    }

    fn on_pointer_down(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions) {
        canvas.begin_path(
            pos2(x as f32, y as f32),
            options.color.color32(),
            options.size as f32,
            cap_for(options.shape),
        );
    }

    fn on_pointer_move(&mut self, canvas: &mut Canvas, x: i32, y: i32, _options: &ToolOptions) {
        canvas.extend_path(pos2(x as f32, y as f32));
    }

    fn on_pointer_up(&mut self, _canvas: &mut Canvas, _x: i32, _y: i32, _options: &ToolOptions) {
        // Nothing to do: the stroke layer owns the path state.
    }
}

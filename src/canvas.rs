use egui::{Color32, Pos2};

use crate::error::SurfaceError;
use crate::options::PenColor;
use crate::stroke::{MutableStroke, StrokeCap, StrokeRef};
use crate::surface::{PixelBuffer, Surface};

/// Default drawable size, matching the original 800x600 paint page.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Everything the tools draw into: the pixel raster plus the vector stroke
/// layer that the host renders with its own antialiased painter.
///
/// The pixel pen edits the raster through snapshot/commit; the smooth pen
/// builds paths in the stroke layer and never touches pixels. The host
/// composites the raster first and the strokes on top each redraw.
pub struct Canvas {
    surface: Surface,
    strokes: Vec<StrokeRef>,
    active_path: Option<MutableStroke>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let surface = Surface::new(width, height)?;
        log::debug!("created {width}x{height} canvas");
        Ok(Self {
            surface,
            strokes: Vec::new(),
            active_path: None,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Snapshot the raster for a batched edit.
    pub fn snapshot(&self) -> PixelBuffer {
        self.surface.snapshot()
    }

    /// Commit an edited raster snapshot.
    pub fn commit(&mut self, buffer: PixelBuffer) -> Result<(), SurfaceError> {
        self.surface.commit(buffer)
    }

    /// Reset the whole canvas to `color`: every pixel is refilled and all
    /// smooth strokes are dropped.
    pub fn clear(&mut self, color: PenColor) {
        log::debug!("clearing canvas to {color:?}");
        self.surface.fill(color.rgb());
        self.strokes.clear();
        self.active_path = None;
    }

    /// Begin a new smooth path at `start`.
    ///
    /// Any path still in progress is committed to the stroke layer first, so
    /// a missing pointer-up cannot lose a stroke.
    pub fn begin_path(&mut self, start: Pos2, color: Color32, thickness: f32, cap: StrokeCap) {
        if let Some(path) = self.active_path.take() {
            self.strokes.push(path.to_stroke_ref());
        }
        self.active_path = Some(MutableStroke::new(color, thickness, cap, start));
    }

    /// Extend the active path to `point`. No-op when no path is in progress.
    pub fn extend_path(&mut self, point: Pos2) {
        if let Some(path) = &mut self.active_path {
            path.add_point(point);
        }
    }

    /// Committed smooth strokes, oldest first.
    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    /// The path currently being drawn, if any.
    pub fn active_path(&self) -> Option<&MutableStroke> {
        self.active_path.as_ref()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .expect("default canvas dimensions are non-zero")
    }
}

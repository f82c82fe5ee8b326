use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::options::ToolOptions;
use crate::raster::stamp_line;
use crate::stamp::Stamp;
use crate::tools::Tool;

/// The hard-edged pen: stamps the brush footprint pixel by pixel, with
/// Bresenham lines bridging consecutive move events.
///
/// Each event batches its pixel writes as one snapshot/commit pair so the
/// surface is never observed mid-edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PixelPenTool {
    // Transient state: where the previous event landed, while a stroke
    // session is in progress.
    #[serde(skip)]
    last_pos: Option<(i32, i32)>,
    // Stamp from the previous event, reused while (shape, size) holds.
    #[serde(skip)]
    stamp: Option<Stamp>,
}

impl PixelPenTool {
    fn refresh_stamp(&mut self, options: &ToolOptions) {
        let cached = self
            .stamp
            .as_ref()
            .is_some_and(|stamp| stamp.matches(options.shape, options.size));
        if !cached {
            self.stamp = Some(Stamp::build(options.shape, options.size));
        }
    }
}

impl Tool for PixelPenTool {
    fn name(&self) -> &'static str {
        "pixel"
    }

    fn on_pointer_down(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions) {
        self.refresh_stamp(options);
        let Some(stamp) = self.stamp.as_ref() else {
            return;
        };

        let mut buffer = canvas.snapshot();
        stamp.apply(&mut buffer, x, y, options.color.rgb());
        if let Err(err) = canvas.commit(buffer) {
            log::error!("dropping pixel edit: {err}");
            return;
        }

        self.last_pos = Some((x, y));
    }

    fn on_pointer_move(&mut self, canvas: &mut Canvas, x: i32, y: i32, options: &ToolOptions) {
        let Some((last_x, last_y)) = self.last_pos else {
            return;
        };

        self.refresh_stamp(options);
        let Some(stamp) = self.stamp.as_ref() else {
            return;
        };

        let mut buffer = canvas.snapshot();
        stamp_line(&mut buffer, last_x, last_y, x, y, stamp, options.color.rgb());
        if let Err(err) = canvas.commit(buffer) {
            log::error!("dropping pixel edit: {err}");
            return;
        }

        self.last_pos = Some((x, y));
    }

    fn on_pointer_up(&mut self, _canvas: &mut Canvas, _x: i32, _y: i32, _options: &ToolOptions) {
        self.last_pos = None;
    }
}

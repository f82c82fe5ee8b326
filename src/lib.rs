#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod error;
pub mod input;
pub mod options;
pub mod raster;
pub mod stamp;
pub mod stroke;
pub mod surface;
pub mod tools;
pub mod view;

pub use app::PixelPenApp;
pub use canvas::Canvas;
pub use error::SurfaceError;
pub use input::{InputController, InputEvent, InputHandler, InputLocation, PointerMode};
pub use options::{PenColor, PenShape, ToolOptions};
pub use stamp::Stamp;
pub use stroke::{MutableStroke, Stroke, StrokeCap, StrokeRef};
pub use surface::{PixelBuffer, Surface};
pub use tools::{new_tool, PixelPenTool, SmoothPenTool, Tool, ToolType};
pub use view::{ViewTransform, WheelDirection};

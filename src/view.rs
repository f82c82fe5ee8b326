use egui::{Pos2, Vec2};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;

// One discrete wheel tick scales by a fixed factor; zoom is not
// proportional to scroll magnitude.
const ZOOM_IN_FACTOR: f32 = 1.1;
const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Direction of a wheel tick as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Wheel up, toward zooming in.
    Up,
    /// Wheel down, toward zooming out.
    Down,
}

/// The zoom/pan mapping between device pointer coordinates and surface
/// coordinates.
///
/// Zoom and pan are mutated only through [`ViewTransform::apply_zoom_delta`]
/// and [`ViewTransform::apply_pan_delta`]; everything else reads them. Both
/// reset with the session, they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    pan: Vec2,
}

impl ViewTransform {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Map a device-space point to integer surface coordinates.
    ///
    /// `viewport_origin` is where the unpanned surface's top-left corner
    /// sits in device space; the current pan shifts it from there. The
    /// result may lie outside the surface, bounds handling belongs to the
    /// pixel writes.
    pub fn to_surface_coords(&self, device: Pos2, viewport_origin: Pos2) -> (i32, i32) {
        let origin = viewport_origin + self.pan;
        let x = ((device.x - origin.x) / self.zoom).floor() as i32;
        let y = ((device.y - origin.y) / self.zoom).floor() as i32;
        (x, y)
    }

    /// Map a surface-space point back to device space. Inverse of
    /// [`ViewTransform::to_surface_coords`] up to floor truncation.
    pub fn to_device_coords(&self, surface: Pos2, viewport_origin: Pos2) -> Pos2 {
        viewport_origin + self.pan + surface.to_vec2() * self.zoom
    }

    /// Apply one wheel tick: up multiplies zoom by 1.1, down by 0.9, and
    /// the result is clamped to `[0.1, 5.0]`.
    pub fn apply_zoom_delta(&mut self, direction: WheelDirection) {
        let factor = match direction {
            WheelDirection::Up => ZOOM_IN_FACTOR,
            WheelDirection::Down => ZOOM_OUT_FACTOR,
        };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Shift the pan offset by a device-space delta. Pan is unbounded.
    pub fn apply_pan_delta(&mut self, delta: Vec2) {
        self.pan += delta;
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

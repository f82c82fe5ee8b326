use crate::options::PenShape;
use crate::surface::PixelBuffer;

/// Precomputed brush footprint: integer pixel offsets relative to a center.
///
/// Building a stamp is a pure function of `(shape, size)`, so tools keep the
/// last one around and only rebuild when the pen settings change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    shape: PenShape,
    size: u32,
    offsets: Vec<(i32, i32)>,
}

impl Stamp {
    /// Compute the footprint for a pen of the given shape and size.
    ///
    /// Round pens keep every offset within `radius` of the center, square
    /// pens keep the full grid. A size of 1 (or 0) still yields the center
    /// pixel, so every stamp paints at least something.
    pub fn build(shape: PenShape, size: u32) -> Self {
        let radius = (size / 2) as i32;
        let mut offsets = Vec::new();

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                match shape {
                    PenShape::Round => {
                        if dx * dx + dy * dy <= radius * radius {
                            offsets.push((dx, dy));
                        }
                    }
                    PenShape::Square => offsets.push((dx, dy)),
                }
            }
        }

        Self {
            shape,
            size,
            offsets,
        }
    }

    /// True if this stamp was built for the given pen settings.
    pub fn matches(&self, shape: PenShape, size: u32) -> bool {
        self.shape == shape && self.size == size
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Press the stamp into the buffer centered at `(x, y)`.
    ///
    /// Offsets falling outside the buffer clip silently.
    pub fn apply(&self, buffer: &mut PixelBuffer, x: i32, y: i32, rgb: [u8; 3]) {
        for &(dx, dy) in &self.offsets {
            buffer.set_pixel(x + dx, y + dy, rgb);
        }
    }
}

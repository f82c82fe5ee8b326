use crate::stamp::Stamp;
use crate::surface::PixelBuffer;

/// Walk the integer grid line from `(x0, y0)` to `(x1, y1)` with Bresenham's
/// algorithm, pressing `stamp` into the buffer at every visited cell.
///
/// Both endpoints receive a full stamp application. The walk is 8-connected
/// and never skips a cell for any slope, which matters here because stamped
/// pixels have no antialiasing to hide gaps.
pub fn stamp_line(
    buffer: &mut PixelBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    stamp: &Stamp,
    rgb: [u8; 3],
) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        stamp.apply(buffer, x, y, rgb);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

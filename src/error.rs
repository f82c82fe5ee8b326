use thiserror::Error;

/// Errors that can occur when creating a pixel surface or committing a
/// snapshot back to it.
///
/// Out-of-bounds pixel writes are deliberately *not* represented here:
/// drawing near the surface edge clips silently instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("surface dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("pixel buffer is {buffer_width}x{buffer_height} but the surface is {surface_width}x{surface_height}")]
    DimensionMismatch {
        buffer_width: u32,
        buffer_height: u32,
        surface_width: u32,
        surface_height: u32,
    },
}

//! Constants for board dimensions, rendering, and scan directions.
//!
//! The board is a fixed 6x6 grid addressed by `(x, y)` = `(column, row)`,
//! both 0-indexed from the top-left corner.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 6;

// =============================================================================
// Rendering
// =============================================================================

/// Width (and height) of the drawing surface in pixels.
pub const CANVAS_WIDTH: u32 = 300;

/// Default grid pitch: the side of one cell in pixels.
pub const DEFAULT_PITCH: u32 = CANVAS_WIDTH / N as u32;

/// Background fill of the drawing surface.
pub const BACKGROUND: &str = "green";

// =============================================================================
// Scan Directions
// =============================================================================

/// The 8 compass unit vectors `(dx, dy)` used for bracketing scans.
///
/// The order is fixed: captured runs and flip frames are always emitted in
/// this order, which makes animation reproducible.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

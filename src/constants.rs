//! Shared crate-wide constants.

/// Thickness, in cells, of a window border on every side.
pub const BORDER_THICKNESS: u16 = 1;

/// Column offset of the first left-aligned caption button, measured from the
/// window's left edge.
pub const BUTTON_LEFT_START: i32 = 2;

/// Column offset of the first right-aligned caption button, measured from the
/// window's right edge (one past the last column).
pub const BUTTON_RIGHT_START: i32 = -3;

/// Columns between consecutive caption buttons of the same alignment. Each
/// button renders as `[g]`, three cells wide.
pub const BUTTON_SPACING: i32 = 3;

/// Smallest width a resize gesture may shrink a window to.
pub const WINDOW_MIN_WIDTH: u16 = 6;

/// Smallest height a resize gesture may shrink a window to.
pub const WINDOW_MIN_HEIGHT: u16 = 3;

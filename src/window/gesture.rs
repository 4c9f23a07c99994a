use ratatui::layout::Rect;

use crate::constants::{WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH};

/// Border region grabbed by a resize gesture. The top row belongs to the
/// title, so only the sides, the bottom and the bottom corners resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Bottom,
    BottomLeft,
    BottomRight,
}

/// Pointer position and window geometry at the start of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureStart {
    pub rect: Rect,
    pub column: u16,
    pub row: u16,
}

/// Per-window pointer gesture.
///
/// `Content` means the root captured the gesture and receives its
/// continuation until it lets go or the button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(GestureStart),
    Resizing(ResizeEdge, GestureStart),
    Content,
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

pub fn resize_edge_at(rect: Rect, column: u16, row: u16) -> Option<ResizeEdge> {
    if rect.width == 0 || rect.height == 0 {
        return None;
    }
    let right = rect.x.saturating_add(rect.width - 1);
    let bottom = rect.y.saturating_add(rect.height - 1);
    if column < rect.x || column > right || row <= rect.y || row > bottom {
        return None;
    }
    match (column == rect.x, column == right, row == bottom) {
        (true, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, true) => Some(ResizeEdge::BottomRight),
        (_, _, true) => Some(ResizeEdge::Bottom),
        (true, _, false) => Some(ResizeEdge::Left),
        (_, true, false) => Some(ResizeEdge::Right),
        _ => None,
    }
}

/// Window rect after moving the pointer from the gesture start to
/// (`column`, `row`), keeping the grab offset. The origin stops at the screen
/// edge.
pub fn apply_drag(start: GestureStart, column: u16, row: u16) -> Rect {
    let dx = column as i32 - start.column as i32;
    let dy = row as i32 - start.row as i32;
    Rect {
        x: clamp_coord(start.rect.x as i32 + dx),
        y: clamp_coord(start.rect.y as i32 + dy),
        ..start.rect
    }
}

/// Window rect after dragging `edge` from the gesture start to
/// (`column`, `row`). The opposite edges stay put and the size never drops
/// below the window minimum.
pub fn apply_resize(edge: ResizeEdge, start: GestureStart, column: u16, row: u16) -> Rect {
    let dx = column as i32 - start.column as i32;
    let dy = row as i32 - start.row as i32;
    let mut x = start.rect.x as i32;
    let mut width = start.rect.width as i32;
    let mut height = start.rect.height as i32;
    let from_left = matches!(edge, ResizeEdge::Left | ResizeEdge::BottomLeft);

    match edge {
        ResizeEdge::Left | ResizeEdge::BottomLeft => {
            x += dx;
            width -= dx;
        }
        ResizeEdge::Right | ResizeEdge::BottomRight => {
            width += dx;
        }
        ResizeEdge::Bottom => {}
    }
    if matches!(
        edge,
        ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
    ) {
        height += dy;
    }

    let min_w = WINDOW_MIN_WIDTH as i32;
    let min_h = WINDOW_MIN_HEIGHT as i32;
    if width < min_w {
        if from_left {
            x -= min_w - width;
        }
        width = min_w;
    }
    height = height.max(min_h);

    if from_left && x < 0 {
        width += x;
        x = 0;
    }

    Rect {
        x: clamp_coord(x),
        y: start.rect.y,
        width: clamp_coord(width),
        height: clamp_coord(height),
    }
}

fn clamp_coord(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn start(rect: Rect, column: u16, row: u16) -> GestureStart {
        GestureStart { rect, column, row }
    }

    #[test]
    fn edges_are_found_on_sides_and_bottom_only() {
        let r = rect(5, 5, 10, 6);
        assert_eq!(resize_edge_at(r, 5, 7), Some(ResizeEdge::Left));
        assert_eq!(resize_edge_at(r, 14, 7), Some(ResizeEdge::Right));
        assert_eq!(resize_edge_at(r, 8, 10), Some(ResizeEdge::Bottom));
        assert_eq!(resize_edge_at(r, 5, 10), Some(ResizeEdge::BottomLeft));
        assert_eq!(resize_edge_at(r, 14, 10), Some(ResizeEdge::BottomRight));
        assert_eq!(resize_edge_at(r, 8, 5), None, "title row never resizes");
        assert_eq!(resize_edge_at(r, 8, 7), None, "interior");
        assert_eq!(resize_edge_at(r, 15, 7), None, "outside");
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let s = start(rect(10, 4, 20, 8), 15, 4);
        assert_eq!(apply_drag(s, 18, 6), rect(13, 6, 20, 8));
        assert_eq!(apply_drag(s, 0, 0), rect(0, 0, 20, 8));
    }

    #[test]
    fn resize_right_and_bottom_grow() {
        let s = start(rect(2, 2, 10, 5), 11, 6);
        assert_eq!(
            apply_resize(ResizeEdge::BottomRight, s, 15, 9),
            rect(2, 2, 14, 8)
        );
    }

    #[test]
    fn resize_left_moves_origin_and_keeps_right_edge() {
        let s = start(rect(10, 2, 10, 5), 10, 4);
        assert_eq!(apply_resize(ResizeEdge::Left, s, 7, 4), rect(7, 2, 13, 5));
        // Shrinking past the minimum pins the right edge.
        let shrunk = apply_resize(ResizeEdge::Left, s, 30, 4);
        assert_eq!(shrunk.width, WINDOW_MIN_WIDTH);
        assert_eq!(shrunk.x + shrunk.width, 20);
    }

    #[test]
    fn resize_respects_minimum_height() {
        let s = start(rect(0, 0, 10, 5), 4, 4);
        let r = apply_resize(ResizeEdge::Bottom, s, 4, 0);
        assert_eq!(r.height, WINDOW_MIN_HEIGHT);
    }

    #[test]
    fn resize_left_stops_at_screen_edge() {
        let s = start(rect(3, 0, 10, 5), 3, 2);
        let r = apply_resize(ResizeEdge::Left, s, 0, 2);
        assert_eq!(r, rect(0, 0, 13, 5));
    }
}

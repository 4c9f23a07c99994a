//! UiFrame: a thin wrapper around a `ratatui` buffer that confines drawing to
//! a region.
//!
//! Windows and their content never touch the terminal buffer directly. The
//! manager hands each window a `UiFrame` clipped to the managed area, and each
//! window hands its root a frame clipped to its inner rect via
//! [`UiFrame::clipped`]. Every write path (`render_widget`, `set_string`,
//! `cell_mut`) drops whatever falls outside the frame's area, so content can
//! compute rectangles that drift past its bounds without painting over its
//! neighbours.
use ratatui::Frame;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};

/// Clipped drawing surface over a `ratatui` buffer.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a frame confined to `area` of `buffer`.
    ///
    /// The area is intersected with the buffer's own area so a frame can
    /// never address cells the buffer does not have.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        let area = area.intersection(buffer.area);
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Sub-surface whose writes are confined to `rect` (and to this frame).
    pub fn clipped(&mut self, rect: Rect) -> UiFrame<'_> {
        UiFrame {
            area: self.area.intersection(rect),
            buffer: &mut *self.buffer,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    /// Render `widget` laid out over `area`, keeping only the part inside the
    /// frame.
    ///
    /// Widgets that straddle the frame edge are rendered offscreen at their
    /// full size first so borders and alignment match an unclipped render.
    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        if clipped == area {
            widget.render(area, self.buffer);
            return;
        }
        let mut scratch = self.scratch_for(area, clipped);
        widget.render(area, &mut scratch);
        self.blit_from(&scratch, clipped);
    }

    pub fn render_stateful_widget<W>(&mut self, widget: W, area: Rect, state: &mut W::State)
    where
        W: StatefulWidget,
    {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        if clipped == area {
            widget.render(area, self.buffer, state);
            return;
        }
        let mut scratch = self.scratch_for(area, clipped);
        widget.render(area, &mut scratch, state);
        self.blit_from(&scratch, clipped);
    }

    /// Offscreen buffer covering `area`, seeded with the visible cells so
    /// widgets that leave cells untouched stay transparent after the blit.
    fn scratch_for(&self, area: Rect, visible: Rect) -> Buffer {
        let mut scratch = Buffer::empty(area);
        for y in visible.y..visible.y.saturating_add(visible.height) {
            for x in visible.x..visible.x.saturating_add(visible.width) {
                if let (Some(src), Some(dst)) = (self.buffer.cell((x, y)), scratch.cell_mut((x, y)))
                {
                    *dst = src.clone();
                }
            }
        }
        scratch
    }

    pub fn blit_from(&mut self, src: &Buffer, src_area: Rect) {
        let overlap = src_area.intersection(self.area).intersection(src.area);
        if overlap.width == 0 || overlap.height == 0 {
            return;
        }
        for y in overlap.y..overlap.y.saturating_add(overlap.height) {
            for x in overlap.x..overlap.x.saturating_add(overlap.width) {
                if let (Some(src_cell), Some(dst_cell)) =
                    (src.cell((x, y)), self.buffer.cell_mut((x, y)))
                {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }

    /// Write `text` starting at (`x`, `y`), dropping every character that
    /// lands outside the frame. Returns the column after the last written
    /// character.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut column = x;
        for ch in text.chars() {
            if let Some(cell) = self.cell_mut(column, y) {
                cell.set_char(ch);
                cell.set_style(style);
            }
            column = column.saturating_add(1);
        }
        column
    }

    /// Mutable access to a single cell, `None` outside the frame.
    pub fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if !contains(self.area, x, y) {
            return None;
        }
        self.buffer.cell_mut((x, y))
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        if !contains(self.area, x, y) {
            return None;
        }
        self.buffer.cell((x, y))
    }
}

/// Whether (`column`, `row`) falls inside `rect`. Zero-area rects contain
/// nothing.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

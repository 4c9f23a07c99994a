use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders};

use super::button::{WindowButton, button_column, button_offsets};
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

/// Border, title and caption buttons drawn around a window.
///
/// All button geometry lives here: drawing and hit-testing share
/// [`button_column`] so a glyph is always clickable exactly where it shows.
#[derive(Debug)]
pub struct Decoration {
    border: bool,
    title: String,
    title_alignment: Alignment,
    buttons: Vec<WindowButton>,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            border: true,
            title: String::new(),
            title_alignment: Alignment::Left,
            buttons: Vec::new(),
        }
    }
}

impl Decoration {
    pub fn border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, show: bool) {
        self.border = show;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title_alignment(&self) -> Alignment {
        self.title_alignment
    }

    pub fn set_title_alignment(&mut self, alignment: Alignment) {
        self.title_alignment = alignment;
    }

    pub fn add_button(&mut self, button: WindowButton) {
        self.buttons.push(button);
        let offsets = button_offsets(self.buttons.iter().map(WindowButton::alignment));
        for (button, offset) in self.buttons.iter_mut().zip(offsets) {
            button.set_offset(offset);
        }
    }

    pub fn button(&self, index: usize) -> Option<&WindowButton> {
        self.buttons.get(index)
    }

    pub fn button_mut(&mut self, index: usize) -> Option<&mut WindowButton> {
        self.buttons.get_mut(index)
    }

    pub fn buttons(&self) -> &[WindowButton] {
        &self.buttons
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Index of the button whose glyph sits at (`column`, `row`) of a window
    /// occupying `rect`. Only the top border row carries buttons.
    pub fn button_at(&self, rect: Rect, column: u16, row: u16) -> Option<usize> {
        if row != rect.y {
            return None;
        }
        self.buttons
            .iter()
            .position(|button| button_column(rect, button.offset()) == column as i32)
    }

    /// Border and title. Draws nothing when the border is hidden.
    pub fn render_frame(&self, frame: &mut UiFrame<'_>, rect: Rect, focused: bool) {
        if !self.border {
            return;
        }
        let (border_style, title_style) = if focused {
            (theme::border_focused(), theme::title_focused())
        } else {
            (theme::border(), theme::title())
        };
        let title_width = rect.width.saturating_sub(2) as usize;
        let title = truncate_to_width(&self.title, title_width);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .title_alignment(self.title_alignment)
            .title_style(title_style);
        frame.render_widget(block, rect);
    }

    /// Caption buttons as `[g]`, glyph at the button's column on the top
    /// border row.
    pub fn render_buttons(&self, frame: &mut UiFrame<'_>, rect: Rect) {
        if !self.border {
            return;
        }
        let style = theme::button();
        for button in &self.buttons {
            let glyph_column = button_column(rect, button.offset());
            let label = ['[', button.symbol(), ']'];
            for (i, ch) in label.into_iter().enumerate() {
                let column = glyph_column - 1 + i as i32;
                let Ok(column) = u16::try_from(column) else {
                    continue;
                };
                if let Some(cell) = frame.cell_mut(column, rect.y) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::input::{MouseAction, MouseEvent, MouseResult};
use crate::ui::{UiFrame, contains};

/// Scrollable, selectable list of strings usable as window content.
pub struct ListComponent {
    items: Vec<String>,
    selected: usize,
    offset: usize,
    rect: Rect,
    focused: bool,
}

impl ListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            offset: 0,
            rect: Rect::default(),
            focused: false,
        }
    }

    pub fn with_items(items: Vec<String>) -> Self {
        let mut list = Self::new();
        list.set_items(items);
        list
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected.min(self.items.len().saturating_sub(1));
    }

    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        if delta.is_negative() {
            self.selected = self.selected.saturating_sub(delta.unsigned_abs());
        } else {
            self.selected = (self.selected + delta as usize).min(self.items.len() - 1);
        }
    }

    fn keep_selected_in_view(&mut self, view: usize) {
        if view == 0 || self.items.is_empty() {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + view {
            self.offset = self.selected + 1 - view;
        }
    }
}

impl Default for ListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Content for ListComponent {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn draw(&mut self, frame: &mut UiFrame<'_>) {
        let area = self.rect;
        if area.height == 0 || area.width == 0 {
            return;
        }
        let view = area.height as usize;
        self.keep_selected_in_view(view);

        let items = self
            .items
            .iter()
            .skip(self.offset)
            .take(view)
            .map(|item| ListItem::new(item.clone()))
            .collect::<Vec<_>>();

        let mut state = ListState::default();
        if !self.items.is_empty() && self.selected >= self.offset {
            state.select(Some(self.selected - self.offset));
        }

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        let list = List::new(items).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn handle_mouse(&mut self, action: MouseAction, event: MouseEvent) -> MouseResult {
        if !contains(self.rect, event.column, event.row) {
            return MouseResult::IGNORED;
        }
        match action {
            MouseAction::LeftDown | MouseAction::LeftClick => {
                let row = (event.row - self.rect.y) as usize;
                let index = self.offset + row;
                if index < self.items.len() {
                    self.selected = index;
                }
                MouseResult::CONSUMED
            }
            MouseAction::ScrollUp => {
                self.move_selection(-1);
                MouseResult::CONSUMED
            }
            MouseAction::ScrollDown => {
                self.move_selection(1);
                MouseResult::CONSUMED
            }
            _ => MouseResult::IGNORED,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                true
            }
            KeyCode::PageUp => {
                self.move_selection(-5);
                true
            }
            KeyCode::PageDown => {
                self.move_selection(5);
                true
            }
            KeyCode::Home => {
                self.selected = 0;
                true
            }
            KeyCode::End => {
                if !self.items.is_empty() {
                    self.selected = self.items.len() - 1;
                }
                true
            }
            _ => false,
        }
    }
}

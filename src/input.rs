//! Mouse input as seen by windows and their content.
//!
//! `crossterm` reports raw button transitions. Windows want a slightly higher
//! level vocabulary: a click is a press and release at the same cell, and any
//! pointer motion (with or without a held button) is a move that may continue
//! a drag. [`MouseTranslator`] performs that mapping once at the host boundary.

use crossterm::event::{MouseButton, MouseEventKind};

/// Tagged mouse action delivered alongside a [`MouseEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Move,
    LeftDown,
    LeftUp,
    LeftClick,
    RightDown,
    RightUp,
    ScrollUp,
    ScrollDown,
}

impl MouseAction {
    pub fn is_press(self) -> bool {
        matches!(self, MouseAction::LeftDown | MouseAction::RightDown)
    }

    pub fn is_release(self) -> bool {
        matches!(self, MouseAction::LeftUp | MouseAction::RightUp)
    }
}

/// Absolute screen position of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
}

impl MouseEvent {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    pub const fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }
}

/// Outcome of a mouse handler.
///
/// `capture` nominates the handler as the receiver of the rest of the
/// current pointer gesture, regardless of where the pointer goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseResult {
    pub consumed: bool,
    pub capture: bool,
}

impl MouseResult {
    pub const IGNORED: Self = Self {
        consumed: false,
        capture: false,
    };

    pub const CONSUMED: Self = Self {
        consumed: true,
        capture: false,
    };

    pub const CAPTURED: Self = Self {
        consumed: true,
        capture: true,
    };
}

/// Converts `crossterm` mouse events into `(MouseAction, MouseEvent)` pairs.
///
/// A left release at the cell of the preceding left press yields both a
/// `LeftUp` and a `LeftClick`, in that order.
#[derive(Debug, Default)]
pub struct MouseTranslator {
    left_down_at: Option<(u16, u16)>,
}

impl MouseTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(
        &mut self,
        mouse: &crossterm::event::MouseEvent,
    ) -> Vec<(MouseAction, MouseEvent)> {
        let event = MouseEvent::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.left_down_at = Some(event.position());
                vec![(MouseAction::LeftDown, event)]
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed_here = self.left_down_at.take() == Some(event.position());
                if pressed_here {
                    vec![
                        (MouseAction::LeftUp, event),
                        (MouseAction::LeftClick, event),
                    ]
                } else {
                    vec![(MouseAction::LeftUp, event)]
                }
            }
            MouseEventKind::Down(MouseButton::Right) => vec![(MouseAction::RightDown, event)],
            MouseEventKind::Up(MouseButton::Right) => vec![(MouseAction::RightUp, event)],
            MouseEventKind::Drag(_) | MouseEventKind::Moved => vec![(MouseAction::Move, event)],
            MouseEventKind::ScrollUp => vec![(MouseAction::ScrollUp, event)],
            MouseEventKind::ScrollDown => vec![(MouseAction::ScrollDown, event)],
            _ => Vec::new(),
        }
    }
}

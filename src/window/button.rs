use std::fmt;

use ratatui::layout::Rect;

use crate::constants::{BUTTON_LEFT_START, BUTTON_RIGHT_START, BUTTON_SPACING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonAlignment {
    #[default]
    Left,
    Right,
}

/// What a caption button does when clicked.
///
/// `Callback` runs inside the window's mouse handler. `ToggleMaximize` is
/// applied by the window itself; `Hide` and `Close` change the manager's
/// stacking and are handed back to it as a request.
pub enum ButtonAction {
    Callback(Box<dyn FnMut()>),
    ToggleMaximize,
    Hide,
    Close,
}

impl fmt::Debug for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonAction::Callback(_) => f.write_str("Callback(..)"),
            ButtonAction::ToggleMaximize => f.write_str("ToggleMaximize"),
            ButtonAction::Hide => f.write_str("Hide"),
            ButtonAction::Close => f.write_str("Close"),
        }
    }
}

/// Caption button drawn on a window's top border.
#[derive(Debug)]
pub struct WindowButton {
    symbol: char,
    alignment: ButtonAlignment,
    action: Option<ButtonAction>,
    offset: i32,
}

impl WindowButton {
    pub fn new(symbol: char, alignment: ButtonAlignment) -> Self {
        Self {
            symbol,
            alignment,
            action: None,
            offset: 0,
        }
    }

    pub fn with_action(mut self, action: ButtonAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_callback(self, callback: impl FnMut() + 'static) -> Self {
        self.with_action(ButtonAction::Callback(Box::new(callback)))
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn set_symbol(&mut self, symbol: char) {
        self.symbol = symbol;
    }

    pub fn alignment(&self) -> ButtonAlignment {
        self.alignment
    }

    pub fn action(&self) -> Option<&ButtonAction> {
        self.action.as_ref()
    }

    pub(crate) fn action_mut(&mut self) -> Option<&mut ButtonAction> {
        self.action.as_mut()
    }

    /// Column offset assigned by the owning window. Non-negative offsets count
    /// from the left edge, negative ones from one past the right edge.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }
}

/// Offsets for a button list, in list order.
///
/// Left and right buttons advance independent counters, so interleaving the
/// two alignments never shifts the other side's positions.
pub fn button_offsets<I>(alignments: I) -> Vec<i32>
where
    I: IntoIterator<Item = ButtonAlignment>,
{
    let mut left = BUTTON_LEFT_START;
    let mut right = BUTTON_RIGHT_START;
    alignments
        .into_iter()
        .map(|alignment| match alignment {
            ButtonAlignment::Left => {
                let offset = left;
                left += BUTTON_SPACING;
                offset
            }
            ButtonAlignment::Right => {
                let offset = right;
                right -= BUTTON_SPACING;
                offset
            }
        })
        .collect()
}

/// Screen column of a button glyph inside `rect`.
pub fn button_column(rect: Rect, offset: i32) -> i32 {
    if offset >= 0 {
        rect.x as i32 + offset
    } else {
        rect.x as i32 + rect.width as i32 + offset
    }
}

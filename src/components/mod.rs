use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::input::{MouseAction, MouseEvent, MouseResult};
use crate::ui::UiFrame;

pub mod list;

pub use list::ListComponent;

/// Content hosted inside a window.
///
/// The window owns the geometry: it assigns the content's rect from its inner
/// rect before every draw and hands over a frame clipped to that rect. Focus is
/// delegated to the content whenever the window itself is focused.
pub trait Content {
    fn rect(&self) -> Rect;

    fn set_rect(&mut self, rect: Rect);

    fn draw(&mut self, frame: &mut UiFrame<'_>);

    fn focus(&mut self);

    fn blur(&mut self);

    fn has_focus(&self) -> bool;

    fn handle_mouse(&mut self, _action: MouseAction, _event: MouseEvent) -> MouseResult {
        MouseResult::IGNORED
    }

    fn handle_key(&mut self, _key: &KeyEvent) -> bool {
        false
    }
}

pub mod button;
pub mod decorator;
pub mod gesture;

mod window_manager;

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::widgets::Clear;
use thiserror::Error;

use crate::components::Content;
use crate::constants::BORDER_THICKNESS;
use crate::input::{MouseAction, MouseEvent, MouseResult};
use crate::ui::{UiFrame, contains};

pub use button::{ButtonAction, ButtonAlignment, WindowButton, button_offsets};
pub use decorator::Decoration;
pub use gesture::{Gesture, GestureStart, ResizeEdge};
pub use window_manager::{WindowId, WindowManager};

/// Misuse of a window or manager outside its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window must be added to a window manager to call this method")]
    Detached,
    #[error("window {0} is not attached to this window manager")]
    UnknownWindow(WindowId),
}

/// Stacking change a window asks its manager to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    Hide,
    Close,
}

/// Result of [`Window::handle_mouse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowResponse {
    pub consumed: bool,
    /// The window wants the rest of the current pointer gesture.
    pub capture: bool,
    pub request: Option<WindowRequest>,
}

impl WindowResponse {
    pub const IGNORED: Self = Self {
        consumed: false,
        capture: false,
        request: None,
    };

    pub const CONSUMED: Self = Self {
        consumed: true,
        capture: false,
        request: None,
    };

    pub const CAPTURED: Self = Self {
        consumed: true,
        capture: true,
        request: None,
    };

    fn request(request: WindowRequest) -> Self {
        Self {
            request: Some(request),
            ..Self::CONSUMED
        }
    }
}

impl From<MouseResult> for WindowResponse {
    fn from(result: MouseResult) -> Self {
        Self {
            consumed: result.consumed,
            capture: result.capture,
            request: None,
        }
    }
}

/// A window's view of the manager it belongs to: the reference rect used by
/// maximize and center. The manager updates it in place when its area changes.
#[derive(Debug, Clone)]
pub(crate) struct ManagerLink {
    area: Rc<Cell<Rect>>,
}

impl ManagerLink {
    pub(crate) fn new(area: Rc<Cell<Rect>>) -> Self {
        Self { area }
    }

    fn inner_rect(&self) -> Rect {
        self.area.get()
    }
}

/// A decorated, optionally draggable and resizable container for content.
pub struct Window {
    root: Option<Box<dyn Content>>,
    rect: Rect,
    restore_rect: Rect,
    maximized: bool,
    draggable: bool,
    resizable: bool,
    modal: bool,
    focused: bool,
    decoration: Decoration,
    gesture: Gesture,
    manager: Option<ManagerLink>,
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.decoration.title())
            .field("rect", &self.rect)
            .field("maximized", &self.maximized)
            .field("modal", &self.modal)
            .field("has_root", &self.root.is_some())
            .field("attached", &self.manager.is_some())
            .finish_non_exhaustive()
    }
}

impl Window {
    /// Detached, bordered window with an empty rect.
    pub fn new() -> Self {
        let rect = Rect::default();
        Self {
            root: None,
            rect,
            restore_rect: rect,
            maximized: false,
            draggable: false,
            resizable: false,
            modal: false,
            focused: false,
            decoration: Decoration::default(),
            gesture: Gesture::Idle,
            manager: None,
        }
    }

    pub fn with_root(mut self, root: impl Content + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self.restore_rect = rect;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.decoration.set_title(title);
        self
    }

    pub fn with_border(mut self, show: bool) -> Self {
        self.decoration.set_border(show);
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_button(mut self, button: WindowButton) -> Self {
        self.add_button(button);
        self
    }

    pub fn set_root(&mut self, root: Option<Box<dyn Content>>) {
        self.root = root;
    }

    pub fn root(&self) -> Option<&dyn Content> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut (dyn Content + 'static)> {
        self.root.as_deref_mut()
    }

    pub fn take_root(&mut self) -> Option<Box<dyn Content>> {
        self.root.take()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Geometry saved by the most recent [`Window::maximize`].
    pub fn restore_rect(&self) -> Rect {
        self.restore_rect
    }

    /// Content area: the rect minus the border when one is shown.
    pub fn inner_rect(&self) -> Rect {
        if self.decoration.border() {
            self.rect
                .inner(Margin::new(BORDER_THICKNESS, BORDER_THICKNESS))
        } else {
            self.rect
        }
    }

    pub fn border(&self) -> bool {
        self.decoration.border()
    }

    pub fn set_border(&mut self, show: bool) {
        self.decoration.set_border(show);
    }

    pub fn title(&self) -> &str {
        self.decoration.title()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.decoration.set_title(title);
    }

    pub fn set_title_alignment(&mut self, alignment: Alignment) {
        self.decoration.set_title_alignment(alignment);
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub(crate) fn set_modal(&mut self, modal: bool) {
        self.modal = modal;
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub(crate) fn reset_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }

    pub fn is_attached(&self) -> bool {
        self.manager.is_some()
    }

    pub(crate) fn attach(&mut self, link: ManagerLink) {
        self.manager = Some(link);
    }

    pub(crate) fn detach(&mut self) {
        self.manager = None;
    }

    /// The attached manager's inner rect.
    pub fn manager_area(&self) -> Result<Rect, WindowError> {
        self.manager
            .as_ref()
            .map(ManagerLink::inner_rect)
            .ok_or(WindowError::Detached)
    }

    fn require_manager_area(&self) -> Rect {
        self.manager_area().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn add_button(&mut self, button: WindowButton) {
        self.decoration.add_button(button);
    }

    pub fn button(&self, index: usize) -> Option<&WindowButton> {
        self.decoration.button(index)
    }

    pub fn button_mut(&mut self, index: usize) -> Option<&mut WindowButton> {
        self.decoration.button_mut(index)
    }

    pub fn button_count(&self) -> usize {
        self.decoration.button_count()
    }

    /// Fill the manager's inner rect, remembering the current geometry.
    ///
    /// # Panics
    ///
    /// Panics when the window is not attached to a manager.
    pub fn maximize(&mut self) {
        let area = self.require_manager_area();
        self.restore_rect = self.rect;
        self.rect = area;
        self.maximized = true;
        self.gesture = Gesture::Idle;
        tracing::debug!(title = %self.title(), ?area, "maximized window");
    }

    pub fn restore(&mut self) {
        self.rect = self.restore_rect;
        self.maximized = false;
        tracing::debug!(title = %self.title(), rect = ?self.rect, "restored window");
    }

    pub fn toggle_maximize(&mut self) {
        if self.maximized {
            self.restore();
        } else {
            self.maximize();
        }
    }

    /// Keep a maximized window glued to the manager's area after it changes.
    pub(crate) fn sync_maximized(&mut self) {
        if self.maximized
            && let Ok(area) = self.manager_area()
        {
            self.rect = area;
        }
    }

    /// Move the window to the middle of the manager's inner rect without
    /// resizing it.
    ///
    /// # Panics
    ///
    /// Panics when the window is not attached to a manager.
    pub fn center(&mut self) {
        let area = self.require_manager_area();
        let x = area.x as i32 + (area.width as i32 - self.rect.width as i32) / 2;
        let y = area.y as i32 + (area.height as i32 - self.rect.height as i32) / 2;
        self.rect.x = x.clamp(0, u16::MAX as i32) as u16;
        self.rect.y = y.clamp(0, u16::MAX as i32) as u16;
    }

    /// Focus the window. With a root, keyboard focus goes to the root and the
    /// window's own flag only drives the border highlight.
    pub fn focus(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.focus();
        }
        self.focused = true;
    }

    pub fn blur(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.blur();
        }
        self.focused = false;
    }

    pub fn has_focus(&self) -> bool {
        match self.root.as_ref() {
            Some(root) => root.has_focus(),
            None => self.focused,
        }
    }

    pub fn draw(&mut self, frame: &mut UiFrame<'_>) {
        // The root may have lost focus behind our back; drop the highlight.
        if self.focused && !self.has_focus() {
            self.focused = false;
        }
        let rect = self.rect;
        let inner = self.inner_rect();
        let mut surface = frame.clipped(rect);
        if surface.is_empty() {
            return;
        }
        surface.render_widget(Clear, rect);
        self.decoration.render_frame(&mut surface, rect, self.focused);
        if let Some(root) = self.root.as_mut() {
            root.set_rect(inner);
            root.draw(&mut surface.clipped(inner));
        }
        self.decoration.render_buttons(&mut surface, rect);
    }

    pub fn handle_mouse(&mut self, action: MouseAction, event: MouseEvent) -> WindowResponse {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging(start) => return self.continue_drag(start, action, event),
            Gesture::Resizing(edge, start) => {
                return self.continue_resize(edge, start, action, event);
            }
            Gesture::Content => return self.continue_content(action, event),
        }

        let rect = self.rect;
        let (column, row) = event.position();
        let on_title = row == rect.y && contains(rect, column, row);
        if on_title && let Some(index) = self.decoration.button_at(rect, column, row) {
            return match action {
                MouseAction::LeftClick => self.click_button(index),
                // Presses on a button neither start a drag nor reach the root.
                _ => WindowResponse::CONSUMED,
            };
        }

        if action == MouseAction::LeftDown && self.decoration.border() && !self.maximized {
            let start = GestureStart { rect, column, row };
            if self.draggable && on_title {
                self.gesture = Gesture::Dragging(start);
                tracing::trace!(title = %self.title(), column, row, "drag started");
                return WindowResponse::CAPTURED;
            }
            if self.resizable
                && let Some(edge) = gesture::resize_edge_at(rect, column, row)
            {
                self.gesture = Gesture::Resizing(edge, start);
                tracing::trace!(title = %self.title(), ?edge, "resize started");
                return WindowResponse::CAPTURED;
            }
        }

        let Some(root) = self.root.as_mut() else {
            return WindowResponse::IGNORED;
        };
        let result = root.handle_mouse(action, event);
        if result.capture {
            self.gesture = Gesture::Content;
        }
        result.into()
    }

    fn click_button(&mut self, index: usize) -> WindowResponse {
        let action = self
            .decoration
            .button_mut(index)
            .and_then(WindowButton::action_mut);
        let request = match action {
            None => return WindowResponse::CONSUMED,
            Some(ButtonAction::Callback(callback)) => {
                callback();
                return WindowResponse::CONSUMED;
            }
            Some(ButtonAction::ToggleMaximize) => None,
            Some(ButtonAction::Hide) => Some(WindowRequest::Hide),
            Some(ButtonAction::Close) => Some(WindowRequest::Close),
        };
        match request {
            Some(request) => WindowResponse::request(request),
            None => {
                self.toggle_maximize();
                WindowResponse::CONSUMED
            }
        }
    }

    fn continue_drag(
        &mut self,
        start: GestureStart,
        action: MouseAction,
        event: MouseEvent,
    ) -> WindowResponse {
        match action {
            MouseAction::Move => {
                self.rect = gesture::apply_drag(start, event.column, event.row);
                WindowResponse::CAPTURED
            }
            MouseAction::LeftUp => {
                self.gesture = Gesture::Idle;
                tracing::trace!(title = %self.title(), rect = ?self.rect, "drag finished");
                WindowResponse::CONSUMED
            }
            _ => WindowResponse::CAPTURED,
        }
    }

    fn continue_resize(
        &mut self,
        edge: ResizeEdge,
        start: GestureStart,
        action: MouseAction,
        event: MouseEvent,
    ) -> WindowResponse {
        match action {
            MouseAction::Move => {
                self.rect = gesture::apply_resize(edge, start, event.column, event.row);
                WindowResponse::CAPTURED
            }
            MouseAction::LeftUp => {
                self.gesture = Gesture::Idle;
                tracing::trace!(title = %self.title(), rect = ?self.rect, "resize finished");
                WindowResponse::CONSUMED
            }
            _ => WindowResponse::CAPTURED,
        }
    }

    fn continue_content(&mut self, action: MouseAction, event: MouseEvent) -> WindowResponse {
        let Some(root) = self.root.as_mut() else {
            self.gesture = Gesture::Idle;
            return WindowResponse::IGNORED;
        };
        let result = root.handle_mouse(action, event);
        if !result.capture || action.is_release() {
            self.gesture = Gesture::Idle;
        }
        WindowResponse {
            consumed: result.consumed,
            capture: !self.gesture.is_idle(),
            request: None,
        }
    }

    pub fn handle_key(&mut self, key: &crossterm::event::KeyEvent) -> bool {
        self.root
            .as_mut()
            .is_some_and(|root| root.handle_key(key))
    }
}

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;

use super::{ManagerLink, Window, WindowError, WindowRequest, WindowResponse};
use crate::components::Content;
use crate::input::{MouseAction, MouseEvent, MouseResult};
use crate::ui::{UiFrame, contains};

/// Handle to a window owned by a [`WindowManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(usize);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stacks decorated windows over a rectangular area.
///
/// The manager owns every window attached to it. Shown windows live in the
/// z-order (index 0 at the back); hidden ones keep their state in the registry
/// until shown again or closed. While the modal stack is non-empty only its
/// top window, and windows stacked above it, receive mouse input.
pub struct WindowManager {
    windows: BTreeMap<WindowId, Window>,
    z_order: Vec<WindowId>,
    modal_stack: Vec<WindowId>,
    area: Rc<Cell<Rect>>,
    focused: Option<WindowId>,
    // window receiving the rest of an in-progress pointer gesture
    captured: Option<WindowId>,
    next_window_seq: usize,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl WindowManager {
    pub fn new(area: Rect) -> Self {
        Self {
            windows: BTreeMap::new(),
            z_order: Vec::new(),
            modal_stack: Vec::new(),
            area: Rc::new(Cell::new(area)),
            focused: None,
            captured: None,
            next_window_seq: 0,
        }
    }

    pub fn area(&self) -> Rect {
        self.area.get()
    }

    /// Reference rect for maximize and center. The manager draws no border of
    /// its own, so this is its whole area.
    pub fn inner_rect(&self) -> Rect {
        self.area.get()
    }

    /// Resize the managed area. Maximized windows follow the new area.
    pub fn set_area(&mut self, area: Rect) {
        if self.area.get() == area {
            return;
        }
        self.area.set(area);
        for window in self.windows.values_mut() {
            window.sync_maximized();
        }
        tracing::debug!(?area, "window manager area changed");
    }

    /// Build a window wired to this manager. It is not shown yet.
    pub fn new_window(&mut self, root: Option<Box<dyn Content>>, bordered: bool) -> WindowId {
        let mut window = Window::new().with_border(bordered);
        window.set_root(root);
        self.add_window(window)
    }

    /// Attach an existing window. It is not shown yet.
    pub fn add_window(&mut self, mut window: Window) -> WindowId {
        let id = WindowId(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.saturating_add(1);
        window.attach(ManagerLink::new(Rc::clone(&self.area)));
        tracing::debug!(window_id = %id, title = %window.title(), "attached window");
        self.windows.insert(id, window);
        id
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    fn attached_mut(&mut self, id: WindowId) -> &mut Window {
        match self.windows.get_mut(&id) {
            Some(window) => window,
            None => panic!("{}", WindowError::UnknownWindow(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.keys().copied()
    }

    /// Shown windows, back to front.
    pub fn z_order(&self) -> &[WindowId] {
        &self.z_order
    }

    pub fn modal_stack(&self) -> &[WindowId] {
        &self.modal_stack
    }

    pub fn top_modal(&self) -> Option<WindowId> {
        self.modal_stack.last().copied()
    }

    pub fn is_shown(&self, id: WindowId) -> bool {
        self.z_order.contains(&id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn captured(&self) -> Option<WindowId> {
        self.captured
    }

    /// Put the window at the front of the z-order and focus it.
    ///
    /// # Panics
    ///
    /// Panics when `id` does not belong to this manager.
    pub fn show(&mut self, id: WindowId) {
        self.attached_mut(id);
        if self.z_order.last() == Some(&id) && self.focused == Some(id) {
            return;
        }
        self.raise(id);
        self.focus_window(id);
        tracing::debug!(window_id = %id, "showing window");
    }

    /// [`WindowManager::show`] plus pushing the window on the modal stack.
    ///
    /// A pointer gesture held by any other window ends here: everything else
    /// now sits below the modal and must not see the rest of it.
    pub fn show_modal(&mut self, id: WindowId) {
        self.show(id);
        if let Some(held) = self.captured
            && held != id
        {
            self.release_capture(held);
        }
        self.attached_mut(id).set_modal(true);
        self.modal_stack.retain(|modal| *modal != id);
        self.modal_stack.push(id);
        tracing::debug!(window_id = %id, depth = self.modal_stack.len(), "pushed modal window");
    }

    /// Take the window off screen, keeping its state for a later show.
    ///
    /// Modal membership does not survive hiding. Focus, if the window held
    /// it, moves to the new frontmost window.
    ///
    /// # Panics
    ///
    /// Panics when `id` does not belong to this manager.
    pub fn hide(&mut self, id: WindowId) {
        let window = self.attached_mut(id);
        window.set_modal(false);
        window.reset_gesture();
        self.modal_stack.retain(|modal| *modal != id);
        if self.captured == Some(id) {
            self.captured = None;
        }
        let Some(pos) = self.z_order.iter().position(|shown| *shown == id) else {
            return;
        };
        self.z_order.remove(pos);
        if self.focused == Some(id) {
            self.attached_mut(id).blur();
            self.focused = None;
            if let Some(&front) = self.z_order.last() {
                self.focus_window(front);
            }
        }
        tracing::debug!(window_id = %id, focus = ?self.focused, "hid window");
    }

    /// Hide the window and hand it back, detached from this manager.
    pub fn close(&mut self, id: WindowId) -> Option<Window> {
        if !self.windows.contains_key(&id) {
            return None;
        }
        self.hide(id);
        let mut window = self.windows.remove(&id)?;
        window.detach();
        tracing::debug!(window_id = %id, "closed window");
        Some(window)
    }

    /// # Panics
    ///
    /// Panics when `id` does not belong to this manager.
    pub fn maximize(&mut self, id: WindowId) {
        self.attached_mut(id).maximize();
    }

    pub fn restore(&mut self, id: WindowId) {
        self.attached_mut(id).restore();
    }

    /// # Panics
    ///
    /// Panics when `id` does not belong to this manager.
    pub fn center(&mut self, id: WindowId) {
        self.attached_mut(id).center();
    }

    fn release_capture(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.reset_gesture();
        }
        self.captured = None;
        tracing::trace!(window_id = %id, "pointer capture released");
    }

    fn raise(&mut self, id: WindowId) {
        self.z_order.retain(|shown| *shown != id);
        self.z_order.push(id);
    }

    fn focus_window(&mut self, id: WindowId) {
        if let Some(previous) = self.focused
            && previous != id
            && let Some(window) = self.windows.get_mut(&previous)
        {
            window.blur();
        }
        if let Some(window) = self.windows.get_mut(&id) {
            window.focus();
            self.focused = Some(id);
        }
    }

    /// Index into the z-order of the first window allowed to take input.
    fn first_eligible(&self) -> usize {
        match self.modal_stack.last() {
            Some(top) => self
                .z_order
                .iter()
                .position(|shown| shown == top)
                .unwrap_or(self.z_order.len()),
            None => 0,
        }
    }

    fn is_eligible(&self, id: WindowId) -> bool {
        self.z_order[self.first_eligible()..].contains(&id)
    }

    /// Draw shown windows back to front, confined to the managed area.
    ///
    /// A focused window whose content has dropped focus on its own stops being
    /// the manager's focused window, so keys are no longer forwarded to it.
    pub fn draw(&mut self, frame: &mut UiFrame<'_>) {
        if let Some(id) = self.focused
            && self.windows.get(&id).is_none_or(|window| !window.has_focus())
        {
            tracing::debug!(window_id = %id, "window content gave up focus");
            self.focused = None;
        }
        let mut surface = frame.clipped(self.area.get());
        if surface.is_empty() {
            return;
        }
        for id in &self.z_order {
            if let Some(window) = self.windows.get_mut(id) {
                window.draw(&mut surface);
            }
        }
    }

    /// Route a mouse event to the window it belongs to.
    ///
    /// A window holding the pointer capture receives every event until it
    /// releases it. Otherwise the frontmost eligible window containing the
    /// position takes the event; a press also raises and focuses it. Events
    /// landing outside every eligible window are swallowed while a modal
    /// window is up.
    pub fn handle_mouse(&mut self, action: MouseAction, event: MouseEvent) -> MouseResult {
        if let Some(id) = self.captured
            && !self.is_eligible(id)
        {
            self.release_capture(id);
        }
        if let Some(id) = self.captured {
            let response = match self.windows.get_mut(&id) {
                Some(window) => window.handle_mouse(action, event),
                None => WindowResponse::IGNORED,
            };
            if !response.capture {
                self.captured = None;
            }
            self.apply_request(id, response.request);
            return MouseResult {
                consumed: true,
                capture: self.captured.is_some(),
            };
        }

        let (column, row) = event.position();
        let eligible = &self.z_order[self.first_eligible()..];
        let hit = eligible.iter().rev().copied().find(|id| {
            self.windows
                .get(id)
                .is_some_and(|window| contains(window.rect(), column, row))
        });
        let Some(id) = hit else {
            if self.modal_stack.is_empty() {
                return MouseResult::IGNORED;
            }
            tracing::trace!(column, row, ?action, "mouse event swallowed by modal window");
            return MouseResult::CONSUMED;
        };

        if action.is_press() {
            self.raise(id);
            self.focus_window(id);
        }
        let response = self.attached_mut(id).handle_mouse(action, event);
        if response.capture {
            self.captured = Some(id);
        }
        self.apply_request(id, response.request);
        MouseResult {
            consumed: true,
            capture: response.capture,
        }
    }

    fn apply_request(&mut self, id: WindowId, request: Option<WindowRequest>) {
        match request {
            Some(WindowRequest::Hide) => self.hide(id),
            Some(WindowRequest::Close) => {
                self.close(id);
            }
            None => {}
        }
    }

    /// Forward a key to the focused window's content.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let Some(id) = self.focused else {
            return false;
        };
        self.windows
            .get_mut(&id)
            .is_some_and(|window| window.handle_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{ButtonAction, ButtonAlignment, WindowButton};
    use ratatui::buffer::Buffer;
    use std::cell::RefCell;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[derive(Default)]
    struct Recorder {
        rect: Rect,
        focused: bool,
        hits: Rc<RefCell<usize>>,
    }

    impl Content for Recorder {
        fn rect(&self) -> Rect {
            self.rect
        }

        fn set_rect(&mut self, rect: Rect) {
            self.rect = rect;
        }

        fn draw(&mut self, _frame: &mut UiFrame<'_>) {}

        fn focus(&mut self) {
            self.focused = true;
        }

        fn blur(&mut self) {
            self.focused = false;
        }

        fn has_focus(&self) -> bool {
            self.focused
        }

        fn handle_mouse(&mut self, _action: MouseAction, _event: MouseEvent) -> MouseResult {
            *self.hits.borrow_mut() += 1;
            MouseResult::CONSUMED
        }
    }

    fn window_with_recorder(wm: &mut WindowManager, at: Rect) -> (WindowId, Rc<RefCell<usize>>) {
        let recorder = Recorder::default();
        let hits = recorder.hits.clone();
        let id = wm.add_window(Window::new().with_rect(at).with_root(recorder));
        (id, hits)
    }

    #[test]
    fn show_raises_and_focuses() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let a = wm.new_window(None, true);
        let b = wm.new_window(None, true);
        wm.show(a);
        wm.show(b);
        assert_eq!(wm.z_order(), &[a, b]);
        assert_eq!(wm.focused(), Some(b));
        wm.show(a);
        assert_eq!(wm.z_order(), &[b, a]);
        assert_eq!(wm.focused(), Some(a));
        assert!(!wm.window(b).unwrap().has_focus());
        // Idempotent when already frontmost.
        wm.show(a);
        assert_eq!(wm.z_order(), &[b, a]);
    }

    #[test]
    fn hide_passes_focus_to_frontmost_remaining() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let ids: Vec<_> = (0..3).map(|_| wm.new_window(None, true)).collect();
        for id in &ids {
            wm.show(*id);
        }
        wm.hide(ids[2]);
        assert_eq!(wm.focused(), Some(ids[1]));
        assert!(!wm.window(ids[2]).unwrap().has_focus());
        wm.hide(ids[0]);
        assert_eq!(wm.focused(), Some(ids[1]), "unfocused hide keeps focus");
        wm.hide(ids[1]);
        assert_eq!(wm.focused(), None);
        assert!(wm.z_order().is_empty());
    }

    #[test]
    fn overlap_click_reaches_front_window_only() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (a, a_hits) = window_with_recorder(&mut wm, rect(0, 0, 20, 10));
        let (b, b_hits) = window_with_recorder(&mut wm, rect(5, 5, 20, 10));
        wm.show(a);
        wm.show(b);
        let result = wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(8, 7));
        assert!(result.consumed);
        assert_eq!(*b_hits.borrow(), 1);
        assert_eq!(*a_hits.borrow(), 0);
    }

    #[test]
    fn press_raises_and_focuses_hit_window() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (a, _) = window_with_recorder(&mut wm, rect(0, 0, 20, 10));
        let (b, _) = window_with_recorder(&mut wm, rect(30, 0, 20, 10));
        wm.show(a);
        wm.show(b);
        wm.handle_mouse(MouseAction::LeftDown, MouseEvent::new(3, 3));
        assert_eq!(wm.z_order(), &[b, a]);
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn miss_without_modal_is_unconsumed() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (a, _) = window_with_recorder(&mut wm, rect(0, 0, 10, 5));
        wm.show(a);
        let result = wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(50, 20));
        assert_eq!(result, MouseResult::IGNORED);
    }

    #[test]
    fn modal_swallows_clicks_below_it() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (n, n_hits) = window_with_recorder(&mut wm, rect(0, 0, 30, 12));
        let (m, m_hits) = window_with_recorder(&mut wm, rect(20, 8, 20, 8));
        wm.show(n);
        wm.show_modal(m);
        let before = wm.window(n).unwrap().rect();

        let result = wm.handle_mouse(MouseAction::LeftDown, MouseEvent::new(2, 2));
        assert!(result.consumed);
        assert_eq!(*n_hits.borrow(), 0);
        assert_eq!(wm.window(n).unwrap().rect(), before);
        assert_eq!(wm.z_order(), &[n, m]);
        assert_eq!(wm.focused(), Some(m));
        assert_eq!(wm.modal_stack(), &[m]);

        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(25, 10));
        assert_eq!(*m_hits.borrow(), 1);
    }

    #[test]
    fn windows_shown_above_modal_stay_eligible() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (m, _) = window_with_recorder(&mut wm, rect(0, 0, 10, 5));
        let (top, top_hits) = window_with_recorder(&mut wm, rect(40, 0, 10, 5));
        wm.show_modal(m);
        wm.show(top);
        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(42, 2));
        assert_eq!(*top_hits.borrow(), 1);
    }

    #[test]
    fn hiding_modal_releases_gate() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (n, n_hits) = window_with_recorder(&mut wm, rect(0, 0, 10, 5));
        let (m, _) = window_with_recorder(&mut wm, rect(40, 0, 10, 5));
        wm.show(n);
        wm.show_modal(m);
        wm.hide(m);
        assert!(wm.modal_stack().is_empty());
        assert!(!wm.window(m).unwrap().is_modal());
        assert_eq!(wm.focused(), Some(n));
        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(2, 2));
        assert_eq!(*n_hits.borrow(), 1);
    }

    #[test]
    fn nested_modals_gate_to_top() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let (m1, m1_hits) = window_with_recorder(&mut wm, rect(0, 0, 10, 5));
        let (m2, _) = window_with_recorder(&mut wm, rect(40, 0, 10, 5));
        wm.show_modal(m1);
        wm.show_modal(m2);
        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(2, 2));
        assert_eq!(*m1_hits.borrow(), 0);
        wm.hide(m2);
        assert_eq!(wm.top_modal(), Some(m1));
        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(2, 2));
        assert_eq!(*m1_hits.borrow(), 1);
    }

    #[test]
    fn capture_routes_drag_outside_window() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let id = wm.add_window(
            Window::new()
                .with_rect(rect(10, 5, 20, 8))
                .with_draggable(true),
        );
        wm.show(id);
        let down = wm.handle_mouse(MouseAction::LeftDown, MouseEvent::new(12, 5));
        assert!(down.capture);
        assert_eq!(wm.captured(), Some(id));
        // Far outside the window: still the same gesture.
        wm.handle_mouse(MouseAction::Move, MouseEvent::new(52, 15));
        assert_eq!(wm.window(id).unwrap().rect(), rect(50, 15, 20, 8));
        wm.handle_mouse(MouseAction::LeftUp, MouseEvent::new(52, 15));
        assert_eq!(wm.captured(), None);
    }

    #[test]
    fn modal_ends_drag_held_by_window_below() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let n = wm.add_window(
            Window::new()
                .with_rect(rect(0, 0, 20, 8))
                .with_draggable(true),
        );
        let (m, m_hits) = window_with_recorder(&mut wm, rect(40, 10, 20, 8));
        wm.show(n);
        assert!(wm.handle_mouse(MouseAction::LeftDown, MouseEvent::new(5, 0)).capture);

        wm.show_modal(m);
        assert_eq!(wm.captured(), None);
        assert!(wm.window(n).unwrap().gesture().is_idle());

        let moved = wm.handle_mouse(MouseAction::Move, MouseEvent::new(15, 5));
        assert!(moved.consumed);
        assert!(!moved.capture);
        assert_eq!(wm.window(n).unwrap().rect(), rect(0, 0, 20, 8));
        assert_eq!(*m_hits.borrow(), 0);
        assert_eq!(wm.focused(), Some(m));
    }

    #[test]
    fn modal_keeps_its_own_drag() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let m = wm.add_window(
            Window::new()
                .with_rect(rect(10, 5, 20, 8))
                .with_draggable(true),
        );
        wm.show(m);
        wm.handle_mouse(MouseAction::LeftDown, MouseEvent::new(12, 5));
        wm.show_modal(m);
        assert_eq!(wm.captured(), Some(m));
        wm.handle_mouse(MouseAction::Move, MouseEvent::new(14, 6));
        assert_eq!(wm.window(m).unwrap().rect(), rect(12, 6, 20, 8));
    }

    #[test]
    fn hide_clears_capture() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let id = wm.add_window(
            Window::new()
                .with_rect(rect(10, 5, 20, 8))
                .with_draggable(true),
        );
        wm.show(id);
        wm.handle_mouse(MouseAction::LeftDown, MouseEvent::new(12, 5));
        wm.hide(id);
        assert_eq!(wm.captured(), None);
        assert!(wm.window(id).unwrap().gesture().is_idle());
    }

    #[test]
    fn close_button_removes_window() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let a = wm.new_window(None, true);
        let b = wm.add_window(
            Window::new().with_rect(rect(0, 0, 20, 6)).with_button(
                WindowButton::new('X', ButtonAlignment::Left)
                    .with_action(ButtonAction::Close),
            ),
        );
        wm.show(a);
        wm.show(b);
        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(2, 0));
        assert!(wm.window(b).is_none());
        assert_eq!(wm.z_order(), &[a]);
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn hide_button_keeps_window_registered() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let id = wm.add_window(
            Window::new().with_rect(rect(0, 0, 20, 6)).with_button(
                WindowButton::new('_', ButtonAlignment::Right)
                    .with_action(ButtonAction::Hide),
            ),
        );
        wm.show(id);
        wm.handle_mouse(MouseAction::LeftClick, MouseEvent::new(17, 0));
        assert!(!wm.is_shown(id));
        assert!(wm.window(id).is_some());
    }

    #[test]
    fn close_detaches_window() {
        let mut wm = WindowManager::new(rect(0, 0, 80, 24));
        let id = wm.new_window(None, true);
        wm.show(id);
        let window = wm.close(id).expect("window returned");
        assert!(!window.is_attached());
        assert!(wm.close(id).is_none());
        assert!(wm.is_empty());
    }

    #[test]
    #[should_panic(expected = "is not attached to this window manager")]
    fn show_unknown_window_panics() {
        let mut other = WindowManager::new(rect(0, 0, 10, 10));
        let foreign = other.new_window(None, true);
        let mut wm = WindowManager::new(rect(0, 0, 10, 10));
        wm.show(foreign);
    }

    #[test]
    fn maximized_window_tracks_area_changes() {
        let mut wm = WindowManager::new(rect(0, 0, 40, 20));
        let id = wm.add_window(Window::new().with_rect(rect(2, 2, 10, 5)));
        wm.maximize(id);
        wm.set_area(rect(0, 0, 60, 30));
        assert_eq!(wm.window(id).unwrap().rect(), rect(0, 0, 60, 30));
        wm.restore(id);
        assert_eq!(wm.window(id).unwrap().rect(), rect(2, 2, 10, 5));
    }

    #[test]
    fn draw_paints_back_to_front() {
        let area = rect(0, 0, 20, 8);
        let mut wm = WindowManager::new(area);
        let back = wm.add_window(
            Window::new()
                .with_rect(rect(0, 0, 10, 5))
                .with_title("back"),
        );
        let front = wm.add_window(
            Window::new()
                .with_rect(rect(5, 2, 10, 5))
                .with_title("front"),
        );
        wm.show(back);
        wm.show(front);
        let mut buffer = Buffer::empty(area);
        wm.draw(&mut UiFrame::from_parts(area, &mut buffer));
        // The front window's top-left corner overwrites the back window's body.
        assert_eq!(buffer.cell((5, 2)).unwrap().symbol(), "┌");
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), "┌");
    }

    #[test]
    fn keys_go_to_focused_window() {
        use crate::components::ListComponent;
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut wm = WindowManager::new(rect(0, 0, 40, 20));
        let list = ListComponent::with_items(vec!["a".into(), "b".into()]);
        let id = wm.add_window(Window::new().with_rect(rect(0, 0, 10, 6)).with_root(list));
        assert!(!wm.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
        wm.show(id);
        assert!(wm.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn draw_forgets_window_whose_content_dropped_focus() {
        use crate::components::ListComponent;
        use crossterm::event::{KeyCode, KeyModifiers};

        let area = rect(0, 0, 40, 20);
        let mut wm = WindowManager::new(area);
        let list = ListComponent::with_items(vec!["a".into(), "b".into()]);
        let id = wm.add_window(Window::new().with_rect(rect(0, 0, 10, 6)).with_root(list));
        wm.show(id);
        wm.window_mut(id).unwrap().root_mut().unwrap().blur();

        let mut buffer = Buffer::empty(area);
        wm.draw(&mut UiFrame::from_parts(area, &mut buffer));
        assert_eq!(wm.focused(), None);
        assert!(!wm.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));

        wm.show(id);
        assert_eq!(wm.focused(), Some(id));
        assert!(wm.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
    }
}

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::widgets::Block;

use crate::input::MouseTranslator;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::WindowManager;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Drives a [`WindowManager`] from terminal input.
///
/// Each tick draws the manager over the full terminal area, then drains every
/// pending event. Mouse events are translated and routed through the manager,
/// key presses go to the focused window, and the application hook then sees
/// the event together with whether the manager consumed it. The hook may stop
/// the loop.
pub struct EventLoop {
    poll_interval: Duration,
    mouse: MouseTranslator,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            mouse: MouseTranslator::new(),
        }
    }

    /// Runs the loop on the current thread until the hook returns
    /// [`ControlFlow::Quit`].
    pub fn run<B, F, E>(
        &mut self,
        terminal: &mut Terminal<B>,
        wm: &mut WindowManager,
        mut hook: F,
    ) -> Result<(), E>
    where
        B: Backend,
        F: FnMut(&mut WindowManager, &Event, bool) -> ControlFlow,
        E: From<io::Error> + From<<B as Backend>::Error>,
    {
        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                wm.set_area(area);
                let mut ui = UiFrame::new(frame);
                ui.render_widget(Block::default().style(theme::desktop()), area);
                wm.draw(&mut ui);
            })?;

            if event::poll(self.poll_interval)? {
                // Drain bursts (drags, scrolling) before the next redraw so the
                // picture never lags behind the pointer.
                loop {
                    let event = event::read()?;
                    let consumed = self.dispatch(wm, &event);
                    if let ControlFlow::Quit = hook(wm, &event, consumed) {
                        return Ok(());
                    }
                    if !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
    }

    pub fn dispatch(&mut self, wm: &mut WindowManager, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => {
                let mut consumed = false;
                for (action, position) in self.mouse.translate(mouse) {
                    consumed |= wm.handle_mouse(action, position).consumed;
                }
                consumed
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => wm.handle_key(key),
            _ => false,
        }
    }
}

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};

use term_winman::components::ListComponent;
use term_winman::event_loop::{ControlFlow, EventLoop};
use term_winman::tracing_sub;
use term_winman::window::{
    ButtonAction, ButtonAlignment, Window, WindowButton, WindowId, WindowManager,
};

const MAXIMIZE_SYMBOL: char = '▴';
const RESTORE_SYMBOL: char = '▾';

/// Overlapping window demo. Ctrl+Q quits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of windows to open.
    #[arg(long, default_value_t = 6)]
    windows: usize,

    /// Also open a centered modal window on top.
    #[arg(long)]
    modal: bool,

    /// Append debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    poll_ms: u64,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        tracing_sub::init_with_file(path)?;
    }

    let (width, height) = terminal::size()?;
    let mut wm = WindowManager::new(Rect {
        x: 0,
        y: 0,
        width,
        height,
    });
    for i in 0..args.windows {
        let id = wm.add_window(demo_window(i));
        wm.show(id);
    }
    if args.modal {
        let id = wm.add_window(modal_window());
        wm.center(id);
        wm.show_modal(id);
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_loop = EventLoop::new(Duration::from_millis(args.poll_ms));
    let result: io::Result<()> = event_loop.run(&mut terminal, &mut wm, |wm, event, _| {
        sync_maximize_symbols(wm);
        if wm.is_empty() {
            return ControlFlow::Quit;
        }
        match event {
            Event::Key(key)
                if key.code == KeyCode::Char('q')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                ControlFlow::Quit
            }
            _ => ControlFlow::Continue,
        }
    });

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn demo_window(i: usize) -> Window {
    let draggable = i % 2 == 0;
    let resizable = i % 3 == 0;
    let items = vec![
        format!("Window {i}"),
        format!("Draggable: {draggable}"),
        format!("Resizable: {resizable}"),
        String::new(),
        "Drag the title bar to move.".to_string(),
        "Drag a side or bottom border to resize.".to_string(),
        "[X] closes, [▴] maximizes.".to_string(),
        "Ctrl+Q quits.".to_string(),
    ];
    let offset = i as u16;
    let mut window = Window::new()
        .with_root(ListComponent::with_items(items))
        .with_title(format!(
            "Window{i} - Draggable: {draggable}, Resizable: {resizable}"
        ))
        .with_rect(Rect {
            x: 2 + offset * 2,
            y: 1 + offset,
            width: 50,
            height: 12,
        })
        .with_draggable(draggable)
        .with_resizable(resizable)
        .with_button(close_button())
        .with_button(
            WindowButton::new(MAXIMIZE_SYMBOL, ButtonAlignment::Right)
                .with_action(ButtonAction::ToggleMaximize),
        );
    window.set_title_alignment(Alignment::Center);
    window
}

fn modal_window() -> Window {
    let items = vec![
        "This window is modal.".to_string(),
        "Windows behind it ignore the mouse".to_string(),
        "until it is closed.".to_string(),
    ];
    let mut window = Window::new()
        .with_root(ListComponent::with_items(items))
        .with_title("Modal")
        .with_rect(Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 7,
        })
        .with_draggable(true)
        .with_button(close_button());
    window.set_title_alignment(Alignment::Center);
    window
}

fn close_button() -> WindowButton {
    WindowButton::new('X', ButtonAlignment::Left)
        .with_action(ButtonAction::Close)
}

/// The maximize button's glyph shows what a click will do next.
fn sync_maximize_symbols(wm: &mut WindowManager) {
    let ids: Vec<WindowId> = wm.ids().collect();
    for id in ids {
        let Some(window) = wm.window_mut(id) else {
            continue;
        };
        let symbol = if window.is_maximized() {
            RESTORE_SYMBOL
        } else {
            MAXIMIZE_SYMBOL
        };
        if let Some(button) = window.button_mut(1)
            && matches!(button.action(), Some(ButtonAction::ToggleMaximize))
        {
            button.set_symbol(symbol);
        }
    }
}

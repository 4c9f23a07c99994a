use ratatui::style::{Color, Modifier, Style};

// Centralized decoration styles. Windows only ever ask for a style by role so
// the palette can change in one place.

pub fn window_bg() -> Color {
    Color::Reset
}

pub fn border() -> Style {
    Style::default().fg(Color::DarkGray).bg(window_bg())
}

pub fn border_focused() -> Style {
    Style::default().fg(Color::White).bg(window_bg())
}

pub fn title() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn title_focused() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

pub fn button() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn desktop() -> Style {
    Style::default().fg(Color::DarkGray).bg(Color::Black)
}

//! Header and help bar

use crate::model::ServerStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn status_color(status: &ServerStatus) -> Color {
    match status {
        ServerStatus::Healthy { model_loaded: true } => Color::Green,
        ServerStatus::Healthy { model_loaded: false } => Color::Yellow,
        ServerStatus::Unreachable => Color::Red,
        ServerStatus::Unknown | ServerStatus::Checking => Color::DarkGray,
    }
}

/// Header line: title, server status, endpoint
pub fn header_line(status: &ServerStatus, base_url: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " ♥ Heart Disease Risk ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled("● ", Style::default().fg(status_color(status))),
        Span::styled(status.label(), Style::default().fg(Color::White)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(base_url.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn draw_header(frame: &mut Frame, area: Rect, status: &ServerStatus, base_url: &str) {
    frame.render_widget(Paragraph::new(header_line(status, base_url)), area);
}

pub fn draw_help_bar(frame: &mut Frame, area: Rect, loading: bool) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let mut spans = vec![
        key(" Tab/↑↓ ", Color::Cyan),
        Span::raw("Move  "),
        key(" Enter ", Color::Green),
        Span::raw("Predict  "),
        key(" ^D ", Color::Magenta),
        Span::raw("Demo  "),
        key(" ^L ", Color::Magenta),
        Span::raw("Clear  "),
        key(" ? ", Color::Yellow),
        Span::raw("Help  "),
        key(" q ", Color::Red),
        Span::raw("Quit"),
    ];
    if loading {
        spans.push(Span::styled(
            "   waiting for prediction...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

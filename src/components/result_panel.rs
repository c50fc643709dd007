//! Result panel - risk badge and probability bars

use crate::model::PredictionResult;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const BAR_LABEL_WIDTH: usize = 12;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 50;

/// Split a bar of `width` cells into filled and empty parts
pub fn bar_cells(probability: f64, width: usize) -> (usize, usize) {
    let ratio = if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    (filled, width - filled)
}

fn bar_width(page_width: u16) -> usize {
    // indent + label + gap + percentage column
    (page_width as usize)
        .saturating_sub(3 + BAR_LABEL_WIDTH + 2 + 8)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

fn probability_line(
    label: &str,
    probability: f64,
    percent: String,
    color: Color,
    width: usize,
) -> Line<'static> {
    let (filled, empty) = bar_cells(probability, width);
    Line::from(vec![
        Span::styled(
            format!("   {:<w$}", label, w = BAR_LABEL_WIDTH),
            Style::default().fg(Color::White),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {:>6}", percent),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Lines of the result panel for a page `page_width` cells wide
pub fn result_lines(result: &PredictionResult, page_width: u16) -> Vec<Line<'static>> {
    let risk = result.risk_level();
    let width = bar_width(page_width);

    let mut lines = vec![
        Line::from(""),
        section_header("Prediction Result", Color::Cyan),
        Line::from(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!("{}  {}", risk.glyph(), risk.label()),
                Style::default().fg(risk.color()).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        probability_line(
            "No Disease",
            result.probability_no_disease,
            result.no_disease_percent(),
            Color::Green,
            width,
        ),
        probability_line(
            "Disease",
            result.probability_disease,
            result.disease_percent(),
            Color::Red,
            width,
        ),
    ];

    if result.model_loaded == Some(false) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "   Served by the server's fallback rules, not the trained model.",
            Style::default().fg(Color::Yellow),
        )));
    }

    lines
}

/// A `─ Title ───` rule opening a panel
pub fn section_header(title: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!(" ─ {} {}", title, "─".repeat(24)),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

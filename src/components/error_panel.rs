//! Error panel - failed prediction message

use super::result_panel::section_header;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PREFIX_WIDTH: usize = 5;
const MIN_TEXT_WIDTH: usize = 10;

/// Lines of the error panel for a page `page_width` cells wide
///
/// The message is wrapped here rather than by the Paragraph so the
/// panel's line count matches what is drawn.
pub fn error_lines(message: &str, page_width: u16) -> Vec<Line<'static>> {
    // page borders on both sides
    let text_width = (page_width as usize)
        .saturating_sub(2 + PREFIX_WIDTH)
        .max(MIN_TEXT_WIDTH);

    let mut lines = vec![
        Line::from(""),
        section_header("Error", Color::Red),
        Line::from(""),
    ];

    let rows = message
        .lines()
        .flat_map(|line| wrap_line(line, text_width));

    for (i, text) in rows.enumerate() {
        let prefix = if i == 0 { "   ✗ " } else { "     " };
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Red)),
            Span::styled(text, Style::default().fg(Color::White)),
        ]));
    }

    lines
}

/// Greedy word wrap to `width` display cells; words longer than a row
/// are split
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }

        for c in word.chars() {
            if current.width() + c.width().unwrap_or(0) > width {
                rows.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub page: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: header line, scrolling page, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        page: chunks[1],
        help: chunks[2],
    }
}

/// Scroll offset that brings lines `start..=end` into a viewport of
/// `height` lines, moving as little as possible
pub fn scroll_to_reveal(current: usize, start: usize, end: usize, height: usize) -> usize {
    if height == 0 {
        return current;
    }
    if start < current {
        start
    } else if end >= current + height {
        // Keep the top of the span visible when it is taller than the view
        (end + 1 - height).min(start)
    } else {
        current
    }
}

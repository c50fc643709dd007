//! Form component - the clinical data-entry form
//!
//! Owns the form state, turns key presses into form actions, and
//! renders the field rows plus the submit and clear controls.

use crate::action::Action;
use crate::component::Component;
use crate::model::{FormFocus, FormState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Frames of the loading indicator inside the submit control
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SUBMIT_LABEL: &str = "Predict Risk";
const LOADING_LABEL: &str = "Analyzing...";
const CLEAR_LABEL: &str = "Clear Form";

/// Width of the value box, excluding brackets
const VALUE_WIDTH: usize = 10;

/// Rendered form lines plus where the focused element sits
pub struct FormLines {
    pub lines: Vec<Line<'static>>,
    /// First and last line of the focused element (inclusive)
    pub focus_span: (usize, usize),
}

/// Form component
#[derive(Default)]
pub struct FormComponent {
    pub state: FormState,
}

impl FormComponent {
    pub fn new(state: FormState) -> Self {
        Self { state }
    }

    /// Build the form's lines
    ///
    /// `loading` swaps the submit control's label for the spinner and
    /// greys the control out.
    pub fn lines(&self, loading: bool, tick: usize) -> FormLines {
        let label_width = self
            .state
            .fields
            .iter()
            .map(|f| f.feature.label().width())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::from("")];
        let mut focus_span = (0, 0);

        for (index, field) in self.state.fields.iter().enumerate() {
            let focused = self.state.focus == FormFocus::Field(index);
            let start = lines.len();

            let marker = if focused { "▶ " } else { "  " };
            let label = field.feature.label();
            let padding = " ".repeat(label_width.saturating_sub(label.width()));

            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut value = field.value.clone();
            if focused {
                value.push('_');
            }
            let value_style = if field.invalid.is_some() {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {}", marker), label_style),
                Span::styled(format!("{}{}  ", label, padding), label_style),
                Span::raw("["),
                Span::styled(format!("{:<width$}", value, width = VALUE_WIDTH), value_style),
                Span::raw("]  "),
                Span::styled(field.feature.range_hint(), Style::default().fg(Color::DarkGray)),
            ]));

            if focused {
                lines.push(Line::from(Span::styled(
                    format!("      {}", field.feature.description()),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            if let Some(ref message) = field.invalid {
                lines.push(Line::from(Span::styled(
                    format!("      ⚠ {}", message),
                    Style::default().fg(Color::Red),
                )));
            }

            if focused {
                focus_span = (start, lines.len() - 1);
            }
        }

        lines.push(Line::from(""));

        let buttons_line = lines.len();
        lines.push(self.controls_line(loading, tick));
        if matches!(self.state.focus, FormFocus::Submit | FormFocus::Clear) {
            focus_span = (buttons_line, buttons_line);
        }

        FormLines { lines, focus_span }
    }

    fn controls_line(&self, loading: bool, tick: usize) -> Line<'static> {
        let submit_focused = self.state.focus == FormFocus::Submit;
        let submit = if loading {
            Span::styled(
                format!("[ {} {} ]", SPINNER[tick % SPINNER.len()], LOADING_LABEL),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(
                format!("[ {} ]", SUBMIT_LABEL),
                button_style(Color::Green, submit_focused),
            )
        };

        let mut spans = vec![Span::raw("   "), submit];
        if self.state.has_clear_control {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("[ {} ]", CLEAR_LABEL),
                button_style(Color::Magenta, self.state.focus == FormFocus::Clear),
            ));
        }
        Line::from(spans)
    }
}

fn button_style(color: Color, focused: bool) -> Style {
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

impl Component for FormComponent {
    fn init(&mut self) -> Result<()> {
        self.state.attach_clear_control();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('c') => Some(Action::ForceQuit),
                KeyCode::Char('d') => Some(Action::FillDemoSample),
                KeyCode::Char('l') => Some(Action::ClearForm),
                KeyCode::Up => Some(Action::ScrollUp),
                KeyCode::Down => Some(Action::ScrollDown),
                _ => None,
            };
            return Ok(action);
        }

        let on_field = matches!(self.state.focus, FormFocus::Field(_));

        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => {
                if self.state.focus == FormFocus::Clear {
                    Some(Action::ClearForm)
                } else {
                    Some(Action::Submit)
                }
            }
            KeyCode::Backspace if on_field => Some(Action::FieldBackspace),
            KeyCode::Char(c) if on_field && (c.is_ascii_digit() || c == '.' || c == '-') => {
                Some(Action::FieldInput(c))
            }
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.state.focus_next(),
            Action::FocusPrev => self.state.focus_prev(),
            Action::FieldInput(c) => {
                self.state.input_char(c);
            }
            Action::FieldBackspace => self.state.backspace(),
            _ => {}
        }
        Ok(None)
    }

    /// Standalone rendering of the idle form
    ///
    /// The App draws `lines()` inside its scrolling page, together with
    /// the result and error panels, so it never goes through here.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let form = self.lines(false, 0);
        let paragraph = Paragraph::new(form.lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Patient Data ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

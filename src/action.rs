//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling jobs and timers
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next field or control
    FocusNext,
    /// Move focus to the previous field or control
    FocusPrev,
    /// Type a character into the focused field
    FieldInput(char),
    /// Delete the last character of the focused field
    FieldBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Controls
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the form for prediction
    Submit,
    /// Empty the form and hide the result and error panels
    ClearForm,
    /// Fill the form with the demo sample
    FillDemoSample,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the page up one line
    ScrollUp,
    /// Scroll the page down one line
    ScrollDown,
    /// Scroll the page up one screen
    PageUp,
    /// Scroll the page down one screen
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::FieldInput(c) => write!(f, "FieldInput('{}')", c),
            Action::FieldBackspace => write!(f, "FieldBackspace"),
            Action::Submit => write!(f, "Submit"),
            Action::ClearForm => write!(f, "ClearForm"),
            Action::FillDemoSample => write!(f, "FillDemoSample"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}

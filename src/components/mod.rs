//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod error_panel;
pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod result_panel;
pub mod status;

pub use error_panel::error_lines;
pub use form::FormComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup, scroll_to_reveal};
pub use quit_dialog::QuitDialog;
pub use result_panel::result_lines;
pub use status::{draw_header, draw_help_bar};

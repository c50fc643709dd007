//! Model layer - form data and display state
//!
//! This module contains all state-related types:
//! - `FormState` - Field values, invalid marks and focus
//! - `Panels` - Result/error panel visibility and delayed scrolls
//! - `ModalStack` - Modal overlay management

pub mod feature;
pub mod form;
pub mod modal;
pub mod panel;
pub mod prediction;
pub mod ui;

// Re-export commonly used types
pub use form::{FormFocus, FormState};
pub use panel::{PanelContent, PanelKind, Panels};
pub use prediction::{PredictionResponse, PredictionResult, SubmissionOutcome, SubmissionPayload};
pub use ui::{ScrollTarget, ServerStatus};

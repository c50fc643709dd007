//! Modal stack for managing overlays
//!
//! Only the top modal receives input events; the form underneath keeps
//! its state while a dialog is open.

/// Represents a modal overlay that can be displayed on top of the form
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal unless it is already on top
    pub fn push(&mut self, modal: Modal) {
        if self.top() != Some(&modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

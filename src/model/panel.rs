//! Result and error panel visibility
//!
//! Only one of the two panels is visible at a time. Every visibility
//! change bumps a generation counter; a delayed scroll request carries
//! the generation it was queued for and is dropped when that no longer
//! matches.

use super::prediction::PredictionResult;
use std::time::{Duration, Instant};

/// Which panel a scroll request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Result,
    Error,
}

/// What the panel region currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelContent {
    #[default]
    Hidden,
    Result(PredictionResult),
    Error(String),
}

impl PanelContent {
    pub fn kind(&self) -> Option<PanelKind> {
        match self {
            PanelContent::Hidden => None,
            PanelContent::Result(_) => Some(PanelKind::Result),
            PanelContent::Error(_) => Some(PanelKind::Error),
        }
    }
}

/// A scroll-into-view waiting for its delay to elapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScrollRequest {
    target: PanelKind,
    generation: u64,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct Panels {
    content: PanelContent,
    generation: u64,
    pending_scroll: Option<ScrollRequest>,
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn is_hidden(&self) -> bool {
        self.content == PanelContent::Hidden
    }

    #[cfg(test)]
    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Hide both panels
    pub fn hide_all(&mut self) {
        self.set_content(PanelContent::Hidden);
        self.pending_scroll = None;
    }

    /// Reveal the result panel and queue a scroll to it
    pub fn show_result(&mut self, result: PredictionResult, delay: Duration, now: Instant) {
        self.set_content(PanelContent::Result(result));
        self.queue_scroll(PanelKind::Result, delay, now);
    }

    /// Reveal the error panel and queue a scroll to it
    pub fn show_error(&mut self, message: impl Into<String>, delay: Duration, now: Instant) {
        self.set_content(PanelContent::Error(message.into()));
        self.queue_scroll(PanelKind::Error, delay, now);
    }

    /// Take the scroll request if its delay has elapsed
    ///
    /// Returns the panel to scroll to, or `None` if nothing is due or the
    /// request went stale because the panels changed in the meantime.
    pub fn take_due_scroll(&mut self, now: Instant) -> Option<PanelKind> {
        let request = self.pending_scroll?;
        if now < request.due {
            return None;
        }
        self.pending_scroll = None;

        if request.generation == self.generation && self.content.kind() == Some(request.target) {
            Some(request.target)
        } else {
            None
        }
    }

    fn set_content(&mut self, content: PanelContent) {
        self.content = content;
        self.generation = self.generation.wrapping_add(1);
    }

    fn queue_scroll(&mut self, target: PanelKind, delay: Duration, now: Instant) {
        self.pending_scroll = Some(ScrollRequest {
            target,
            generation: self.generation,
            due: now + delay,
        });
    }
}

//! UI state - presentation state separate from form data

/// Reachability of the prediction server, as reported by the health probe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerStatus {
    /// Probe disabled or not finished yet
    #[default]
    Unknown,
    Checking,
    Healthy { model_loaded: bool },
    Unreachable,
}

impl ServerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServerStatus::Unknown => "server status unknown",
            ServerStatus::Checking => "checking server...",
            ServerStatus::Healthy { model_loaded: true } => "server healthy · model loaded",
            ServerStatus::Healthy { model_loaded: false } => "server healthy · fallback model",
            ServerStatus::Unreachable => "server unreachable",
        }
    }
}

/// Which area of the page the next draw should bring into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Keep the focused form element visible
    Focus,
    ResultPanel,
    ErrorPanel,
}

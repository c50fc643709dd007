//! Data models for one prediction request/response cycle

use super::form::FormState;
use ratatui::style::Color;
use serde::Deserialize;

/// Shown when the server reports failure without saying why
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while making the prediction.";

/// Shown when the request could not be completed or decoded
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Key/value pairs sent to the prediction endpoint, in form order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionPayload {
    pub entries: Vec<(&'static str, String)>,
}

impl SubmissionPayload {
    /// Snapshot the current form state
    pub fn from_form(form: &FormState) -> Self {
        Self {
            entries: form
                .fields
                .iter()
                .map(|f| (f.feature.key(), f.value.trim().to_string()))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Response body returned by `POST /predict`
///
/// Only `success` is always read; the rest is consulted depending on it.
/// Extra fields such as `risk_level` and `input_features` are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<i64>,
    #[serde(default)]
    pub probability_no_disease: Option<f64>,
    #[serde(default)]
    pub probability_disease: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    /// False when the server answered with its fallback model
    #[serde(default)]
    pub model_loaded: Option<bool>,
}

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn from_prediction(prediction: i64) -> Self {
        if prediction == 1 {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            RiskLevel::High => "⚠",
            RiskLevel::Low => "✓",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RiskLevel::High => Color::Red,
            RiskLevel::Low => Color::Green,
        }
    }
}

/// A successful prediction ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub prediction: i64,
    pub probability_no_disease: f64,
    pub probability_disease: f64,
    pub model_loaded: Option<bool>,
}

impl PredictionResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_prediction(self.prediction)
    }

    pub fn no_disease_percent(&self) -> String {
        format_percent(self.probability_no_disease)
    }

    pub fn disease_percent(&self) -> String {
        format_percent(self.probability_disease)
    }
}

/// Format a probability as a percentage with one decimal place
///
/// Ties round away from zero, so 0.0625 reads "6.3%".
pub fn format_percent(probability: f64) -> String {
    // `+ 0.0` turns a rounded -0.0 into 0.0
    let tenths = (probability * 1000.0).round() + 0.0;
    format!("{:.1}%", tenths / 10.0)
}

/// What a completed submission should display
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success(PredictionResult),
    Failure(String),
}

impl From<PredictionResponse> for SubmissionOutcome {
    fn from(response: PredictionResponse) -> Self {
        if !response.success {
            return SubmissionOutcome::Failure(
                response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            );
        }

        match (
            response.prediction,
            response.probability_no_disease,
            response.probability_disease,
        ) {
            (Some(prediction), Some(no_disease), Some(disease)) => {
                SubmissionOutcome::Success(PredictionResult {
                    prediction,
                    probability_no_disease: no_disease,
                    probability_disease: disease,
                    model_loaded: response.model_loaded,
                })
            }
            _ => SubmissionOutcome::Failure(FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }
}

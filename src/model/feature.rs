//! Clinical features accepted by the prediction endpoint
//!
//! Each feature carries its wire key, a short label for the form row,
//! the long description shown as a hint, and the numeric range the
//! form enforces.

/// A single numeric input consumed by the remote predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClinicalFeature {
    Age,
    Sex,
    ChestPain,
    RestingBloodPressure,
    Cholesterol,
    FastingBloodSugar,
    RestingEcg,
    MaxHeartRate,
    ExerciseAngina,
    StDepression,
    Slope,
    Vessels,
    Thalassemia,
}

impl ClinicalFeature {
    /// All features in wire order
    pub fn all() -> &'static [ClinicalFeature] {
        &[
            ClinicalFeature::Age,
            ClinicalFeature::Sex,
            ClinicalFeature::ChestPain,
            ClinicalFeature::RestingBloodPressure,
            ClinicalFeature::Cholesterol,
            ClinicalFeature::FastingBloodSugar,
            ClinicalFeature::RestingEcg,
            ClinicalFeature::MaxHeartRate,
            ClinicalFeature::ExerciseAngina,
            ClinicalFeature::StDepression,
            ClinicalFeature::Slope,
            ClinicalFeature::Vessels,
            ClinicalFeature::Thalassemia,
        ]
    }

    /// Form field name, used as the multipart key
    pub fn key(&self) -> &'static str {
        match self {
            ClinicalFeature::Age => "age",
            ClinicalFeature::Sex => "sex",
            ClinicalFeature::ChestPain => "cp",
            ClinicalFeature::RestingBloodPressure => "trestbps",
            ClinicalFeature::Cholesterol => "chol",
            ClinicalFeature::FastingBloodSugar => "fbs",
            ClinicalFeature::RestingEcg => "restecg",
            ClinicalFeature::MaxHeartRate => "thalach",
            ClinicalFeature::ExerciseAngina => "exang",
            ClinicalFeature::StDepression => "oldpeak",
            ClinicalFeature::Slope => "slope",
            ClinicalFeature::Vessels => "ca",
            ClinicalFeature::Thalassemia => "thal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClinicalFeature::Age => "Age",
            ClinicalFeature::Sex => "Sex",
            ClinicalFeature::ChestPain => "Chest Pain Type",
            ClinicalFeature::RestingBloodPressure => "Resting Blood Pressure",
            ClinicalFeature::Cholesterol => "Serum Cholesterol",
            ClinicalFeature::FastingBloodSugar => "Fasting Blood Sugar",
            ClinicalFeature::RestingEcg => "Resting ECG",
            ClinicalFeature::MaxHeartRate => "Max Heart Rate",
            ClinicalFeature::ExerciseAngina => "Exercise Angina",
            ClinicalFeature::StDepression => "ST Depression",
            ClinicalFeature::Slope => "ST Slope",
            ClinicalFeature::Vessels => "Major Vessels",
            ClinicalFeature::Thalassemia => "Thalassemia",
        }
    }

    /// Long description shown under the focused field
    pub fn description(&self) -> &'static str {
        match self {
            ClinicalFeature::Age => "Age (years)",
            ClinicalFeature::Sex => "Sex (1 = male, 0 = female)",
            ClinicalFeature::ChestPain => "Chest Pain Type (0-3)",
            ClinicalFeature::RestingBloodPressure => "Resting Blood Pressure (mm Hg)",
            ClinicalFeature::Cholesterol => "Serum Cholesterol (mg/dl)",
            ClinicalFeature::FastingBloodSugar => {
                "Fasting Blood Sugar > 120 mg/dl (1 = true, 0 = false)"
            }
            ClinicalFeature::RestingEcg => "Resting ECG Results (0-2)",
            ClinicalFeature::MaxHeartRate => "Maximum Heart Rate Achieved",
            ClinicalFeature::ExerciseAngina => "Exercise Induced Angina (1 = yes, 0 = no)",
            ClinicalFeature::StDepression => "ST Depression Induced by Exercise",
            ClinicalFeature::Slope => "Peak Exercise ST Segment Slope (0-2)",
            ClinicalFeature::Vessels => "Number of Major Vessels Colored by Fluoroscopy (0-3)",
            ClinicalFeature::Thalassemia => {
                "Thalassemia (1 = normal, 2 = fixed defect, 3 = reversible defect)"
            }
        }
    }

    pub fn min(&self) -> f64 {
        match self {
            ClinicalFeature::Age => 1.0,
            ClinicalFeature::RestingBloodPressure => 80.0,
            ClinicalFeature::Cholesterol => 100.0,
            ClinicalFeature::MaxHeartRate => 60.0,
            ClinicalFeature::Thalassemia => 1.0,
            _ => 0.0,
        }
    }

    pub fn max(&self) -> f64 {
        match self {
            ClinicalFeature::Age => 120.0,
            ClinicalFeature::Sex
            | ClinicalFeature::FastingBloodSugar
            | ClinicalFeature::ExerciseAngina => 1.0,
            ClinicalFeature::ChestPain | ClinicalFeature::Vessels | ClinicalFeature::Thalassemia => {
                3.0
            }
            ClinicalFeature::RestingEcg | ClinicalFeature::Slope => 2.0,
            ClinicalFeature::RestingBloodPressure | ClinicalFeature::MaxHeartRate => 220.0,
            ClinicalFeature::Cholesterol => 600.0,
            ClinicalFeature::StDepression => 10.0,
        }
    }

    /// Whether the field accepts fractional values
    pub fn allows_fraction(&self) -> bool {
        matches!(self, ClinicalFeature::StDepression)
    }

    /// Range hint shown next to the input, e.g. `1-120`
    pub fn range_hint(&self) -> String {
        format!("{}-{}", self.min(), self.max())
    }
}

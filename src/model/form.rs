//! Form state - field values, invalid marks, and focus
//!
//! Holds everything the data-entry form owns. Range validation runs on
//! every edit; the stricter constraint check runs only when the user
//! submits.

use super::feature::ClinicalFeature;
use regex::Regex;
use std::sync::LazyLock;

/// Text a numeric field may hold while the user is still typing
static NUMERIC_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\.?\d*$").unwrap());

/// The fixed record used to pre-fill the form for demonstration
pub const DEMO_SAMPLE: [(ClinicalFeature, &str); 13] = [
    (ClinicalFeature::Age, "63"),
    (ClinicalFeature::Sex, "1"),
    (ClinicalFeature::ChestPain, "3"),
    (ClinicalFeature::RestingBloodPressure, "145"),
    (ClinicalFeature::Cholesterol, "233"),
    (ClinicalFeature::FastingBloodSugar, "1"),
    (ClinicalFeature::RestingEcg, "0"),
    (ClinicalFeature::MaxHeartRate, "150"),
    (ClinicalFeature::ExerciseAngina, "0"),
    (ClinicalFeature::StDepression, "2.3"),
    (ClinicalFeature::Slope, "0"),
    (ClinicalFeature::Vessels, "0"),
    (ClinicalFeature::Thalassemia, "1"),
];

pub const REQUIRED_MESSAGE: &str = "Please fill out this field.";
pub const NOT_A_NUMBER_MESSAGE: &str = "Please enter a number.";
pub const WHOLE_NUMBER_MESSAGE: &str = "Please enter a whole number.";

/// Message shown when a value falls outside its range
pub fn range_message(min: f64, max: f64) -> String {
    format!("Value must be between {} and {}", min, max)
}

/// One numeric input on the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub feature: ClinicalFeature,
    pub value: String,
    /// Custom validity message; `None` means the field is valid
    pub invalid: Option<String>,
}

impl FormField {
    pub fn new(feature: ClinicalFeature) -> Self {
        Self {
            feature,
            value: String::new(),
            invalid: None,
        }
    }

    /// Re-evaluate the range mark for the current value
    ///
    /// Values strictly outside `[min, max]` are marked invalid. Anything
    /// else, including empty or unparseable text, clears the mark.
    pub fn validate_range(&mut self) {
        let min = self.feature.min();
        let max = self.feature.max();

        self.invalid = match self.value.trim().parse::<f64>() {
            Ok(value) if value < min || value > max => Some(range_message(min, max)),
            _ => None,
        };
    }

    /// The check a browser performs on submit, returning the first problem
    fn constraint_violation(&self) -> Option<String> {
        let text = self.value.trim();
        if text.is_empty() {
            return Some(REQUIRED_MESSAGE.to_string());
        }

        let value = match text.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Some(NOT_A_NUMBER_MESSAGE.to_string()),
        };

        let (min, max) = (self.feature.min(), self.feature.max());
        if value < min || value > max {
            return Some(range_message(min, max));
        }

        if !self.feature.allows_fraction() && value.fract() != 0.0 {
            return Some(WHOLE_NUMBER_MESSAGE.to_string());
        }

        None
    }
}

/// Which element of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(usize),
    Submit,
    Clear,
}

/// Complete state of the data-entry form
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focus: FormFocus,
    /// Set once the clear control has been appended
    pub has_clear_control: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_features(ClinicalFeature::all())
    }
}

impl FormState {
    /// Create a form containing only the given features
    pub fn with_features(features: &[ClinicalFeature]) -> Self {
        let focus = if features.is_empty() {
            FormFocus::Submit
        } else {
            FormFocus::Field(0)
        };

        Self {
            fields: features.iter().copied().map(FormField::new).collect(),
            focus,
            has_clear_control: false,
        }
    }

    /// Append the clear control after the submit control
    pub fn attach_clear_control(&mut self) {
        self.has_clear_control = true;
    }

    #[cfg(test)]
    pub fn field(&self, feature: ClinicalFeature) -> Option<&FormField> {
        self.fields.iter().find(|f| f.feature == feature)
    }

    fn field_mut(&mut self, feature: ClinicalFeature) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.feature == feature)
    }

    /// Set a field's value and re-run range validation
    ///
    /// Returns false when the form has no such field.
    pub fn set_value(&mut self, feature: ClinicalFeature, value: &str) -> bool {
        match self.field_mut(feature) {
            Some(field) => {
                field.value = value.to_string();
                field.validate_range();
                true
            }
            None => false,
        }
    }

    /// Type a character into the focused field
    ///
    /// Characters that would make the text non-numeric are rejected.
    pub fn input_char(&mut self, c: char) -> bool {
        let FormFocus::Field(index) = self.focus else {
            return false;
        };
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };

        let mut candidate = field.value.clone();
        candidate.push(c);
        if !NUMERIC_INPUT.is_match(&candidate) {
            return false;
        }

        field.value = candidate;
        field.validate_range();
        true
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let FormFocus::Field(index) = self.focus {
            if let Some(field) = self.fields.get_mut(index) {
                field.value.pop();
                field.validate_range();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────

    fn focus_order(&self) -> Vec<FormFocus> {
        let mut order: Vec<FormFocus> = (0..self.fields.len()).map(FormFocus::Field).collect();
        order.push(FormFocus::Submit);
        if self.has_clear_control {
            order.push(FormFocus::Clear);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }

    pub fn focus_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = FormFocus::Field(index);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Form operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Run the submit-time constraint check over every field
    ///
    /// Marks each failing field and returns the index of the first one.
    pub fn check_constraints(&mut self) -> Result<(), usize> {
        let mut first_invalid = None;

        for (index, field) in self.fields.iter_mut().enumerate() {
            if let Some(message) = field.constraint_violation() {
                field.invalid = Some(message);
                first_invalid.get_or_insert(index);
            }
        }

        match first_invalid {
            Some(index) => Err(index),
            None => Ok(()),
        }
    }

    /// Populate every field present in the demo sample
    ///
    /// Returns the number of fields filled. Features missing from this
    /// form are skipped.
    pub fn fill_demo_sample(&mut self) -> usize {
        DEMO_SAMPLE
            .iter()
            .filter(|(feature, value)| self.set_value(*feature, value))
            .count()
    }

    /// Reset every field to empty and move focus to the top
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.invalid = None;
        }
        self.focus = if self.fields.is_empty() {
            FormFocus::Submit
        } else {
            FormFocus::Field(0)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(feature: ClinicalFeature, value: &str) -> FormField {
        let mut field = FormField::new(feature);
        field.value = value.to_string();
        field.validate_range();
        field
    }

    #[test]
    fn test_validate_range_marks_out_of_range_values() {
        let field = field_with(ClinicalFeature::Age, "121");
        assert_eq!(
            field.invalid.as_deref(),
            Some("Value must be between 1 and 120")
        );

        let field = field_with(ClinicalFeature::Age, "0");
        assert_eq!(
            field.invalid.as_deref(),
            Some("Value must be between 1 and 120")
        );

        let field = field_with(ClinicalFeature::StDepression, "10.5");
        assert_eq!(
            field.invalid.as_deref(),
            Some("Value must be between 0 and 10")
        );
    }

    #[test]
    fn test_validate_range_clears_inclusive_and_empty() {
        let mut field = field_with(ClinicalFeature::Age, "500");
        assert!(field.invalid.is_some());

        field.value = "120".to_string();
        field.validate_range();
        assert_eq!(field.invalid, None);

        field.value = "1".to_string();
        field.validate_range();
        assert_eq!(field.invalid, None);

        field.value = "500".to_string();
        field.validate_range();
        field.value.clear();
        field.validate_range();
        assert_eq!(field.invalid, None);

        field.value = "-".to_string();
        field.validate_range();
        assert_eq!(field.invalid, None);
    }

    #[test]
    fn test_input_char_rejects_non_numeric_text() {
        let mut form = FormState::default();
        assert!(form.input_char('6'));
        assert!(form.input_char('3'));
        assert!(!form.input_char('a'));
        assert!(!form.input_char('-'));
        assert_eq!(form.fields[0].value, "63");

        form.focus = FormFocus::Field(9);
        assert!(form.input_char('2'));
        assert!(form.input_char('.'));
        assert!(!form.input_char('.'));
        assert!(form.input_char('3'));
        assert_eq!(form.fields[9].value, "2.3");
    }

    #[test]
    fn test_input_validates_on_every_edit() {
        let mut form = FormState::default();
        form.input_char('1');
        form.input_char('2');
        form.input_char('5');
        assert_eq!(
            form.fields[0].invalid.as_deref(),
            Some("Value must be between 1 and 120")
        );

        form.backspace();
        assert_eq!(form.fields[0].value, "12");
        assert_eq!(form.fields[0].invalid, None);
    }

    #[test]
    fn test_input_ignored_on_controls() {
        let mut form = FormState::default();
        form.focus = FormFocus::Submit;
        assert!(!form.input_char('1'));
        form.backspace();
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_focus_cycles_through_fields_and_controls() {
        let mut form = FormState::with_features(&[ClinicalFeature::Age, ClinicalFeature::Sex]);
        form.attach_clear_control();

        form.focus_next();
        assert_eq!(form.focus, FormFocus::Field(1));
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Submit);
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Clear);
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Field(0));
        form.focus_prev();
        assert_eq!(form.focus, FormFocus::Clear);
    }

    #[test]
    fn test_focus_skips_clear_before_attach() {
        let mut form = FormState::with_features(&[ClinicalFeature::Age]);
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Submit);
        form.focus_next();
        assert_eq!(form.focus, FormFocus::Field(0));
    }

    #[test]
    fn test_fill_demo_sample_populates_all_fields() {
        let mut form = FormState::default();
        assert_eq!(form.fill_demo_sample(), 13);

        let value = |f: ClinicalFeature| form.field(f).map(|f| f.value.clone());
        assert_eq!(value(ClinicalFeature::Age).as_deref(), Some("63"));
        assert_eq!(value(ClinicalFeature::RestingBloodPressure).as_deref(), Some("145"));
        assert_eq!(value(ClinicalFeature::Cholesterol).as_deref(), Some("233"));
        assert_eq!(value(ClinicalFeature::StDepression).as_deref(), Some("2.3"));
        assert_eq!(value(ClinicalFeature::Thalassemia).as_deref(), Some("1"));
        assert!(form.fields.iter().all(|f| f.invalid.is_none()));
        assert!(form.check_constraints().is_ok());
    }

    #[test]
    fn test_fill_demo_sample_skips_missing_fields() {
        let mut form = FormState::with_features(&[ClinicalFeature::Age, ClinicalFeature::Cholesterol]);
        assert_eq!(form.fill_demo_sample(), 2);
        assert_eq!(form.fields[0].value, "63");
        assert_eq!(form.fields[1].value, "233");
        assert!(form.field(ClinicalFeature::Sex).is_none());
    }

    #[test]
    fn test_clear_empties_fields_and_marks() {
        let mut form = FormState::default();
        form.fill_demo_sample();
        form.set_value(ClinicalFeature::Age, "999");
        form.focus = FormFocus::Submit;

        form.clear();

        assert!(form.fields.iter().all(|f| f.value.is_empty()));
        assert!(form.fields.iter().all(|f| f.invalid.is_none()));
        assert_eq!(form.focus, FormFocus::Field(0));
    }

    #[test]
    fn test_check_constraints_reports_first_problem() {
        let mut form = FormState::default();
        form.fill_demo_sample();
        form.set_value(ClinicalFeature::Sex, "");
        form.set_value(ClinicalFeature::Cholesterol, "50");

        assert_eq!(form.check_constraints(), Err(1));
        assert_eq!(
            form.field(ClinicalFeature::Sex).and_then(|f| f.invalid.as_deref()),
            Some(REQUIRED_MESSAGE)
        );
        assert_eq!(
            form.field(ClinicalFeature::Cholesterol)
                .and_then(|f| f.invalid.as_deref()),
            Some("Value must be between 100 and 600")
        );
    }

    #[test]
    fn test_check_constraints_rejects_partial_numbers_and_fractions() {
        let mut form = FormState::with_features(&[ClinicalFeature::Age, ClinicalFeature::StDepression]);
        form.set_value(ClinicalFeature::Age, "-");
        form.set_value(ClinicalFeature::StDepression, "1.5");
        assert_eq!(form.check_constraints(), Err(0));
        assert_eq!(form.fields[0].invalid.as_deref(), Some(NOT_A_NUMBER_MESSAGE));
        assert_eq!(form.fields[1].invalid, None);

        form.set_value(ClinicalFeature::Age, "40.5");
        assert_eq!(form.check_constraints(), Err(0));
        assert_eq!(form.fields[0].invalid.as_deref(), Some(WHOLE_NUMBER_MESSAGE));
    }
}

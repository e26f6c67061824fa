use serde::{Deserialize, Serialize};

/// Screening thresholds applied by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub minimum_age: u8,
    /// Size of the reference skill set the declared tech stack is measured against.
    pub reference_stack_size: u8,
    /// Coverage ratio the declared stack must exceed to auto-accept.
    pub acceptance_ratio: f32,
    /// Applicants older than this get the detailed identity check.
    pub detailed_validation_age: u8,
    /// Country hosting the domestic offices, compared case-sensitively.
    pub domestic_country: String,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            reference_stack_size: 7,
            acceptance_ratio: 0.75,
            detailed_validation_age: 50,
            domestic_country: "TURKEY".to_string(),
        }
    }
}

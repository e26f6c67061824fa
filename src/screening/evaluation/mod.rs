mod config;

pub use config::EvaluationConfig;

use std::sync::Arc;

use tracing::debug;

use super::domain::{ApplicationResult, JobApplication};
use super::identity::{IdentityValidator, ValidationMode};

/// Error raised when an application cannot be screened at all.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("application has no applicant attached")]
    MissingApplicant,
    #[error("identity validator required for applicants past the age gate")]
    ValidatorUnavailable,
}

/// Stateless evaluator applying the screening rules to one application at a time.
///
/// The validator reference may be `None` only when every application handed to
/// the evaluator is rejectable before identity verification (i.e. underage).
pub struct ApplicationEvaluator {
    validator: Option<Arc<dyn IdentityValidator>>,
    config: EvaluationConfig,
}

impl ApplicationEvaluator {
    pub fn new(validator: Option<Arc<dyn IdentityValidator>>) -> Self {
        Self::with_config(validator, EvaluationConfig::default())
    }

    pub fn with_config(
        validator: Option<Arc<dyn IdentityValidator>>,
        config: EvaluationConfig,
    ) -> Self {
        Self { validator, config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Screen a single application and return the routing decision.
    ///
    /// Rules apply in order, first match wins: age gate, identity check,
    /// office-country check, then the tech-stack coverage verdict. Underage
    /// applicants are rejected before the identity validator is touched.
    pub fn evaluate(
        &self,
        application: &JobApplication,
    ) -> Result<ApplicationResult, EvaluationError> {
        let applicant = application
            .applicant
            .as_ref()
            .ok_or(EvaluationError::MissingApplicant)?;

        if applicant.age < self.config.minimum_age {
            debug!(age = applicant.age, "applicant below minimum age");
            return Ok(ApplicationResult::AutoRejected);
        }

        let validator = self
            .validator
            .as_deref()
            .ok_or(EvaluationError::ValidatorUnavailable)?;

        let stack_verdict = self.tech_stack_verdict(application);

        if applicant.age > self.config.detailed_validation_age {
            validator.set_validation_mode(ValidationMode::Detailed);
        }

        let identity_number = applicant.identity_number.as_deref().unwrap_or_default();
        if !validator.is_valid(identity_number) {
            debug!("identity verification failed, routing to HR");
            return Ok(ApplicationResult::TransferredToHr);
        }

        let country = validator.country_data_provider().country_data().country();
        if country != self.config.domestic_country {
            debug!(country, "applicant outside domestic offices, routing to CTO");
            return Ok(ApplicationResult::TransferredToCto);
        }

        Ok(stack_verdict)
    }

    /// Coverage of the reference skill set, by entry count alone.
    fn tech_stack_verdict(&self, application: &JobApplication) -> ApplicationResult {
        if application.tech_stack.is_empty() {
            return ApplicationResult::AutoRejected;
        }

        let ratio =
            application.tech_stack.len() as f32 / f32::from(self.config.reference_stack_size);
        if ratio > self.config.acceptance_ratio {
            ApplicationResult::AutoAccepted
        } else {
            ApplicationResult::AutoRejected
        }
    }
}

use std::sync::{Arc, Mutex};

use crate::screening::domain::{Applicant, JobApplication};
use crate::screening::evaluation::ApplicationEvaluator;
use crate::screening::identity::{
    CountryData, CountryDataProvider, IdentityValidator, ValidationMode,
};

pub(super) struct StaticCountryData {
    country: String,
}

impl CountryData for StaticCountryData {
    fn country(&self) -> &str {
        &self.country
    }
}

pub(super) struct StaticCountryProvider {
    data: StaticCountryData,
}

impl CountryDataProvider for StaticCountryProvider {
    fn country_data(&self) -> &dyn CountryData {
        &self.data
    }
}

/// Scripted stand-in for the remote identity service. Records every
/// `is_valid` call and the current validation mode so tests can assert both
/// the decision and the interactions behind it.
pub(super) struct ScriptedValidator {
    accepts: bool,
    provider: StaticCountryProvider,
    mode: Mutex<ValidationMode>,
    checked_numbers: Mutex<Vec<String>>,
}

impl ScriptedValidator {
    pub(super) fn new(accepts: bool, country: &str) -> Self {
        Self {
            accepts,
            provider: StaticCountryProvider {
                data: StaticCountryData {
                    country: country.to_string(),
                },
            },
            mode: Mutex::new(ValidationMode::Quick),
            checked_numbers: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn checked_numbers(&self) -> Vec<String> {
        self.checked_numbers
            .lock()
            .expect("validator mutex poisoned")
            .clone()
    }

    pub(super) fn identity_calls(&self) -> usize {
        self.checked_numbers
            .lock()
            .expect("validator mutex poisoned")
            .len()
    }
}

impl IdentityValidator for ScriptedValidator {
    fn is_valid(&self, identity_number: &str) -> bool {
        self.checked_numbers
            .lock()
            .expect("validator mutex poisoned")
            .push(identity_number.to_string());
        self.accepts
    }

    fn validation_mode(&self) -> ValidationMode {
        *self.mode.lock().expect("validator mutex poisoned")
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        *self.mode.lock().expect("validator mutex poisoned") = mode;
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        &self.provider
    }
}

pub(super) fn domestic_validator(accepts: bool) -> Arc<ScriptedValidator> {
    Arc::new(ScriptedValidator::new(accepts, "TURKEY"))
}

pub(super) fn evaluator_with(validator: Arc<ScriptedValidator>) -> ApplicationEvaluator {
    ApplicationEvaluator::new(Some(validator))
}

pub(super) fn applicant(age: u8) -> Applicant {
    Applicant {
        age,
        identity_number: Some("12345678901".to_string()),
    }
}

pub(super) fn application(age: u8, tech_stack: &[&str]) -> JobApplication {
    JobApplication {
        applicant: Some(applicant(age)),
        tech_stack: tech_stack.iter().map(|entry| entry.to_string()).collect(),
        years_of_experience: 3,
    }
}

pub(super) fn broad_stack() -> Vec<&'static str> {
    vec!["C#", "RabbitMQ", "Microservice", "Visual Studio", "Docker", "SQL"]
}

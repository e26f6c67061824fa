//! Application screening: domain model, identity capability, and the evaluator.

pub mod domain;
pub(crate) mod evaluation;
pub mod identity;


pub use domain::{Applicant, ApplicationResult, JobApplication};
pub use evaluation::{ApplicationEvaluator, EvaluationConfig, EvaluationError};
pub use identity::{CountryData, CountryDataProvider, IdentityValidator, ValidationMode};

//! Rule-based screening and routing for inbound job applications.
//!
//! The crate is a library-level decision function meant to be embedded in an
//! application-intake pipeline. A host constructs a [`JobApplication`], injects
//! an [`IdentityValidator`] capability for the external identity service, and
//! receives an [`ApplicationResult`] routing decision from
//! [`ApplicationEvaluator::evaluate`]. The evaluator performs no I/O of its
//! own; everything it needs from the outside world arrives through the
//! capability trait.

pub mod screening;

pub use screening::{
    Applicant, ApplicationEvaluator, ApplicationResult, CountryData, CountryDataProvider,
    EvaluationConfig, EvaluationError, IdentityValidator, JobApplication, ValidationMode,
};

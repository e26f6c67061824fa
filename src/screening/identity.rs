use serde::{Deserialize, Serialize};

/// Depth of the check performed by the identity service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    Detailed,
    #[default]
    Quick,
}

/// Country block attached to a validated identity.
///
/// The country is mandatory in this contract; implementations must resolve a
/// value for every lookup so the evaluator never has to handle its absence.
pub trait CountryData: Send + Sync {
    fn country(&self) -> &str;
}

/// Source of country data, nested one hop below the validator.
pub trait CountryDataProvider: Send + Sync {
    fn country_data(&self) -> &dyn CountryData;
}

/// External identity-verification capability injected into the evaluator.
///
/// Implementations are shared behind `Arc`, so the mode setter takes `&self`
/// and implementors provide their own interior mutability.
pub trait IdentityValidator: Send + Sync {
    /// Verify an identity number. Applications without one pass `""`.
    fn is_valid(&self, identity_number: &str) -> bool;

    fn validation_mode(&self) -> ValidationMode;

    fn set_validation_mode(&self, mode: ValidationMode);

    fn country_data_provider(&self) -> &dyn CountryDataProvider;
}

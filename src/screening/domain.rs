use serde::{Deserialize, Serialize};

/// The person behind a submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u8,
    /// National identity number as entered on the form; may be left blank.
    pub identity_number: Option<String>,
}

/// Inbound application form as captured by the host intake pipeline.
///
/// `years_of_experience` is collected on the form but does not participate in
/// any screening rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub applicant: Option<Applicant>,
    pub tech_stack: Vec<String>,
    pub years_of_experience: u8,
}

/// Terminal routing decision for a screened application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationResult {
    AutoRejected,
    AutoAccepted,
    TransferredToHr,
    TransferredToCto,
}

impl ApplicationResult {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationResult::AutoRejected => "auto_rejected",
            ApplicationResult::AutoAccepted => "auto_accepted",
            ApplicationResult::TransferredToHr => "transferred_to_hr",
            ApplicationResult::TransferredToCto => "transferred_to_cto",
        }
    }
}

use serde::{Deserialize, Serialize};

/// One extracurricular activity in the school catalogue.
///
/// The activity's name lives as the registry key, not here. `participants`
/// preserves signup order and never contains the same email twice; the
/// signup precondition enforces uniqueness, so no deduplication happens on
/// the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Displayed capacity. Not enforced: signups past this number succeed.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

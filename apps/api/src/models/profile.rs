use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Candidate profile evaluated against job postings. Read-only during a scoring run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::zero_on_invalid")]
    pub years_experience: u32,
    #[serde(default)]
    pub education: String,
    #[serde(default, deserialize_with = "lenient::zero_on_invalid")]
    pub project_count: u32,
}

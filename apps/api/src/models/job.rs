use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::lenient;

/// A job posting as held by the job repository. The scorer only reads it.
///
/// `education` and `salary` are display-only; they never influence the match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(deserialize_with = "lenient::job_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, alias = "skills")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(
        default,
        alias = "experience",
        deserialize_with = "lenient::zero_on_invalid"
    )]
    pub min_experience: u32,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Utc::now", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_active", alias = "isActive")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Request body for creating a posting. Id, timestamp and active flag are assigned on insert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, alias = "skills")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(
        default,
        alias = "experience",
        deserialize_with = "lenient::zero_on_invalid"
    )]
    pub min_experience: u32,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl NewJob {
    pub fn into_posting(self) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            department: self.department,
            required_skills: clean_list(self.required_skills),
            keywords: clean_list(self.keywords),
            min_experience: self.min_experience,
            education: self.education,
            salary: self.salary.filter(|s| !s.trim().is_empty()),
            description: self.description,
            created_at: Utc::now(),
            is_active: true,
        }
    }
}

/// Partial update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    #[serde(alias = "skills")]
    pub required_skills: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    #[serde(
        default,
        alias = "experience",
        deserialize_with = "lenient::optional_zero_on_invalid"
    )]
    pub min_experience: Option<u32>,
    pub education: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "isActive")]
    pub is_active: Option<bool>,
}

impl JobPatch {
    pub fn apply(self, job: &mut JobPosting) {
        if let Some(title) = self.title {
            job.title = title.trim().to_string();
        }
        if let Some(department) = self.department {
            job.department = department;
        }
        if let Some(skills) = self.required_skills {
            job.required_skills = clean_list(skills);
        }
        if let Some(keywords) = self.keywords {
            job.keywords = clean_list(keywords);
        }
        if let Some(min_experience) = self.min_experience {
            job.min_experience = min_experience;
        }
        if let Some(education) = self.education {
            job.education = education;
        }
        if let Some(salary) = self.salary {
            job.salary = Some(salary).filter(|s| !s.trim().is_empty());
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
    }
}

/// Trims entries and drops blanks, keeping the caller's spelling and order.
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

//! Match Scorer — compares a candidate profile against one job posting.
//!
//! Default: `RuleBasedScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so another backend can be swapped in
//! without touching handlers or ranking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillTable;
use crate::models::{JobPosting, Profile};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The four scored categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Experience,
    Education,
    Projects,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Skills,
        Category::Experience,
        Category::Education,
        Category::Projects,
    ];

    pub fn max_score(self) -> u32 {
        match self {
            Category::Skills => SKILLS_MAX,
            Category::Experience => EXPERIENCE_MAX,
            Category::Education => EDUCATION_MAX,
            Category::Projects => PROJECTS_MAX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Skills => "Skills Match",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Projects => "Projects & Achievements",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub score: u32,
    pub label: String,
}

impl CategoryBreakdown {
    pub fn new(category: Category, score: u32) -> Self {
        Self {
            score: score.min(category.max_score()),
            label: category.label().to_string(),
        }
    }
}

/// Per-category scores. The category set is closed, so this is a record, not a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub skills: CategoryBreakdown,
    pub experience: CategoryBreakdown,
    pub education: CategoryBreakdown,
    pub projects: CategoryBreakdown,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> &CategoryBreakdown {
        match category {
            Category::Skills => &self.skills,
            Category::Experience => &self.experience,
            Category::Education => &self.education,
            Category::Projects => &self.projects,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c).score).sum()
    }

    /// All four categories at zero.
    pub fn zeroed() -> Self {
        Self {
            skills: CategoryBreakdown::new(Category::Skills, 0),
            experience: CategoryBreakdown::new(Category::Experience, 0),
            education: CategoryBreakdown::new(Category::Education, 0),
            projects: CategoryBreakdown::new(Category::Projects, 0),
        }
    }
}

/// Human-readable explanation for one category. `suggestion` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    pub positive: bool,
    pub icon: String,
}

/// Score of one (profile, job) pair. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobPosting,
    pub match_score: u32, // 0 – 100
    pub breakdown: Breakdown,
    pub reasons: Vec<Reason>, // skills, experience, education, projects
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scoring backend. Must be total: every structurally valid input yields a result.
pub trait MatchScorer: Send + Sync {
    fn score(&self, profile: &Profile, job: &JobPosting) -> MatchResult;

    /// Short backend name, surfaced in responses for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedScorer
// ────────────────────────────────────────────────────────────────────────────

const SKILLS_MAX: u32 = 40;
const EXPERIENCE_MAX: u32 = 30;
const EDUCATION_MAX: u32 = 15;
const PROJECTS_MAX: u32 = 15;

const PENALTY_PER_MISSING_SKILL: u32 = 5;
const PENALTY_PER_MISSING_YEAR: u32 = 5;
const EDUCATION_FALLBACK: u32 = 8;
const PROJECTS_FALLBACK: u32 = 10;
const PROJECTS_THRESHOLD: u32 = 2;

const EDUCATION_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "degree", "diploma"];

/// Additive four-category scorer:
/// 1. Skills: 40 − 5 per missing canonical skill, floored at 0
/// 2. Experience: 30 when requirement met, else 30 − 5 per missing year, floored at 0
/// 3. Education: 15 if the profile mentions a degree keyword, else 8
/// 4. Projects: 15 with at least two projects, else 10
///
/// The job's own `education` text is not compared; it is display-only.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    pub skills: SkillTable,
}

impl RuleBasedScorer {
    pub fn new(skills: SkillTable) -> Self {
        Self { skills }
    }
}

impl MatchScorer for RuleBasedScorer {
    fn score(&self, profile: &Profile, job: &JobPosting) -> MatchResult {
        let (skills, skills_reason) = self.score_skills(profile, job);
        let (experience, experience_reason) = score_experience(profile, job);
        let (education, education_reason) = score_education(profile);
        let (projects, projects_reason) = score_projects(profile);

        let breakdown = Breakdown {
            skills: CategoryBreakdown::new(Category::Skills, skills),
            experience: CategoryBreakdown::new(Category::Experience, experience),
            education: CategoryBreakdown::new(Category::Education, education),
            projects: CategoryBreakdown::new(Category::Projects, projects),
        };
        let match_score = breakdown.total().clamp(0, 100);

        MatchResult {
            job: job.clone(),
            match_score,
            breakdown,
            reasons: vec![
                skills_reason,
                experience_reason,
                education_reason,
                projects_reason,
            ],
        }
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

impl RuleBasedScorer {
    fn score_skills(&self, profile: &Profile, job: &JobPosting) -> (u32, Reason) {
        let have: HashSet<String> = self.skills.canonical_set(&profile.skills).into_iter().collect();
        let missing: Vec<String> = self
            .skills
            .canonical_set(&job.required_skills)
            .into_iter()
            .filter(|skill| !have.contains(skill))
            .collect();

        let penalty = PENALTY_PER_MISSING_SKILL.saturating_mul(missing.len() as u32);
        let score = SKILLS_MAX.saturating_sub(penalty);

        if missing.is_empty() {
            return (
                score,
                Reason {
                    category: Category::Skills,
                    title: "All required skills present!".to_string(),
                    description:
                        "Your profile contains all the technical skills needed for this position"
                            .to_string(),
                    suggestion: "Consider highlighting these skills more prominently in your CV"
                        .to_string(),
                    positive: true,
                    icon: "check-circle".to_string(),
                },
            );
        }

        let mut reported = HashSet::new();
        let missing_spellings: Vec<&str> = job
            .required_skills
            .iter()
            .filter(|raw| {
                let canonical = self.skills.normalize(raw);
                missing.contains(&canonical) && reported.insert(canonical)
            })
            .map(String::as_str)
            .collect();

        let to_learn = missing
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" and ");

        (
            score,
            Reason {
                category: Category::Skills,
                title: format!("Missing {} key skills", missing.len()),
                description: format!("The job requires: {}", missing_spellings.join(", ")),
                suggestion: format!(
                    "Consider learning {to_learn} through online courses or projects"
                ),
                positive: false,
                icon: "code".to_string(),
            },
        )
    }
}

fn score_experience(profile: &Profile, job: &JobPosting) -> (u32, Reason) {
    let required = job.min_experience;
    let actual = profile.years_experience;

    if required <= actual {
        return (
            EXPERIENCE_MAX,
            Reason {
                category: Category::Experience,
                title: "Experience requirements met!".to_string(),
                description: format!(
                    "You meet or exceed the {required} years experience requirement (you have {actual})"
                ),
                suggestion: "Quantify your achievements to make your experience stand out"
                    .to_string(),
                positive: true,
                icon: "check-circle".to_string(),
            },
        );
    }

    let shortfall = required - actual;
    let score = EXPERIENCE_MAX.saturating_sub(PENALTY_PER_MISSING_YEAR.saturating_mul(shortfall));

    (
        score,
        Reason {
            category: Category::Experience,
            title: "Insufficient experience".to_string(),
            description: format!("The job requires {required} years, you have {actual}"),
            suggestion: format!(
                "Highlight your {actual} years of relevant experience and focus on achievements"
            ),
            positive: false,
            icon: "briefcase".to_string(),
        },
    )
}

/// Substring match on the profile's education text; the job side is ignored.
fn has_higher_education(education: &str) -> bool {
    let education = education.to_lowercase();
    EDUCATION_KEYWORDS.iter().any(|kw| education.contains(kw))
}

fn score_education(profile: &Profile) -> (u32, Reason) {
    if has_higher_education(&profile.education) {
        (
            EDUCATION_MAX,
            Reason {
                category: Category::Education,
                title: "Education requirements met!".to_string(),
                description: "Your educational background matches the job requirements"
                    .to_string(),
                suggestion: "Consider adding relevant coursework or academic projects".to_string(),
                positive: true,
                icon: "check-circle".to_string(),
            },
        )
    } else {
        (
            EDUCATION_FALLBACK,
            Reason {
                category: Category::Education,
                title: "Education requirements".to_string(),
                description: "The position may prefer candidates with formal degrees".to_string(),
                suggestion: "Highlight any certifications, online courses, or practical experience that demonstrates your knowledge".to_string(),
                positive: false,
                icon: "graduation-cap".to_string(),
            },
        )
    }
}

fn score_projects(profile: &Profile) -> (u32, Reason) {
    let count = profile.project_count;
    if count >= PROJECTS_THRESHOLD {
        (
            PROJECTS_MAX,
            Reason {
                category: Category::Projects,
                title: "Good project portfolio!".to_string(),
                description: format!("You have {count} quality projects listed"),
                suggestion: "Add metrics and outcomes to your project descriptions".to_string(),
                positive: true,
                icon: "check-circle".to_string(),
            },
        )
    } else {
        (
            PROJECTS_FALLBACK,
            Reason {
                category: Category::Projects,
                title: "Limited project portfolio".to_string(),
                description: format!("You have {count} projects listed"),
                suggestion:
                    "Add more personal or professional projects to demonstrate practical experience"
                        .to_string(),
                positive: false,
                icon: "tasks".to_string(),
            },
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewJob;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_profile() -> Profile {
        Profile {
            skills: strings(&["JavaScript", "HTML", "CSS", "React"]),
            years_experience: 2,
            education: "Bachelor in Computer Science".to_string(),
            project_count: 3,
        }
    }

    fn make_job(skills: &[&str], min_experience: u32) -> JobPosting {
        NewJob {
            title: "Frontend Developer".to_string(),
            department: "Engineering".to_string(),
            required_skills: strings(skills),
            min_experience,
            education: "Bachelor in Computer Science or related field".to_string(),
            ..Default::default()
        }
        .into_posting()
    }

    fn score(profile: &Profile, job: &JobPosting) -> MatchResult {
        RuleBasedScorer::default().score(profile, job)
    }

    #[test]
    fn test_senior_frontend_example_scores_75() {
        let job = make_job(&["JavaScript", "React", "TypeScript", "CSS", "HTML", "Redux"], 5);
        let result = score(&make_profile(), &job);

        assert_eq!(result.breakdown.skills.score, 30);
        assert_eq!(result.breakdown.experience.score, 15);
        assert_eq!(result.breakdown.education.score, 15);
        assert_eq!(result.breakdown.projects.score, 15);
        assert_eq!(result.match_score, 75);

        let skills_reason = &result.reasons[0];
        assert!(!skills_reason.positive);
        assert_eq!(skills_reason.title, "Missing 2 key skills");
        assert_eq!(skills_reason.description, "The job requires: TypeScript, Redux");
        assert!(skills_reason.suggestion.contains("typescript and redux"));
    }

    #[test]
    fn test_junior_web_example_scores_100() {
        let job = make_job(&["HTML", "CSS", "JavaScript", "React"], 1);
        let result = score(&make_profile(), &job);

        assert_eq!(result.breakdown.skills.score, 40);
        assert_eq!(result.breakdown.experience.score, 30);
        assert_eq!(result.match_score, 100);
        assert!(result.reasons.iter().all(|r| r.positive));
    }

    #[test]
    fn test_reasons_follow_category_order() {
        let result = score(&make_profile(), &make_job(&["Rust"], 10));
        let order: Vec<Category> = result.reasons.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_match_score_equals_breakdown_sum() {
        let profiles = [
            make_profile(),
            Profile::default(),
            Profile {
                skills: strings(&["Python"]),
                years_experience: 20,
                education: "Self-taught".to_string(),
                project_count: 1,
            },
        ];
        let jobs = [
            make_job(&[], 0),
            make_job(&["Go", "Rust", "C", "Zig", "Haskell", "OCaml", "Elixir", "Erlang", "Lisp"], 40),
            make_job(&["python", "SQL"], 3),
        ];
        for profile in &profiles {
            for job in &jobs {
                let result = score(profile, job);
                assert!(result.match_score <= 100);
                assert_eq!(result.match_score, result.breakdown.total());
                assert_eq!(result.reasons.len(), 4);
            }
        }
    }

    #[test]
    fn test_synonyms_count_as_present() {
        let job = make_job(&["ReactJS", "ES6", "CSS3", "HTML5"], 0);
        let result = score(&make_profile(), &job);
        assert_eq!(result.breakdown.skills.score, 40);
        assert!(result.reasons[0].positive);
    }

    #[test]
    fn test_duplicate_job_skills_count_once() {
        let job = make_job(&["TypeScript", "TS", "typescript", "Redux", "redux "], 0);
        let result = score(&make_profile(), &job);
        assert_eq!(result.breakdown.skills.score, 30);
        assert_eq!(result.reasons[0].title, "Missing 2 key skills");
        assert_eq!(result.reasons[0].description, "The job requires: TypeScript, Redux");
    }

    #[test]
    fn test_skills_score_floors_at_zero() {
        let job = make_job(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"], 0);
        let result = score(&Profile::default(), &job);
        assert_eq!(result.breakdown.skills.score, 0);
    }

    #[test]
    fn test_single_missing_skill_suggestion() {
        let result = score(&make_profile(), &make_job(&["React", "Redux"], 0));
        assert_eq!(
            result.reasons[0].suggestion,
            "Consider learning redux through online courses or projects"
        );
    }

    #[test]
    fn test_experience_is_monotonic_and_floored() {
        let profile = make_profile();
        let mut previous = u32::MAX;
        for min_experience in 0..15 {
            let result = score(&profile, &make_job(&[], min_experience));
            let exp = result.breakdown.experience.score;
            assert!(exp <= previous);
            if min_experience <= profile.years_experience {
                assert_eq!(exp, 30);
                assert!(result.reasons[1].positive);
            } else {
                assert!(!result.reasons[1].positive);
            }
            previous = exp;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_exceeding_experience_grants_no_bonus() {
        let profile = Profile {
            years_experience: 25,
            ..make_profile()
        };
        let result = score(&profile, &make_job(&[], 1));
        assert_eq!(result.breakdown.experience.score, 30);
    }

    #[test]
    fn test_education_without_keyword_scores_8() {
        let profile = Profile {
            education: "Coding bootcamp".to_string(),
            ..make_profile()
        };
        let result = score(&profile, &make_job(&[], 0));
        assert_eq!(result.breakdown.education.score, 8);
        assert!(!result.reasons[2].positive);
    }

    #[test]
    fn test_education_keyword_is_case_insensitive() {
        let profile = Profile {
            education: "PhD, Physics".to_string(),
            ..make_profile()
        };
        assert_eq!(score(&profile, &make_job(&[], 0)).breakdown.education.score, 15);
    }

    #[test]
    fn test_job_education_text_is_ignored() {
        let mut job = make_job(&[], 0);
        job.education = "PhD required".to_string();
        let profile = Profile {
            education: String::new(),
            ..make_profile()
        };
        assert_eq!(score(&profile, &job).breakdown.education.score, 8);
    }

    #[test]
    fn test_projects_threshold_is_two() {
        for (count, expected) in [(0, 10), (1, 10), (2, 15), (9, 15)] {
            let profile = Profile {
                project_count: count,
                ..make_profile()
            };
            let result = score(&profile, &make_job(&[], 0));
            assert_eq!(result.breakdown.projects.score, expected, "count {count}");
        }
    }

    #[test]
    fn test_custom_skill_table_is_used() {
        let table = SkillTable::from_groups(vec![(
            "go".to_string(),
            vec!["golang".to_string()],
        )]);
        let scorer = RuleBasedScorer::new(table);
        let profile = Profile {
            skills: strings(&["Golang"]),
            ..make_profile()
        };
        let result = scorer.score(&profile, &make_job(&["Go"], 0));
        assert_eq!(result.breakdown.skills.score, 40);
    }

    #[test]
    fn test_breakdown_labels() {
        let result = score(&make_profile(), &make_job(&[], 0));
        assert_eq!(result.breakdown.skills.label, "Skills Match");
        assert_eq!(result.breakdown.projects.label, "Projects & Achievements");
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(RuleBasedScorer::default().backend(), "rule_based");
    }
}

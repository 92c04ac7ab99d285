//! Ranking — scores active postings, filters by threshold, and aggregates breakdowns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scorer::{Breakdown, Category, CategoryBreakdown, MatchResult, MatchScorer};
use crate::models::{JobPosting, Profile};

/// Default minimum match score for a posting to be shown.
pub const DEFAULT_MIN_THRESHOLD: u32 = 50;

/// Ranked matches plus the context needed to explain an empty result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub matches: Vec<MatchResult>,
    /// Active postings scored before the threshold filter.
    pub active_jobs: usize,
    pub min_threshold: u32,
    pub best_match_score: Option<u32>,
    pub overall_breakdown: Breakdown,
    pub scorer_backend: String,
}

/// Scores every active posting and keeps those at or above `min_threshold`,
/// highest score first. Ties keep the input order of the postings.
pub fn rank(
    scorer: &dyn MatchScorer,
    profile: &Profile,
    jobs: &[JobPosting],
    min_threshold: u32,
) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = jobs
        .iter()
        .filter(|job| job.is_active)
        .map(|job| scorer.score(profile, job))
        .filter(|result| result.match_score >= min_threshold)
        .collect();

    // sort_by is stable, which gives the input-order tie-break.
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

/// Mean score per category across `results`, rounded to the nearest integer.
/// Every category is zero when `results` is empty.
pub fn average_breakdown(results: &[MatchResult]) -> Breakdown {
    if results.is_empty() {
        return Breakdown::zeroed();
    }

    let average = |category: Category| {
        let sum: u64 = results
            .iter()
            .map(|r| r.breakdown.get(category).score as u64)
            .sum();
        let mean = (sum as f64 / results.len() as f64).round() as u32;
        CategoryBreakdown::new(category, mean)
    };

    Breakdown {
        skills: average(Category::Skills),
        experience: average(Category::Experience),
        education: average(Category::Education),
        projects: average(Category::Projects),
    }
}

/// Runs `rank` and packages the result with its aggregate view.
pub fn summarize(
    scorer: &dyn MatchScorer,
    profile: &Profile,
    jobs: &[JobPosting],
    min_threshold: u32,
) -> MatchSummary {
    let active_jobs = jobs.iter().filter(|job| job.is_active).count();
    let matches = rank(scorer, profile, jobs, min_threshold);
    let overall_breakdown = average_breakdown(&matches);
    let best_match_score = matches.first().map(|m| m.match_score);

    debug!(
        "Scored {active_jobs} active jobs: {} at or above threshold {min_threshold}",
        matches.len()
    );

    MatchSummary {
        matches,
        active_jobs,
        min_threshold,
        best_match_score,
        overall_breakdown,
        scorer_backend: scorer.backend().to_string(),
    }
}

//! Usage analytics: analysed-profile count, active-job stats, recent best-match history.

pub mod handlers;

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::JobPosting;

/// Only the most recent match rates are kept.
pub const MATCH_RATE_HISTORY: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRateRecord {
    pub rate: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default, alias = "totalCVs")]
    pub total_cvs: u64,
    #[serde(default, alias = "totalJobs")]
    pub total_jobs: usize,
    /// Raw skill spelling → number of active postings requiring it.
    #[serde(default, alias = "skillsFrequency")]
    pub skills_frequency: BTreeMap<String, u32>,
    #[serde(default, alias = "matchRates")]
    pub match_rates: VecDeque<MatchRateRecord>,
}

impl Analytics {
    /// Records the best score of a match run that produced at least one match.
    pub fn record_analysis(&mut self, best_match_score: u32, at: DateTime<Utc>) {
        self.total_cvs += 1;
        self.match_rates.push_back(MatchRateRecord {
            rate: best_match_score,
            timestamp: at,
        });
        while self.match_rates.len() > MATCH_RATE_HISTORY {
            self.match_rates.pop_front();
        }
    }

    /// Recomputes job counts from the current active postings.
    pub fn refresh_job_stats(&mut self, active_jobs: &[JobPosting]) {
        self.total_jobs = active_jobs.len();
        let mut frequency = BTreeMap::new();
        for skill in active_jobs.iter().flat_map(|j| j.required_skills.iter()) {
            *frequency.entry(skill.clone()).or_insert(0) += 1;
        }
        self.skills_frequency = frequency;
    }

    /// Mean of the recorded match rates, rounded to the nearest integer; 0 with no history.
    pub fn average_match_rate(&self) -> u32 {
        if self.match_rates.is_empty() {
            return 0;
        }
        let sum: u64 = self.match_rates.iter().map(|r| r.rate as u64).sum();
        (sum as f64 / self.match_rates.len() as f64).round() as u32
    }

    /// Most frequently required skill. Equal counts resolve to the alphabetically first.
    pub fn top_skill(&self) -> Option<&str> {
        self.skills_frequency
            .iter()
            .max_by(|(a_skill, a_count), (b_skill, b_count)| {
                a_count.cmp(b_count).then_with(|| b_skill.cmp(a_skill))
            })
            .map(|(skill, _)| skill.as_str())
    }
}

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analytics::Analytics;
use crate::config::Config;
use crate::jobs::{InMemoryJobRepository, JobRepository};
use crate::matching::{MatchScorer, RuleBasedScorer};
use crate::models::JobPosting;
use crate::settings::Settings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job store. Default: InMemoryJobRepository.
    pub jobs: Arc<dyn JobRepository>,
    /// Pluggable scorer. Default: RuleBasedScorer with the built-in synonym table.
    pub scorer: Arc<dyn MatchScorer>,
    pub settings: Arc<RwLock<Settings>>,
    pub analytics: Arc<RwLock<Analytics>>,
    pub config: Config,
}

impl AppState {
    /// In-memory state seeded with `jobs`, default scorer, threshold from `config`.
    pub fn new(config: Config, jobs: Vec<JobPosting>) -> Self {
        let mut analytics = Analytics::default();
        let active: Vec<JobPosting> = jobs.iter().filter(|j| j.is_active).cloned().collect();
        analytics.refresh_job_stats(&active);

        Self {
            jobs: Arc::new(InMemoryJobRepository::new(jobs)),
            scorer: Arc::new(RuleBasedScorer::default()),
            settings: Arc::new(RwLock::new(Settings {
                min_match_threshold: config.min_match_threshold,
            })),
            analytics: Arc::new(RwLock::new(analytics)),
            config,
        }
    }
}

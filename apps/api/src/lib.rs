//! CV match service: deterministic, explainable scoring of a candidate profile
//! against job postings, plus the job, settings, and analytics collaborators around it.

pub mod analytics;
pub mod config;
pub mod errors;
pub mod jobs;
pub mod matching;
pub mod models;
pub mod routes;
pub mod settings;
pub mod state;
pub mod transfer;

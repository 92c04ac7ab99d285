// Match Scoring Engine
// Implements: skill normalization, four-category scoring with reasons, ranking and aggregation.
// Scoring is synchronous and pure; only the handlers touch shared state.

pub mod handlers;
pub mod ranking;
pub mod scorer;
pub mod skills;

pub use ranking::{average_breakdown, rank, summarize, MatchSummary, DEFAULT_MIN_THRESHOLD};
pub use scorer::{
    Breakdown, Category, CategoryBreakdown, MatchResult, MatchScorer, Reason, RuleBasedScorer,
};
pub use skills::SkillTable;

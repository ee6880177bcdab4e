//! Consent Match - compatibility scoring and ranking for a consent-focused dating app
//!
//! Scores a candidate profile against a subject profile from five weighted factors
//! (shared interests, orientation fit, comfort level, verification, distance) and
//! ranks candidate pools by the resulting 0-100 score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, calculate_compatibility, haversine_distance};
pub use crate::models::{
    CompatibilityScore, DiscoveryFilters, DiscoveryQuery, RankedMatch, ScoreBreakdown,
    ScoringWeights, UserProfile, DEFAULT_MIN_COMPATIBILITY_SCORE,
};

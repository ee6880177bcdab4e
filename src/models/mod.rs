// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Attraction, BoundingBox, ComfortLevel, CompatibilityScore, DiscoveryFilters, DiscoveryQuery,
    LocationRadius, Orientation, RankedMatch, ScoreBreakdown, ScoreComponents, ScoringWeights,
    UserProfile, DEFAULT_AGE_RANGE, DEFAULT_MIN_COMPATIBILITY_SCORE,
};
pub use requests::{CompatibilityRequest, RankMatchesRequest};
pub use responses::{CompatibilityResponse, ErrorResponse, HealthResponse, RankMatchesResponse};

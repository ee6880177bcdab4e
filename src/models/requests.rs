use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{DiscoveryFilters, UserProfile};

/// Request to score a single pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(nested)]
    pub subject: UserProfile,
    #[validate(nested)]
    pub candidate: UserProfile,
}

/// Request to rank a pool of candidates for a subject
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[validate(nested)]
    pub subject: UserProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<UserProfile>,
    #[validate(range(max = 100))]
    #[serde(alias = "min_score", rename = "minScore", default)]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(alias = "exclude_user_ids", rename = "excludeUserIds", default)]
    pub exclude_user_ids: Vec<String>,
    #[serde(default)]
    pub filters: Option<DiscoveryFilters>,
}

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Default minimum total score a candidate needs to be ranked
pub const DEFAULT_MIN_COMPATIBILITY_SCORE: u8 = 30;

/// Declared sexual orientation of a profile
///
/// Parsed case-insensitively. Labels outside the known set are kept verbatim in
/// `Unrecognized` and carry no attraction pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orientation {
    Heterosexual,
    Homosexual,
    Bisexual,
    Asexual,
    Pansexual,
    Unrecognized(String),
}

/// Which genders an orientation is attracted to, relative to one's own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attraction {
    OppositeGender,
    SameGender,
    Any,
}

impl Orientation {
    pub fn attraction(&self) -> Option<Attraction> {
        match self {
            Orientation::Heterosexual => Some(Attraction::OppositeGender),
            Orientation::Homosexual => Some(Attraction::SameGender),
            Orientation::Bisexual | Orientation::Asexual | Orientation::Pansexual => {
                Some(Attraction::Any)
            }
            Orientation::Unrecognized(_) => None,
        }
    }

    /// Whether this orientation is drawn to someone given whether they share a gender
    pub fn is_attracted_to(&self, same_gender: bool) -> bool {
        match self.attraction() {
            Some(Attraction::Any) => true,
            Some(Attraction::OppositeGender) => !same_gender,
            Some(Attraction::SameGender) => same_gender,
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Orientation::Heterosexual => "Heterosexual",
            Orientation::Homosexual => "Homosexual",
            Orientation::Bisexual => "Bisexual",
            Orientation::Asexual => "Asexual",
            Orientation::Pansexual => "Pansexual",
            Orientation::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Orientation {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "heterosexual" => Orientation::Heterosexual,
            "homosexual" => Orientation::Homosexual,
            "bisexual" => Orientation::Bisexual,
            "asexual" => Orientation::Asexual,
            "pansexual" => Orientation::Pansexual,
            _ => Orientation::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Orientation {
    fn from(value: String) -> Self {
        Orientation::from(value.as_str())
    }
}

impl From<Orientation> for String {
    fn from(value: Orientation) -> Self {
        match value {
            Orientation::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ceiling on physical intimacy a user is willing to consider
///
/// Ordered `ChatOnly < MakeOut < Sex`. Labels must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComfortLevel {
    ChatOnly,
    MakeOut,
    Sex,
    Unrecognized(String),
}

impl ComfortLevel {
    /// Position in the intimacy ordering, `None` for unrecognized labels
    pub fn rank(&self) -> Option<u8> {
        match self {
            ComfortLevel::ChatOnly => Some(0),
            ComfortLevel::MakeOut => Some(1),
            ComfortLevel::Sex => Some(2),
            ComfortLevel::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComfortLevel::ChatOnly => "chat only",
            ComfortLevel::MakeOut => "make-out",
            ComfortLevel::Sex => "sex",
            ComfortLevel::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for ComfortLevel {
    fn from(value: &str) -> Self {
        match value {
            "chat only" => ComfortLevel::ChatOnly,
            "make-out" => ComfortLevel::MakeOut,
            "sex" => ComfortLevel::Sex,
            _ => ComfortLevel::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for ComfortLevel {
    fn from(value: String) -> Self {
        ComfortLevel::from(value.as_str())
    }
}

impl From<ComfortLevel> for String {
    fn from(value: ComfortLevel) -> Self {
        match value {
            ComfortLevel::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred search radius label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationRadius {
    Km5,
    Km10,
    Km25,
    Km50,
    Km100,
    Anywhere,
    Unrecognized(String),
}

impl LocationRadius {
    /// Radius in kilometers; unknown labels fall back to 50 km
    pub fn km(&self) -> f64 {
        match self {
            LocationRadius::Km5 => 5.0,
            LocationRadius::Km10 => 10.0,
            LocationRadius::Km25 => 25.0,
            LocationRadius::Km50 => 50.0,
            LocationRadius::Km100 => 100.0,
            LocationRadius::Anywhere => 10_000.0,
            LocationRadius::Unrecognized(_) => 50.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LocationRadius::Km5 => "5km",
            LocationRadius::Km10 => "10km",
            LocationRadius::Km25 => "25km",
            LocationRadius::Km50 => "50km",
            LocationRadius::Km100 => "100km",
            LocationRadius::Anywhere => "anywhere",
            LocationRadius::Unrecognized(raw) => raw,
        }
    }
}

impl Default for LocationRadius {
    fn default() -> Self {
        LocationRadius::Km50
    }
}

impl From<&str> for LocationRadius {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "5km" => LocationRadius::Km5,
            "10km" => LocationRadius::Km10,
            "25km" => LocationRadius::Km25,
            "50km" => LocationRadius::Km50,
            "100km" => LocationRadius::Km100,
            "anywhere" => LocationRadius::Anywhere,
            _ => LocationRadius::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for LocationRadius {
    fn from(value: String) -> Self {
        LocationRadius::from(value.as_str())
    }
}

impl From<LocationRadius> for String {
    fn from(value: LocationRadius) -> Self {
        match value {
            LocationRadius::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LocationRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as supplied by the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(length(min = 1))]
    pub id: String,
    pub age: u16,
    pub gender: String,
    pub sexual_orientation: Orientation,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub face_type: String,
    #[serde(default)]
    pub sexual_interests: Vec<String>,
    #[serde(default)]
    pub desired_partner_physical: String,
    pub comfort_level: ComfortLevel,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location_radius: LocationRadius,
    #[serde(default)]
    pub is_verified: bool,
}

impl UserProfile {
    /// Coordinates when both latitude and longitude are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Case-insensitive gender comparison
    pub fn shares_gender_with(&self, other: &UserProfile) -> bool {
        self.gender.to_lowercase() == other.gender.to_lowercase()
    }
}

/// Maximum points each scoring factor can contribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub interests: f64,
    pub orientation: f64,
    pub comfort: f64,
    pub verification: f64,
    pub distance: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.interests + self.orientation + self.comfort + self.verification + self.distance
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 30.0,
            orientation: 25.0,
            comfort: 20.0,
            verification: 15.0,
            distance: 10.0,
        }
    }
}

/// Unrounded sub-scores for a subject/candidate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    pub interest_match: f64,
    pub orientation_match: f64,
    pub comfort_level_alignment: f64,
    pub verification_bonus: f64,
    pub distance_factor: f64,
}

impl ScoreComponents {
    pub fn sum(&self) -> f64 {
        self.interest_match
            + self.orientation_match
            + self.comfort_level_alignment
            + self.verification_bonus
            + self.distance_factor
    }
}

/// Per-factor scores, each rounded on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub interest_match: u8,
    pub orientation_match: u8,
    pub comfort_level_alignment: u8,
    pub verification_bonus: u8,
    pub distance_factor: u8,
}

/// Compatibility of a candidate from the subject's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub total_score: u8,
    pub breakdown: ScoreBreakdown,
}

impl From<ScoreComponents> for CompatibilityScore {
    fn from(components: ScoreComponents) -> Self {
        // Weights are non-negative, so only the upper bound needs clamping
        let total = components.sum().min(100.0).round();

        Self {
            total_score: total as u8,
            breakdown: ScoreBreakdown {
                interest_match: round_points(components.interest_match),
                orientation_match: round_points(components.orientation_match),
                comfort_level_alignment: round_points(components.comfort_level_alignment),
                verification_bonus: round_points(components.verification_bonus),
                distance_factor: round_points(components.distance_factor),
            },
        }
    }
}

#[inline]
fn round_points(value: f64) -> u8 {
    value.round().clamp(0.0, u8::MAX as f64) as u8
}

/// Candidate profile annotated with its compatibility score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub compatibility_score: CompatibilityScore,
    #[serde(default)]
    pub shared_interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Hard filters a user can set on the discovery feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryFilters {
    pub age_range: (u16, u16),
    pub sexual_interests: Vec<String>,
    #[serde(rename = "comfortLevel")]
    pub comfort_levels: Vec<ComfortLevel>,
    pub verified_only: bool,
    pub location_radius: LocationRadius,
    pub body_types: Vec<String>,
    pub face_types: Vec<String>,
}

pub const DEFAULT_AGE_RANGE: (u16, u16) = (18, 65);

impl Default for DiscoveryFilters {
    fn default() -> Self {
        Self {
            age_range: DEFAULT_AGE_RANGE,
            sexual_interests: Vec::new(),
            comfort_levels: Vec::new(),
            verified_only: false,
            location_radius: LocationRadius::default(),
            body_types: Vec::new(),
            face_types: Vec::new(),
        }
    }
}

impl DiscoveryFilters {
    /// Number of filter categories that differ from their defaults
    pub fn active_filter_count(&self) -> usize {
        [
            self.age_range != DEFAULT_AGE_RANGE,
            !self.sexual_interests.is_empty(),
            !self.comfort_levels.is_empty(),
            self.verified_only,
            self.location_radius != LocationRadius::default(),
            !self.body_types.is_empty(),
            !self.face_types.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

/// Parameters for a filtered discovery run
#[derive(Debug, Clone)]
pub struct DiscoveryQuery {
    pub filters: Option<DiscoveryFilters>,
    pub exclude_user_ids: Vec<String>,
    pub min_score: u8,
    pub limit: usize,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            filters: None,
            exclude_user_ids: Vec::new(),
            min_score: DEFAULT_MIN_COMPATIBILITY_SCORE,
            limit: 20,
        }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

use crate::models::{ComfortLevel, CompatibilityScore, ScoreComponents, ScoringWeights, UserProfile};
use crate::core::distance::profile_distance;

/// Calculate the compatibility (0-100) of `candidate` from `subject`'s point of view
///
/// Scoring formula with the default weights:
/// score = (
///     interest_match          # 0-30, shared interests over the subject's interests
///   + orientation_match       # 0-25, 12.5 per side attracted to the other
///   + comfort_level_alignment # 10-20, closer comfort levels score higher
///   + verification_bonus      # 0-15, 7.5 per verified profile
///   + distance_factor         # 0-10, linear falloff inside the subject's radius
/// )
///
/// Interest and distance terms use only the subject's interests and radius, so
/// swapping the arguments can change the result.
pub fn calculate_compatibility(
    subject: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
) -> CompatibilityScore {
    CompatibilityScore::from(score_components(subject, candidate, weights))
}

/// Unrounded sub-scores behind [`calculate_compatibility`]
pub fn score_components(
    subject: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
) -> ScoreComponents {
    ScoreComponents {
        interest_match: interest_match(subject, candidate, weights.interests),
        orientation_match: orientation_match(subject, candidate, weights.orientation),
        comfort_level_alignment: comfort_level_alignment(
            &subject.comfort_level,
            &candidate.comfort_level,
            weights.comfort,
        ),
        verification_bonus: verification_bonus(
            subject.is_verified,
            candidate.is_verified,
            weights.verification,
        ),
        distance_factor: distance_factor(subject, candidate, weights.distance),
    }
}

/// Subject interests that the candidate also lists, in subject order
pub fn shared_interests(subject: &UserProfile, candidate: &UserProfile) -> Vec<String> {
    subject
        .sexual_interests
        .iter()
        .filter(|interest| candidate.sexual_interests.contains(interest))
        .cloned()
        .collect()
}

/// Share of the subject's interests found in the candidate's
///
/// An empty subject interest list scores half the weight.
#[inline]
pub fn interest_match(subject: &UserProfile, candidate: &UserProfile, weight: f64) -> f64 {
    if subject.sexual_interests.is_empty() {
        return weight / 2.0;
    }

    let common = subject
        .sexual_interests
        .iter()
        .filter(|interest| candidate.sexual_interests.contains(interest))
        .count();

    (common as f64 / subject.sexual_interests.len() as f64) * weight
}

/// Half the weight for each side whose orientation admits the other's gender
#[inline]
pub fn orientation_match(a: &UserProfile, b: &UserProfile, weight: f64) -> f64 {
    let same_gender = a.shares_gender_with(b);
    let per_side = weight / 2.0;

    let mut score = 0.0;
    if a.sexual_orientation.is_attracted_to(same_gender) {
        score += per_side;
    }
    if b.sexual_orientation.is_attracted_to(same_gender) {
        score += per_side;
    }
    score
}

/// Full weight for equal comfort levels, minus a quarter per step, floored at half
///
/// Any unrecognized level yields half the weight.
#[inline]
pub fn comfort_level_alignment(a: &ComfortLevel, b: &ComfortLevel, weight: f64) -> f64 {
    let (Some(level_a), Some(level_b)) = (a.rank(), b.rank()) else {
        return weight / 2.0;
    };

    if level_a == level_b {
        return weight;
    }

    let difference = level_a.abs_diff(level_b) as f64;
    (weight - difference * weight / 4.0).max(weight / 2.0)
}

#[inline]
pub fn verification_bonus(a_verified: bool, b_verified: bool, weight: f64) -> f64 {
    match (a_verified, b_verified) {
        (true, true) => weight,
        (true, false) | (false, true) => weight / 2.0,
        (false, false) => 0.0,
    }
}

/// Linear falloff of the candidate's distance within the subject's radius
///
/// Half the weight when either side lacks coordinates, zero outside the radius.
#[inline]
pub fn distance_factor(subject: &UserProfile, candidate: &UserProfile, weight: f64) -> f64 {
    let Some(distance_km) = profile_distance(subject, candidate) else {
        return weight / 2.0;
    };

    let max_distance_km = subject.location_radius.km();
    if distance_km > max_distance_km {
        return 0.0;
    }

    (weight * (1.0 - distance_km / max_distance_km)).max(0.0)
}

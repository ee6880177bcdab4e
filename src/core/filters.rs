use crate::models::{DiscoveryFilters, UserProfile};
use crate::core::distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};

/// Check if a candidate passes every discovery filter the subject has set
///
/// This is the hard pre-filter stage that runs before scoring.
#[inline]
pub fn matches_filters(
    subject: &UserProfile,
    candidate: &UserProfile,
    filters: &DiscoveryFilters,
) -> bool {
    within_age_range(candidate, filters)
        && shares_filtered_interest(candidate, filters)
        && accepts_comfort_level(candidate, filters)
        && (!filters.verified_only || candidate.is_verified)
        && matches_listed(&candidate.body_type, &filters.body_types)
        && matches_listed(&candidate.face_type, &filters.face_types)
        && within_filter_radius(subject, candidate, filters)
}

#[inline]
fn within_age_range(candidate: &UserProfile, filters: &DiscoveryFilters) -> bool {
    let (min_age, max_age) = filters.age_range;
    candidate.age >= min_age && candidate.age <= max_age
}

/// At least one of the filtered interests must appear on the candidate
#[inline]
fn shares_filtered_interest(candidate: &UserProfile, filters: &DiscoveryFilters) -> bool {
    filters.sexual_interests.is_empty()
        || filters
            .sexual_interests
            .iter()
            .any(|interest| candidate.sexual_interests.contains(interest))
}

#[inline]
fn accepts_comfort_level(candidate: &UserProfile, filters: &DiscoveryFilters) -> bool {
    filters.comfort_levels.is_empty() || filters.comfort_levels.contains(&candidate.comfort_level)
}

#[inline]
fn matches_listed(value: &str, allowed: &[String]) -> bool {
    allowed.is_empty() || allowed.iter().any(|option| option == value)
}

/// Candidates without coordinates are kept, since their distance is unknown
fn within_filter_radius(
    subject: &UserProfile,
    candidate: &UserProfile,
    filters: &DiscoveryFilters,
) -> bool {
    let (Some((lat, lon)), Some((cand_lat, cand_lon))) =
        (subject.coordinates(), candidate.coordinates())
    else {
        return true;
    };

    let radius_km = filters.location_radius.km();
    // The box is only a shortcut; it cannot express a range crossing the antimeridian
    let bbox = calculate_bounding_box(lat, lon, radius_km);
    let wraps = bbox.min_lon < -180.0 || bbox.max_lon > 180.0;
    if !wraps && !is_within_bounding_box(cand_lat, cand_lon, &bbox) {
        return false;
    }

    haversine_distance(lat, lon, cand_lat, cand_lon) <= radius_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComfortLevel, LocationRadius, Orientation};

    fn create_test_profile(age: u16, lat: Option<f64>, lon: Option<f64>) -> UserProfile {
        UserProfile {
            id: "test_user".to_string(),
            age,
            gender: "Female".to_string(),
            sexual_orientation: Orientation::Bisexual,
            body_type: "Curvy".to_string(),
            face_type: "Round".to_string(),
            sexual_interests: vec!["Cuddling".to_string(), "Kissing".to_string()],
            desired_partner_physical: String::new(),
            comfort_level: ComfortLevel::MakeOut,
            latitude: lat,
            longitude: lon,
            location_radius: LocationRadius::Km50,
            is_verified: false,
        }
    }

    fn nyc_subject() -> UserProfile {
        create_test_profile(30, Some(40.7128), Some(-74.0060))
    }

    #[test]
    fn test_default_filters_pass_nearby_candidate() {
        let candidate = create_test_profile(25, Some(40.72), Some(-74.01));
        assert!(matches_filters(&nyc_subject(), &candidate, &DiscoveryFilters::default()));
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let filters = DiscoveryFilters { age_range: (25, 35), ..Default::default() };

        assert!(matches_filters(&nyc_subject(), &create_test_profile(25, None, None), &filters));
        assert!(matches_filters(&nyc_subject(), &create_test_profile(35, None, None), &filters));
        assert!(!matches_filters(&nyc_subject(), &create_test_profile(36, None, None), &filters));
    }

    #[test]
    fn test_interest_filter_needs_one_overlap() {
        let candidate = create_test_profile(25, None, None);
        let mut filters = DiscoveryFilters {
            sexual_interests: vec!["Roleplay".to_string(), "Kissing".to_string()],
            ..Default::default()
        };
        assert!(matches_filters(&nyc_subject(), &candidate, &filters));

        filters.sexual_interests = vec!["Roleplay".to_string()];
        assert!(!matches_filters(&nyc_subject(), &candidate, &filters));
    }

    #[test]
    fn test_comfort_and_verification_filters() {
        let mut candidate = create_test_profile(25, None, None);
        let filters = DiscoveryFilters {
            comfort_levels: vec![ComfortLevel::ChatOnly],
            ..Default::default()
        };
        assert!(!matches_filters(&nyc_subject(), &candidate, &filters));

        let filters = DiscoveryFilters { verified_only: true, ..Default::default() };
        assert!(!matches_filters(&nyc_subject(), &candidate, &filters));
        candidate.is_verified = true;
        assert!(matches_filters(&nyc_subject(), &candidate, &filters));
    }

    #[test]
    fn test_body_and_face_type_filters() {
        let candidate = create_test_profile(25, None, None);
        let filters = DiscoveryFilters {
            body_types: vec!["Curvy".to_string(), "Slim".to_string()],
            face_types: vec!["Oval".to_string()],
            ..Default::default()
        };
        assert!(!matches_filters(&nyc_subject(), &candidate, &filters));
    }

    #[test]
    fn test_radius_filter() {
        let filters = DiscoveryFilters { location_radius: LocationRadius::Km10, ..Default::default() };

        // ~90 km north
        let far = create_test_profile(25, Some(41.5), Some(-74.0));
        assert!(!matches_filters(&nyc_subject(), &far, &filters));

        let unknown = create_test_profile(25, None, None);
        assert!(matches_filters(&nyc_subject(), &unknown, &filters));
    }

    #[test]
    fn test_radius_filter_across_antimeridian() {
        // ~22 km apart on either side of 180°
        let subject = create_test_profile(30, Some(0.0), Some(179.9));
        let candidate = create_test_profile(25, Some(0.0), Some(-179.9));
        assert!(matches_filters(&subject, &candidate, &DiscoveryFilters::default()));

        let far = create_test_profile(25, Some(0.0), Some(-178.0));
        assert!(!matches_filters(&subject, &far, &DiscoveryFilters::default()));
    }
}

use crate::models::{
    CompatibilityScore, DiscoveryQuery, RankedMatch, ScoringWeights, UserProfile,
};
use crate::core::{
    distance::profile_distance,
    filters::matches_filters,
    scoring::{calculate_compatibility, shared_interests},
};

/// Result of a discovery run
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Stateless scorer and ranker, shareable across threads
///
/// # Discovery pipeline
/// 1. Drop the subject and excluded ids
/// 2. Discovery filters
/// 3. Scoring and minimum-score cut
/// 4. Ranking and limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn calculate_compatibility(
        &self,
        subject: &UserProfile,
        candidate: &UserProfile,
    ) -> CompatibilityScore {
        calculate_compatibility(subject, candidate, &self.weights)
    }

    /// Score every candidate against the subject, keep those scoring at least
    /// `min_score`, and order them by descending total score
    ///
    /// The sort is stable: candidates with equal totals keep their input order.
    pub fn rank_potential_matches<I>(
        &self,
        subject: &UserProfile,
        candidates: I,
        min_score: u8,
    ) -> Vec<RankedMatch>
    where
        I: IntoIterator<Item = UserProfile>,
    {
        let mut ranked: Vec<RankedMatch> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let score = self.calculate_compatibility(subject, &candidate);
                if score.total_score < min_score {
                    return None;
                }

                Some(RankedMatch {
                    shared_interests: shared_interests(subject, &candidate),
                    distance_km: profile_distance(subject, &candidate),
                    compatibility_score: score,
                    profile: candidate,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.compatibility_score
                .total_score
                .cmp(&a.compatibility_score.total_score)
        });

        ranked
    }

    /// Run the full discovery pipeline for a subject
    ///
    /// # Arguments
    /// * `subject` - The user matches are ranked for
    /// * `candidates` - Candidate pool from the profile store
    /// * `query` - Filters, exclusions, minimum score and result limit
    pub fn find_matches(
        &self,
        subject: &UserProfile,
        candidates: Vec<UserProfile>,
        query: &DiscoveryQuery,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let eligible = candidates
            .into_iter()
            .filter(|candidate| candidate.id != subject.id)
            .filter(|candidate| !query.exclude_user_ids.contains(&candidate.id))
            .filter(|candidate| match &query.filters {
                Some(filters) => matches_filters(subject, candidate, filters),
                None => true,
            });

        let mut matches = self.rank_potential_matches(subject, eligible, query.min_score);
        matches.truncate(query.limit);

        tracing::debug!(
            subject_id = %subject.id,
            total_candidates,
            returned = matches.len(),
            "ranked discovery candidates"
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComfortLevel, DiscoveryFilters, LocationRadius, Orientation};

    fn create_candidate(id: &str, gender: &str, interests: &[&str], verified: bool) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            age: 28,
            gender: gender.to_string(),
            sexual_orientation: Orientation::Heterosexual,
            body_type: "Average".to_string(),
            face_type: "Oval".to_string(),
            sexual_interests: interests.iter().map(|i| i.to_string()).collect(),
            desired_partner_physical: String::new(),
            comfort_level: ComfortLevel::MakeOut,
            latitude: None,
            longitude: None,
            location_radius: LocationRadius::Km50,
            is_verified: verified,
        }
    }

    fn create_subject() -> UserProfile {
        create_candidate("current_user", "Female", &["Vanilla", "Roleplay"], true)
    }

    #[test]
    fn test_rank_filters_below_min_score() {
        let matcher = Matcher::with_default_weights();
        let subject = create_subject();

        let candidates = vec![
            // 0 + 0 + 20 + 7.5 + 5 = 32.5
            create_candidate("same_gender", "Female", &[], false),
            // 15 + 25 + 20 + 15 + 5 = 80
            create_candidate("strong", "Male", &["Vanilla"], true),
            // 0 + 0 + 10 + 7.5 + 5 = 22.5
            UserProfile {
                comfort_level: ComfortLevel::from("unknown"),
                ..create_candidate("weak", "Female", &[], false)
            },
        ];

        let ranked = matcher.rank_potential_matches(&subject, candidates, 30);

        let ids: Vec<&str> = ranked.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["strong", "same_gender"]);
        assert_eq!(ranked[0].compatibility_score.total_score, 80);
        assert_eq!(ranked[0].shared_interests, vec!["Vanilla".to_string()]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let subject = create_subject();

        let candidates: Vec<UserProfile> = ["a", "b", "c"]
            .iter()
            .map(|id| create_candidate(id, "Male", &["Roleplay"], false))
            .collect();

        let ranked = matcher.rank_potential_matches(&subject, candidates, 0);
        let ids: Vec<&str> = ranked.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_empty_pool() {
        let matcher = Matcher::with_default_weights();
        assert!(matcher.rank_potential_matches(&create_subject(), Vec::new(), 30).is_empty());
    }

    #[test]
    fn test_rank_all_below_min_score() {
        let matcher = Matcher::with_default_weights();
        let subject = create_subject();

        // Best total here is 73, so nothing clears 74
        let candidates = vec![
            create_candidate("a", "Male", &["Roleplay"], false),
            create_candidate("b", "Female", &[], false),
        ];

        assert!(matcher.rank_potential_matches(&subject, candidates, 74).is_empty());
    }

    #[test]
    fn test_find_matches_excludes_subject_and_ids() {
        let matcher = Matcher::with_default_weights();
        let subject = create_subject();

        let candidates = vec![
            create_subject(),
            create_candidate("seen", "Male", &["Vanilla"], true),
            create_candidate("fresh", "Male", &["Vanilla"], true),
        ];
        let query = DiscoveryQuery {
            exclude_user_ids: vec!["seen".to_string()],
            ..Default::default()
        };

        let result = matcher.find_matches(&subject, candidates, &query);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.id, "fresh");
    }

    #[test]
    fn test_find_matches_applies_filters_and_limit() {
        let matcher = Matcher::with_default_weights();
        let subject = create_subject();

        let candidates: Vec<UserProfile> = (0..10)
            .map(|i| create_candidate(&i.to_string(), "Male", &["Vanilla"], i % 2 == 0))
            .collect();
        let query = DiscoveryQuery {
            filters: Some(DiscoveryFilters { verified_only: true, ..Default::default() }),
            limit: 3,
            ..Default::default()
        };

        let result = matcher.find_matches(&subject, candidates, &query);

        assert_eq!(result.matches.len(), 3);
        assert!(result.matches.iter().all(|m| m.profile.is_verified));
    }
}

/// Boost for a chunk whose type is exactly one of the relevant types.
pub const EXACT_MATCH_BOOST: f64 = 2.0;
/// Boost when the chunk type and a relevant type contain one another.
pub const PARTIAL_MATCH_BOOST: f64 = 1.5;
/// Penalty for chunk types unrelated to an active relevance profile.
pub const MISMATCH_BOOST: f64 = 0.8;
pub const NEUTRAL_BOOST: f64 = 1.0;

/// Multiplicative boost for a chunk type against a relevance profile.
///
/// Tiers, first applicable wins:
/// - empty profile: neutral (1.0)
/// - exact member: 2.0
/// - substring either way with any member: 1.5
/// - otherwise: 0.8
pub fn type_boost(chunk_type: &str, relevant_types: &[&str]) -> f64 {
    if relevant_types.is_empty() {
        return NEUTRAL_BOOST;
    }

    if relevant_types.iter().any(|rt| *rt == chunk_type) {
        return EXACT_MATCH_BOOST;
    }

    let partial = relevant_types
        .iter()
        .any(|rt| rt.contains(chunk_type) || chunk_type.contains(rt));
    if partial {
        PARTIAL_MATCH_BOOST
    } else {
        MISMATCH_BOOST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBLIGATION: &[&str] = &["obligations_clause", "liability_clause", "covenant"];

    #[test]
    fn test_empty_profile_is_neutral() {
        assert_eq!(type_boost("anything", &[]), 1.0);
        assert_eq!(type_boost("unknown", &[]), 1.0);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(type_boost("obligations_clause", OBLIGATION), 2.0);
    }

    #[test]
    fn test_chunk_type_inside_relevant_type() {
        // "clause" is a substring of "obligations_clause"
        assert_eq!(type_boost("clause", OBLIGATION), 1.5);
        assert_eq!(type_boost("obligations", OBLIGATION), 1.5);
    }

    #[test]
    fn test_relevant_type_inside_chunk_type() {
        assert_eq!(type_boost("covenant_section", OBLIGATION), 1.5);
    }

    #[test]
    fn test_shared_suffix_is_not_a_partial_match() {
        // Both end in "_clause" but neither contains the other.
        assert_eq!(type_boost("termination_clause", OBLIGATION), 0.8);
    }

    #[test]
    fn test_mismatch_penalty() {
        assert_eq!(type_boost("unknown", OBLIGATION), 0.8);
        assert_eq!(type_boost("vitals", OBLIGATION), 0.8);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(type_boost("Covenant", OBLIGATION), 0.8);
    }
}

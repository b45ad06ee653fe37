use crate::models::{Recommendation, Severity, Tier};

/// Scores at or above this are too similar to prior work.
pub const NOT_RECOMMENDED_FLOOR: f64 = 85.0;

/// Scores at or above this (but below the rejection floor) need human review.
pub const NEUTRAL_FLOOR: f64 = 50.0;

/// Maps a matching score to a go/no-go verdict. Both boundaries are
/// inclusive on the upper tier: 85 rejects, 50 is neutral. There is no lower
/// clamp, so negative scores come out Recommended. Total for any finite
/// input; callers must not pass NaN.
pub fn classify(score: f64) -> Recommendation {
    if score >= NOT_RECOMMENDED_FLOOR {
        Recommendation {
            tier: Tier::NotRecommended,
            severity: Severity::Danger,
            message: "Not Recommended: Too Similar",
        }
    } else if score >= NEUTRAL_FLOOR {
        Recommendation {
            tier: Tier::Neutral,
            severity: Severity::Warning,
            message: "Neutral: Review Carefully",
        }
    } else {
        Recommendation {
            tier: Tier::Recommended,
            severity: Severity::Success,
            message: "Recommended: Good to Go",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_on_the_upper_tier() {
        assert_eq!(classify(85.0).tier, Tier::NotRecommended);
        assert_eq!(classify(84.999).tier, Tier::Neutral);
        assert_eq!(classify(50.0).tier, Tier::Neutral);
        assert_eq!(classify(49.999).tier, Tier::Recommended);
    }

    #[test]
    fn no_lower_clamp() {
        assert_eq!(classify(0.0).tier, Tier::Recommended);
        assert_eq!(classify(-12.5).tier, Tier::Recommended);
    }

    #[test]
    fn high_scores_reject() {
        assert_eq!(classify(100.0).tier, Tier::NotRecommended);
        assert_eq!(classify(90.0).severity, Severity::Danger);
    }

    #[test]
    fn classify_is_deterministic() {
        assert_eq!(classify(61.2), classify(61.2));
    }

    #[test]
    fn favorability_never_increases_with_score() {
        fn rank(tier: Tier) -> u8 {
            match tier {
                Tier::Recommended => 0,
                Tier::Neutral => 1,
                Tier::NotRecommended => 2,
            }
        }

        let samples = [-5.0, 0.0, 25.0, 49.9, 50.0, 60.0, 84.9, 85.0, 99.0];
        for pair in samples.windows(2) {
            assert!(rank(classify(pair[0]).tier) <= rank(classify(pair[1]).tier));
        }
    }
}

//! Confidence scoring policy
//!
//! Maps the raw certainty signal a tokenizer backend exposes onto a bounded
//! score in [0, 1]. The bands are coarse on purpose: the score is a cheap
//! proxy for lexical ambiguity, not a calibrated probability. Downstream, the
//! verification tier keys off scores below [`LOW_CONFIDENCE`].

use crate::script::ScriptKind;

/// Segments scoring below this are candidates for verification
pub const LOW_CONFIDENCE: f64 = 0.65;

/// How a backend expresses certainty about a token.
///
/// Selected once when the tokenizer adapter is built, based on which backend
/// is configured; never probed per token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidencePolicy {
    /// Backend reports a path cost; lower magnitude means higher certainty
    CostBased,
    /// Backend only reports whether a reading was found
    PresenceBased,
}

impl ConfidencePolicy {
    /// Score one token.
    ///
    /// `cost` is the backend's raw cost when it reports one; `has_reading`
    /// and `script` drive the presence-based bands. Always returns a value
    /// in [0, 1].
    pub fn score(&self, cost: Option<i64>, has_reading: bool, script: ScriptKind) -> f64 {
        match self {
            ConfidencePolicy::CostBased => {
                cost_bands(cost.map_or(i64::MAX, |c| c.checked_abs().unwrap_or(i64::MAX)))
            }
            ConfidencePolicy::PresenceBased => presence_bands(has_reading, script),
        }
    }
}

/// Typical IPADIC-style cost ranges to banded confidence
fn cost_bands(magnitude: i64) -> f64 {
    if magnitude < 500 {
        0.95
    } else if magnitude < 1500 {
        0.85
    } else if magnitude < 3000 {
        0.70
    } else {
        0.50
    }
}

/// Tri-state presence signal to banded confidence
fn presence_bands(has_reading: bool, script: ScriptKind) -> f64 {
    if script != ScriptKind::Kanji {
        // No reading required in the first place
        0.95
    } else if has_reading {
        0.92
    } else {
        // Kanji without a dictionary reading: flag for verification
        0.60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_band_thresholds() {
        let p = ConfidencePolicy::CostBased;
        assert_eq!(p.score(Some(0), true, ScriptKind::Kanji), 0.95);
        assert_eq!(p.score(Some(499), true, ScriptKind::Kanji), 0.95);
        assert_eq!(p.score(Some(500), true, ScriptKind::Kanji), 0.85);
        assert_eq!(p.score(Some(1499), true, ScriptKind::Kanji), 0.85);
        assert_eq!(p.score(Some(1500), true, ScriptKind::Kanji), 0.70);
        assert_eq!(p.score(Some(2999), true, ScriptKind::Kanji), 0.70);
        assert_eq!(p.score(Some(3000), true, ScriptKind::Kanji), 0.50);
    }

    #[test]
    fn cost_uses_magnitude() {
        // MeCab node costs can be negative on very common words
        let p = ConfidencePolicy::CostBased;
        assert_eq!(p.score(Some(-300), true, ScriptKind::Kanji), 0.95);
        assert_eq!(p.score(Some(-4000), true, ScriptKind::Kanji), 0.50);
    }

    #[test]
    fn missing_cost_is_lowest_band() {
        let p = ConfidencePolicy::CostBased;
        assert_eq!(p.score(None, true, ScriptKind::Kanji), 0.50);
    }

    #[test]
    fn presence_bands_cover_tri_state() {
        let p = ConfidencePolicy::PresenceBased;
        assert_eq!(p.score(None, true, ScriptKind::Kanji), 0.92);
        assert_eq!(p.score(None, false, ScriptKind::Hiragana), 0.95);
        assert_eq!(p.score(None, true, ScriptKind::Other), 0.95);
        assert_eq!(p.score(None, false, ScriptKind::Kanji), 0.60);
    }

    #[test]
    fn unverified_kanji_falls_below_threshold() {
        let p = ConfidencePolicy::PresenceBased;
        assert!(p.score(None, false, ScriptKind::Kanji) < LOW_CONFIDENCE);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        for policy in [ConfidencePolicy::CostBased, ConfidencePolicy::PresenceBased] {
            for cost in [None, Some(i64::MIN), Some(0), Some(i64::MAX)] {
                for has_reading in [true, false] {
                    for script in [
                        ScriptKind::Kanji,
                        ScriptKind::Hiragana,
                        ScriptKind::Katakana,
                        ScriptKind::Other,
                    ] {
                        let s = policy.score(cost, has_reading, script);
                        assert!((0.0..=1.0).contains(&s));
                    }
                }
            }
        }
    }
}

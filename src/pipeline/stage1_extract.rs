use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{DimensionScore, ScoringProfile};

// `\w` and `\d` are Unicode-aware, so CJK labels match and full-width digits are
// captured (and later rejected by the float parser).
static DIMENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)[:：]\s*(\d+(?:\.\d+)?)").expect("dimension pattern is a valid regex")
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stage1Output {
    pub dimensions: Vec<DimensionScore>,
    /// Matches whose numeric token did not parse to a finite number.
    pub discarded: usize,
}

/// Collects every `label: number` occurrence in left-to-right order.
///
/// Labels are not deduplicated. A reply with no occurrences yields an empty
/// sequence; deciding what that means is left to the aggregator.
pub fn run_stage1(text: &str, profile: &ScoringProfile) -> Stage1Output {
    let mut out = Stage1Output::default();

    for caps in DIMENSION_PATTERN.captures_iter(text) {
        let label = &caps[1];
        let raw = &caps[2];
        match parse_score(raw) {
            Some(score) => out
                .dimensions
                .push(DimensionScore::new(label, score, profile.full_mark)),
            None => {
                debug!(label, raw, "discarding malformed numeric token");
                out.discarded += 1;
            }
        }
    }

    out
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_extract.rs"]
mod tests;

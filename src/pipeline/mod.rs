pub mod stage1_extract;
pub mod stage2_feedback;
pub mod stage3_aggregate;
pub mod stage4_report;

use tracing::{debug, info};

use crate::model::{ScoreReport, ScoringProfile};
use stage1_extract::run_stage1;
use stage2_feedback::run_stage2;
use stage3_aggregate::{ScoreError, run_stage3};

/// Parses one model reply and aggregates it into a report.
///
/// Pure: the same text and profile always give the same result, and calls share no
/// state, so replies may be scored from any number of threads at once.
pub fn aggregate_text(text: &str, profile: &ScoringProfile) -> Result<ScoreReport, ScoreError> {
    let stage1 = run_stage1(text, profile);
    debug!(
        dimensions = stage1.dimensions.len(),
        discarded = stage1.discarded,
        "stage1 extract done"
    );

    let feedbacks = run_stage2(text, profile);
    debug!(feedbacks = feedbacks.len(), "stage2 feedback done");

    let report = run_stage3(stage1.dimensions, feedbacks, profile)?;
    info!(
        total = report.total,
        dimensions = report.dimensions.len(),
        feedbacks = report.feedbacks.len(),
        "reply scored"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;

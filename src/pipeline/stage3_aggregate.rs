use thiserror::Error;
use tracing::warn;

use crate::model::{DimensionScore, FeedbackLine, ScoreReport, ScoringProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("no scorable dimensions found")]
    EmptyExtraction,
}

pub fn run_stage3(
    dimensions: Vec<DimensionScore>,
    feedbacks: Vec<FeedbackLine>,
    profile: &ScoringProfile,
) -> Result<ScoreReport, ScoreError> {
    let raw = scaled_total(&dimensions, profile)?;
    let total = clamp_percent(raw);

    let report = ScoreReport {
        dimensions,
        feedbacks,
        total,
        clamped: f64::from(total) != raw,
    };

    let out_of_range = report.out_of_range_count();
    if out_of_range > 0 {
        warn!(
            out_of_range,
            full_mark = profile.full_mark,
            clamped = report.clamped,
            "scores above the scale ceiling retained"
        );
    }

    Ok(report)
}

/// `round(mean * 100 / full_mark)`, clamped to 0..=100.
pub fn compute_total(
    dimensions: &[DimensionScore],
    profile: &ScoringProfile,
) -> Result<u8, ScoreError> {
    scaled_total(dimensions, profile).map(clamp_percent)
}

/// Rounded percentage before clamping; may fall outside 0..=100.
fn scaled_total(
    dimensions: &[DimensionScore],
    profile: &ScoringProfile,
) -> Result<f64, ScoreError> {
    if dimensions.is_empty() {
        return Err(ScoreError::EmptyExtraction);
    }
    let sum: f64 = dimensions.iter().map(|d| d.score).sum();
    let mean = sum / dimensions.len() as f64;
    Ok((mean * profile.percent_factor()).round())
}

fn clamp_percent(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;

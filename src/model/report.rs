use serde::Serialize;

use crate::model::dimension::DimensionScore;
use crate::model::feedback::FeedbackLine;
use crate::model::profile::AssociationMode;

/// Aggregated result of one model reply. `total` is only ever produced by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub dimensions: Vec<DimensionScore>,
    pub feedbacks: Vec<FeedbackLine>,
    pub total: u8,
    /// Set when the scaled mean fell outside 0..=100 and `total` was cut to fit.
    pub clamped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionFeedback<'a> {
    pub dimension: &'a str,
    pub score: f64,
    pub feedback: Option<&'a str>,
}

impl ScoreReport {
    /// Pairs every dimension with at most one feedback line.
    ///
    /// Positional pairing is best effort: it silently misaligns whenever the reply
    /// holds a different number of feedback lines than dimensions. Tagged pairing
    /// only uses the label carried by the line itself.
    pub fn paired(&self, mode: AssociationMode) -> Vec<DimensionFeedback<'_>> {
        self.dimensions
            .iter()
            .enumerate()
            .map(|(idx, dim)| {
                let feedback = match mode {
                    AssociationMode::Positional => self.feedbacks.get(idx),
                    AssociationMode::Tagged => self
                        .feedbacks
                        .iter()
                        .find(|f| f.tag.as_deref() == Some(dim.dimension.as_str())),
                };
                DimensionFeedback {
                    dimension: &dim.dimension,
                    score: dim.score,
                    feedback: feedback.map(|f| f.text.as_str()),
                }
            })
            .collect()
    }

    pub fn out_of_range_count(&self) -> usize {
        self.dimensions
            .iter()
            .filter(|d| d.is_out_of_range())
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/report.rs"]
mod tests;

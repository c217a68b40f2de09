use serde::Serialize;

/// One label/score pair recognized in a model reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: String,
    pub score: f64,
    pub full_mark: f64,
}

impl DimensionScore {
    pub fn new(dimension: impl Into<String>, score: f64, full_mark: f64) -> Self {
        Self {
            dimension: dimension.into(),
            score,
            full_mark,
        }
    }

    /// Scores above the scale ceiling are kept verbatim; only the total is clamped.
    pub fn is_out_of_range(&self) -> bool {
        self.score > self.full_mark
    }
}

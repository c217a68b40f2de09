use serde::Serialize;

use crate::model::{AssociationMode, DimensionFeedback, ScoreReport};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: ToolMeta,
    pub association: AssociationMode,
    pub out_of_range: usize,
    pub report: &'a ScoreReport,
    pub paired: Vec<DimensionFeedback<'a>>,
}

impl<'a> SummaryData<'a> {
    pub fn new(report: &'a ScoreReport, mode: AssociationMode) -> Self {
        Self {
            tool: ToolMeta {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            association: mode,
            out_of_range: report.out_of_range_count(),
            report,
            paired: report.paired(mode),
        }
    }
}

pub fn render_summary_json(data: &SummaryData<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

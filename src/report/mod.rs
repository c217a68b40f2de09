pub mod json;
pub mod text;

use crate::model::ScoreReport;

/// Shown when no feedback line is paired with a dimension ("no suggestion yet").
pub const NO_FEEDBACK_PLACEHOLDER: &str = "暂无建议";

/// One spoke of the radar chart; the axis domain is `0..=full_mark`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarRow<'a> {
    pub dimension: &'a str,
    pub score: f64,
    pub full_mark: f64,
}

pub fn radar_rows(report: &ScoreReport) -> Vec<RadarRow<'_>> {
    report
        .dimensions
        .iter()
        .map(|d| RadarRow {
            dimension: &d.dimension,
            score: d.score,
            full_mark: d.full_mark,
        })
        .collect()
}

pub fn render_radar_tsv(report: &ScoreReport) -> String {
    let mut out = String::from("dimension\tscore\tfull_mark\n");
    for row in radar_rows(report) {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            row.dimension,
            format_score(row.score),
            format_score(row.full_mark)
        ));
    }
    out
}

/// Shortest round-trip form: `4.0` prints as `4`, `3.5` as `3.5`.
pub fn format_score(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

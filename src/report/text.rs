use crate::model::{AssociationMode, ScoreReport};
use crate::report::{NO_FEEDBACK_PLACEHOLDER, format_score};

pub fn render_report_text(report: &ScoreReport, mode: AssociationMode) -> String {
    let mut out = String::new();

    out.push_str("AI 视觉评分报告\n");
    out.push_str("===============\n\n");

    out.push_str(&format!("总评分：{} / 100\n", report.total));
    out.push_str(&format!("{}\n\n", progress_bar(report.total)));

    out.push_str("评分维度\n");
    for item in report.paired(mode) {
        out.push_str(&format!(
            "{}：{} 分\n",
            item.dimension,
            format_score(item.score)
        ));
        out.push_str(&format!(
            "  {}\n",
            item.feedback.unwrap_or(NO_FEEDBACK_PLACEHOLDER)
        ));
    }

    let out_of_range = report.out_of_range_count();
    if out_of_range > 0 {
        out.push_str(&format!("\n注意：{} 项得分超出满分", out_of_range));
        if report.clamped {
            out.push_str("，总评分已截断至 100 以内\n");
        } else {
            out.push_str("，已按原始分值计入总评分\n");
        }
    }

    out
}

/// Twenty-cell bar, one cell per five points.
fn progress_bar(total: u8) -> String {
    let filled = usize::from(total.min(100)) / 5;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

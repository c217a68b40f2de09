use crate::model::{AssociationMode, ScoringProfile};
use crate::report::format_score;

/// The six axes the model is asked to score, in prompt order.
pub const SCORING_DIMENSIONS: [&str; 6] = [
    "构图排版",
    "色彩系统",
    "字体风格",
    "人物素材",
    "字数控制",
    "安全风控",
];

/// Builds the fixed scoring instruction sent alongside the image.
///
/// The wording asks for `维度：分数` pairs so the reply matches the extraction pattern;
/// in tagged mode every suggestion line must open with its `【维度】` tag.
pub fn scoring_prompt(profile: &ScoringProfile) -> String {
    let mut out = format!(
        "请对以下图片进行视觉评分，维度包括：{}。返回每项0-{}分，并附简评。",
        SCORING_DIMENSIONS.join("、"),
        format_score(profile.full_mark)
    );
    out.push_str("每项评分请单独一行，格式为“维度：分数”。");
    match profile.association {
        AssociationMode::Positional => {
            out.push_str("简评请以“建议”开头，按维度顺序逐行给出。");
        }
        AssociationMode::Tagged => {
            out.push_str("每条简评单独一行，格式为“【维度】建议：内容”。");
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/prompt.rs"]
mod tests;

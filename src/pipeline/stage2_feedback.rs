use crate::model::{FeedbackLine, ScoringProfile};

const TAG_BRACKETS: [(char, char); 2] = [('【', '】'), ('[', ']')];

/// Keeps every line containing the advisory marker, trimmed, in order of appearance.
///
/// Lines end at `\n` or `\r\n`; a lone `\r` does not start a new line.
pub fn run_stage2(text: &str, profile: &ScoringProfile) -> Vec<FeedbackLine> {
    let marker = profile.feedback_marker.as_str();
    text.lines()
        .filter(|line| line.contains(marker))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| FeedbackLine::new(line, parse_tag(line)))
        .collect()
}

/// Reads a leading `【label】` or `[label]` dimension tag.
pub fn parse_tag(line: &str) -> Option<String> {
    for (open, close) in TAG_BRACKETS {
        let Some(rest) = line.strip_prefix(open) else {
            continue;
        };
        let end = rest.find(close)?;
        let label = rest[..end].trim();
        if label.is_empty() {
            return None;
        }
        return Some(label.to_string());
    }
    None
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_feedback.rs"]
mod tests;

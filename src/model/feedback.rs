use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackLine {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FeedbackLine {
    pub fn new(text: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    pub fn untagged(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}

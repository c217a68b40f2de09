use clap::ValueEnum;
use serde::Serialize;

/// Per-dimension scale ceiling used by the scoring prompt.
pub const FULL_MARK: f64 = 5.0;

/// Substring that marks a reply line as advisory feedback ("suggestion").
pub const FEEDBACK_MARKER: &str = "建议";

/// How feedback lines are paired with dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AssociationMode {
    /// The i-th feedback line belongs to the i-th dimension.
    Positional,
    /// A feedback line belongs to the dimension named by its leading `【label】` tag.
    Tagged,
}

impl AssociationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AssociationMode::Positional => "positional",
            AssociationMode::Tagged => "tagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    pub full_mark: f64,
    pub feedback_marker: String,
    pub association: AssociationMode,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            full_mark: FULL_MARK,
            feedback_marker: FEEDBACK_MARKER.to_string(),
            association: AssociationMode::Positional,
        }
    }

    pub fn tagged_v1() -> Self {
        let mut base = Self::default_v1();
        base.association = AssociationMode::Tagged;
        base
    }

    pub fn for_mode(mode: AssociationMode) -> Self {
        match mode {
            AssociationMode::Positional => Self::default_v1(),
            AssociationMode::Tagged => Self::tagged_v1(),
        }
    }

    /// Multiplier that maps a mean dimension score onto the 0..=100 scale.
    pub fn percent_factor(&self) -> f64 {
        100.0 / self.full_mark
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

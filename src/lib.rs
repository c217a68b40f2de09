pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod report;

pub use model::{
    AssociationMode, DimensionFeedback, DimensionScore, FULL_MARK, FeedbackLine, ScoreReport,
    ScoringProfile,
};
pub use pipeline::aggregate_text;
pub use pipeline::stage3_aggregate::ScoreError;

pub mod dimension;
pub mod feedback;
pub mod profile;
pub mod report;

pub use dimension::DimensionScore;
pub use feedback::FeedbackLine;
pub use profile::{AssociationMode, FEEDBACK_MARKER, FULL_MARK, ScoringProfile};
pub use report::{DimensionFeedback, ScoreReport};

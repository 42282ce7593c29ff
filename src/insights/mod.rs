//! Small classifiers behind the dashboard's writing insights.

pub mod readability;
pub mod usage;

pub use readability::{ReadabilityBand, ReadabilityReport};
pub use usage::{UsageLevel, UsageReport};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InsightError {
    #[error("readability score must be a finite number, got {0}")]
    InvalidScore(f64),
    #[error("warning ratio must be within (0, 1], got {0}")]
    InvalidRatio(f64),
}

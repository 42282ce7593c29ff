use serde::Serialize;

use super::InsightError;
use crate::config::UsageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    Normal,
    Approaching,
    Exceeded,
}

impl UsageLevel {
    /// `warning_ratio` must lie in `(0, 1]`
    pub fn classify(used: u64, limit: u64, warning_ratio: f64) -> Result<Self, InsightError> {
        if !(warning_ratio > 0.0 && warning_ratio <= 1.0) {
            return Err(InsightError::InvalidRatio(warning_ratio));
        }
        if used >= limit {
            return Ok(UsageLevel::Exceeded);
        }
        if used as f64 / limit as f64 >= warning_ratio {
            Ok(UsageLevel::Approaching)
        } else {
            Ok(UsageLevel::Normal)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub used: u64,
    pub limit: u64,
    pub remaining: u64,
    pub level: UsageLevel,
}

impl UsageReport {
    pub fn new(used: u64, limit: u64, config: &UsageConfig) -> Result<Self, InsightError> {
        let level = UsageLevel::classify(used, limit, config.warning_ratio)?;
        Ok(Self {
            used,
            limit,
            remaining: limit.saturating_sub(used),
            level,
        })
    }
}

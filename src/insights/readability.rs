use serde::Serialize;

use super::InsightError;

/// Flesch reading-ease bands, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryConfusing,
}

impl ReadabilityBand {
    pub fn from_score(score: f64) -> Result<Self, InsightError> {
        if !score.is_finite() {
            return Err(InsightError::InvalidScore(score));
        }
        let band = match score {
            s if s >= 90.0 => ReadabilityBand::VeryEasy,
            s if s >= 80.0 => ReadabilityBand::Easy,
            s if s >= 70.0 => ReadabilityBand::FairlyEasy,
            s if s >= 60.0 => ReadabilityBand::Standard,
            s if s >= 50.0 => ReadabilityBand::FairlyDifficult,
            s if s >= 30.0 => ReadabilityBand::Difficult,
            _ => ReadabilityBand::VeryConfusing,
        };
        Ok(band)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityBand::VeryEasy => "Very easy",
            ReadabilityBand::Easy => "Easy",
            ReadabilityBand::FairlyEasy => "Fairly easy",
            ReadabilityBand::Standard => "Standard",
            ReadabilityBand::FairlyDifficult => "Fairly difficult",
            ReadabilityBand::Difficult => "Difficult",
            ReadabilityBand::VeryConfusing => "Very confusing",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            ReadabilityBand::VeryEasy | ReadabilityBand::Easy => {
                "Reads comfortably for a general audience."
            }
            ReadabilityBand::FairlyEasy | ReadabilityBand::Standard => {
                "Plain English; most readers will follow it."
            }
            ReadabilityBand::FairlyDifficult => "Consider shorter sentences.",
            ReadabilityBand::Difficult => "Split long sentences and prefer shorter words.",
            ReadabilityBand::VeryConfusing => "Hard to follow; rewrite with simpler structure.",
        }
    }
}

/// Serializable readability summary
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityReport {
    pub score: f64,
    pub band: ReadabilityBand,
    pub label: &'static str,
    pub guidance: &'static str,
}

impl ReadabilityReport {
    pub fn from_score(score: f64) -> Result<Self, InsightError> {
        let band = ReadabilityBand::from_score(score)?;
        Ok(Self {
            score,
            band,
            label: band.label(),
            guidance: band.guidance(),
        })
    }
}

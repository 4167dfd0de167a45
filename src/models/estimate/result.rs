use crate::models::ClubId;
use serde::Serialize;
use std::fmt;

const SLOW_QUIP: &str = "Time to hit the gym, or maybe check the wind.";

// Canned answers for yardages the calculator refuses to take seriously
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joke {
    NotANumber,
    DroppedBall,
    Putting,
    Rocket,
    NotAnIron,
}

impl Joke {
    pub fn label(self) -> &'static str {
        match self {
            Joke::NotANumber => "???",
            Joke::DroppedBall => "Oops!",
            Joke::Putting => "Putt?",
            Joke::Rocket => "UFO",
            Joke::NotAnIron => "OMG",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Joke::NotANumber => "Please enter a valid number! 😅",
            Joke::DroppedBall => "Did you just drop the ball from your pocket?",
            Joke::Putting => "Are you putting with an iron?",
            Joke::Rocket => "NASA called. They want their rocket back.",
            Joke::NotAnIron => "Calm down, Bryson DeChambeau. Sir, this is an iron.",
        }
    }
}

/// How an estimated speed compares to the club's reference average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedStatus {
    #[serde(rename = "Fast (Tour Level)")]
    Fast,
    #[serde(rename = "Above Average")]
    AboveAverage,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

impl SpeedStatus {
    /// Classifies a delta in mph. Checked in order: >5, >0, <-5, else average.
    pub fn classify(delta_mph: i64) -> Self {
        if delta_mph > 5 {
            SpeedStatus::Fast
        } else if delta_mph > 0 {
            SpeedStatus::AboveAverage
        } else if delta_mph < -5 {
            SpeedStatus::BelowAverage
        } else {
            SpeedStatus::Average
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpeedStatus::Fast => "Fast (Tour Level)",
            SpeedStatus::AboveAverage => "Above Average",
            SpeedStatus::Average => "Average",
            SpeedStatus::BelowAverage => "Below Average",
        }
    }
}

impl fmt::Display for SpeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimationResult {
    Joke(Joke),
    Normal {
        club: ClubId,
        speed_mph: i64,
        delta_mph: i64,
        status: SpeedStatus,
    },
}

impl EstimationResult {
    pub fn is_joke(&self) -> bool {
        matches!(self, EstimationResult::Joke(_))
    }

    /// Big text on the result card: the joke label or the speed.
    pub fn headline(&self) -> String {
        match self {
            EstimationResult::Joke(joke) => joke.label().to_string(),
            EstimationResult::Normal { speed_mph, .. } => speed_mph.to_string(),
        }
    }

    /// Badge text under the headline.
    pub fn caption(&self) -> String {
        match self {
            EstimationResult::Joke(joke) => joke.message().to_string(),
            EstimationResult::Normal {
                delta_mph, status, ..
            } => {
                let sign = if *delta_mph > 0 { "+" } else { "" };
                format!("{} ({}{} mph vs avg)", status, sign, delta_mph)
            }
        }
    }

    pub fn quip(&self) -> Option<&'static str> {
        match self {
            EstimationResult::Normal { delta_mph, .. } if *delta_mph < 0 => Some(SLOW_QUIP),
            _ => None,
        }
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimationResult::Joke(joke) => write!(f, "{} - {}", joke.label(), joke.message()),
            EstimationResult::Normal { .. } => {
                write!(f, "{} mph - {}", self.headline(), self.caption())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal(speed_mph: i64, delta_mph: i64) -> EstimationResult {
        EstimationResult::Normal {
            club: ClubId::Seven,
            speed_mph,
            delta_mph,
            status: SpeedStatus::classify(delta_mph),
        }
    }

    #[test]
    fn classify_thresholds() {
        assert_eq!(SpeedStatus::classify(6), SpeedStatus::Fast);
        assert_eq!(SpeedStatus::classify(5), SpeedStatus::AboveAverage);
        assert_eq!(SpeedStatus::classify(1), SpeedStatus::AboveAverage);
        assert_eq!(SpeedStatus::classify(0), SpeedStatus::Average);
        assert_eq!(SpeedStatus::classify(-5), SpeedStatus::Average);
        assert_eq!(SpeedStatus::classify(-6), SpeedStatus::BelowAverage);
    }

    #[test]
    fn caption_signs_positive_deltas_only() {
        assert_eq!(normal(81, 6).caption(), "Fast (Tour Level) (+6 mph vs avg)");
        assert_eq!(normal(75, 0).caption(), "Average (0 mph vs avg)");
        assert_eq!(normal(49, -32).caption(), "Below Average (-32 mph vs avg)");
    }

    #[test]
    fn quip_only_for_slow_swings() {
        assert_eq!(normal(74, -1).quip(), Some(SLOW_QUIP));
        assert_eq!(normal(75, 0).quip(), None);
        assert_eq!(EstimationResult::Joke(Joke::NotANumber).quip(), None);
    }

    #[test]
    fn joke_headline_and_caption() {
        let result = EstimationResult::Joke(Joke::Rocket);
        assert!(result.is_joke());
        assert_eq!(result.headline(), "UFO");
        assert_eq!(result.caption(), "NASA called. They want their rocket back.");
        assert_eq!(
            result.to_string(),
            "UFO - NASA called. They want their rocket back."
        );
    }

    #[test]
    fn normal_display() {
        assert_eq!(
            normal(81, 6).to_string(),
            "81 mph - Fast (Tour Level) (+6 mph vs avg)"
        );
    }

    #[test]
    fn status_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&SpeedStatus::Fast).unwrap(),
            "\"Fast (Tour Level)\""
        );
        assert_eq!(
            serde_json::to_string(&SpeedStatus::BelowAverage).unwrap(),
            "\"Below Average\""
        );
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use super::date::iso;
use crate::ValidationError;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(with = "iso")]
    pub date: Date,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Trailing simple moving average windows drawn as chart overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub enum AveragePeriod {
    Five,
    TwentyFive,
    SeventyFive,
    TwoHundred,
}

impl AveragePeriod {
    pub const ALL: [Self; 4] = [
        Self::Five,
        Self::TwentyFive,
        Self::SeventyFive,
        Self::TwoHundred,
    ];

    /// Number of bars in the window.
    pub const fn bars(self) -> usize {
        match self {
            Self::Five => 5,
            Self::TwentyFive => 25,
            Self::SeventyFive => 75,
            Self::TwoHundred => 200,
        }
    }

    /// Field name used for this overlay, e.g. `ma25`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Five => "ma5",
            Self::TwentyFive => "ma25",
            Self::SeventyFive => "ma75",
            Self::TwoHundred => "ma200",
        }
    }
}

impl Display for AveragePeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bars())
    }
}

impl TryFrom<usize> for AveragePeriod {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|period| period.bars() == value)
            .ok_or_else(|| ValidationError::InvalidAveragePeriod {
                value: value.to_string(),
            })
    }
}

impl From<AveragePeriod> for usize {
    fn from(value: AveragePeriod) -> Self {
        value.bars()
    }
}

impl FromStr for AveragePeriod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix("ma").unwrap_or(trimmed);
        digits
            .parse::<usize>()
            .ok()
            .and_then(|bars| Self::try_from(bars).ok())
            .ok_or_else(|| ValidationError::InvalidAveragePeriod {
                value: trimmed.to_owned(),
            })
    }
}

/// Daily bar with the moving averages that have enough history behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedBar {
    #[serde(flatten)]
    pub bar: DailyBar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma25: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma75: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma200: Option<f64>,
}

impl AugmentedBar {
    pub fn new(bar: DailyBar) -> Self {
        Self {
            bar,
            ma5: None,
            ma25: None,
            ma75: None,
            ma200: None,
        }
    }

    pub const fn average(&self, period: AveragePeriod) -> Option<f64> {
        match period {
            AveragePeriod::Five => self.ma5,
            AveragePeriod::TwentyFive => self.ma25,
            AveragePeriod::SeventyFive => self.ma75,
            AveragePeriod::TwoHundred => self.ma200,
        }
    }

    pub fn set_average(&mut self, period: AveragePeriod, value: Option<f64>) {
        let slot = match period {
            AveragePeriod::Five => &mut self.ma5,
            AveragePeriod::TwentyFive => &mut self.ma25,
            AveragePeriod::SeventyFive => &mut self.ma75,
            AveragePeriod::TwoHundred => &mut self.ma200,
        };
        *slot = value;
    }
}

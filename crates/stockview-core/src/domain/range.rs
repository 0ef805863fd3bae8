use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use super::date::shift_months_back;
use crate::{DailyBar, ValidationError};

/// Lower bound on the returned date window, relative to today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeSelector {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
    #[default]
    #[serde(rename = "full")]
    Full,
}

impl RangeSelector {
    pub const ALL: [Self; 6] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::FiveYears,
        Self::Full,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
            Self::Full => "full",
        }
    }

    /// Calendar months covered by the window; `None` for the full history.
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(1),
            Self::ThreeMonths => Some(3),
            Self::SixMonths => Some(6),
            Self::OneYear => Some(12),
            Self::FiveYears => Some(60),
            Self::Full => None,
        }
    }

    /// Lenient parse used for the `range` query parameter: missing or unknown means full.
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|raw| Self::from_str(raw).ok())
            .unwrap_or_default()
    }

    /// Bars dated on or before the cutoff are dropped.
    pub fn cutoff(self, today: Date) -> Option<Date> {
        self.months()
            .map(|months| shift_months_back(today, months))
    }

    pub fn apply(self, series: Vec<DailyBar>, today: Date) -> Vec<DailyBar> {
        match self.cutoff(today) {
            Some(cutoff) => series.into_iter().filter(|bar| bar.date > cutoff).collect(),
            None => series,
        }
    }
}

impl Display for RangeSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "6m" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "5y" => Ok(Self::FiveYears),
            "full" => Ok(Self::Full),
            other => Err(ValidationError::InvalidRange {
                value: other.to_owned(),
            }),
        }
    }
}

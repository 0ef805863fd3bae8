//! Chart view state and its transitions.
//!
//! ```text
//!   Idle ──submit──▶ Loading ──complete(Ok)──▶ Loaded
//!                       │                        │
//!                       └──complete(Err)──▶ Failed
//!   Loaded / Failed / Idle ──submit──▶ Loading
//! ```
//!
//! The view owns exactly one state value and mutates it only from user input
//! and fetch completion. A submit while loading is ignored, so at most one
//! request is in flight per view.

use std::collections::BTreeSet;

use stockview_core::{augment, AugmentedBar, AveragePeriod, QuoteResponse, RangeSelector};

use crate::error::FetchError;

/// Coarse phase derived from the state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Parameters of one proxy round trip issued by [`ViewState::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub symbol: String,
    pub range: RangeSelector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    symbol: String,
    range: RangeSelector,
    selected_averages: BTreeSet<AveragePeriod>,
    series: Option<Vec<AugmentedBar>>,
    percentage_change: Option<f64>,
    loading: bool,
    error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            range: RangeSelector::Full,
            selected_averages: BTreeSet::from([AveragePeriod::TwentyFive]),
            series: None,
            percentage_change: None,
            loading: false,
            error: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticker input; stored upper-cased as typed.
    pub fn set_symbol(&mut self, input: &str) {
        self.symbol = input.to_uppercase();
    }

    pub fn set_range(&mut self, range: RangeSelector) {
        self.range = range;
    }

    pub fn toggle_average(&mut self, period: AveragePeriod, enabled: bool) {
        if enabled {
            self.selected_averages.insert(period);
        } else {
            self.selected_averages.remove(&period);
        }
    }

    /// Start a fetch. Returns `None` (and changes nothing) while a request is
    /// already in flight or when the symbol is blank.
    pub fn submit(&mut self) -> Option<FetchRequest> {
        if self.loading || self.symbol.trim().is_empty() {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.series = None;
        self.percentage_change = None;

        Some(FetchRequest {
            symbol: self.symbol.trim().to_owned(),
            range: self.range,
        })
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Completions are applied as they arrive; a response belonging to an
    /// earlier submit is not told apart from the current one.
    pub fn complete(&mut self, outcome: Result<QuoteResponse, FetchError>) {
        self.loading = false;
        match outcome {
            Ok(response) => {
                self.series = Some(augment(&response.series));
                self.percentage_change = response.percentage_change;
                self.error = None;
            }
            Err(error) => {
                log::debug!("fetch failed: {error}");
                self.series = None;
                self.percentage_change = None;
                self.error = Some(error.user_message());
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.series.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn range(&self) -> RangeSelector {
        self.range
    }

    pub fn selected_averages(&self) -> &BTreeSet<AveragePeriod> {
        &self.selected_averages
    }

    pub fn is_selected(&self, period: AveragePeriod) -> bool {
        self.selected_averages.contains(&period)
    }

    pub fn series(&self) -> Option<&[AugmentedBar]> {
        self.series.as_deref()
    }

    pub const fn percentage_change(&self) -> Option<f64> {
        self.percentage_change
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

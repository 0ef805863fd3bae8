//! # Domain Models
//!
//! Canonical types shared by the quote proxy and the chart view.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, upper-cased ticker |
//! | [`DailyBar`] | One trading day of OHLCV data |
//! | [`AugmentedBar`] | Daily bar plus moving-average overlays |
//! | [`AveragePeriod`] | Supported moving-average windows (5, 25, 75, 200) |
//! | [`RangeSelector`] | Relative date window (1m, 3m, 6m, 1y, 5y, full) |
//!
//! Dates are plain calendar dates (`time::Date`) serialized as `YYYY-MM-DD`.

mod bar;
pub mod date;
mod range;
mod symbol;

pub use bar::{AugmentedBar, AveragePeriod, DailyBar};
pub use range::RangeSelector;
pub use symbol::Symbol;

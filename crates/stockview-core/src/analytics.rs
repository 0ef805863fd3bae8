//! Series-derived statistics: trailing moving averages and day-over-day change.

use crate::{AugmentedBar, AveragePeriod, DailyBar};

/// Trailing simple moving average of `values` over `period` points.
///
/// Position `i` holds the mean of `values[i + 1 - period..=i]`, or `None` while
/// fewer than `period` points are available.
pub fn simple_moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; values.len()];
    if period == 0 {
        return averages;
    }

    for (start, window) in values.windows(period).enumerate() {
        averages[start + period - 1] = Some(window.iter().sum::<f64>() / period as f64);
    }
    averages
}

/// Attach every supported moving average of the close price to each bar.
pub fn augment(series: &[DailyBar]) -> Vec<AugmentedBar> {
    let closes = series.iter().map(|bar| bar.close).collect::<Vec<_>>();
    let mut augmented = series
        .iter()
        .cloned()
        .map(AugmentedBar::new)
        .collect::<Vec<_>>();

    for period in AveragePeriod::ALL {
        let averages = simple_moving_average(&closes, period.bars());
        for (bar, average) in augmented.iter_mut().zip(averages) {
            bar.set_average(period, average);
        }
    }
    augmented
}

/// Percentage change of the latest close against the previous one.
pub fn percentage_change(series: &[DailyBar]) -> Option<f64> {
    let [.., previous, latest] = series else {
        return None;
    };
    if previous.close == 0.0 {
        return None;
    }
    Some((latest.close - previous.close) / previous.close * 100.0)
}

//! Behavior tests for series analytics
//!
//! Properties of the moving averages and the day-over-day change that the
//! chart relies on, checked over a realistic-length series.

mod support;

use stockview_core::{
    augment, parse_daily_series, percentage_change, simple_moving_average, AveragePeriod,
    DailyBar,
};
use support::{consecutive_days, daily_payload};
use time::macros::date;

fn wavy_series(count: usize) -> Vec<DailyBar> {
    consecutive_days(date!(2024 - 06 - 14), count)
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let close = 150.0 + (index as f64 * 0.37).sin() * 12.0 + index as f64 * 0.05;
            DailyBar {
                date,
                open: close - 0.4,
                high: close + 1.1,
                low: close - 1.3,
                close,
                volume: 1_000 + index as u64,
            }
        })
        .collect()
}

fn trailing_mean(closes: &[f64], end: usize, period: usize) -> f64 {
    closes[end + 1 - period..=end].iter().sum::<f64>() / period as f64
}

// =============================================================================
// Moving Averages
// =============================================================================

#[test]
fn each_average_is_absent_until_enough_history_then_equals_trailing_mean() {
    // Given: A series longer than the widest window
    let series = wavy_series(260);
    let closes = series.iter().map(|bar| bar.close).collect::<Vec<_>>();

    // When: It is augmented
    let augmented = augment(&series);

    // Then: For every period, the first P-1 entries are absent and the rest match
    for period in AveragePeriod::ALL {
        let width = period.bars();
        for (index, bar) in augmented.iter().enumerate() {
            match bar.average(period) {
                None => assert!(index + 1 < width, "{period} missing at {index}"),
                Some(value) => {
                    assert!(index + 1 >= width, "{period} present too early at {index}");
                    let expected = trailing_mean(&closes, index, width);
                    assert!(
                        (value - expected).abs() < 1e-9,
                        "{period} at {index}: got {value}, want {expected}"
                    );
                }
            }
        }
    }
}

#[test]
fn augmenting_preserves_length_order_and_raw_fields() {
    let series = wavy_series(90);

    let augmented = augment(&series);

    assert_eq!(augmented.len(), series.len());
    for (original, bar) in series.iter().zip(&augmented) {
        assert_eq!(&bar.bar, original);
    }
    assert!(augmented
        .windows(2)
        .all(|pair| pair[0].bar.date < pair[1].bar.date));
}

#[test]
fn series_shorter_than_longest_window_never_gets_that_average() {
    let augmented = augment(&wavy_series(199));

    assert!(augmented.iter().all(|bar| bar.ma200.is_none()));
    assert!(augmented.last().and_then(|bar| bar.ma75).is_some());
}

#[test]
fn constant_closes_average_to_the_constant() {
    let values = vec![42.5; 30];

    let averages = simple_moving_average(&values, 25);

    assert_eq!(averages.iter().filter(|value| value.is_none()).count(), 24);
    assert!(averages.iter().flatten().all(|value| (value - 42.5).abs() < 1e-12));
}

#[test]
fn empty_series_augments_to_empty() {
    assert!(augment(&[]).is_empty());
    assert!(simple_moving_average(&[], 5).is_empty());
}

// =============================================================================
// Percentage Change
// =============================================================================

#[test]
fn percentage_change_uses_only_the_last_two_closes() {
    let mut series = wavy_series(10);
    let count = series.len();
    series[count - 2].close = 80.0;
    series[count - 1].close = 84.0;

    let change = percentage_change(&series).expect("two or more bars");

    assert!((change - 5.0).abs() < 1e-12);
}

#[test]
fn falling_close_gives_negative_change() {
    let mut series = wavy_series(2);
    series[0].close = 200.0;
    series[1].close = 190.0;

    let change = percentage_change(&series).expect("two bars");

    assert!((change + 5.0).abs() < 1e-12);
}

#[test]
fn percentage_change_needs_two_bars_and_nonzero_base() {
    assert_eq!(percentage_change(&[]), None);
    assert_eq!(percentage_change(&wavy_series(1)), None);

    let mut series = wavy_series(2);
    series[0].close = 0.0;
    assert_eq!(percentage_change(&series), None);
}

// =============================================================================
// Reshape From Upstream
// =============================================================================

#[test]
fn upstream_payload_reshapes_to_ascending_bars_with_parsed_numbers() {
    // Given: A provider payload keyed newest first
    let days = consecutive_days(date!(2024 - 03 - 08), 3);
    let body = daily_payload("IBM", &[(days[0], 190.5), (days[1], 191.25), (days[2], 189.0)]);

    // When: It is reshaped
    let bars = parse_daily_series(&body).expect("valid payload");

    // Then: Oldest first, numbers parsed
    let dates = bars.iter().map(|bar| bar.date).collect::<Vec<_>>();
    assert_eq!(dates, days);
    assert_eq!(bars[1].close, 191.25);
    assert_eq!(bars[1].open, 190.75);
    assert_eq!(bars[1].high, 192.25);
    assert_eq!(bars[1].low, 190.25);
    assert_eq!(bars[2].volume, 1_200_000);
}

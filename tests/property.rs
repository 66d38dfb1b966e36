use chart_analyzer::analysis::{best_profit, best_profit_exhaustive, longest_decreasing_run, peak_volume};
use chart_analyzer::charts::TimePoint;
use chart_analyzer::range;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

const DAY_MS: i64 = 86_400_000;

fn daily(values: &[f64]) -> Vec<TimePoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| TimePoint::new(i as i64 * DAY_MS, v))
        .collect()
}

fn any_prices(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..100_000.0, 0..max_len)
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2013-04-28 (first CoinGecko data) through 2030
    (0i64..6_400).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2013, 4, 28).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn short_series_have_no_run(value in 0.01f64..100_000.0, single in any::<bool>()) {
        let prices = if single { daily(&[value]) } else { Vec::new() };
        prop_assert_eq!(longest_decreasing_run(&prices), 0);
    }

    #[test]
    fn run_never_exceeds_point_count(values in any_prices(200)) {
        let prices = daily(&values);
        let run = longest_decreasing_run(&prices);
        prop_assert!(run <= prices.len().saturating_sub(1));
    }

    #[test]
    fn strictly_falling_series_is_one_run(start in 1_000.0f64..100_000.0, len in 1usize..100) {
        let values: Vec<f64> = (0..len).map(|i| start - i as f64).collect();
        prop_assert_eq!(longest_decreasing_run(&daily(&values)), len - 1);
    }

    #[test]
    fn rising_tail_keeps_run(values in any_prices(100), tail in 1usize..20) {
        let before = longest_decreasing_run(&daily(&values));

        let top = values.iter().cloned().fold(0.0, f64::max);
        let mut extended = values.clone();
        extended.extend((1..=tail).map(|i| top + i as f64));

        prop_assert_eq!(longest_decreasing_run(&daily(&extended)), before);
    }

    #[test]
    fn peak_is_the_maximum(values in prop::collection::vec(0.0f64..1e12, 1..200)) {
        let volumes = daily(&values);
        let peak = peak_volume(&volumes).unwrap();

        prop_assert!(volumes.iter().all(|v| v.value <= peak.value));
        let first_max = volumes.iter().position(|v| v.value == peak.value).unwrap();
        prop_assert_eq!(peak.timestamp, volumes[first_max].timestamp);
    }

    #[test]
    fn profit_is_positive_and_ordered(values in any_prices(200)) {
        if let Some(trade) = best_profit(&daily(&values)) {
            prop_assert!(trade.difference > 0.0);
            prop_assert!(trade.buy_timestamp < trade.sell_timestamp);
            prop_assert_eq!(trade.difference, trade.sell_price - trade.buy_price);
        }
    }

    #[test]
    fn non_increasing_series_has_no_trade(mut values in any_prices(200)) {
        values.sort_by(|a, b| b.partial_cmp(a).unwrap());
        prop_assert!(best_profit(&daily(&values)).is_none());
    }

    #[test]
    fn single_pass_matches_exhaustive(values in any_prices(60)) {
        let prices = daily(&values);
        prop_assert_eq!(best_profit(&prices), best_profit_exhaustive(&prices));
    }

    #[test]
    fn single_pass_matches_exhaustive_with_gaps(
        values in prop::collection::vec(
            prop_oneof![8 => 0.01f64..100_000.0, 1 => Just(f64::NAN), 1 => Just(f64::INFINITY)],
            0..60,
        )
    ) {
        let prices = daily(&values);
        prop_assert_eq!(best_profit(&prices), best_profit_exhaustive(&prices));
    }

    #[test]
    fn short_ranges_keep_one_point_per_day(from in any_date(), span in 0i64..90) {
        let to = from + Duration::days(span);
        let window = range::normalize(from, to).unwrap();

        prop_assert!(window.is_widened());
        prop_assert_eq!(window.truncate_count() as i64, span + 1);

        let fetched: Vec<TimePoint> = (0..=window.fetch_span_days())
            .map(|i| TimePoint::new(i * DAY_MS, 1.0))
            .collect();
        prop_assert_eq!(window.truncate(&fetched).len() as i64, span + 1);
    }

    #[test]
    fn long_ranges_are_fetched_as_is(from in any_date(), span in 90i64..2_000) {
        let to = from + Duration::days(span);
        let window = range::normalize(from, to).unwrap();

        prop_assert!(!window.is_widened());
        prop_assert_eq!(window.fetch_from, from);
        prop_assert_eq!(window.fetch_to, to);
    }

    #[test]
    fn reversed_ranges_are_rejected(from in any_date(), back in 1i64..1_000) {
        prop_assert!(range::normalize(from, from - Duration::days(back)).is_err());
    }
}

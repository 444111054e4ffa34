use chart_transform::api::{TickRequest, compute_ticks, round_up_to_nice};
use proptest::prelude::*;

proptest! {
    #[test]
    fn nice_ticks_are_ordered_and_inside_range(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.0001f64..1_000_000.0,
        count in 1usize..25
    ) {
        let max = min + span;
        let ticks = compute_ticks(TickRequest::new(min, max, count));

        prop_assert!(ticks.interval > 0.0);
        for pair in ticks.values.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
        let slack = 1e-9 * (1.0 + min.abs().max(max.abs()));
        for value in &ticks.values {
            prop_assert!(*value >= min - slack);
            prop_assert!(*value <= max + slack);
        }
    }

    #[test]
    fn nice_interval_never_shrinks_raw_interval(raw in 1e-6f64..1e9) {
        let nice = round_up_to_nice(raw);
        prop_assert!(nice >= raw * (1.0 - 1e-9));
        prop_assert!(nice <= raw * 10.0 * (1.0 + 1e-9));
    }

    #[test]
    fn forced_ticks_hit_both_ends(
        min in -10_000.0f64..10_000.0,
        span in 0.0f64..10_000.0,
        count in 2usize..25
    ) {
        let max = min + span;
        let ticks = compute_ticks(TickRequest::new(min, max, count).with_force_count(true));

        prop_assert_eq!(ticks.len(), count);
        prop_assert_eq!(ticks.values[0], min);
        let last = ticks.values[count - 1];
        prop_assert!((last - max).abs() <= 1e-9 * (1.0 + max.abs()));
    }

    #[test]
    fn labels_never_render_negative_zero(
        min in -10.0f64..0.0,
        span in 0.5f64..20.0,
        count in 2usize..12
    ) {
        let ticks = compute_ticks(TickRequest::new(min, min + span, count));
        for label in ticks.labels() {
            let unsigned = label.trim_start_matches('-');
            prop_assert!(
                label == unsigned || unsigned.chars().any(|c| c.is_ascii_digit() && c != '0'),
                "negative zero label: {label}"
            );
        }
    }
}

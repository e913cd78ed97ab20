use std::f64::consts::PI;

use crate::models::ChartPoint;
use crate::state::SharedRandom;

const BASELINE: f64 = 100.0;
const DAILY_AMPLITUDE: f64 = 30.0;
const NOISE_HALF_WIDTH: f64 = 10.0;

/// One period of a noisy daily curve, clamped at zero
pub fn generate_series(point_count: usize, rng: &SharedRandom) -> Vec<ChartPoint> {
    (0..point_count)
        .map(|i| {
            let phase = i as f64 / point_count as f64 * PI * 2.0;
            let value = BASELINE + phase.sin() * DAILY_AMPLITUDE + rng.jitter(NOISE_HALF_WIDTH);

            ChartPoint {
                time: i,
                value: value.max(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LARGE_CHART_POINTS, SMALL_CHART_POINTS};

    #[test]
    fn test_length_and_time_index() {
        let rng = SharedRandom::seeded(3);

        for count in [0, 1, SMALL_CHART_POINTS, LARGE_CHART_POINTS] {
            let series = generate_series(count, &rng);
            assert_eq!(series.len(), count);
            for (i, point) in series.iter().enumerate() {
                assert_eq!(point.time, i);
            }
        }
    }

    #[test]
    fn test_values_follow_daily_curve() {
        let rng = SharedRandom::seeded(10);

        for _ in 0..200 {
            let series = generate_series(SMALL_CHART_POINTS, &rng);
            for (i, point) in series.iter().enumerate() {
                let phase = i as f64 / SMALL_CHART_POINTS as f64 * PI * 2.0;
                let center = BASELINE + phase.sin() * DAILY_AMPLITUDE;

                assert!(point.value >= 0.0);
                assert!((point.value - center).abs() <= NOISE_HALF_WIDTH + 1e-9);
            }
        }
    }

    #[test]
    fn test_independent_calls_differ() {
        let rng = SharedRandom::seeded(5);

        let first = generate_series(SMALL_CHART_POINTS, &rng);
        let second = generate_series(SMALL_CHART_POINTS, &rng);

        assert_ne!(first, second);
    }
}

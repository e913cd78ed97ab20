use serde::{Deserialize, Serialize};

/// Points in a small (daily) chart series
pub const SMALL_CHART_POINTS: usize = 24;

/// Points in a large chart series
pub const LARGE_CHART_POINTS: usize = 48;

/// A synthetic sample used purely for chart rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: usize,
    pub value: f64,
}

pub mod board;
pub mod renderer;
pub mod series;
pub mod surface;

pub use board::{ChartBoard, ChartSpec, ChartStyle, DASHBOARD_CHARTS};
pub use renderer::{draw_large_chart, draw_line_chart};
pub use series::generate_series;
pub use surface::{CanvasSurface, DrawSurface, RecordingSurface};

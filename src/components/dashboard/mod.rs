mod chart_canvas;
mod dashboard;
mod small_card;
mod trees_card;

pub use dashboard::Dashboard;

pub mod chart;
pub mod connection;
pub mod reading;
pub mod settings;

pub use chart::{ChartPoint, LARGE_CHART_POINTS, SMALL_CHART_POINTS};
pub use connection::{ConnectionStatus, MeterType};
pub use reading::{Reading, ReadingSet, READING_COUNT};
pub use settings::{DisplaySettings, EngineeringSettings, MeterEndpoint, SettingsBundle};

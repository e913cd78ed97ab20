use chrono::{DateTime, Duration, Local, TimeZone};

use crate::state::view::{ids, ViewBinding};
use crate::state::SharedRandom;

/// Maximum skew of the simulated meter clock in either direction
pub const METER_SKEW_MS: f64 = 1_000.0;

/// `YYYY/MM/DD`
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y/%m/%d").to_string()
}

/// `HH:MM:SS`
pub fn format_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M:%S").to_string()
}

/// `YYYY/MM/DD HH:MM:SS`
pub fn format_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Update the dashboard date and time
pub fn render_clock(now: &DateTime<Local>, view: &dyn ViewBinding) {
    view.set_text(ids::CURRENT_DATE, &format_date(now));
    view.set_text(ids::CURRENT_TIME, &format_time(now));
}

/// Update the engineering panel clocks; the meter clock drifts slightly
pub fn render_engineering_clock(now: &DateTime<Local>, rng: &SharedRandom, view: &dyn ViewBinding) {
    view.set_text(ids::SYSTEM_TIME, &format_timestamp(now));

    let skew = Duration::milliseconds(rng.jitter(METER_SKEW_MS) as i64);
    view.set_text(ids::METER_TIME, &format_timestamp(&(*now + skew)));
}

pub mod client;
pub mod latest;

pub use client::{ApiClient, ApiError, GlooTransport, HttpResponse, HttpTransport};
pub use latest::{FetchOutcome, LatestReadings, ReadingOrigin};

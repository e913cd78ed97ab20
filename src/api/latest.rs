use super::client::{ApiClient, ApiError};
use crate::models::ReadingSet;
use crate::services::mock::generate_mock;
use crate::state::SharedRandom;

/// Where a displayed reading set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingOrigin {
    Primary,
    Fallback,
    Mock,
}

/// Result of a fetch; always carries something to display
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub readings: ReadingSet,
    pub origin: ReadingOrigin,
}

/// Resolves the current reading set from the live endpoint, the static
/// snapshot, or synthetic data, in that order
#[derive(Clone)]
pub struct LatestReadings {
    client: ApiClient,
    rng: SharedRandom,
}

impl LatestReadings {
    pub fn new(client: ApiClient, rng: SharedRandom) -> Self {
        Self { client, rng }
    }

    /// Fetch the latest readings, degrading to mock data on any failure
    pub async fn fetch_readings(&self) -> FetchOutcome {
        match self.fetch_remote().await {
            Ok((readings, origin)) => {
                log::debug!("Loaded {} readings from {:?}", readings.len(), origin);
                FetchOutcome { readings, origin }
            }
            Err(e) => {
                log::warn!("Failed to load readings, using mock data: {}", e);
                FetchOutcome {
                    readings: generate_mock(&self.rng),
                    origin: ReadingOrigin::Mock,
                }
            }
        }
    }

    async fn fetch_remote(&self) -> Result<(ReadingSet, ReadingOrigin), ApiError> {
        // Only an unreachable primary falls through to the snapshot;
        // an HTTP error status from it goes straight to mock data
        let (response, origin) = match self.client.get_latest().await {
            Ok(response) => (response, ReadingOrigin::Primary),
            Err(ApiError::Network(e)) => {
                log::debug!("Live endpoint unreachable ({}), trying snapshot", e);
                (self.client.get_fallback().await?, ReadingOrigin::Fallback)
            }
            Err(e) => return Err(e),
        };

        let body = ApiClient::handle_response(response)?;
        let payload: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let readings = ReadingSet::from_json(payload).ok_or_else(|| {
            ApiError::Deserialization("payload is not an array of readings".to_string())
        })?;

        Ok((readings, origin))
    }
}

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::connection::MeterType;

/// A settings record persisted under its own storage key
pub trait SettingsBundle: Serialize + DeserializeOwned + Clone {
    /// Local storage key
    const STORAGE_KEY: &'static str;

    /// Values used for any field that was never saved
    fn defaults() -> Self;

    /// Record when the bundle was written
    fn stamp(&mut self, saved_at: String);
}

/// Display settings shown on the main dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub work_station_name: String,
    /// Voltage log interval in minutes
    pub voltage_log_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl DisplaySettings {
    pub const DEFAULT_STATION_NAME: &'static str = "Work Station Name";
    pub const DEFAULT_VOLTAGE_LOG_TIME: &'static str = "5";
}

impl SettingsBundle for DisplaySettings {
    const STORAGE_KEY: &'static str = "energyDashboardSettings";

    fn defaults() -> Self {
        Self {
            work_station_name: Self::DEFAULT_STATION_NAME.to_string(),
            voltage_log_time: Self::DEFAULT_VOLTAGE_LOG_TIME.to_string(),
            saved_at: None,
        }
    }

    fn stamp(&mut self, saved_at: String) {
        self.saved_at = Some(saved_at);
    }
}

/// Network configuration for the consumption and recovery meters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringSettings {
    #[serde(rename = "consumptionMeterIP")]
    pub consumption_meter_ip: String,
    #[serde(rename = "consumptionMeterPort")]
    pub consumption_meter_port: String,
    #[serde(rename = "consumptionMeterID")]
    pub consumption_meter_id: String,
    #[serde(rename = "recoveryMeterIP")]
    pub recovery_meter_ip: String,
    #[serde(rename = "recoveryMeterPort")]
    pub recovery_meter_port: String,
    #[serde(rename = "recoveryMeterID")]
    pub recovery_meter_id: String,
    #[serde(rename = "savedAt", default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

/// Address of a single meter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterEndpoint {
    pub ip: String,
    pub port: String,
    pub id: String,
}

impl EngineeringSettings {
    pub fn endpoint(&self, meter: MeterType) -> MeterEndpoint {
        match meter {
            MeterType::Consumption => MeterEndpoint {
                ip: self.consumption_meter_ip.clone(),
                port: self.consumption_meter_port.clone(),
                id: self.consumption_meter_id.clone(),
            },
            MeterType::Recovery => MeterEndpoint {
                ip: self.recovery_meter_ip.clone(),
                port: self.recovery_meter_port.clone(),
                id: self.recovery_meter_id.clone(),
            },
        }
    }

    pub fn set_endpoint(&mut self, meter: MeterType, endpoint: MeterEndpoint) {
        match meter {
            MeterType::Consumption => {
                self.consumption_meter_ip = endpoint.ip;
                self.consumption_meter_port = endpoint.port;
                self.consumption_meter_id = endpoint.id;
            }
            MeterType::Recovery => {
                self.recovery_meter_ip = endpoint.ip;
                self.recovery_meter_port = endpoint.port;
                self.recovery_meter_id = endpoint.id;
            }
        }
    }
}

impl SettingsBundle for EngineeringSettings {
    const STORAGE_KEY: &'static str = "engineeringSettings";

    fn defaults() -> Self {
        Self {
            consumption_meter_ip: "192.168.1.9".to_string(),
            consumption_meter_port: "502".to_string(),
            consumption_meter_id: "2".to_string(),
            recovery_meter_ip: "192.168.1.10".to_string(),
            recovery_meter_port: "502".to_string(),
            recovery_meter_id: "3".to_string(),
            saved_at: None,
        }
    }

    fn stamp(&mut self, saved_at: String) {
        self.saved_at = Some(saved_at);
    }
}

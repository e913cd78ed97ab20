/// The two meters configured in engineering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeterType {
    Consumption,
    Recovery,
}

impl MeterType {
    pub const ALL: [MeterType; 2] = [MeterType::Consumption, MeterType::Recovery];

    /// Identifier used in element ids and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumption => "consumption",
            Self::Recovery => "recovery",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Consumption => "Consumption meter",
            Self::Recovery => "Recovery meter",
        }
    }
}

/// Online/offline flags per meter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    consumption: bool,
    recovery: bool,
}

impl ConnectionStatus {
    pub fn is_online(&self, meter: MeterType) -> bool {
        match meter {
            MeterType::Consumption => self.consumption,
            MeterType::Recovery => self.recovery,
        }
    }

    pub fn set(&mut self, meter: MeterType, online: bool) {
        match meter {
            MeterType::Consumption => self.consumption = online,
            MeterType::Recovery => self.recovery = online,
        }
    }
}

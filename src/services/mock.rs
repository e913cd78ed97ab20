use crate::models::{Reading, ReadingSet};
use crate::state::SharedRandom;

/// Shape of one synthetic reading
#[derive(Debug, Clone, Copy)]
pub struct MockField {
    pub name: &'static str,
    pub center: f64,
    pub half_width: f64,
    pub decimals: usize,
    pub unit: &'static str,
}

/// Synthetic fields in index order
pub const MOCK_FIELDS: [MockField; 8] = [
    MockField { name: "Voltage", center: 220.0, half_width: 5.0, decimals: 1, unit: "V" },
    MockField { name: "Current", center: 20.0, half_width: 2.5, decimals: 2, unit: "A" },
    MockField { name: "Frequency", center: 60.0, half_width: 0.25, decimals: 1, unit: "Hz" },
    MockField { name: "THD_V", center: 99.0, half_width: 1.0, decimals: 1, unit: "%" },
    MockField { name: "THD_A", center: 1.5, half_width: 0.5, decimals: 1, unit: "%" },
    MockField { name: "PF", center: 0.998, half_width: 0.002, decimals: 3, unit: "" },
    MockField { name: "Daily Energy Usage", center: 9999.0, half_width: 100.0, decimals: 0, unit: "kW" },
    MockField { name: "Daily Energy", center: 8888.0, half_width: 100.0, decimals: 0, unit: "kW" },
];

/// Generate a reading set with every value jittered around its center
pub fn generate_mock(rng: &SharedRandom) -> ReadingSet {
    ReadingSet::new(
        MOCK_FIELDS
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let value = field.center + rng.jitter(field.half_width);
                Reading::new(
                    index as i64,
                    field.name,
                    format!("{:.*}", field.decimals, value),
                    field.unit,
                )
            })
            .collect(),
    )
}

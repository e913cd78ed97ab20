use crate::models::ReadingSet;
use crate::state::view::{card_value_id, ViewBinding};

/// Binding of a card label to a reading position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBinding {
    pub label: &'static str,
    pub index: usize,
    pub unit: &'static str,
}

impl CardBinding {
    /// Power factor is shown with three decimals, everything else with one
    pub fn decimals(&self) -> usize {
        if self.label == "PF" {
            3
        } else {
            1
        }
    }
}

/// Card labels in display order
pub const CARD_BINDINGS: [CardBinding; 8] = [
    CardBinding { label: "Voltage", index: 0, unit: "V" },
    CardBinding { label: "Current", index: 1, unit: "A" },
    CardBinding { label: "Frequency", index: 2, unit: "Hz" },
    CardBinding { label: "PF", index: 5, unit: "" },
    CardBinding { label: "THD_V", index: 3, unit: "%" },
    CardBinding { label: "THD_A", index: 4, unit: "%" },
    CardBinding { label: "Daily Energy Usage", index: 6, unit: "kW" },
    CardBinding { label: "Daily Energy", index: 7, unit: "kW" },
];

/// Look up the binding for a card label
pub fn binding_for(label: &str) -> Option<&'static CardBinding> {
    CARD_BINDINGS.iter().find(|b| b.label == label)
}

/// Text shown in a card for the given readings
pub fn format_card_value(binding: &CardBinding, readings: &ReadingSet) -> String {
    let value = readings
        .get(binding.index)
        .map(|r| r.numeric_value())
        .unwrap_or(0.0);

    let formatted = format!("{:.*}", binding.decimals(), value);
    if binding.unit.is_empty() {
        formatted
    } else {
        format!("{} {}", formatted, binding.unit)
    }
}

/// Write every bound card value into the view
pub fn render_cards(readings: &ReadingSet, view: &dyn ViewBinding) {
    for binding in CARD_BINDINGS.iter() {
        view.set_text(
            &card_value_id(binding.label),
            &format_card_value(binding, readings),
        );
    }
}

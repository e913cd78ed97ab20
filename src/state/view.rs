//! Id-addressed view state.
//!
//! Services write text, visibility and CSS classes by element id; Leptos
//! components read them back reactively. The headless [`MemoryView`] stores
//! the same state without a rendering surface.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use leptos::*;

/// Element ids shared by services and components
pub mod ids {
    pub const CURRENT_DATE: &str = "currentDate";
    pub const CURRENT_TIME: &str = "currentTime";
    pub const STATION_NAME: &str = "stationName";

    pub const SETTINGS_MODAL: &str = "settingsModal";
    pub const ENGINEERING_MODAL: &str = "engineeringModal";
    pub const ENGINEERING_MODE_BUTTON: &str = "engineeringModeBtn";

    pub const WORK_STATION_NAME: &str = "workStationName";
    pub const VOLTAGE_LOG_TIME: &str = "voltageLogTime";

    pub const CONSUMPTION_METER_IP: &str = "consumptionMeterIP";
    pub const CONSUMPTION_METER_PORT: &str = "consumptionMeterPort";
    pub const CONSUMPTION_METER_ID: &str = "consumptionMeterID";
    pub const RECOVERY_METER_IP: &str = "recoveryMeterIP";
    pub const RECOVERY_METER_PORT: &str = "recoveryMeterPort";
    pub const RECOVERY_METER_ID: &str = "recoveryMeterID";

    pub const CONSUMPTION_STATUS: &str = "consumptionStatus";
    pub const RECOVERY_STATUS: &str = "recoveryStatus";

    pub const SYSTEM_TIME: &str = "systemTime";
    pub const METER_TIME: &str = "meterTime";

    /// Prefix of the value element of a small card, followed by the card label
    pub const CARD_VALUE_PREFIX: &str = "card-value:";
}

/// Read/write access to displayed elements
pub trait ViewBinding {
    fn text(&self, id: &str) -> Option<String>;
    fn set_text(&self, id: &str, text: &str);
    fn is_visible(&self, id: &str) -> bool;
    fn set_visible(&self, id: &str, visible: bool);
    fn class(&self, id: &str) -> Option<String>;
    fn set_class(&self, id: &str, class: &str);

    /// Text content, empty when the element has none
    fn text_or_empty(&self, id: &str) -> String {
        self.text(id).unwrap_or_default()
    }
}

/// Element id of the value slot of the card with the given label
pub fn card_value_id(label: &str) -> String {
    format!("{}{}", ids::CARD_VALUE_PREFIX, label)
}

/// View state backed by Leptos signals.
///
/// Reads are tracked, so closures in `view!` that call [`ViewBinding::text`]
/// re-render when a service writes the same id.
#[derive(Clone, Copy)]
pub struct SignalView {
    texts: RwSignal<HashMap<String, String>>,
    visible: RwSignal<HashSet<String>>,
    classes: RwSignal<HashMap<String, String>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            texts: create_rw_signal(HashMap::new()),
            visible: create_rw_signal(HashSet::new()),
            classes: create_rw_signal(HashMap::new()),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBinding for SignalView {
    fn text(&self, id: &str) -> Option<String> {
        self.texts.with(|texts| texts.get(id).cloned())
    }

    fn set_text(&self, id: &str, text: &str) {
        let unchanged = self
            .texts
            .with_untracked(|texts| texts.get(id).map(String::as_str) == Some(text));
        if !unchanged {
            self.texts.update(|texts| {
                texts.insert(id.to_string(), text.to_string());
            });
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.visible.with(|visible| visible.contains(id))
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if self.visible.with_untracked(|v| v.contains(id)) != visible {
            self.visible.update(|v| {
                if visible {
                    v.insert(id.to_string());
                } else {
                    v.remove(id);
                }
            });
        }
    }

    fn class(&self, id: &str) -> Option<String> {
        self.classes.with(|classes| classes.get(id).cloned())
    }

    fn set_class(&self, id: &str, class: &str) {
        let unchanged = self
            .classes
            .with_untracked(|classes| classes.get(id).map(String::as_str) == Some(class));
        if !unchanged {
            self.classes.update(|classes| {
                classes.insert(id.to_string(), class.to_string());
            });
        }
    }
}

/// Headless view state
#[derive(Debug, Default)]
pub struct MemoryView {
    texts: RefCell<HashMap<String, String>>,
    visible: RefCell<HashSet<String>>,
    classes: RefCell<HashMap<String, String>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewBinding for MemoryView {
    fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts
            .borrow_mut()
            .insert(id.to_string(), text.to_string());
    }

    fn is_visible(&self, id: &str) -> bool {
        self.visible.borrow().contains(id)
    }

    fn set_visible(&self, id: &str, visible: bool) {
        let mut set = self.visible.borrow_mut();
        if visible {
            set.insert(id.to_string());
        } else {
            set.remove(id);
        }
    }

    fn class(&self, id: &str) -> Option<String> {
        self.classes.borrow().get(id).cloned()
    }

    fn set_class(&self, id: &str, class: &str) {
        self.classes
            .borrow_mut()
            .insert(id.to_string(), class.to_string());
    }
}

mod engineering_modal;
mod field;
mod settings_modal;

pub use engineering_modal::EngineeringModal;
pub use settings_modal::SettingsModal;

pub mod dashboard;
pub mod layout;
pub mod modals;
pub mod notifications;

pub use dashboard::Dashboard;
pub use modals::{EngineeringModal, SettingsModal};
pub use notifications::Toasts;

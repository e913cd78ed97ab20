pub mod cards;
pub mod clock;
pub mod connection_tester;
pub mod mock;
pub mod scheduler;
pub mod settings_store;
pub mod trees;

pub use cards::{render_cards, CardBinding, CARD_BINDINGS};
pub use connection_tester::ConnectionTester;
pub use mock::generate_mock;
pub use scheduler::{Dashboard, RefreshScheduler, Spawner};
pub use settings_store::{BrowserStorage, KeyValueStore, MemoryStore, SettingsStore, StorageError};
pub use trees::{format_large_number, TreeScale};

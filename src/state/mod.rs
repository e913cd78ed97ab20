pub mod context;
pub mod modals;
pub mod notifications;
pub mod random;
pub mod timer;
pub mod view;

pub use context::{provide_app_context, use_app_context, use_toasts, AppContext};
pub use modals::{KeyPress, ModalController};
pub use notifications::{NotificationLog, Notifier, Toast, ToastKind, ToastQueue};
pub use random::{RandomSource, SharedRandom};
pub use timer::{BrowserSleeper, PeriodicTask, Sleeper};
pub use view::{ids, MemoryView, SignalView, ViewBinding};

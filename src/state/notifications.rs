use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::*;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Toast variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// CSS modifier class
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    /// Background color
    pub fn color(&self) -> &'static str {
        match self {
            Self::Success => "#27ae60",
            Self::Error => "#e74c3c",
            Self::Info => "#3498db",
            Self::Warning => "#f39c12",
        }
    }
}

/// A user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Sink for user-visible notifications
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Toasts rendered by the notification stack
#[derive(Clone)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Rc<Cell<u64>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str, kind: ToastKind) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                kind,
            })
        });

        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::callback::Timeout;

            let toasts = self.toasts;
            Timeout::new(TOAST_DURATION_MS, move || {
                toasts.update(|toasts| toasts.retain(|t| t.id != id));
            })
            .forget();
        }
    }
}

/// Headless notifier that keeps every toast
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<Toast>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.entries.borrow().clone()
    }

    /// Messages of the given kind in order of arrival
    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, message: &str, kind: ToastKind) {
        let mut entries = self.entries.borrow_mut();
        let id = entries.len() as u64;
        entries.push(Toast {
            id,
            message: message.to_string(),
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filters_by_kind() {
        let log = NotificationLog::new();
        log.notify("Testing consumption meter...", ToastKind::Info);
        log.notify("Settings saved", ToastKind::Success);
        log.notify("Save failed", ToastKind::Error);

        assert_eq!(log.entries().len(), 3);
        assert_eq!(log.messages(ToastKind::Success), vec!["Settings saved"]);
        assert_eq!(log.messages(ToastKind::Error), vec!["Save failed"]);

        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::Success.color(), "#27ae60");
        assert_eq!(ToastKind::Error.color(), "#e74c3c");
        assert_eq!(ToastKind::Info.color(), "#3498db");
        assert_eq!(ToastKind::Warning.color(), "#f39c12");
    }
}

//! User-facing status messages.

mod notification;
mod toaster;

pub use notification::{
    Notification, NotificationId, Severity, ToastStyle, ToastView, TOAST_EXIT_MS,
    TOAST_LIFETIME_MS,
};
pub use toaster::Toaster;

use std::rc::Rc;

/// Reports the outcome of a user action.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that only writes to the log. Used when no toast host is mounted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Info | Severity::Success => log::info!("{}", message),
        }
    }
}

/// Shared notifier handed down through Yew context.
#[derive(Clone)]
pub struct NotifierHandle(pub Rc<dyn Notifier>);

impl NotifierHandle {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self(Rc::new(notifier))
    }
}

impl Default for NotifierHandle {
    fn default() -> Self {
        Self::new(LogNotifier)
    }
}

impl PartialEq for NotifierHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

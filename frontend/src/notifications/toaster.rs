use super::notification::{
    Notification, NotificationId, Severity, ToastStyle, ToastView, TOAST_EXIT_MS,
    TOAST_LIFETIME_MS,
};
use super::Notifier;
use crate::platform::{Clock, Scheduler};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use yew::Callback;

struct ToasterInner {
    current: RefCell<Option<ToastView>>,
    next_id: Cell<u64>,
    style: ToastStyle,
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn Clock>,
    surface: Callback<Option<ToastView>>,
}

/// Single-slot toast controller.
///
/// Showing a toast replaces whatever is on screen. Each toast lives for
/// `TOAST_LIFETIME_MS`, then plays a `TOAST_EXIT_MS` exit animation and is
/// removed. Timers belonging to a replaced or dismissed toast find a
/// different id in the slot and do nothing.
#[derive(Clone)]
pub struct Toaster {
    inner: Rc<ToasterInner>,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Toaster {
    pub fn new(
        style: ToastStyle,
        scheduler: Rc<dyn Scheduler>,
        clock: Rc<dyn Clock>,
        surface: Callback<Option<ToastView>>,
    ) -> Self {
        Self {
            inner: Rc::new(ToasterInner {
                current: RefCell::new(None),
                next_id: Cell::new(1),
                style,
                scheduler,
                clock,
                surface,
            }),
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: impl Into<Severity>) -> NotificationId {
        let inner = &self.inner;
        let id = NotificationId(inner.next_id.get());
        inner.next_id.set(id.0 + 1);

        let view = ToastView {
            notification: Notification::new(id, message, severity.into(), inner.clock.now()),
            style: inner.style.clone(),
            leaving: false,
        };
        if let Some(previous) = inner.current.replace(Some(view.clone())) {
            log::debug!("Toast {} replaced by {}", previous.id(), id);
        }
        inner.surface.emit(Some(view));

        let weak = Rc::downgrade(inner);
        inner.scheduler.set_timeout(
            TOAST_LIFETIME_MS,
            Box::new(move || with_toaster(&weak, |toaster| toaster.begin_exit(id))),
        );
        id
    }

    /// Removes the toast right away, skipping the exit animation.
    pub fn dismiss(&self, id: NotificationId) {
        if self.take_if_current(id) {
            self.inner.surface.emit(None);
        }
    }

    pub fn current(&self) -> Option<ToastView> {
        self.inner.current.borrow().clone()
    }

    fn begin_exit(&self, id: NotificationId) {
        let leaving = {
            let mut current = self.inner.current.borrow_mut();
            match current.as_mut() {
                Some(view) if view.id() == id && !view.leaving => {
                    view.leaving = true;
                    Some(view.clone())
                }
                _ => None,
            }
        };
        let Some(view) = leaving else { return };
        self.inner.surface.emit(Some(view));

        let weak = Rc::downgrade(&self.inner);
        self.inner.scheduler.set_timeout(
            TOAST_EXIT_MS,
            Box::new(move || with_toaster(&weak, |toaster| toaster.finish(id))),
        );
    }

    fn finish(&self, id: NotificationId) {
        if self.take_if_current(id) {
            self.inner.surface.emit(None);
        }
    }

    fn take_if_current(&self, id: NotificationId) -> bool {
        let mut current = self.inner.current.borrow_mut();
        if current.as_ref().map(ToastView::id) == Some(id) {
            *current = None;
            true
        } else {
            false
        }
    }
}

fn with_toaster(weak: &Weak<ToasterInner>, f: impl FnOnce(&Toaster)) {
    if let Some(inner) = weak.upgrade() {
        f(&Toaster { inner });
    }
}

impl Notifier for Toaster {
    fn notify(&self, message: &str, severity: Severity) {
        self.show(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::ManualScheduler;

    fn toaster() -> (Toaster, Rc<ManualScheduler>, Rc<RefCell<Vec<Option<ToastView>>>>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let frames = Rc::new(RefCell::new(Vec::new()));
        let surface = {
            let frames = frames.clone();
            Callback::from(move |view| frames.borrow_mut().push(view))
        };
        let toaster = Toaster::new(ToastStyle::portal(), scheduler.clone(), scheduler.clone(), surface);
        (toaster, scheduler, frames)
    }

    #[test]
    fn toast_leaves_after_lifetime_and_is_gone_after_exit() {
        let (toaster, scheduler, frames) = toaster();
        let id = toaster.show("Saved", Severity::Success);

        scheduler.advance(4_999);
        assert!(!toaster.current().unwrap().leaving);

        scheduler.advance(1);
        let leaving = toaster.current().unwrap();
        assert_eq!(leaving.id(), id);
        assert!(leaving.leaving);

        scheduler.advance(299);
        assert!(toaster.current().is_some());
        scheduler.advance(1);
        assert!(toaster.current().is_none());
        assert_eq!(frames.borrow().len(), 3);
        assert_eq!(frames.borrow().last(), Some(&None));
    }

    #[test]
    fn new_toast_replaces_current_and_old_timers_do_nothing() {
        let (toaster, scheduler, _) = toaster();
        toaster.show("first", Severity::Info);
        scheduler.advance(3_000);
        let second = toaster.show("second", Severity::Warning);

        // First toast's lifetime ends here; the second must be untouched.
        scheduler.advance(2_000);
        let current = toaster.current().unwrap();
        assert_eq!(current.id(), second);
        assert!(!current.leaving);

        scheduler.advance(3_000);
        assert!(toaster.current().unwrap().leaving);
        scheduler.advance(300);
        assert!(toaster.current().is_none());
    }

    #[test]
    fn dismiss_is_immediate_and_ignores_stale_ids() {
        let (toaster, scheduler, frames) = toaster();
        let first = toaster.show("one", Severity::Info);
        let second = toaster.show("two", Severity::Error);

        toaster.dismiss(first);
        assert_eq!(toaster.current().unwrap().id(), second);

        toaster.dismiss(second);
        assert!(toaster.current().is_none());
        assert_eq!(frames.borrow().last(), Some(&None));

        let emitted = frames.borrow().len();
        scheduler.advance(10_000);
        assert_eq!(frames.borrow().len(), emitted);
    }

    #[test]
    fn dropped_toaster_turns_pending_timers_into_no_ops() {
        let (toaster, scheduler, frames) = toaster();
        toaster.show("bye", Severity::Info);
        drop(toaster);
        scheduler.advance(6_000);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn unknown_severity_renders_with_info_colors() {
        let (toaster, _, _) = toaster();
        toaster.show("x", "bogus-severity");
        let view = toaster.current().unwrap();
        assert_eq!(view.notification.severity, Severity::Info);
        assert!(view.css().contains(Severity::Info.color()));
    }
}

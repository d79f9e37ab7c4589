use crate::notifications::{Notifier, Severity};
use crate::platform::Scheduler;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use yew::Callback;

pub const DROP_RESET_MS: u32 = 3_000;
pub const DEFAULT_DROP_LABEL: &str = "Drop here";
pub const DRAG_MIME: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDropView {
    pub source_dimmed: bool,
    pub hovering: bool,
    pub occupied: bool,
    pub label: String,
}

impl Default for DragDropView {
    fn default() -> Self {
        Self {
            source_dimmed: false,
            hovering: false,
            occupied: false,
            label: DEFAULT_DROP_LABEL.to_string(),
        }
    }
}

impl DragDropView {
    pub fn source_style(&self) -> &'static str {
        if self.source_dimmed {
            "opacity: 0.5;"
        } else {
            "opacity: 1;"
        }
    }

    pub fn zone_style(&self) -> &'static str {
        if self.occupied {
            "background: rgba(37, 211, 102, 0.2); border-color: #25D366;"
        } else {
            ""
        }
    }
}

struct DragDropInner {
    view: RefCell<DragDropView>,
    /// Bumped on every drop so only the latest drop's reset applies.
    drops: Cell<u64>,
    scheduler: Rc<dyn Scheduler>,
    notifier: Rc<dyn Notifier>,
    on_change: Callback<DragDropView>,
}

/// State of the drag source and drop zone on the demo page.
#[derive(Clone)]
pub struct DragDropDemo {
    inner: Rc<DragDropInner>,
}

impl DragDropDemo {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        notifier: Rc<dyn Notifier>,
        on_change: Callback<DragDropView>,
    ) -> Self {
        Self {
            inner: Rc::new(DragDropInner {
                view: RefCell::new(DragDropView::default()),
                drops: Cell::new(0),
                scheduler,
                notifier,
                on_change,
            }),
        }
    }

    pub fn view(&self) -> DragDropView {
        self.inner.view.borrow().clone()
    }

    pub fn drag_start(&self) {
        self.update(|view| view.source_dimmed = true);
    }

    pub fn drag_over(&self) {
        self.update(|view| view.hovering = true);
    }

    pub fn drag_leave(&self) {
        self.update(|view| view.hovering = false);
    }

    pub fn drag_end(&self) {
        self.update(|view| view.source_dimmed = false);
    }

    pub fn drop(&self, payload: &str) {
        self.update(|view| {
            view.hovering = false;
            view.occupied = true;
            view.label = format!("✅ Dropped: \"{}\"", payload);
        });
        self.inner
            .notifier
            .notify("✅ Item dropped successfully!", Severity::Success);

        let generation = self.inner.drops.get() + 1;
        self.inner.drops.set(generation);
        let weak: Weak<DragDropInner> = Rc::downgrade(&self.inner);
        self.inner.scheduler.set_timeout(
            DROP_RESET_MS,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                if inner.drops.get() != generation {
                    return;
                }
                DragDropDemo { inner }.update(|view| {
                    view.occupied = false;
                    view.label = DEFAULT_DROP_LABEL.to_string();
                    view.source_dimmed = false;
                });
            }),
        );
    }

    fn update(&self, change: impl FnOnce(&mut DragDropView)) {
        let snapshot = {
            let mut view = self.inner.view.borrow_mut();
            let before = view.clone();
            change(&mut *view);
            if *view == before {
                return;
            }
            view.clone()
        };
        self.inner.on_change.emit(snapshot);
    }
}

use nuna_portal::notifications::{Notifier, Severity};
use std::cell::RefCell;

/// Notifier that keeps every message it is handed.
#[derive(Default)]
pub struct Recorder {
    seen: RefCell<Vec<(String, Severity)>>,
}

impl Recorder {
    pub fn seen(&self) -> Vec<(String, Severity)> {
        self.seen.borrow().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.seen.borrow().iter().map(|(_, s)| *s).collect()
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str, severity: Severity) {
        self.seen.borrow_mut().push((message.to_string(), severity));
    }
}

//! Headless adapters: in-memory storage, a virtual-time scheduler, a scripted
//! geolocator and a link log. Used by tests and anywhere the page logic runs
//! without a browser.

use super::{
    Clock, Coordinates, GeoErrorKind, Geolocator, KeyValueStore, LinkOpener, PositionCallback,
    PositionOptions, Scheduler,
};
use crate::error::PortalError;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// `KeyValueStore` backed by a `HashMap`, with an optional byte quota that
/// makes writes fail the way `localStorage` does when full.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        if let Some(quota) = self.quota {
            if self.used_bytes_without(key) + key.len() + value.len() > quota {
                return Err(PortalError::Storage(format!(
                    "QuotaExceededError: storing '{}' exceeds the {} byte quota",
                    key, quota
                )));
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortalError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerState {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

impl SchedulerState {
    fn push(&mut self, due_ms: u64, run: Box<dyn FnOnce()>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTask { due_ms, seq, run });
    }
}

/// Scheduler whose time only moves when `advance` is called. Tasks run in due
/// order (ties in scheduling order), and tasks scheduled by a running task are
/// picked up within the same `advance` call when they fall inside its window.
/// Doubles as a `Clock` anchored at `epoch`.
pub struct ManualScheduler {
    epoch: DateTime<Utc>,
    state: RefCell<SchedulerState>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::starting_at(Utc.timestamp_opt(1_735_732_800, 0).single().unwrap_or_default())
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(epoch: DateTime<Utc>) -> Self {
        Self {
            epoch,
            state: RefCell::new(SchedulerState::default()),
        }
    }

    /// Milliseconds elapsed since the scheduler was created.
    pub fn elapsed_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.elapsed_ms() + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let index = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due_ms <= target)
                    .min_by_key(|(_, task)| (task.due_ms, task.seq))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => {
                        let task = state.pending.swap_remove(index);
                        state.now_ms = task.due_ms;
                        Some(task)
                    }
                    None => {
                        state.now_ms = target;
                        None
                    }
                }
            };

            let Some(task) = next else { break };
            (task.run)();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due = state.now_ms + u64::from(delay_ms);
        state.push(due, task);
    }
}

impl Clock for ManualScheduler {
    fn now(&self) -> DateTime<Utc> {
        self.epoch + Duration::milliseconds(self.elapsed_ms() as i64)
    }
}

/// Geolocator that answers every request with the same scripted outcome.
/// `None` models a browser without the Geolocation API.
#[derive(Debug, Clone)]
pub struct FixedGeolocator {
    outcome: Option<Result<Coordinates, GeoErrorKind>>,
    requests: Cell<usize>,
}

impl FixedGeolocator {
    pub fn unsupported() -> Self {
        Self {
            outcome: None,
            requests: Cell::new(0),
        }
    }

    pub fn resolving(coordinates: Coordinates) -> Self {
        Self {
            outcome: Some(Ok(coordinates)),
            requests: Cell::new(0),
        }
    }

    pub fn failing(kind: GeoErrorKind) -> Self {
        Self {
            outcome: Some(Err(kind)),
            requests: Cell::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl Geolocator for FixedGeolocator {
    fn is_supported(&self) -> bool {
        self.outcome.is_some()
    }

    fn current_position(&self, _options: PositionOptions, done: PositionCallback) {
        self.requests.set(self.requests.get() + 1);
        match self.outcome {
            Some(outcome) => done(outcome),
            None => log::warn!("Position requested from an unsupported geolocator"),
        }
    }
}

/// Records opened links instead of navigating.
#[derive(Debug, Default)]
pub struct LinkLog {
    opened: RefCell<Vec<String>>,
}

impl LinkLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for LinkLog {
    fn open_new_tab(&self, url: &str) -> Result<(), PortalError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn quota_rejects_oversized_writes_but_allows_overwrites_within_budget() {
        let store = MemoryStore::with_quota(8);
        store.set("ab", "cdef").unwrap();
        store.set("ab", "cdefgh").unwrap();
        let err = store.set("ab", "cdefghi").unwrap_err();
        assert!(err.to_string().starts_with("QuotaExceededError"));
        assert_eq!(store.get("ab").unwrap().as_deref(), Some("cdefgh"));
    }

    #[test]
    fn timeouts_fire_in_due_order_only_when_time_advances() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(300, "b"), (100, "a"), (300, "c")] {
            let fired = fired.clone();
            scheduler.set_timeout(delay, Box::new(move || fired.borrow_mut().push(tag)));
        }

        scheduler.advance(99);
        assert!(fired.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*fired.borrow(), vec!["a"]);
        scheduler.advance(200);
        assert_eq!(*fired.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.elapsed_ms(), 300);
    }

    #[test]
    fn tasks_scheduled_from_tasks_run_in_the_same_window() {
        let scheduler = Rc::new(ManualScheduler::new());
        let fired_at = Rc::new(Cell::new(0));
        {
            let inner = scheduler.clone();
            let fired_at = fired_at.clone();
            scheduler.set_timeout(
                100,
                Box::new(move || {
                    let clock = inner.clone();
                    inner.set_timeout(
                        50,
                        Box::new(move || fired_at.set(clock.elapsed_ms())),
                    );
                }),
            );
        }
        scheduler.advance(1_000);
        assert_eq!(fired_at.get(), 150);
    }

    #[test]
    fn clock_follows_virtual_time() {
        let scheduler = ManualScheduler::new();
        let start = scheduler.now();
        scheduler.advance(180_000);
        assert_eq!(scheduler.now() - start, Duration::minutes(3));
    }

    #[test]
    fn fixed_geolocator_reports_scripted_outcome() {
        let geo = FixedGeolocator::failing(GeoErrorKind::Timeout);
        let result = Rc::new(RefCell::new(None));
        {
            let result = result.clone();
            geo.current_position(
                PositionOptions::default(),
                Box::new(move |outcome| *result.borrow_mut() = Some(outcome)),
            );
        }
        assert_eq!(*result.borrow(), Some(Err(GeoErrorKind::Timeout)));
        assert_eq!(geo.requests(), 1);
        assert!(!FixedGeolocator::unsupported().is_supported());
    }
}

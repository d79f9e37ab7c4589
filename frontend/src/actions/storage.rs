use crate::error::PortalError;
use crate::notifications::{Notifier, Severity};
use crate::platform::{Clock, KeyValueStore};
use chrono::{DateTime, SecondsFormat, Utc};
use std::rc::Rc;

pub const DATA_KEY: &str = "demo-data";
pub const TIMESTAMP_KEY: &str = "demo-timestamp";
pub const SESSION_KEY: &str = "demo-session";
pub const SESSION_VALUE: &str = "This will be cleared when tab closes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub data: String,
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(StoredEntry),
    /// Nothing saved. Not an error.
    Empty,
    Failed,
}

/// Save/load/clear buttons of the Web Storage demo card.
#[derive(Clone)]
pub struct StorageDemo {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    notifier: Rc<dyn Notifier>,
}

impl StorageDemo {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            clock,
            notifier,
        }
    }

    /// Returns `true` when the text was stored.
    pub fn save(&self, input: &str) -> bool {
        let value = input.trim();
        if value.is_empty() {
            self.notifier
                .notify("⚠️ Please enter some text first", Severity::Warning);
            return false;
        }

        let timestamp = self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let result = self
            .store
            .set(DATA_KEY, value)
            .and_then(|_| self.store.set(TIMESTAMP_KEY, &timestamp));
        match result {
            Ok(()) => {
                self.notifier
                    .notify("✅ Data saved to localStorage", Severity::Success);
                true
            }
            Err(e) => {
                self.report("saving to", &e);
                false
            }
        }
    }

    pub fn load(&self) -> LoadOutcome {
        match self.read() {
            Ok(Some(entry)) => {
                self.notifier
                    .notify("✅ Data loaded from localStorage", Severity::Success);
                LoadOutcome::Loaded(entry)
            }
            Ok(None) => {
                self.notifier
                    .notify("ℹ️ No data found in localStorage", Severity::Info);
                LoadOutcome::Empty
            }
            Err(e) => {
                self.report("loading from", &e);
                LoadOutcome::Failed
            }
        }
    }

    /// Returns `true` when both keys were removed.
    pub fn clear(&self) -> bool {
        let result = self
            .store
            .remove(DATA_KEY)
            .and_then(|_| self.store.remove(TIMESTAMP_KEY));
        match result {
            Ok(()) => {
                self.notifier
                    .notify("✅ localStorage cleared", Severity::Success);
                true
            }
            Err(e) => {
                self.report("clearing", &e);
                false
            }
        }
    }

    /// Text for the storage output panel. Does not notify.
    pub fn summary(&self) -> String {
        match self.read() {
            Ok(Some(entry)) => {
                let saved = entry
                    .saved_at
                    .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                format!("Stored: \"{}\" (Saved: {})", entry.data, saved)
            }
            Ok(None) => "No data in localStorage".to_string(),
            Err(e) => {
                log::warn!("Failed to read storage for summary: {}", e);
                "No data in localStorage".to_string()
            }
        }
    }

    fn read(&self) -> Result<Option<StoredEntry>, PortalError> {
        let Some(data) = self.store.get(DATA_KEY)? else {
            return Ok(None);
        };
        let saved_at = self
            .store
            .get(TIMESTAMP_KEY)?
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|at| at.with_timezone(&Utc));
        Ok(Some(StoredEntry { data, saved_at }))
    }

    fn report(&self, action: &str, error: &PortalError) {
        log::error!("Storage error while {} localStorage: {}", action, error);
        self.notifier.notify(
            &format!("❌ Error {} localStorage: {}", action, error),
            Severity::Error,
        );
    }
}

/// Writes the session-scoped demo value and reads it back.
pub fn demonstrate_session_storage(
    store: &dyn KeyValueStore,
) -> Result<Option<String>, PortalError> {
    store.set(SESSION_KEY, SESSION_VALUE)?;
    let value = store.get(SESSION_KEY)?;
    log::info!("Session storage: {:?}", value);
    Ok(value)
}

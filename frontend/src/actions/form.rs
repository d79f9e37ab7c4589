use crate::notifications::{Notifier, Severity};
use crate::platform::Scheduler;
use serde_json::{Map, Value};
use std::rc::Rc;

pub const FORM_RESET_MS: u32 = 2_000;
pub const DEFAULT_RANGE_VALUE: &str = "50";

/// Collects submitted fields into a JSON object. Later duplicates of a name
/// (checkbox groups, multi-selects) overwrite earlier ones.
pub fn fields_to_json<I, K, V>(fields: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map: Map<String, Value> = fields
        .into_iter()
        .map(|(name, value)| (name.into(), Value::String(value.into())))
        .collect();
    Value::Object(map)
}

#[derive(Clone)]
pub struct FormDemo {
    scheduler: Rc<dyn Scheduler>,
    notifier: Rc<dyn Notifier>,
}

impl FormDemo {
    pub fn new(scheduler: Rc<dyn Scheduler>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            scheduler,
            notifier,
        }
    }

    /// Logs the submission, confirms it, and runs `reset` after
    /// `FORM_RESET_MS`.
    pub fn submit(&self, fields: Vec<(String, String)>, reset: Box<dyn FnOnce()>) -> Value {
        let data = fields_to_json(fields);
        log::info!("Form submitted: {}", data);
        self.notifier.notify(
            "✅ Form submitted successfully! Check console for data.",
            Severity::Success,
        );
        self.scheduler.set_timeout(FORM_RESET_MS, reset);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::MockNotifier;
    use crate::platform::memory::ManualScheduler;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn submit_confirms_and_resets_after_two_seconds() {
        let scheduler = Rc::new(ManualScheduler::new());
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|_, severity| *severity == Severity::Success)
            .times(1)
            .return_const(());
        let form = FormDemo::new(scheduler.clone(), Rc::new(notifier));

        let reset = Rc::new(Cell::new(false));
        let data = {
            let reset = reset.clone();
            form.submit(
                vec![
                    ("name".to_string(), "Ada".to_string()),
                    ("volume".to_string(), "75".to_string()),
                ],
                Box::new(move || reset.set(true)),
            )
        };
        assert_eq!(data, json!({"name": "Ada", "volume": "75"}));

        scheduler.advance(1_999);
        assert!(!reset.get());
        scheduler.advance(1);
        assert!(reset.get());
    }

    #[test]
    fn duplicate_names_keep_the_last_value() {
        assert_eq!(
            fields_to_json([("color", "red"), ("color", "blue")]),
            json!({"color": "blue"})
        );
    }
}

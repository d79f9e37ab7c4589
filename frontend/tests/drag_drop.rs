//! Drag-and-drop and form demo timing.
mod common;

use common::Recorder;
use nuna_portal::actions::drag_drop::{DEFAULT_DROP_LABEL, DROP_RESET_MS};
use nuna_portal::actions::form::FORM_RESET_MS;
use nuna_portal::actions::{DragDropDemo, DragDropView, FormDemo};
use nuna_portal::notifications::Severity;
use nuna_portal::platform::memory::ManualScheduler;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::Callback;

fn demo() -> (DragDropDemo, Rc<ManualScheduler>, Rc<Recorder>, Rc<RefCell<Vec<DragDropView>>>) {
    let scheduler = Rc::new(ManualScheduler::new());
    let recorder = Rc::new(Recorder::default());
    let views: Rc<RefCell<Vec<DragDropView>>> = Rc::default();
    let on_change = {
        let views = views.clone();
        Callback::from(move |view| views.borrow_mut().push(view))
    };
    let demo = DragDropDemo::new(scheduler.clone(), recorder.clone(), on_change);
    (demo, scheduler, recorder, views)
}

#[test]
fn drop_shows_payload_and_reverts_after_exactly_three_seconds() {
    let (demo, scheduler, recorder, _views) = demo();
    demo.drag_start();
    demo.drag_over();
    demo.drop("📦 Drag me!");

    let view = demo.view();
    assert_eq!(view.label, "✅ Dropped: \"📦 Drag me!\"");
    assert!(view.occupied);
    assert!(!view.hovering);
    assert_eq!(recorder.severities(), vec![Severity::Success]);

    scheduler.advance(u64::from(DROP_RESET_MS) - 1);
    assert!(demo.view().occupied);

    scheduler.advance(1);
    let view = demo.view();
    assert_eq!(view.label, DEFAULT_DROP_LABEL);
    assert!(!view.occupied);
    assert!(!view.source_dimmed);
}

#[test]
fn newer_drop_keeps_its_own_label() {
    let (demo, scheduler, _recorder, _views) = demo();
    demo.drop("first");
    scheduler.advance(2_000);
    demo.drop("second");

    // First drop's reset comes due here.
    scheduler.advance(1_000);
    assert_eq!(demo.view().label, "✅ Dropped: \"second\"");

    scheduler.advance(2_000);
    assert_eq!(demo.view().label, DEFAULT_DROP_LABEL);
}

#[test]
fn every_change_reaches_the_view() {
    let (demo, scheduler, _recorder, views) = demo();
    demo.drag_start();
    demo.drag_end();
    demo.drop("x");
    scheduler.advance(u64::from(DROP_RESET_MS));

    let views = views.borrow();
    assert_eq!(views.len(), 4);
    assert!(views[0].source_dimmed);
    assert!(!views[1].source_dimmed);
    assert!(views[2].occupied);
    assert_eq!(views[3], DragDropView::default());
}

#[test]
fn form_submission_resets_after_two_seconds() {
    let scheduler = Rc::new(ManualScheduler::new());
    let recorder = Rc::new(Recorder::default());
    let form = FormDemo::new(scheduler.clone(), recorder.clone());
    let reset = Rc::new(Cell::new(false));

    let data = {
        let reset = reset.clone();
        form.submit(
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("satisfaction".to_string(), "80".to_string()),
            ],
            Box::new(move || reset.set(true)),
        )
    };

    assert_eq!(data, json!({ "name": "Ada", "satisfaction": "80" }));
    assert_eq!(recorder.severities(), vec![Severity::Success]);
    scheduler.advance(u64::from(FORM_RESET_MS) - 1);
    assert!(!reset.get());
    scheduler.advance(1);
    assert!(reset.get());
}

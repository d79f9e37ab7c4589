use crate::animation::reveal::{
    RevealGroup, RevealTracker, StaggerStyle, GROUP_ATTRIBUTE, INDEX_ATTRIBUTE, REVEALED_CLASS,
    REVEALED_INLINE_STYLES, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use crate::error::PortalError;
use crate::platform::browser::js_error_message;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live scroll-reveal observer. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn dom_error(e: JsValue) -> PortalError {
    PortalError::Dom(js_error_message(&e))
}

fn reveal_position(element: &Element) -> Option<(usize, usize)> {
    let group = element.get_attribute(GROUP_ATTRIBUTE)?.parse().ok()?;
    let index = element.get_attribute(INDEX_ATTRIBUTE)?.parse().ok()?;
    Some((group, index))
}

/// Hides every element matched by `groups`, tags it with its position, and
/// reveals it the first time it scrolls into view.
pub fn observe_reveal(groups: &[RevealGroup]) -> Result<RevealObserver, PortalError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| PortalError::Dom("no document".to_string()))?;
    let trackers = Rc::new(RefCell::new(Vec::<(RevealGroup, RevealTracker)>::with_capacity(
        groups.len(),
    )));

    let callback = {
        let trackers = trackers.clone();
        ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some((group, index)) = reveal_position(&target) else {
                    continue;
                };
                let revealed = trackers
                    .borrow_mut()
                    .get_mut(group)
                    .map(|(group, tracker)| {
                        (group.stagger, tracker.observe(index, entry.is_intersecting()))
                    });
                let stagger = match revealed {
                    Some((stagger, true)) => stagger,
                    _ => continue,
                };
                if let (StaggerStyle::TransitionDelay, Some(element)) =
                    (stagger, target.dyn_ref::<HtmlElement>())
                {
                    // Inline hidden state outranks the revealed class.
                    let style = element.style();
                    for (property, value) in REVEALED_INLINE_STYLES {
                        if let Err(e) = style.set_property(property, value) {
                            log::warn!("Could not set {}: {}", property, js_error_message(&e));
                        }
                    }
                }
                if let Err(e) = target.class_list().add_1(REVEALED_CLASS) {
                    log::warn!("Could not mark element revealed: {}", js_error_message(&e));
                }
                observer.unobserve(&target);
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom_error)?;

    for (group_index, group) in groups.iter().enumerate() {
        let nodes = document.query_selector_all(group.selector).map_err(dom_error)?;
        trackers
            .borrow_mut()
            .push((*group, RevealTracker::new(nodes.length() as usize)));

        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let index = i as usize;
            element
                .set_attribute(GROUP_ATTRIBUTE, &group_index.to_string())
                .map_err(dom_error)?;
            element
                .set_attribute(INDEX_ATTRIBUTE, &index.to_string())
                .map_err(dom_error)?;
            let style = element.style();
            for (property, value) in group.initial_styles(index) {
                style.set_property(property, &value).map_err(dom_error)?;
            }
            observer.observe(&element);
        }
        log::debug!("Observing {} element(s) for {}", nodes.length(), group.selector);
    }

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Starts the reveal observer once the calling component has rendered and
/// stops it on unmount.
#[hook]
pub fn use_scroll_reveal(groups: &'static [RevealGroup]) {
    use_effect_with_deps(
        move |_| {
            let observer = match observe_reveal(groups) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    log::warn!("Scroll reveal disabled: {}", e);
                    None
                }
            };
            move || drop(observer)
        },
        (),
    );
}

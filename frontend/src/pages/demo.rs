use crate::actions::drag_drop::DRAG_MIME;
use crate::actions::form::DEFAULT_RANGE_VALUE;
use crate::actions::storage::demonstrate_session_storage;
use crate::actions::{
    DragDropDemo, DragDropView, FormDemo, GeolocationDemo, LoadOutcome, StorageDemo,
};
use crate::animation::reveal::{RevealGroup, DEMO_CARDS};
use crate::components::{use_scroll_reveal, CanvasDemo, ToastHost};
use crate::notifications::{NotifierHandle, ToastStyle};
use crate::platform::browser::{
    js_error_message, BrowserClock, BrowserGeolocator, BrowserScheduler, BrowserStorage,
};
use crate::Route;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;
use yew_router::components::Link;

const REVEAL_GROUPS: &[RevealGroup] = &[DEMO_CARDS];
const DRAG_ITEM: &str = "📦 Drag me!";

/// Text fields of a form in document order. File inputs are skipped.
fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let form_data = match FormData::new_with_form(form) {
        Ok(form_data) => form_data,
        Err(e) => {
            log::error!("Could not read form: {}", js_error_message(&e));
            return Vec::new();
        }
    };
    let entries = match js_sys::try_iter(&form_data) {
        Ok(Some(entries)) => entries,
        _ => return Vec::new(),
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair: js_sys::Array = entry.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

#[function_component(DemoPage)]
pub fn demo_page() -> Html {
    html! {
        <ToastHost style={ToastStyle::demo()}>
            <DemoContent />
        </ToastHost>
    }
}

#[function_component(DemoContent)]
fn demo_content() -> Html {
    let notifier = use_context::<NotifierHandle>().unwrap_or_default();

    let storage = {
        let notifier = notifier.0.clone();
        use_state(move || {
            StorageDemo::new(Rc::new(BrowserStorage::local()), Rc::new(BrowserClock), notifier)
        })
    };
    let storage_input = use_state(String::new);
    let storage_output = use_state(String::new);

    let geolocation = {
        let notifier = notifier.0.clone();
        use_state(move || GeolocationDemo::new(Rc::new(BrowserGeolocator), notifier))
    };
    let location_output = use_state(String::new);

    let drag_view = use_state(DragDropView::default);
    let drag = {
        let notifier = notifier.0.clone();
        let drag_view = drag_view.clone();
        use_state(move || {
            DragDropDemo::new(
                Rc::new(BrowserScheduler),
                notifier,
                Callback::from(move |view| drag_view.set(view)),
            )
        })
    };

    let form = {
        let notifier = notifier.0.clone();
        use_state(move || FormDemo::new(Rc::new(BrowserScheduler), notifier))
    };
    let range_value = use_state(|| DEFAULT_RANGE_VALUE.to_string());

    // Fill the storage panel and run the session storage demo once.
    {
        let storage = (*storage).clone();
        let storage_output = storage_output.clone();
        use_effect_with_deps(
            move |_| {
                storage_output.set(storage.summary());
                if let Err(e) = demonstrate_session_storage(&BrowserStorage::session()) {
                    log::warn!("Session storage demo failed: {}", e);
                }
                || ()
            },
            (),
        );
    }
    use_scroll_reveal(REVEAL_GROUPS);

    let on_submit = {
        let form = (*form).clone();
        let range_value = range_value.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let element: HtmlFormElement = e.target_unchecked_into();
            let fields = form_fields(&element);
            let range_value = range_value.clone();
            form.submit(
                fields,
                Box::new(move || {
                    element.reset();
                    range_value.set(DEFAULT_RANGE_VALUE.to_string());
                }),
            );
        })
    };
    let on_range = {
        let range_value = range_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            range_value.set(input.value());
        })
    };

    let on_storage_input = {
        let storage_input = storage_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            storage_input.set(input.value());
        })
    };
    let on_save = {
        let storage = (*storage).clone();
        let storage_input = storage_input.clone();
        let storage_output = storage_output.clone();
        Callback::from(move |_: MouseEvent| {
            if storage.save(&storage_input) {
                storage_output.set(storage.summary());
            }
        })
    };
    let on_load = {
        let storage = (*storage).clone();
        let storage_input = storage_input.clone();
        let storage_output = storage_output.clone();
        Callback::from(move |_: MouseEvent| {
            if let LoadOutcome::Loaded(entry) = storage.load() {
                storage_input.set(entry.data);
                storage_output.set(storage.summary());
            }
        })
    };
    let on_clear = {
        let storage = (*storage).clone();
        let storage_input = storage_input.clone();
        let storage_output = storage_output.clone();
        Callback::from(move |_: MouseEvent| {
            if storage.clear() {
                storage_input.set(String::new());
                storage_output.set(storage.summary());
            }
        })
    };

    let on_locate = {
        let geolocation = (*geolocation).clone();
        let location_output = location_output.clone();
        Callback::from(move |_: MouseEvent| {
            let location_output = location_output.clone();
            geolocation.request(Callback::from(move |text| location_output.set(text)));
        })
    };

    let on_drag_start = {
        let drag = (*drag).clone();
        Callback::from(move |e: DragEvent| {
            if let Some(transfer) = e.data_transfer() {
                transfer.set_effect_allowed("move");
                if let Err(e) = transfer.set_data(DRAG_MIME, DRAG_ITEM) {
                    log::warn!("Could not set drag data: {}", js_error_message(&e));
                }
            }
            drag.drag_start();
        })
    };
    let on_drag_end = {
        let drag = (*drag).clone();
        Callback::from(move |_: DragEvent| drag.drag_end())
    };
    let on_drag_over = {
        let drag = (*drag).clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if let Some(transfer) = e.data_transfer() {
                transfer.set_drop_effect("move");
            }
            drag.drag_over();
        })
    };
    let on_drag_leave = {
        let drag = (*drag).clone();
        Callback::from(move |_: DragEvent| drag.drag_leave())
    };
    let on_drop = {
        let drag = (*drag).clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let payload = e
                .data_transfer()
                .and_then(|transfer| transfer.get_data(DRAG_MIME).ok())
                .unwrap_or_default();
            drag.drop(&payload);
        })
    };

    let view = &*drag_view;
    let zone_class = classes!("drop-zone", view.hovering.then_some("drag-over"));

    html! {
        <div class="demo">
            <style>{ DEMO_CSS }</style>

            <nav class="demo-nav">
                <Link<Route> to={Route::Support}>{ "← Back to Support" }</Link<Route>>
                <span>{ "HTML5 & CSS3 Demo" }</span>
            </nav>

            <div class="demo-grid">
                <section class="demo-card">
                    <h2>{ "📝 Forms" }</h2>
                    <form onsubmit={on_submit}>
                        <input type="text" name="name" placeholder="Your name" required=true />
                        <input type="email" name="email" placeholder="you@example.com" required=true />
                        <select name="topic">
                            <option value="support">{ "Support" }</option>
                            <option value="feedback">{ "Feedback" }</option>
                            <option value="other">{ "Other" }</option>
                        </select>
                        <label class="range-label">
                            { "Satisfaction: " }
                            <span id="range-value">{ (*range_value).clone() }</span>
                            <input
                                type="range"
                                name="satisfaction"
                                min="0"
                                max="100"
                                value={DEFAULT_RANGE_VALUE}
                                oninput={on_range}
                            />
                        </label>
                        <button type="submit">{ "Submit" }</button>
                    </form>
                </section>

                <section class="demo-card">
                    <h2>{ "🎨 Canvas" }</h2>
                    <CanvasDemo />
                </section>

                <section class="demo-card">
                    <h2>{ "💾 Web Storage" }</h2>
                    <input
                        id="storage-input"
                        type="text"
                        placeholder="Type something to store"
                        value={(*storage_input).clone()}
                        oninput={on_storage_input}
                    />
                    <div class="button-row">
                        <button onclick={on_save}>{ "Save" }</button>
                        <button onclick={on_load}>{ "Load" }</button>
                        <button onclick={on_clear}>{ "Clear" }</button>
                    </div>
                    <pre id="storage-output" class="output">{ (*storage_output).clone() }</pre>
                </section>

                <section class="demo-card">
                    <h2>{ "📍 Geolocation" }</h2>
                    <button onclick={on_locate}>{ "Get My Location" }</button>
                    <pre id="location-output" class="output">{ (*location_output).clone() }</pre>
                </section>

                <section class="demo-card">
                    <h2>{ "🖱️ Drag & Drop" }</h2>
                    <div
                        class="drag-source"
                        draggable="true"
                        style={view.source_style()}
                        ondragstart={on_drag_start}
                        ondragend={on_drag_end}
                    >
                        { DRAG_ITEM }
                    </div>
                    <div
                        class={zone_class}
                        style={view.zone_style()}
                        ondragover={on_drag_over}
                        ondragleave={on_drag_leave}
                        ondrop={on_drop}
                    >
                        { &view.label }
                    </div>
                </section>
            </div>
        </div>
    }
}

const DEMO_CSS: &str = r#"
.demo {
    min-height: 100vh;
    background: #0a0a0f;
    color: #f0f0f5;
    font-family: 'Outfit', sans-serif;
    padding-bottom: 4rem;
}
.demo-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}
.demo-nav a {
    color: #a0a0b0;
    text-decoration: none;
}
.demo-grid {
    max-width: 1100px;
    margin: 2rem auto 0;
    padding: 0 2rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 1.5rem;
}
.demo-card {
    background: #1a1a25;
    border: 1px solid rgba(255, 255, 255, 0.05);
    border-radius: 16px;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.demo-card.animate-in {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
.demo-card form {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.demo-card input[type="text"],
.demo-card input[type="email"],
.demo-card select {
    padding: 0.6rem 0.8rem;
    border-radius: 8px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: #0a0a0f;
    color: #f0f0f5;
}
.demo-card button {
    padding: 0.6rem 1rem;
    border: none;
    border-radius: 8px;
    background: #7c3aed;
    color: white;
    cursor: pointer;
}
.button-row {
    display: flex;
    gap: 0.5rem;
}
.output {
    min-height: 3rem;
    margin: 0;
    padding: 0.75rem;
    background: #0a0a0f;
    border-radius: 8px;
    white-space: pre-wrap;
    color: #a0a0b0;
}
#demo-canvas {
    width: 100%;
    max-width: 300px;
    border-radius: 8px;
    align-self: center;
}
.drag-source {
    padding: 1rem;
    background: #2563eb;
    border-radius: 8px;
    cursor: grab;
    text-align: center;
    transition: opacity 0.2s ease;
}
.drop-zone {
    padding: 2rem 1rem;
    border: 2px dashed rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    text-align: center;
    color: #a0a0b0;
    transition: background 0.2s ease, border-color 0.2s ease;
}
.drop-zone.drag-over {
    background: rgba(124, 58, 237, 0.2);
    border-color: #7c3aed;
}
"#;

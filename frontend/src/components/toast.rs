use crate::notifications::{NotificationId, NotifierHandle, ToastStyle, ToastView, Toaster};
use crate::platform::browser::{BrowserClock, BrowserScheduler};
use std::rc::Rc;
use yew::prelude::*;

const TOAST_CSS: &str = r#"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
.notification-toast {
    display: flex;
    align-items: center;
    gap: 1rem;
    justify-content: space-between;
}
.toast-close {
    background: none;
    border: none;
    color: white;
    font-size: 1.25rem;
    line-height: 1;
    cursor: pointer;
    opacity: 0.8;
    padding: 0;
}
.toast-close:hover {
    opacity: 1;
}
"#;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub style: ToastStyle,
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's toaster and hands it to descendants as a `NotifierHandle`
/// context.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let current = use_state(|| None::<ToastView>);
    let toaster = {
        let current = current.clone();
        let style = props.style.clone();
        use_state(move || {
            Toaster::new(
                style,
                Rc::new(BrowserScheduler),
                Rc::new(BrowserClock),
                Callback::from(move |view| current.set(view)),
            )
        })
    };
    let notifier = {
        let toaster = (*toaster).clone();
        use_state(move || NotifierHandle::new(toaster))
    };

    let on_close = {
        let toaster = (*toaster).clone();
        Callback::from(move |id: NotificationId| toaster.dismiss(id))
    };

    html! {
        <ContextProvider<NotifierHandle> context={(*notifier).clone()}>
            <style>{ TOAST_CSS }</style>
            { props.children.clone() }
            if let Some(view) = (*current).clone() {
                <ToastCard key={view.key()} view={view.clone()} on_close={on_close} />
            }
        </ContextProvider<NotifierHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    view: ToastView,
    on_close: Callback<NotificationId>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    let onclick = {
        let id = props.view.id();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div class={props.view.class()} style={props.view.css()} role="status">
            <span class="toast-message">{ &props.view.notification.message }</span>
            <button class="toast-close" aria-label="Dismiss notification" {onclick}>{ "×" }</button>
        </div>
    }
}

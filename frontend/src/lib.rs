//! NuNa support portal and HTML5 demo page, rendered client-side with Yew.
//!
//! Page logic lives in browser-free modules (`actions`, `notifications`,
//! `animation`, `uptime`) that talk to the host through the capability traits
//! in `platform`. `components` and `pages` wire them to the DOM.

pub mod actions;
pub mod animation;
pub mod components;
pub mod config;
pub mod error;
pub mod notifications;
pub mod pages;
pub mod platform;
pub mod uptime;

use pages::{DemoPage, SupportPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Support,
    #[at("/demo")]
    Demo,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Support => html! { <SupportPage /> },
        Route::Demo => html! { <DemoPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Support} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

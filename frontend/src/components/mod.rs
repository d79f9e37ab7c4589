//! DOM glue between the page components and the browser-free core.

pub mod canvas_demo;
pub mod scroll_reveal;
pub mod toast;

pub use canvas_demo::CanvasDemo;
pub use scroll_reveal::use_scroll_reveal;
pub use toast::ToastHost;

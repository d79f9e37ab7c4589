//! Handlers behind the buttons and drop targets of both pages. Each one maps a
//! user action to at most one platform call plus a notification.

pub mod contact;
pub mod drag_drop;
pub mod form;
pub mod geolocation;
pub mod storage;

pub use contact::ContactActions;
pub use drag_drop::{DragDropDemo, DragDropView};
pub use form::FormDemo;
pub use geolocation::GeolocationDemo;
pub use storage::{LoadOutcome, StorageDemo, StoredEntry};

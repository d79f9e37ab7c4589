pub mod demo;
pub mod support;

pub use demo::DemoPage;
pub use support::SupportPage;

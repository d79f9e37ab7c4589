pub mod canvas;
pub mod reveal;

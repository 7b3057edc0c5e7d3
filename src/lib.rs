#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod event;
pub mod panels;
pub mod renderer;
pub mod stroke;

pub use app::SketchApp;
pub use canvas::{Canvas, ERASE_RADIUS};
pub use event::CanvasEvent;
pub use renderer::Renderer;
pub use stroke::{Color, Stroke};

pub mod screen;
pub mod service;

pub use screen::{ArtsPlanScreen, Editor, EditorMode};
pub use service::demo_items;

pub mod components;
pub mod layouts;
pub mod pages;
pub mod paths;

// Re-exports for convenience
pub use layouts::desktop::{desktop_layout, Section};
pub use paths::{dom_id, segment};

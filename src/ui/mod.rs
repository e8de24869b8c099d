//! Terminal UI: screens, state, and the threads that feed it events.

pub mod app;
pub mod events;
pub mod footer;
pub mod gallery_view;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod poller;
pub mod prompt;
pub mod qr_image;
pub mod qr_view;
pub mod render;
pub mod resource;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use app::Route;

//! UI module for Modalist
//!
//! This module holds the bundled dialog components, layout helpers and a small
//! demo application that drives an overlay registry from a terminal.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::{AppComponent, AppState};
pub use layout::LayoutManager;
pub use renderer::run_app;

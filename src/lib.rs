//! Modalist - dynamic overlays for terminal user interfaces
//!
//! This library mounts short-lived components such as prompts and message
//! boxes on top of a ratatui application and removes them again once the user
//! is done. A prompt helper wraps the whole round trip in a future.
//!
//! # Modules
//!
//! * [`overlay`] - The overlay registry and the component trait
//! * [`prompt`] - Prompt and message helpers built on the registry
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup and the in-memory log buffer
//! * [`ui`] - Bundled dialogs, layout helpers and the demo application

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Registry of mounted overlays
pub mod overlay;

/// Prompt and message helpers
pub mod prompt;

/// Terminal user interface components and rendering
pub mod ui;

pub use overlay::{Attributes, EventHandlers, OverlayComponent, OverlayId, OverlayRegistry};
pub use prompt::{show_message, show_prompt, Prompt, PromptError};

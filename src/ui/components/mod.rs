//! Reusable UI components

pub mod dialogs;

pub use dialogs::{MessageDialog, PromptDialog};

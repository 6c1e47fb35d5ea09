//! Dialog components module

pub mod common;
mod message_dialog;
mod prompt_dialog;

pub use message_dialog::MessageDialog;
pub use prompt_dialog::PromptDialog;

//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Event names emitted by the bundled dialogs
pub const EVENT_CONFIRM: &str = "confirm";
pub const EVENT_CANCEL: &str = "cancel";
pub const EVENT_CLOSE: &str = "close";

// Attribute names read by the bundled dialogs
pub const ATTR_TITLE: &str = "title";
pub const ATTR_INITIAL_VALUE: &str = "initial_value";
pub const ATTR_BODY: &str = "body";

// Demo application text
pub const PROMPT_NAME_TITLE: &str = "Name?";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'Enter' to close";
pub const STATUS_IDLE: &str = "Press 'n' to open a prompt, 'm' for a message, 'G' for logs, 'q' to quit";
pub const STATUS_PROMPT_CANCELLED: &str = "❌ Prompt cancelled";
pub const STATUS_PROMPT_DISMISSED: &str = "⚠️ Prompt dismissed";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Layout
/// Default dialog width as a percentage of the screen
pub const DIALOG_DEFAULT_WIDTH_PERCENT: u16 = 60;
/// Default dialog height as a percentage of the screen
pub const DIALOG_DEFAULT_HEIGHT_PERCENT: u16 = 20;
/// Smallest accepted dialog size percentage
pub const DIALOG_MIN_PERCENT: u16 = 10;
/// Largest accepted dialog size percentage
pub const DIALOG_MAX_PERCENT: u16 = 100;

/// Number of log lines kept in memory for the log overlay
pub const LOG_BUFFER_CAPACITY: usize = 500;

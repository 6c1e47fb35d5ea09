//! Single-line text prompt dialog

use super::common::{self, shortcuts};
use crate::constants::{ATTR_INITIAL_VALUE, ATTR_TITLE, EVENT_CANCEL, EVENT_CONFIRM};
use crate::overlay::{Attributes, Emit, OverlayComponent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};
use serde_json::Value;

/// Height the prompt needs: borders, input box and instructions
const PROMPT_MIN_HEIGHT: u16 = 7;

/// Text input overlay.
///
/// Reads `title` and `initial_value` from its attributes; anything missing or
/// not a string is shown as empty. Enter emits `confirm` with the typed text,
/// Esc emits `cancel`.
#[derive(Debug, Default)]
pub struct PromptDialog {
    pub title: String,
    pub input_buffer: String,
    pub cursor_position: usize,
}

impl PromptDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.input_buffer
            .chars()
            .take(char_index)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    fn char_count(&self) -> usize {
        self.input_buffer.chars().count()
    }
}

fn string_attribute(attributes: &Attributes, name: &str) -> String {
    match attributes.get(name) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}

impl OverlayComponent for PromptDialog {
    fn name(&self) -> &str {
        "prompt"
    }

    fn mount(&mut self, attributes: &Attributes) {
        self.title = string_attribute(attributes, ATTR_TITLE);
        self.input_buffer = string_attribute(attributes, ATTR_INITIAL_VALUE);
        self.cursor_position = self.char_count();
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Option<Emit> {
        match key.code {
            KeyCode::Esc => Some(Emit::new(EVENT_CANCEL)),
            KeyCode::Enter => Some(Emit::with_payload(
                EVENT_CONFIRM,
                Value::String(self.input_buffer.clone()),
            )),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_pos = self.byte_pos(self.cursor_position);
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_pos(self.cursor_position - 1);
                    self.input_buffer.remove(byte_pos);
                    self.cursor_position -= 1;
                }
                None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let byte_pos = self.byte_pos(self.cursor_position);
                    self.input_buffer.remove(byte_pos);
                }
                None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = common::create_dialog_block(&self.title, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(inner);

        let input = common::create_input_paragraph(&self.input_buffer, self.cursor_position, "Value");
        f.render_widget(input, chunks[0]);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }

    fn min_height(&self) -> u16 {
        PROMPT_MIN_HEIGHT
    }
}

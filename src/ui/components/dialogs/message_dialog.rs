//! Read-only message dialog

use super::common::{self, shortcuts};
use crate::constants::{ATTR_BODY, ATTR_TITLE, EVENT_CLOSE};
use crate::overlay::{Attributes, Emit, OverlayComponent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

/// Overlay showing a title and a body of text.
///
/// The body attribute may be a string or an array of lines. Up/Down scroll,
/// Esc or Enter emit `close`.
#[derive(Debug, Default)]
pub struct MessageDialog {
    pub title: String,
    pub lines: Vec<String>,
    pub scroll_offset: u16,
}

impl MessageDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn body_lines(body: Option<&Value>) -> Vec<String> {
    match body {
        Some(Value::String(text)) => text.lines().map(str::to_string).collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(line) => line.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![other.to_string()],
    }
}

impl OverlayComponent for MessageDialog {
    fn name(&self) -> &str {
        "message"
    }

    fn mount(&mut self, attributes: &Attributes) {
        self.title = match attributes.get(ATTR_TITLE) {
            Some(Value::String(title)) => title.clone(),
            _ => String::new(),
        };
        self.lines = body_lines(attributes.get(ATTR_BODY));
        self.scroll_offset = 0;
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Option<Emit> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Emit::new(EVENT_CLOSE)),
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let max_offset = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
                self.scroll_offset = self.scroll_offset.saturating_add(1).min(max_offset);
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = common::create_dialog_block(&self.title, Color::Yellow);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let body = Paragraph::new(self.lines.join("\n"))
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(body, chunks[0]);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_CLOSE,
            shortcuts::SEPARATOR,
            ("Esc", Color::Red, " Close"),
        ]);
        f.render_widget(instructions, chunks[1]);
    }

    fn min_height(&self) -> u16 {
        5
    }
}

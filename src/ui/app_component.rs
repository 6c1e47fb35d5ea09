use crate::config::Config;
use crate::constants::{
    DIALOG_TITLE_LOGS, PROMPT_NAME_TITLE, STATUS_IDLE, STATUS_PROMPT_CANCELLED, STATUS_PROMPT_DISMISSED,
};
use crate::logger::Logger;
use crate::overlay::OverlayRegistry;
use crate::prompt::{self, Prompt, PromptError};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use serde_json::Value;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub answers: Vec<String>,
    pub status_message: Option<String>,
}

/// Root of the demo application.
///
/// Owns the one [`OverlayRegistry`] of the process and lends it to the prompt
/// helpers. Prompt answers arrive from spawned tasks through the action
/// channel and are applied in [`drain_background_actions`].
///
/// [`drain_background_actions`]: AppComponent::drain_background_actions
pub struct AppComponent {
    overlays: OverlayRegistry,
    state: AppState,
    logger: Logger,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
    dirty: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            overlays: OverlayRegistry::from_config(&config.ui),
            state: AppState::default(),
            logger,
            action_tx,
            action_rx,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OverlayRegistry {
        &mut self.overlays
    }

    /// Whether the screen is out of date
    pub fn needs_render(&self) -> bool {
        self.dirty || self.overlays.needs_render()
    }

    /// Force a redraw on the next frame, e.g. after a resize
    pub fn request_render(&mut self) {
        self.dirty = true;
    }

    /// Apply every action queued by background tasks
    pub fn drain_background_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let follow_up = self.update(action);
            if follow_up != Action::None {
                self.update(follow_up);
            }
        }
    }

    /// Await the prompt in the background and report its outcome as an action
    fn spawn_prompt_waiter(&self, prompt: Prompt) {
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match prompt.await {
                Ok(answer) => Action::PromptAnswered(answer),
                Err(PromptError::Cancelled) => Action::PromptCancelled,
                Err(PromptError::Dismissed) => Action::PromptDismissed,
            };
            let _ = action_tx.send(action);
        });
    }

    fn log_lines(&self) -> Value {
        Value::Array(self.logger.get_logs().into_iter().map(Value::String).collect())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
        self.dirty = true;
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Open overlays are modal
        if self.overlays.handle_key_events(key) {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('n') => Action::OpenPrompt,
            KeyCode::Char('m') => Action::OpenMessage,
            KeyCode::Char('G') => Action::ShowLogs,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::OpenPrompt => {
                let initial = self.state.answers.last().cloned().unwrap_or_default();
                let prompt = prompt::show_prompt(&mut self.overlays, PROMPT_NAME_TITLE, &initial);
                log::info!("App: opened prompt {}", prompt.id());
                self.spawn_prompt_waiter(prompt);
            }
            Action::OpenMessage => {
                let body = Value::String(format!("{} answer(s) so far", self.state.answers.len()));
                prompt::show_message(&mut self.overlays, "Summary", body);
            }
            Action::ShowLogs => {
                let lines = self.log_lines();
                prompt::show_message(&mut self.overlays, DIALOG_TITLE_LOGS, lines);
            }
            Action::PromptAnswered(answer) => {
                log::info!("App: prompt answered with '{}'", answer);
                self.set_status(format!("✅ Hello, {}!", answer));
                self.state.answers.push(answer);
            }
            Action::PromptCancelled => self.set_status(STATUS_PROMPT_CANCELLED),
            Action::PromptDismissed => self.set_status(STATUS_PROMPT_DISMISSED),
            Action::Quit => {
                log::info!("App: quitting");
                self.should_quit = true;
            }
            Action::None => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        let lines: Vec<Line> = if self.state.answers.is_empty() {
            vec![Line::from("No answers yet.")]
        } else {
            self.state
                .answers
                .iter()
                .enumerate()
                .map(|(index, answer)| Line::from(format!("{:>3}. {}", index + 1, answer)))
                .collect()
        };
        let body = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Answers "),
        );
        f.render_widget(body, chunks[0]);

        let status = Paragraph::new(self.state.status_message.as_deref().unwrap_or(STATUS_IDLE))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(status, chunks[1]);

        self.overlays.render(f, rect);
        self.dirty = false;
    }
}

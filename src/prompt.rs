//! One-shot dialogs built on the overlay registry.
//!
//! [`show_prompt`] opens a [`PromptDialog`] and hands back a [`Prompt`] future
//! that resolves once the user confirms or cancels. Cancelling is an ordinary
//! outcome reported as [`PromptError::Cancelled`], not a failure of the UI.

use crate::constants::{ATTR_BODY, ATTR_INITIAL_VALUE, ATTR_TITLE, EVENT_CANCEL, EVENT_CLOSE, EVENT_CONFIRM};
use crate::overlay::{Attributes, EventHandlers, OverlayId, OverlayRegistry};
use crate::ui::components::dialogs::{MessageDialog, PromptDialog};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Ways a prompt can end without an answer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("prompt was cancelled")]
    Cancelled,

    #[error("prompt was closed before it was answered")]
    Dismissed,
}

type Responder = Arc<Mutex<Option<oneshot::Sender<Result<String, PromptError>>>>>;

/// Pending answer of a prompt opened with [`show_prompt`]
#[derive(Debug)]
pub struct Prompt {
    id: OverlayId,
    receiver: oneshot::Receiver<Result<String, PromptError>>,
}

impl Prompt {
    /// Id of the prompt's overlay
    pub fn id(&self) -> OverlayId {
        self.id
    }
}

impl Future for Prompt {
    type Output = Result<String, PromptError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // The sender is dropped without a value when the overlay is closed by
        // something other than its own handlers.
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(PromptError::Dismissed)))
    }
}

fn respond(responder: &Responder, outcome: Result<String, PromptError>) {
    let sender = match responder.lock() {
        Ok(mut slot) => slot.take(),
        Err(_) => None,
    };
    if let Some(sender) = sender {
        // The caller may have dropped the Prompt; nobody is left to tell.
        let _ = sender.send(outcome);
    }
}

/// Open a text prompt and return a future resolved by the user's answer.
///
/// `confirm` closes the dialog and resolves with the typed text, `cancel`
/// closes it and resolves with [`PromptError::Cancelled`]. Only the first of
/// the two has any effect.
pub fn show_prompt(registry: &mut OverlayRegistry, title: &str, initial_value: &str) -> Prompt {
    let (sender, receiver) = oneshot::channel();
    let responder: Responder = Arc::new(Mutex::new(Some(sender)));

    let attributes = Attributes::from([
        (ATTR_TITLE.to_string(), Value::String(title.to_string())),
        (ATTR_INITIAL_VALUE.to_string(), Value::String(initial_value.to_string())),
    ]);

    let on_confirm = responder.clone();
    let on_cancel = responder;
    let handlers = EventHandlers::new()
        .on(EVENT_CONFIRM, move |ctx, payload| {
            ctx.close();
            let answer = match payload {
                Some(Value::String(text)) => text,
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            log::info!("Prompt: {} confirmed", ctx.id());
            respond(&on_confirm, Ok(answer));
        })
        .on(EVENT_CANCEL, move |ctx, _| {
            ctx.close();
            log::info!("Prompt: {} cancelled", ctx.id());
            respond(&on_cancel, Err(PromptError::Cancelled));
        });

    let id = registry.open(PromptDialog::new(), attributes, handlers);
    Prompt { id, receiver }
}

/// Open a read-only message that closes itself on Esc or Enter
pub fn show_message(registry: &mut OverlayRegistry, title: &str, body: Value) -> OverlayId {
    let attributes = Attributes::from([
        (ATTR_TITLE.to_string(), Value::String(title.to_string())),
        (ATTR_BODY.to_string(), body),
    ]);
    let handlers = EventHandlers::new().on(EVENT_CLOSE, |ctx, _| ctx.close());
    registry.open(MessageDialog::new(), attributes, handlers)
}

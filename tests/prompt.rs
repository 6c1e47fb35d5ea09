use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use modalist::overlay::OverlayRegistry;
use modalist::prompt::{show_message, show_prompt, PromptError};
use serde_json::json;

fn press(registry: &mut OverlayRegistry, code: KeyCode) -> bool {
    registry.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(registry: &mut OverlayRegistry, text: &str) {
    for c in text.chars() {
        press(registry, KeyCode::Char(c));
    }
}

#[tokio::test]
async fn test_confirm_resolves_with_result() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "");
    let id = prompt.id();

    let entry = registry.get(id).unwrap();
    assert_eq!(entry.attributes().get("title"), Some(&json!("Name?")));
    assert_eq!(entry.attributes().get("initial_value"), Some(&json!("")));
    assert!(entry.handlers().contains("confirm"));
    assert!(entry.handlers().contains("cancel"));

    assert!(registry.dispatch(id, "confirm", Some(json!("Alice"))));
    assert!(registry.is_empty());
    assert_eq!(prompt.await, Ok("Alice".to_string()));
}

#[tokio::test]
async fn test_cancel_rejects_without_value() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "");

    assert!(registry.dispatch(prompt.id(), "cancel", None));
    assert!(registry.is_empty());
    assert_eq!(prompt.await, Err(PromptError::Cancelled));
}

#[tokio::test]
async fn test_typing_and_enter_confirm_through_keys() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "Al");

    type_text(&mut registry, "ice");
    assert!(registry.contains(prompt.id()));
    assert!(press(&mut registry, KeyCode::Enter));

    assert!(!registry.contains(prompt.id()));
    assert_eq!(prompt.await, Ok("Alice".to_string()));
}

#[tokio::test]
async fn test_esc_cancels_through_keys() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "draft");

    assert!(press(&mut registry, KeyCode::Esc));
    assert!(registry.is_empty());
    assert_eq!(prompt.await, Err(PromptError::Cancelled));
}

#[tokio::test]
async fn test_only_first_outcome_counts() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "");
    let id = prompt.id();

    assert!(registry.dispatch(id, "confirm", Some(json!("first"))));
    // The overlay is gone, so a late cancel reaches nothing
    assert!(!registry.dispatch(id, "cancel", None));
    assert_eq!(prompt.await, Ok("first".to_string()));
}

#[tokio::test]
async fn test_closing_overlay_externally_dismisses_prompt() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "");

    assert!(registry.close(prompt.id()));
    assert_eq!(prompt.await, Err(PromptError::Dismissed));
}

#[tokio::test]
async fn test_stacked_prompts_answer_independently() {
    let mut registry = OverlayRegistry::new();
    let first = show_prompt(&mut registry, "First?", "");
    let second = show_prompt(&mut registry, "Second?", "");
    assert_eq!(registry.top(), Some(second.id()));

    // Keys reach the most recent prompt first
    type_text(&mut registry, "two");
    press(&mut registry, KeyCode::Enter);
    type_text(&mut registry, "one");
    press(&mut registry, KeyCode::Enter);

    assert!(registry.is_empty());
    assert_eq!(second.await, Ok("two".to_string()));
    assert_eq!(first.await, Ok("one".to_string()));
}

#[test]
fn test_dropped_prompt_does_not_break_confirm() {
    let mut registry = OverlayRegistry::new();
    let prompt = show_prompt(&mut registry, "Name?", "");
    let id = prompt.id();
    drop(prompt);

    assert!(registry.dispatch(id, "confirm", Some(json!("nobody listening"))));
    assert!(registry.is_empty());
}

#[test]
fn test_message_closes_itself() {
    let mut registry = OverlayRegistry::new();
    let id = show_message(&mut registry, "Info", json!("hello"));
    assert!(registry.contains(id));

    // Scrolling keeps it open, Enter closes it
    assert!(press(&mut registry, KeyCode::Down));
    assert!(registry.contains(id));
    assert!(press(&mut registry, KeyCode::Enter));
    assert!(registry.is_empty());
}

/// State transitions of the demo application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Overlay operations
    OpenPrompt,
    OpenMessage,
    ShowLogs,

    // Prompt outcomes delivered by background tasks
    PromptAnswered(String),
    PromptCancelled,
    PromptDismissed,

    // App control
    Quit,
    None,
}

use crate::discovery::PollSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextPackager,
    PreviousPackager,

    // Discovery
    Refetch,
    PollUpdated(PollSnapshot),

    // Opening an app
    OpenUrl(String),

    // URL entry
    ToggleUrlInput,
    UrlInput(char),
    UrlBackspace,
    SubmitUrl,

    // Dialogs
    ToggleLogs,
    DismissMessage,
    ShowError(String),

    // Environment
    Resize(u16, u16),

    // Application
    Quit,
    None,
}

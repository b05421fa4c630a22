use crate::RequestKind;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_FAILED_LABEL: &str = "Copy failed";

/// Rendered statistics for the active short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub short_code: String,
    pub click_count: u64,
    pub created: String,
    pub long_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Idle { validation: Option<String> },
    Loading { kind: RequestKind },
    Result { short_url: String, long_url: String },
    Stats(StatsView),
    Error { message: String },
}

impl Default for PanelView {
    fn default() -> Self {
        PanelView::Idle { validation: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyButtonState {
    #[default]
    Default,
    Copied,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButtonView {
    pub label: String,
    pub state: CopyButtonState,
    /// Failure reason shown next to the control.
    pub detail: Option<String>,
}

impl Default for CopyButtonView {
    fn default() -> Self {
        Self {
            label: COPY_LABEL.to_string(),
            state: CopyButtonState::Default,
            detail: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub panel: PanelView,
    pub current_short_code: String,
    pub backend: String,
    pub short_url_button: CopyButtonView,
    pub long_url_button: CopyButtonView,
    pub dirty: bool,
}

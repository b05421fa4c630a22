use crate::view_model::{
    AppViewModel, CopyButtonState, CopyButtonView, PanelView, StatsView, COPIED_LABEL,
    COPY_FAILED_LABEL,
};

/// Backend shown in connection hints when none was configured.
pub const DEFAULT_BACKEND: &str = "http://localhost:8080";

/// Generation number of an issued backend request.
pub type RequestId = u64;

/// A freshly created short link as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}

/// Click statistics for one short link. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsRecord {
    pub short_code: Option<String>,
    pub click_count: Option<u64>,
    pub created_at: Option<String>,
    pub long_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Create,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    ShortUrl,
    LongUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CopyFeedback {
    target: CopyTarget,
    outcome: CopyOutcome,
    token: u64,
}

/// The single visible panel. Being one enum, two panels can never show at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Idle { validation: Option<String> },
    Loading { request: RequestId, kind: RequestKind },
    Result,
    Stats(StatsView),
    Error { message: String },
}

impl Default for Panel {
    fn default() -> Self {
        Panel::Idle { validation: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    session: Option<ShortenResult>,
    panel: Panel,
    backend: String,
    next_request: RequestId,
    copy_feedback: Option<CopyFeedback>,
    next_copy_token: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            session: None,
            panel: Panel::default(),
            backend: DEFAULT_BACKEND.to_string(),
            next_request: 1,
            copy_feedback: None,
            next_copy_token: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose connection hints name `backend`.
    pub fn with_backend(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn session(&self) -> Option<&ShortenResult> {
        self.session.as_ref()
    }

    /// Short code of the active link, empty when none was created yet.
    pub fn current_short_code(&self) -> &str {
        self.session
            .as_ref()
            .map(|result| result.short_code.as_str())
            .unwrap_or("")
    }

    /// The request the Loading panel is waiting on, if any.
    pub fn pending_request(&self) -> Option<(RequestId, RequestKind)> {
        match self.panel {
            Panel::Loading { request, kind } => Some((request, kind)),
            _ => None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let panel = match (&self.panel, &self.session) {
            (Panel::Idle { validation }, _) => PanelView::Idle {
                validation: validation.clone(),
            },
            (Panel::Loading { kind, .. }, _) => PanelView::Loading { kind: *kind },
            (Panel::Result, Some(result)) => PanelView::Result {
                short_url: result.short_url.clone(),
                long_url: result.long_url.clone(),
            },
            (Panel::Result, None) => PanelView::Idle { validation: None },
            (Panel::Stats(stats), _) => PanelView::Stats(stats.clone()),
            (Panel::Error { message }, _) => PanelView::Error {
                message: message.clone(),
            },
        };

        AppViewModel {
            input: self.input.clone(),
            panel,
            current_short_code: self.current_short_code().to_string(),
            backend: self.backend.clone(),
            short_url_button: self.copy_button(CopyTarget::ShortUrl),
            long_url_button: self.copy_button(CopyTarget::LongUrl),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn copy_button(&self, target: CopyTarget) -> CopyButtonView {
        match &self.copy_feedback {
            Some(feedback) if feedback.target == target => match &feedback.outcome {
                CopyOutcome::Copied => CopyButtonView {
                    label: COPIED_LABEL.to_string(),
                    state: CopyButtonState::Copied,
                    detail: None,
                },
                CopyOutcome::Failed(message) => CopyButtonView {
                    label: COPY_FAILED_LABEL.to_string(),
                    state: CopyButtonState::Failed,
                    detail: Some(message.clone()),
                },
            },
            _ => CopyButtonView::default(),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_panel(&mut self, panel: Panel) {
        if self.panel != panel {
            self.panel = panel;
            self.mark_dirty();
        }
    }

    pub(crate) fn show_error(&mut self, message: String) {
        self.set_panel(Panel::Error { message });
    }

    /// Allocates the next request generation and enters Loading for it.
    pub(crate) fn begin_request(&mut self, kind: RequestKind) -> RequestId {
        let request = self.next_request;
        self.next_request += 1;
        self.set_panel(Panel::Loading { request, kind });
        request
    }

    /// Whether a response for `request` is the one the Loading panel waits on.
    pub(crate) fn accepts_response(&self, request: RequestId, kind: RequestKind) -> bool {
        self.pending_request() == Some((request, kind))
    }

    pub(crate) fn store_session(&mut self, result: ShortenResult) {
        self.session = Some(result);
        self.copy_feedback = None;
        self.mark_dirty();
    }

    /// Panel to fall back to when leaving Stats or Error.
    pub(crate) fn resting_panel(&self) -> Panel {
        if self.session.is_some() {
            Panel::Result
        } else {
            Panel::Idle { validation: None }
        }
    }

    pub(crate) fn set_copy_feedback(&mut self, target: CopyTarget, outcome: CopyOutcome) -> u64 {
        let token = self.next_copy_token;
        self.next_copy_token += 1;
        self.copy_feedback = Some(CopyFeedback {
            target,
            outcome,
            token,
        });
        self.mark_dirty();
        token
    }

    /// Reverts the copy control if `token` still names the shown acknowledgement.
    pub(crate) fn expire_copy_feedback(&mut self, token: u64) -> bool {
        match &self.copy_feedback {
            Some(feedback) if feedback.token == token => {
                self.copy_feedback = None;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.input.clear();
        self.session = None;
        self.copy_feedback = None;
        self.panel = Panel::default();
        self.mark_dirty();
    }
}

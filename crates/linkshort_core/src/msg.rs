#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for shortening.
    SubmitClicked,
    /// Backend answered a create request with a short link.
    CreateSucceeded {
        request: crate::RequestId,
        result: crate::ShortenResult,
    },
    /// Create request failed at the transport or HTTP level.
    CreateFailed {
        request: crate::RequestId,
        failure: crate::RequestFailure,
    },
    /// User asked for statistics of the current short link.
    StatsClicked,
    /// Backend answered a stats request.
    StatsLoaded {
        request: crate::RequestId,
        record: crate::StatsRecord,
    },
    /// Stats request failed.
    StatsFailed {
        request: crate::RequestId,
        failure: crate::RequestFailure,
    },
    /// User closed the stats panel.
    CloseStatsClicked,
    /// User started over with a fresh form.
    ResetClicked,
    /// User clicked one of the copy controls.
    CopyClicked(crate::CopyTarget),
    /// Platform finished a clipboard write.
    CopyFinished {
        target: crate::CopyTarget,
        result: Result<(), String>,
    },
    /// The acknowledgement timer for a copy control ran out.
    CopyFeedbackExpired { token: u64 },
    /// Show an arbitrary message in the error panel.
    ShowError(String),
    /// User dismissed the error panel.
    ErrorDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

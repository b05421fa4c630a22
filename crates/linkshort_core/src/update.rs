use linkshort_logging::{client_debug, client_info, client_warn};

use crate::{
    stats_view, AppState, ControllerError, CopyOutcome, CopyTarget, Effect, Msg, Panel,
    RequestId, RequestKind, COPY_FEEDBACK_DURATION,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            if let Panel::Idle {
                validation: Some(_),
            } = state.panel()
            {
                state.set_panel(Panel::Idle { validation: None });
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::CreateSucceeded { request, result } => {
            if !accept(&state, request, RequestKind::Create) {
                return (state, Vec::new());
            }
            client_info!(
                "request={} created short_code={} long_url={}",
                request,
                result.short_code,
                result.long_url
            );
            state.store_session(result);
            state.set_panel(Panel::Result);
            Vec::new()
        }
        Msg::CreateFailed { request, failure } => {
            if !accept(&state, request, RequestKind::Create) {
                return (state, Vec::new());
            }
            let err = ControllerError::from_failure(RequestKind::Create, failure, state.backend());
            client_warn!("request={} create failed: {}", request, err);
            state.show_error(err.to_string());
            Vec::new()
        }
        Msg::StatsClicked => request_stats(&mut state),
        Msg::StatsLoaded { request, record } => {
            if !accept(&state, request, RequestKind::Stats) {
                return (state, Vec::new());
            }
            let view = stats_view(&record, state.current_short_code());
            client_info!(
                "request={} stats short_code={} clicks={}",
                request,
                view.short_code,
                view.click_count
            );
            state.set_panel(Panel::Stats(view));
            Vec::new()
        }
        Msg::StatsFailed { request, failure } => {
            if !accept(&state, request, RequestKind::Stats) {
                return (state, Vec::new());
            }
            let err = ControllerError::from_failure(RequestKind::Stats, failure, state.backend());
            client_warn!("request={} stats failed: {}", request, err);
            state.show_error(err.to_string());
            Vec::new()
        }
        Msg::CloseStatsClicked => {
            if matches!(state.panel(), Panel::Stats(_)) {
                let next = state.resting_panel();
                state.set_panel(next);
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            if let Some((request, _)) = state.pending_request() {
                client_debug!("reset abandons pending request={}", request);
            }
            state.reset();
            Vec::new()
        }
        Msg::CopyClicked(target) => copy(&state, target),
        Msg::CopyFinished { target, result } => {
            let outcome = match result {
                Ok(()) => CopyOutcome::Copied,
                Err(reason) => {
                    let err = ControllerError::Clipboard(reason);
                    client_warn!("{:?} {}", target, err);
                    CopyOutcome::Failed(err.to_string())
                }
            };
            let token = state.set_copy_feedback(target, outcome);
            vec![Effect::ScheduleCopyReset {
                token,
                after: COPY_FEEDBACK_DURATION,
            }]
        }
        Msg::CopyFeedbackExpired { token } => {
            if !state.expire_copy_feedback(token) {
                client_debug!("ignoring stale copy feedback token={}", token);
            }
            Vec::new()
        }
        Msg::ShowError(message) => {
            state.show_error(message);
            Vec::new()
        }
        Msg::ErrorDismissed => {
            if matches!(state.panel(), Panel::Error { .. }) {
                let next = state.resting_panel();
                state.set_panel(next);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if !can_start_request(state) {
        client_debug!("submit ignored while {:?}", state.panel());
        return Vec::new();
    }

    let url = state.input().trim().to_string();
    if url.is_empty() {
        state.set_panel(Panel::Idle {
            validation: Some(ControllerError::Validation.to_string()),
        });
        return Vec::new();
    }

    let request = state.begin_request(RequestKind::Create);
    client_info!("request={} create url={}", request, url);
    vec![Effect::CreateShortLink { request, url }]
}

fn request_stats(state: &mut AppState) -> Vec<Effect> {
    if !can_start_request(state) {
        client_debug!("stats ignored while {:?}", state.panel());
        return Vec::new();
    }

    let short_code = state.current_short_code().to_string();
    if short_code.is_empty() {
        state.show_error(ControllerError::Precondition.to_string());
        return Vec::new();
    }

    let request = state.begin_request(RequestKind::Stats);
    client_info!("request={} stats short_code={}", request, short_code);
    vec![Effect::FetchStats {
        request,
        short_code,
    }]
}

fn copy(state: &AppState, target: CopyTarget) -> Vec<Effect> {
    if !matches!(state.panel(), Panel::Result | Panel::Stats(_)) {
        return Vec::new();
    }
    let Some(session) = state.session() else {
        return Vec::new();
    };
    let text = match target {
        CopyTarget::ShortUrl => session.short_url.clone(),
        CopyTarget::LongUrl => session.long_url.clone(),
    };
    vec![Effect::CopyToClipboard { target, text }]
}

/// Loading is only entered from Idle, Result or Stats.
fn can_start_request(state: &AppState) -> bool {
    matches!(
        state.panel(),
        Panel::Idle { .. } | Panel::Result | Panel::Stats(_)
    )
}

fn accept(state: &AppState, request: RequestId, kind: RequestKind) -> bool {
    let accepted = state.accepts_response(request, kind);
    if !accepted {
        client_warn!(
            "dropping stale {:?} response request={} pending={:?}",
            kind,
            request,
            state.pending_request()
        );
    }
    accepted
}

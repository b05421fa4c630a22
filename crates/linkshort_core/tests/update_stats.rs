use linkshort_core::{
    update, AppState, Effect, ErrorBody, Msg, Panel, PanelView, RequestFailure, RequestKind,
    ShortenResult, StatsRecord, StatsView,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    linkshort_logging::initialize_for_tests();
}

/// State showing the Result panel for `ab12cd` after one create round trip.
fn with_short_link() -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::CreateSucceeded {
            request: 1,
            result: ShortenResult {
                short_code: "ab12cd".to_string(),
                short_url: "http://host/ab12cd".to_string(),
                long_url: "https://example.com".to_string(),
            },
        },
    );
    state
}

fn stats_failure(status: u16, body: ErrorBody) -> Panel {
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsFailed {
            request: 2,
            failure: RequestFailure::Http {
                status,
                reason: None,
                body,
            },
        },
    );
    state.panel().clone()
}

#[test]
fn stats_without_session_is_precondition_error() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::StatsClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.panel(),
        &Panel::Error {
            message: "No URL selected. Please shorten a URL first.".to_string()
        }
    );
}

#[test]
fn stats_request_uses_session_code() {
    init_logging();
    let (state, effects) = update(with_short_link(), Msg::StatsClicked);

    assert_eq!(
        effects,
        vec![Effect::FetchStats {
            request: 2,
            short_code: "ab12cd".to_string(),
        }]
    );
    assert_eq!(state.pending_request(), Some((2, RequestKind::Stats)));
}

#[test]
fn sparse_stats_fall_back_to_defaults() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsLoaded {
            request: 2,
            record: StatsRecord {
                click_count: Some(0),
                ..StatsRecord::default()
            },
        },
    );

    assert_eq!(
        state.view().panel,
        PanelView::Stats(StatsView {
            short_code: "ab12cd".to_string(),
            click_count: 0,
            created: "Unknown".to_string(),
            long_url: None,
        })
    );
}

#[test]
fn full_stats_are_rendered() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsLoaded {
            request: 2,
            record: StatsRecord {
                short_code: Some("ab12cd".to_string()),
                click_count: Some(17),
                created_at: Some("not-a-date".to_string()),
                long_url: Some("https://example.com".to_string()),
            },
        },
    );

    let Panel::Stats(view) = state.panel() else {
        panic!("expected stats panel, got {:?}", state.panel());
    };
    assert_eq!(view.click_count, 17);
    assert_eq!(view.created, "not-a-date");
    assert_eq!(view.long_url.as_deref(), Some("https://example.com"));
}

#[test]
fn not_found_is_literal_message() {
    init_logging();
    assert_eq!(
        stats_failure(404, ErrorBody::Message("URL not found".to_string())),
        Panel::Error {
            message: "URL not found".to_string()
        }
    );
    assert_eq!(
        stats_failure(404, ErrorBody::Unparsable),
        Panel::Error {
            message: "URL not found".to_string()
        }
    );
}

#[test]
fn other_status_mentions_code() {
    init_logging();
    for status in [400_u16, 500, 503] {
        let Panel::Error { message } = stats_failure(status, ErrorBody::NoMessage) else {
            panic!("expected error panel");
        };
        assert!(message.contains(&status.to_string()), "{message}");
    }
}

#[test]
fn null_stats_body_is_reported() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsFailed {
            request: 2,
            failure: RequestFailure::EmptyBody,
        },
    );

    assert_eq!(
        state.panel(),
        &Panel::Error {
            message: "No data received from server".to_string()
        }
    );
}

#[test]
fn stats_network_failure() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsFailed {
            request: 2,
            failure: RequestFailure::Network,
        },
    );

    assert_eq!(
        state.panel(),
        &Panel::Error {
            message: "Cannot connect to server. Please make sure the server is running."
                .to_string()
        }
    );
    // The session survives a failed stats request.
    assert_eq!(state.current_short_code(), "ab12cd");
}

#[test]
fn create_response_cannot_settle_stats_request() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::CreateFailed {
            request: 2,
            failure: RequestFailure::Network,
        },
    );

    assert_eq!(state.pending_request(), Some((2, RequestKind::Stats)));
}

#[test]
fn refresh_from_stats_panel_issues_new_request() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsLoaded {
            request: 2,
            record: StatsRecord::default(),
        },
    );
    let (state, effects) = update(state, Msg::StatsClicked);

    assert_eq!(
        effects,
        vec![Effect::FetchStats {
            request: 3,
            short_code: "ab12cd".to_string(),
        }]
    );
    assert_eq!(state.pending_request(), Some((3, RequestKind::Stats)));
}

#[test]
fn close_stats_returns_to_result() {
    init_logging();
    let (state, _) = update(with_short_link(), Msg::StatsClicked);
    let (state, _) = update(
        state,
        Msg::StatsLoaded {
            request: 2,
            record: StatsRecord::default(),
        },
    );
    let (state, effects) = update(state, Msg::CloseStatsClicked);

    assert!(effects.is_empty());
    assert_eq!(state.panel(), &Panel::Result);
    assert_eq!(state.current_short_code(), "ab12cd");
}

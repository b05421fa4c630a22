use std::sync::mpsc;
use std::thread;

use linkshort_core::{
    Effect, ErrorBody, Msg, RequestFailure, RequestId, RequestKind, ShortenResult, StatsRecord,
};
use linkshort_engine::{ApiError, EngineCommand, EngineEvent, EngineHandle};
use linkshort_logging::{client_debug, client_error, client_info, client_warn};

use super::clipboard::Clipboard;

/// Executes core effects and feeds their outcomes back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn Clipboard>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        clipboard: Box<dyn Clipboard>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            msg_tx,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CreateShortLink { request, url } => {
                    client_info!("CreateShortLink request={} url_len={}", request, url.len());
                    self.submit(EngineCommand::Create { request, url }, RequestKind::Create, request);
                }
                Effect::FetchStats {
                    request,
                    short_code,
                } => {
                    client_info!("FetchStats request={} short_code={}", request, short_code);
                    self.submit(
                        EngineCommand::Stats {
                            request,
                            short_code,
                        },
                        RequestKind::Stats,
                        request,
                    );
                }
                Effect::CopyToClipboard { target, text } => {
                    let result = self.clipboard.set_text(&text);
                    if let Err(err) = &result {
                        client_warn!("Clipboard write for {:?} failed: {}", target, err);
                    }
                    let _ = self.msg_tx.send(Msg::CopyFinished { target, result });
                }
                Effect::ScheduleCopyReset { token, after } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = msg_tx.send(Msg::CopyFeedbackExpired { token });
                    });
                }
            }
        }
    }

    /// Forwards every finished request to the message channel.
    pub fn poll_engine(&self) {
        while let Some(event) = self.engine.try_recv() {
            client_debug!("engine event for request={}", event.request());
            let _ = self.msg_tx.send(map_event(event));
        }
    }

    fn submit(&self, command: EngineCommand, kind: RequestKind, request: RequestId) {
        if let Err(err) = self.engine.submit(command) {
            // Settle the Loading panel instead of leaving it spinning.
            client_error!("Could not hand request={} to engine: {}", request, err);
            let _ = self.msg_tx.send(failure_msg(kind, request, RequestFailure::Network));
        }
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Created { request, result } => match result {
            Ok(response) => Msg::CreateSucceeded {
                request,
                result: ShortenResult {
                    short_code: response.short_code,
                    short_url: response.short_url,
                    long_url: response.long_url,
                },
            },
            Err(err) => {
                client_warn!("Create request={} failed: {}", request, err);
                failure_msg(RequestKind::Create, request, map_failure(err))
            }
        },
        EngineEvent::StatsFetched { request, result } => match result {
            Ok(response) => Msg::StatsLoaded {
                request,
                record: StatsRecord {
                    short_code: response.short_code,
                    click_count: response.click_count,
                    created_at: response.created_at,
                    long_url: response.long_url,
                },
            },
            Err(err) => {
                client_warn!("Stats request={} failed: {}", request, err);
                failure_msg(RequestKind::Stats, request, map_failure(err))
            }
        },
    }
}

fn failure_msg(kind: RequestKind, request: RequestId, failure: RequestFailure) -> Msg {
    match kind {
        RequestKind::Create => Msg::CreateFailed { request, failure },
        RequestKind::Stats => Msg::StatsFailed { request, failure },
    }
}

fn map_failure(err: ApiError) -> RequestFailure {
    match err {
        ApiError::InvalidBaseUrl(_)
        | ApiError::ClientBuild(_)
        | ApiError::Network(_)
        | ApiError::Timeout(_) => RequestFailure::Network,
        ApiError::HttpStatus {
            status,
            reason,
            body,
        } => RequestFailure::Http {
            status,
            reason,
            body: match body {
                linkshort_engine::ErrorBody::Message(message) => ErrorBody::Message(message),
                linkshort_engine::ErrorBody::NoMessage => ErrorBody::NoMessage,
                linkshort_engine::ErrorBody::Unparsable => ErrorBody::Unparsable,
            },
        },
        ApiError::MalformedBody { status, reason, .. } => {
            RequestFailure::MalformedBody { status, reason }
        }
        ApiError::TooLarge { status, .. } => RequestFailure::MalformedBody {
            status,
            reason: None,
        },
        ApiError::EmptyBody { .. } => RequestFailure::EmptyBody,
    }
}

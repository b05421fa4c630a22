use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use linkshort_logging::{client_debug, client_info};

use crate::api::{ApiSettings, ReqwestApi, ShortenerApi};
use crate::{EngineError, EngineEvent, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Create { request: RequestId, url: String },
    Stats { request: RequestId, short_code: String },
}

/// Runs backend requests on a private tokio runtime.
///
/// Commands are fire-and-forget: each one is spawned as soon as it arrives and
/// reports exactly one [`EngineEvent`]. Requests run concurrently and cannot
/// be cancelled; callers match responses by [`RequestId`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        client_info!("engine targeting backend {}", settings.base_url);
        let api = ReqwestApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn ShortenerApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("linkshort-engine")
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("linkshort-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, event_tx).await;
                    });
                }
                client_debug!("engine command channel closed");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| EngineError::Disconnected)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn ShortenerApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Create { request, url } => EngineEvent::Created {
            request,
            result: api.create(&url).await,
        },
        EngineCommand::Stats {
            request,
            short_code,
        } => EngineEvent::StatsFetched {
            request,
            result: api.stats(&short_code).await,
        },
    };
    let _ = event_tx.send(event);
}

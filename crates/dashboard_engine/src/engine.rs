use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use dashboard_logging::{dash_error, dash_info};

use crate::submit::{SimulatedSubmitter, SubmitSettings, Submitter};
use crate::{EngineEvent, SubmitError, SubmitRequest};

enum EngineCommand {
    Submit(SubmitRequest),
}

#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    events: EngineEvents,
}

/// Receiving side of the engine. Holding it does not keep the engine alive:
/// once every `EngineHandle` is dropped the worker drains in-flight
/// submissions and the receiver reports `Disconnected`.
#[derive(Clone)]
pub struct EngineEvents {
    rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, mpsc::RecvTimeoutError> {
        match self.rx.lock() {
            Ok(rx) => rx.recv_timeout(timeout),
            Err(_) => Err(mpsc::RecvTimeoutError::Disconnected),
        }
    }
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Self {
        Self::with_submitter(Arc::new(SimulatedSubmitter::new(settings)))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    dash_error!("engine runtime failed to start: {}", err);
                    reject_all(cmd_rx, event_tx, err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), command, event_tx).await;
                });
            }
            // Let in-flight submissions finish before the runtime is dropped.
            runtime.shutdown_timeout(Duration::from_secs(10));
        });

        Self {
            cmd_tx,
            events: EngineEvents {
                rx: Arc::new(Mutex::new(event_rx)),
            },
        }
    }

    pub fn submit(&self, request: SubmitRequest) {
        dash_info!(
            "queue submission request_id={} record_id={}",
            request.request_id,
            request.record_id
        );
        let _ = self.cmd_tx.send(EngineCommand::Submit(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.events.try_recv()
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    pub fn events(&self) -> EngineEvents {
        self.events.clone()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit(request) => {
            let result = submitter.submit(&request).await;
            let _ = event_tx.send(EngineEvent::SubmitCompleted {
                request_id: request.request_id,
                result,
            });
        }
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: String,
) {
    while let Ok(EngineCommand::Submit(request)) = cmd_rx.recv() {
        let _ = event_tx.send(EngineEvent::SubmitCompleted {
            request_id: request.request_id,
            result: Err(SubmitError::EngineStopped(reason.clone())),
        });
    }
}

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use dashboard_core::{Effect, Msg, RequestId, SubmitOutcome, Submission};
use dashboard_engine::{
    EngineEvent, EngineEvents, EngineHandle, SubmitError, SubmitReceipt, SubmitRequest, SubmitSettings,
};
use dashboard_logging::{dash_debug, dash_info, dash_warn};

const EVENT_POLL: Duration = Duration::from_millis(100);

pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    event_loop: thread::JoinHandle<()>,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let event_loop = spawn_event_loop(engine.events(), msg_tx.clone());
        Self {
            engine,
            msg_tx,
            event_loop,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit {
                    request_id,
                    submission,
                } => match submit_request(request_id, &submission) {
                    Ok(request) => self.engine.submit(request),
                    Err(err) => {
                        dash_warn!("request {} could not be encoded: {}", request_id, err);
                        let _ = self.msg_tx.send(Msg::SubmissionFinished {
                            request_id,
                            outcome: SubmitOutcome::Failed {
                                reason: err.to_string(),
                            },
                        });
                    }
                },
                Effect::EditRequested { entity, id } => {
                    // No edit form exists yet; the notice is the whole response.
                    dash_info!("edit requested for {} {}", entity.noun(), id);
                }
            }
        }
    }

    /// Stops accepting effects and hands back the forwarding thread, which
    /// exits once the engine has answered everything already queued.
    pub fn shutdown(self) -> thread::JoinHandle<()> {
        self.event_loop
    }
}

/// Forwards engine events as messages until the engine or the receiver of
/// `msg_tx` goes away.
fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        match events.recv_timeout(EVENT_POLL) {
            Ok(EngineEvent::SubmitCompleted { request_id, result }) => {
                let msg = Msg::SubmissionFinished {
                    request_id,
                    outcome: outcome_from(request_id, result),
                };
                if msg_tx.send(msg).is_err() {
                    dash_debug!("message receiver gone, event loop stopping");
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                dash_debug!("engine stopped, event loop stopping");
                break;
            }
        }
    })
}

fn submit_request(
    request_id: RequestId,
    submission: &Submission,
) -> Result<SubmitRequest, serde_json::Error> {
    Ok(SubmitRequest {
        request_id,
        collection: submission.form().to_string(),
        record_id: submission.record_id().to_string(),
        payload: serde_json::to_value(submission)?,
    })
}

fn outcome_from(request_id: RequestId, result: Result<SubmitReceipt, SubmitError>) -> SubmitOutcome {
    match result {
        Ok(receipt) => SubmitOutcome::Accepted {
            accepted_at: receipt.accepted_at,
        },
        Err(err) => {
            dash_warn!("request {} failed: {}", request_id, err);
            SubmitOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

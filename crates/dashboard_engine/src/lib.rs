//! Dashboard engine: runs record submissions off the UI thread.
mod engine;
mod submit;
mod types;

pub use engine::{EngineEvents, EngineHandle};
pub use submit::{Clock, SimulatedSubmitter, SubmitSettings, Submitter};
pub use types::{EngineEvent, RequestId, SubmitError, SubmitReceipt, SubmitRequest};

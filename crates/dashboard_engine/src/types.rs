use std::time::Duration;

use thiserror::Error;

pub type RequestId = u64;

/// One record handed to the submission service.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub request_id: RequestId,
    /// Collection the record belongs to, e.g. `vendor`.
    pub collection: String,
    pub record_id: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub request_id: RequestId,
    pub record_id: String,
    /// RFC 3339 timestamp taken when the service accepted the record.
    pub accepted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    #[error("service unavailable")]
    Unavailable,
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("engine stopped: {0}")]
    EngineStopped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        request_id: RequestId,
        result: Result<SubmitReceipt, SubmitError>,
    },
}

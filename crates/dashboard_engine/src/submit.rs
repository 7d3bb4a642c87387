use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashboard_logging::{dash_debug, dash_warn};

use crate::{SubmitError, SubmitReceipt, SubmitRequest};

/// Source of the `accepted_at` timestamp on receipts.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct SubmitSettings {
    /// Delay before the service answers.
    pub latency: Duration,
    /// Per-collection overrides of `latency`.
    pub collection_latency: HashMap<String, Duration>,
    pub timeout: Duration,
    /// When set every submission fails with `SubmitError::Unavailable`.
    pub simulate_outage: bool,
    pub accepted_utc: Clock,
}

impl SubmitSettings {
    pub fn latency_for(&self, collection: &str) -> Duration {
        self.collection_latency
            .get(collection)
            .copied()
            .unwrap_or(self.latency)
    }
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(300),
            collection_latency: HashMap::from([("vendor".to_string(), Duration::from_millis(1000))]),
            timeout: Duration::from_secs(5),
            simulate_outage: false,
            accepted_utc: Arc::new(|| "1970-01-01T00:00:00+00:00".to_string()),
        }
    }
}

impl fmt::Debug for SubmitSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitSettings")
            .field("latency", &self.latency)
            .field("collection_latency", &self.collection_latency)
            .field("timeout", &self.timeout)
            .field("simulate_outage", &self.simulate_outage)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitReceipt, SubmitError>;
}

/// Stand-in for the remote record service: answers after a delay and can be
/// switched into an outage.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    settings: SubmitSettings,
}

impl SimulatedSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    async fn answer(&self, request: &SubmitRequest) -> Result<SubmitReceipt, SubmitError> {
        tokio::time::sleep(self.settings.latency_for(&request.collection)).await;

        if self.settings.simulate_outage {
            return Err(SubmitError::Unavailable);
        }
        if !request.payload.is_object() {
            return Err(SubmitError::InvalidPayload(format!(
                "expected a JSON object for {}",
                request.record_id
            )));
        }

        Ok(SubmitReceipt {
            request_id: request.request_id,
            record_id: request.record_id.clone(),
            accepted_at: (self.settings.accepted_utc)(),
        })
    }
}

#[async_trait::async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitReceipt, SubmitError> {
        dash_debug!(
            "submit request_id={} collection={} record_id={}",
            request.request_id,
            request.collection,
            request.record_id
        );
        let timeout = self.settings.timeout;
        match tokio::time::timeout(timeout, self.answer(request)).await {
            Ok(result) => result,
            Err(_) => {
                dash_warn!("submit request_id={} timed out", request.request_id);
                Err(SubmitError::Timeout(timeout))
            }
        }
    }
}

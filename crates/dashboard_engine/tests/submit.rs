use std::collections::HashMap;
use std::sync::{Arc, Once};
use std::time::Duration;

use dashboard_engine::{SimulatedSubmitter, SubmitError, SubmitSettings, SubmitRequest, Submitter};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn fast_settings() -> SubmitSettings {
    SubmitSettings {
        latency: Duration::from_millis(5),
        collection_latency: HashMap::new(),
        timeout: Duration::from_secs(2),
        simulate_outage: false,
        accepted_utc: Arc::new(|| "2025-08-12T09:30:00+00:00".to_string()),
    }
}

fn vendor_request(request_id: u64) -> SubmitRequest {
    SubmitRequest {
        request_id,
        collection: "vendor".to_string(),
        record_id: "V004".to_string(),
        payload: json!({ "id": "V004", "name": "Sara Lee" }),
    }
}

#[tokio::test]
async fn accepted_submission_carries_the_clock_time() {
    init_logging();
    let submitter = SimulatedSubmitter::new(fast_settings());

    let receipt = submitter.submit(&vendor_request(3)).await.expect("accepted");
    assert_eq!(receipt.request_id, 3);
    assert_eq!(receipt.record_id, "V004");
    assert_eq!(receipt.accepted_at, "2025-08-12T09:30:00+00:00");
}

#[tokio::test]
async fn outage_fails_every_submission() {
    init_logging();
    let submitter = SimulatedSubmitter::new(SubmitSettings {
        simulate_outage: true,
        ..fast_settings()
    });

    let err = submitter.submit(&vendor_request(1)).await.unwrap_err();
    assert_eq!(err, SubmitError::Unavailable);
    assert_eq!(err.to_string(), "service unavailable");
}

#[tokio::test]
async fn slow_service_times_out() {
    init_logging();
    let submitter = SimulatedSubmitter::new(SubmitSettings {
        collection_latency: HashMap::from([("vendor".to_string(), Duration::from_millis(500))]),
        timeout: Duration::from_millis(20),
        ..fast_settings()
    });

    let err = submitter.submit(&vendor_request(1)).await.unwrap_err();
    assert_eq!(err, SubmitError::Timeout(Duration::from_millis(20)));
    assert_eq!(err.to_string(), "timed out after 20 ms");
}

#[tokio::test]
async fn non_object_payload_is_rejected() {
    init_logging();
    let submitter = SimulatedSubmitter::new(fast_settings());
    let request = SubmitRequest {
        payload: json!(["not", "a", "record"]),
        ..vendor_request(2)
    };

    let err = submitter.submit(&request).await.unwrap_err();
    assert!(matches!(err, SubmitError::InvalidPayload(_)));
}

#[test]
fn collection_latency_overrides_the_default() {
    let settings = SubmitSettings::default();
    assert_eq!(settings.latency_for("vendor"), Duration::from_millis(1000));
    assert_eq!(settings.latency_for("order"), Duration::from_millis(300));
}

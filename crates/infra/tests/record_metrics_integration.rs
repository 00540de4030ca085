//! Public recording entry points driving the real writer
//!
//! Uses the process-wide registry, so every test holds `REGISTRY_LOCK`.

mod support;

use std::sync::Arc;

use mldiag_core::{record, record_metrics};
use mldiag_domain::{Labels, MetricDescription, MetricType, MetricsConfig, RecordingError};
use mldiag_infra::{init_recorder, shutdown_recorder, Credentials, StaticRunContext};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{
    install_memory_recorder, mock_config, payload, received_bodies, REGISTRY_LOCK, WRITE_PATH,
};

#[tokio::test]
async fn batch_step_fills_only_missing_steps() {
    let _guard = REGISTRY_LOCK.lock().await;
    let sink = install_memory_recorder(Arc::new(StaticRunContext::new("run-1", "us-central1")));

    record_metrics(
        vec![
            MetricDescription::new("loss", 0.42),
            MetricDescription::new("lr", 0.01).with_step(5),
        ],
        false,
        Some(1),
    )
    .await
    .unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(payload(&entries[0]), json!({"values": [0.42], "step_index": 1}));
    assert_eq!(payload(&entries[1]), json!({"values": [0.01], "step_index": 5}));
    assert_eq!(entries[0].resource.label("namespace"), Some("loss"));
    assert_eq!(entries[1].resource.label("namespace"), Some("lr"));

    shutdown_recorder();
}

#[tokio::test]
async fn single_record_with_accelerator_labels() {
    let _guard = REGISTRY_LOCK.lock().await;
    let sink = install_memory_recorder(Arc::new(StaticRunContext::new("run-2", "us-east5")));

    let mut labels = Labels::new();
    labels.insert("hostname".into(), "h".into());
    labels.insert("accelerator_type".into(), "t".into());

    record(MetricType::Mfu, vec![10, 20, 30], Some(3), Some(labels), true).await.unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        payload(&entries[0]),
        json!({
            "values": [10, 20, 30],
            "accelerator_labels": ["h-t0", "h-t1", "h-t2"],
            "step_index": 3,
            "hostname": "h",
            "accelerator_type": "t"
        })
    );
    assert_eq!(entries[0].resource.label("namespace"), Some("mfu"));
    assert_eq!(entries[0].resource.label("node_id"), Some("run-2"));

    shutdown_recorder();
}

#[tokio::test]
async fn worker_host_only_writes_all_host_metrics() {
    let _guard = REGISTRY_LOCK.lock().await;
    let run = StaticRunContext::new("run-3", "us-central1").with_designated_host(false);
    let sink = install_memory_recorder(Arc::new(run));

    record(MetricType::Loss, 0.5, None, None, false).await.unwrap();
    assert_eq!(sink.write_calls(), 0);

    record(MetricType::MemoryUsage, 12.5, None, None, true).await.unwrap();
    assert_eq!(sink.entries().len(), 1);

    shutdown_recorder();
}

#[tokio::test]
async fn ended_run_rejects_records() {
    let _guard = REGISTRY_LOCK.lock().await;
    let run = Arc::new(StaticRunContext::new("run-4", "us-central1"));
    let sink = install_memory_recorder(run.clone());

    run.end();
    let err = record(MetricType::Loss, 0.5, None, None, false).await.unwrap_err();

    assert!(matches!(err, RecordingError::Config(_)));
    assert_eq!(sink.write_calls(), 0);

    shutdown_recorder();
}

#[tokio::test]
async fn sink_failure_surfaces_as_batch_write_error() {
    let _guard = REGISTRY_LOCK.lock().await;
    let sink = install_memory_recorder(Arc::new(StaticRunContext::new("run-5", "us-central1")));
    sink.fail_with(RecordingError::Sink("quota exceeded".into()));

    let err = record_metrics(
        vec![MetricDescription::new("loss", 1.0), MetricDescription::new("mfu", 0.4)],
        false,
        None,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RecordingError::BatchWrite(msg) if msg.contains("quota exceeded")));
    assert!(sink.entries().is_empty());

    shutdown_recorder();
}

#[tokio::test]
async fn init_recorder_writes_through_cloud_logging() {
    let _guard = REGISTRY_LOCK.lock().await;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(WRITE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    init_recorder(
        &mock_config(&server),
        Credentials::AccessToken("tok".into()),
        Arc::new(StaticRunContext::new("run-6", "asia-northeast1")),
    )
    .unwrap();

    record_metrics(
        vec![
            MetricDescription::new(MetricType::StepTime, 1.2),
            MetricDescription::new(MetricType::Throughput, "fast"),
        ],
        false,
        Some(10),
    )
    .await
    .unwrap();

    let bodies = received_bodies(&server).await;
    let entries = bodies[0]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["jsonPayload"], json!({"values": [1.2], "step_index": 10}));
    assert_eq!(entries[0]["resource"]["labels"]["location"], json!("asia-northeast1"));

    assert!(shutdown_recorder());
}

#[tokio::test]
async fn disabled_config_records_nothing() {
    let _guard = REGISTRY_LOCK.lock().await;

    init_recorder(
        &MetricsConfig::disabled(),
        Credentials::Ambient,
        Arc::new(StaticRunContext::new("run-7", "us-central1")),
    )
    .unwrap();

    record(MetricType::Loss, "anything", None, None, true).await.unwrap();
    record_metrics(vec![MetricDescription::new("custom", json!({"a": 1}))], true, None)
        .await
        .unwrap();

    assert!(shutdown_recorder());
}

#[tokio::test]
async fn recording_without_recorder_is_a_config_error() {
    let _guard = REGISTRY_LOCK.lock().await;
    shutdown_recorder();

    let err = record(MetricType::Loss, 0.1, None, None, false).await.unwrap_err();
    assert!(matches!(err, RecordingError::Config(_)));
}

use std::sync::Arc;

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mldiag_core::MetricsWriter;
use mldiag_domain::{Labels, MetricRecord, RunContext};
use mldiag_infra::{CloudLoggingWriter, InMemoryLogSink, LogEntryBuilder};
use serde_json::json;

fn sample_records(count: u64) -> Vec<MetricRecord> {
    let mut labels = Labels::new();
    labels.insert("hostname".to_string(), "host-0".to_string());
    labels.insert("accelerator_type".to_string(), "v5p".to_string());
    labels.insert("phase".to_string(), "train".to_string());

    (0..count)
        .map(|step| {
            MetricRecord::new("mfu", json!([0.51, 0.49, 0.52, 0.50, 0.48, 0.53, 0.47, 0.50]))
                .with_step(step)
                .with_labels(labels.clone())
        })
        .collect()
}

fn entry_builder_benchmark(c: &mut Criterion) {
    let run = RunContext::new("bench-run", "us-central1");
    let records = sample_records(256);

    let mut group = c.benchmark_group("entry_builder");
    group.sample_size(20).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("build_single_entry", |b| {
        let builder = LogEntryBuilder::new("bench-project");
        let record = &records[0];
        let timestamp = Utc::now();

        b.iter(|| {
            black_box(builder.build(black_box(record), &run, timestamp).unwrap());
        });
    });

    group.bench_function("write_batch_in_memory", |b| {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let sink = Arc::new(InMemoryLogSink::new());
        let writer = Arc::new(CloudLoggingWriter::new(sink, LogEntryBuilder::new("bench-project")));

        b.iter(|| {
            let writer = Arc::clone(&writer);
            let run = run.clone();
            let batch = records[..32].to_vec();
            runtime.block_on(async move {
                writer.write_metrics(&batch, &run).await.unwrap();
            });
        });
    });

    group.finish();
}

criterion_group!(infra_benchmarks, entry_builder_benchmark);
criterion_main!(infra_benchmarks);

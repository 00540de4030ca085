//! Structured-log export of metric records
//!
//! [`LogEntryBuilder`] turns one record into one entry; the writers batch
//! entries against a [`mldiag_core::LogSink`].

pub mod cloud_sink;
pub mod entry_builder;
pub mod memory_sink;
pub mod noop;
pub mod writer;

pub use cloud_sink::CloudLoggingSink;
pub use entry_builder::LogEntryBuilder;
pub use memory_sink::InMemoryLogSink;
pub use noop::NoOpMetricsWriter;
pub use writer::CloudLoggingWriter;

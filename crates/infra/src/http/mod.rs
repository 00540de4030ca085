//! HTTP plumbing shared by remote sinks

mod client;

pub use client::{HttpClient, HttpClientBuilder};

//! Domain constants
//!
//! Field names in this module are consumed by downstream ingestion and must
//! not change.

// Payload fields
pub const PAYLOAD_VALUES: &str = "values";
pub const PAYLOAD_ACCELERATOR_LABELS: &str = "accelerator_labels";
pub const PAYLOAD_STEP_INDEX: &str = "step_index";

// Reserved label keys; when both are present accelerator labels are derived
pub const LABEL_HOSTNAME: &str = "hostname";
pub const LABEL_ACCELERATOR_TYPE: &str = "accelerator_type";

// Monitored resource
pub const RESOURCE_TYPE_GENERIC_NODE: &str = "generic_node";
pub const RESOURCE_LABEL_PROJECT_ID: &str = "project_id";
pub const RESOURCE_LABEL_LOCATION: &str = "location";
pub const RESOURCE_LABEL_NAMESPACE: &str = "namespace";
pub const RESOURCE_LABEL_NODE_ID: &str = "node_id";

// Sink defaults
pub const DEFAULT_LOG_NAME: &str = "ml_diagnostics_metric";
pub const DEFAULT_LOGGING_ENDPOINT: &str = "https://logging.googleapis.com/v2/entries:write";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Non-finite samples use the protobuf JSON spellings
pub const SAMPLE_NAN: &str = "NaN";
pub const SAMPLE_POSITIVE_INFINITY: &str = "Infinity";
pub const SAMPLE_NEGATIVE_INFINITY: &str = "-Infinity";

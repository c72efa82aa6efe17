//! Console items: captured console output events.

use serde::Serialize;

/// One console output event captured while a section was recording.
///
/// A flat leaf: all fields are emitted verbatim, nothing nests beneath it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleItem {
    /// Numeric tag for the adaptor that captured the output.
    pub adaptor_type: u64,

    pub content: String,

    /// Numeric tag for the kind of output (stdout, stderr, ...).
    pub kind: u64,

    /// When the output was captured, in seconds since the producer's epoch.
    pub timestamp: f64,
}

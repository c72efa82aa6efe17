//! Log messages: diagnostics attached to sections.

use serde::Serialize;

use super::location::DocumentLocation;

/// How severe a message is.
///
/// The producer encodes severity as a small integer. Levels outside the
/// known set are preserved verbatim rather than rejected, and every
/// level serializes back to its integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,

    /// A level outside the known set, preserved as received.
    Other(i64),
}

impl Severity {
    /// Decode a raw producer level.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Severity::Note,
            1 => Severity::Warning,
            2 => Severity::Error,
            other => Severity::Other(other),
        }
    }

    /// The integer the producer uses for this level.
    pub fn raw(self) -> i64 {
        match self {
            Severity::Note => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
            Severity::Other(raw) => raw,
        }
    }
}

/// A diagnostic or informational message emitted during a section.
///
/// Messages nest: a compiler error and its notes arrive as one message
/// with sub-messages. The tree is finite — the producer never makes a
/// message its own ancestor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMessage {
    pub title: String,
    pub short_title: String,

    /// When the message was emitted, in seconds since the producer's epoch.
    pub time_emitted: f64,

    /// Character range this message covers in the owning section's `text`.
    pub range_end_in_section_text: u64,
    pub range_start_in_section_text: u64,

    /// Nested messages, in emission order.
    pub sub_messages: Vec<LogMessage>,

    pub severity: Severity,

    /// Producer-assigned type name for the message.
    #[serde(rename = "type")]
    pub message_type: String,

    /// Primary document position the message is anchored to.
    pub location: DocumentLocation,

    pub category_ident: String,

    /// Further anchored positions, in the order the producer listed them.
    pub secondary_locations: Vec<DocumentLocation>,

    pub additional_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_round_trips_through_raw() {
        assert_eq!(Severity::from_raw(0), Severity::Note);
        assert_eq!(Severity::from_raw(1), Severity::Warning);
        assert_eq!(Severity::from_raw(2), Severity::Error);
        assert_eq!(Severity::from_raw(9), Severity::Other(9));
        assert_eq!(Severity::from_raw(-3), Severity::Other(-3));

        for raw in [-3, 0, 1, 2, 9] {
            assert_eq!(Severity::from_raw(raw).raw(), raw);
        }
    }
}

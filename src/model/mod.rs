//! Core data model for activity logs.
//!
//! An activity log is the full record of one tool invocation: a
//! recursive tree of sections — one node per phase or step — with
//! diagnostic messages anchored to positions in source documents.
//! The decoding collaborator constructs the tree bottom-up, fully
//! populated, by plain struct literals; nothing here validates or
//! mutates a field after construction, so a finished tree is safe to
//! share across concurrent readers.
//!
//! No field is optional. Absence is a type-appropriate empty or zero
//! value, never an omission — the serialized form always carries every
//! key.

mod console;
mod location;
mod message;
mod section;

use serde::Serialize;

pub use console::ConsoleItem;
pub use location::{DocumentLocation, Location, TextDocumentLocation};
pub use message::{LogMessage, Severity};
pub use section::{ConsoleLogSection, LogSection, Section, Sections, UnitTestSection};

/// The root of a recorded activity log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    /// Format version stamped by the producer.
    pub version: i8,

    /// The top-level section; everything else nests beneath it.
    pub main_section: LogSection,
}

impl ActivityLog {
    /// Depth-first preorder walk over every section in the log.
    pub fn sections(&self) -> Sections<'_> {
        self.main_section.sections()
    }
}

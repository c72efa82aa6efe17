//! Typed, serializable model of a build tool's activity log.
//!
//! A build produces a structured execution log: a tree of
//! [`LogSection`]s — one per phase or step — carrying timings, captured
//! text, and [`LogMessage`] diagnostics anchored to
//! [`DocumentLocation`]s in source files. Specialized sections add their
//! own fields on top of the shared set: a [`UnitTestSection`] records
//! suite and test names, a [`ConsoleLogSection`] captures console
//! output items.
//!
//! This crate models that tree and serializes it. It does not parse the
//! producer's on-disk format and performs no I/O: a decoding
//! collaborator constructs the tree from already-typed values, and
//! reporters consume the serialized form — one flat record per node, in
//! which variant-specific fields sit beside the shared ones.

mod model;
mod serialize;

pub use model::{
    ActivityLog, ConsoleItem, ConsoleLogSection, DocumentLocation, Location, LogMessage,
    LogSection, Section, Sections, Severity, TextDocumentLocation, UnitTestSection,
};
pub use serialize::Error;

//! Serialization of the activity log model.
//!
//! Every record serializes flat: the shared base fields and the
//! variant's own fields side by side in one map, under the wire names
//! downstream reporters match on. The variant families are covered by
//! exhaustive matches, so a newly added shape fails to compile here
//! until its fields are emitted — fields cannot silently drop out of
//! the output.
//!
//! Serialization is total: any constructed tree serializes. The only
//! fallible step is materializing output through `serde_json`, wrapped
//! in [`Error`].

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use crate::model::{
    ActivityLog, ConsoleLogSection, DocumentLocation, Location, LogSection, Section, Severity,
    TextDocumentLocation, UnitTestSection,
};

/// Errors that can occur when materializing serialized output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Field counts passed to `serialize_struct`.
const SECTION_FIELDS: usize = 19;
const UNIT_TEST_FIELDS: usize = SECTION_FIELDS + 6;
const CONSOLE_LOG_FIELDS: usize = SECTION_FIELDS + 1;
const LOCATION_FIELDS: usize = 2;
const TEXT_LOCATION_FIELDS: usize = LOCATION_FIELDS + 7;

impl ActivityLog {
    /// Serialize the whole log to a structured value tree.
    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize the whole log to a JSON string.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl LogSection {
    /// Serialize this subtree to a structured value tree.
    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize this subtree to a JSON string.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Emit the field set shared by every section shape.
fn section_fields<S>(section: &Section, record: &mut S) -> Result<(), S::Error>
where
    S: SerializeStruct,
{
    record.serialize_field("sectionType", &section.section_type)?;
    record.serialize_field("domainType", &section.domain_type)?;
    record.serialize_field("title", &section.title)?;
    record.serialize_field("signature", &section.signature)?;
    record.serialize_field("timeStartedRecording", &section.time_started_recording)?;
    record.serialize_field("timeStoppedRecording", &section.time_stopped_recording)?;
    record.serialize_field("subSections", &section.sub_sections)?;
    record.serialize_field("text", &section.text)?;
    record.serialize_field("messages", &section.messages)?;
    record.serialize_field("wasCancelled", &section.was_cancelled)?;
    record.serialize_field("isQuiet", &section.is_quiet)?;
    record.serialize_field("wasFetchedFromCache", &section.was_fetched_from_cache)?;
    record.serialize_field("subtitle", &section.subtitle)?;
    record.serialize_field("location", &section.location)?;
    record.serialize_field("commandDetailDesc", &section.command_detail_desc)?;
    record.serialize_field("uniqueIdentifier", &section.unique_identifier)?;
    record.serialize_field("localizedResultString", &section.localized_result_string)?;
    record.serialize_field("xcbuildSignature", &section.xcbuild_signature)?;
    record.serialize_field("unknown", &section.unknown)?;
    Ok(())
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("Section", SECTION_FIELDS)?;
        section_fields(self, &mut record)?;
        record.end()
    }
}

impl Serialize for UnitTestSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("UnitTestSection", UNIT_TEST_FIELDS)?;
        section_fields(&self.base, &mut record)?;
        record.serialize_field("testsPassedString", &self.tests_passed_string)?;
        record.serialize_field("durationString", &self.duration_string)?;
        record.serialize_field("summaryString", &self.summary_string)?;
        record.serialize_field("suiteName", &self.suite_name)?;
        record.serialize_field("testName", &self.test_name)?;
        record.serialize_field(
            "performanceTestOutputString",
            &self.performance_test_output_string,
        )?;
        record.end()
    }
}

impl Serialize for ConsoleLogSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("ConsoleLogSection", CONSOLE_LOG_FIELDS)?;
        section_fields(&self.base, &mut record)?;
        record.serialize_field("logConsoleItems", &self.log_console_items)?;
        record.end()
    }
}

impl Serialize for LogSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LogSection::Section(section) => section.serialize(serializer),
            LogSection::UnitTest(section) => section.serialize(serializer),
            LogSection::ConsoleLog(section) => section.serialize(serializer),
        }
    }
}

/// Emit the field set shared by every location shape.
fn location_fields<S>(location: &Location, record: &mut S) -> Result<(), S::Error>
where
    S: SerializeStruct,
{
    record.serialize_field("documentURLString", &location.document_url_string)?;
    record.serialize_field("timestamp", &location.timestamp)?;
    Ok(())
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("Location", LOCATION_FIELDS)?;
        location_fields(self, &mut record)?;
        record.end()
    }
}

impl Serialize for TextDocumentLocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record =
            serializer.serialize_struct("TextDocumentLocation", TEXT_LOCATION_FIELDS)?;
        location_fields(&self.base, &mut record)?;
        record.serialize_field("startingLineNumber", &self.starting_line_number)?;
        record.serialize_field("startingColumnNumber", &self.starting_column_number)?;
        record.serialize_field("endingLineNumber", &self.ending_line_number)?;
        record.serialize_field("endingColumnNumber", &self.ending_column_number)?;
        record.serialize_field("characterRangeEnd", &self.character_range_end)?;
        record.serialize_field("characterRangeStart", &self.character_range_start)?;
        record.serialize_field("locationEncoding", &self.location_encoding)?;
        record.end()
    }
}

impl Serialize for DocumentLocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DocumentLocation::Location(location) => location.serialize(serializer),
            DocumentLocation::Text(location) => location.serialize(serializer),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.raw())
    }
}

//! Sections: the nodes of the activity log tree.

use super::console::ConsoleItem;
use super::location::DocumentLocation;
use super::message::LogMessage;

/// The field set shared by every section shape: one phase or step of the
/// recorded run, with nested sub-steps.
#[derive(Debug, Clone)]
pub struct Section {
    /// Producer's numeric tag for the kind of work recorded.
    pub section_type: i8,

    /// Producer's domain identifier for the section (e.g. a build-log or
    /// test-log domain string).
    pub domain_type: String,

    pub title: String,
    pub signature: String,

    /// Recording window, in seconds since the producer's epoch.
    /// Stop is expected to be at or after start; the decoder is trusted.
    pub time_started_recording: f64,
    pub time_stopped_recording: f64,

    /// Child sections, in nesting/chronological order.
    pub sub_sections: Vec<LogSection>,

    /// Captured output text for the section. Message ranges index into it.
    pub text: String,

    /// Diagnostics attached to this section, in emission order.
    pub messages: Vec<LogMessage>,

    pub was_cancelled: bool,
    pub is_quiet: bool,
    pub was_fetched_from_cache: bool,

    pub subtitle: String,
    pub location: DocumentLocation,
    pub command_detail_desc: String,
    pub unique_identifier: String,
    pub localized_result_string: String,
    pub xcbuild_signature: String,

    /// Raw passthrough; the producer does not document its meaning.
    pub unknown: i64,
}

impl Section {
    /// Length of the recording window, in seconds.
    pub fn duration(&self) -> f64 {
        self.time_stopped_recording - self.time_started_recording
    }
}

/// A section that recorded one unit-test run.
#[derive(Debug, Clone)]
pub struct UnitTestSection {
    pub base: Section,
    pub tests_passed_string: String,
    pub duration_string: String,
    pub summary_string: String,
    pub suite_name: String,
    pub test_name: String,
    pub performance_test_output_string: String,
}

/// A section that captured console output.
#[derive(Debug, Clone)]
pub struct ConsoleLogSection {
    pub base: Section,

    /// Captured console events, in capture order.
    pub log_console_items: Vec<ConsoleItem>,
}

/// One node of the activity log tree.
///
/// Closed set of section shapes. Adding a variant here means extending
/// the serializer's match, which otherwise stops compiling — a new
/// shape cannot ship with its fields missing from the output.
#[derive(Debug, Clone)]
pub enum LogSection {
    /// A plain section with no variant-specific payload.
    Section(Section),

    /// A unit-test run.
    UnitTest(UnitTestSection),

    /// A console output capture.
    ConsoleLog(ConsoleLogSection),
}

impl LogSection {
    /// The fields shared by every section shape.
    pub fn base(&self) -> &Section {
        match self {
            LogSection::Section(section) => section,
            LogSection::UnitTest(section) => &section.base,
            LogSection::ConsoleLog(section) => &section.base,
        }
    }

    /// Depth-first preorder walk over this section and all descendants,
    /// preserving stored order. The read path for reporters.
    pub fn sections(&self) -> Sections<'_> {
        Sections { stack: vec![self] }
    }
}

/// Iterator over a section subtree, depth-first preorder.
#[derive(Debug)]
pub struct Sections<'a> {
    stack: Vec<&'a LogSection>,
}

impl<'a> Iterator for Sections<'a> {
    type Item = &'a LogSection;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.stack.pop()?;
        // Children pushed in reverse so the first child pops next.
        self.stack.extend(section.base().sub_sections.iter().rev());
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    fn sample_section(title: &str) -> Section {
        Section {
            section_type: 1,
            domain_type: "build.log.section".into(),
            title: title.into(),
            signature: format!("{title} signature"),
            time_started_recording: 100.0,
            time_stopped_recording: 112.5,
            sub_sections: Vec::new(),
            text: String::new(),
            messages: Vec::new(),
            was_cancelled: false,
            is_quiet: false,
            was_fetched_from_cache: false,
            subtitle: String::new(),
            location: DocumentLocation::Location(Location {
                document_url_string: String::new(),
                timestamp: 0.0,
            }),
            command_detail_desc: String::new(),
            unique_identifier: String::new(),
            localized_result_string: String::new(),
            xcbuild_signature: String::new(),
            unknown: 0,
        }
    }

    #[test]
    fn duration_is_the_recording_window() {
        assert_eq!(sample_section("Build").duration(), 12.5);
    }

    #[test]
    fn base_reaches_shared_fields_of_every_shape() {
        let plain = LogSection::Section(sample_section("Build"));
        assert_eq!(plain.base().title, "Build");

        let test = LogSection::UnitTest(UnitTestSection {
            base: sample_section("Test"),
            tests_passed_string: "4 passed".into(),
            duration_string: "0.2s".into(),
            summary_string: String::new(),
            suite_name: "LoginTests".into(),
            test_name: "testLoginSucceeds".into(),
            performance_test_output_string: String::new(),
        });
        assert_eq!(test.base().title, "Test");

        let console = LogSection::ConsoleLog(ConsoleLogSection {
            base: sample_section("Console"),
            log_console_items: Vec::new(),
        });
        assert_eq!(console.base().title, "Console");
    }

    #[test]
    fn sections_walks_depth_first_in_stored_order() {
        let mut build = sample_section("Build");
        build.sub_sections = vec![
            LogSection::Section(sample_section("Compile")),
            LogSection::Section(sample_section("Link")),
        ];

        let mut root = sample_section("Root");
        root.sub_sections = vec![
            LogSection::Section(build),
            LogSection::Section(sample_section("Test")),
        ];
        let root = LogSection::Section(root);

        let titles: Vec<&str> = root
            .sections()
            .map(|section| section.base().title.as_str())
            .collect();
        assert_eq!(titles, ["Root", "Build", "Compile", "Link", "Test"]);
    }
}

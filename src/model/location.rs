//! Document locations: references into source documents.

/// A reference to a source document, by URL.
#[derive(Debug, Clone)]
pub struct Location {
    pub document_url_string: String,

    /// When the document was last known in this state, in seconds since
    /// the producer's epoch.
    pub timestamp: f64,
}

/// A reference to a text range inside a source document.
#[derive(Debug, Clone)]
pub struct TextDocumentLocation {
    pub base: Location,
    pub starting_line_number: u64,
    pub starting_column_number: u64,
    pub ending_line_number: u64,
    pub ending_column_number: u64,
    pub character_range_end: u64,
    pub character_range_start: u64,

    /// Raw passthrough; the producer does not document its meaning.
    pub location_encoding: u64,
}

/// Where in a source document something happened.
///
/// Closed set of location shapes. Adding a variant here means extending
/// the serializer's match, which otherwise stops compiling — a new
/// shape cannot ship with its fields missing from the output.
#[derive(Debug, Clone)]
pub enum DocumentLocation {
    /// A whole-document reference.
    Location(Location),

    /// A text-range reference with line, column, and character offsets.
    Text(TextDocumentLocation),
}

impl DocumentLocation {
    /// The fields shared by every location shape.
    pub fn base(&self) -> &Location {
        match self {
            DocumentLocation::Location(location) => location,
            DocumentLocation::Text(location) => &location.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_reaches_shared_fields_of_every_shape() {
        let plain = DocumentLocation::Location(Location {
            document_url_string: "file:///main.rs".into(),
            timestamp: 1.5,
        });
        assert_eq!(plain.base().document_url_string, "file:///main.rs");

        let ranged = DocumentLocation::Text(TextDocumentLocation {
            base: Location {
                document_url_string: "file:///lib.rs".into(),
                timestamp: 2.5,
            },
            starting_line_number: 3,
            starting_column_number: 1,
            ending_line_number: 3,
            ending_column_number: 10,
            character_range_end: 52,
            character_range_start: 40,
            location_encoding: 0,
        });
        assert_eq!(ranged.base().document_url_string, "file:///lib.rs");
        assert_eq!(ranged.base().timestamp, 2.5);
    }
}

//! Latest-note resource definition.
//!
//! A fixed-URI resource; the service resolves it against the note store.

/// `notes://latest` - the most recently added note.
pub struct LatestNoteResource;

impl LatestNoteResource {
    pub const URI: &'static str = "notes://latest";
    pub const NAME: &'static str = "Latest Note";
    pub const DESCRIPTION: &'static str = "The most recently added note";
    pub const MIME_TYPE: &'static str = "text/plain";

    /// Text shown when no note has been stored yet.
    pub const EMPTY_FALLBACK: &'static str = "No notes yet.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(LatestNoteResource::URI, "notes://latest");
        assert_eq!(LatestNoteResource::MIME_TYPE, "text/plain");
    }
}

//! Domain Value Objects

/// The mutable part of a post, as supplied by a client.
///
/// Fields are stored verbatim; empty strings are accepted and no field
/// validation is performed.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(title: String, description: String, body: String) -> Self {
        Self {
            title,
            description,
            body,
        }
    }
}

//! [`Tag`] grouping related operations.

use crate::{Extensions, ExternalDocs};

/// Tag used to group operations in the document.
///
/// Tag names are unique within a document; [`crate::OpenApi::add_tag`]
/// enforces this.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Tag {
    /// Name of the tag.
    pub name: String,

    /// Description of the tag.
    pub description: Option<String>,

    /// External documentation for the tag.
    pub external_docs: Option<ExternalDocs>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Tag {
    /// Construct a new [`Tag`] with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }

    /// Add external documentation.
    pub fn with_external_docs(mut self, external_docs: ExternalDocs) -> Self {
        set_value!(self external_docs Some(external_docs))
    }
}

//! [`ExternalDocs`] pointing to additional documentation.

use crate::Extensions;

/// Reference to external documentation.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct ExternalDocs {
    /// URL of the documentation.
    pub url: String,

    /// Description of the documentation.
    pub description: Option<String>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl ExternalDocs {
    /// Construct a new [`ExternalDocs`] from a URL.
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

//! [`RequestBody`] of an operation.

use indexmap::IndexMap;

use crate::{Content, Extensions};

builder! {
    RequestBodyBuilder;

    /// Request body of an operation.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct RequestBody {
        /// Description of the request body.
        pub description: Option<String>,

        /// Payload descriptions keyed by media type.
        pub content: IndexMap<String, Content>,

        /// Whether the body is mandatory.
        pub required: bool,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl RequestBody {
    crate::new!(pub RequestBody);
}

impl RequestBodyBuilder {
    /// Set the description of the request body.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Add a payload description for a media type.
    pub fn content<S: Into<String>>(mut self, media_type: S, content: Content) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }

    /// Mark the body as mandatory.
    pub fn required(mut self, required: bool) -> Self {
        set_value!(self required required)
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

//! [`Content`] — the media type object keyed by MIME type in `content`
//! maps.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{Encoding, Example, Extensions, RefOr, Schema};

builder! {
    ContentBuilder;

    /// Payload description for a single media type.
    ///
    /// `example` and `examples` are mutually exclusive; the reader rejects
    /// JSON carrying both.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Content {
        /// Schema of the payload.
        pub schema: Option<RefOr<Schema>>,

        /// Single literal example of the payload.
        pub example: Option<Value>,

        /// Named examples of the payload.
        pub examples: IndexMap<String, RefOr<Example>>,

        /// Encoding of object properties, keyed by property name.
        pub encoding: IndexMap<String, Encoding>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Content {
    /// Construct a new [`Content`] with the given schema.
    pub fn new<S: Into<RefOr<Schema>>>(schema: S) -> Self {
        Self {
            schema: Some(schema.into()),
            ..Default::default()
        }
    }
}

impl ContentBuilder {
    /// Set the schema of the payload.
    pub fn schema<S: Into<RefOr<Schema>>>(mut self, schema: Option<S>) -> Self {
        set_value!(self schema schema.map(Into::into))
    }

    /// Set the single literal example of the payload.
    pub fn example(mut self, example: Option<Value>) -> Self {
        set_value!(self example example)
    }

    /// Add a named example of the payload.
    pub fn add_example<N: Into<String>, E: Into<RefOr<Example>>>(
        mut self,
        name: N,
        example: E,
    ) -> Self {
        self.examples.insert(name.into(), example.into());
        self
    }

    /// Add an encoding for an object property.
    pub fn encoding<N: Into<String>>(mut self, property_name: N, encoding: Encoding) -> Self {
        self.encoding.insert(property_name.into(), encoding);
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

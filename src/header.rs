//! [`Header`] used in responses and encodings.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{Content, Example, Extensions, ParameterStyle, RefOr, Schema};

builder! {
    HeaderBuilder;

    /// A response or encoding header.
    ///
    /// Shaped like a header parameter without `name` and `in`: `schema` and
    /// `content` are mutually exclusive, as are `example` and `examples`.
    #[derive(Debug, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Header {
        /// Description of the header.
        pub description: Option<String>,

        /// Whether the header is mandatory.
        pub required: bool,

        /// Whether the header is deprecated.
        pub deprecated: bool,

        /// Serialization style; only `simple` is meaningful for headers.
        pub style: ParameterStyle,

        /// Whether array/object values expand into separate entries.
        pub explode: bool,

        /// Schema of the header value.
        pub schema: Option<RefOr<Schema>>,

        /// Single literal example of the header value.
        pub example: Option<Value>,

        /// Named examples of the header value.
        pub examples: IndexMap<String, RefOr<Example>>,

        /// Media type map used instead of `schema` for complex values.
        pub content: IndexMap<String, Content>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Header {
    crate::new!(pub Header);

    /// Construct a new [`Header`] with the given value schema.
    pub fn with_schema<S: Into<RefOr<Schema>>>(schema: S) -> Self {
        Self {
            schema: Some(schema.into()),
            ..Default::default()
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            description: None,
            required: false,
            deprecated: false,
            style: ParameterStyle::Simple,
            explode: false,
            schema: None,
            example: None,
            examples: IndexMap::new(),
            content: IndexMap::new(),
            extensions: Extensions::default(),
        }
    }
}

impl HeaderBuilder {
    /// Set the description of the header.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Mark the header as mandatory.
    pub fn required(mut self, required: bool) -> Self {
        set_value!(self required required)
    }

    /// Mark the header as deprecated.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        set_value!(self deprecated deprecated)
    }

    /// Set the explode flag.
    pub fn explode(mut self, explode: bool) -> Self {
        set_value!(self explode explode)
    }

    /// Set the schema of the header value.
    pub fn schema<S: Into<RefOr<Schema>>>(mut self, schema: Option<S>) -> Self {
        set_value!(self schema schema.map(Into::into))
    }

    /// Set the single literal example of the header value.
    pub fn example(mut self, example: Option<Value>) -> Self {
        set_value!(self example example)
    }

    /// Add a named example of the header value.
    pub fn add_example<N: Into<String>, E: Into<RefOr<Example>>>(
        mut self,
        name: N,
        example: E,
    ) -> Self {
        self.examples.insert(name.into(), example.into());
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

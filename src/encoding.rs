//! [`Encoding`] of a single object property within a media type.

use indexmap::IndexMap;

use crate::{Extensions, Header, ParameterStyle, RefOr};

/// Serialization of a single request body property.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Encoding {
    /// Content type of the property.
    pub content_type: String,

    /// Additional headers, e.g. `Content-Disposition`. Keys are stored
    /// lowercased.
    pub headers: IndexMap<String, RefOr<Header>>,

    /// Serialization style of the property value.
    pub style: Option<ParameterStyle>,

    /// Whether array/object values expand into separate parameters.
    pub explode: bool,

    /// Whether reserved characters may appear unescaped.
    pub allow_reserved: bool,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Encoding {
    /// Construct a new [`Encoding`] with the given content type.
    pub fn new<S: Into<String>>(content_type: S) -> Self {
        Self {
            content_type: content_type.into(),
            ..Default::default()
        }
    }

    /// Add a header; the name is lowercased.
    pub fn with_header<N: Into<String>, H: Into<RefOr<Header>>>(
        mut self,
        name: N,
        header: H,
    ) -> Self {
        self.headers.insert(name.into().to_lowercase(), header.into());
        self
    }

    /// Set the serialization style.
    pub fn with_style(mut self, style: ParameterStyle) -> Self {
        set_value!(self style Some(style))
    }

    /// Set the explode flag.
    pub fn with_explode(mut self, explode: bool) -> Self {
        set_value!(self explode explode)
    }

    /// Allow reserved characters to appear unescaped.
    pub fn with_allow_reserved(mut self, allow_reserved: bool) -> Self {
        set_value!(self allow_reserved allow_reserved)
    }
}

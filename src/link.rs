//! [`Link`] describing a design-time relationship between a response and
//! another operation.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{Extensions, Server};

builder! {
    LinkBuilder;

    /// A link from a response to a related operation.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Link {
        /// Relative or absolute URI reference to the target operation.
        pub operation_ref: Option<String>,

        /// `operationId` of the target operation.
        pub operation_id: Option<String>,

        /// Parameters passed to the target operation; values are constants
        /// or runtime expressions, kept as raw JSON.
        pub parameters: IndexMap<String, Value>,

        /// Request body passed to the target operation.
        pub request_body: Option<Value>,

        /// Description of the link.
        pub description: Option<String>,

        /// Server to use for the target operation.
        pub server: Option<Server>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Link {
    crate::new!(pub Link);
}

impl LinkBuilder {
    /// Set the URI reference of the target operation.
    pub fn operation_ref<S: Into<String>>(mut self, operation_ref: Option<S>) -> Self {
        set_value!(self operation_ref operation_ref.map(Into::into))
    }

    /// Set the `operationId` of the target operation.
    pub fn operation_id<S: Into<String>>(mut self, operation_id: Option<S>) -> Self {
        set_value!(self operation_id operation_id.map(Into::into))
    }

    /// Add a parameter passed to the target operation.
    pub fn parameter<S: Into<String>>(mut self, name: S, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Set the request body passed to the target operation.
    pub fn request_body(mut self, request_body: Option<Value>) -> Self {
        set_value!(self request_body request_body)
    }

    /// Set the description of the link.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Set the server to use for the target operation.
    pub fn server(mut self, server: Option<Server>) -> Self {
        set_value!(self server server)
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

//! [`Example`] attached to media types, parameters and headers.

use serde_json::Value;

use crate::Extensions;

builder! {
    ExampleBuilder;

    /// A single named example value.
    ///
    /// `value` and `external_value` are mutually exclusive; the reader
    /// rejects JSON carrying both. An explicit JSON `null` value counts as
    /// absent.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Example {
        /// Short summary of the example.
        pub summary: Option<String>,

        /// Longer description of the example.
        pub description: Option<String>,

        /// Embedded literal example value.
        pub value: Option<Value>,

        /// URL pointing to the example value.
        pub external_value: Option<String>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Example {
    crate::new!(pub Example);
}

impl ExampleBuilder {
    /// Set the summary of the example.
    pub fn summary<S: Into<String>>(mut self, summary: Option<S>) -> Self {
        set_value!(self summary summary.map(Into::into))
    }

    /// Set the description of the example.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Set the embedded example value.
    pub fn value(mut self, value: Option<Value>) -> Self {
        set_value!(self value value)
    }

    /// Set the URL pointing to the example value.
    pub fn external_value<S: Into<String>>(mut self, external_value: Option<S>) -> Self {
        set_value!(self external_value external_value.map(Into::into))
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

//! Error types emitted while parsing documents or mutating the node tree.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the reader and by container mutators.
///
/// All errors are synchronous and fatal to the call that produced them; no
/// partially parsed document is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required property is absent.
    #[error("required property `{name}` of {node} is missing")]
    MissingField {
        node: &'static str,
        name: &'static str,
    },

    /// A property is present but has the wrong JSON type.
    #[error("property `{name}` of {node} is expected to be {expected}")]
    InvalidField {
        node: &'static str,
        name: &'static str,
        expected: &'static str,
    },

    /// A value that must be a JSON object is something else.
    #[error("{0} must be a JSON object")]
    ExpectedObject(&'static str),

    /// A value that must be a JSON array is something else.
    #[error("{0} must be a JSON array")]
    ExpectedArray(&'static str),

    /// The `openapi` version tag names a version outside the 3.0.x line.
    #[error("unsupported OpenAPI version `{0}`")]
    UnsupportedVersion(String),

    /// A schema object matches none of the known variant shapes.
    #[error("cannot determine schema variant of {0}")]
    UnknownSchemaShape(String),

    /// A parameter `in` value other than path, query, header or cookie.
    #[error("unsupported parameter location `{0}`")]
    UnsupportedParameterLocation(String),

    /// A security scheme `type` value outside the known set.
    #[error("unsupported security scheme type `{0}`")]
    UnsupportedSecuritySchemeType(String),

    /// An API key `in` value other than query, header or cookie.
    #[error("unsupported API key location `{0}`")]
    UnsupportedApiKeyLocation(String),

    /// A serialization style string outside the known set.
    #[error("unsupported serialization style `{0}`")]
    UnsupportedStyle(String),

    /// A path item contains keys that are neither HTTP methods, known
    /// fixed fields nor extension fields.
    #[error("unsupported HTTP method(s) {0}")]
    UnsupportedHttpMethods(String),

    /// Both fields of a forbidden pair are present on the same node.
    #[error("either `{first}` or `{second}` may be present, but not both")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    /// Two response header names differ only in case.
    #[error("duplicate response header `{0}`")]
    DuplicateResponseHeader(String),

    /// Adding an entry whose identifying key already exists.
    #[error("duplicate {kind} `{key}`")]
    Duplicate { kind: &'static str, key: String },

    /// An operation's `responses` object has no entries.
    #[error("operation responses cannot be empty")]
    EmptyResponses,

    /// A path parameter carries an explicit `required: false`.
    #[error("path parameter `{0}` is always required")]
    OptionalPathParameter(String),

    /// A server `variables` entry has no `{placeholder}` in the URL.
    #[error("missing server variable named `{0}`")]
    UnknownServerVariable(String),

    /// A security requirement value is not an array of strings.
    #[error("scopes of security requirement `{0}` must be an array of strings")]
    InvalidScopes(String),
}

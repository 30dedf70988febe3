//! [`Server`] and [`ServerVariable`] describing where the API is hosted.

use indexmap::IndexMap;

use crate::Extensions;

/// A server hosting the API.
///
/// The URL may be a template containing `{placeholder}` segments; one
/// [`ServerVariable`] is created for each placeholder at construction time,
/// so the variable map always matches the template. The URL itself is
/// immutable after construction.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Server {
    url: String,

    /// Description of the server.
    pub description: Option<String>,

    /// Variables substituted into the URL template, keyed by placeholder
    /// name in order of appearance.
    pub variables: IndexMap<String, ServerVariable>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Server {
    /// Construct a new [`Server`], discovering template variables from the
    /// URL.
    pub fn new<S: Into<String>>(url: S) -> Self {
        let url = url.into();
        let variables = template_variables(&url)
            .into_iter()
            .map(|name| (name.to_string(), ServerVariable::default()))
            .collect();
        Self {
            url,
            variables,
            ..Default::default()
        }
    }

    /// URL (or URL template) of the server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

/// A variable of a templated server URL.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct ServerVariable {
    /// Value used when the caller supplies none.
    pub default_value: String,

    /// Allowed values; empty means unrestricted.
    pub enum_values: Vec<String>,

    /// Description of the variable.
    pub description: Option<String>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl ServerVariable {
    /// Construct a new [`ServerVariable`] with the given default value.
    pub fn new<S: Into<String>>(default_value: S) -> Self {
        Self {
            default_value: default_value.into(),
            ..Default::default()
        }
    }

    /// Restrict the variable to the given values.
    pub fn with_enum_values<I, S>(mut self, enum_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        set_value!(self enum_values enum_values.into_iter().map(Into::into).collect())
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

/// Names of `{placeholder}` segments in order of appearance.
fn template_variables(url: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = url;
    while let Some(start) = rest.find('{') {
        let tail = &rest[start + 1..];
        let Some(end) = tail.find('}') else { break };
        names.push(&tail[..end]);
        rest = &tail[end + 1..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_variables_discovered_in_order() {
        let server = Server::new("https://{region}.api.example.com/{basePath}");

        assert_eq!(
            server.variables.keys().collect::<Vec<_>>(),
            vec!["region", "basePath"]
        );
    }

    #[test]
    fn plain_url_has_no_variables() {
        let server = Server::new("https://api.example.com");

        assert!(server.variables.is_empty());
        assert_eq!(server.url(), "https://api.example.com");
    }

    #[test]
    fn unterminated_placeholder_ignored() {
        let server = Server::new("https://{region.example.com");

        assert!(server.variables.is_empty());
    }
}

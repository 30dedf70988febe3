//! Security schemes, OAuth2 flows and [`SecurityRequirement`].

use indexmap::IndexMap;

use crate::Extensions;

/// A security scheme, tagged by the `type` field of its JSON form.
///
/// The variant is fixed at construction; the writer branches on it to emit
/// the type-specific fields.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityScheme {
    /// An API key in a query parameter, header or cookie.
    ApiKey(ApiKey),
    /// An HTTP authentication scheme from the IANA registry.
    Http(Http),
    /// OAuth2 with one or more flows.
    OAuth2(OAuth2),
    /// OpenID Connect discovery.
    OpenIdConnect(OpenIdConnect),
}

impl SecurityScheme {
    /// The `type` string of this scheme.
    pub fn scheme_type(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "apiKey",
            Self::Http(_) => "http",
            Self::OAuth2(_) => "oauth2",
            Self::OpenIdConnect(_) => "openIdConnect",
        }
    }

    /// Description shared by every scheme type.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::ApiKey(scheme) => scheme.description.as_deref(),
            Self::Http(scheme) => scheme.description.as_deref(),
            Self::OAuth2(scheme) => scheme.description.as_deref(),
            Self::OpenIdConnect(scheme) => scheme.description.as_deref(),
        }
    }

    /// Extensions shared by every scheme type.
    pub fn extensions(&self) -> &Extensions {
        match self {
            Self::ApiKey(scheme) => &scheme.extensions,
            Self::Http(scheme) => &scheme.extensions,
            Self::OAuth2(scheme) => &scheme.extensions,
            Self::OpenIdConnect(scheme) => &scheme.extensions,
        }
    }
}

/// Location of an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyIn {
    Query,
    Header,
    Cookie,
}

impl ApiKeyIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }

    pub(crate) fn from_str(value: &str) -> Option<Self> {
        match value {
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }
}

/// `type: apiKey` security scheme.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ApiKey {
    /// Name of the parameter, header or cookie carrying the key.
    pub name: String,

    /// Where the key is transported.
    pub api_key_in: ApiKeyIn,

    /// Description of the scheme.
    pub description: Option<String>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl ApiKey {
    /// Construct a new [`ApiKey`] scheme.
    pub fn new<S: Into<String>>(name: S, api_key_in: ApiKeyIn) -> Self {
        Self {
            name: name.into(),
            api_key_in,
            description: None,
            extensions: Extensions::default(),
        }
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

/// `type: http` security scheme.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Http {
    /// Name of the HTTP authentication scheme, e.g. `basic` or `bearer`.
    pub scheme: String,

    /// Hint on how the bearer token is formatted.
    pub bearer_format: Option<String>,

    /// Description of the scheme.
    pub description: Option<String>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Http {
    /// Construct a new [`Http`] scheme.
    pub fn new<S: Into<String>>(scheme: S) -> Self {
        Self {
            scheme: scheme.into(),
            ..Default::default()
        }
    }

    /// Add a bearer token format hint.
    pub fn with_bearer_format<S: Into<String>>(mut self, bearer_format: S) -> Self {
        set_value!(self bearer_format Some(bearer_format.into()))
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

/// `type: oauth2` security scheme.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct OAuth2 {
    /// The flows supported by the scheme.
    pub flows: OAuthFlows,

    /// Description of the scheme.
    pub description: Option<String>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl OAuth2 {
    /// Construct a new [`OAuth2`] scheme with the given flows.
    pub fn new(flows: OAuthFlows) -> Self {
        Self {
            flows,
            ..Default::default()
        }
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

/// `type: openIdConnect` security scheme.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct OpenIdConnect {
    /// OpenID Connect discovery URL.
    pub open_id_connect_url: String,

    /// Description of the scheme.
    pub description: Option<String>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl OpenIdConnect {
    /// Construct a new [`OpenIdConnect`] scheme.
    pub fn new<S: Into<String>>(open_id_connect_url: S) -> Self {
        Self {
            open_id_connect_url: open_id_connect_url.into(),
            ..Default::default()
        }
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }
}

/// Container of the up to four OAuth2 flow kinds.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct OAuthFlows {
    /// Implicit flow.
    pub implicit: Option<Implicit>,

    /// Resource owner password flow.
    pub password: Option<Password>,

    /// Client credentials flow.
    pub client_credentials: Option<ClientCredentials>,

    /// Authorization code flow.
    pub authorization_code: Option<AuthorizationCode>,
}

impl OAuthFlows {
    crate::new!(pub OAuthFlows);

    /// Set the implicit flow.
    pub fn with_implicit(mut self, flow: Implicit) -> Self {
        set_value!(self implicit Some(flow))
    }

    /// Set the resource owner password flow.
    pub fn with_password(mut self, flow: Password) -> Self {
        set_value!(self password Some(flow))
    }

    /// Set the client credentials flow.
    pub fn with_client_credentials(mut self, flow: ClientCredentials) -> Self {
        set_value!(self client_credentials Some(flow))
    }

    /// Set the authorization code flow.
    pub fn with_authorization_code(mut self, flow: AuthorizationCode) -> Self {
        set_value!(self authorization_code Some(flow))
    }
}

/// Scope name to description mapping of an OAuth2 flow.
pub type Scopes = IndexMap<String, String>;

/// OAuth2 implicit flow.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Implicit {
    /// Authorization endpoint URL.
    pub authorization_url: String,

    /// Token refresh endpoint URL.
    pub refresh_url: Option<String>,

    /// Available scopes.
    pub scopes: Scopes,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Implicit {
    /// Construct a new [`Implicit`] flow.
    pub fn new<S: Into<String>>(authorization_url: S) -> Self {
        Self {
            authorization_url: authorization_url.into(),
            ..Default::default()
        }
    }

    /// Add a scope.
    pub fn with_scope<N: Into<String>, D: Into<String>>(mut self, name: N, description: D) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }

    /// Set the refresh endpoint URL.
    pub fn with_refresh_url<S: Into<String>>(mut self, refresh_url: S) -> Self {
        set_value!(self refresh_url Some(refresh_url.into()))
    }
}

/// OAuth2 resource owner password flow.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Password {
    /// Token endpoint URL.
    pub token_url: String,

    /// Token refresh endpoint URL.
    pub refresh_url: Option<String>,

    /// Available scopes.
    pub scopes: Scopes,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Password {
    /// Construct a new [`Password`] flow.
    pub fn new<S: Into<String>>(token_url: S) -> Self {
        Self {
            token_url: token_url.into(),
            ..Default::default()
        }
    }

    /// Add a scope.
    pub fn with_scope<N: Into<String>, D: Into<String>>(mut self, name: N, description: D) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }

    /// Set the refresh endpoint URL.
    pub fn with_refresh_url<S: Into<String>>(mut self, refresh_url: S) -> Self {
        set_value!(self refresh_url Some(refresh_url.into()))
    }
}

/// OAuth2 client credentials flow.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct ClientCredentials {
    /// Token endpoint URL.
    pub token_url: String,

    /// Token refresh endpoint URL.
    pub refresh_url: Option<String>,

    /// Available scopes.
    pub scopes: Scopes,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl ClientCredentials {
    /// Construct a new [`ClientCredentials`] flow.
    pub fn new<S: Into<String>>(token_url: S) -> Self {
        Self {
            token_url: token_url.into(),
            ..Default::default()
        }
    }

    /// Add a scope.
    pub fn with_scope<N: Into<String>, D: Into<String>>(mut self, name: N, description: D) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }

    /// Set the refresh endpoint URL.
    pub fn with_refresh_url<S: Into<String>>(mut self, refresh_url: S) -> Self {
        set_value!(self refresh_url Some(refresh_url.into()))
    }
}

/// OAuth2 authorization code flow.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct AuthorizationCode {
    /// Authorization endpoint URL.
    pub authorization_url: String,

    /// Token endpoint URL.
    pub token_url: String,

    /// Token refresh endpoint URL.
    pub refresh_url: Option<String>,

    /// Available scopes.
    pub scopes: Scopes,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl AuthorizationCode {
    /// Construct a new [`AuthorizationCode`] flow.
    pub fn new<A: Into<String>, T: Into<String>>(authorization_url: A, token_url: T) -> Self {
        Self {
            authorization_url: authorization_url.into(),
            token_url: token_url.into(),
            ..Default::default()
        }
    }

    /// Add a scope.
    pub fn with_scope<N: Into<String>, D: Into<String>>(mut self, name: N, description: D) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }

    /// Set the refresh endpoint URL.
    pub fn with_refresh_url<S: Into<String>>(mut self, refresh_url: S) -> Self {
        set_value!(self refresh_url Some(refresh_url.into()))
    }
}

/// Map of security scheme names to the scopes required for execution.
///
/// Used at the document root and per operation; an empty scope list means
/// the scheme is required without scopes.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct SecurityRequirement {
    /// Required schemes with their scopes, in document order.
    pub schemes: IndexMap<String, Vec<String>>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl SecurityRequirement {
    /// Construct a new [`SecurityRequirement`] for one scheme.
    pub fn new<N, I, S>(name: N, scopes: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().and(name, scopes)
    }

    /// Add a scheme with its required scopes.
    pub fn and<N, I, S>(mut self, name: N, scopes: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes
            .insert(name.into(), scopes.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_type_matches_variant() {
        let scheme = SecurityScheme::ApiKey(ApiKey::new("api_key", ApiKeyIn::Header));
        assert_eq!(scheme.scheme_type(), "apiKey");

        let scheme = SecurityScheme::Http(Http::new("bearer").with_bearer_format("JWT"));
        assert_eq!(scheme.scheme_type(), "http");
    }

    #[test]
    fn requirement_preserves_scheme_order() {
        let requirement = SecurityRequirement::new("oauth", ["read", "write"]).and(
            "api_key",
            Vec::<String>::new(),
        );

        assert_eq!(
            requirement.schemes.keys().collect::<Vec<_>>(),
            vec!["oauth", "api_key"]
        );
        assert_eq!(requirement.schemes["oauth"], vec!["read", "write"]);
    }
}

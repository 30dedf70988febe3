//! In-memory object model for OpenAPI 3.0.3 documents.
//!
//! The crate maps JSON documents to a typed node tree and back. The tree is
//! plain owned data: parsing never resolves `$ref` indirections and writing
//! omits every field still holding its default value, so a parse→write
//! cycle reproduces the input document.
//!
//! Parse an existing document:
//!
//! ```
//! use openapi_model::OpenApi;
//! use serde_json::json;
//!
//! let api = OpenApi::from_value(&json!({
//!     "openapi": "3.0.3",
//!     "info": { "title": "Pets", "version": "1.0.0" },
//!     "paths": {}
//! }))?;
//! assert_eq!(api.info.title, "Pets");
//! # Ok::<(), openapi_model::Error>(())
//! ```
//!
//! Or build one programmatically and serialize it:
//!
//! ```
//! use openapi_model::{Info, OpenApi, Paths};
//!
//! let api = OpenApi::new(Info::new("Pets", "1.0.0"), Paths::new());
//! let json = api.to_pretty_json()?;
//! assert!(json.contains("\"openapi\": \"3.0.3\""));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde_json::Value;

macro_rules! build_fn {
    ( $vis:vis $name:ident $( $field:ident ),+ ) => {
        #[doc = concat!("Constructs a new [`", stringify!($name),"`] taking all fields values from this object.")]
        $vis fn build(self) -> $name {
            $name {
                $(
                    $field: self.$field,
                )*
            }
        }
    };
}
pub(crate) use build_fn;

macro_rules! set_value {
    ( $self:ident $field:ident $value:expr ) => {{
        $self.$field = $value;

        $self
    }};
}
pub(crate) use set_value;

macro_rules! new {
    ( $vis:vis $name:ident ) => {
        #[doc = concat!("Constructs a new [`", stringify!($name),"`].")]
        $vis fn new() -> $name {
            $name {
                ..Default::default()
            }
        }
    };
}
pub(crate) use new;

macro_rules! from {
    ( $name:ident $to:ident $( $field:ident ),+ ) => {
        impl From<$name> for $to {
            fn from(value: $name) -> Self {
                Self {
                    $( $field: value.$field, )*
                }
            }
        }

        impl From<$to> for $name {
            fn from(value: $to) -> Self {
                value.build()
            }
        }
    };
}
pub(crate) use from;

macro_rules! builder {
    ( $( #[$builder_meta:meta] )* $builder_name:ident; $(#[$meta:meta])* $vis:vis $key:ident $name:ident $( $tt:tt )* ) => {
        builder!( @type_impl $builder_name $( #[$meta] )* $vis $key $name $( $tt )* );
        builder!( @builder_impl $( #[$builder_meta] )* $builder_name $( #[$meta] )* $vis $key $name $( $tt )* );
    };

    ( @type_impl $builder_name:ident $( #[$meta:meta] )* $vis:vis $key:ident $name:ident
        { $( $( #[$field_meta:meta] )* $field_vis:vis $field:ident: $field_ty:ty, )* }
    ) => {
        $( #[$meta] )*
        $vis $key $name {
            $( $( #[$field_meta] )* $field_vis $field: $field_ty, )*
        }

        impl $name {
            #[doc = concat!("Construct a new ", stringify!($builder_name), ".")]
            #[doc = ""]
            #[doc = concat!("This is effectively same as calling [`", stringify!($builder_name), "::new`]")]
            $vis fn builder() -> $builder_name {
                $builder_name::new()
            }
        }
    };

    ( @builder_impl $( #[$builder_meta:meta] )* $builder_name:ident $( #[$meta:meta] )* $vis:vis $key:ident $name:ident
        { $( $( #[$field_meta:meta] )* $field_vis:vis $field:ident: $field_ty:ty, )* }
    ) => {
        #[doc = concat!("Builder for [`", stringify!($name),
            "`] with chainable configuration methods to create a new [`", stringify!($name) , "`].")]
        $( #[$builder_meta] )*
        #[derive(Debug)]
        $vis $key $builder_name {
            $( $field: $field_ty, )*
        }

        impl Default for $builder_name {
            fn default() -> Self {
                let meta_default: $name = $name::default();
                Self {
                    $( $field: meta_default.$field, )*
                }
            }
        }

        impl $builder_name {
            crate::new!($vis $builder_name);
            crate::build_fn!($vis $name $( $field ),* );
        }

        crate::from!($name $builder_name $( $field ),* );
    };
}
pub(crate) use builder;

pub mod content;
pub mod encoding;
pub mod error;
pub mod example;
pub mod extensions;
pub mod external_docs;
pub mod header;
pub mod info;
pub mod link;
pub mod path;
pub mod reader;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod tag;
pub mod writer;

pub use self::{
    content::{Content, ContentBuilder},
    encoding::Encoding,
    error::{Error, Result},
    example::{Example, ExampleBuilder},
    extensions::{Extensions, ExtensionsBuilder},
    external_docs::ExternalDocs,
    header::{Header, HeaderBuilder},
    info::{Contact, ContactBuilder, Info, InfoBuilder, License, LicenseBuilder, UNLICENSED},
    link::{Link, LinkBuilder},
    path::{
        Callback, HttpMethod, Operation, OperationBuilder, Parameter, ParameterIn, ParameterStyle,
        PathItem, PathItemBuilder, Paths, PathsBuilder,
    },
    reader::parse_document,
    request_body::{RequestBody, RequestBodyBuilder},
    response::{Response, ResponseBuilder, Responses, ResponsesBuilder},
    schema::{
        AdditionalProperties, AllOfSchema, AnyOfSchema, ArraySchema, BooleanSchema, Components,
        ComponentsBuilder, NotSchema, NumberSchema, ObjectSchema, OneOfSchema, Ref, RefOr, Schema,
        SchemaCommon, SchemaType, StringSchema,
    },
    security::{
        ApiKey, ApiKeyIn, AuthorizationCode, ClientCredentials, Http, Implicit, OAuth2, OAuthFlows,
        OpenIdConnect, Password, Scopes, SecurityRequirement, SecurityScheme,
    },
    server::{Server, ServerVariable},
    tag::Tag,
    writer::write_document,
};

/// The only document version this crate reads and writes.
pub const OPENAPI_VERSION: &str = "3.0.3";

builder! {
    OpenApiBuilder;

    /// Root of an OpenAPI 3.0.3 document.
    ///
    /// The `openapi` version tag is the crate constant [`OPENAPI_VERSION`]
    /// rather than a stored field.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct OpenApi {
        /// Metadata of the document.
        pub info: Info,

        /// Servers hosting the API.
        pub servers: Vec<Server>,

        /// Endpoint paths and their operations.
        pub paths: Paths,

        /// Reusable objects referenced via `$ref`.
        pub components: Components,

        /// Security requirement applying to every operation unless
        /// overridden.
        pub security: Option<SecurityRequirement>,

        /// Tags used to group operations, with metadata.
        pub tags: Vec<Tag>,

        /// External documentation of the API.
        pub external_docs: Option<ExternalDocs>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl OpenApi {
    /// Construct a new [`OpenApi`] with the required metadata and paths.
    pub fn new(info: Info, paths: Paths) -> Self {
        Self {
            info,
            paths,
            ..Default::default()
        }
    }

    /// Parse a document from its JSON form.
    pub fn from_value(value: &Value) -> Result<Self> {
        reader::parse_document(value)
    }

    /// Serialize the document to its JSON form.
    pub fn to_value(&self) -> Value {
        writer::write_document(self)
    }

    /// Serialize the document to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_value())
    }

    /// Serialize the document to a pretty-printed JSON string.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_value())
    }

    /// Serialize the document to a YAML string.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<String, serde_norway::Error> {
        serde_norway::to_string(&self.to_value())
    }

    /// Add a server, failing when one with the same URL exists. Returns
    /// the freshly added server for further configuration.
    pub fn add_server<S: Into<String>>(&mut self, url: S) -> Result<&mut Server> {
        let url = url.into();
        if self.servers.iter().any(|server| server.url() == url) {
            return Err(Error::Duplicate {
                kind: "server",
                key: url,
            });
        }
        let index = self.servers.len();
        self.servers.push(Server::new(url));
        Ok(&mut self.servers[index])
    }

    /// Remove the server with the given URL.
    pub fn remove_server(&mut self, url: &str) -> Option<Server> {
        let index = self.servers.iter().position(|server| server.url() == url)?;
        Some(self.servers.remove(index))
    }

    /// Remove all servers.
    pub fn clear_servers(&mut self) {
        self.servers.clear();
    }

    /// Add a tag, failing when one with the same name exists. Returns the
    /// freshly added tag for further configuration.
    pub fn add_tag<S: Into<String>>(&mut self, name: S) -> Result<&mut Tag> {
        let name = name.into();
        if self.tags.iter().any(|tag| tag.name == name) {
            return Err(Error::Duplicate {
                kind: "tag",
                key: name,
            });
        }
        let index = self.tags.len();
        self.tags.push(Tag::new(name));
        Ok(&mut self.tags[index])
    }

    /// Remove the tag with the given name.
    pub fn remove_tag(&mut self, name: &str) -> Option<Tag> {
        let index = self.tags.iter().position(|tag| tag.name == name)?;
        Some(self.tags.remove(index))
    }

    /// Remove all tags.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Add an empty path item, failing when the path already exists.
    pub fn add_path_item<S: Into<String>>(&mut self, path: S) -> Result<&mut PathItem> {
        self.paths.add_path_item(path)
    }
}

impl OpenApiBuilder {
    /// Set the metadata of the document.
    pub fn info<I: Into<Info>>(mut self, info: I) -> Self {
        set_value!(self info info.into())
    }

    /// Add a server hosting the API.
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Set the endpoint paths of the document.
    pub fn paths<P: Into<Paths>>(mut self, paths: P) -> Self {
        set_value!(self paths paths.into())
    }

    /// Set the reusable components of the document.
    pub fn components<C: Into<Components>>(mut self, components: C) -> Self {
        set_value!(self components components.into())
    }

    /// Set the document-wide security requirement.
    pub fn security(mut self, security: Option<SecurityRequirement>) -> Self {
        set_value!(self security security)
    }

    /// Add a tag with metadata.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Set the external documentation of the API.
    pub fn external_docs(mut self, external_docs: Option<ExternalDocs>) -> Self {
        set_value!(self external_docs external_docs)
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_server_rejects_duplicate_url() {
        let mut api = OpenApi::new(Info::new("Pets", "1.0.0"), Paths::new());
        api.add_server("https://api.example.com").unwrap();

        let err = api.add_server("https://api.example.com").unwrap_err();
        assert!(matches!(err, Error::Duplicate { kind: "server", .. }));
        assert_eq!(api.servers.len(), 1);
    }

    #[test]
    fn add_tag_rejects_duplicate_name() {
        let mut api = OpenApi::new(Info::new("Pets", "1.0.0"), Paths::new());
        api.add_tag("pets").unwrap().description = Some("Pet operations".to_string());

        let err = api.add_tag("pets").unwrap_err();
        assert!(matches!(err, Error::Duplicate { kind: "tag", .. }));
        assert_eq!(api.tags[0].description.as_deref(), Some("Pet operations"));
    }

    #[test]
    fn builder_round_trips_through_type() {
        let api = OpenApiBuilder::new()
            .info(Info::new("Pets", "1.0.0"))
            .server(Server::new("https://api.example.com"))
            .build();

        let builder: OpenApiBuilder = api.into();
        let api = builder.build();
        assert_eq!(api.servers[0].url(), "https://api.example.com");
    }
}

//! [`Paths`], [`PathItem`], [`Operation`] and [`Parameter`].

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    Content, Error, Example, Extensions, ExternalDocs, RefOr, RequestBody, Responses, Result,
    Schema, SecurityRequirement, Server,
};

builder! {
    PathsBuilder;

    /// Relative endpoint paths and their operations, in document order.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Paths {
        /// Path items keyed by the path template, e.g. `/pets/{id}`.
        pub paths: IndexMap<String, PathItem>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Paths {
    crate::new!(pub Paths);

    /// Add an empty path item for a path, failing when the path already
    /// exists. Returns the freshly inserted item for population.
    pub fn add_path_item<S: Into<String>>(&mut self, path: S) -> Result<&mut PathItem> {
        let path = path.into();
        if self.paths.contains_key(&path) {
            return Err(Error::Duplicate {
                kind: "path",
                key: path,
            });
        }
        Ok(self.paths.entry(path).or_default())
    }

    /// Look up the path item for a path.
    pub fn get_path_item(&self, path: &str) -> Option<&PathItem> {
        self.paths.get(path)
    }

    /// Look up an operation by path and method.
    pub fn get_path_operation(&self, path: &str, method: HttpMethod) -> Option<&Operation> {
        self.paths.get(path).and_then(|item| item.operation(method))
    }

    /// Remove the path item for a path.
    pub fn remove_path_item(&mut self, path: &str) -> Option<PathItem> {
        self.paths.shift_remove(path)
    }

    /// Remove all path items.
    pub fn clear_paths(&mut self) {
        self.paths.clear();
    }
}

impl PathsBuilder {
    /// Add a path item for a path, replacing any existing entry.
    pub fn path<S: Into<String>>(mut self, path: S, item: PathItem) -> Self {
        self.paths.insert(path.into(), item);
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

/// HTTP methods an operation can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// All methods, in the order path items are written.
    pub const ALL: [HttpMethod; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
        Self::Trace,
    ];

    /// The lowercase key of the method in a path item.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }

    pub(crate) fn from_str(value: &str) -> Option<Self> {
        match value {
            "get" => Some(Self::Get),
            "put" => Some(Self::Put),
            "post" => Some(Self::Post),
            "delete" => Some(Self::Delete),
            "options" => Some(Self::Options),
            "head" => Some(Self::Head),
            "patch" => Some(Self::Patch),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

builder! {
    PathItemBuilder;

    /// Operations available on a single path, one slot per HTTP method.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct PathItem {
        /// Short summary applying to all operations of the path.
        pub summary: Option<String>,

        /// Description applying to all operations of the path.
        pub description: Option<String>,

        /// `GET` operation.
        pub get: Option<Operation>,

        /// `PUT` operation.
        pub put: Option<Operation>,

        /// `POST` operation.
        pub post: Option<Operation>,

        /// `DELETE` operation.
        pub delete: Option<Operation>,

        /// `OPTIONS` operation.
        pub options: Option<Operation>,

        /// `HEAD` operation.
        pub head: Option<Operation>,

        /// `PATCH` operation.
        pub patch: Option<Operation>,

        /// `TRACE` operation.
        pub trace: Option<Operation>,

        /// Servers overriding the document servers for this path.
        pub servers: Vec<Server>,

        /// Parameters shared by all operations of the path.
        pub parameters: Vec<RefOr<Parameter>>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl PathItem {
    /// Construct a new [`PathItem`] holding one operation.
    pub fn new(method: HttpMethod, operation: Operation) -> Self {
        let mut item = Self::default();
        *item.slot_mut(method) = Some(operation);
        item
    }

    fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// The operation attached to a method, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Mutable access to the operation attached to a method.
    pub fn operation_mut(&mut self, method: HttpMethod) -> Option<&mut Operation> {
        self.slot_mut(method).as_mut()
    }

    /// Attach an operation to a method, failing when the slot is taken.
    pub fn add_operation(&mut self, method: HttpMethod, operation: Operation) -> Result<()> {
        let slot = self.slot_mut(method);
        if slot.is_some() {
            return Err(Error::Duplicate {
                kind: "operation",
                key: method.as_str().to_string(),
            });
        }
        *slot = Some(operation);
        Ok(())
    }

    /// Detach the operation of a method.
    pub fn remove_operation(&mut self, method: HttpMethod) -> Option<Operation> {
        self.slot_mut(method).take()
    }

    /// Detach the operations of all methods.
    pub fn clear_operations(&mut self) {
        for method in HttpMethod::ALL {
            *self.slot_mut(method) = None;
        }
    }
}

impl PathItemBuilder {
    /// Attach an operation to a method, replacing any existing one.
    pub fn operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        *self.slot_for(method) = Some(operation);
        self
    }

    fn slot_for(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// Set the summary of the path.
    pub fn summary<S: Into<String>>(mut self, summary: Option<S>) -> Self {
        set_value!(self summary summary.map(Into::into))
    }

    /// Set the description of the path.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Add a parameter shared by all operations of the path.
    pub fn parameter<P: Into<RefOr<Parameter>>>(mut self, parameter: P) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Add a server overriding the document servers for this path.
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

builder! {
    OperationBuilder;

    /// A single API operation on a path.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Operation {
        /// Tags grouping the operation in documentation.
        pub tags: Vec<String>,

        /// Short summary of what the operation does.
        pub summary: Option<String>,

        /// Verbose explanation of the operation.
        pub description: Option<String>,

        /// External documentation for the operation.
        pub external_docs: Option<ExternalDocs>,

        /// Unique identifier of the operation within the document.
        pub operation_id: Option<String>,

        /// Parameters of the operation.
        pub parameters: Vec<RefOr<Parameter>>,

        /// Request body of the operation.
        pub request_body: Option<RefOr<RequestBody>>,

        /// Possible responses of the operation.
        pub responses: Responses,

        /// Out-of-band callbacks keyed by a caller-chosen name.
        pub callbacks: IndexMap<String, RefOr<Callback>>,

        /// Whether the operation is deprecated.
        pub deprecated: bool,

        /// Security requirement overriding the document one.
        pub security: Option<SecurityRequirement>,

        /// Servers overriding the path and document servers.
        pub servers: Vec<Server>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Operation {
    crate::new!(pub Operation);

    /// Add a tag to the operation.
    pub fn add_tag<S: Into<String>>(&mut self, tag: S) {
        self.tags.push(tag.into());
    }

    /// Add a parameter to the operation.
    pub fn add_parameter<P: Into<RefOr<Parameter>>>(&mut self, parameter: P) {
        self.parameters.push(parameter.into());
    }
}

impl OperationBuilder {
    /// Add a tag to the operation.
    pub fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the summary of the operation.
    pub fn summary<S: Into<String>>(mut self, summary: Option<S>) -> Self {
        set_value!(self summary summary.map(Into::into))
    }

    /// Set the description of the operation.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Set the unique identifier of the operation.
    pub fn operation_id<S: Into<String>>(mut self, operation_id: Option<S>) -> Self {
        set_value!(self operation_id operation_id.map(Into::into))
    }

    /// Add a parameter to the operation.
    pub fn parameter<P: Into<RefOr<Parameter>>>(mut self, parameter: P) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Set the request body of the operation.
    pub fn request_body<B: Into<RefOr<RequestBody>>>(mut self, request_body: Option<B>) -> Self {
        set_value!(self request_body request_body.map(Into::into))
    }

    /// Set the possible responses of the operation.
    pub fn responses<R: Into<Responses>>(mut self, responses: R) -> Self {
        set_value!(self responses responses.into())
    }

    /// Add a response for a status code, replacing any existing entry.
    pub fn response<C: Into<String>, R: Into<RefOr<crate::Response>>>(
        mut self,
        code: C,
        response: R,
    ) -> Self {
        self.responses.codes.insert(code.into(), response.into());
        self
    }

    /// Add an out-of-band callback.
    pub fn callback<N: Into<String>, C: Into<RefOr<Callback>>>(
        mut self,
        name: N,
        callback: C,
    ) -> Self {
        self.callbacks.insert(name.into(), callback.into());
        self
    }

    /// Mark the operation as deprecated.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        set_value!(self deprecated deprecated)
    }

    /// Set the security requirement of the operation.
    pub fn security(mut self, security: Option<SecurityRequirement>) -> Self {
        set_value!(self security security)
    }

    /// Add a server overriding the path and document servers.
    pub fn server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

/// Out-of-band requests related to an operation, keyed by a runtime
/// expression for the callback URL.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Callback {
    /// Path items keyed by the callback URL expression.
    pub paths: IndexMap<String, PathItem>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Callback {
    crate::new!(pub Callback);

    /// Add a path item for a callback URL expression.
    pub fn add_path<S: Into<String>>(&mut self, expression: S, item: PathItem) {
        self.paths.insert(expression.into(), item);
    }
}

/// Location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterIn {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }

    pub(crate) fn from_str(value: &str) -> Option<Self> {
        match value {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }

    /// The serialization style used when none is given.
    pub fn default_style(&self) -> ParameterStyle {
        match self {
            Self::Path | Self::Header => ParameterStyle::Simple,
            Self::Query | Self::Cookie => ParameterStyle::Form,
        }
    }
}

/// Serialization style of a parameter, header or encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterStyle {
    Matrix,
    Label,
    Form,
    Simple,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

impl ParameterStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Label => "label",
            Self::Form => "form",
            Self::Simple => "simple",
            Self::SpaceDelimited => "spaceDelimited",
            Self::PipeDelimited => "pipeDelimited",
            Self::DeepObject => "deepObject",
        }
    }

    pub(crate) fn from_str(value: &str) -> Option<Self> {
        match value {
            "matrix" => Some(Self::Matrix),
            "label" => Some(Self::Label),
            "form" => Some(Self::Form),
            "simple" => Some(Self::Simple),
            "spaceDelimited" => Some(Self::SpaceDelimited),
            "pipeDelimited" => Some(Self::PipeDelimited),
            "deepObject" => Some(Self::DeepObject),
            _ => None,
        }
    }

    /// Whether array and object values expand into separate entries when
    /// the document gives no `explode` flag.
    pub fn default_explode(&self) -> bool {
        matches!(self, Self::Form)
    }
}

/// A single operation parameter.
///
/// `name` and the location are fixed at construction since the location
/// decides the defaults of `style`, `explode` and `required`. Path
/// parameters are always required.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Parameter {
    name: String,
    parameter_in: ParameterIn,

    /// Description of the parameter.
    pub description: Option<String>,

    /// Whether the parameter is mandatory. Always `true` for path
    /// parameters.
    pub required: bool,

    /// Whether the parameter is deprecated.
    pub deprecated: bool,

    /// Whether an empty value is allowed; only meaningful in queries.
    pub allow_empty_value: bool,

    /// Serialization style of the parameter value.
    pub style: ParameterStyle,

    /// Whether array/object values expand into separate entries.
    pub explode: bool,

    /// Whether reserved URI characters pass through unescaped; only
    /// meaningful in queries with `form` style.
    pub allow_reserved: bool,

    /// Schema of the parameter value.
    pub schema: Option<RefOr<Schema>>,

    /// Single literal example of the parameter value.
    pub example: Option<Value>,

    /// Named examples of the parameter value.
    pub examples: IndexMap<String, RefOr<Example>>,

    /// Media type map used instead of `schema` for complex values.
    pub content: IndexMap<String, Content>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Parameter {
    /// Construct a new [`Parameter`] with the per-location defaults for
    /// `style`, `explode` and `required`.
    pub fn new<S: Into<String>>(parameter_in: ParameterIn, name: S) -> Self {
        let style = parameter_in.default_style();
        Self {
            name: name.into(),
            parameter_in,
            description: None,
            required: matches!(parameter_in, ParameterIn::Path),
            deprecated: false,
            allow_empty_value: false,
            style,
            explode: style.default_explode(),
            allow_reserved: false,
            schema: None,
            example: None,
            examples: IndexMap::new(),
            content: IndexMap::new(),
            extensions: Extensions::default(),
        }
    }

    /// Construct a path parameter.
    pub fn path<S: Into<String>>(name: S) -> Self {
        Self::new(ParameterIn::Path, name)
    }

    /// Construct a query parameter.
    pub fn query<S: Into<String>>(name: S) -> Self {
        Self::new(ParameterIn::Query, name)
    }

    /// Construct a header parameter.
    pub fn header<S: Into<String>>(name: S) -> Self {
        Self::new(ParameterIn::Header, name)
    }

    /// Construct a cookie parameter.
    pub fn cookie<S: Into<String>>(name: S) -> Self {
        Self::new(ParameterIn::Cookie, name)
    }

    /// Name of the parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the parameter.
    pub fn parameter_in(&self) -> ParameterIn {
        self.parameter_in
    }

    /// Add a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        set_value!(self description Some(description.into()))
    }

    /// Mark the parameter as mandatory. Ignored for path parameters,
    /// which stay required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required || matches!(self.parameter_in, ParameterIn::Path);
        self
    }

    /// Mark the parameter as deprecated.
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        set_value!(self deprecated deprecated)
    }

    /// Set the serialization style. Resets `explode` to the style default.
    pub fn with_style(mut self, style: ParameterStyle) -> Self {
        self.style = style;
        self.explode = style.default_explode();
        self
    }

    /// Set the explode flag.
    pub fn with_explode(mut self, explode: bool) -> Self {
        set_value!(self explode explode)
    }

    /// Allow reserved URI characters to pass through unescaped.
    pub fn with_allow_reserved(mut self, allow_reserved: bool) -> Self {
        set_value!(self allow_reserved allow_reserved)
    }

    /// Set the schema of the parameter value.
    pub fn with_schema<S: Into<RefOr<Schema>>>(mut self, schema: S) -> Self {
        set_value!(self schema Some(schema.into()))
    }

    /// Set the single literal example of the parameter value.
    pub fn with_example(mut self, example: Value) -> Self {
        set_value!(self example Some(example))
    }

    /// Add a named example of the parameter value.
    pub fn with_named_example<N: Into<String>, E: Into<RefOr<Example>>>(
        mut self,
        name: N,
        example: E,
    ) -> Self {
        self.examples.insert(name.into(), example.into());
        self
    }

    /// Add a payload description for a media type, used instead of a
    /// schema.
    pub fn with_content<S: Into<String>>(mut self, media_type: S, content: Content) -> Self {
        self.content.insert(media_type.into(), content);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_defaults_follow_location() {
        let path = Parameter::path("id");
        assert!(path.required);
        assert_eq!(path.style, ParameterStyle::Simple);
        assert!(!path.explode);

        let query = Parameter::query("limit");
        assert!(!query.required);
        assert_eq!(query.style, ParameterStyle::Form);
        assert!(query.explode);

        let header = Parameter::header("X-Trace");
        assert!(!header.required);
        assert_eq!(header.style, ParameterStyle::Simple);
        assert!(!header.explode);

        let cookie = Parameter::cookie("session");
        assert_eq!(cookie.style, ParameterStyle::Form);
        assert!(cookie.explode);
    }

    #[test]
    fn path_parameter_stays_required() {
        let parameter = Parameter::path("id").with_required(false);
        assert!(parameter.required);
    }

    #[test]
    fn with_style_resets_explode() {
        let parameter = Parameter::query("tags").with_style(ParameterStyle::PipeDelimited);
        assert!(!parameter.explode);
    }

    #[test]
    fn add_operation_rejects_taken_slot() {
        let mut item = PathItem::new(HttpMethod::Get, Operation::new());
        let err = item
            .add_operation(HttpMethod::Get, Operation::new())
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate { kind: "operation", .. }));

        item.add_operation(HttpMethod::Post, Operation::new()).unwrap();
        assert!(item.post.is_some());
    }

    #[test]
    fn add_path_item_rejects_duplicate_path() {
        let mut paths = Paths::new();
        paths.add_path_item("/pets").unwrap();
        let err = paths.add_path_item("/pets").unwrap_err();
        assert!(matches!(err, Error::Duplicate { kind: "path", .. }));
    }
}

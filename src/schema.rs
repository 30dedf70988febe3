//! The schema type family, reference indirection and the [`Components`]
//! container.
//!
//! [`Schema`] is a closed tagged union: the variant chosen at construction
//! is the `type` discriminant of the JSON form and never changes afterwards.
//! Composition keywords (`allOf`, `anyOf`, `oneOf`, `not`) take precedence
//! over a literal `type` when the reader picks a variant.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    Callback, Example, Extensions, Header, Link, Parameter, RequestBody, Response, SecurityScheme,
};

/// Discriminant of a [`Schema`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Boolean,
    Object,
    Array,
    Integer,
    Number,
    String,
    AllOf,
    AnyOf,
    OneOf,
    Not,
}

impl SchemaType {
    /// The `type` string written to JSON for primitive variants; the
    /// composition variants have no `type` key and are named after their
    /// keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
            Self::Not => "not",
        }
    }
}

/// Fields shared by every schema variant.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct SchemaCommon {
    /// Title of the schema.
    pub title: Option<String>,

    /// Description of the schema.
    pub description: Option<String>,

    /// Format qualifier, e.g. `int64` or `date-time`. Kept as a free
    /// string so unknown formats survive a round trip.
    pub format: Option<String>,

    /// Whether `null` is an allowed value.
    pub nullable: bool,

    /// Default value of instances.
    pub default: Option<Value>,

    /// Example value.
    pub example: Option<Value>,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

/// A schema node; the variant is immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Boolean(BooleanSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Integer(NumberSchema),
    Number(NumberSchema),
    String(StringSchema),
    AllOf(AllOfSchema),
    AnyOf(AnyOfSchema),
    OneOf(OneOfSchema),
    Not(NotSchema),
}

impl Schema {
    /// The discriminant of this schema.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Self::Boolean(_) => SchemaType::Boolean,
            Self::Object(_) => SchemaType::Object,
            Self::Array(_) => SchemaType::Array,
            Self::Integer(_) => SchemaType::Integer,
            Self::Number(_) => SchemaType::Number,
            Self::String(_) => SchemaType::String,
            Self::AllOf(_) => SchemaType::AllOf,
            Self::AnyOf(_) => SchemaType::AnyOf,
            Self::OneOf(_) => SchemaType::OneOf,
            Self::Not(_) => SchemaType::Not,
        }
    }

    /// Fields shared by all variants.
    pub fn common(&self) -> &SchemaCommon {
        match self {
            Self::Boolean(schema) => &schema.common,
            Self::Object(schema) => &schema.common,
            Self::Array(schema) => &schema.common,
            Self::Integer(schema) | Self::Number(schema) => &schema.common,
            Self::String(schema) => &schema.common,
            Self::AllOf(schema) => &schema.common,
            Self::AnyOf(schema) => &schema.common,
            Self::OneOf(schema) => &schema.common,
            Self::Not(schema) => &schema.common,
        }
    }

    /// Mutable access to the fields shared by all variants.
    pub fn common_mut(&mut self) -> &mut SchemaCommon {
        match self {
            Self::Boolean(schema) => &mut schema.common,
            Self::Object(schema) => &mut schema.common,
            Self::Array(schema) => &mut schema.common,
            Self::Integer(schema) | Self::Number(schema) => &mut schema.common,
            Self::String(schema) => &mut schema.common,
            Self::AllOf(schema) => &mut schema.common,
            Self::AnyOf(schema) => &mut schema.common,
            Self::OneOf(schema) => &mut schema.common,
            Self::Not(schema) => &mut schema.common,
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::Object(ObjectSchema::default())
    }
}

/// `type: boolean` schema.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct BooleanSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Allowed values; empty means unrestricted.
    pub enum_values: Vec<bool>,
}

impl BooleanSchema {
    crate::new!(pub BooleanSchema);
}

/// `type: number` or `type: integer` schema; the enclosing [`Schema`]
/// variant decides which of the two is written.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct NumberSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Lower bound of allowed values.
    pub minimum: Option<f64>,

    /// Upper bound of allowed values.
    pub maximum: Option<f64>,

    /// Whether the lower bound itself is excluded.
    pub exclusive_minimum: bool,

    /// Whether the upper bound itself is excluded.
    pub exclusive_maximum: bool,

    /// Allowed values must be integer multiples of this.
    pub multiple_of: Option<f64>,

    /// Allowed values; empty means unrestricted.
    pub enum_values: Vec<f64>,
}

impl NumberSchema {
    crate::new!(pub NumberSchema);

    /// Set the inclusive bounds of allowed values.
    pub fn with_range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }
}

/// `type: string` schema.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct StringSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Minimum length of allowed values.
    pub min_length: Option<u64>,

    /// Maximum length of allowed values.
    pub max_length: Option<u64>,

    /// Regular expression allowed values must match.
    pub pattern: Option<String>,

    /// Allowed values; empty means unrestricted.
    pub enum_values: Vec<String>,
}

impl StringSchema {
    crate::new!(pub StringSchema);

    /// Restrict allowed values to the given set.
    pub fn with_enum_values<I, S>(mut self, enum_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        set_value!(self enum_values enum_values.into_iter().map(Into::into).collect())
    }
}

/// `type: array` schema.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ArraySchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Schema of the array items.
    pub items: Box<RefOr<Schema>>,
}

impl ArraySchema {
    /// Construct a new [`ArraySchema`] with the given item schema.
    pub fn new<I: Into<RefOr<Schema>>>(items: I) -> Self {
        Self {
            common: SchemaCommon::default(),
            items: Box::new(items.into()),
        }
    }
}

impl Default for ArraySchema {
    fn default() -> Self {
        Self::new(ObjectSchema::default())
    }
}

/// `type: object` schema.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct ObjectSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Names of required properties.
    pub required: Vec<String>,

    /// Property schemas in document order.
    pub properties: IndexMap<String, RefOr<Schema>>,

    /// Constraint on properties not listed in `properties`. `None` is
    /// permissive; an explicit `additionalProperties: true` is canonicalized
    /// to `None` on parse.
    pub additional_properties: Option<AdditionalProperties>,
}

impl ObjectSchema {
    crate::new!(pub ObjectSchema);

    /// Add a property schema.
    pub fn property<N: Into<String>, S: Into<RefOr<Schema>>>(mut self, name: N, schema: S) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    /// Mark a property as required.
    pub fn required_property<N: Into<String>>(mut self, name: N) -> Self {
        self.required.push(name.into());
        self
    }
}

/// Constraint on object properties not listed in `properties`.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    /// `false` forbids extra properties; `true` never occurs after parsing
    /// (it is canonicalized away) but may be constructed programmatically.
    FreeForm(bool),

    /// Extra properties must match this schema.
    Schema(Box<RefOr<Schema>>),
}

/// `allOf` composition schema.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct AllOfSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Subschemas an instance must all match.
    pub items: Vec<RefOr<Schema>>,
}

impl AllOfSchema {
    crate::new!(pub AllOfSchema);

    /// Add a subschema.
    pub fn item<I: Into<RefOr<Schema>>>(mut self, item: I) -> Self {
        self.items.push(item.into());
        self
    }
}

/// `anyOf` composition schema.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct AnyOfSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Subschemas an instance must match at least one of.
    pub items: Vec<RefOr<Schema>>,
}

impl AnyOfSchema {
    crate::new!(pub AnyOfSchema);

    /// Add a subschema.
    pub fn item<I: Into<RefOr<Schema>>>(mut self, item: I) -> Self {
        self.items.push(item.into());
        self
    }
}

/// `oneOf` composition schema.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct OneOfSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Subschemas an instance must match exactly one of.
    pub items: Vec<RefOr<Schema>>,
}

impl OneOfSchema {
    crate::new!(pub OneOfSchema);

    /// Add a subschema.
    pub fn item<I: Into<RefOr<Schema>>>(mut self, item: I) -> Self {
        self.items.push(item.into());
        self
    }
}

/// `not` composition schema.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct NotSchema {
    /// Fields shared by all variants.
    pub common: SchemaCommon,

    /// Subschema an instance must not match.
    pub schema: Box<RefOr<Schema>>,
}

impl NotSchema {
    /// Construct a new [`NotSchema`] negating the given schema.
    pub fn new<S: Into<RefOr<Schema>>>(schema: S) -> Self {
        Self {
            common: SchemaCommon::default(),
            schema: Box::new(schema.into()),
        }
    }
}

macro_rules! schema_from {
    ( $( $variant:ident => $ty:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Schema {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for RefOr<Schema> {
                fn from(value: $ty) -> Self {
                    Self::T(Schema::$variant(value))
                }
            }
        )*
    };
}

// NumberSchema is shared by two variants and so has no From impl; wrap it
// in Schema::Integer or Schema::Number explicitly.
schema_from! {
    Boolean => BooleanSchema,
    Object => ObjectSchema,
    Array => ArraySchema,
    String => StringSchema,
    AllOf => AllOfSchema,
    AnyOf => AnyOfSchema,
    OneOf => OneOfSchema,
    Not => NotSchema,
}

/// A `$ref` indirection node.
///
/// Recognized structurally: any JSON object carrying a `$ref` key parses as
/// a [`Ref`] wherever a [`RefOr`] slot is expected, with all sibling keys
/// except extension fields discarded. The crate stores the location string
/// only and never resolves it.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Ref {
    /// Location of the referenced object, e.g.
    /// `#/components/schemas/Pet`.
    pub ref_location: String,

    /// Additional `x-` prefixed fields.
    pub extensions: Extensions,
}

impl Ref {
    /// Construct a new [`Ref`] from a location string.
    pub fn new<S: Into<String>>(ref_location: S) -> Self {
        Self {
            ref_location: ref_location.into(),
            ..Default::default()
        }
    }

    /// Construct a [`Ref`] pointing to `#/components/schemas/{name}`.
    pub fn from_schema_name<S: Into<String>>(name: S) -> Self {
        Self::new(format!("#/components/schemas/{}", name.into()))
    }

    /// Construct a [`Ref`] pointing to `#/components/responses/{name}`.
    pub fn from_response_name<S: Into<String>>(name: S) -> Self {
        Self::new(format!("#/components/responses/{}", name.into()))
    }
}

/// Either an inline node or a [`Ref`] to one.
#[derive(Debug, Clone, PartialEq)]
pub enum RefOr<T> {
    /// A reference to an object defined elsewhere.
    Ref(Ref),
    /// An inline object.
    T(T),
}

impl<T> From<T> for RefOr<T> {
    fn from(value: T) -> Self {
        Self::T(value)
    }
}

impl From<Ref> for RefOr<Schema> {
    fn from(value: Ref) -> Self {
        Self::Ref(value)
    }
}

builder! {
    ComponentsBuilder;

    /// Reusable objects of the document, referenced via `$ref`.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Components {
        /// Reusable schemas.
        pub schemas: IndexMap<String, RefOr<Schema>>,

        /// Reusable responses.
        pub responses: IndexMap<String, RefOr<Response>>,

        /// Reusable parameters.
        pub parameters: IndexMap<String, RefOr<Parameter>>,

        /// Reusable examples.
        pub examples: IndexMap<String, RefOr<Example>>,

        /// Reusable request bodies.
        pub request_bodies: IndexMap<String, RefOr<RequestBody>>,

        /// Reusable headers.
        pub headers: IndexMap<String, RefOr<Header>>,

        /// Reusable security schemes.
        pub security_schemes: IndexMap<String, RefOr<SecurityScheme>>,

        /// Reusable links.
        pub links: IndexMap<String, RefOr<Link>>,

        /// Reusable callbacks.
        pub callbacks: IndexMap<String, RefOr<Callback>>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Components {
    crate::new!(pub Components);

    /// Whether the container holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.responses.is_empty()
            && self.parameters.is_empty()
            && self.examples.is_empty()
            && self.request_bodies.is_empty()
            && self.headers.is_empty()
            && self.security_schemes.is_empty()
            && self.links.is_empty()
            && self.callbacks.is_empty()
            && self.extensions.is_empty()
    }

    /// Add a reusable schema.
    pub fn add_schema<N: Into<String>, S: Into<RefOr<Schema>>>(&mut self, name: N, schema: S) {
        self.schemas.insert(name.into(), schema.into());
    }

    /// Remove a reusable schema.
    pub fn remove_schema(&mut self, name: &str) -> Option<RefOr<Schema>> {
        self.schemas.shift_remove(name)
    }

    /// Remove all reusable schemas.
    pub fn clear_schemas(&mut self) {
        self.schemas.clear();
    }

    /// Add a reusable response.
    pub fn add_response<N: Into<String>, R: Into<RefOr<Response>>>(&mut self, name: N, response: R) {
        self.responses.insert(name.into(), response.into());
    }

    /// Remove a reusable response.
    pub fn remove_response(&mut self, name: &str) -> Option<RefOr<Response>> {
        self.responses.shift_remove(name)
    }

    /// Remove all reusable responses.
    pub fn clear_responses(&mut self) {
        self.responses.clear();
    }

    /// Add a reusable parameter.
    pub fn add_parameter<N: Into<String>, P: Into<RefOr<Parameter>>>(
        &mut self,
        name: N,
        parameter: P,
    ) {
        self.parameters.insert(name.into(), parameter.into());
    }

    /// Remove a reusable parameter.
    pub fn remove_parameter(&mut self, name: &str) -> Option<RefOr<Parameter>> {
        self.parameters.shift_remove(name)
    }

    /// Remove all reusable parameters.
    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }

    /// Add a reusable example.
    pub fn add_example<N: Into<String>, E: Into<RefOr<Example>>>(&mut self, name: N, example: E) {
        self.examples.insert(name.into(), example.into());
    }

    /// Remove a reusable example.
    pub fn remove_example(&mut self, name: &str) -> Option<RefOr<Example>> {
        self.examples.shift_remove(name)
    }

    /// Remove all reusable examples.
    pub fn clear_examples(&mut self) {
        self.examples.clear();
    }

    /// Add a reusable request body.
    pub fn add_request_body<N: Into<String>, B: Into<RefOr<RequestBody>>>(
        &mut self,
        name: N,
        request_body: B,
    ) {
        self.request_bodies.insert(name.into(), request_body.into());
    }

    /// Remove a reusable request body.
    pub fn remove_request_body(&mut self, name: &str) -> Option<RefOr<RequestBody>> {
        self.request_bodies.shift_remove(name)
    }

    /// Remove all reusable request bodies.
    pub fn clear_request_bodies(&mut self) {
        self.request_bodies.clear();
    }

    /// Add a reusable header.
    pub fn add_header<N: Into<String>, H: Into<RefOr<Header>>>(&mut self, name: N, header: H) {
        self.headers.insert(name.into(), header.into());
    }

    /// Remove a reusable header.
    pub fn remove_header(&mut self, name: &str) -> Option<RefOr<Header>> {
        self.headers.shift_remove(name)
    }

    /// Remove all reusable headers.
    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    /// Add a reusable security scheme.
    pub fn add_security_scheme<N: Into<String>, S: Into<RefOr<SecurityScheme>>>(
        &mut self,
        name: N,
        scheme: S,
    ) {
        self.security_schemes.insert(name.into(), scheme.into());
    }

    /// Remove a reusable security scheme.
    pub fn remove_security_scheme(&mut self, name: &str) -> Option<RefOr<SecurityScheme>> {
        self.security_schemes.shift_remove(name)
    }

    /// Remove all reusable security schemes.
    pub fn clear_security_schemes(&mut self) {
        self.security_schemes.clear();
    }

    /// Add a reusable link.
    pub fn add_link<N: Into<String>, L: Into<RefOr<Link>>>(&mut self, name: N, link: L) {
        self.links.insert(name.into(), link.into());
    }

    /// Remove a reusable link.
    pub fn remove_link(&mut self, name: &str) -> Option<RefOr<Link>> {
        self.links.shift_remove(name)
    }

    /// Remove all reusable links.
    pub fn clear_links(&mut self) {
        self.links.clear();
    }

    /// Add a reusable callback.
    pub fn add_callback<N: Into<String>, C: Into<RefOr<Callback>>>(&mut self, name: N, callback: C) {
        self.callbacks.insert(name.into(), callback.into());
    }

    /// Remove a reusable callback.
    pub fn remove_callback(&mut self, name: &str) -> Option<RefOr<Callback>> {
        self.callbacks.shift_remove(name)
    }

    /// Remove all reusable callbacks.
    pub fn clear_callbacks(&mut self) {
        self.callbacks.clear();
    }
}

impl ComponentsBuilder {
    /// Add a reusable schema.
    pub fn schema<N: Into<String>, S: Into<RefOr<Schema>>>(mut self, name: N, schema: S) -> Self {
        self.schemas.insert(name.into(), schema.into());
        self
    }

    /// Add a reusable response.
    pub fn response<N: Into<String>, R: Into<RefOr<Response>>>(mut self, name: N, response: R) -> Self {
        self.responses.insert(name.into(), response.into());
        self
    }

    /// Add a reusable parameter.
    pub fn parameter<N: Into<String>, P: Into<RefOr<Parameter>>>(mut self, name: N, parameter: P) -> Self {
        self.parameters.insert(name.into(), parameter.into());
        self
    }

    /// Add a reusable security scheme.
    pub fn security_scheme<N: Into<String>, S: Into<RefOr<SecurityScheme>>>(
        mut self,
        name: N,
        scheme: S,
    ) -> Self {
        self.security_schemes.insert(name.into(), scheme.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_type_tracks_variant() {
        let schema: Schema = ObjectSchema::new().into();
        assert_eq!(schema.schema_type(), SchemaType::Object);

        let schema = Schema::Integer(NumberSchema::new());
        assert_eq!(schema.schema_type(), SchemaType::Integer);

        let schema: Schema = NotSchema::new(StringSchema::new()).into();
        assert_eq!(schema.schema_type(), SchemaType::Not);
    }

    #[test]
    fn ref_from_schema_name() {
        assert_eq!(
            Ref::from_schema_name("Pet").ref_location,
            "#/components/schemas/Pet"
        );
    }

    #[test]
    fn components_is_empty_tracks_all_maps() {
        let mut components = Components::new();
        assert!(components.is_empty());

        components.add_schema("Pet", ObjectSchema::new());
        assert!(!components.is_empty());

        components.remove_schema("Pet").unwrap();
        assert!(components.is_empty());
    }
}

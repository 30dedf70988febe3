//! JSON document to node-tree mapping.
//!
//! [`parse_document`] walks a [`serde_json::Value`] and produces the typed
//! tree rooted at [`OpenApi`]. Parsing is strict about structure (wrong JSON
//! types, unknown discriminants and broken invariants are errors) and
//! lenient about unknown plain keys, which are ignored. `x-` prefixed keys
//! are collected into the [`Extensions`] of the surrounding node.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{
    AdditionalProperties, AllOfSchema, AnyOfSchema, ApiKey, ApiKeyIn, ArraySchema,
    AuthorizationCode, BooleanSchema, Callback, ClientCredentials, Components, Contact, Content,
    Encoding, Error, Example, Extensions, ExternalDocs, Header, Http, HttpMethod, Implicit, Info,
    License, Link, NotSchema, NumberSchema, OAuth2, OAuthFlows, ObjectSchema, OneOfSchema, OpenApi,
    OpenIdConnect, Operation, Parameter, ParameterIn, ParameterStyle, PathItem, Paths, Password,
    Ref, RefOr, RequestBody, Response, Responses, Result, Schema, SchemaCommon,
    SecurityRequirement, SecurityScheme, Server, ServerVariable, StringSchema, Tag, UNLICENSED,
};

/// Parse a whole document from its JSON form.
pub fn parse_document(value: &Value) -> Result<OpenApi> {
    let object = expect_object(value, "document")?;

    if let Some(version) = get_opt_string(object, "document", "openapi")? {
        if !version.starts_with("3.0") {
            return Err(Error::UnsupportedVersion(version));
        }
    }

    let info = parse_info(require(object, "document", "info")?)?;
    let paths = parse_paths(require(object, "document", "paths")?)?;
    let mut api = OpenApi::new(info, paths);

    if let Some(servers) = object.get("servers") {
        api.servers = parse_servers(servers)?;
    }
    if let Some(components) = object.get("components") {
        api.components = parse_components(components)?;
    }
    if let Some(security) = object.get("security") {
        api.security = Some(parse_security_requirement(security)?);
    }
    if let Some(tags) = object.get("tags") {
        for tag in expect_array(tags, "tags")? {
            api.tags.push(parse_tag(tag)?);
        }
    }
    if let Some(external_docs) = object.get("externalDocs") {
        api.external_docs = Some(parse_external_docs(external_docs)?);
    }
    api.extensions = Extensions::from_object(object);

    Ok(api)
}

fn expect_object<'a>(value: &'a Value, node: &'static str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or(Error::ExpectedObject(node))
}

fn expect_array<'a>(value: &'a Value, node: &'static str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or(Error::ExpectedArray(node))
}

fn require<'a>(
    object: &'a Map<String, Value>,
    node: &'static str,
    name: &'static str,
) -> Result<&'a Value> {
    object.get(name).ok_or(Error::MissingField { node, name })
}

fn get_string(
    object: &Map<String, Value>,
    node: &'static str,
    name: &'static str,
) -> Result<String> {
    match object.get(name) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(Error::InvalidField {
            node,
            name,
            expected: "a string",
        }),
        None => Err(Error::MissingField { node, name }),
    }
}

fn get_opt_string(
    object: &Map<String, Value>,
    node: &'static str,
    name: &'static str,
) -> Result<Option<String>> {
    match object.get(name) {
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(Error::InvalidField {
            node,
            name,
            expected: "a string",
        }),
    }
}

/// Boolean flag read; absent means `false`.
fn get_flag(object: &Map<String, Value>, node: &'static str, name: &'static str) -> Result<bool> {
    match object.get(name) {
        Some(Value::Bool(value)) => Ok(*value),
        None => Ok(false),
        Some(_) => Err(Error::InvalidField {
            node,
            name,
            expected: "a boolean",
        }),
    }
}

/// Numeric bound read on key presence, so `0` survives.
fn get_f64(
    object: &Map<String, Value>,
    node: &'static str,
    name: &'static str,
) -> Result<Option<f64>> {
    match object.get(name) {
        Some(Value::Number(value)) => Ok(value.as_f64()),
        None => Ok(None),
        Some(_) => Err(Error::InvalidField {
            node,
            name,
            expected: "a number",
        }),
    }
}

fn get_u64(
    object: &Map<String, Value>,
    node: &'static str,
    name: &'static str,
) -> Result<Option<u64>> {
    match object.get(name) {
        Some(Value::Number(value)) => value.as_u64().map(Some).ok_or(Error::InvalidField {
            node,
            name,
            expected: "a non-negative integer",
        }),
        None => Ok(None),
        Some(_) => Err(Error::InvalidField {
            node,
            name,
            expected: "a non-negative integer",
        }),
    }
}

/// JSON literal read; an explicit `null` counts as absent.
fn get_value(object: &Map<String, Value>, name: &str) -> Option<Value> {
    match object.get(name) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value.clone()),
    }
}

fn get_string_array(
    object: &Map<String, Value>,
    node: &'static str,
    name: &'static str,
) -> Result<Vec<String>> {
    let Some(value) = object.get(name) else {
        return Ok(Vec::new());
    };
    let items = value.as_array().ok_or(Error::InvalidField {
        node,
        name,
        expected: "an array of strings",
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or(Error::InvalidField {
                node,
                name,
                expected: "an array of strings",
            })
        })
        .collect()
}

fn reject_pair(
    object: &Map<String, Value>,
    first: &'static str,
    second: &'static str,
) -> Result<()> {
    if object.contains_key(first) && object.contains_key(second) {
        return Err(Error::MutuallyExclusive { first, second });
    }
    Ok(())
}

/// Recognize a `$ref` object; sibling keys other than extensions are
/// dropped.
fn try_parse_ref(object: &Map<String, Value>) -> Result<Option<Ref>> {
    let Some(location) = object.get("$ref") else {
        return Ok(None);
    };
    let location = location.as_str().ok_or(Error::InvalidField {
        node: "reference",
        name: "$ref",
        expected: "a string",
    })?;
    let mut reference = Ref::new(location);
    reference.extensions = Extensions::from_object(object);
    Ok(Some(reference))
}

fn parse_ref_or<T>(
    value: &Value,
    node: &'static str,
    parse: impl FnOnce(&Value) -> Result<T>,
) -> Result<RefOr<T>> {
    let object = expect_object(value, node)?;
    if let Some(reference) = try_parse_ref(object)? {
        return Ok(RefOr::Ref(reference));
    }
    parse(value).map(RefOr::T)
}

fn parse_info(value: &Value) -> Result<Info> {
    let object = expect_object(value, "info")?;
    let mut info = Info::new(
        get_string(object, "info", "title")?,
        get_string(object, "info", "version")?,
    );
    info.description = get_opt_string(object, "info", "description")?;
    info.terms_of_service = get_opt_string(object, "info", "termsOfService")?;
    if let Some(contact) = object.get("contact") {
        info.contact = Some(parse_contact(contact)?);
    }
    if let Some(license) = object.get("license") {
        info.license = Some(parse_license(license)?);
    }
    info.extensions = Extensions::from_object(object);
    Ok(info)
}

fn parse_contact(value: &Value) -> Result<Contact> {
    let object = expect_object(value, "contact")?;
    let mut contact = Contact::new();
    contact.name = get_opt_string(object, "contact", "name")?;
    contact.url = get_opt_string(object, "contact", "url")?;
    contact.email = get_opt_string(object, "contact", "email")?;
    contact.extensions = Extensions::from_object(object);
    Ok(contact)
}

fn parse_license(value: &Value) -> Result<License> {
    let object = expect_object(value, "license")?;
    // An omitted name round-trips through the UNLICENSED sentinel.
    let name = get_opt_string(object, "license", "name")?.unwrap_or_else(|| UNLICENSED.to_string());
    let mut license = License::new(name);
    license.url = get_opt_string(object, "license", "url")?;
    license.extensions = Extensions::from_object(object);
    Ok(license)
}

fn parse_servers(value: &Value) -> Result<Vec<Server>> {
    expect_array(value, "servers")?
        .iter()
        .map(parse_server)
        .collect()
}

fn parse_server(value: &Value) -> Result<Server> {
    let object = expect_object(value, "server")?;
    let mut server = Server::new(get_string(object, "server", "url")?);
    server.description = get_opt_string(object, "server", "description")?;
    if let Some(variables) = object.get("variables") {
        let variables = expect_object(variables, "server variables")?;
        for (name, variable) in variables {
            let parsed = parse_server_variable(variable)?;
            let Some(slot) = server.variables.get_mut(name.as_str()) else {
                return Err(Error::UnknownServerVariable(name.clone()));
            };
            *slot = parsed;
        }
    }
    server.extensions = Extensions::from_object(object);
    Ok(server)
}

fn parse_server_variable(value: &Value) -> Result<ServerVariable> {
    let object = expect_object(value, "server variable")?;
    let mut variable = ServerVariable::new(
        get_opt_string(object, "server variable", "default")?.unwrap_or_default(),
    );
    variable.enum_values = get_string_array(object, "server variable", "enum")?;
    variable.description = get_opt_string(object, "server variable", "description")?;
    variable.extensions = Extensions::from_object(object);
    Ok(variable)
}

fn parse_paths(value: &Value) -> Result<Paths> {
    let object = expect_object(value, "paths")?;
    let mut paths = Paths::new();
    for (key, item) in object {
        if key.starts_with("x-") {
            continue;
        }
        paths.paths.insert(key.clone(), parse_path_item(item)?);
    }
    paths.extensions = Extensions::from_object(object);
    Ok(paths)
}

fn parse_path_item(value: &Value) -> Result<PathItem> {
    let object = expect_object(value, "path item")?;
    let mut item = PathItem::default();
    let mut unknown: Vec<&str> = Vec::new();

    for (key, field) in object {
        if key.starts_with("x-") {
            continue;
        }
        if let Some(method) = HttpMethod::from_str(key) {
            item.add_operation(method, parse_operation(field)?)?;
            continue;
        }
        match key.as_str() {
            "summary" => item.summary = get_opt_string(object, "path item", "summary")?,
            "description" => item.description = get_opt_string(object, "path item", "description")?,
            "servers" => item.servers = parse_servers(field)?,
            "parameters" => {
                for parameter in expect_array(field, "parameters")? {
                    item.parameters
                        .push(parse_ref_or(parameter, "parameter", parse_parameter)?);
                }
            }
            // A path-level $ref is tolerated but not resolved.
            "$ref" => {}
            _ => unknown.push(key),
        }
    }

    if !unknown.is_empty() {
        return Err(Error::UnsupportedHttpMethods(unknown.join(", ")));
    }
    item.extensions = Extensions::from_object(object);
    Ok(item)
}

fn parse_operation(value: &Value) -> Result<Operation> {
    let object = expect_object(value, "operation")?;
    let mut operation = Operation::new();

    operation.tags = get_string_array(object, "operation", "tags")?;
    operation.summary = get_opt_string(object, "operation", "summary")?;
    operation.description = get_opt_string(object, "operation", "description")?;
    if let Some(external_docs) = object.get("externalDocs") {
        operation.external_docs = Some(parse_external_docs(external_docs)?);
    }
    operation.operation_id = get_opt_string(object, "operation", "operationId")?;
    if let Some(parameters) = object.get("parameters") {
        for parameter in expect_array(parameters, "parameters")? {
            operation
                .parameters
                .push(parse_ref_or(parameter, "parameter", parse_parameter)?);
        }
    }
    if let Some(request_body) = object.get("requestBody") {
        operation.request_body =
            Some(parse_ref_or(request_body, "request body", parse_request_body)?);
    }
    operation.responses = parse_responses(require(object, "operation", "responses")?)?;
    if let Some(callbacks) = object.get("callbacks") {
        let callbacks = expect_object(callbacks, "callbacks")?;
        for (name, callback) in callbacks {
            operation
                .callbacks
                .insert(name.clone(), parse_ref_or(callback, "callback", parse_callback)?);
        }
    }
    operation.deprecated = get_flag(object, "operation", "deprecated")?;
    if let Some(security) = object.get("security") {
        operation.security = Some(parse_security_requirement(security)?);
    }
    if let Some(servers) = object.get("servers") {
        operation.servers = parse_servers(servers)?;
    }
    operation.extensions = Extensions::from_object(object);
    Ok(operation)
}

fn parse_callback(value: &Value) -> Result<Callback> {
    let object = expect_object(value, "callback")?;
    let mut callback = Callback::new();
    for (expression, item) in object {
        if expression.starts_with("x-") {
            continue;
        }
        callback
            .paths
            .insert(expression.clone(), parse_path_item(item)?);
    }
    callback.extensions = Extensions::from_object(object);
    Ok(callback)
}

fn parse_parameter(value: &Value) -> Result<Parameter> {
    let object = expect_object(value, "parameter")?;
    let name = get_string(object, "parameter", "name")?;
    let location = get_string(object, "parameter", "in")?;
    let parameter_in = ParameterIn::from_str(&location)
        .ok_or(Error::UnsupportedParameterLocation(location))?;

    let mut parameter = Parameter::new(parameter_in, name);
    parameter.description = get_opt_string(object, "parameter", "description")?;

    if let Some(required) = object.get("required") {
        let required = required.as_bool().ok_or(Error::InvalidField {
            node: "parameter",
            name: "required",
            expected: "a boolean",
        })?;
        if !required && parameter_in == ParameterIn::Path {
            return Err(Error::OptionalPathParameter(parameter.name().to_string()));
        }
        parameter.required = required;
    }

    parameter.deprecated = get_flag(object, "parameter", "deprecated")?;
    parameter.allow_empty_value = get_flag(object, "parameter", "allowEmptyValue")?;
    parameter.allow_reserved = get_flag(object, "parameter", "allowReserved")?;

    let (style, explode) = parse_style_explode(object, parameter_in.default_style())?;
    parameter.style = style;
    parameter.explode = explode;

    reject_pair(object, "schema", "content")?;
    reject_pair(object, "example", "examples")?;
    if let Some(schema) = object.get("schema") {
        parameter.schema = Some(parse_ref_or(schema, "schema", parse_schema)?);
    }
    if let Some(content) = object.get("content") {
        parameter.content = parse_content_map(content)?;
    }
    parameter.example = get_value(object, "example");
    if let Some(examples) = object.get("examples") {
        parameter.examples = parse_example_map(examples)?;
    }
    parameter.extensions = Extensions::from_object(object);
    Ok(parameter)
}

/// Effective style and explode of a parameter-shaped object: the location
/// default when absent, with the explode default following the style.
fn parse_style_explode(
    object: &Map<String, Value>,
    default_style: ParameterStyle,
) -> Result<(ParameterStyle, bool)> {
    let style = match get_opt_string(object, "parameter", "style")? {
        Some(style) => ParameterStyle::from_str(&style).ok_or(Error::UnsupportedStyle(style))?,
        None => default_style,
    };
    let explode = match object.get("explode") {
        Some(explode) => explode.as_bool().ok_or(Error::InvalidField {
            node: "parameter",
            name: "explode",
            expected: "a boolean",
        })?,
        None => style.default_explode(),
    };
    Ok((style, explode))
}

fn parse_header(value: &Value) -> Result<Header> {
    let object = expect_object(value, "header")?;
    let mut header = Header::new();
    header.description = get_opt_string(object, "header", "description")?;
    header.required = get_flag(object, "header", "required")?;
    header.deprecated = get_flag(object, "header", "deprecated")?;

    let (style, explode) = parse_style_explode(object, ParameterStyle::Simple)?;
    header.style = style;
    header.explode = explode;

    reject_pair(object, "schema", "content")?;
    reject_pair(object, "example", "examples")?;
    if let Some(schema) = object.get("schema") {
        header.schema = Some(parse_ref_or(schema, "schema", parse_schema)?);
    }
    if let Some(content) = object.get("content") {
        header.content = parse_content_map(content)?;
    }
    header.example = get_value(object, "example");
    if let Some(examples) = object.get("examples") {
        header.examples = parse_example_map(examples)?;
    }
    header.extensions = Extensions::from_object(object);
    Ok(header)
}

fn parse_request_body(value: &Value) -> Result<RequestBody> {
    let object = expect_object(value, "request body")?;
    let mut body = RequestBody::new();
    body.description = get_opt_string(object, "request body", "description")?;
    if let Some(content) = object.get("content") {
        body.content = parse_content_map(content)?;
    }
    body.required = get_flag(object, "request body", "required")?;
    body.extensions = Extensions::from_object(object);
    Ok(body)
}

fn parse_content_map(value: &Value) -> Result<IndexMap<String, Content>> {
    let object = expect_object(value, "content")?;
    let mut map = IndexMap::new();
    for (media_type, content) in object {
        map.insert(media_type.clone(), parse_content(content)?);
    }
    Ok(map)
}

fn parse_content(value: &Value) -> Result<Content> {
    let object = expect_object(value, "media type")?;
    let mut content = Content::default();
    if let Some(schema) = object.get("schema") {
        content.schema = Some(parse_ref_or(schema, "schema", parse_schema)?);
    }
    reject_pair(object, "example", "examples")?;
    content.example = get_value(object, "example");
    if let Some(examples) = object.get("examples") {
        content.examples = parse_example_map(examples)?;
    }
    if let Some(encoding) = object.get("encoding") {
        let encoding = expect_object(encoding, "encoding")?;
        for (property, value) in encoding {
            content.encoding.insert(property.clone(), parse_encoding(value)?);
        }
    }
    content.extensions = Extensions::from_object(object);
    Ok(content)
}

fn parse_encoding(value: &Value) -> Result<Encoding> {
    let object = expect_object(value, "encoding")?;
    let mut encoding =
        Encoding::new(get_opt_string(object, "encoding", "contentType")?.unwrap_or_default());
    if let Some(headers) = object.get("headers") {
        let headers = expect_object(headers, "encoding headers")?;
        for (name, header) in headers {
            encoding.headers.insert(
                name.to_lowercase(),
                parse_ref_or(header, "header", parse_header)?,
            );
        }
    }
    if let Some(style) = get_opt_string(object, "encoding", "style")? {
        encoding.style =
            Some(ParameterStyle::from_str(&style).ok_or(Error::UnsupportedStyle(style))?);
    }
    encoding.explode = get_flag(object, "encoding", "explode")?;
    encoding.allow_reserved = get_flag(object, "encoding", "allowReserved")?;
    encoding.extensions = Extensions::from_object(object);
    Ok(encoding)
}

fn parse_example_map(value: &Value) -> Result<IndexMap<String, RefOr<Example>>> {
    let object = expect_object(value, "examples")?;
    let mut map = IndexMap::new();
    for (name, example) in object {
        map.insert(name.clone(), parse_ref_or(example, "example", parse_example)?);
    }
    Ok(map)
}

fn parse_example(value: &Value) -> Result<Example> {
    let object = expect_object(value, "example")?;
    let mut example = Example::new();
    example.summary = get_opt_string(object, "example", "summary")?;
    example.description = get_opt_string(object, "example", "description")?;
    example.value = get_value(object, "value");
    example.external_value = get_opt_string(object, "example", "externalValue")?;
    if example.value.is_some() && example.external_value.is_some() {
        return Err(Error::MutuallyExclusive {
            first: "value",
            second: "externalValue",
        });
    }
    example.extensions = Extensions::from_object(object);
    Ok(example)
}

fn parse_responses(value: &Value) -> Result<Responses> {
    let object = expect_object(value, "responses")?;
    let mut responses = Responses::new();
    for (key, response) in object {
        if key.starts_with("x-") {
            continue;
        }
        let response = parse_ref_or(response, "response", parse_response)?;
        if key == "default" {
            responses.default = Some(response);
        } else {
            responses.codes.insert(key.clone(), response);
        }
    }
    if responses.is_empty() {
        return Err(Error::EmptyResponses);
    }
    responses.extensions = Extensions::from_object(object);
    Ok(responses)
}

fn parse_response(value: &Value) -> Result<Response> {
    let object = expect_object(value, "response")?;
    let mut response = Response::new(get_string(object, "response", "description")?);
    if let Some(headers) = object.get("headers") {
        let headers = expect_object(headers, "response headers")?;
        for (name, header) in headers {
            let name = name.to_lowercase();
            // The content type is carried by the content map instead.
            if name == "content-type" {
                continue;
            }
            if response.headers.contains_key(&name) {
                return Err(Error::DuplicateResponseHeader(name));
            }
            response
                .headers
                .insert(name, parse_ref_or(header, "header", parse_header)?);
        }
    }
    if let Some(content) = object.get("content") {
        response.content = parse_content_map(content)?;
    }
    if let Some(links) = object.get("links") {
        let links = expect_object(links, "links")?;
        for (name, link) in links {
            response
                .links
                .insert(name.clone(), parse_ref_or(link, "link", parse_link)?);
        }
    }
    response.extensions = Extensions::from_object(object);
    Ok(response)
}

fn parse_link(value: &Value) -> Result<Link> {
    let object = expect_object(value, "link")?;
    let mut link = Link::new();
    link.operation_ref = get_opt_string(object, "link", "operationRef")?;
    link.operation_id = get_opt_string(object, "link", "operationId")?;
    if let Some(parameters) = object.get("parameters") {
        let parameters = expect_object(parameters, "link parameters")?;
        for (name, value) in parameters {
            link.parameters.insert(name.clone(), value.clone());
        }
    }
    link.request_body = get_value(object, "requestBody");
    link.description = get_opt_string(object, "link", "description")?;
    if let Some(server) = object.get("server") {
        link.server = Some(parse_server(server)?);
    }
    link.extensions = Extensions::from_object(object);
    Ok(link)
}

fn parse_components(value: &Value) -> Result<Components> {
    let object = expect_object(value, "components")?;
    let mut components = Components::new();

    macro_rules! component_map {
        ( $key:literal, $node:literal, $target:ident, $parse:expr ) => {
            if let Some(entries) = object.get($key) {
                let entries = expect_object(entries, $key)?;
                for (name, entry) in entries {
                    components
                        .$target
                        .insert(name.clone(), parse_ref_or(entry, $node, $parse)?);
                }
            }
        };
    }

    component_map!("schemas", "schema", schemas, parse_schema);
    component_map!("responses", "response", responses, parse_response);
    component_map!("parameters", "parameter", parameters, parse_parameter);
    component_map!("examples", "example", examples, parse_example);
    component_map!("requestBodies", "request body", request_bodies, parse_request_body);
    component_map!("headers", "header", headers, parse_header);
    component_map!(
        "securitySchemes",
        "security scheme",
        security_schemes,
        parse_security_scheme
    );
    component_map!("links", "link", links, parse_link);
    component_map!("callbacks", "callback", callbacks, parse_callback);

    components.extensions = Extensions::from_object(object);
    Ok(components)
}

fn parse_security_scheme(value: &Value) -> Result<SecurityScheme> {
    let object = expect_object(value, "security scheme")?;
    let scheme_type = get_string(object, "security scheme", "type")?;
    let description = get_opt_string(object, "security scheme", "description")?;
    let extensions = Extensions::from_object(object);

    match scheme_type.as_str() {
        "apiKey" => {
            let location = get_string(object, "security scheme", "in")?;
            let api_key_in =
                ApiKeyIn::from_str(&location).ok_or(Error::UnsupportedApiKeyLocation(location))?;
            let mut scheme = ApiKey::new(get_string(object, "security scheme", "name")?, api_key_in);
            scheme.description = description;
            scheme.extensions = extensions;
            Ok(SecurityScheme::ApiKey(scheme))
        }
        "http" => {
            let mut scheme = Http::new(get_string(object, "security scheme", "scheme")?);
            scheme.bearer_format = get_opt_string(object, "security scheme", "bearerFormat")?;
            scheme.description = description;
            scheme.extensions = extensions;
            Ok(SecurityScheme::Http(scheme))
        }
        "oauth2" => {
            let mut scheme = OAuth2::new(parse_oauth_flows(require(
                object,
                "security scheme",
                "flows",
            )?)?);
            scheme.description = description;
            scheme.extensions = extensions;
            Ok(SecurityScheme::OAuth2(scheme))
        }
        "openIdConnect" => {
            let mut scheme =
                OpenIdConnect::new(get_string(object, "security scheme", "openIdConnectUrl")?);
            scheme.description = description;
            scheme.extensions = extensions;
            Ok(SecurityScheme::OpenIdConnect(scheme))
        }
        _ => Err(Error::UnsupportedSecuritySchemeType(scheme_type)),
    }
}

fn parse_oauth_flows(value: &Value) -> Result<OAuthFlows> {
    let object = expect_object(value, "oauth flows")?;
    let mut flows = OAuthFlows::new();

    if let Some(flow) = object.get("implicit") {
        let flow = expect_object(flow, "implicit flow")?;
        let mut implicit =
            Implicit::new(get_string(flow, "implicit flow", "authorizationUrl")?);
        implicit.refresh_url = get_opt_string(flow, "implicit flow", "refreshUrl")?;
        implicit.scopes = parse_scopes(flow, "implicit flow")?;
        implicit.extensions = Extensions::from_object(flow);
        flows.implicit = Some(implicit);
    }
    if let Some(flow) = object.get("password") {
        let flow = expect_object(flow, "password flow")?;
        let mut password = Password::new(get_string(flow, "password flow", "tokenUrl")?);
        password.refresh_url = get_opt_string(flow, "password flow", "refreshUrl")?;
        password.scopes = parse_scopes(flow, "password flow")?;
        password.extensions = Extensions::from_object(flow);
        flows.password = Some(password);
    }
    if let Some(flow) = object.get("clientCredentials") {
        let flow = expect_object(flow, "client credentials flow")?;
        let mut credentials =
            ClientCredentials::new(get_string(flow, "client credentials flow", "tokenUrl")?);
        credentials.refresh_url = get_opt_string(flow, "client credentials flow", "refreshUrl")?;
        credentials.scopes = parse_scopes(flow, "client credentials flow")?;
        credentials.extensions = Extensions::from_object(flow);
        flows.client_credentials = Some(credentials);
    }
    if let Some(flow) = object.get("authorizationCode") {
        let flow = expect_object(flow, "authorization code flow")?;
        let mut code = AuthorizationCode::new(
            get_string(flow, "authorization code flow", "authorizationUrl")?,
            get_string(flow, "authorization code flow", "tokenUrl")?,
        );
        code.refresh_url = get_opt_string(flow, "authorization code flow", "refreshUrl")?;
        code.scopes = parse_scopes(flow, "authorization code flow")?;
        code.extensions = Extensions::from_object(flow);
        flows.authorization_code = Some(code);
    }

    Ok(flows)
}

fn parse_scopes(
    object: &Map<String, Value>,
    node: &'static str,
) -> Result<IndexMap<String, String>> {
    let Some(scopes) = object.get("scopes") else {
        return Ok(IndexMap::new());
    };
    let scopes = expect_object(scopes, "scopes")?;
    let mut map = IndexMap::new();
    for (name, description) in scopes {
        let description = description.as_str().ok_or(Error::InvalidField {
            node,
            name: "scopes",
            expected: "a map of strings",
        })?;
        map.insert(name.clone(), description.to_string());
    }
    Ok(map)
}

/// Accepts both the single-object shape and the standard array shape; array
/// entries are merged into one requirement in input order.
fn parse_security_requirement(value: &Value) -> Result<SecurityRequirement> {
    if let Value::Array(entries) = value {
        let mut requirement = SecurityRequirement::default();
        for entry in entries {
            let parsed = parse_security_requirement_object(entry)?;
            requirement.schemes.extend(parsed.schemes);
            for (key, extension) in parsed.extensions.iter() {
                requirement.extensions.insert(key.clone(), extension.clone());
            }
        }
        return Ok(requirement);
    }
    parse_security_requirement_object(value)
}

fn parse_security_requirement_object(value: &Value) -> Result<SecurityRequirement> {
    let object = expect_object(value, "security requirement")?;
    let mut requirement = SecurityRequirement::default();
    for (name, scopes) in object {
        if name.starts_with("x-") {
            continue;
        }
        let scopes = scopes
            .as_array()
            .ok_or_else(|| Error::InvalidScopes(name.clone()))?;
        let scopes = scopes
            .iter()
            .map(|scope| {
                scope
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| Error::InvalidScopes(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        requirement.schemes.insert(name.clone(), scopes);
    }
    requirement.extensions = Extensions::from_object(object);
    Ok(requirement)
}

fn parse_tag(value: &Value) -> Result<Tag> {
    let object = expect_object(value, "tag")?;
    let mut tag = Tag::new(get_string(object, "tag", "name")?);
    tag.description = get_opt_string(object, "tag", "description")?;
    if let Some(external_docs) = object.get("externalDocs") {
        tag.external_docs = Some(parse_external_docs(external_docs)?);
    }
    tag.extensions = Extensions::from_object(object);
    Ok(tag)
}

fn parse_external_docs(value: &Value) -> Result<ExternalDocs> {
    let object = expect_object(value, "external documentation")?;
    let mut docs = ExternalDocs::new(get_string(object, "external documentation", "url")?);
    docs.description = get_opt_string(object, "external documentation", "description")?;
    docs.extensions = Extensions::from_object(object);
    Ok(docs)
}

fn parse_schema(value: &Value) -> Result<Schema> {
    let object = expect_object(value, "schema")?;
    let common = parse_schema_common(object)?;

    // Composition keywords win over a literal type.
    if let Some(items) = object.get("allOf") {
        let mut schema = AllOfSchema::new();
        schema.common = common;
        schema.items = parse_schema_list(items, "allOf")?;
        return Ok(Schema::AllOf(schema));
    }
    if let Some(items) = object.get("anyOf") {
        let mut schema = AnyOfSchema::new();
        schema.common = common;
        schema.items = parse_schema_list(items, "anyOf")?;
        return Ok(Schema::AnyOf(schema));
    }
    if let Some(items) = object.get("oneOf") {
        let mut schema = OneOfSchema::new();
        schema.common = common;
        schema.items = parse_schema_list(items, "oneOf")?;
        return Ok(Schema::OneOf(schema));
    }
    if let Some(negated) = object.get("not") {
        let mut schema = NotSchema::new(parse_ref_or(negated, "schema", parse_schema)?);
        schema.common = common;
        return Ok(Schema::Not(schema));
    }

    match object.get("type").and_then(Value::as_str) {
        Some("array") => {
            let items = require(object, "array schema", "items")?;
            let mut schema = ArraySchema::new(parse_ref_or(items, "schema", parse_schema)?);
            schema.common = common;
            Ok(Schema::Array(schema))
        }
        Some("object") => {
            let mut schema = ObjectSchema::new();
            schema.common = common;
            schema.required = get_string_array(object, "object schema", "required")?;
            if let Some(properties) = object.get("properties") {
                let properties = expect_object(properties, "schema properties")?;
                for (name, property) in properties {
                    schema
                        .properties
                        .insert(name.clone(), parse_ref_or(property, "schema", parse_schema)?);
                }
            }
            schema.additional_properties = parse_additional_properties(object)?;
            Ok(Schema::Object(schema))
        }
        Some("boolean") => {
            let mut schema = BooleanSchema::new();
            schema.common = common;
            schema.enum_values = parse_enum_values(object, "boolean schema", Value::as_bool)?;
            Ok(Schema::Boolean(schema))
        }
        Some(primitive) if primitive == "number" || primitive == "integer" => {
            let node = "number schema";
            let mut schema = NumberSchema::new();
            schema.common = common;
            schema.minimum = get_f64(object, node, "minimum")?;
            schema.maximum = get_f64(object, node, "maximum")?;
            schema.exclusive_minimum = get_flag(object, node, "exclusiveMinimum")?;
            schema.exclusive_maximum = get_flag(object, node, "exclusiveMaximum")?;
            schema.multiple_of = get_f64(object, node, "multipleOf")?;
            schema.enum_values = parse_enum_values(object, node, Value::as_f64)?;
            if primitive == "integer" {
                Ok(Schema::Integer(schema))
            } else {
                Ok(Schema::Number(schema))
            }
        }
        Some("string") => {
            let node = "string schema";
            let mut schema = StringSchema::new();
            schema.common = common;
            schema.min_length = get_u64(object, node, "minLength")?;
            schema.max_length = get_u64(object, node, "maxLength")?;
            schema.pattern = get_opt_string(object, node, "pattern")?;
            schema.enum_values = parse_enum_values(object, node, |value| {
                value.as_str().map(str::to_string)
            })?;
            Ok(Schema::String(schema))
        }
        _ => Err(Error::UnknownSchemaShape(value.to_string())),
    }
}

fn parse_schema_common(object: &Map<String, Value>) -> Result<SchemaCommon> {
    let mut common = SchemaCommon::default();
    common.title = get_opt_string(object, "schema", "title")?;
    common.description = get_opt_string(object, "schema", "description")?;
    common.format = get_opt_string(object, "schema", "format")?;
    common.nullable = get_flag(object, "schema", "nullable")?;
    common.default = get_value(object, "default");
    common.example = get_value(object, "example");
    common.extensions = Extensions::from_object(object);
    Ok(common)
}

fn parse_schema_list(value: &Value, node: &'static str) -> Result<Vec<RefOr<Schema>>> {
    expect_array(value, node)?
        .iter()
        .map(|item| parse_ref_or(item, "schema", parse_schema))
        .collect()
}

fn parse_enum_values<T>(
    object: &Map<String, Value>,
    node: &'static str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>> {
    let Some(values) = object.get("enum") else {
        return Ok(Vec::new());
    };
    let values = values.as_array().ok_or(Error::InvalidField {
        node,
        name: "enum",
        expected: "an array",
    })?;
    values
        .iter()
        .map(|value| {
            convert(value).ok_or(Error::InvalidField {
                node,
                name: "enum",
                expected: "values matching the schema type",
            })
        })
        .collect()
}

/// `additionalProperties: true` is canonicalized to absent.
fn parse_additional_properties(
    object: &Map<String, Value>,
) -> Result<Option<AdditionalProperties>> {
    match object.get("additionalProperties") {
        None | Some(Value::Bool(true)) => Ok(None),
        Some(Value::Bool(false)) => Ok(Some(AdditionalProperties::FreeForm(false))),
        Some(value @ Value::Object(_)) => Ok(Some(AdditionalProperties::Schema(Box::new(
            parse_ref_or(value, "schema", parse_schema)?,
        )))),
        Some(_) => Err(Error::InvalidField {
            node: "object schema",
            name: "additionalProperties",
            expected: "a boolean or a schema object",
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn barebones_document_parses() {
        let api = parse_document(&json!({
            "openapi": "3.0.3",
            "info": { "title": "Pets", "version": "1.0.0" },
            "paths": {}
        }))
        .unwrap();

        assert_eq!(api.info.title, "Pets");
        assert!(api.paths.paths.is_empty());
    }

    #[test]
    fn non_3_0_version_rejected() {
        let err = parse_document(&json!({
            "openapi": "3.1.0",
            "info": { "title": "Pets", "version": "1.0.0" },
            "paths": {}
        }))
        .unwrap_err();

        assert!(matches!(err, Error::UnsupportedVersion(version) if version == "3.1.0"));
    }

    #[test]
    fn missing_info_rejected() {
        let err = parse_document(&json!({ "paths": {} })).unwrap_err();
        assert!(matches!(err, Error::MissingField { name: "info", .. }));
    }

    #[test]
    fn schema_dispatch_prefers_composition() {
        let schema = parse_schema(&json!({
            "type": "object",
            "allOf": [ { "type": "string" } ]
        }))
        .unwrap();

        assert!(matches!(schema, Schema::AllOf(_)));
    }

    #[test]
    fn unknown_schema_shape_rejected() {
        let err = parse_schema(&json!({ "minimum": 3 })).unwrap_err();
        assert!(matches!(err, Error::UnknownSchemaShape(_)));
    }

    #[test]
    fn zero_bounds_survive() {
        let schema = parse_schema(&json!({ "type": "integer", "minimum": 0 })).unwrap();
        let Schema::Integer(schema) = schema else {
            panic!("expected integer schema");
        };
        assert_eq!(schema.minimum, Some(0.0));
    }

    #[test]
    fn additional_properties_true_canonicalized() {
        let schema =
            parse_schema(&json!({ "type": "object", "additionalProperties": true })).unwrap();
        let Schema::Object(schema) = schema else {
            panic!("expected object schema");
        };
        assert!(schema.additional_properties.is_none());

        let schema =
            parse_schema(&json!({ "type": "object", "additionalProperties": false })).unwrap();
        let Schema::Object(schema) = schema else {
            panic!("expected object schema");
        };
        assert_eq!(
            schema.additional_properties,
            Some(AdditionalProperties::FreeForm(false))
        );
    }

    #[test]
    fn ref_recognized_with_extensions() {
        let parsed = parse_ref_or(
            &json!({ "$ref": "#/components/schemas/Pet", "description": "dropped", "x-keep": 1 }),
            "schema",
            parse_schema,
        )
        .unwrap();

        let RefOr::Ref(reference) = parsed else {
            panic!("expected a reference");
        };
        assert_eq!(reference.ref_location, "#/components/schemas/Pet");
        assert_eq!(reference.extensions.get("keep"), Some(&json!(1)));
    }

    #[test]
    fn parameter_effective_defaults() {
        let parameter = parse_parameter(&json!({ "name": "limit", "in": "query" })).unwrap();
        assert_eq!(parameter.style, ParameterStyle::Form);
        assert!(parameter.explode);
        assert!(!parameter.required);

        let parameter = parse_parameter(&json!({
            "name": "limit",
            "in": "query",
            "style": "pipeDelimited"
        }))
        .unwrap();
        assert!(!parameter.explode);
    }

    #[test]
    fn optional_path_parameter_rejected() {
        let err = parse_parameter(&json!({ "name": "id", "in": "path", "required": false }))
            .unwrap_err();
        assert!(matches!(err, Error::OptionalPathParameter(name) if name == "id"));
    }

    #[test]
    fn schema_and_content_exclusive() {
        let err = parse_parameter(&json!({
            "name": "filter",
            "in": "query",
            "schema": { "type": "string" },
            "content": { "application/json": {} }
        }))
        .unwrap_err();
        assert!(matches!(err, Error::MutuallyExclusive { first: "schema", .. }));
    }

    #[test]
    fn content_type_header_dropped() {
        let response = parse_response(&json!({
            "description": "ok",
            "headers": {
                "Content-Type": { "schema": { "type": "string" } },
                "X-Rate-Limit": { "schema": { "type": "integer" } }
            }
        }))
        .unwrap();

        assert_eq!(response.headers.len(), 1);
        assert!(response.headers.contains_key("x-rate-limit"));
    }

    #[test]
    fn case_differing_headers_rejected() {
        let err = parse_response(&json!({
            "description": "ok",
            "headers": {
                "X-Request-Id": {},
                "x-request-id": { "description": "again" }
            }
        }))
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateResponseHeader(_)));
    }

    #[test]
    fn empty_responses_rejected() {
        let err = parse_operation(&json!({ "responses": {} })).unwrap_err();
        assert!(matches!(err, Error::EmptyResponses));
    }

    #[test]
    fn unknown_path_item_key_rejected() {
        let err = parse_path_item(&json!({
            "get": { "responses": { "200": { "description": "ok" } } },
            "connect": {}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedHttpMethods(keys) if keys == "connect"));
    }

    #[test]
    fn server_variable_must_match_template() {
        let err = parse_server(&json!({
            "url": "https://api.example.com",
            "variables": { "region": { "default": "eu" } }
        }))
        .unwrap_err();
        assert!(matches!(err, Error::UnknownServerVariable(name) if name == "region"));

        let server = parse_server(&json!({
            "url": "https://{region}.example.com",
            "variables": { "region": { "default": "eu", "enum": ["eu", "us"] } }
        }))
        .unwrap();
        assert_eq!(server.variables["region"].default_value, "eu");
    }

    #[test]
    fn security_scheme_dispatch() {
        let scheme = parse_security_scheme(&json!({
            "type": "http",
            "scheme": "bearer",
            "bearerFormat": "JWT"
        }))
        .unwrap();
        let SecurityScheme::Http(scheme) = scheme else {
            panic!("expected http scheme");
        };
        assert_eq!(scheme.bearer_format.as_deref(), Some("JWT"));

        let err = parse_security_scheme(&json!({ "type": "mutualTLS" })).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSecuritySchemeType(_)));
    }

    #[test]
    fn security_requirement_scopes_validated() {
        let err = parse_security_requirement(&json!({ "oauth": "read" })).unwrap_err();
        assert!(matches!(err, Error::InvalidScopes(name) if name == "oauth"));

        let requirement =
            parse_security_requirement(&json!({ "oauth": ["read", "write"] })).unwrap();
        assert_eq!(requirement.schemes["oauth"], vec!["read", "write"]);
    }

    #[test]
    fn security_requirement_array_entries_merge_in_order() {
        let requirement = parse_security_requirement(&json!([
            { "oauth": ["read"] },
            { "apiKey": [] }
        ]))
        .unwrap();

        assert_eq!(
            requirement.schemes.keys().collect::<Vec<_>>(),
            vec!["oauth", "apiKey"]
        );
        assert_eq!(requirement.schemes["oauth"], vec!["read"]);
        assert!(requirement.schemes["apiKey"].is_empty());
    }
}

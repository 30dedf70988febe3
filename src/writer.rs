//! Node-tree to JSON document mapping.
//!
//! [`write_document`] is the inverse of [`crate::reader::parse_document`]:
//! fields holding their default value are omitted so that a parse→write
//! cycle reproduces the input document. Every object emits its extension
//! fields first, mirroring the read side which strips them first.

use serde_json::{Map, Value};

use crate::{
    AdditionalProperties, ApiKey, Callback, Components, Contact, Content, Encoding, Example,
    ExternalDocs, Header, Http, HttpMethod, Info, License, Link, NumberSchema, OAuth2, OAuthFlows,
    OpenApi, OpenIdConnect, Operation, Parameter, ParameterIn, ParameterStyle, PathItem, Paths, Ref, RefOr,
    RequestBody, Response, Responses, Schema, SchemaCommon, SecurityRequirement, SecurityScheme,
    Server, ServerVariable, StringSchema, Tag, OPENAPI_VERSION, UNLICENSED,
};

/// Serialize a whole document to its JSON form.
pub fn write_document(api: &OpenApi) -> Value {
    let mut object = Map::new();
    object.insert("openapi".to_string(), Value::from(OPENAPI_VERSION));
    object.insert("info".to_string(), write_info(&api.info));
    api.extensions.write_into(&mut object);

    if !api.servers.is_empty() {
        object.insert(
            "servers".to_string(),
            api.servers.iter().map(write_server).collect(),
        );
    }
    if !api.components.is_empty() {
        object.insert("components".to_string(), write_components(&api.components));
    }
    // `paths` is required by the format and written even when empty.
    object.insert("paths".to_string(), write_paths(&api.paths));
    if let Some(security) = &api.security {
        object.insert(
            "security".to_string(),
            Value::Array(vec![write_security_requirement(security)]),
        );
    }
    if !api.tags.is_empty() {
        object.insert("tags".to_string(), api.tags.iter().map(write_tag).collect());
    }
    if let Some(external_docs) = &api.external_docs {
        object.insert(
            "externalDocs".to_string(),
            write_external_docs(external_docs),
        );
    }

    Value::Object(object)
}

fn insert_str(object: &mut Map<String, Value>, key: &str, value: &str) {
    object.insert(key.to_string(), Value::from(value));
}

fn insert_opt(object: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        object.insert(key.to_string(), Value::from(value.as_str()));
    }
}

/// Boolean written only when `true`; `false` is the default everywhere.
fn insert_flag(object: &mut Map<String, Value>, key: &str, value: bool) {
    if value {
        object.insert(key.to_string(), Value::Bool(true));
    }
}

/// Integer-valued floats are written as JSON integers so that integral
/// bounds survive a round trip byte-for-byte.
fn number_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

fn insert_number(object: &mut Map<String, Value>, key: &str, value: &Option<f64>) {
    if let Some(value) = value {
        object.insert(key.to_string(), number_value(*value));
    }
}

fn write_ref(reference: &Ref) -> Value {
    let mut object = Map::new();
    reference.extensions.write_into(&mut object);
    insert_str(&mut object, "$ref", &reference.ref_location);
    Value::Object(object)
}

fn write_ref_or<T>(value: &RefOr<T>, write: impl FnOnce(&T) -> Value) -> Value {
    match value {
        RefOr::Ref(reference) => write_ref(reference),
        RefOr::T(inner) => write(inner),
    }
}

fn write_info(info: &Info) -> Value {
    let mut object = Map::new();
    info.extensions.write_into(&mut object);
    insert_str(&mut object, "title", &info.title);
    insert_str(&mut object, "version", &info.version);
    insert_opt(&mut object, "description", &info.description);
    insert_opt(&mut object, "termsOfService", &info.terms_of_service);
    if let Some(contact) = &info.contact {
        if !contact.is_empty() {
            object.insert("contact".to_string(), write_contact(contact));
        }
    }
    if let Some(license) = &info.license {
        if let Some(license) = write_license(license) {
            object.insert("license".to_string(), license);
        }
    }
    Value::Object(object)
}

fn write_contact(contact: &Contact) -> Value {
    let mut object = Map::new();
    contact.extensions.write_into(&mut object);
    insert_opt(&mut object, "name", &contact.name);
    insert_opt(&mut object, "url", &contact.url);
    insert_opt(&mut object, "email", &contact.email);
    Value::Object(object)
}

/// The UNLICENSED sentinel is elided; a license with nothing left collapses
/// to `None`.
fn write_license(license: &License) -> Option<Value> {
    let mut object = Map::new();
    license.extensions.write_into(&mut object);
    if license.name != UNLICENSED {
        insert_str(&mut object, "name", &license.name);
    }
    insert_opt(&mut object, "url", &license.url);
    if object.is_empty() {
        return None;
    }
    Some(Value::Object(object))
}

fn write_server(server: &Server) -> Value {
    let mut object = Map::new();
    server.extensions.write_into(&mut object);
    insert_str(&mut object, "url", server.url());
    insert_opt(&mut object, "description", &server.description);
    if !server.variables.is_empty() {
        let mut variables = Map::new();
        for (name, variable) in &server.variables {
            variables.insert(name.clone(), write_server_variable(variable));
        }
        object.insert("variables".to_string(), Value::Object(variables));
    }
    Value::Object(object)
}

fn write_server_variable(variable: &ServerVariable) -> Value {
    let mut object = Map::new();
    variable.extensions.write_into(&mut object);
    insert_str(&mut object, "default", &variable.default_value);
    if !variable.enum_values.is_empty() {
        object.insert(
            "enum".to_string(),
            variable
                .enum_values
                .iter()
                .map(|value| Value::from(value.as_str()))
                .collect(),
        );
    }
    insert_opt(&mut object, "description", &variable.description);
    Value::Object(object)
}

fn write_paths(paths: &Paths) -> Value {
    let mut object = Map::new();
    paths.extensions.write_into(&mut object);
    for (path, item) in &paths.paths {
        object.insert(path.clone(), write_path_item(item));
    }
    Value::Object(object)
}

fn write_path_item(item: &PathItem) -> Value {
    let mut object = Map::new();
    item.extensions.write_into(&mut object);
    insert_opt(&mut object, "summary", &item.summary);
    insert_opt(&mut object, "description", &item.description);
    for method in HttpMethod::ALL {
        if let Some(operation) = item.operation(method) {
            object.insert(method.as_str().to_string(), write_operation(operation));
        }
    }
    if !item.parameters.is_empty() {
        object.insert(
            "parameters".to_string(),
            item.parameters
                .iter()
                .map(|parameter| write_ref_or(parameter, write_parameter))
                .collect(),
        );
    }
    if !item.servers.is_empty() {
        object.insert(
            "servers".to_string(),
            item.servers.iter().map(write_server).collect(),
        );
    }
    Value::Object(object)
}

fn write_operation(operation: &Operation) -> Value {
    let mut object = Map::new();
    operation.extensions.write_into(&mut object);
    if !operation.tags.is_empty() {
        object.insert(
            "tags".to_string(),
            operation.tags.iter().map(|tag| Value::from(tag.as_str())).collect(),
        );
    }
    insert_opt(&mut object, "summary", &operation.summary);
    insert_opt(&mut object, "description", &operation.description);
    if let Some(external_docs) = &operation.external_docs {
        object.insert(
            "externalDocs".to_string(),
            write_external_docs(external_docs),
        );
    }
    insert_opt(&mut object, "operationId", &operation.operation_id);
    if !operation.parameters.is_empty() {
        object.insert(
            "parameters".to_string(),
            operation
                .parameters
                .iter()
                .map(|parameter| write_ref_or(parameter, write_parameter))
                .collect(),
        );
    }
    if let Some(request_body) = &operation.request_body {
        object.insert(
            "requestBody".to_string(),
            write_ref_or(request_body, write_request_body),
        );
    }
    object.insert("responses".to_string(), write_responses(&operation.responses));
    if !operation.callbacks.is_empty() {
        let mut callbacks = Map::new();
        for (name, callback) in &operation.callbacks {
            callbacks.insert(name.clone(), write_ref_or(callback, write_callback));
        }
        object.insert("callbacks".to_string(), Value::Object(callbacks));
    }
    insert_flag(&mut object, "deprecated", operation.deprecated);
    if let Some(security) = &operation.security {
        object.insert(
            "security".to_string(),
            Value::Array(vec![write_security_requirement(security)]),
        );
    }
    if !operation.servers.is_empty() {
        object.insert(
            "servers".to_string(),
            operation.servers.iter().map(write_server).collect(),
        );
    }
    Value::Object(object)
}

fn write_callback(callback: &Callback) -> Value {
    let mut object = Map::new();
    callback.extensions.write_into(&mut object);
    for (expression, item) in &callback.paths {
        object.insert(expression.clone(), write_path_item(item));
    }
    Value::Object(object)
}

fn write_responses(responses: &Responses) -> Value {
    let mut object = Map::new();
    responses.extensions.write_into(&mut object);
    for (code, response) in &responses.codes {
        object.insert(code.clone(), write_ref_or(response, write_response));
    }
    if let Some(default) = &responses.default {
        object.insert("default".to_string(), write_ref_or(default, write_response));
    }
    Value::Object(object)
}

fn write_response(response: &Response) -> Value {
    let mut object = Map::new();
    response.extensions.write_into(&mut object);
    insert_str(&mut object, "description", &response.description);
    if !response.headers.is_empty() {
        let mut headers = Map::new();
        for (name, header) in &response.headers {
            headers.insert(name.clone(), write_ref_or(header, write_header));
        }
        object.insert("headers".to_string(), Value::Object(headers));
    }
    if !response.content.is_empty() {
        object.insert("content".to_string(), write_content_map(&response.content));
    }
    if !response.links.is_empty() {
        let mut links = Map::new();
        for (name, link) in &response.links {
            links.insert(name.clone(), write_ref_or(link, write_link));
        }
        object.insert("links".to_string(), Value::Object(links));
    }
    Value::Object(object)
}

fn write_parameter(parameter: &Parameter) -> Value {
    let mut object = Map::new();
    parameter.extensions.write_into(&mut object);
    insert_str(&mut object, "name", parameter.name());
    insert_str(&mut object, "in", parameter.parameter_in().as_str());
    insert_opt(&mut object, "description", &parameter.description);
    // Path parameters default to required, everything else to optional.
    if parameter.required && parameter.parameter_in() != ParameterIn::Path {
        object.insert("required".to_string(), Value::Bool(true));
    }
    insert_flag(&mut object, "deprecated", parameter.deprecated);
    insert_flag(&mut object, "allowEmptyValue", parameter.allow_empty_value);
    if parameter.style != parameter.parameter_in().default_style() {
        insert_str(&mut object, "style", parameter.style.as_str());
    }
    if parameter.explode != parameter.style.default_explode() {
        object.insert("explode".to_string(), Value::Bool(parameter.explode));
    }
    insert_flag(&mut object, "allowReserved", parameter.allow_reserved);
    if let Some(schema) = &parameter.schema {
        object.insert("schema".to_string(), write_ref_or(schema, write_schema));
    }
    if let Some(example) = &parameter.example {
        object.insert("example".to_string(), example.clone());
    }
    if !parameter.examples.is_empty() {
        object.insert("examples".to_string(), write_example_map(&parameter.examples));
    }
    if !parameter.content.is_empty() {
        object.insert("content".to_string(), write_content_map(&parameter.content));
    }
    Value::Object(object)
}

fn write_header(header: &Header) -> Value {
    let mut object = Map::new();
    header.extensions.write_into(&mut object);
    insert_opt(&mut object, "description", &header.description);
    insert_flag(&mut object, "required", header.required);
    insert_flag(&mut object, "deprecated", header.deprecated);
    if header.style != ParameterStyle::Simple {
        insert_str(&mut object, "style", header.style.as_str());
    }
    if header.explode != header.style.default_explode() {
        object.insert("explode".to_string(), Value::Bool(header.explode));
    }
    if let Some(schema) = &header.schema {
        object.insert("schema".to_string(), write_ref_or(schema, write_schema));
    }
    if let Some(example) = &header.example {
        object.insert("example".to_string(), example.clone());
    }
    if !header.examples.is_empty() {
        object.insert("examples".to_string(), write_example_map(&header.examples));
    }
    if !header.content.is_empty() {
        object.insert("content".to_string(), write_content_map(&header.content));
    }
    Value::Object(object)
}

fn write_request_body(body: &RequestBody) -> Value {
    let mut object = Map::new();
    body.extensions.write_into(&mut object);
    insert_opt(&mut object, "description", &body.description);
    if !body.content.is_empty() {
        object.insert("content".to_string(), write_content_map(&body.content));
    }
    insert_flag(&mut object, "required", body.required);
    Value::Object(object)
}

fn write_content_map(content: &indexmap::IndexMap<String, Content>) -> Value {
    let mut object = Map::new();
    for (media_type, content) in content {
        object.insert(media_type.clone(), write_content(content));
    }
    Value::Object(object)
}

fn write_content(content: &Content) -> Value {
    let mut object = Map::new();
    content.extensions.write_into(&mut object);
    if let Some(schema) = &content.schema {
        object.insert("schema".to_string(), write_ref_or(schema, write_schema));
    }
    if let Some(example) = &content.example {
        object.insert("example".to_string(), example.clone());
    }
    if !content.examples.is_empty() {
        object.insert("examples".to_string(), write_example_map(&content.examples));
    }
    if !content.encoding.is_empty() {
        let mut encoding = Map::new();
        for (property, value) in &content.encoding {
            encoding.insert(property.clone(), write_encoding(value));
        }
        object.insert("encoding".to_string(), Value::Object(encoding));
    }
    Value::Object(object)
}

fn write_encoding(encoding: &Encoding) -> Value {
    let mut object = Map::new();
    encoding.extensions.write_into(&mut object);
    if !encoding.content_type.is_empty() {
        insert_str(&mut object, "contentType", &encoding.content_type);
    }
    if !encoding.headers.is_empty() {
        let mut headers = Map::new();
        for (name, header) in &encoding.headers {
            headers.insert(name.clone(), write_ref_or(header, write_header));
        }
        object.insert("headers".to_string(), Value::Object(headers));
    }
    if let Some(style) = encoding.style {
        insert_str(&mut object, "style", style.as_str());
    }
    insert_flag(&mut object, "explode", encoding.explode);
    insert_flag(&mut object, "allowReserved", encoding.allow_reserved);
    Value::Object(object)
}

fn write_example_map(examples: &indexmap::IndexMap<String, RefOr<Example>>) -> Value {
    let mut object = Map::new();
    for (name, example) in examples {
        object.insert(name.clone(), write_ref_or(example, write_example));
    }
    Value::Object(object)
}

fn write_example(example: &Example) -> Value {
    let mut object = Map::new();
    example.extensions.write_into(&mut object);
    insert_opt(&mut object, "summary", &example.summary);
    insert_opt(&mut object, "description", &example.description);
    if let Some(value) = &example.value {
        object.insert("value".to_string(), value.clone());
    }
    insert_opt(&mut object, "externalValue", &example.external_value);
    Value::Object(object)
}

fn write_link(link: &Link) -> Value {
    let mut object = Map::new();
    link.extensions.write_into(&mut object);
    insert_opt(&mut object, "operationRef", &link.operation_ref);
    insert_opt(&mut object, "operationId", &link.operation_id);
    if !link.parameters.is_empty() {
        let mut parameters = Map::new();
        for (name, value) in &link.parameters {
            parameters.insert(name.clone(), value.clone());
        }
        object.insert("parameters".to_string(), Value::Object(parameters));
    }
    if let Some(request_body) = &link.request_body {
        object.insert("requestBody".to_string(), request_body.clone());
    }
    insert_opt(&mut object, "description", &link.description);
    if let Some(server) = &link.server {
        object.insert("server".to_string(), write_server(server));
    }
    Value::Object(object)
}

fn write_components(components: &Components) -> Value {
    let mut object = Map::new();
    components.extensions.write_into(&mut object);

    macro_rules! component_map {
        ( $key:literal, $source:ident, $write:expr ) => {
            if !components.$source.is_empty() {
                let mut entries = Map::new();
                for (name, entry) in &components.$source {
                    entries.insert(name.clone(), write_ref_or(entry, $write));
                }
                object.insert($key.to_string(), Value::Object(entries));
            }
        };
    }

    component_map!("schemas", schemas, write_schema);
    component_map!("responses", responses, write_response);
    component_map!("parameters", parameters, write_parameter);
    component_map!("examples", examples, write_example);
    component_map!("requestBodies", request_bodies, write_request_body);
    component_map!("headers", headers, write_header);
    component_map!("securitySchemes", security_schemes, write_security_scheme);
    component_map!("links", links, write_link);
    component_map!("callbacks", callbacks, write_callback);

    Value::Object(object)
}

fn write_security_scheme(scheme: &SecurityScheme) -> Value {
    let mut object = Map::new();
    scheme.extensions().write_into(&mut object);
    insert_str(&mut object, "type", scheme.scheme_type());
    match scheme {
        SecurityScheme::ApiKey(scheme) => write_api_key(scheme, &mut object),
        SecurityScheme::Http(scheme) => write_http(scheme, &mut object),
        SecurityScheme::OAuth2(scheme) => write_oauth2(scheme, &mut object),
        SecurityScheme::OpenIdConnect(scheme) => write_open_id_connect(scheme, &mut object),
    }
    Value::Object(object)
}

fn write_api_key(scheme: &ApiKey, object: &mut Map<String, Value>) {
    insert_str(object, "name", &scheme.name);
    insert_str(object, "in", scheme.api_key_in.as_str());
    insert_opt(object, "description", &scheme.description);
}

fn write_http(scheme: &Http, object: &mut Map<String, Value>) {
    insert_str(object, "scheme", &scheme.scheme);
    insert_opt(object, "bearerFormat", &scheme.bearer_format);
    insert_opt(object, "description", &scheme.description);
}

fn write_oauth2(scheme: &OAuth2, object: &mut Map<String, Value>) {
    object.insert("flows".to_string(), write_oauth_flows(&scheme.flows));
    insert_opt(object, "description", &scheme.description);
}

fn write_open_id_connect(scheme: &OpenIdConnect, object: &mut Map<String, Value>) {
    insert_str(object, "openIdConnectUrl", &scheme.open_id_connect_url);
    insert_opt(object, "description", &scheme.description);
}

fn write_oauth_flows(flows: &OAuthFlows) -> Value {
    let mut object = Map::new();
    if let Some(flow) = &flows.authorization_code {
        let mut entry = Map::new();
        flow.extensions.write_into(&mut entry);
        insert_str(&mut entry, "authorizationUrl", &flow.authorization_url);
        insert_str(&mut entry, "tokenUrl", &flow.token_url);
        insert_opt(&mut entry, "refreshUrl", &flow.refresh_url);
        entry.insert("scopes".to_string(), write_scopes(&flow.scopes));
        object.insert("authorizationCode".to_string(), Value::Object(entry));
    }
    if let Some(flow) = &flows.client_credentials {
        let mut entry = Map::new();
        flow.extensions.write_into(&mut entry);
        insert_str(&mut entry, "tokenUrl", &flow.token_url);
        insert_opt(&mut entry, "refreshUrl", &flow.refresh_url);
        entry.insert("scopes".to_string(), write_scopes(&flow.scopes));
        object.insert("clientCredentials".to_string(), Value::Object(entry));
    }
    if let Some(flow) = &flows.implicit {
        let mut entry = Map::new();
        flow.extensions.write_into(&mut entry);
        insert_str(&mut entry, "authorizationUrl", &flow.authorization_url);
        insert_opt(&mut entry, "refreshUrl", &flow.refresh_url);
        entry.insert("scopes".to_string(), write_scopes(&flow.scopes));
        object.insert("implicit".to_string(), Value::Object(entry));
    }
    if let Some(flow) = &flows.password {
        let mut entry = Map::new();
        flow.extensions.write_into(&mut entry);
        insert_str(&mut entry, "tokenUrl", &flow.token_url);
        insert_opt(&mut entry, "refreshUrl", &flow.refresh_url);
        entry.insert("scopes".to_string(), write_scopes(&flow.scopes));
        object.insert("password".to_string(), Value::Object(entry));
    }
    Value::Object(object)
}

/// Scopes are always present on a written flow, even when empty.
fn write_scopes(scopes: &indexmap::IndexMap<String, String>) -> Value {
    let mut object = Map::new();
    for (name, description) in scopes {
        insert_str(&mut object, name, description);
    }
    Value::Object(object)
}

fn write_security_requirement(requirement: &SecurityRequirement) -> Value {
    let mut object = Map::new();
    requirement.extensions.write_into(&mut object);
    for (name, scopes) in &requirement.schemes {
        object.insert(
            name.clone(),
            scopes.iter().map(|scope| Value::from(scope.as_str())).collect(),
        );
    }
    Value::Object(object)
}

fn write_tag(tag: &Tag) -> Value {
    let mut object = Map::new();
    tag.extensions.write_into(&mut object);
    insert_str(&mut object, "name", &tag.name);
    insert_opt(&mut object, "description", &tag.description);
    if let Some(external_docs) = &tag.external_docs {
        object.insert(
            "externalDocs".to_string(),
            write_external_docs(external_docs),
        );
    }
    Value::Object(object)
}

fn write_external_docs(docs: &ExternalDocs) -> Value {
    let mut object = Map::new();
    docs.extensions.write_into(&mut object);
    insert_str(&mut object, "url", &docs.url);
    insert_opt(&mut object, "description", &docs.description);
    Value::Object(object)
}

fn write_schema(schema: &Schema) -> Value {
    let mut object = Map::new();
    write_schema_common(schema.common(), &mut object);

    match schema {
        Schema::Boolean(schema) => {
            insert_str(&mut object, "type", "boolean");
            if !schema.enum_values.is_empty() {
                object.insert(
                    "enum".to_string(),
                    schema.enum_values.iter().copied().map(Value::from).collect(),
                );
            }
        }
        Schema::Object(schema) => {
            insert_str(&mut object, "type", "object");
            if !schema.required.is_empty() {
                object.insert(
                    "required".to_string(),
                    schema
                        .required
                        .iter()
                        .map(|name| Value::from(name.as_str()))
                        .collect(),
                );
            }
            if !schema.properties.is_empty() {
                let mut properties = Map::new();
                for (name, property) in &schema.properties {
                    properties.insert(name.clone(), write_ref_or(property, write_schema));
                }
                object.insert("properties".to_string(), Value::Object(properties));
            }
            match &schema.additional_properties {
                Some(AdditionalProperties::FreeForm(allowed)) => {
                    // `true` round-trips as absent, so only programmatic
                    // construction reaches the true branch.
                    object.insert("additionalProperties".to_string(), Value::Bool(*allowed));
                }
                Some(AdditionalProperties::Schema(additional)) => {
                    object.insert(
                        "additionalProperties".to_string(),
                        write_ref_or(additional, write_schema),
                    );
                }
                None => {}
            }
        }
        Schema::Array(schema) => {
            insert_str(&mut object, "type", "array");
            object.insert("items".to_string(), write_ref_or(&schema.items, write_schema));
        }
        Schema::Integer(schema) => {
            insert_str(&mut object, "type", "integer");
            write_number_bounds(schema, &mut object);
        }
        Schema::Number(schema) => {
            insert_str(&mut object, "type", "number");
            write_number_bounds(schema, &mut object);
        }
        Schema::String(schema) => {
            insert_str(&mut object, "type", "string");
            write_string_bounds(schema, &mut object);
        }
        Schema::AllOf(schema) => {
            object.insert(
                "allOf".to_string(),
                schema
                    .items
                    .iter()
                    .map(|item| write_ref_or(item, write_schema))
                    .collect(),
            );
        }
        Schema::AnyOf(schema) => {
            object.insert(
                "anyOf".to_string(),
                schema
                    .items
                    .iter()
                    .map(|item| write_ref_or(item, write_schema))
                    .collect(),
            );
        }
        Schema::OneOf(schema) => {
            object.insert(
                "oneOf".to_string(),
                schema
                    .items
                    .iter()
                    .map(|item| write_ref_or(item, write_schema))
                    .collect(),
            );
        }
        Schema::Not(schema) => {
            object.insert("not".to_string(), write_ref_or(&schema.schema, write_schema));
        }
    }

    Value::Object(object)
}

fn write_schema_common(common: &SchemaCommon, object: &mut Map<String, Value>) {
    common.extensions.write_into(object);
    insert_opt(object, "title", &common.title);
    insert_opt(object, "description", &common.description);
    insert_opt(object, "format", &common.format);
    insert_flag(object, "nullable", common.nullable);
    if let Some(default) = &common.default {
        object.insert("default".to_string(), default.clone());
    }
    if let Some(example) = &common.example {
        object.insert("example".to_string(), example.clone());
    }
}

fn write_number_bounds(schema: &NumberSchema, object: &mut Map<String, Value>) {
    insert_number(object, "minimum", &schema.minimum);
    insert_number(object, "maximum", &schema.maximum);
    insert_flag(object, "exclusiveMinimum", schema.exclusive_minimum);
    insert_flag(object, "exclusiveMaximum", schema.exclusive_maximum);
    insert_number(object, "multipleOf", &schema.multiple_of);
    if !schema.enum_values.is_empty() {
        object.insert(
            "enum".to_string(),
            schema.enum_values.iter().copied().map(number_value).collect(),
        );
    }
}

fn write_string_bounds(schema: &StringSchema, object: &mut Map<String, Value>) {
    if let Some(min_length) = schema.min_length {
        object.insert("minLength".to_string(), Value::from(min_length));
    }
    if let Some(max_length) = schema.max_length {
        object.insert("maxLength".to_string(), Value::from(max_length));
    }
    insert_opt(object, "pattern", &schema.pattern);
    if !schema.enum_values.is_empty() {
        object.insert(
            "enum".to_string(),
            schema
                .enum_values
                .iter()
                .map(|value| Value::from(value.as_str()))
                .collect(),
        );
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ContentBuilder, HeaderBuilder, ObjectSchema, OperationBuilder, ResponseBuilder};

    #[test]
    fn barebones_document_written() {
        let api = OpenApi::new(Info::new("Pets", "1.0.0"), Paths::new());

        assert_eq!(
            write_document(&api),
            json!({
                "openapi": "3.0.3",
                "info": { "title": "Pets", "version": "1.0.0" },
                "paths": {}
            })
        );
    }

    #[test]
    fn unlicensed_license_elided() {
        let mut info = Info::new("Pets", "1.0.0");
        info.license = Some(License::new(UNLICENSED));
        assert_eq!(
            write_info(&info),
            json!({ "title": "Pets", "version": "1.0.0" })
        );

        info.license = Some(License::new("MIT"));
        assert_eq!(
            write_info(&info),
            json!({
                "title": "Pets",
                "version": "1.0.0",
                "license": { "name": "MIT" }
            })
        );
    }

    #[test]
    fn parameter_defaults_omitted() {
        let parameter = Parameter::query("limit");
        assert_eq!(
            write_parameter(&parameter),
            json!({ "name": "limit", "in": "query" })
        );

        let parameter = Parameter::query("tags").with_style(ParameterStyle::PipeDelimited);
        assert_eq!(
            write_parameter(&parameter),
            json!({ "name": "tags", "in": "query", "style": "pipeDelimited" })
        );

        let parameter = Parameter::query("limit").with_explode(false);
        assert_eq!(
            write_parameter(&parameter),
            json!({ "name": "limit", "in": "query", "explode": false })
        );
    }

    #[test]
    fn path_parameter_required_omitted() {
        let parameter = Parameter::path("id");
        assert!(parameter.required);
        assert_eq!(
            write_parameter(&parameter),
            json!({ "name": "id", "in": "path" })
        );
    }

    #[test]
    fn responses_codes_before_default() {
        let responses = crate::ResponsesBuilder::new()
            .default_response(Response::new("fallback"))
            .response("200", Response::new("ok"))
            .response("404", Response::new("missing"))
            .build();

        let written = write_responses(&responses);
        let keys: Vec<&String> = written.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["200", "404", "default"]);
    }

    #[test]
    fn integral_bounds_written_as_integers() {
        let mut schema = NumberSchema::new();
        schema.minimum = Some(0.0);
        schema.maximum = Some(1.5);
        let written = write_schema(&Schema::Integer(schema));

        assert_eq!(written, json!({ "type": "integer", "minimum": 0, "maximum": 1.5 }));
    }

    #[test]
    fn oauth_scopes_always_present() {
        let flows = OAuthFlows::new()
            .with_client_credentials(crate::ClientCredentials::new("https://auth/token"));
        let written = write_oauth_flows(&flows);

        assert_eq!(
            written,
            json!({
                "clientCredentials": {
                    "tokenUrl": "https://auth/token",
                    "scopes": {}
                }
            })
        );
    }

    #[test]
    fn header_style_default_omitted() {
        let header = HeaderBuilder::new()
            .schema(Some(ObjectSchema::new()))
            .build();
        let written = write_header(&header);

        assert_eq!(written, json!({ "schema": { "type": "object" } }));
    }

    #[test]
    fn operation_writes_responses_always() {
        let operation = OperationBuilder::new()
            .response(
                "200",
                ResponseBuilder::new()
                    .description("ok")
                    .content("application/json", ContentBuilder::new().build())
                    .build(),
            )
            .build();

        assert_eq!(
            write_operation(&operation),
            json!({
                "responses": {
                    "200": { "description": "ok", "content": { "application/json": {} } }
                }
            })
        );
    }
}

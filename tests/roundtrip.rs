//! Parse→write fixtures: a document built from JSON must serialize back to
//! the same JSON.

use assert_json_diff::assert_json_eq;
use openapi_model::{Error, OpenApi};
use serde_json::{json, Value};

fn roundtrip(value: Value) -> OpenApi {
    let api = OpenApi::from_value(&value).unwrap();
    assert_json_eq!(api.to_value(), value);
    api
}

#[test]
fn barebones_document() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "paths": {}
    }));
}

#[test]
fn info_block_with_contact_and_license() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Pet Store",
            "version": "2.4.1",
            "description": "Manage pets",
            "termsOfService": "https://example.com/terms",
            "contact": { "name": "API Team", "email": "api@example.com" },
            "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" }
        },
        "paths": {}
    }));
}

#[test]
fn nested_compositions() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "components": {
            "schemas": {
                "Pet": {
                    "allOf": [
                        { "$ref": "#/components/schemas/Animal" },
                        {
                            "type": "object",
                            "required": ["name"],
                            "properties": {
                                "name": { "type": "string", "minLength": 1 }
                            }
                        }
                    ]
                },
                "Filter": {
                    "oneOf": [
                        {
                            "anyOf": [
                                { "type": "string" },
                                { "type": "integer", "minimum": 0 }
                            ]
                        },
                        { "not": { "type": "boolean" } }
                    ]
                },
                "Animal": {
                    "type": "object",
                    "properties": {
                        "kind": { "type": "string", "enum": ["cat", "dog"] }
                    },
                    "additionalProperties": false
                }
            }
        },
        "paths": {}
    }));
}

#[test]
fn references_substitute_for_nodes() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "components": {
            "schemas": {
                "Pet": {
                    "type": "object",
                    "properties": {
                        "tag": { "$ref": "#/components/schemas/Tag" }
                    }
                },
                "Tag": { "type": "string" }
            },
            "parameters": {
                "Limit": {
                    "name": "limit",
                    "in": "query",
                    "schema": { "type": "integer", "minimum": 1, "maximum": 100 }
                }
            },
            "responses": {
                "NotFound": { "description": "resource missing" }
            }
        },
        "paths": {
            "/pets": {
                "get": {
                    "parameters": [
                        { "$ref": "#/components/parameters/Limit" }
                    ],
                    "responses": {
                        "200": {
                            "description": "a list of pets",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Pet" }
                                    }
                                }
                            }
                        },
                        "404": { "$ref": "#/components/responses/NotFound" }
                    }
                }
            }
        }
    }));
}

#[test]
fn all_four_oauth_flows() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "components": {
            "securitySchemes": {
                "oauth": {
                    "type": "oauth2",
                    "description": "Account access",
                    "flows": {
                        "authorizationCode": {
                            "authorizationUrl": "https://auth.example.com/authorize",
                            "tokenUrl": "https://auth.example.com/token",
                            "refreshUrl": "https://auth.example.com/refresh",
                            "scopes": { "read": "read access", "write": "write access" }
                        },
                        "clientCredentials": {
                            "tokenUrl": "https://auth.example.com/token",
                            "scopes": {}
                        },
                        "implicit": {
                            "authorizationUrl": "https://auth.example.com/authorize",
                            "scopes": { "read": "read access" }
                        },
                        "password": {
                            "tokenUrl": "https://auth.example.com/token",
                            "scopes": {}
                        }
                    }
                },
                "apiKey": {
                    "type": "apiKey",
                    "name": "X-Api-Key",
                    "in": "header"
                },
                "bearer": {
                    "type": "http",
                    "scheme": "bearer",
                    "bearerFormat": "JWT"
                },
                "oidc": {
                    "type": "openIdConnect",
                    "openIdConnectUrl": "https://auth.example.com/.well-known/openid-configuration"
                }
            }
        },
        "paths": {},
        "security": [ { "oauth": ["read"] } ]
    }));
}

#[test]
fn case_differing_duplicate_headers_rejected() {
    let err = OpenApi::from_value(&json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {
                            "description": "ok",
                            "headers": {
                                "X-Rate-Limit": { "schema": { "type": "integer" } },
                                "x-rate-limit": { "schema": { "type": "integer" } }
                            }
                        }
                    }
                }
            }
        }
    }))
    .unwrap_err();

    assert!(matches!(err, Error::DuplicateResponseHeader(name) if name == "x-rate-limit"));
}

#[test]
fn content_type_header_dropped_and_names_lowercased() {
    let api = OpenApi::from_value(&json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {
                            "description": "ok",
                            "headers": {
                                "Content-Type": { "schema": { "type": "string" } },
                                "X-Next": { "schema": { "type": "string" } }
                            }
                        }
                    }
                }
            }
        }
    }))
    .unwrap();

    assert_json_eq!(
        api.to_value(),
        json!({
            "openapi": "3.0.3",
            "info": { "title": "Pet Store", "version": "1.0.0" },
            "paths": {
                "/pets": {
                    "get": {
                        "responses": {
                            "200": {
                                "description": "ok",
                                "headers": {
                                    "x-next": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn explode_default_matrix() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "paths": {
            "/pets/{id}": {
                "get": {
                    "parameters": [
                        { "name": "id", "in": "path", "style": "label",
                          "schema": { "type": "string" } },
                        { "name": "tags", "in": "query", "explode": false,
                          "schema": { "type": "array", "items": { "type": "string" } } },
                        { "name": "sort", "in": "query", "style": "pipeDelimited",
                          "schema": { "type": "array", "items": { "type": "string" } } },
                        { "name": "X-Trace", "in": "header", "explode": true,
                          "schema": { "type": "string" } },
                        { "name": "session", "in": "cookie",
                          "schema": { "type": "string" } }
                    ],
                    "responses": {
                        "204": { "description": "no content" }
                    }
                }
            }
        }
    }));
}

#[test]
fn extension_fields_survive_everywhere() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "x-audience": "internal",
        "info": {
            "title": "Pet Store",
            "version": "1.0.0",
            "x-build": 42
        },
        "components": {
            "x-generated": true,
            "schemas": {
                "Pet": {
                    "type": "object",
                    "x-table": "pets",
                    "properties": {
                        "tag": { "$ref": "#/components/schemas/Tag", "x-lazy": true }
                    }
                },
                "Tag": { "type": "string" }
            }
        },
        "paths": {
            "x-router": "v2",
            "/pets": {
                "x-owner": "pets-team",
                "get": {
                    "x-rate-limit": 100,
                    "responses": {
                        "200": { "description": "ok", "x-cache": "5m" }
                    }
                }
            }
        }
    }));
}

#[test]
fn servers_request_bodies_links_and_callbacks() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "servers": [
            {
                "url": "https://{region}.api.example.com",
                "description": "Regional endpoint",
                "variables": {
                    "region": {
                        "default": "eu",
                        "enum": ["eu", "us"],
                        "description": "Deployment region"
                    }
                }
            }
        ],
        "paths": {
            "/subscriptions": {
                "post": {
                    "operationId": "subscribe",
                    "requestBody": {
                        "description": "Callback registration",
                        "required": true,
                        "content": {
                            "multipart/form-data": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "callbackUrl": { "type": "string" }
                                    }
                                },
                                "encoding": {
                                    "callbackUrl": {
                                        "contentType": "text/plain",
                                        "style": "form",
                                        "explode": true
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "subscribed",
                            "links": {
                                "unsubscribe": {
                                    "operationId": "unsubscribe",
                                    "parameters": { "id": "$response.body#/id" },
                                    "description": "Cancel this subscription"
                                }
                            }
                        }
                    },
                    "callbacks": {
                        "onEvent": {
                            "{$request.body#/callbackUrl}": {
                                "post": {
                                    "responses": {
                                        "200": { "description": "acknowledged" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "tags": [
            {
                "name": "subscriptions",
                "description": "Event subscriptions",
                "externalDocs": { "url": "https://example.com/docs/events" }
            }
        ],
        "externalDocs": {
            "url": "https://example.com/docs",
            "description": "Full documentation"
        }
    }));
}

#[test]
fn additional_properties_true_collapses_to_absent() {
    let api = OpenApi::from_value(&json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "components": {
            "schemas": {
                "Open": { "type": "object", "additionalProperties": true },
                "Closed": { "type": "object", "additionalProperties": false }
            }
        },
        "paths": {}
    }))
    .unwrap();

    assert_json_eq!(
        api.to_value(),
        json!({
            "openapi": "3.0.3",
            "info": { "title": "Pet Store", "version": "1.0.0" },
            "components": {
                "schemas": {
                    "Open": { "type": "object" },
                    "Closed": { "type": "object", "additionalProperties": false }
                }
            },
            "paths": {}
        })
    );
}

#[test]
fn deprecated_operation_and_operation_security() {
    roundtrip(json!({
        "openapi": "3.0.3",
        "info": { "title": "Pet Store", "version": "1.0.0" },
        "paths": {
            "/pets": {
                "delete": {
                    "deprecated": true,
                    "security": [ { "apiKey": [] } ],
                    "responses": {
                        "default": { "description": "gone" }
                    }
                }
            }
        }
    }));
}

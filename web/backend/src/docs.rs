use crate::models::{
    FILE_SUCCESS_DESCRIPTION, MISSING_FILE_DESCRIPTION, MISSING_TEXT_DESCRIPTION,
    TEXT_SUCCESS_DESCRIPTION,
};
use axum::{
    Json,
    http::{HeaderMap, header::HOST},
    response::Html,
};
use serde_json::{Value, json};

pub const DOCS_TITLE: &str = "API Documentation for Data Processing and Modeling";
pub const DOCS_VERSION: &str = "1.0.0";
pub const DOCS_JSON_PATH: &str = "/docs.json";
pub const DOCS_UI_PATH: &str = "/docs/";

const DOCS_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>API Documentation for Data Processing and Modeling</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <noscript><a href="/docs.json">API document (JSON)</a></noscript>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/docs.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// Swagger 2.0 description of the cleansing endpoints.
///
/// `host` follows the `Host` header of the request asking for the document.
pub fn api_document(host: Option<&str>) -> Value {
    let mut document = json!({
        "swagger": "2.0",
        "info": {
            "title": DOCS_TITLE,
            "version": DOCS_VERSION,
            "description": "API documentation for data processing and modeling",
        },
        "produces": ["application/json"],
        "definitions": {
            "Envelope": {
                "type": "object",
                "required": ["status_code", "description"],
                "properties": {
                    "status_code": { "type": "integer" },
                    "description": { "type": "string" },
                },
            },
        },
        "paths": {
            "/text-processing": {
                "get": {
                    "tags": ["Text Processing"],
                    "summary": "Cleanse a single text",
                    "parameters": [{
                        "name": "add_text",
                        "in": "query",
                        "type": "string",
                        "required": true,
                        "description": "Text to cleanse",
                    }],
                    "responses": {
                        "200": {
                            "description": TEXT_SUCCESS_DESCRIPTION,
                            "schema": envelope_schema(json!({ "type": "string" })),
                        },
                        "400": {
                            "description": MISSING_TEXT_DESCRIPTION,
                            "schema": { "$ref": "#/definitions/Envelope" },
                        },
                    },
                },
            },
            "/file-processing": {
                "post": {
                    "tags": ["File Processing"],
                    "summary": "Cleanse every row of a single-column CSV file",
                    "consumes": ["multipart/form-data"],
                    "parameters": [{
                        "name": "file",
                        "in": "formData",
                        "type": "file",
                        "required": true,
                        "description": "Header-less CSV with one text column",
                    }],
                    "responses": {
                        "200": {
                            "description": FILE_SUCCESS_DESCRIPTION,
                            "schema": envelope_schema(json!({
                                "type": "array",
                                "items": { "type": "string" },
                            })),
                        },
                        "400": {
                            "description": MISSING_FILE_DESCRIPTION,
                            "schema": { "$ref": "#/definitions/Envelope" },
                        },
                    },
                },
            },
        },
    });

    if let (Some(host), Some(object)) = (host, document.as_object_mut()) {
        object.insert("host".to_string(), Value::String(host.to_string()));
    }

    document
}

fn envelope_schema(data: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "status_code": { "type": "integer" },
            "description": { "type": "string" },
            "data": data,
        },
    })
}

pub async fn api_docs(headers: HeaderMap) -> Json<Value> {
    let host = headers.get(HOST).and_then(|value| value.to_str().ok());
    Json(api_document(host))
}

/// Interactive Swagger UI page that renders `/docs.json`.
pub async fn api_docs_ui() -> Html<&'static str> {
    Html(DOCS_UI_PAGE)
}

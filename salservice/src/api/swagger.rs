use serde_json::{json, Value};

use crate::SERVICE_NAME;

/// Minimal Swagger UI page; the document itself is served from
/// `/static/swagger.json`.
pub const UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <title>Canias Table Query API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/static/swagger.json",
                dom_id: "#swagger-ui",
            });
        };
    </script>
</body>
</html>
"##;

/// OpenAPI 2.0 document for the service.
pub fn openapi_document() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": SERVICE_NAME,
            "description": "A simple RESTful API exposing filtered reads over PostgreSQL",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "basePath": "/",
        "schemes": ["http", "https"],
        "paths": {
            "/health": {
                "get": {
                    "summary": "Health check",
                    "produces": ["application/json"],
                    "responses": {
                        "200": {"description": "Database reachable"},
                        "500": {"description": "Database unreachable"},
                    },
                }
            },
            "/api/info": {
                "get": {
                    "summary": "API information",
                    "produces": ["application/json"],
                    "responses": {
                        "200": {"description": "Successful operation"},
                    },
                }
            },
            "/api/salservice": {
                "post": {
                    "summary": "Query database table with filters",
                    "produces": ["application/json"],
                    "consumes": ["application/json"],
                    "parameters": [
                        {
                            "in": "body",
                            "name": "body",
                            "description": "Query parameters",
                            "required": true,
                            "schema": {"$ref": "#/definitions/SalServiceParams"},
                        }
                    ],
                    "responses": {
                        "200": {"description": "Successful operation"},
                        "400": {"description": "Bad request"},
                        "500": {"description": "Server error"},
                    },
                }
            },
        },
        "definitions": {
            "SalServiceParams": {
                "type": "object",
                "required": ["TABLE"],
                "properties": {
                    "TABLE": {
                        "type": "string",
                        "description": "Table name to query (must be on the allow-list)",
                    },
                    "USERNAME": {"type": "string"},
                    "PASSWORD": {"type": "string"},
                    "DOCTYPE": {"type": "string"},
                    "DOCNUM": {"type": "string"},
                    "DOCITEM": {"type": "string"},
                    "CUSTOMER": {"type": "string"},
                    "CUSTNAME": {"type": "string"},
                    "MATERIAL": {"type": "string"},
                    "QUANTITY": {"type": "string"},
                },
            }
        },
    })
}

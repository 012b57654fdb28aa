//! API Documentation Routes
//!
//! Serves the OpenAPI 3.0 description of the books API at `/api-docs`.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Path of the documentation endpoint
pub const DOCS_PATH: &str = "/api-docs";

/// Documentation routes
pub fn docs_routes() -> Router {
    Router::new().route(DOCS_PATH, get(docs_handler))
}

async fn docs_handler() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI document for the books API
pub fn openapi_document() -> Value {
    let book_ref = json!({ "$ref": "#/components/schemas/Book" });
    let id_param = json!({ "$ref": "#/components/parameters/idParam" });
    let book_body = json!({
        "required": true,
        "content": {
            "application/json": { "schema": book_ref },
            "application/x-www-form-urlencoded": { "schema": book_ref }
        }
    });
    let book_response = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": book_ref } }
        })
    };

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Library API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A simple library API over a JSON file store"
        },
        "tags": [
            { "name": "Books", "description": "The books managing API" }
        ],
        "paths": {
            "/books": {
                "get": {
                    "summary": "Returns the list of all the books",
                    "tags": ["Books"],
                    "responses": {
                        "200": {
                            "description": "The list of the books",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": book_ref }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a new book",
                    "tags": ["Books"],
                    "requestBody": book_body,
                    "responses": {
                        "200": book_response("The book was successfully created"),
                        "500": { "description": "The book could not be saved" }
                    }
                }
            },
            "/books/{id}": {
                "get": {
                    "summary": "Get the book by id",
                    "tags": ["Books"],
                    "parameters": [id_param],
                    "responses": {
                        "200": book_response("The book description by id"),
                        "404": { "description": "The book was not found" }
                    }
                },
                "put": {
                    "summary": "Update the book by the id",
                    "tags": ["Books"],
                    "parameters": [id_param],
                    "requestBody": book_body,
                    "responses": {
                        "200": book_response("The book was updated"),
                        "404": { "description": "The book was not found" },
                        "500": { "description": "The book could not be saved" }
                    }
                },
                "delete": {
                    "summary": "Remove the book by id",
                    "tags": ["Books"],
                    "parameters": [id_param],
                    "responses": {
                        "200": { "description": "The book was deleted" },
                        "404": { "description": "The book was not found" }
                    }
                }
            }
        },
        "components": {
            "parameters": {
                "idParam": {
                    "name": "id",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "string" },
                    "description": "The book id"
                }
            },
            "schemas": {
                "Book": {
                    "type": "object",
                    "required": ["title", "author"],
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "The auto generated id of the book"
                        },
                        "title": { "type": "string", "description": "The book title" },
                        "author": { "type": "string", "description": "The book author" }
                    },
                    "example": {
                        "id": "sSfE_as2",
                        "title": "The New Turing Age",
                        "author": "Uche Ndife"
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_operation() {
        let doc = openapi_document();
        let paths = &doc["paths"];

        for method in ["get", "post"] {
            assert!(paths["/books"][method].is_object(), "missing {method} /books");
        }
        for method in ["get", "put", "delete"] {
            assert!(paths["/books/{id}"][method].is_object(), "missing {method} /books/{{id}}");
        }
    }

    #[test]
    fn test_book_body_accepts_json_and_form() {
        let doc = openapi_document();
        let content = &doc["paths"]["/books"]["post"]["requestBody"]["content"];
        assert!(content["application/json"].is_object());
        assert!(content["application/x-www-form-urlencoded"].is_object());
    }

    #[test]
    fn test_book_schema_fields() {
        let doc = openapi_document();
        let props = &doc["components"]["schemas"]["Book"]["properties"];
        assert!(props["id"].is_object());
        assert!(props["title"].is_object());
        assert!(props["author"].is_object());
    }
}

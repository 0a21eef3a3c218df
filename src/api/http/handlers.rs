// src/api/http/handlers.rs
// Catalog HTTP handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use chrono::Utc;
use serde_json::{Map, Value, json};

use super::router::API_PREFIX;
use crate::api::error::ApiResult;
use crate::api::types::{HealthResponse, MessageResponse, StatusResponse};
use crate::catalog::{Item, ItemId};
use crate::state::{AppState, FRAMEWORK_NAME};

/// Root endpoint: welcome message
pub async fn root_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Welcome to {}!", state.info.title)))
}

/// Simple greeting
pub async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from papi on /papi/hello!"))
}

/// Service status
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "OK".to_string(),
        version: state.info.version.clone(),
        framework: FRAMEWORK_NAME.to_string(),
    })
}

/// Health check handler
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.info.version.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn json_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": {"$ref": format!("#/components/schemas/{}", schema)}
            }
        }
    })
}

fn openapi_paths() -> Value {
    let mut paths = Map::new();

    paths.insert(
        API_PREFIX.to_string(),
        json!({"get": {"summary": "Welcome message", "responses": {"200": json_response("Successful Response", "Message")}}}),
    );
    paths.insert(
        format!("{}/hello", API_PREFIX),
        json!({"get": {"summary": "Greeting", "responses": {"200": json_response("Successful Response", "Message")}}}),
    );
    paths.insert(
        format!("{}/status", API_PREFIX),
        json!({"get": {"summary": "Service status", "responses": {"200": json_response("Successful Response", "Status")}}}),
    );

    let item_id_param = json!({
        "name": "item_id",
        "in": "path",
        "required": true,
        "schema": {"type": "integer"}
    });
    paths.insert(
        format!("{}/items/{{item_id}}", API_PREFIX),
        json!({
            "get": {
                "summary": "Get an item by id",
                "parameters": [item_id_param],
                "responses": {
                    "200": json_response("Successful Response", "Item"),
                    "404": json_response("Item not found", "Error"),
                    "422": json_response("Validation Error", "Error")
                }
            }
        }),
    );

    let item_body = json!({
        "required": true,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Item"}}}
    });
    paths.insert(
        format!("{}/items/", API_PREFIX),
        json!({
            "post": {
                "summary": "Create an item",
                "requestBody": item_body,
                "responses": {
                    "200": json_response("Successful Response", "Item"),
                    "400": json_response("Item with this ID already exists", "Error"),
                    "422": json_response("Validation Error", "Error")
                }
            }
        }),
    );

    Value::Object(paths)
}

fn openapi_schemas() -> Value {
    let item = json!({
        "type": "object",
        "required": ["id", "name", "price"],
        "properties": {
            "id": {"type": "integer"},
            "name": {"type": "string"},
            "description": {"type": ["string", "null"]},
            "price": {"type": "number"},
            "tax": {"type": ["number", "null"]}
        }
    });
    let message = json!({
        "type": "object",
        "required": ["message"],
        "properties": {"message": {"type": "string"}}
    });
    let status = json!({
        "type": "object",
        "required": ["status", "version", "framework"],
        "properties": {
            "status": {"type": "string"},
            "version": {"type": "string"},
            "framework": {"type": "string"}
        }
    });
    let error = json!({
        "type": "object",
        "properties": {
            "error": {"type": "boolean"},
            "message": {"type": "string"},
            "detail": {"type": "string"},
            "status": {"type": "integer"},
            "error_code": {"type": "string"}
        }
    });

    json!({"Item": item, "Message": message, "Status": status, "Error": error})
}

/// OpenAPI document for the catalog routes, carrying the service metadata
pub async fn openapi_handler(State(state): State<AppState>) -> Json<Value> {
    let info = json!({
        "title": state.info.title,
        "description": state.info.description,
        "version": state.info.version
    });

    Json(json!({
        "openapi": "3.1.0",
        "info": info,
        "paths": openapi_paths(),
        "components": {"schemas": openapi_schemas()}
    }))
}

pub async fn get_item_handler(
    State(state): State<AppState>,
    item_id: Result<Path<ItemId>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let Path(item_id) = item_id?;
    let item = state.store.get(item_id).await?;
    Ok(Json(item))
}

pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Json(item) = payload?;
    let created = state.store.insert(item).await?;
    Ok(Json(created))
}

use utoipa::OpenApi;
use crate::models::*;

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All stored items", body = [Item]),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Fetch an item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_item_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Rename an item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item id")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemUpdatedResponse),
        (status = 400, description = "Missing 'name' field or malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = ItemDeletedResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
        ready_check_doc,
        list_items_doc,
        get_item_doc,
        create_item_doc,
        update_item_doc,
        delete_item_doc,
    ),
    components(
        schemas(HealthResponse, ErrorResponse, Item, ItemPayload, ItemUpdatedResponse, ItemDeletedResponse)
    ),
    tags(
        (name = "items", description = "Item CRUD endpoints")
    )
)]
pub struct ApiDoc;

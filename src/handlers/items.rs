use crate::{
    db::SharedStore,
    models::{ErrorResponse, Item, ItemDeletedResponse, ItemPayload, ItemUpdatedResponse},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info, warn};

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const MISSING_NAME: &str = "Missing 'name' field";
pub const SERVER_ERROR_JSON: &str = "Server error";
pub const SERVER_ERROR_TEXT: &str = "Server Error";
pub const BAD_REQUEST_TEXT: &str = "Bad Request";
pub const MALFORMED_BODY: &str = "Malformed JSON body";
pub const ITEM_UPDATED: &str = "Item updated successfully";
pub const ITEM_DELETED: &str = "Item deleted successfully";

type JsonError = (StatusCode, Json<ErrorResponse>);
type TextError = (StatusCode, &'static str);

fn not_found() -> JsonError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(ITEM_NOT_FOUND)))
}

/// Unwrap the request body.
///
/// Broken JSON is refused. A body that is missing, not declared as JSON or not
/// an object reads as an empty payload, so `name` is simply absent.
fn read_payload(payload: Result<Json<ItemPayload>, JsonRejection>) -> Option<ItemPayload> {
    match payload {
        Ok(Json(payload)) => Some(payload),
        Err(JsonRejection::JsonSyntaxError(e)) => {
            warn!("Rejecting malformed JSON body: {}", e);
            None
        }
        Err(e) => {
            debug!("Ignoring request body: {}", e);
            Some(ItemPayload::default())
        }
    }
}

fn server_error() -> JsonError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(SERVER_ERROR_JSON)),
    )
}

/// List every item
pub async fn list_items(
    State(store): State<SharedStore>,
) -> Result<(StatusCode, Json<Vec<Item>>), TextError> {
    match store.list_items().await {
        Ok(items) => {
            debug!("Listing {} items", items.len());
            Ok((StatusCode::OK, Json(items)))
        }
        Err(e) => {
            error!("Failed to list items: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_TEXT))
        }
    }
}

/// Fetch a single item by id
pub async fn get_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Item>), JsonError> {
    match store.find_item(&id).await {
        Ok(Some(item)) => Ok((StatusCode::OK, Json(item))),
        Ok(None) => {
            debug!("Item '{}' not found", id);
            Err(not_found())
        }
        Err(e) => {
            error!("Error fetching item '{}': {}", id, e);
            Err(server_error())
        }
    }
}

/// Create a new item.
///
/// The name is handed to storage as sent; a missing name is rejected by the
/// column's not-null constraint and answered as a server error.
pub async fn create_item(
    State(store): State<SharedStore>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), TextError> {
    let payload = read_payload(payload).ok_or((StatusCode::BAD_REQUEST, BAD_REQUEST_TEXT))?;

    match store.insert_item(payload.bound_name().as_deref()).await {
        Ok(item) => Ok((StatusCode::OK, Json(item))),
        Err(e) => {
            error!("Failed to create item: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_TEXT))
        }
    }
}

/// Rename an item
pub async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemUpdatedResponse>), JsonError> {
    let payload = match read_payload(payload) {
        Some(payload) => payload,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(MALFORMED_BODY)),
            ));
        }
    };

    let name = match payload.present_name() {
        Some(name) => name,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(MISSING_NAME)),
            ));
        }
    };

    match store.update_item(&id, &name).await {
        Ok(Some(item)) => {
            info!("Item '{}' renamed", id);
            Ok((
                StatusCode::OK,
                Json(ItemUpdatedResponse {
                    message: ITEM_UPDATED.to_string(),
                    item,
                }),
            ))
        }
        Ok(None) => Err(not_found()),
        Err(e) => {
            error!("Error updating item '{}': {}", id, e);
            Err(server_error())
        }
    }
}

/// Delete an item by id
pub async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ItemDeletedResponse>), JsonError> {
    match store.delete_item(&id).await {
        Ok(Some(item)) => {
            info!("Item '{}' deleted", id);
            Ok((
                StatusCode::OK,
                Json(ItemDeletedResponse {
                    message: ITEM_DELETED.to_string(),
                    deleted_item: item,
                }),
            ))
        }
        Ok(None) => Err(not_found()),
        Err(e) => {
            error!("Error deleting item '{}': {}", id, e);
            Err(server_error())
        }
    }
}

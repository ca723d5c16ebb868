use crate::{
    db::SharedStore,
    handlers::{create_item, delete_item, get_item, health_check, list_items, ready_check, root, update_item},
};
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes(store: SharedStore) -> Router {
    Router::<SharedStore>::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(store)
}

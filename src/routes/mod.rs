pub mod api;

pub use api::create_api_routes;

use crate::{db::SharedStore, docs::ApiDoc};
use axum::Router;
use tower::Layer;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// The router behind trailing-slash normalization
pub type App = NormalizePath<Router>;

/// Assemble the full application: API routes, Swagger UI, tracing and CORS.
///
/// Trailing slashes are trimmed before routing, so `/items/` is `/items`.
pub fn create_app(store: SharedStore) -> App {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .merge(create_api_routes(store))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Must wrap the router: a layer added with `Router::layer` runs after routing
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

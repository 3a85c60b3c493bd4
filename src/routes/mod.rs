//! Router assembly.

pub mod common;
pub mod docs;
pub mod users;

pub use common::common_routes;
pub use docs::docs_routes;
pub use users::user_routes;

use crate::config::{CorsOrigins, ServiceConfig};
use crate::state::AppState;
use crate::store::UserStore;
use axum::http::{header, Method};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application over `store`: common and user routes, docs when enabled, CORS for the
/// configured origins, request tracing and a body size limit.
pub fn app(store: Arc<dyn UserStore>, config: &ServiceConfig) -> Router {
    let state = AppState::new(store, config.status_profile);
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(user_routes(state));
    if config.enable_docs {
        router = router.merge(docs_routes());
    }
    if let Some(cors) = cors_layer(&config.cors_allowed_origins) {
        router = router.layer(cors);
    }
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.body_limit_bytes)),
    )
}

/// None when no origin is allowed; the API is then same-origin only.
fn cors_layer(origins: &CorsOrigins) -> Option<CorsLayer> {
    let allow_origin = match origins {
        CorsOrigins::Any => {
            tracing::warn!("CORS: all origins allowed");
            AllowOrigin::any()
        }
        CorsOrigins::List(list) if list.is_empty() => return None,
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };
    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

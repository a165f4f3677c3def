mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::registry::ActivityRegistry;

pub fn create_router(registry: ActivityRegistry) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{activity_name}/signup", post(handlers::signup))
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::unregister),
        )
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(registry)
}

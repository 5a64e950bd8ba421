use std::time::Duration;

use axum::Router;
use axum::extract::MatchedPath;
use axum::middleware;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::infrastructure::db::PgPool;

pub mod books;
pub mod health;
pub mod openapi;
pub mod response;

/// Full HTTP surface: book routes, health, Swagger UI, plus the timeout and trace layers.
pub fn router(ctx: AppContext, pool: PgPool) -> Router {
    let timeout = Duration::from_secs(ctx.cfg.request_timeout_secs);
    Router::new()
        .merge(health::routes(pool))
        .merge(books::routes(ctx))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .fallback(response::route_not_found)
        .layer(TimeoutLayer::new(timeout))
        // outside the timeout so the bare 408 gets wrapped too
        .layer(middleware::map_response(response::wrap_bare_errors))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

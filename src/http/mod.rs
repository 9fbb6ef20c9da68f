//! JSON HTTP surface over posts.

pub mod error;
mod posts;

pub use posts::{PostBody, PostIndexParams, PostPageBody};

use crate::config::Config;
use crate::error::AppError;
use crate::infra::DbPool;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub pool: DbPool,
    pub per_page: u32,
}

impl AppState {
    pub fn new(pool: DbPool, per_page: u32) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, per_page }),
        }
    }

    /// Run blocking SQLite work off the async executor.
    async fn blocking<T, F>(&self, f: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&AppStateInner) -> Result<T, AppError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&inner))
            .await
            .map_err(|e| AppError::Db(format!("database task failed: {}", e)))?
    }
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let res = next.run(req).await;
    log::info!(
        "{} {} -> {} ({} ms)",
        method,
        uri,
        res.status().as_u16(),
        started.elapsed().as_millis()
    );
    res
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(posts::index))
        .route("/posts", get(posts::index))
        .route("/posts/:id", get(posts::show))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config, pool: DbPool) -> Result<(), AppError> {
    let app = build_router(AppState::new(pool, config.per_page));
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Listening on {}", config.addr());
    axum::serve(listener, app).await?;
    Ok(())
}

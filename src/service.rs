use anyhow::{bail, Context, Result};
use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{delete_handler, get_handler, set_handler};
use crate::routes;
use crate::state::AppState;
use crate::store::Store;

/// Build the routing table
///
/// Unknown paths fall through to axum's 404 and known paths with the wrong
/// method get 405, both with an empty body. With `docs` set, the OpenAPI
/// document and Swagger UI are mounted as well.
pub fn router(state: AppState, docs: bool) -> Router {
    let mut app = Router::new()
        .route(routes::KEY, post(set_handler))
        .route(routes::KEY_ITEM, get(get_handler).delete(delete_handler))
        .with_state(state);

    if docs {
        app = app.merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()));
    }

    app.layer(TraceLayer::new_for_http())
}

struct Running {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// HTTP service exposing a store over the /key routes
pub struct Service {
    addr: String,
    store: Arc<dyn Store>,
    docs: bool,
    running: Option<Running>,
}

impl Service {
    /// Create a service that will listen on `addr` once started
    pub fn new(addr: impl Into<String>, store: Arc<dyn Store>) -> Self {
        Self {
            addr: addr.into(),
            store,
            docs: false,
            running: None,
        }
    }

    /// Serve the OpenAPI document and Swagger UI alongside the key routes
    pub fn with_docs(mut self, docs: bool) -> Self {
        self.docs = docs;
        self
    }

    /// Bind the listener and start serving in a background task
    pub async fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            bail!("HTTP service already started on {}", self.addr);
        }

        let listener = TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind HTTP service to {}", self.addr))?;
        let local_addr = listener
            .local_addr()
            .context("Failed to read bound address")?;

        let app = router(AppState::new(Arc::clone(&self.store)), self.docs);
        let (shutdown, signal) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = signal.await;
                })
                .await;
            if let Err(e) = result {
                tracing::error!("HTTP service on {} failed: {}", local_addr, e);
            }
        });

        tracing::info!("HTTP service listening on {}", local_addr);
        self.running = Some(Running {
            local_addr,
            shutdown,
            task,
        });
        Ok(())
    }

    /// Address actually bound, once started
    pub fn addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|r| r.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn close(&mut self) -> Result<()> {
        let Some(running) = self.running.take() else {
            return Ok(());
        };

        // The receiver is gone only if the server task already exited
        let _ = running.shutdown.send(());
        running
            .task
            .await
            .context("HTTP service task panicked")?;

        tracing::info!("HTTP service on {} stopped", running.local_addr);
        Ok(())
    }
}

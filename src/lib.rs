pub mod assets;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod profile;
pub mod routes;
pub mod sessions;
pub mod template;
pub mod theme;
pub mod visitor;

use std::sync::Arc;

use portfolio_contact::Relay;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use config::Config;
pub use routes::AppState;

/// Create the app router with every route and layer configured.
///
/// The relay is injected so integration tests can point the contact form at
/// a local stand-in instead of the hosted endpoint.
pub fn create_app(config: Config, relay: Arc<dyn Relay>) -> axum::Router {
    let sessions = sessions::ContactSessions::new(
        relay,
        config.contact.reset_after(),
        config.contact.session_ttl(),
    );

    routes::router(AppState { config, sessions })
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

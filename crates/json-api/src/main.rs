//! Atelier JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use atelier_app::context::AppContext;

use crate::{
    config::{LogFormat, ServerConfig},
    state::State,
};

mod cart;
mod categories;
mod config;
mod designs;
mod extensions;
mod healthcheck;
mod orders;
mod products;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Atelier JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));

    match config.logging.log_format {
        LogFormat::Compact => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::seeded(config.pricing.to_pricing_config()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to seed the catalog: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("categories")
                        .get(categories::index::handler)
                        .push(Router::with_path("{slug}").get(categories::get::handler)),
                )
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(Router::with_path("search").get(products::search::handler))
                        .push(Router::with_path("{slug}").get(products::get::handler)),
                )
                .push(
                    Router::with_path("cart")
                        .get(cart::index::handler)
                        .post(cart::create::handler)
                        .delete(cart::clear::handler)
                        .push(Router::with_path("totals").get(cart::totals::handler))
                        .push(
                            Router::with_path("{uuid}")
                                .patch(cart::update::handler)
                                .delete(cart::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("custom-designs")
                        .post(designs::create::handler)
                        .push(Router::with_path("{uuid}").get(designs::get::handler)),
                )
                .push(
                    Router::with_path("users/{user}/custom-designs")
                        .get(designs::index::handler),
                )
                .push(
                    Router::with_path("orders")
                        .post(orders::create::handler)
                        .push(Router::with_path("{uuid}").get(orders::get::handler)),
                ),
        );

    let doc = OpenApi::new("Atelier API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}

use std::path::PathBuf;

use axum::{handler::Handler, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use crate::app::{shell, App};

const DEFAULT_FILTER: &str = "info,portfolio_site=debug";
const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load site configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Installs the fmt subscriber. `RUST_LOG` overrides the default filter.
///
/// `log` records from the shared modules are picked up through the
/// subscriber's log bridge.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing already initialised: {e}");
    }
}

/// Static assets (résumé, favicon) as authored, before cargo-leptos copies
/// them into the site root. `LEPTOS_ASSETS_DIR` overrides the location.
pub fn assets_dir() -> PathBuf {
    std::env::var_os("LEPTOS_ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

/// Leptos routes for the app. Anything else is looked up in the assets
/// directory, then the site root, and finally rendered as the not-found page.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_fallback =
        leptos_axum::file_and_error_handler(shell).with_state(leptos_options.clone());
    let assets = assets_dir();
    tracing::debug!("serving assets from {}", assets.display());

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback_service(ServeDir::new(assets).fallback(site_fallback))
        .with_state(leptos_options)
}

pub async fn serve() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let app = router(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

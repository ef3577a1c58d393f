//! Hobnail Storefront - JSON cart and catalog service.
//!
//! This binary serves the storefront API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON
//! - One [`CartStore`] per process, opened from a file slot in the data dir
//! - Static catalog loaded at startup (file or built-in demo catalog)

#![cfg_attr(not(test), forbid(unsafe_code))]

use hobnail_core::aggregate;
use hobnail_storefront::cart::{CartStore, FileSlot};
use hobnail_storefront::catalog::Catalog;
use hobnail_storefront::config::StorefrontConfig;
use hobnail_storefront::routes;
use hobnail_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hobnail_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let catalog = Catalog::load_or_demo(config.catalog_path.as_deref())
        .expect("Failed to load catalog");

    let slot = FileSlot::in_dir(&config.data_dir);
    tracing::info!(path = %slot.path().display(), "Opening cart");
    let mut cart = CartStore::open(slot);
    cart.subscribe(|entries| {
        tracing::info!(
            entries = entries.len(),
            total_items = aggregate::total_items(entries),
            total_price = %aggregate::total_price(entries),
            "cart-updated"
        );
    });

    let state = AppState::new(catalog, cart);

    let app = routes::router(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

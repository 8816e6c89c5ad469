pub mod commands;
pub mod config;
pub mod core_state;
pub mod drafts;
pub mod fixtures;
pub mod models;
pub mod session;
pub mod store;
pub mod timeline;
pub mod validation;

use tracing_subscriber::EnvFilter;

use crate::core_state::CoreState;
use crate::models::EventQuery;
use crate::session::{FlagFileAuthStore, Session};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Demo entry point: seeds the fixtures, signs in through the flag-file
/// store and prints the unfiltered timeline payload as JSON.
pub fn run() -> Result<(), String> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = FlagFileAuthStore::in_app_data();
    tracing::debug!(flag = %store.path().display(), "Using session flag file");
    let state = CoreState::new(Session::new(Box::new(store)));

    if !commands::session::is_authenticated(&state) {
        commands::session::login(&state)?;
    }

    let data = commands::timeline::get_timeline_data(EventQuery::default(), &state)?;
    let json = serde_json::to_string_pretty(&data).map_err(|e| e.to_string())?;
    println!("{json}");

    tracing::info!(events = data.events.len(), "Timeline rendered");
    Ok(())
}

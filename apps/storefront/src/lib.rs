//! # storefront-app: Terminal Storefront
//!
//! Wires configuration, services and state together, then runs the shell.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Startup Sequence                                     │
//! │                                                                         │
//! │  1. init_tracing()          stderr, RUST_LOG or info,storefront=debug   │
//! │  2. StorefrontConfig::load  defaults ◄ storefront.toml ◄ STOREFRONT_*   │
//! │  3. Session store           file per session id, or memory              │
//! │  4. Image search            Unsplash client, or offline stub            │
//! │  5. CatalogSource::restore  last search results of this session         │
//! │  6. Shell::run              until quit / end of input                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_core::{PriceSource, SeededPriceSource};
use storefront_services::{
    CatalogSource, EmailJsClient, FileSessionStore, ImageSearch, MemorySessionStore,
    SessionStore, StorefrontConfig, UnavailableSearch, UnsplashSearchClient,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

pub use cli::Cli;
pub use shell::Shell;

use state::{CartState, CatalogState, ConfigState};

/// Runs the storefront until the user quits.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));

    let config = StorefrontConfig::load(cli.config.clone())?;
    let missing = config.missing_credentials();
    if !missing.is_empty() {
        warn!(?missing, "Credentials not configured; related features will fail");
    }

    let session_id = cli
        .session
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
    let store = session_store(&cli, &config, &session_id)?;

    let search: Arc<dyn ImageSearch> = if cli.offline {
        info!("Offline mode: image search disabled");
        Arc::new(UnavailableSearch)
    } else {
        Arc::new(UnsplashSearchClient::new(&config.search)?)
    };

    let prices: Box<dyn PriceSource> = match cli.seed {
        Some(seed) => Box::new(SeededPriceSource::from_seed(seed)),
        None => Box::new(SeededPriceSource::from_entropy()),
    };

    let mut catalog = CatalogSource::new(search, store, prices);
    catalog.restore();

    let email = Arc::new(EmailJsClient::new(&config.email)?);

    let shell = Shell::new(
        CartState::new(),
        CatalogState::new(catalog),
        ConfigState::from_config(&config),
        email,
    );

    println!("Session: {} (resume with --session {})", session_id, session_id);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell.run(stdin, &mut stdout).await?;

    info!("Storefront shutting down");
    Ok(())
}

fn session_store(
    cli: &Cli,
    config: &StorefrontConfig,
    session_id: &str,
) -> Result<Arc<dyn SessionStore>, Box<dyn std::error::Error>> {
    if cli.ephemeral {
        return Ok(Arc::new(MemorySessionStore::new()));
    }

    match config.session_dir() {
        Some(dir) => Ok(Arc::new(FileSessionStore::open(dir, session_id)?)),
        None => {
            warn!("No session directory available, keeping session data in memory");
            Ok(Arc::new(MemorySessionStore::new()))
        }
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with shell output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_services=trace` - Trace one crate
/// - Default: info, debug for the storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,storefront_app=debug,storefront_core=debug,storefront_services=debug")
    });

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_session_store() {
        let cli = Cli {
            ephemeral: true,
            ..Default::default()
        };
        let store = session_store(&cli, &StorefrontConfig::default(), "tab-1").unwrap();
        assert_eq!(store.get("searchResults").unwrap(), None);
    }

    #[test]
    fn test_file_session_store_in_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.session.dir = Some(dir.path().to_path_buf());

        let store = session_store(&Cli::default(), &config, "tab-1").unwrap();
        store.set("searchResults", "[]").unwrap();

        assert!(dir.path().join("tab-1.json").exists());
    }
}

//! # Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront                                       │
//! │                                                                         │
//! │  main.rs ────► Parses flags, hands off to lib.rs                        │
//! │                                                                         │
//! │  lib.rs ─────► Logging, config, services, state, shell loop             │
//! │                                                                         │
//! │  commands/ ──► list_products, add_to_cart, generate_bill, ...           │
//! │                                                                         │
//! │  Business logic lives in storefront-core; network and storage in        │
//! │  storefront-services.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use storefront_app::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = storefront_app::run(cli).await {
        eprintln!("storefront: {}", e);
        std::process::exit(1);
    }
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to storefront.toml. Defaults to the platform config directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Session to resume. Search results stored by that session are
    /// restored on startup. A fresh id is generated when omitted.
    #[arg(short, long, value_name = "ID")]
    pub session: Option<String>,

    /// Seed for search-result prices, for reproducible runs.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Never call the image-search API; the default products stay listed.
    #[arg(long)]
    pub offline: bool,

    /// Keep session data in memory only.
    #[arg(long)]
    pub ephemeral: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "storefront",
            "--config",
            "/tmp/shop.toml",
            "--session",
            "tab-1",
            "--seed",
            "42",
            "--offline",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/shop.toml")));
        assert_eq!(cli.session.as_deref(), Some("tab-1"));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.offline);
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["storefront"]);
        assert!(cli.config.is_none());
        assert!(cli.session.is_none());
        assert!(!cli.offline);
    }
}

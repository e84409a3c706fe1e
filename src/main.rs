//! ldash - Logistics Analytics Dashboard - Entry Point

use clap::Parser;
use ldash::config::{self, CliOverrides};
use ldash::state::View;
use std::path::PathBuf;
use tracing::info;

/// Terminal dashboard for logistics delivery analytics
#[derive(Parser, Debug)]
#[command(name = "ldash")]
#[command(version)]
#[command(about = "TUI dashboard for delivery cost, supplier, and delay analytics")]
pub struct Args {
    /// Base URL of the analytics backend (e.g. http://localhost:8000)
    pub api_url: Option<String>,

    /// Rows per table page
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// View to open on startup
    #[arg(long, value_parser = ["cost-analysis", "suppliers", "prediction", "heatmap"])]
    pub view: Option<String>,

    /// Show fault details on error recovery screens
    #[arg(long)]
    pub dev: bool,

    /// Directory to write CSV exports into
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Precedence chain: Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(
            with_env,
            CliOverrides {
                api_url: args.api_url.clone(),
                page_size: args.page_size.map(usize::from),
                // The value_parser restricts the slug set, so this always parses.
                view: args.view.as_deref().and_then(View::from_slug),
                dev_mode: args.dev,
                export_dir: args.export_dir.clone(),
                no_color: args.no_color,
            },
        )
    };

    ldash::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut app = ldash::view::TuiApp::new(config)?;
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["ldash", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["ldash", "--version"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayVersion
        );
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["ldash"]);
        assert_eq!(args.api_url, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.view, None);
        assert!(!args.dev);
        assert_eq!(args.export_dir, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn positional_api_url() {
        let args = Args::parse_from(["ldash", "http://analytics:8000"]);
        assert_eq!(args.api_url, Some("http://analytics:8000".to_string()));
    }

    #[test]
    fn page_size_rejects_zero() {
        let result = Args::try_parse_from(["ldash", "--page-size", "0"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn view_accepts_known_slugs_only() {
        for slug in ["cost-analysis", "suppliers", "prediction", "heatmap"] {
            let args = Args::parse_from(["ldash", "--view", slug]);
            assert_eq!(args.view.as_deref(), Some(slug));
            assert!(View::from_slug(slug).is_some());
        }

        let result = Args::try_parse_from(["ldash", "--view", "dashboard"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }

    #[test]
    fn combined_flags() {
        let args = Args::parse_from([
            "ldash",
            "http://localhost:9999",
            "--page-size",
            "25",
            "--view",
            "suppliers",
            "--dev",
            "--no-color",
            "--export-dir",
            "/tmp/exports",
        ]);
        assert_eq!(args.api_url, Some("http://localhost:9999".to_string()));
        assert_eq!(args.page_size, Some(25));
        assert_eq!(args.view.as_deref(), Some("suppliers"));
        assert!(args.dev);
        assert!(args.no_color);
        assert_eq!(args.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn api_url_flows_through_precedence_chain() {
        use ldash::config::{apply_cli_overrides, merge_config, CliOverrides, ConfigFile};

        let config_file = ConfigFile {
            api_base_url: Some("http://from-file:8000".to_string()),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.api_base_url, "http://from-file:8000");

        let with_cli = apply_cli_overrides(
            merged,
            CliOverrides {
                api_url: Some("http://from-cli:8000".to_string()),
                ..CliOverrides::default()
            },
        );
        assert_eq!(
            with_cli.api_base_url, "http://from-cli:8000",
            "CLI url should override all other sources"
        );
    }
}

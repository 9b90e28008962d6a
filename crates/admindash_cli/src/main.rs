//! Command-line dashboard renderer.
//!
//! # Responsibility
//! - Render a JSON dashboard model to HTML on stdout.
//! - Optionally dump the intermediate Atom tree for debugging themes.

use admindash_core::{
    init_logging, load_dashboard, DashboardService, LoggingError, RenderConfig,
};
use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Render an admin dashboard model to HTML")]
struct Cli {
    /// JSON dashboard model
    model: PathBuf,

    /// Theme name; empty or unknown names use the configured default
    theme: Option<String>,

    /// Print the Atom tree as JSON instead of HTML
    #[arg(long)]
    atoms: bool,
}

/// Starts logging for this process; without a log dir it goes to stderr.
fn init_cli_logging(config: &RenderConfig) -> Result<(), LoggingError> {
    init_logging(&config.log_level, config.log_dir.as_deref())
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    let config = RenderConfig::from_env();
    init_cli_logging(&config)?;

    let model = load_dashboard(&cli.model)?;
    let service = DashboardService::from_config(&config)?;
    if cli.atoms {
        let root = service.transform(&model)?;
        info!("event=cli_dump_atoms module=cli status=ok");
        return Ok(serde_json::to_string_pretty(&root)?);
    }
    let html = service.render(&model, cli.theme.as_deref().unwrap_or(""))?;
    info!("event=cli_render module=cli status=ok");
    Ok(html)
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("admindash_cli: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{init_cli_logging, Cli};
    use admindash_core::{logging_status, RenderConfig};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_model_theme_and_flag_in_any_order() {
        let cli = Cli::try_parse_from(["admindash_cli", "--atoms", "model.json", "tabler"])
            .expect("valid args");
        assert_eq!(cli.model, Path::new("model.json"));
        assert_eq!(cli.theme.as_deref(), Some("tabler"));
        assert!(cli.atoms);

        let bare = Cli::try_parse_from(["admindash_cli", "model.json"]).expect("valid args");
        assert_eq!(bare.theme, None);
        assert!(!bare.atoms);
    }

    #[test]
    fn rejects_missing_model_and_unknown_flags() {
        assert!(Cli::try_parse_from(["admindash_cli"]).is_err());
        assert!(Cli::try_parse_from(["admindash_cli", "model.json", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["admindash_cli", "a.json", "b", "c"]).is_err());
    }

    #[test]
    fn logging_starts_on_stderr_without_log_dir() {
        let config = RenderConfig {
            log_level: "warn".to_string(),
            log_dir: None,
            ..RenderConfig::default()
        };
        init_cli_logging(&config).expect("stderr logging starts");
        init_cli_logging(&config).expect("same config is accepted again");
        assert_eq!(logging_status(), Some(("warn", None)));
    }
}

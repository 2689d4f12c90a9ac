use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moji_core::{available_themes, Config, SearchApi, SearchController, SearchOutcome};
use moji_platform::Platform;

#[derive(Parser)]
#[command(name = "moji")]
#[command(about = "Keyboard-driven emoji search client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search service base URL, e.g. http://127.0.0.1:8000
    #[arg(long, value_name = "URL", global = true)]
    server: Option<String>,

    /// Theme name (see `moji themes`)
    #[arg(long, value_name = "NAME", global = true)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results instead of opening the window
    Query {
        /// Words describing the emoji
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List available themes
    Themes,

    /// Write the effective configuration to the config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    fn apply(&self, config: &mut Config) {
        if let Some(ref server) = self.server {
            config.server.base_url = server.clone();
        }
        if let Some(ref theme) = self.theme {
            if !available_themes().contains(&theme.as_str()) {
                tracing::warn!(theme = %theme, "Unknown theme, falling back to default palette");
            }
            config.appearance.theme = theme.clone();
        }
        config.validate();
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moji=info,moji_core=info,moji_ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::load();
    cli.apply(&mut config);

    let api = SearchApi::new(&config.server).context("Failed to create search client")?;

    match cli.command {
        Some(Commands::Query { ref text }) => run_query(&api, &text.join(" ")),
        Some(Commands::Themes) => {
            for name in available_themes() {
                println!("{}", name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::InitConfig { force }) => {
            init_config(&config, &Config::config_path(), force)
        }
        None => {
            tracing::info!(server = %api.base_url(), "Starting Moji");
            let platform = Platform::current();
            moji_ui::run(config, platform, api).context("Application error")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One search through the same controller the window uses
fn run_query(api: &SearchApi, text: &str) -> anyhow::Result<ExitCode> {
    let mut controller = SearchController::new();

    let request = match controller.begin_search(text) {
        Ok(request) => request,
        Err(_) => {
            eprintln!("{}", controller.status().message);
            return Ok(ExitCode::FAILURE);
        }
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let outcome = runtime.block_on(api.search(&request.query));

    match controller.finish_search(request.token, outcome) {
        SearchOutcome::Rendered(_) => {
            for result in controller.results() {
                println!("{}  {}", result.emoji, result.score_label());
            }
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::NoResults => {
            println!("{}", controller.status().message);
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::Failed | SearchOutcome::Stale => {
            eprintln!("{}", controller.status().message);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_config(config: &Config, path: &Path, force: bool) -> anyhow::Result<ExitCode> {
    if path.exists() && !force {
        eprintln!(
            "Config already exists at {}, pass --force to overwrite",
            path.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    config
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

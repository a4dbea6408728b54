use boilercaps_cli::commands::new_project;
use boilercaps_cli::config::ToolchainConfig;
use boilercaps_cli::error::ScaffoldError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Everything is asked interactively; the parser only provides
/// `--help` and `--version`.
#[derive(Parser)]
#[command(
    name = "boilercaps",
    version,
    about = "Boilercaps — scaffold React, React Native, Expo, Next and Express projects"
)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BOILERCAPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let result = ToolchainConfig::from_env()
        .map_err(ScaffoldError::from)
        .and_then(|config| {
            tracing::debug!(?config, "toolchain configuration");
            new_project::run(&config)
        });

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(e.exit_code());
    }
}

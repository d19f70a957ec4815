//! Mini Bridge 命令行入口

use anyhow::Context;
use clap::Parser;
use mini_bridge::config::AppConfig;
use mini_bridge::js::{JsonRuntime, QuickJsRuntime, ScriptRuntime};
use mini_bridge::runtime::BridgeApp;
use mini_bridge::BuildStrategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mini-bridge")]
#[command(about = "Mount a UI bundle and build the native widget tree")]
struct Cli {
    /// Path to the UI bundle
    #[arg(long)]
    bundle: Option<PathBuf>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Exit after this many seconds (overrides APP_AUTO_EXIT_SECONDS)
    #[arg(long)]
    auto_exit: Option<f64>,
    /// Treat the bundle as a widget-tree JSON document instead of a script
    #[arg(long)]
    json: bool,
    /// Do not print the widget tree
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply_env()?;
    if let Some(path) = cli.bundle {
        config.bundle_path = path;
    }
    if let Some(seconds) = cli.auto_exit {
        config.set_auto_exit("--auto-exit", seconds)?;
    }

    let runtime: Box<dyn ScriptRuntime> = if cli.json {
        Box::new(JsonRuntime)
    } else {
        Box::new(QuickJsRuntime::with_options(config.runtime_options())?)
    };

    let mut app = BridgeApp::load(&config, runtime)
        .with_context(|| format!("cannot start with bundle {}", config.bundle_path.display()))?;
    app.start()?;

    if let Some(BuildStrategy::Fallback { unresolved }) = app.last_strategy() {
        eprintln!("fallback build used ({} is not a known widget)", unresolved);
    }
    if !cli.quiet {
        if let Some(snapshot) = app.snapshot() {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    app.run();
    Ok(())
}

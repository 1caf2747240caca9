#![allow(non_snake_case)]

mod app;
pub mod context;
mod layout;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use opsconsole_core::{resolve_locale, ConsoleConfig, ConsoleState};

/// OpsConsole - server operations console
#[derive(Parser, Debug)]
#[command(name = "opsconsole-desktop")]
#[command(about = "OpsConsole - server operations console")]
struct Args {
    /// Asset directory holding icons/, fonts/ and profile.json
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Saved locale preference (zh_CN, en_US); unknown values use the default
    #[arg(short, long)]
    locale: Option<String>,

    /// Profile JSON for the signed-in user (default: <assets>/profile.json)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// JSON config file; command line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Default asset directory (<data dir>/opsconsole)
fn default_assets_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("opsconsole")
}

fn build_config(args: Args) -> anyhow::Result<ConsoleConfig> {
    let mut config = match args.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::new(default_assets_dir()),
    };
    if let Some(dir) = args.assets_dir {
        config.assets_dir = dir;
    }
    if args.locale.is_some() {
        config.locale = resolve_locale(args.locale.as_deref());
    }
    if let Some(profile) = args.profile {
        config = config.with_profile_path(profile);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = build_config(Args::parse())?;
    tracing::info!(assets = ?config.assets_dir, locale = %config.locale, "Starting OpsConsole");

    let console = ConsoleState::from_config(config)?;

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("OpsConsole")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(console)
        .launch(app::App);

    Ok(())
}

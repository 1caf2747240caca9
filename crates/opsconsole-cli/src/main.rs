//! OpsConsole CLI
//!
//! Thin wrapper around opsconsole-core for inspecting the console's client
//! state without starting the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Translate a key in a locale
//! opsconsole locale get sys.menu.host --locale en_US
//!
//! # Dump the merged dictionary
//! opsconsole locale dump
//!
//! # Warm the icon cache from the asset directory
//! opsconsole --assets-dir ./assets icons preload
//!
//! # Print one icon's SVG
//! opsconsole icons resolve logos:ubuntu
//!
//! # Load the configured fonts
//! opsconsole fonts preload
//!
//! # Group backend configuration rows for the settings screen
//! opsconsole config transform rows.json
//!
//! # Show the signed-in user
//! opsconsole user show
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use opsconsole_core::fonts::{default_terminal_font, Platform};
use opsconsole_core::icons::{file_icon, os_icon};
use opsconsole_core::sysconfig::ConfigListResponse;
use opsconsole_core::{
    display_name, transform_config, ConsoleConfig, ConsoleState, Locale, QueryState,
};

/// OpsConsole - server operations console
#[derive(Parser)]
#[command(name = "opsconsole")]
#[command(version = "0.1.0")]
#[command(about = "OpsConsole - inspect locales, assets and the user profile")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Asset directory (default: <data dir>/opsconsole)
    #[arg(short, long, global = true)]
    assets_dir: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile JSON for the signed-in user (default: <assets>/profile.json)
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locale dictionaries
    Locale {
        #[command(subcommand)]
        action: LocaleAction,
    },

    /// Icon cache
    Icons {
        #[command(subcommand)]
        action: IconsAction,
    },

    /// Web fonts
    Fonts {
        #[command(subcommand)]
        action: FontsAction,
    },

    /// System configuration schema
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Signed-in user
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum LocaleAction {
    /// List supported locales
    List,

    /// Translate a key; unknown keys print the key itself
    Get {
        key: String,
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// Print the merged dictionary, one `key = value` per line
    Dump {
        #[arg(short, long)]
        locale: Option<Locale>,
    },
}

#[derive(Subcommand)]
enum IconsAction {
    /// Load icons into the cache (default: the configured preload list)
    Preload { ids: Vec<String> },

    /// Print the SVG for one icon
    Resolve { id: String },

    /// Catalog icon for a file name
    File { name: String },

    /// Catalog icon for an OS description
    Os { name: String },
}

#[derive(Subcommand)]
enum FontsAction {
    /// Load every configured font; fails if any one fails
    Preload,

    /// Terminal font for this platform given the loaded fonts
    Terminal,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Group backend rows by type and print the groups as JSON
    Transform { file: PathBuf },
}

#[derive(Subcommand)]
enum UserAction {
    /// Show the signed-in user
    Show {
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default asset directory (<data dir>/opsconsole)
fn default_assets_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("opsconsole")
}

fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ConsoleConfig::new(default_assets_dir()),
    };
    if let Some(dir) = &cli.assets_dir {
        config.assets_dir = dir.clone();
    }
    if let Some(profile) = &cli.profile {
        config = config.with_profile_path(profile);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(&cli)?;
    let console = ConsoleState::from_config(config)?;

    match cli.command {
        Commands::Locale { action } => match action {
            LocaleAction::List => {
                for locale in Locale::ALL {
                    let marker = if locale == Locale::DEFAULT { " (default)" } else { "" };
                    println!("{}  {}{}", locale.code(), locale.label(), marker);
                }
            }
            LocaleAction::Get { key, locale } => {
                let locale = locale.unwrap_or_else(|| console.locale());
                println!("{}", console.locales().translate(locale, &key));
            }
            LocaleAction::Dump { locale } => {
                let locale = locale.unwrap_or_else(|| console.locale());
                for (key, value) in console.locales().dictionary(locale).iter() {
                    println!("{} = {}", key, value);
                }
            }
        },

        Commands::Icons { action } => match action {
            IconsAction::Preload { ids } => {
                let ids = if ids.is_empty() {
                    console.config().icons.clone()
                } else {
                    ids
                };
                let report = console.icons().preload_all(ids).await;

                println!("Loaded: {}", report.loaded.len());
                for (id, reason) in &report.failed {
                    println!("  FAILED {}: {}", id, reason);
                }
            }
            IconsAction::Resolve { id } => match console.icons().resolve(&id).await? {
                Some(icon) => println!("{}", icon.svg),
                None => bail!("Icon id must not be empty"),
            },
            IconsAction::File { name } => println!("{}", file_icon(&name)),
            IconsAction::Os { name } => println!("{}", os_icon(&name)),
        },

        Commands::Fonts { action } => match action {
            FontsAction::Preload => {
                let families = console
                    .preload_fonts()
                    .await
                    .context("Font preload failed")?;
                for family in families {
                    println!("Loaded: {}", family);
                }
            }
            FontsAction::Terminal => {
                if let Err(e) = console.preload_fonts().await {
                    tracing::warn!("Some fonts failed to load: {}", e);
                }
                let fonts = console.fonts();
                println!(
                    "{}",
                    default_terminal_font(Platform::current(), |family| fonts.contains(family))
                );
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Transform { file } => {
                let raw = std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let response: ConfigListResponse =
                    serde_json::from_str(&raw).context("Invalid configuration list")?;
                let groups = transform_config(response.list);
                println!("{}", serde_json::to_string_pretty(&groups)?);
            }
        },

        Commands::User { action } => match action {
            UserAction::Show { json } => {
                let state = console.users().get().await;
                if json {
                    match state.data() {
                        Some(user) => println!("{}", serde_json::to_string_pretty(user.as_ref())?),
                        None => println!("null"),
                    }
                } else {
                    println!("User: {}", display_name(&state));
                    match &state {
                        QueryState::Success(user) => {
                            println!("  Role: {}", user.role);
                            println!("  Email: {}", user.email);
                            println!("  Hosts: {}", user.permissions.host_ids.len());
                        }
                        QueryState::Error(e) => println!("  Profile unavailable: {}", e),
                        _ => {}
                    }
                }
            }
        },
    }

    Ok(())
}

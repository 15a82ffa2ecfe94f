use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use contact_book::audit::AuditLogger;
use contact_book::cli::{Menu, MenuOptions};
use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::services::ContactService;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "In-memory contact book for the terminal",
    long_about = "Manage a session's worth of contacts from an interactive menu: \
                  add, edit, delete and search them, and move them in and out \
                  of JSON or CSV files kept in the data directory."
)]
struct Cli {
    /// Base directory for settings, the audit log and the data directory
    #[arg(long, env = "CONTACT_BOOK_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Never clear the screen between menu screens
    #[arg(long, global = true)]
    no_clear: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ContactPaths::resolve(cli.data_dir)?;
    let settings = match Settings::load_or_create(&paths) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return Err(e.into());
        }
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }

            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:       {}", settings.audit_enabled);
            println!("  Clear screen:        {}", settings.clear_screen);
            println!("  Default export name: {}", settings.default_export_name);
        }
        Some(Commands::History { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;

            if entries.is_empty() {
                println!("No audit entries found.");
            }
            for entry in entries.iter().rev() {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Menu) | None => {
            let storage = Storage::new(paths, &settings)?;
            let stdout = io::stdout();
            let interactive = stdout.is_terminal();

            let options = MenuOptions {
                clear_screen: settings.clear_screen && !cli.no_clear && interactive,
                styled: interactive,
                default_export_name: settings.default_export_name.clone(),
            };

            Menu::new(
                ContactService::new(&storage),
                io::stdin().lock(),
                stdout.lock(),
                options,
            )
            .run()?;
        }
    }

    Ok(())
}

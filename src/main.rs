use anyhow::Result;
use clap::{Parser, Subcommand};

use finance::auth::AuthContext;
use finance::cli::{
    handle_categories_command, handle_config_command, handle_init_command, handle_submit_command,
    handle_whoami_command, SubmitArgs,
};
use finance::config::{AppPaths, Settings};
use finance::logging::{init_tracing, LogTarget};
use finance::models::CategoryRegistry;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Terminal personal finance register",
    long_about = "finance-tui registers income and outcome transactions from the \
                  terminal. Run it without arguments for the interactive screen, or \
                  use `submit` to register a transaction from a script."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Register one transaction and print it as JSON
    Submit(SubmitArgs),

    /// List the available categories
    Categories,

    /// Show the signed-in profile
    Whoami,

    /// Write default settings to disk
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let auth = AuthContext::from_settings(&settings);
    let registry = CategoryRegistry::default();

    // The TUI owns the terminal, so it logs to a file
    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => {
            paths.ensure_directories()?;
            LogTarget::File(paths.log_file())
        }
        _ => LogTarget::Stderr,
    };
    init_tracing(&target, &settings.log_level)?;

    match command {
        Commands::Tui => finance::tui::run_tui(&settings, &auth, &registry)?,
        Commands::Submit(args) => handle_submit_command(&registry, args)?,
        Commands::Categories => handle_categories_command(&registry)?,
        Commands::Whoami => handle_whoami_command(&auth)?,
        Commands::Init => handle_init_command(&paths, &settings)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}

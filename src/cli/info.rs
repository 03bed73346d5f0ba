//! Read-only and setup commands: categories, whoami, config, init

use crate::auth::AuthContext;
use crate::config::{AppPaths, Settings};
use crate::display::{format_category_table, format_profile};
use crate::error::FinanceResult;
use crate::models::CategoryRegistry;

/// Handle `finance categories`
pub fn handle_categories_command(registry: &CategoryRegistry) -> FinanceResult<()> {
    println!("{}", format_category_table(registry));
    Ok(())
}

/// Handle `finance whoami`
pub fn handle_whoami_command(auth: &AuthContext) -> FinanceResult<()> {
    print!("{}", format_profile(auth.user()));
    Ok(())
}

/// Handle `finance config`
pub fn handle_config_command(paths: &AppPaths, settings: &Settings) -> FinanceResult<()> {
    println!("finance-tui Configuration");
    println!("=========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!(
        "Initialized:    {}",
        if paths.is_initialized() { "yes" } else { "no" }
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Log level:       {}", settings.log_level);
    println!("  Tick rate:       {} ms", settings.tick_rate_ms);
    println!("  Profile:         {}", settings.profile);
    Ok(())
}

/// Handle `finance init`: write the current settings to disk
pub fn handle_init_command(paths: &AppPaths, settings: &Settings) -> FinanceResult<()> {
    println!("Initializing finance-tui at: {}", paths.base_dir().display());
    settings.save(paths)?;
    tracing::info!(path = %paths.settings_file().display(), "settings written");
    println!("Wrote {}", paths.settings_file().display());
    Ok(())
}

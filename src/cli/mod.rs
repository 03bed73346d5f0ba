//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the composer and registry.

pub mod info;
pub mod submit;

pub use info::{handle_categories_command, handle_config_command, handle_init_command, handle_whoami_command};
pub use submit::{handle_submit_command, run_submit, SubmitArgs};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ks_core::preferences::{Currency, ThemePreference};

/// Headless driver for the Korean Shop client session core.
#[derive(Debug, Parser)]
#[command(name = "korean-shop", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the store file and logs (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the splash, resolve the session and print the landing route
    Boot,
    /// Sign in and store a session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session
    Logout,
    /// Mark onboarding as seen
    CompleteOnboarding,
    /// Delete every stored key
    ResetStorage,
    /// Set the colour theme (light, dark, system)
    Theme { theme: ThemePreference },
    /// Set the display currency (som, usd, eur, rub, krw)
    Currency { currency: Currency },
    /// Print session flags and preferences
    Status {
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Stable name for logs. Never includes arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Boot => "boot",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::CompleteOnboarding => "complete-onboarding",
            Command::ResetStorage => "reset-storage",
            Command::Theme { .. } => "theme",
            Command::Currency { .. } => "currency",
            Command::Status { .. } => "status",
        }
    }
}

mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use togaf30_lib::i18n::Language;
use togaf30_lib::settings::Theme;

#[derive(Parser)]
#[command(name = "togaf30", about = "TOGAF Master 30: 30-day study companion", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Log in, creating the account on first use
    Login {
        /// Account name (normalized to lowercase)
        username: String,
        /// Optional display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Log out the active account
    Logout,

    /// Show the active account and its progress
    Whoami,

    /// List known accounts
    Users,

    /// Show the 30-day study plan
    Plan {
        /// Filter by phase name (case-insensitive prefix match)
        #[arg(long)]
        phase: Option<String>,
    },

    /// Show one day's topic and key concepts
    Day {
        /// Day number 1-30 (default: the active account's current day)
        day: Option<u8>,
    },

    /// Generate and show flashcards for a day
    Study {
        /// Day number 1-30 (default: the active account's current day)
        day: Option<u8>,
        /// Mark the day complete after showing the cards
        #[arg(long)]
        complete: bool,
    },

    /// Mark a day complete
    Complete {
        /// Day number 1-30 (default: the active account's current day)
        day: Option<u8>,
    },

    /// Delete the active account's progress
    Reset,

    /// Search the TOGAF glossary
    Glossary {
        /// Search text (omit to list every term)
        query: Option<String>,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommand>,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,

    /// Set the display language
    SetLanguage {
        /// "en" or "zh"
        language: Language,
    },

    /// Set the color theme
    SetTheme {
        /// "light" or "dark"
        theme: Theme,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && stdout_is_tty();

    let app = app::App::new(cli.data_dir)?;

    match cli.command {
        Command::Login { username, name } => {
            commands::login::run(&app, &username, name.as_deref(), &cli.format, use_color)?;
        }
        Command::Logout => {
            commands::logout::run(&app, &cli.format)?;
        }
        Command::Whoami => {
            commands::whoami::run(&app, &cli.format, use_color)?;
        }
        Command::Users => {
            commands::users::run(&app, &cli.format)?;
        }
        Command::Plan { phase } => {
            commands::plan::run(&app, phase.as_deref(), &cli.format, use_color)?;
        }
        Command::Day { day } => {
            commands::day::run(&app, day, &cli.format, use_color)?;
        }
        Command::Study { day, complete } => {
            commands::study::run(&app, day, complete, &cli.format, use_color).await?;
        }
        Command::Complete { day } => {
            commands::complete::run(&app, day, &cli.format, use_color)?;
        }
        Command::Reset => {
            commands::reset::run(&app, &cli.format)?;
        }
        Command::Glossary { query } => {
            commands::glossary::run(&app, query.as_deref(), &cli.format, use_color)?;
        }
        Command::Settings { command } => match command.unwrap_or(SettingsCommand::Show) {
            SettingsCommand::Show => commands::settings::run_show(&app, &cli.format)?,
            SettingsCommand::SetLanguage { language } => {
                commands::settings::run_set_language(&app, language, &cli.format)?;
            }
            SettingsCommand::SetTheme { theme } => {
                commands::settings::run_set_theme(&app, theme, &cli.format)?;
            }
        },
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn stdout_is_tty() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}

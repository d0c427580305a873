use anyhow::Result;

use togaf30_lib::i18n::Language;
use togaf30_lib::settings::{AppSettings, Theme};

use crate::app::App;
use crate::OutputFormat;

pub fn run_show(app: &App, format: &OutputFormat) -> Result<()> {
    print_settings(&app.settings, format)
}

pub fn run_set_language(app: &App, language: Language, format: &OutputFormat) -> Result<()> {
    let settings = app.settings_storage.set_language(language)?;
    print_settings(&settings, format)
}

pub fn run_set_theme(app: &App, theme: Theme, format: &OutputFormat) -> Result<()> {
    let settings = app.settings_storage.set_theme(theme)?;
    print_settings(&settings, format)
}

fn print_settings(settings: &AppSettings, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
        OutputFormat::Plain => {
            println!("language: {}", settings.language);
            println!("theme: {}", theme_name(settings.theme));
        }
    }
    Ok(())
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

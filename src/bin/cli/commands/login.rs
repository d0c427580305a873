use anyhow::Result;

use togaf30_lib::i18n::{day_label, ui_text};

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(
    app: &App,
    username: &str,
    name: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let user = app.users.login(username, name)?;
    let progress = app.progress.progress(&user.username)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "username": user.username,
                "name": user.name,
                "currentDay": progress.current_day,
                "completedDays": progress.completed_days,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let text = ui_text(app.language());
            let greeting = if progress.completed_days.is_empty() {
                text.welcome
            } else {
                text.welcome_back
            };

            if use_color {
                println!(
                    "{}{}{} · {}",
                    Color::CYAN,
                    togaf30_lib::APP_NAME,
                    Color::RESET,
                    text.subtitle
                );
            } else {
                println!("{} · {}", togaf30_lib::APP_NAME, text.subtitle);
            }

            if use_color {
                println!(
                    "{}{}, {}{}",
                    Color::BOLD,
                    greeting,
                    user.display_name(),
                    Color::RESET
                );
            } else {
                println!("{}, {}", greeting, user.display_name());
            }
            println!(
                "{}: {}/30 · {}",
                text.days_completed,
                progress.completed_days.len(),
                day_label(app.language(), progress.current_day),
            );
        }
    }

    Ok(())
}

use anyhow::Result;

use togaf30_lib::i18n::{day_label, ui_text};
use togaf30_lib::syllabus::TOTAL_DAYS;

use crate::app::App;
use crate::render::terminal::{progress_bar, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let (user, progress) = app.current_progress()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "username": user.username,
                "name": user.name,
                "createdAt": user.created_at,
                "lastLogin": user.last_login,
                "currentDay": progress.current_day,
                "completedDays": progress.completed_days,
                "percentComplete": progress.percent_complete(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let text = ui_text(app.language());
            let percent = progress.percent_complete();
            let bar = progress_bar(progress.completed_days.len(), TOTAL_DAYS as usize, 20);

            if use_color {
                println!(
                    "{}{}{}",
                    Color::BOLD,
                    user.display_name(),
                    Color::RESET
                );
                let bar_color = if percent == 100 { Color::GREEN } else { Color::CYAN };
                println!(
                    "{}: {}{}{} {}%",
                    text.progress, bar_color, bar, Color::RESET, percent
                );
            } else {
                println!("{}", user.display_name());
                println!("{}: {} {}%", text.progress, bar, percent);
            }

            println!(
                "{}: {}/{}",
                text.days_completed,
                progress.completed_days.len(),
                TOTAL_DAYS
            );
            println!("{}", day_label(app.language(), progress.current_day));
        }
    }

    Ok(())
}

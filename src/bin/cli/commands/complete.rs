use anyhow::Result;

use togaf30_lib::i18n::day_label;
use togaf30_lib::syllabus::TOTAL_DAYS;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, day: Option<u8>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let (user, before) = app.current_progress()?;
    let day = day.unwrap_or(before.current_day);

    let progress = app.progress.mark_complete(&user.username, day)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        OutputFormat::Plain => {
            let label = day_label(app.language(), day);
            if use_color {
                println!(
                    "{}[x]{} {} ({}%)",
                    Color::GREEN,
                    Color::RESET,
                    label,
                    progress.percent_complete()
                );
            } else {
                println!("[x] {} ({}%)", label, progress.percent_complete());
            }

            if progress.completed_days.len() as u8 == TOTAL_DAYS {
                println!("All {} days completed.", TOTAL_DAYS);
            } else {
                println!(
                    "Next: {}",
                    day_label(app.language(), progress.current_day)
                );
            }
        }
    }

    Ok(())
}

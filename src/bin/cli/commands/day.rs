use anyhow::{bail, Result};

use togaf30_lib::i18n::{day_label, ui_text};
use togaf30_lib::syllabus;

use crate::app::App;
use crate::render::terminal::{wrap_lines, Color};
use crate::OutputFormat;

pub fn run(app: &App, day: Option<u8>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let language = app.language();
    let day = app.resolve_day(day)?;

    let plan = match syllabus::day_plan(language, day) {
        Some(plan) => plan,
        None => bail!("Invalid day: {} (expected 1..=30)", day),
    };

    let completed = match app.optional_user()? {
        Some(user) => Some(app.progress.progress(&user.username)?.is_completed(day)),
        None => None,
    };

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(plan)?;
            if let (Some(done), Some(obj)) = (completed, value.as_object_mut()) {
                obj.insert("completed".to_string(), serde_json::json!(done));
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            let text = ui_text(language);
            let label = day_label(language, day);
            let mark = if completed == Some(true) { " [x]" } else { "" };

            if use_color {
                println!(
                    "{}{}: {}{} {}({}){}{}",
                    Color::BOLD,
                    label,
                    plan.title,
                    Color::RESET,
                    Color::DIM,
                    plan.phase,
                    Color::RESET,
                    mark
                );
            } else {
                println!("{}: {} ({}){}", label, plan.title, plan.phase, mark);
            }

            println!();
            for line in wrap_lines(plan.description, "", 80) {
                println!("{}", line);
            }

            println!();
            println!("{}:", text.key_concepts);
            for concept in plan.key_concepts {
                println!("  \u{2022} {}", concept);
            }
        }
    }

    Ok(())
}

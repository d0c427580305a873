use anyhow::Result;

use togaf30_lib::generation::{BatchOrigin, FlashcardGenerator};
use togaf30_lib::i18n::{day_label, offline_notice, ui_text};
use togaf30_lib::syllabus;

use crate::app::App;
use crate::render::terminal::{render_card, Color};
use crate::OutputFormat;

pub async fn run(
    app: &App,
    day: Option<u8>,
    mark_done: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let language = app.language();
    let day = app.resolve_day(day)?;
    let text = ui_text(language);

    // Resolve the account up front so a missing login fails before the
    // external call, not after.
    let completing_user = if mark_done {
        Some(app.current_user()?)
    } else {
        None
    };

    if matches!(format, OutputFormat::Plain) {
        if use_color {
            eprintln!("{}{}{}", Color::DIM, text.generating, Color::RESET);
            eprintln!("{}{}{}", Color::DIM, text.generating_sub, Color::RESET);
        } else {
            eprintln!("{}", text.generating);
            eprintln!("{}", text.generating_sub);
        }
    }

    let generator = FlashcardGenerator::new();
    let batch = generator.generate_for_day(language, day).await?;

    let progress = match completing_user {
        Some(ref user) => Some(app.progress.mark_complete(&user.username, day)?),
        None => None,
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "day": day,
                "origin": batch.origin,
                "cards": batch.cards,
                "progress": progress,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let title = syllabus::day_plan(language, day)
                .map(|plan| plan.title)
                .unwrap_or_default();

            if use_color {
                println!(
                    "{}{}: {}{}",
                    Color::BOLD,
                    day_label(language, day),
                    title,
                    Color::RESET
                );
            } else {
                println!("{}: {}", day_label(language, day), title);
            }

            if let BatchOrigin::Fallback(reason) = batch.origin {
                let note = offline_notice(language, reason);
                if use_color {
                    println!("{}{}{}", Color::YELLOW, note, Color::RESET);
                } else {
                    println!("{}", note);
                }
            }

            let total = batch.cards.len();
            for (index, card) in batch.cards.iter().enumerate() {
                println!();
                for line in render_card(index + 1, total, card, use_color) {
                    println!("{}", line);
                }
            }

            if let Some(progress) = progress {
                println!();
                if use_color {
                    println!(
                        "{}[x]{} {} ({}%)",
                        Color::GREEN,
                        Color::RESET,
                        day_label(language, day),
                        progress.percent_complete()
                    );
                } else {
                    println!(
                        "[x] {} ({}%)",
                        day_label(language, day),
                        progress.percent_complete()
                    );
                }
            }
        }
    }

    Ok(())
}

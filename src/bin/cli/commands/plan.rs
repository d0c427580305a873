use anyhow::{bail, Result};

use togaf30_lib::syllabus::{self, DayPlan, TOTAL_DAYS};

use crate::app::App;
use crate::render::terminal::{progress_bar, Color};
use crate::OutputFormat;

pub fn run(app: &App, phase: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let language = app.language();

    let plans: Vec<&DayPlan> = match phase {
        Some(name) => {
            let needle = name.trim().to_lowercase();
            let matched: Vec<&DayPlan> = syllabus::syllabus(language)
                .iter()
                .filter(|p| p.phase.to_lowercase().starts_with(&needle))
                .collect();
            if matched.is_empty() {
                bail!(
                    "No phase matching '{}'. Phases:\n{}",
                    name,
                    syllabus::phases(language)
                        .iter()
                        .map(|p| format!("  - {}", p))
                        .collect::<Vec<_>>()
                        .join("\n")
                );
            }
            matched
        }
        None => syllabus::syllabus(language).iter().collect(),
    };

    // Completion marks only make sense with an active account.
    let completed: Option<Vec<u8>> = match app.optional_user()? {
        Some(user) => Some(app.progress.progress(&user.username)?.completed_days),
        None => None,
    };

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = plans
                .iter()
                .map(|plan| {
                    let mut value = serde_json::to_value(plan).unwrap_or_default();
                    if let (Some(days), Some(obj)) = (&completed, value.as_object_mut()) {
                        obj.insert(
                            "completed".to_string(),
                            serde_json::json!(days.contains(&plan.day)),
                        );
                    }
                    value
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let mut last_phase = "";
            for plan in &plans {
                if plan.phase != last_phase {
                    if !last_phase.is_empty() {
                        println!();
                    }
                    if use_color {
                        println!("{}{}{}", Color::BOLD, plan.phase, Color::RESET);
                    } else {
                        println!("{}", plan.phase);
                    }
                    last_phase = plan.phase;
                }

                let mark = match &completed {
                    Some(days) if days.contains(&plan.day) => {
                        if use_color {
                            format!("{}[x]{}", Color::GREEN, Color::RESET)
                        } else {
                            "[x]".to_string()
                        }
                    }
                    Some(_) => "[ ]".to_string(),
                    None => "   ".to_string(),
                };
                println!("  {} {:>2}  {}", mark, plan.day, plan.title);
            }

            // Whole-plan progress, only without a phase filter.
            if let (Some(days), None) = (&completed, phase) {
                let bar = progress_bar(days.len(), TOTAL_DAYS as usize, 20);
                println!();
                if use_color {
                    println!(
                        "{}{}{} {}/{}",
                        Color::CYAN,
                        bar,
                        Color::RESET,
                        days.len(),
                        TOTAL_DAYS
                    );
                } else {
                    println!("{} {}/{}", bar, days.len(), TOTAL_DAYS);
                }
            }
        }
    }

    Ok(())
}

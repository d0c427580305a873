use anyhow::Result;

use togaf30_lib::glossary;
use togaf30_lib::i18n::ui_text;

use crate::app::App;
use crate::render::terminal::{wrap_lines, Color};
use crate::OutputFormat;

pub fn run(app: &App, query: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let language = app.language();
    let entries = glossary::search(language, query.unwrap_or(""));

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = entries
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "id": entry.id,
                        "term": entry.term(language),
                        "definition": entry.definition(language),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let text = ui_text(language);
            if entries.is_empty() {
                println!("{}", text.no_results);
                return Ok(());
            }

            if use_color {
                println!("{}{}{}", Color::BOLD, text.glossary, Color::RESET);
            } else {
                println!("{}", text.glossary);
            }
            println!();

            for entry in &entries {
                if use_color {
                    println!("{}{}{}", Color::BOLD, entry.term(language), Color::RESET);
                } else {
                    println!("{}", entry.term(language));
                }
                for line in wrap_lines(entry.definition(language), "  ", 80) {
                    println!("{}", line);
                }
                println!();
            }

            println!("{} terms", entries.len());
        }
    }

    Ok(())
}

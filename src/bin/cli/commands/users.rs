use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let users = app.users.list_users()?;
    let current = app.users.current_username()?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = users
                .iter()
                .map(|user| {
                    serde_json::json!({
                        "username": user.username,
                        "name": user.name,
                        "lastLogin": user.last_login,
                        "isCurrent": current.as_deref() == Some(user.username.as_str()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if users.is_empty() {
                println!("No accounts yet. Run 'togaf30 login <username>' to create one.");
                return Ok(());
            }

            for user in &users {
                let marker = if current.as_deref() == Some(user.username.as_str()) {
                    "* "
                } else {
                    "  "
                };
                let progress = app.progress.progress(&user.username)?;
                println!(
                    "{}{} ({}/30, last login {})",
                    marker,
                    user.display_name(),
                    progress.completed_days.len(),
                    user.last_login.format("%Y-%m-%d"),
                );
            }
        }
    }

    Ok(())
}

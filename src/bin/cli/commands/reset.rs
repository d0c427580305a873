use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let user = app.current_user()?;
    app.progress.reset(&user.username)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "username": user.username,
                "reset": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Progress reset for {}.", user.username);
        }
    }

    Ok(())
}

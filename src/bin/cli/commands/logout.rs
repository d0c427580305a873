use anyhow::Result;

use togaf30_lib::i18n::ui_text;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let user = app.optional_user()?;
    app.users.logout()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "loggedOut": user.as_ref().map(|u| u.username.clone()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match user {
            Some(user) => {
                let text = ui_text(app.language());
                println!("{}: {}", text.logout, user.username);
            }
            None => println!("No account was logged in."),
        },
    }

    Ok(())
}

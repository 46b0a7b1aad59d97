//! Sign-in, sign-up, and profile commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::progress::with_spinner;
use crate::cli::{CommandContext, OutputFormat, prompt};
use crate::client::AuthApi;
use crate::client::models::SignUpRequest;
use crate::error::{Error, Result};
use crate::forms;
use crate::models::UserDisplay;
use crate::output::{json, table};

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let email = prompt::text(email, "Email", "--email")?;
    let password = prompt::password(password, false)?;

    with_spinner("Signing in...", ctx.client.sign_in(email.trim(), &password)).await?;
    debug!("Token saved to {}", ctx.config_path.display());

    let user = ctx.client.current_user().await?;
    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&UserDisplay::from(user))?),
        _ => println!(
            "{} Signed in as {}",
            "✓".green(),
            display_name(&user.fio, &user.email).bold()
        ),
    }
    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    fio: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = SignUpRequest {
        fio: forms::required("fio", &prompt::text(fio, "Full name", "--fio")?)?,
        email: forms::required("email", &prompt::text(email, "Email", "--email")?)?,
        password: prompt::password(password, true)?,
    };
    if request.password.is_empty() {
        return Err(Error::Validation("password is required".to_string()));
    }

    with_spinner("Creating account...", ctx.client.sign_up(request)).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&serde_json::json!({ "registered": true }))?);
    } else {
        println!("{} Account created", "✓".green());
        println!("  → Run {} to sign in", "journal login".cyan());
    }
    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let was_signed_in = ctx.session().is_signed_in();
    ctx.client.sign_out()?;

    if was_signed_in {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} Not signed in", "○".dimmed());
    }
    Ok(())
}

/// Run the me command
pub async fn me(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let user = UserDisplay::from(ctx.client.current_user().await?);
    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&user)?),
        OutputFormat::Table => println!("{}", table::format_table(&[user], table::NO_RESULTS)),
        OutputFormat::Pretty => println!("{}", table::format_details(&user.details())),
    }
    Ok(())
}

fn display_name<'a>(fio: &'a str, email: &'a str) -> &'a str {
    if fio.is_empty() { email } else { fio }
}

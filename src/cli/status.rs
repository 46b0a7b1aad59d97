//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::session::token_expiry;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    println!("{}\n", "Journal Configuration Status".bold());

    let exists = ctx.config_path.exists();
    let marker = if exists { "" } else { " (not created yet)" };
    println!(
        "Config file: {}{}",
        ctx.config_path.display().to_string().cyan(),
        marker.dimmed()
    );
    println!("API host:    {}", ctx.client.base_url().cyan());
    println!();

    match ctx.session().token() {
        Some(token) => {
            let source = if opts.token.is_some() {
                " (via --token)"
            } else {
                ""
            };
            println!("{} Signed in{}", "✓".green(), source.dimmed());

            match token_expiry(&token) {
                Ok(expires) => {
                    let remaining = expires.signed_duration_since(Utc::now());
                    if remaining.num_seconds() <= 0 {
                        println!(
                            "{} Access token expired at {}",
                            "⚠".yellow(),
                            expires.format("%Y-%m-%d %H:%M UTC")
                        );
                        println!("  → Run 'journal login' to sign in again");
                    } else {
                        println!(
                            "{} Access token valid (expires in {}h {}m)",
                            "✓".green(),
                            remaining.num_hours(),
                            remaining.num_minutes() % 60
                        );
                    }
                }
                Err(_) => println!("{} Access token expiry unknown", "○".dimmed()),
            }
        }
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'journal login' to sign in");
        }
    }

    println!();
    println!(
        "Page size: {}   Requests/s: {}",
        ctx.page_size,
        ctx.client.requests_per_second()
    );

    Ok(())
}

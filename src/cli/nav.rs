//! Navigation command implementation

use colored::Colorize;
use log::warn;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::AuthApi;
use crate::client::models::User;
use crate::error::Result;
use crate::output::Formattable;
use crate::session::Session;
use crate::shell::{NavLink, nav_links};

#[derive(Tabled, Serialize)]
struct NavRow {
    #[tabled(rename = "LINK")]
    label: String,
    #[tabled(rename = "PATH")]
    path: &'static str,
}

impl From<NavLink> for NavRow {
    fn from(link: NavLink) -> Self {
        Self {
            label: link.label,
            path: link.path,
        }
    }
}

/// Current user when a session exists and the backend accepts it
pub(crate) async fn current_user<C: AuthApi + ?Sized>(
    session: &Session,
    client: &C,
) -> Option<User> {
    if !session.is_signed_in() {
        return None;
    }
    match client.current_user().await {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Could not load the current user: {}", e);
            None
        }
    }
}

/// Run the nav command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let links = nav_links(current_user(ctx.session(), ctx.client.as_ref()).await.as_ref());

    match ctx.format {
        OutputFormat::Pretty => {
            let line: Vec<String> = links
                .iter()
                .map(|l| format!("{} {}", l.label.bold(), l.path.dimmed()))
                .collect();
            println!("{}", line.join("  │  "));
        }
        format => {
            let rows: Vec<NavRow> = links.into_iter().map(NavRow::from).collect();
            rows.print(format)?;
        }
    }
    Ok(())
}

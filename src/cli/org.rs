//! Organization command implementations

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{create_listed, run_feed, submit_modal};
use crate::cli::{CommandContext, PaginationArgs, prompt};
use crate::error::Result;
use crate::forms::{CreateModal, OrganizationForm};
use crate::models::OrgDisplay;
use crate::paging::OrganizationFeed;

use super::created;

/// Run the org list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    debug!("Listing organizations");
    run_feed::<_, OrgDisplay>(&ctx, OrganizationFeed::new(ctx.client.clone()), (), pagination)
        .await
}

/// Run the org create command
pub async fn create(
    opts: &GlobalOptions,
    name: Option<String>,
    description: Option<String>,
    location: Option<String>,
    list: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let mut modal = CreateModal::new(OrganizationForm {
        name: prompt::text(name, "Name", "--name")?,
        description: prompt::text(description, "Description", "--description")?,
        location: prompt::text(location, "Location", "--location")?,
    });

    if list {
        return create_listed::<_, _, OrgDisplay>(
            &ctx,
            OrganizationFeed::new(ctx.client.clone()),
            (),
            &mut modal,
            "Organization created",
        )
        .await;
    }

    let org = submit_modal(ctx.client.as_ref(), &mut modal).await?;
    created(ctx.format, "Organization created", OrgDisplay::from(org))
}

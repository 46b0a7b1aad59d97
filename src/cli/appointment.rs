//! Appointment command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_feed;
use crate::cli::{CommandContext, PaginationArgs};
use crate::error::Result;
use crate::models::AppointmentDisplay;
use crate::paging::AppointmentFeed;

/// Run the appointment list command
pub async fn list(opts: &GlobalOptions, org: String, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    for_organization(&ctx, org, pagination).await
}

pub(crate) async fn for_organization(
    ctx: &CommandContext,
    org_id: String,
    pagination: &PaginationArgs,
) -> Result<()> {
    ctx.require_session()?;
    run_feed::<_, AppointmentDisplay>(
        ctx,
        AppointmentFeed::new(ctx.client.clone()),
        org_id,
        pagination,
    )
    .await
}

//! Service command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{create_listed, run_feed, submit_modal};
use crate::cli::{CommandContext, PaginationArgs, prompt};
use crate::error::{Error, Result};
use crate::forms::{CreateModal, ServiceForm};
use crate::models::{ServiceDisplay, SpecialistServiceDisplay};
use crate::paging::{ServiceFeed, SpecialistServiceFeed};

use super::created;

/// Run the service list command for an organization or a specialist
pub async fn list(
    opts: &GlobalOptions,
    org: Option<String>,
    specialist: Option<String>,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match (org, specialist) {
        (Some(org_id), _) => by_organization(&ctx, org_id, pagination).await,
        (None, Some(specialist_id)) => by_specialist(&ctx, specialist_id, pagination).await,
        (None, None) => Err(Error::Validation(
            "either --org or --specialist is required".to_string(),
        )),
    }
}

pub(crate) async fn by_organization(
    ctx: &CommandContext,
    org_id: String,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_feed::<_, ServiceDisplay>(ctx, ServiceFeed::new(ctx.client.clone()), org_id, pagination)
        .await
}

pub(crate) async fn by_specialist(
    ctx: &CommandContext,
    specialist_id: String,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_feed::<_, SpecialistServiceDisplay>(
        ctx,
        SpecialistServiceFeed::new(ctx.client.clone()),
        specialist_id,
        pagination,
    )
    .await
}

/// Run the service create command
pub async fn create(
    opts: &GlobalOptions,
    title: Option<String>,
    price: Option<String>,
    description: Option<String>,
    org: String,
    list: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let mut form = ServiceForm::for_organization(org.clone());
    form.title = prompt::text(title, "Title", "--title")?;
    form.price = prompt::text(price, "Price", "--price")?;
    form.description = prompt::optional_text(description, "Description (optional)")?;

    let mut modal = CreateModal::new(form);
    if list {
        return create_listed::<_, _, ServiceDisplay>(
            &ctx,
            ServiceFeed::new(ctx.client.clone()),
            org,
            &mut modal,
            "Service created",
        )
        .await;
    }

    let service = submit_modal(ctx.client.as_ref(), &mut modal).await?;
    created(ctx.format, "Service created", ServiceDisplay::from(service))
}

//! Specialist command implementations

use std::sync::Arc;

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{create_listed, pick, run_feed, submit_modal};
use crate::cli::{CommandContext, PaginationArgs, prompt};
use crate::client::models::Service;
use crate::error::{Error, Result};
use crate::forms::{self, AssignServiceForm, CreateModal, SpecialistForm};
use crate::models::{SpecialistDisplay, SpecialistServiceDisplay};
use crate::output::formatters::format_price;
use crate::paging::{PagedLoader, ServiceFeed, SpecialistFeed};

use super::created;

/// Run the specialist list command
pub async fn list(opts: &GlobalOptions, org: String, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    by_organization(&ctx, org, pagination).await
}

pub(crate) async fn by_organization(
    ctx: &CommandContext,
    org_id: String,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_feed::<_, SpecialistDisplay>(
        ctx,
        SpecialistFeed::new(ctx.client.clone()),
        org_id,
        pagination,
    )
    .await
}

/// Run the specialist create command
pub async fn create(
    opts: &GlobalOptions,
    fio: Option<String>,
    org: String,
    list: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let mut form = SpecialistForm::for_organization(org.clone());
    form.fio = prompt::text(fio, "Full name", "--fio")?;

    let mut modal = CreateModal::new(form);
    if list {
        return create_listed::<_, _, SpecialistDisplay>(
            &ctx,
            SpecialistFeed::new(ctx.client.clone()),
            org,
            &mut modal,
            "Specialist created",
        )
        .await;
    }

    let specialist = submit_modal(ctx.client.as_ref(), &mut modal).await?;
    created(ctx.format, "Specialist created", SpecialistDisplay::from(specialist))
}

/// Run the specialist assign command
///
/// Without `--service` the service is picked from the organization's
/// services, loaded page by page as the picker is scrolled.
pub async fn assign(
    opts: &GlobalOptions,
    specialist: String,
    service: Option<String>,
    org: String,
    duration: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let mut form = AssignServiceForm::for_specialist(specialist);
    form.service_id = match service {
        Some(id) => id,
        None => pick_service(&ctx, org).await?,
    };
    form.duration = prompt::text(duration, "Duration (minutes)", "--duration")?;

    let mut modal = CreateModal::new(form);
    let assigned = submit_modal(ctx.client.as_ref(), &mut modal).await?;
    created(
        ctx.format,
        "Service assigned",
        SpecialistServiceDisplay::from(assigned),
    )
}

async fn pick_service(ctx: &CommandContext, org_id: String) -> Result<String> {
    if !prompt::is_interactive() {
        return Err(Error::Validation("--service is required".to_string()));
    }

    let label = |s: &Service| format!("{} ({})", s.title, format_price(s.price));
    let loader = PagedLoader::new(ServiceFeed::new(Arc::clone(&ctx.client)), org_id, ctx.page_size);

    // One loader serves every organization the user looks at; switching resets it
    loop {
        let heading = format!("Service of organization {}", loader.scope().await);
        match pick(&loader, &heading, &label).await {
            Ok(Some(service)) => return Ok(service.id),
            Ok(None) => {}
            Err(Error::Validation(empty)) => eprintln!("{}", empty),
            Err(e) => return Err(e),
        }

        if !prompt::confirm("Pick from another organization?", false)? {
            return Err(Error::Validation("no service selected".to_string()));
        }
        let answer = prompt::text(None, "Organization ID", "--org")?;
        let next = forms::required("organization", &answer)?;
        debug!("Switching the service picker to {}", next);
        loader.reset(next).await;
    }
}

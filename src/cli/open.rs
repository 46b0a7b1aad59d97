//! Open command: resolve a web client path to its view

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_feed;
use crate::cli::{CommandContext, PaginationArgs, appointment, auth, booking, service, specialist};
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::paging::OrganizationFeed;
use crate::shell::Route;

/// Run the open command
pub async fn run(opts: &GlobalOptions, path: &str, pagination: &PaginationArgs) -> Result<()> {
    let route = Route::parse(path)?;
    debug!("Opening {}", route);

    let ctx = CommandContext::new(opts)?;
    if route.requires_session() {
        ctx.require_session()?;
    }

    match route {
        Route::Home | Route::Organizations => {
            run_feed::<_, OrgDisplay>(
                &ctx,
                OrganizationFeed::new(ctx.client.clone()),
                (),
                pagination,
            )
            .await
        }
        Route::Login => auth::login(opts, None, None).await,
        Route::Register => auth::register(opts, None, None, None).await,
        Route::Profile => auth::me(opts).await,
        Route::Logout => auth::logout(opts),
        Route::Services { organization_id } => {
            service::by_organization(&ctx, organization_id, pagination).await
        }
        Route::Specialists { organization_id } => {
            specialist::by_organization(&ctx, organization_id, pagination).await
        }
        Route::SpecialistServices { specialist_id } => {
            service::by_specialist(&ctx, specialist_id, pagination).await
        }
        Route::Bookings => booking::mine(&ctx, pagination).await,
        Route::Appointments { organization_id } => {
            appointment::for_organization(&ctx, organization_id, pagination).await
        }
    }
}

//! Booking command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_feed, submit_modal};
use crate::cli::{CommandContext, PaginationArgs, prompt};
use crate::error::Result;
use crate::forms::{BOOKING_SUCCESS, BookingForm, CreateModal};
use crate::models::BookingDisplay;
use crate::paging::BookingFeed;

use super::created;

/// Run the booking list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    mine(&ctx, pagination).await
}

pub(crate) async fn mine(ctx: &CommandContext, pagination: &PaginationArgs) -> Result<()> {
    ctx.require_session()?;
    run_feed::<_, BookingDisplay>(ctx, BookingFeed::new(ctx.client.clone()), (), pagination).await
}

/// Run the booking create command
pub async fn create(
    opts: &GlobalOptions,
    specialist_service: String,
    note: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let mut form = BookingForm::for_specialist_service(specialist_service);
    form.time = prompt::text(time, "Time (YYYY-MM-DDTHH:MM)", "--time")?;
    form.note = prompt::optional_text(note, "Note (optional)")?;

    let mut modal = CreateModal::new(form);
    let booking = submit_modal(ctx.client.as_ref(), &mut modal).await?;
    created(ctx.format, BOOKING_SUCCESS, BookingDisplay::from(booking))
}

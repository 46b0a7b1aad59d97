//! Create command handler
//!
//! A create command fills a [`CreateModal`] from flags and prompts, then
//! submits it. With `--list` the command first loads page 1 of the list the
//! record belongs to, submits into that loader so the new record lands at
//! the front, and prints the list.

use colored::Colorize;
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::progress::with_spinner;
use crate::cli::{CommandContext, OutputFormat, announce, prompt};
use crate::client::MutationApi;
use crate::error::{Error, Result};
use crate::forms::{CreateForm, CreateModal};
use crate::output::json::{PageMeta, format_json_page};
use crate::output::table::format_table;
use crate::paging::{LoadOutcome, PageSource, PagedLoader};

/// Decide whether to resubmit after `err`, closing the modal when not.
///
/// Invalid input is never resubmitted unchanged.
pub(crate) fn retry_after<F: CreateForm>(
    modal: &mut CreateModal<F>,
    err: &Error,
    interactive: bool,
) -> Result<bool> {
    if modal.is_open() && interactive && !matches!(err, Error::Validation(_)) {
        eprintln!("{} {}", "✗".red(), err);
        if prompt::confirm("Try again?", true)? {
            return Ok(true);
        }
    }
    modal.close();
    Ok(false)
}

/// Open `modal` and submit it, offering a retry on a terminal.
pub async fn submit_modal<C, F>(client: &C, modal: &mut CreateModal<F>) -> Result<F::Created>
where
    C: MutationApi + ?Sized,
    F: CreateForm,
{
    let interactive = prompt::is_interactive();
    modal.open();
    loop {
        match with_spinner("Saving...", modal.submit(client)).await {
            Ok(created) => return Ok(created),
            Err(err) => {
                if !retry_after(modal, &err, interactive)? {
                    return Err(err);
                }
            }
        }
    }
}

/// Load page 1 of `loader`, then submit `modal` into it.
///
/// A page failure stops before anything is created. It is reported like a
/// list view does: the view message, or the cause for `--format json`.
pub(crate) async fn submit_into_feed<C, S, F>(
    client: &C,
    loader: &PagedLoader<S>,
    modal: &mut CreateModal<F>,
    format: OutputFormat,
    interactive: bool,
) -> Result<F::Created>
where
    C: MutationApi + ?Sized,
    S: PageSource<Item = F::Created>,
    F: CreateForm,
    F::Created: Clone,
{
    modal.form.validate()?;

    match with_spinner("Loading...", loader.load_next()).await {
        LoadOutcome::Failed { message, cause } => {
            return Err(match format {
                OutputFormat::Json => cause,
                _ => Error::View(message),
            });
        }
        outcome => debug!("List behind the form: {:?}", outcome),
    }

    modal.open();
    loop {
        match modal.submit_into(client, loader).await {
            Ok(created) => return Ok(created),
            Err(err) => {
                if !retry_after(modal, &err, interactive)? {
                    return Err(err);
                }
            }
        }
    }
}

/// Run a create command with `--list`: create on top of page 1 of `source`
/// and print the resulting list.
pub async fn create_listed<S, F, D>(
    ctx: &CommandContext,
    source: S,
    scope: S::Scope,
    modal: &mut CreateModal<F>,
    message: &str,
) -> Result<()>
where
    S: PageSource<Item = F::Created>,
    F: CreateForm,
    F::Created: Clone,
    D: From<S::Item> + Tabled + Serialize,
{
    let loader = PagedLoader::new(source, scope, ctx.page_size);
    submit_into_feed(
        ctx.client.as_ref(),
        &loader,
        modal,
        ctx.format,
        prompt::is_interactive(),
    )
    .await?;

    announce(ctx.format, message);
    print_loaded::<S, D>(&loader, ctx.format).await
}

/// Print everything `loader` holds, newest record first.
pub(crate) async fn print_loaded<S, D>(loader: &PagedLoader<S>, format: OutputFormat) -> Result<()>
where
    S: PageSource,
    D: From<S::Item> + Tabled + Serialize,
{
    let labels = loader.labels();
    let state = loader.snapshot().await;
    let paging = PageMeta {
        pages_loaded: state.next_page - 1,
        page_size: loader.page_size(),
        has_more: state.has_more,
    };
    let rows: Vec<D> = state.items.into_iter().map(D::from).collect();

    match format {
        OutputFormat::Json => println!("{}", format_json_page(&rows, paging)?),
        _ => {
            println!("{}", format_table(&rows, labels.empty));
            if !paging.has_more {
                println!("{}", labels.exhausted);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockJournalClient;
    use crate::client::mock::fixtures::orgs;
    use crate::error::ApiError;
    use crate::forms::OrganizationForm;
    use crate::paging::OrganizationFeed;
    use std::sync::Arc;

    fn clinic() -> OrganizationForm {
        OrganizationForm {
            name: "Smile Dental".to_string(),
            description: "Family dentistry".to_string(),
            location: "Bishkek".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_record_lands_first_in_the_list() {
        let mock = Arc::new(MockJournalClient::new().with_organization_pages(vec![orgs(1, 3)]));
        let loader = PagedLoader::new(OrganizationFeed::new(mock.clone()), (), 10);
        let mut modal = CreateModal::new(clinic());

        let created =
            submit_into_feed(mock.as_ref(), &loader, &mut modal, OutputFormat::Table, false)
                .await
                .unwrap();

        assert_eq!(created.id, "org-new");
        let state = loader.snapshot().await;
        assert_eq!(state.items.len(), 4);
        assert_eq!(state.items[0].id, "org-new");
        assert_eq!(state.items[1].id, "org-1");
        assert_eq!(state.next_page, 2);
        assert!(!modal.is_open());

        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].method, "list_organizations");
        assert_eq!(captured[1].method, "create_organization");
    }

    #[tokio::test]
    async fn test_list_failure_creates_nothing() {
        let mock = Arc::new(
            MockJournalClient::new().with_error(ApiError::ServerError("down".to_string())),
        );
        let loader = PagedLoader::new(OrganizationFeed::new(mock.clone()), (), 10);
        let mut modal = CreateModal::new(clinic());

        let err = submit_into_feed(mock.as_ref(), &loader, &mut modal, OutputFormat::Table, false)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to load organizations");
        assert_eq!(mock.call_count("create_organization").await, 0);
        assert_eq!(modal.form.name, "Smile Dental");
    }

    #[tokio::test]
    async fn test_list_failure_in_json_keeps_cause() {
        let mock = Arc::new(
            MockJournalClient::new().with_error(ApiError::ServerError("down".to_string())),
        );
        let loader = PagedLoader::new(OrganizationFeed::new(mock.clone()), (), 10);
        let mut modal = CreateModal::new(clinic());

        let err = submit_into_feed(mock.as_ref(), &loader, &mut modal, OutputFormat::Json, false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));
    }

    #[tokio::test]
    async fn test_invalid_form_loads_nothing() {
        let mock = Arc::new(MockJournalClient::new());
        let loader = PagedLoader::new(OrganizationFeed::new(mock.clone()), (), 10);
        let mut modal = CreateModal::new(OrganizationForm {
            name: "  ".to_string(),
            ..clinic()
        });

        let result =
            submit_into_feed(mock.as_ref(), &loader, &mut modal, OutputFormat::Table, false).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(mock.captured_requests().await.is_empty());
    }

    #[test]
    fn test_no_retry_without_terminal() {
        let mut modal = CreateModal::new(clinic());
        modal.open();

        let err: Error = ApiError::ServerError("down".to_string()).into();
        assert!(!retry_after(&mut modal, &err, false).unwrap());
        assert!(!modal.is_open());
        assert_eq!(modal.form.location, "Bishkek");
    }

    #[test]
    fn test_invalid_input_is_not_retried() {
        let mut modal = CreateModal::new(clinic());
        modal.open();

        let err = Error::Validation("name is required".to_string());
        assert!(!retry_after(&mut modal, &err, true).unwrap());
        assert!(!modal.is_open());
    }
}

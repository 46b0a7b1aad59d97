//! Generic list command handler
//!
//! Every list command renders a [`PagedLoader`] the same way:
//! 1. Load page 1
//! 2. Print the rows that arrived
//! 3. The last printed row is now on screen: report it to a
//!    [`LastItemVisible`] trigger, which loads the next page
//! 4. Stop when the loader is exhausted, the user declines, or a page fails

use colored::Colorize;
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::progress::with_spinner;
use crate::cli::prompt;
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::error::{Error, Result};
use crate::output::json::{PageMeta, format_json_page};
use crate::output::table::format_table;
use crate::paging::{
    FeedLabels, LastItemVisible, LoadOutcome, PageSource, PagedLoader, Trigger, ViewportEvent,
};

/// Run a list view over `source`.
///
/// # Type Parameters
///
/// * `S` - The page source (endpoint + scope)
/// * `D` - The display row built from each item
pub async fn run_feed<S, D>(
    ctx: &CommandContext,
    source: S,
    scope: S::Scope,
    pagination: &PaginationArgs,
) -> Result<()>
where
    S: PageSource,
    D: From<S::Item> + Tabled + Serialize,
{
    let page_size = pagination.page_size_or(ctx.page_size);
    let loader = PagedLoader::new(source, scope, page_size);

    match ctx.format {
        OutputFormat::Json => print_json::<S, D>(&loader, pagination.all).await,
        OutputFormat::Table | OutputFormat::Pretty => {
            let interactive = prompt::is_interactive();
            render_pages::<S, D>(&loader, pagination.all, interactive, ctx.format.is_pretty())
                .await
        }
    }
}

/// JSON: load page 1 (or every page with `--all`) and print once.
///
/// A failure returns the underlying error rather than the view message.
async fn print_json<S, D>(loader: &PagedLoader<S>, all: bool) -> Result<()>
where
    S: PageSource,
    D: From<S::Item> + Tabled + Serialize,
{
    loop {
        let outcome = loader.load_next().await;
        if all && outcome.is_loaded() {
            continue;
        }
        if let LoadOutcome::Failed { cause, .. } = outcome {
            return Err(cause);
        }
        break;
    }

    let state = loader.snapshot().await;
    let paging = PageMeta {
        pages_loaded: state.next_page - 1,
        page_size: loader.page_size(),
        has_more: state.has_more,
    };
    let rows: Vec<D> = state.items.into_iter().map(D::from).collect();
    println!("{}", format_json_page(&rows, paging)?);
    Ok(())
}

async fn load_with_spinner<S: PageSource>(
    loader: &PagedLoader<S>,
    trigger: Option<&Trigger<'_, S, LastItemVisible>>,
    shown: usize,
) -> LoadOutcome {
    let message = format!("Loading page {}...", loader.snapshot().await.next_page);
    match trigger {
        Some(trigger) => {
            let event = ViewportEvent::Intersection {
                index: shown.saturating_sub(1),
                is_intersecting: true,
            };
            with_spinner(&message, trigger.on_event(event))
                .await
                .unwrap_or(LoadOutcome::Busy)
        }
        None => with_spinner(&message, loader.load_next()).await,
    }
}

/// Table output, page by page.
pub(crate) async fn render_pages<S, D>(
    loader: &PagedLoader<S>,
    all: bool,
    interactive: bool,
    pretty: bool,
) -> Result<()>
where
    S: PageSource,
    D: From<S::Item> + Tabled + Serialize,
{
    let labels = loader.labels();
    let trigger = Trigger::new(loader, LastItemVisible);
    let mut shown = 0;
    let mut outcome = load_with_spinner(loader, None, shown).await;

    loop {
        match outcome {
            LoadOutcome::Loaded { page, count } => {
                debug!("Rendering page {} ({} rows)", page, count);
                let state = loader.snapshot().await;

                if state.is_empty_view() {
                    println!("{}", labels.empty);
                    return Ok(());
                }

                let rows: Vec<D> = state.items[shown..]
                    .iter()
                    .cloned()
                    .map(D::from)
                    .collect();
                if !rows.is_empty() {
                    println!("{}", format_table(&rows, labels.empty));
                }
                shown = state.items.len();

                if !state.has_more {
                    print_exhausted(labels, pretty);
                    return Ok(());
                }

                let wants_more = all || (interactive && prompt::confirm("Load more?", true)?);
                if !wants_more {
                    if !interactive {
                        eprintln!("More results available. Use --all to load every page.");
                    }
                    return Ok(());
                }

                outcome = load_with_spinner(loader, Some(&trigger), shown).await;
            }
            LoadOutcome::Exhausted => {
                print_exhausted(labels, pretty);
                return Ok(());
            }
            LoadOutcome::Failed { message, .. } => {
                if pretty {
                    eprintln!("{} {}", "✗".red(), message.red());
                } else {
                    eprintln!("{}", message);
                }

                if interactive && prompt::confirm("Retry?", true)? {
                    outcome = load_with_spinner(loader, None, shown).await;
                    continue;
                }
                return Err(Error::View(message));
            }
            LoadOutcome::Busy | LoadOutcome::Halted | LoadOutcome::Stale => return Ok(()),
        }
    }
}

fn print_exhausted(labels: FeedLabels, pretty: bool) {
    if pretty {
        println!("{}", labels.exhausted.dimmed());
    } else {
        println!("{}", labels.exhausted);
    }
}

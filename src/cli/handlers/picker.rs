//! Paged selection list
//!
//! Shows the loaded items with a trailing "load more" row while the loader
//! has more pages. Choosing that row scrolls the list to its end, which the
//! picker's [`ScrollThreshold`] (10 rows) turns into the next page load.
//! A loader that was reset since the last render starts over at page 1.

use dialoguer::{Select, theme::ColorfulTheme};
use log::debug;

use crate::cli::progress::with_spinner;
use crate::error::{Error, Result};
use crate::paging::{
    LoadOutcome, PICKER_SCROLL_THRESHOLD, PageSource, PagedLoader, ScrollThreshold, Trigger,
    ViewportEvent,
};

/// Rows visible in the picker at once
const PICKER_ROWS: usize = 8;

const LOAD_MORE: &str = "… load more";

/// Event emitted when the selection reaches the bottom of `rendered` rows
pub(crate) fn scrolled_to_end(rendered: usize) -> ViewportEvent {
    let viewport = rendered.min(PICKER_ROWS);
    ViewportEvent::Scroll {
        offset: u32::try_from(rendered - viewport).unwrap_or(u32::MAX),
        viewport: u32::try_from(viewport).unwrap_or(u32::MAX),
        content: u32::try_from(rendered).unwrap_or(u32::MAX),
    }
}

/// Let the user pick one item, loading pages on demand.
///
/// Returns `None` when the user cancels. A failed page load is reported
/// with the view's message; the picker stays usable with what it has.
pub async fn pick<S, F>(loader: &PagedLoader<S>, prompt: &str, label: F) -> Result<Option<S::Item>>
where
    S: PageSource,
    F: Fn(&S::Item) -> String,
{
    let labels = loader.labels();
    let trigger = Trigger::new(loader, ScrollThreshold::new(PICKER_SCROLL_THRESHOLD));

    let mut epoch = None;
    let mut selected = 0;
    loop {
        let mut state = loader.snapshot().await;
        if epoch != Some(state.epoch) {
            // First render, or the loader was reset for another scope
            epoch = Some(state.epoch);
            selected = 0;
            if state.next_page == 1 && !state.loading {
                if let LoadOutcome::Failed { cause, .. } =
                    with_spinner("Loading...", loader.load_next()).await
                {
                    return Err(cause);
                }
                state = loader.snapshot().await;
            }
        }

        if state.is_empty_view() {
            return Err(Error::Validation(labels.empty.to_string()));
        }

        let mut rows: Vec<String> = state.items.iter().map(&label).collect();
        let load_more_row = state.has_more.then_some(rows.len());
        if load_more_row.is_some() {
            rows.push(if state.error.is_some() {
                format!("{} (retry)", LOAD_MORE)
            } else {
                LOAD_MORE.to_string()
            });
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&rows)
            .default(selected.min(rows.len().saturating_sub(1)))
            .max_length(PICKER_ROWS)
            .interact_opt()?;

        match choice {
            None => return Ok(None),
            Some(index) if Some(index) == load_more_row => {
                // A previous failure halts automatic loads; choosing the row again is explicit
                let outcome = if state.error.is_some() {
                    Some(loader.load_next().await)
                } else {
                    with_spinner("Loading...", trigger.on_event(scrolled_to_end(rows.len())))
                        .await
                };
                debug!("Picker load: {:?}", outcome);
                if let Some(LoadOutcome::Failed { message, .. }) = outcome {
                    eprintln!("{}", message);
                }
                selected = index;
            }
            Some(index) => return Ok(state.items.into_iter().nth(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::trigger::TriggerStrategy;

    #[test]
    fn test_scrolled_to_end_fires_picker_threshold() {
        let strategy = ScrollThreshold::new(PICKER_SCROLL_THRESHOLD);
        for rendered in [1, 8, 11, 40] {
            assert!(strategy.fires(&scrolled_to_end(rendered), rendered));
        }
    }

    #[test]
    fn test_scrolled_to_end_geometry() {
        assert_eq!(
            scrolled_to_end(11),
            ViewportEvent::Scroll {
                offset: 3,
                viewport: 8,
                content: 11
            }
        );
    }
}

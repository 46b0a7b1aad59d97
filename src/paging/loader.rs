//! Generic incremental page loader
//!
//! One [`PagedLoader`] backs every list view. It owns the paging state
//! (accumulated items, next page, more-available flag, busy flag, error)
//! and fetches pages from a [`PageSource`] one at a time.
//!
//! Loads are single-flight: a load requested while another is outstanding
//! returns [`LoadOutcome::Busy`] without touching the network. Each
//! [`reset`](PagedLoader::reset) bumps an epoch; a response dispatched under
//! an older epoch is dropped as [`LoadOutcome::Stale`].

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Mutex;

use crate::client::PaginationParams;
use crate::error::{Error, Result};

/// User-facing strings for one list view
#[derive(Debug, Clone, Copy)]
pub struct FeedLabels {
    /// Shown in place of the list when a page fails to load
    pub failure: &'static str,
    /// Shown when the first page came back empty
    pub empty: &'static str,
    /// Shown below the list once the last page has been loaded
    pub exhausted: &'static str,
}

/// An endpoint that can be read one page at a time.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Clone + Send + Sync + 'static;

    /// Filter narrowing what the endpoint returns (organization id, ...)
    type Scope: Clone + fmt::Debug + Send + Sync + 'static;

    fn labels(&self) -> FeedLabels;

    async fn fetch_page(
        &self,
        scope: &Self::Scope,
        params: &PaginationParams,
    ) -> Result<Vec<Self::Item>>;
}

/// Result of one load request
#[derive(Debug)]
pub enum LoadOutcome {
    /// A page was appended
    Loaded { page: usize, count: usize },
    /// Another load is in flight; nothing was requested
    Busy,
    /// The last page was already loaded; nothing was requested
    Exhausted,
    /// An automatic trigger was ignored because the previous load failed
    Halted,
    /// The request failed; `message` is the view's static error string
    Failed { message: &'static str, cause: Error },
    /// The response belonged to a scope that has since been reset
    Stale,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Snapshot of a loader for rendering
#[derive(Debug, Clone)]
pub struct FeedState<T> {
    pub items: Vec<T>,
    /// Page that the next load will request
    pub next_page: usize,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<&'static str>,
    pub epoch: u64,
}

impl<T> FeedState<T> {
    /// Nothing to show and nothing pending: render the empty message
    pub fn is_empty_view(&self) -> bool {
        self.items.is_empty() && !self.loading && self.error.is_none()
    }
}

struct LoaderState<T, S> {
    scope: S,
    items: Vec<T>,
    next_page: usize,
    has_more: bool,
    loading: bool,
    error: Option<&'static str>,
    epoch: u64,
}

impl<T, S> LoaderState<T, S> {
    fn fresh(scope: S, epoch: u64) -> Self {
        Self {
            scope,
            items: Vec::new(),
            next_page: 1,
            has_more: true,
            loading: false,
            error: None,
            epoch,
        }
    }
}

/// Incremental loader over a [`PageSource`].
pub struct PagedLoader<S: PageSource> {
    source: S,
    page_size: usize,
    state: Mutex<LoaderState<S::Item, S::Scope>>,
}

impl<S: PageSource> PagedLoader<S> {
    /// Create a loader positioned before page 1 of `scope`.
    pub fn new(source: S, scope: S::Scope, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            state: Mutex::new(LoaderState::fresh(scope, 0)),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn labels(&self) -> FeedLabels {
        self.source.labels()
    }

    /// Load the next page on explicit request.
    ///
    /// Clears a previous failure, so this is how a user retries.
    pub async fn load_next(&self) -> LoadOutcome {
        self.load(true).await
    }

    /// Load the next page on behalf of an automatic trigger.
    ///
    /// Refuses while a failure is recorded.
    pub async fn load_auto(&self) -> LoadOutcome {
        self.load(false).await
    }

    async fn load(&self, explicit: bool) -> LoadOutcome {
        let (scope, params, epoch) = {
            let mut state = self.state.lock().await;
            if state.loading {
                return LoadOutcome::Busy;
            }
            if !state.has_more {
                return LoadOutcome::Exhausted;
            }
            if state.error.is_some() {
                if !explicit {
                    return LoadOutcome::Halted;
                }
                state.error = None;
            }

            state.loading = true;
            let params = PaginationParams::new()
                .page(state.next_page)
                .limit(self.page_size);
            (state.scope.clone(), params, state.epoch)
        };

        debug!(
            "Loading page {} (limit {}) for {:?}",
            params.page, params.limit, scope
        );
        let result = self.source.fetch_page(&scope, &params).await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            debug!(
                "Discarding page {} for {:?}: scope was reset",
                params.page, scope
            );
            return LoadOutcome::Stale;
        }
        state.loading = false;

        match result {
            Ok(items) => {
                let count = items.len();
                state.has_more = count == self.page_size;
                state.next_page = params.page + 1;
                state.items.extend(items);
                LoadOutcome::Loaded {
                    page: params.page,
                    count,
                }
            }
            Err(cause) => {
                let message = self.source.labels().failure;
                warn!("{}: {}", message, cause);
                state.error = Some(message);
                LoadOutcome::Failed { message, cause }
            }
        }
    }

    /// Drop everything and start over from page 1 of `scope`.
    ///
    /// Any request still in flight will be discarded when it returns.
    pub async fn reset(&self, scope: S::Scope) {
        let mut state = self.state.lock().await;
        debug!("Resetting feed to {:?} (epoch {})", scope, state.epoch + 1);
        let epoch = state.epoch + 1;
        *state = LoaderState::fresh(scope, epoch);
    }

    /// Insert a freshly created record at the front.
    pub async fn prepend(&self, item: S::Item) {
        self.state.lock().await.items.insert(0, item);
    }

    pub async fn snapshot(&self) -> FeedState<S::Item> {
        let state = self.state.lock().await;
        FeedState {
            items: state.items.clone(),
            next_page: state.next_page,
            has_more: state.has_more,
            loading: state.loading,
            error: state.error,
            epoch: state.epoch,
        }
    }

    /// Number of accumulated items
    pub async fn len(&self) -> usize {
        self.state.lock().await.items.len()
    }

    pub async fn scope(&self) -> S::Scope {
        self.state.lock().await.scope.clone()
    }
}

//! Visibility triggers for incremental loading
//!
//! A view reports what the user can currently see as a [`ViewportEvent`];
//! a [`TriggerStrategy`] decides whether that means "load the next page".
//! Two detection mechanisms exist and are interchangeable:
//! [`ScrollThreshold`] (scroll position near the end of the content) and
//! [`LastItemVisible`] (the last rendered row came into view).

use super::loader::{LoadOutcome, PageSource, PagedLoader};

/// Distance from the bottom of the page that counts as "near the end"
pub const WINDOW_SCROLL_THRESHOLD: u32 = 100;

/// Threshold for small embedded lists (e.g. the service picker)
pub const PICKER_SCROLL_THRESHOLD: u32 = 10;

/// What became visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// Scroll position changed. All values in the same unit (pixels, rows).
    Scroll {
        offset: u32,
        viewport: u32,
        content: u32,
    },
    /// Visibility of the rendered item at `index` changed
    Intersection { index: usize, is_intersecting: bool },
}

/// Decides whether an event should load the next page.
pub trait TriggerStrategy: Send + Sync {
    /// `rendered` is the number of items currently shown.
    fn fires(&self, event: &ViewportEvent, rendered: usize) -> bool;
}

/// Fires when the viewport bottom is within `threshold` of the content end.
#[derive(Debug, Clone, Copy)]
pub struct ScrollThreshold {
    pub threshold: u32,
}

impl ScrollThreshold {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self::new(WINDOW_SCROLL_THRESHOLD)
    }
}

impl TriggerStrategy for ScrollThreshold {
    fn fires(&self, event: &ViewportEvent, _rendered: usize) -> bool {
        match *event {
            ViewportEvent::Scroll {
                offset,
                viewport,
                content,
            } => u64::from(offset) + u64::from(viewport) + u64::from(self.threshold)
                >= u64::from(content),
            ViewportEvent::Intersection { .. } => false,
        }
    }
}

/// Fires when the last rendered item becomes visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastItemVisible;

impl TriggerStrategy for LastItemVisible {
    fn fires(&self, event: &ViewportEvent, rendered: usize) -> bool {
        match *event {
            ViewportEvent::Intersection {
                index,
                is_intersecting,
            } => is_intersecting && rendered > 0 && index + 1 == rendered,
            ViewportEvent::Scroll { .. } => false,
        }
    }
}

/// A loader paired with a detection strategy.
pub struct Trigger<'a, S: PageSource, K: TriggerStrategy> {
    loader: &'a PagedLoader<S>,
    strategy: K,
}

impl<'a, S: PageSource, K: TriggerStrategy> Trigger<'a, S, K> {
    pub fn new(loader: &'a PagedLoader<S>, strategy: K) -> Self {
        Self { loader, strategy }
    }

    /// Feed a viewport event. Returns `None` when the strategy did not fire,
    /// otherwise the outcome of the automatic load.
    pub async fn on_event(&self, event: ViewportEvent) -> Option<LoadOutcome> {
        let rendered = self.loader.len().await;
        if !self.strategy.fires(&event, rendered) {
            return None;
        }
        Some(self.loader.load_auto().await)
    }
}

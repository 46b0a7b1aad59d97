//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Where a paged list stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<PageMeta>,
}

/// Paging position of a list result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub pages_loaded: usize,
    pub page_size: usize,
    pub has_more: bool,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                paging: None,
            },
        }
    }

    pub fn with_paging(mut self, paging: PageMeta) -> Self {
        self.meta.paging = Some(paging);
        self
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format one paged list as pretty-printed JSON
pub fn format_json_page<T: Serialize + ?Sized>(
    data: &T,
    paging: PageMeta,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data).with_paging(paging))
}

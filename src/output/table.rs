//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Placeholder for an empty result set
pub const NO_RESULTS: &str = "No results found.";

/// Format rows as a table, or `empty` when there are none.
pub fn format_table<T: Tabled>(data: &[T], empty: &str) -> String {
    if data.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Two-column `field | value` table for a single record.
pub fn format_details(rows: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    for (field, value) in rows {
        builder.push_record([field.to_string(), value.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

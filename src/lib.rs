//! cellfmt - locale-aware table cell formatting
//!
//! This crate formats the textual content of table cells according to a
//! named format kind and derives conditional styling from the formatted
//! value's sign. It is the formatting half of a table renderer: the
//! renderer hands each cell to a [`CellFormat`] together with an optional
//! [`LocaleProvider`] and gets back a display string plus a CSS fragment.

pub mod cell;
pub mod error;
pub mod locale;
pub mod numeric;
pub mod pattern;
pub mod spec;
pub mod style;

mod cache;
mod formatter;

pub use cell::{Cell, PlainCell};
pub use error::PatternError;
pub use formatter::{CellFormat, Formatted};
#[cfg(feature = "chrono")]
pub use locale::Culture;
pub use locale::LocaleProvider;
pub use pattern::Pattern;
pub use spec::{FormatKind, FormatSpec};
pub use style::{StyleRule, StyleRules, MAX_COPY_DEPTH};

/// Format content with the named format, without conditional styling.
///
/// Convenience wrapper over [`CellFormat::format_content`] for one-off use.
pub fn format(content: &str, format: &str, culture: Option<&dyn LocaleProvider>) -> String {
    CellFormat::new(format).format_content(content, culture).display
}

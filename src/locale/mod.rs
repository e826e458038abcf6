//! Locale-dependent value formatting.
//!
//! The actual localization rules live outside this crate: the surrounding
//! framework supplies a [`LocaleProvider`] and the formatter delegates to
//! it. A minimal built-in en-US [`Culture`] ships behind the `chrono`
//! feature for standalone use.

#[cfg(feature = "chrono")]
mod builtin;

#[cfg(feature = "chrono")]
pub use builtin::Culture;

/// Locale-aware formatting of raw cell values.
///
/// Every method takes the cell's trimmed text value and returns a display
/// string. Implementations are expected to be permissive: a value that
/// cannot be interpreted should come back unchanged rather than fail.
pub trait LocaleProvider {
    fn format_date(&self, value: &str) -> String;
    fn format_time(&self, value: &str) -> String;
    fn format_date_time(&self, value: &str) -> String;
    fn format_currency(&self, value: &str) -> String;
    fn format_integer(&self, value: &str) -> String;
    fn format_number(&self, value: &str, precision: usize) -> String;
}

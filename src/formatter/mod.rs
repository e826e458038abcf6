//! Cell content formatting engine.

mod duration;
mod markup;

use std::sync::Arc;

use crate::cache;
use crate::cell::Cell;
use crate::locale::LocaleProvider;
use crate::numeric;
use crate::spec::{FormatKind, FormatSpec, DEFAULT_FLOAT_PRECISION};
use crate::style::StyleRules;

/// Result of formatting one cell's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The display string, with surrounding markup preserved.
    pub display: String,
    /// The trimmed, markup-stripped value that conditional rules evaluate.
    pub content: String,
    /// True when blank suppression emptied the cell.
    pub suppressed: bool,
}

/// Formats table cell content according to a named format kind.
///
/// Built once per column or cell format declaration, applied once per cell
/// render. Holds no per-cell state, so one instance can be shared across
/// render threads.
///
/// Valid formats are:
/// - `duration`
/// - `fixed`, `pre`, `preformatted`
/// - `date`, `time`, `datetime`
/// - `currency`
/// - `int`, `integer`
/// - `percent`
/// - `float`, `double`, `f2`, `d2` (optionally with explicit decimal places)
///
/// Anything else is treated as a printf-style pattern applied to the value.
/// How the locale-dependent kinds come out depends on the
/// [`LocaleProvider`] passed at format time; without one they degrade to
/// pattern substitution.
#[derive(Debug, Clone, Default)]
pub struct CellFormat {
    spec: Option<FormatSpec>,
    blank_if_empty: bool,
    styles: Arc<StyleRules>,
}

impl CellFormat {
    /// A format with the given case-insensitive name.
    pub fn new(format: &str) -> CellFormat {
        CellFormat::from_spec(FormatSpec::new(format))
    }

    /// A float format with explicit decimal places.
    pub fn with_precision(format: &str, precision: usize) -> CellFormat {
        CellFormat::from_spec(FormatSpec::with_precision(format, precision))
    }

    /// A format built from an already-normalized spec.
    pub fn from_spec(spec: FormatSpec) -> CellFormat {
        CellFormat {
            spec: Some(spec),
            ..CellFormat::default()
        }
    }

    /// A pass-through format: content is returned verbatim while blank
    /// suppression and conditional styles still apply.
    pub fn plain() -> CellFormat {
        CellFormat::default()
    }

    /// Suppress content that is empty or numerically zero.
    pub fn blank_if_empty(mut self, blank: bool) -> CellFormat {
        self.blank_if_empty = blank;
        self
    }

    /// Attach conditional style rules.
    pub fn with_styles(mut self, styles: StyleRules) -> CellFormat {
        self.styles = Arc::new(styles);
        self
    }

    /// The rule set, shareable as a `Copy` target from another format.
    pub fn style_rules(&self) -> Arc<StyleRules> {
        Arc::clone(&self.styles)
    }

    /// The normalized format spec, if any.
    pub fn spec(&self) -> Option<&FormatSpec> {
        self.spec.as_ref()
    }

    /// Format raw cell content.
    ///
    /// The returned [`Formatted`] carries both the display string and the
    /// stripped value, which [`CellFormat::conditional_style`] evaluates.
    pub fn format_content(&self, raw: &str, culture: Option<&dyn LocaleProvider>) -> Formatted {
        let content = markup::strip_markup(raw).trim().to_string();

        if self.blank_if_empty && (content.is_empty() || numeric::is_numeric_zero(&content)) {
            return Formatted {
                display: String::new(),
                content,
                suppressed: true,
            };
        }

        let Some(spec) = &self.spec else {
            return Formatted {
                display: raw.to_string(),
                content,
                suppressed: false,
            };
        };

        let display = match spec.kind() {
            FormatKind::Duration => {
                let seconds = numeric::int_value(&content);
                let clock = duration::render_seconds(seconds);
                if seconds <= 0 {
                    clock
                } else {
                    substitute(raw, &content, &clock)
                }
            }
            FormatKind::Preformatted => {
                substitute(raw, &content, &format!("<pre>{content}</pre>"))
            }
            kind => match culture {
                Some(culture) => match kind {
                    FormatKind::Date => substitute(raw, &content, &culture.format_date(&content)),
                    FormatKind::Time => substitute(raw, &content, &culture.format_time(&content)),
                    FormatKind::DateTime => {
                        substitute(raw, &content, &culture.format_date_time(&content))
                    }
                    FormatKind::Currency => {
                        substitute(raw, &content, &culture.format_currency(&content))
                    }
                    FormatKind::Integer => {
                        substitute(raw, &content, &culture.format_integer(&content))
                    }
                    FormatKind::Percent => {
                        let rendered = format!("{}%", culture.format_integer(&content));
                        substitute(raw, &content, &rendered)
                    }
                    FormatKind::Float => {
                        let precision = spec.precision().unwrap_or(DEFAULT_FLOAT_PRECISION);
                        substitute(raw, &content, &culture.format_number(&content, precision))
                    }
                    // An unrecognized kind with a provider present applies
                    // no transformation.
                    FormatKind::Generic(_) => raw.to_string(),
                    FormatKind::Duration | FormatKind::Preformatted => unreachable!(),
                },
                None => {
                    let pattern = cache::get_or_parse(kind.name());
                    substitute(raw, &content, &pattern.render(&content))
                }
            },
        };

        Formatted {
            display,
            content,
            suppressed: false,
        }
    }

    /// Resolve the conditional style for a formatting result. Returns the
    /// empty string when no rule matches or the cell was blanked.
    pub fn conditional_style(&self, formatted: &Formatted) -> String {
        if formatted.suppressed {
            return String::new();
        }
        self.styles.resolve(&formatted.content)
    }

    /// Format a cell in place: replaces its content and appends any
    /// resolved conditional style to its style attribute.
    pub fn apply_to_cell(&self, cell: &mut dyn Cell, culture: Option<&dyn LocaleProvider>) {
        let formatted = self.format_content(&cell.content(), culture);
        if formatted.suppressed {
            cell.set_content(String::new());
            return;
        }
        let style = self.conditional_style(&formatted);
        cell.set_content(formatted.display);
        if !style.is_empty() {
            let mut merged = cell.style();
            merged.push_str(&style);
            cell.set_style(merged);
        }
    }
}

/// Replace the first occurrence of `needle` inside `raw`.
///
/// Markup is stripped only to extract the value; substitution happens in
/// the original text so surrounding tags survive.
fn substitute(raw: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return raw.to_string();
    }
    raw.replacen(needle, replacement, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_first_occurrence_only() {
        assert_eq!(substitute("5 of 5", "5", "five"), "five of 5");
    }

    #[test]
    fn test_substitute_empty_needle_is_noop() {
        assert_eq!(substitute("<b></b>", "", "x"), "<b></b>");
    }

    #[test]
    fn test_substitute_preserves_markup() {
        assert_eq!(substitute("<i>125</i>", "125", "2:05"), "<i>2:05</i>");
    }

    #[test]
    fn test_plain_format_passes_through() {
        let fmt = CellFormat::plain();
        let out = fmt.format_content("  <b>-5</b>  ", None);
        assert_eq!(out.display, "  <b>-5</b>  ");
        assert_eq!(out.content, "-5");
        assert!(!out.suppressed);
    }

    #[test]
    fn test_spec_accessor() {
        let fmt = CellFormat::new("f2");
        assert_eq!(fmt.spec().and_then(|s| s.precision()), Some(2));
        assert!(CellFormat::plain().spec().is_none());
    }
}

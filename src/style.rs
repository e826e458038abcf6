//! Conditional cell styling driven by the formatted value's sign.

use std::sync::Arc;

use crate::numeric;

/// Maximum `Copy` delegation depth. Chains deeper than this resolve to the
/// empty string.
pub const MAX_COPY_DEPTH: usize = 8;

/// A single conditional style rule.
#[derive(Debug, Clone)]
pub enum StyleRule {
    /// Applies when the numeric value of the content is below zero.
    Negative(String),
    /// Applies when the numeric value of the content is above zero.
    Positive(String),
    /// Always applies; delegates resolution to another rule set.
    Copy(Arc<StyleRules>),
}

/// An ordered set of conditional style rules.
///
/// Rules are evaluated in insertion order and the first match wins. The
/// content under evaluation is the trimmed, markup-stripped cell value, and
/// its numeric value is taken leniently (leading numeric prefix, zero for
/// plain text).
#[derive(Debug, Clone, Default)]
pub struct StyleRules {
    rules: Vec<StyleRule>,
}

impl StyleRules {
    pub fn new() -> StyleRules {
        StyleRules::default()
    }

    /// Style to apply when the value is negative.
    pub fn negative(mut self, css: impl Into<String>) -> StyleRules {
        self.rules.push(StyleRule::Negative(css.into()));
        self
    }

    /// Style to apply when the value is positive.
    pub fn positive(mut self, css: impl Into<String>) -> StyleRules {
        self.rules.push(StyleRule::Positive(css.into()));
        self
    }

    /// Delegate to another rule set, evaluated against the same content.
    pub fn copy(mut self, rules: Arc<StyleRules>) -> StyleRules {
        self.rules.push(StyleRule::Copy(rules));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the style for the given content. Returns the empty string
    /// when no rule matches.
    pub fn resolve(&self, content: &str) -> String {
        self.resolve_at(content, 0)
    }

    fn resolve_at(&self, content: &str, depth: usize) -> String {
        if depth > MAX_COPY_DEPTH {
            log::warn!("conditional style copy chain exceeds depth {MAX_COPY_DEPTH}, stopping");
            return String::new();
        }
        let value = numeric::float_value(content);
        for rule in &self.rules {
            match rule {
                StyleRule::Negative(css) if value < 0.0 => {
                    log::debug!("negative => {css}");
                    return css.clone();
                }
                StyleRule::Positive(css) if value > 0.0 => {
                    log::debug!("positive => {css}");
                    return css.clone();
                }
                StyleRule::Copy(rules) => return rules.resolve_at(content, depth + 1),
                _ => {}
            }
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_rules() -> StyleRules {
        StyleRules::new()
            .negative("color:red;")
            .positive("color:green;")
    }

    #[test]
    fn test_negative_matches() {
        assert_eq!(sign_rules().resolve("-5"), "color:red;");
    }

    #[test]
    fn test_positive_matches() {
        assert_eq!(sign_rules().resolve("5"), "color:green;");
    }

    #[test]
    fn test_zero_matches_nothing() {
        assert_eq!(sign_rules().resolve("0"), "");
    }

    #[test]
    fn test_plain_text_matches_nothing() {
        assert_eq!(sign_rules().resolve("pending"), "");
    }

    #[test]
    fn test_lenient_numeric_prefix() {
        assert_eq!(sign_rules().resolve("-5 kg"), "color:red;");
    }

    #[test]
    fn test_first_match_wins() {
        let rules = StyleRules::new()
            .negative("color:red;")
            .negative("color:maroon;");
        assert_eq!(rules.resolve("-1"), "color:red;");
    }

    #[test]
    fn test_copy_delegates() {
        let target = Arc::new(sign_rules());
        let rules = StyleRules::new().copy(target);
        assert_eq!(rules.resolve("-5"), "color:red;");
        assert_eq!(rules.resolve("5"), "color:green;");
    }

    #[test]
    fn test_copy_stops_iteration() {
        // copy matches unconditionally, so rules after it never run
        let target = Arc::new(StyleRules::new());
        let rules = StyleRules::new().copy(target).negative("color:red;");
        assert_eq!(rules.resolve("-5"), "");
    }

    #[test]
    fn test_deep_copy_chain_is_cut() {
        let mut rules = Arc::new(sign_rules());
        for _ in 0..MAX_COPY_DEPTH + 2 {
            rules = Arc::new(StyleRules::new().copy(rules));
        }
        assert_eq!(rules.resolve("-5"), "");
    }

    #[test]
    fn test_shallow_copy_chain_resolves() {
        let mut rules = Arc::new(sign_rules());
        for _ in 0..3 {
            rules = Arc::new(StyleRules::new().copy(rules));
        }
        assert_eq!(rules.resolve("-5"), "color:red;");
    }
}

//! The cell surface consumed by the formatter.

/// Minimal view of a renderable table cell.
///
/// The table-rendering side owns the real cell type; the formatter only
/// needs to read and replace its content and append to its style
/// attribute.
pub trait Cell {
    fn content(&self) -> String;
    fn set_content(&mut self, content: String);
    fn style(&self) -> String;
    fn set_style(&mut self, style: String);
}

/// A plain owned cell, mainly useful in tests and examples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainCell {
    pub content: String,
    pub style: String,
}

impl PlainCell {
    pub fn new(content: impl Into<String>) -> PlainCell {
        PlainCell {
            content: content.into(),
            style: String::new(),
        }
    }
}

impl Cell for PlainCell {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
    }

    fn style(&self) -> String {
        self.style.clone()
    }

    fn set_style(&mut self, style: String) {
        self.style = style;
    }
}

//! Parsed HTML document used by the field extractors
//!
//! Wraps a `scraper::Html` tree and exposes the three views the extractors
//! need: the flattened text, the hyperlink targets, and the title/heading
//! elements.

use scraper::{Html, Node, Selector};

/// Elements whose text never renders
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "template", "noscript"];

/// An HTML page parsed into a DOM tree
///
/// Parsing never fails: malformed markup is repaired by the parser, and a
/// document with nothing useful in it simply yields no matches downstream.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses an HTML body
    ///
    /// # Example
    ///
    /// ```
    /// use biz_scraper::extract::ParsedDocument;
    ///
    /// let doc = ParsedDocument::parse("<html><head><title>Test</title></head></html>");
    /// assert_eq!(doc.title(), Some("Test".to_string()));
    /// ```
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Returns the visible text of the document in document order
    ///
    /// Text inside `<script>`, `<style>`, `<template>` and `<noscript>` is
    /// left out. No separators are inserted between nodes, so adjacent
    /// elements with no whitespace between them run together.
    pub fn text(&self) -> String {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) if !node.ancestors().any(|a| is_hidden(a.value())) => {
                    Some(&**text)
                }
                _ => None,
            })
            .collect()
    }

    /// Returns the raw `href` of every `<a>` element, in document order
    pub fn links(&self) -> Vec<String> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        self.html
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// Returns the trimmed text of the first `<title>` element, if non-empty
    pub fn title(&self) -> Option<String> {
        self.first_text("title")
    }

    /// Returns the trimmed text of the first `<h1>` element, if non-empty
    pub fn first_heading(&self) -> Option<String> {
        self.first_text("h1")
    }

    fn first_text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;

        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

fn is_hidden(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
}

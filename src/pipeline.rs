//! The ordered rule table.
//!
//! Order matters: later rules see the output of earlier ones. Block rules
//! run before inline rules, which run before paragraph wrapping and
//! line-break flattening.

use log::trace;
use pulldown_cmark::HeadingLevel;

use crate::block::{self, ListKind};
use crate::inline;
use crate::line::normalize_line_endings;
use crate::paragraph;

/// One text-to-text rewrite step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `# text` through `###### text`, one level per rule.
    Heading(HeadingLevel),
    /// `- text`
    UnorderedList,
    /// `* text`
    OrderedList,
    /// `**text**`
    Bold,
    /// `__text__`
    Emphasis,
    /// `[[text]]`
    Hash,
    /// `((text))`
    Strip,
    /// Wrap remaining lines in `<p>`.
    Paragraph,
    /// `\n` to `<br />`.
    LineBreak,
}

/// Every rule, in application order.
pub const RULES: [Rule; 14] = [
    Rule::Heading(HeadingLevel::H1),
    Rule::Heading(HeadingLevel::H2),
    Rule::Heading(HeadingLevel::H3),
    Rule::Heading(HeadingLevel::H4),
    Rule::Heading(HeadingLevel::H5),
    Rule::Heading(HeadingLevel::H6),
    Rule::UnorderedList,
    Rule::OrderedList,
    Rule::Bold,
    Rule::Emphasis,
    Rule::Hash,
    Rule::Strip,
    Rule::Paragraph,
    Rule::LineBreak,
];

impl Rule {
    /// Stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Heading(HeadingLevel::H1) => "heading-1",
            Rule::Heading(HeadingLevel::H2) => "heading-2",
            Rule::Heading(HeadingLevel::H3) => "heading-3",
            Rule::Heading(HeadingLevel::H4) => "heading-4",
            Rule::Heading(HeadingLevel::H5) => "heading-5",
            Rule::Heading(HeadingLevel::H6) => "heading-6",
            Rule::UnorderedList => "unordered-list",
            Rule::OrderedList => "ordered-list",
            Rule::Bold => "bold",
            Rule::Emphasis => "emphasis",
            Rule::Hash => "hash",
            Rule::Strip => "strip",
            Rule::Paragraph => "paragraph",
            Rule::LineBreak => "line-break",
        }
    }

    /// Apply this rule to the whole working text, producing a new string.
    pub fn apply(&self, text: &str) -> String {
        match *self {
            Rule::Heading(level) => block::rewrite_headings(text, level),
            Rule::UnorderedList => block::rewrite_list_items(text, ListKind::Unordered),
            Rule::OrderedList => block::rewrite_list_items(text, ListKind::Ordered),
            Rule::Bold => inline::rewrite_bold(text),
            Rule::Emphasis => inline::rewrite_emphasis(text),
            Rule::Hash => inline::rewrite_digests(text),
            Rule::Strip => inline::rewrite_stripped(text),
            Rule::Paragraph => paragraph::wrap_paragraphs(text),
            Rule::LineBreak => paragraph::flatten_line_breaks(text),
        }
    }
}

/// Run every rule over `source`, without the final generic rendering pass.
///
/// The result is a single line of HTML-flavored markup.
///
/// # Example
/// ```
/// let text = markdown2html::rewrite("# Title\n**bold**");
/// assert_eq!(text, "<p><h1>Title</h1></p><br /><p><b>bold</b></p>");
/// ```
pub fn rewrite(source: &str) -> String {
    let mut text = normalize_line_endings(source).into_owned();
    for rule in RULES {
        text = rule.apply(&text);
        trace!("rule {}: {} bytes", rule.name(), text.len());
    }
    text
}

//! Article detail projections.
//!
//! # Invariants
//! - Featured and related picks keep catalog order.
//! - Related articles never include the article itself.
//! - Text derivations work on the HTML body without a DOM.

use crate::catalog::Catalog;
use crate::model::article::Article;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const FEATURED_COUNT: usize = 3;
pub const RELATED_LIMIT: usize = 3;
pub const WORDS_PER_MINUTE: usize = 200;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<h([23])\b[^>]*>(.*?)</h[23]\s*>").expect("valid heading regex")
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One `h2`/`h3` entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    /// Fragment id, `heading-{index}` in document order.
    pub anchor: String,
    pub text: String,
}

/// The first `n` articles, shown as the featured block.
pub fn featured(catalog: &Catalog<Article>, n: usize) -> &[Article] {
    let items = catalog.items();
    &items[..n.min(items.len())]
}

/// Other articles sharing the category or at least one tag.
pub fn related<'c>(catalog: &'c Catalog<Article>, article: &Article, n: usize) -> Vec<&'c Article> {
    catalog
        .iter()
        .filter(|candidate| candidate.id != article.id)
        .filter(|candidate| {
            candidate.category == article.category
                || candidate.tags.iter().any(|tag| article.tags.contains(tag))
        })
        .take(n)
        .collect()
}

/// Estimated reading time in whole minutes.
///
/// Tags are removed without inserting spaces, so `<p>a</p><p>b</p>` counts
/// as one word. Empty text reads in 0 minutes; any other text takes at
/// least 1.
pub fn reading_time_minutes(html: &str) -> u32 {
    let text = HTML_TAG_RE.replace_all(html, "");
    let words = text.split_whitespace().count();
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE)).unwrap_or(u32::MAX)
}

/// Table of contents from `h2`/`h3` headings.
pub fn outline(html: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps.get(1)?.as_str().parse::<u8>().ok()?;
            let inner = caps.get(2)?.as_str();
            Some((level, plain_text(inner)))
        })
        .filter(|(_, text)| !text.is_empty())
        .enumerate()
        .map(|(index, (level, text))| Heading {
            level,
            anchor: format!("heading-{index}"),
            text,
        })
        .collect()
}

fn plain_text(html: &str) -> String {
    let stripped = HTML_TAG_RE.replace_all(html, " ");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{outline, plain_text, reading_time_minutes};

    #[test]
    fn reading_time_rounds_up_and_ignores_markup() {
        assert_eq!(reading_time_minutes(""), 0);
        assert_eq!(reading_time_minutes("<p>one two</p>"), 1);
        assert_eq!(reading_time_minutes("<p></p>"), 0);
        let long = "word ".repeat(401);
        assert_eq!(reading_time_minutes(&long), 3);
        let glued = "<p>word</p>".repeat(401);
        assert_eq!(reading_time_minutes(&glued), 1);
    }

    #[test]
    fn outline_collects_h2_and_h3_in_order() {
        let html = "<h1>Top</h1><h2 class=\"x\">Intro</h2><p>..</p><H3>Deep <em>dive</em></H3><h2></h2>";
        let headings = outline(html);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].text, "Intro");
        assert_eq!(headings[1].level, 3);
        assert_eq!(headings[1].text, "Deep dive");
        assert_eq!(headings[1].anchor, "heading-1");
    }

    #[test]
    fn plain_text_collapses_whitespace() {
        assert_eq!(plain_text("  a\n<b>b</b>\tc "), "a b c");
    }
}

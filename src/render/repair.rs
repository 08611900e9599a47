//! Text repair applied to assembled chapter markup.
//!
//! Two repairs run over every chapter: words split across line breaks are
//! joined again, and plain-text URLs are turned into anchors.

use std::fmt;
use std::ops::Range;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHENATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)-\s+(\w+)").expect("Invalid hyphenation regex"));

static VALID_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/?#\s]+").expect("Invalid URL validation regex")
});

static URL_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    let label = r"[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?";
    let pattern = format!(
        r#"(?i)\b(?:https?://[^\s<>"']+|www\.[^\s<>"']+|{label}(?:\.{label})*\.(?:{tlds})\b(?:[/?#][^\s<>"']*)?)"#,
        label = label,
        tlds = KNOWN_TLDS.join("|"),
    );
    Regex::new(&pattern).expect("Invalid URL candidate regex")
});

/// Top-level domains recognised on bare host names.
const KNOWN_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "name", "pro", "io", "ai",
    "app", "dev", "tech", "online", "site", "xyz", "me", "co", "tv", "us", "uk", "ca", "au", "de",
    "fr", "jp", "kr", "cn", "in", "br", "ru", "nl", "es", "it", "ch", "se", "no", "eu",
];

/// Join words broken by a hyphen followed by whitespace.
///
/// ```
/// use reprint::render::repair::dehyphenate;
///
/// assert_eq!(dehyphenate("inter- esting"), "interesting");
/// ```
pub fn dehyphenate(text: &str) -> String {
    HYPHENATION.replace_all(text, "$1$2").into_owned()
}

/// A URL candidate located in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    /// Matched text
    pub text: String,
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
}

impl UrlMatch {
    /// Create a new match.
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Locates URL candidates in text.
pub trait UrlExtractor: Send + Sync {
    /// Find URL candidates, with byte offsets into `text`.
    fn find_urls(&self, text: &str) -> Vec<UrlMatch>;
}

/// Regex-based URL extractor.
///
/// Recognises `http(s)://` URLs, `www.` hosts and bare domains ending in a
/// known top-level domain. Candidates inside markup tags, inside an open
/// anchor, or directly after `@` are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternUrlExtractor;

impl PatternUrlExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl UrlExtractor for PatternUrlExtractor {
    fn find_urls(&self, text: &str) -> Vec<UrlMatch> {
        let masked = masked_ranges(text);
        URL_CANDIDATE
            .find_iter(text)
            .filter(|m| !text[..m.start()].ends_with('@'))
            .filter(|m| !is_masked(&masked, m.start()))
            .map(|m| UrlMatch::new(m.as_str(), m.start(), m.end()))
            .collect()
    }
}

/// Sorted, disjoint byte ranges covering markup tags and the contents of
/// existing anchors. An unterminated tag or anchor runs to the end.
fn masked_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut anchor_open = None;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('<') {
        let open = pos + offset;
        let close = text[open..].find('>').map_or(text.len(), |i| open + i + 1);
        let tag = &text[open..close];

        if tag.starts_with("</a>") {
            if let Some(start) = anchor_open.take() {
                ranges.push(start..close);
                pos = close;
                continue;
            }
        } else if anchor_open.is_none() && (tag.starts_with("<a ") || tag.starts_with("<a>")) {
            anchor_open = Some(open);
        }
        ranges.push(open..close);
        pos = close;
    }
    if let Some(start) = anchor_open {
        ranges.push(start..text.len());
    }

    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

fn is_masked(ranges: &[Range<usize>], pos: usize) -> bool {
    let idx = ranges.partition_point(|r| r.end <= pos);
    ranges.get(idx).is_some_and(|r| r.start < pos)
}

/// Check that a URL has a scheme and a network location.
pub fn is_valid_url(url: &str) -> bool {
    VALID_URL.is_match(url)
}

/// Replace URL candidates with anchors.
///
/// ```
/// use reprint::render::repair::{linkify, PatternUrlExtractor};
///
/// assert_eq!(
///     linkify("Visit example.com now.", &PatternUrlExtractor),
///     r#"Visit <a href="https://example.com">example.com</a> now."#
/// );
/// ```
pub fn linkify(text: &str, extractor: &dyn UrlExtractor) -> String {
    let mut matches = extractor.find_urls(text);
    matches.sort_by_key(|m| m.start);

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in matches {
        if m.start < cursor
            || m.start > m.end
            || m.end > text.len()
            || !text.is_char_boundary(m.start)
            || !text.is_char_boundary(m.end)
        {
            continue;
        }

        let Some(link) = anchor_for(&text[m.start..m.end]) else {
            debug!("skipping invalid URL candidate {:?}", m.text);
            continue;
        };

        output.push_str(&text[cursor..m.start]);
        output.push_str(&link);
        cursor = m.end;
    }

    output.push_str(&text[cursor..]);
    output
}

/// Escaped delimiters that end a URL; a URL quoted as `<...>` reaches the
/// repair stage as `&lt;...&gt;`.
const CLOSING_ENTITIES: &[&str] = &["&lt;", "&gt;", "&quot;", "&#39;", "&#x27;"];

fn anchor_for(span: &str) -> Option<String> {
    let cut = CLOSING_ENTITIES
        .iter()
        .filter_map(|entity| span.find(entity))
        .min()
        .unwrap_or(span.len());
    let (span, rest) = span.split_at(cut);

    let is_trim = |c: char| matches!(c, ' ' | '.' | ',');
    let lead = span.len() - span.trim_start_matches(is_trim).len();
    let core = span.trim_matches(is_trim);
    if core.is_empty() {
        return None;
    }
    let (leading, trailing) = (&span[..lead], &span[lead + core.len()..]);

    let cleaned: String = core.chars().filter(|c| *c != ' ').collect();
    let lower = cleaned.to_ascii_lowercase();
    let href = if lower.starts_with("http://") || lower.starts_with("https://") {
        cleaned.clone()
    } else {
        format!("https://{}", cleaned)
    };

    if !is_valid_url(&href) {
        return None;
    }

    Some(format!(
        "{}<a href=\"{}\">{}</a>{}{}",
        leading,
        href.replace('"', "&quot;"),
        cleaned,
        trailing,
        rest
    ))
}

/// Options for the repair pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Join words hyphenated across line breaks
    pub fix_hyphenation: bool,

    /// Turn plain-text URLs into anchors
    pub link_urls: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            fix_hyphenation: true,
            link_urls: true,
        }
    }
}

impl RepairOptions {
    /// Options with every repair disabled.
    pub fn none() -> Self {
        Self {
            normalize_unicode: false,
            fix_hyphenation: false,
            link_urls: false,
        }
    }

    /// Enable or disable dehyphenation.
    pub fn with_hyphenation(mut self, enabled: bool) -> Self {
        self.fix_hyphenation = enabled;
        self
    }

    /// Enable or disable URL linking.
    pub fn with_links(mut self, enabled: bool) -> Self {
        self.link_urls = enabled;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }
}

/// Repair pipeline applied to each chapter's content.
pub struct RepairPipeline {
    options: RepairOptions,
    extractor: Box<dyn UrlExtractor>,
}

impl fmt::Debug for RepairPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepairPipeline")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self::new(RepairOptions::default())
    }
}

impl RepairPipeline {
    /// Create a pipeline using the pattern URL extractor.
    pub fn new(options: RepairOptions) -> Self {
        Self {
            options,
            extractor: Box::new(PatternUrlExtractor::new()),
        }
    }

    /// Replace the URL extractor.
    pub fn with_extractor(mut self, extractor: Box<dyn UrlExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the options, keeping the URL extractor.
    pub fn with_options(mut self, options: RepairOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this pipeline was built with.
    pub fn options(&self) -> &RepairOptions {
        &self.options
    }

    /// Run the enabled repairs over `text`.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.fix_hyphenation {
            result = dehyphenate(&result);
        }

        if self.options.link_urls {
            result = linkify(&result, self.extractor.as_ref());
        }

        result
    }
}

//! Rendering module for turning reconstructed elements into chapter HTML.

pub mod chapters;
mod html;
mod json;
mod options;
pub mod repair;
mod stats;
mod styles;
pub mod visitor;

pub use chapters::{ChapterAssembler, FRONT_MATTER_TITLE};
pub use html::{
    escape_html, footnote_id, footnote_id_salted, heading_depth, heading_to_html,
    paragraph_to_html, table_to_html, HtmlRenderer,
};
pub use json::{to_json, toc_to_json, JsonFormat};
pub use options::{FrontMatter, RenderOptions};
pub use repair::{
    dehyphenate, is_valid_url, linkify, PatternUrlExtractor, RepairOptions, RepairPipeline,
    UrlExtractor, UrlMatch,
};
pub use stats::BuildStats;
pub use styles::{apply_stylesheet, DEFAULT_STYLESHEET};
pub use visitor::{DefaultVisitor, ElementVisitor, SkipRolesVisitor, VisitorAction};

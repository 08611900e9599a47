//! Stylesheet injected at the start of every chapter body.

/// Default chapter stylesheet: bordered tables with shaded headers,
/// indented footnotes and images scaled to the viewport.
pub const DEFAULT_STYLESHEET: &str = r#"<style>
.table-container { margin: 1em 0; overflow-x: auto; }
.epub-table { border-collapse: collapse; width: 100%; margin: 1em 0; }
.epub-table th, .epub-table td { border: 1px solid #ddd; padding: 8px; text-align: left; }
.epub-table th { background-color: #f5f5f5; }
aside[epub|type='footnote'] { font-size: 0.9em; color: #666; margin: 1em 0; padding-left: 1em; border-left: 3px solid #ddd; }
img { max-width: 100%; height: auto; }
</style>
"#;

/// Prefix a chapter body with a stylesheet.
pub fn apply_stylesheet(stylesheet: &str, content: &str) -> String {
    let mut styled = String::with_capacity(stylesheet.len() + content.len());
    styled.push_str(stylesheet);
    styled.push_str(content);
    styled
}

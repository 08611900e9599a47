//! Rendering options and configuration.

/// Options for rendering elements into chapter HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// What to do with content that precedes the first section heading
    pub front_matter: FrontMatter,

    /// Title of the implicit front-matter chapter (document title)
    pub front_matter_title: Option<String>,

    /// Mix each footnote's position into its identifier
    pub unique_footnote_ids: bool,

    /// Escape `&`, `<` and `>` in element text
    pub escape_html: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the front-matter policy.
    pub fn with_front_matter(mut self, front_matter: FrontMatter) -> Self {
        self.front_matter = front_matter;
        self
    }

    /// Drop content that precedes the first section heading.
    pub fn drop_front_matter(mut self) -> Self {
        self.front_matter = FrontMatter::Drop;
        self
    }

    /// Set the title used for the front-matter chapter.
    pub fn with_front_matter_title(mut self, title: impl Into<String>) -> Self {
        self.front_matter_title = Some(title.into());
        self
    }

    /// Enable or disable position-salted footnote identifiers.
    pub fn with_unique_footnote_ids(mut self, unique: bool) -> Self {
        self.unique_footnote_ids = unique;
        self
    }

    /// Enable or disable HTML escaping of element text.
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            front_matter: FrontMatter::Chapter,
            front_matter_title: None,
            unique_footnote_ids: false,
            escape_html: true,
        }
    }
}

/// Handling of content found before the first section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontMatter {
    /// Collect it into an implicit first chapter
    #[default]
    Chapter,
    /// Discard it
    Drop,
}

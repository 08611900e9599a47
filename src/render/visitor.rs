//! Visitor hooks for customizing chapter assembly.
//!
//! A visitor sees every element before its markup is buffered into a
//! chapter and may keep the default markup, replace it, or drop it.
//!
//! # Example
//!
//! ```
//! use reprint::render::visitor::{ElementVisitor, VisitorAction};
//! use reprint::model::Table;
//!
//! struct TablePlaceholder;
//!
//! impl ElementVisitor for TablePlaceholder {
//!     fn visit_table(&mut self, _table: &Table) -> VisitorAction {
//!         VisitorAction::Replace("<p>[table]</p>".to_string())
//!     }
//! }
//! ```

use crate::model::{Paragraph, ParagraphRole, Table};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom output.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting elements during chapter assembly.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait ElementVisitor {
    /// Called before rendering a non-heading paragraph.
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        let _ = para;
        VisitorAction::Continue
    }

    /// Called before rendering a table.
    fn visit_table(&mut self, table: &Table) -> VisitorAction {
        let _ = table;
        VisitorAction::Continue
    }

    /// Called before rendering a chapter heading.
    ///
    /// The chapter is opened regardless of the action; `Skip` only drops
    /// the heading markup.
    fn visit_heading(&mut self, title: &str, level: u8) -> VisitorAction {
        let _ = (title, level);
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl ElementVisitor for DefaultVisitor {}

/// Visitor that drops paragraphs with the given roles, e.g. running
/// headers and footers.
#[derive(Debug, Clone, Default)]
pub struct SkipRolesVisitor {
    roles: Vec<ParagraphRole>,
}

impl SkipRolesVisitor {
    /// Create a visitor that skips the given roles.
    pub fn new(roles: impl IntoIterator<Item = ParagraphRole>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Skip page headers and page footers.
    pub fn running_heads() -> Self {
        Self::new([ParagraphRole::PageHeader, ParagraphRole::PageFooter])
    }
}

impl ElementVisitor for SkipRolesVisitor {
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        if self.roles.contains(&para.role) {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundingRegion;

    #[test]
    fn test_default_visitor_continues() {
        let region = BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0);
        let mut visitor = DefaultVisitor::new();
        assert_eq!(
            visitor.visit_paragraph(&Paragraph::new("x", region.clone())),
            VisitorAction::Continue
        );
        assert_eq!(
            visitor.visit_table(&Table::new(1, 1, region)),
            VisitorAction::Continue
        );
        assert_eq!(visitor.visit_heading("1. A", 1), VisitorAction::Continue);
    }

    #[test]
    fn test_skip_running_heads() {
        let region = BoundingRegion::rect(1, 0.0, 0.0, 1.0, 1.0);
        let mut visitor = SkipRolesVisitor::running_heads();
        let footer = Paragraph::with_role("7", ParagraphRole::PageFooter, region.clone());
        let note = Paragraph::with_role("1 Note", ParagraphRole::Footnote, region);

        assert!(visitor.visit_paragraph(&footer).should_skip());
        assert!(!visitor.visit_paragraph(&note).should_skip());
    }

    #[test]
    fn test_action_replacement() {
        let action = VisitorAction::Replace("<hr/>".to_string());
        assert_eq!(action.replacement(), Some("<hr/>"));
        assert!(VisitorAction::Skip.replacement().is_none());
    }
}

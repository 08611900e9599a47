//! Paragraph and role types.

use serde::{Deserialize, Deserializer, Serialize};

use super::BoundingRegion;

/// A paragraph of text reported by the layout service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// The text content
    pub content: String,

    /// Semantic role tag
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: ParagraphRole,

    /// Where the paragraph sits on its page(s)
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,
}

impl Paragraph {
    /// Create a body paragraph.
    pub fn new(content: impl Into<String>, region: BoundingRegion) -> Self {
        Self {
            content: content.into(),
            role: ParagraphRole::Body,
            bounding_regions: vec![region],
        }
    }

    /// Create a paragraph with an explicit role.
    pub fn with_role(content: impl Into<String>, role: ParagraphRole, region: BoundingRegion) -> Self {
        Self {
            role,
            ..Self::new(content, region)
        }
    }

    /// The first bounding region, the only one used for placement.
    pub fn region(&self) -> Option<&BoundingRegion> {
        self.bounding_regions.first()
    }

    /// Check if this paragraph opens a new chapter.
    pub fn is_section_heading(&self) -> bool {
        self.role == ParagraphRole::SectionHeading
    }

    /// Check if this paragraph is rendered as a footnote block.
    pub fn is_footnote(&self) -> bool {
        matches!(self.role, ParagraphRole::PageFooter | ParagraphRole::Footnote)
    }
}

/// Paragraph role as tagged by the layout service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParagraphRole {
    /// Document title
    Title,
    /// Section heading; starts a chapter
    SectionHeading,
    /// Running page header
    PageHeader,
    /// Running page footer
    PageFooter,
    /// Footnote
    Footnote,
    /// Plain body text (no role reported)
    #[default]
    #[serde(other)]
    Body,
}

/// Treat `null` the same as an absent role.
fn deserialize_role<'de, D>(deserializer: D) -> Result<ParagraphRole, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ParagraphRole>::deserialize(deserializer)?.unwrap_or_default())
}

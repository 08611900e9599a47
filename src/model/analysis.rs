//! Layout-analysis result, the input boundary.

use serde::{Deserialize, Serialize};
use std::io::Read;

use super::{Paragraph, ParagraphRole, Table};
use crate::error::Result;

/// The paragraphs and tables returned by the layout service for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Paragraphs in extraction order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Tables in extraction order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl AnalyzeResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a result from its JSON form.
    ///
    /// The service wraps the payload in `{"analyzeResult": {...}}`; both the
    /// wrapped and the bare form are accepted.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a result from a reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    fn from_value(mut value: serde_json::Value) -> Result<Self> {
        if let Some(inner) = value.get_mut("analyzeResult") {
            let inner = inner.take();
            return Ok(serde_json::from_value(inner)?);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// The first paragraph tagged as the document title.
    pub fn title(&self) -> Option<&str> {
        self.paragraphs
            .iter()
            .find(|p| p.role == ParagraphRole::Title)
            .map(|p| p.content.trim())
    }

    /// Check if the result has no content.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "succeeded",
        "analyzeResult": {
            "apiVersion": "2024-11-30",
            "paragraphs": [
                {"content": "Annual Report", "role": "title",
                 "boundingRegions": [{"pageNumber": 1, "polygon": [1, 1, 5, 1, 5, 2, 1, 2]}]},
                {"content": "Revenue grew.",
                 "boundingRegions": [{"pageNumber": 1, "polygon": [1, 3, 5, 3, 5, 4, 1, 4]}]}
            ],
            "tables": [
                {"rowCount": 1, "columnCount": 2,
                 "cells": [
                     {"rowIndex": 0, "columnIndex": 0, "content": "Q1", "kind": "columnHeader"},
                     {"rowIndex": 0, "columnIndex": 1, "content": "Q2"}
                 ],
                 "boundingRegions": [{"pageNumber": 1, "polygon": [1, 5, 5, 5, 5, 6, 1, 6]}]}
            ]
        }
    }"#;

    #[test]
    fn test_parse_wrapped() {
        let result = AnalyzeResult::from_json_str(SAMPLE).unwrap();
        assert_eq!(result.paragraphs.len(), 2);
        assert_eq!(result.tables.len(), 1);
        assert_eq!(result.tables[0].cells.len(), 2);
        assert_eq!(result.title(), Some("Annual Report"));
    }

    #[test]
    fn test_parse_bare_and_reader() {
        let bare = r#"{"paragraphs": [{"content": "only"}]}"#;
        let result = AnalyzeResult::from_reader(bare.as_bytes()).unwrap();
        assert_eq!(result.paragraphs.len(), 1);
        assert!(result.tables.is_empty());
        assert!(result.title().is_none());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(AnalyzeResult::from_json_str("not json").is_err());
        assert!(AnalyzeResult::from_json_str(r#"{"paragraphs": 3}"#).is_err());
    }
}

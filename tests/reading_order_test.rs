//! Integration tests for reading-order reconstruction and overlap filtering.

use reprint::layout::{classify, classify_owned, filter_overlapping, reading_order, reconstruct};
use reprint::model::{intersects, AnalyzeResult, BoundingBox, BoundingRegion, DocumentElement};
use reprint::Error;

const ANALYSIS: &str = r#"{
    "analyzeResult": {
        "paragraphs": [
            {"content": "p1", "boundingRegions": [{"pageNumber": 1, "polygon": [0, 0, 10, 0, 10, 1, 0, 1]}]},
            {"content": "p2", "boundingRegions": [{"pageNumber": 1, "polygon": [0, 2, 10, 2, 10, 3, 0, 3]}]},
            {"content": "p3", "boundingRegions": [{"pageNumber": 1, "polygon": [0, 6, 10, 6, 10, 7, 0, 7]}]},
            {"content": "q1", "boundingRegions": [{"pageNumber": 2, "polygon": [0, 0, 10, 0, 10, 1, 0, 1]}]}
        ],
        "tables": [
            {
                "rowCount": 1,
                "columnCount": 1,
                "cells": [{"rowIndex": 0, "columnIndex": 0, "content": "t"}],
                "boundingRegions": [{"pageNumber": 1, "polygon": [0, 2.5, 10, 2.5, 10, 4, 0, 4]}]
            }
        ]
    }
}"#;

fn contents(elements: &[DocumentElement]) -> Vec<String> {
    elements
        .iter()
        .map(|e| match e {
            DocumentElement::Paragraph(p) => p.content.clone(),
            DocumentElement::Table(t) => format!("[{}]", t.plain_text()),
        })
        .collect()
}

#[test]
fn test_table_spliced_before_colliding_paragraph() {
    let result = AnalyzeResult::from_json_str(ANALYSIS).unwrap();
    let ordered = reconstruct(classify(&result)).unwrap();

    assert_eq!(contents(&ordered), vec!["p1", "[t]", "p2", "p3", "q1"]);
}

#[test]
fn test_filter_drops_paragraph_inside_table() {
    let result = AnalyzeResult::from_json_str(ANALYSIS).unwrap();
    let kept = filter_overlapping(reconstruct(classify_owned(result)).unwrap()).unwrap();

    assert_eq!(contents(&kept), vec!["p1", "[t]", "p3", "q1"]);
}

#[test]
fn test_reading_order_is_permutation() {
    let result = AnalyzeResult::from_json_str(ANALYSIS).unwrap();
    let elements = classify(&result);
    let mut order = reading_order(&elements).unwrap();

    assert_eq!(order.len(), elements.len());
    order.sort_unstable();
    assert_eq!(order, (0..elements.len()).collect::<Vec<_>>());
}

#[test]
fn test_missing_region_reports_kind_and_index() {
    let json = r#"{"paragraphs": [
        {"content": "ok", "boundingRegions": [{"pageNumber": 1, "polygon": [0, 0, 1, 0, 1, 1, 0, 1]}]},
        {"content": "lost"}
    ]}"#;
    let result = AnalyzeResult::from_json_str(json).unwrap();
    let err = reconstruct(classify(&result)).unwrap_err();

    assert!(matches!(err, Error::MissingBoundingRegion { index: 1, .. }));
    assert_eq!(err.to_string(), "paragraph #1 has no bounding region");
}

#[test]
fn test_intersection_properties() {
    let a = BoundingRegion::rect(1, 0.0, 0.0, 2.0, 2.0);
    let b = BoundingRegion::rect(1, 1.0, 1.0, 3.0, 3.0);
    let far = BoundingRegion::rect(1, 5.0, 0.0, 6.0, 2.0);

    assert!(a.intersects(&b).unwrap());
    assert_eq!(a.intersects(&b).unwrap(), b.intersects(&a).unwrap());
    assert!(!a.intersects(&far).unwrap());
    assert!(a.intersects(&a).unwrap());

    let boxed = a.bounding_box().unwrap();
    assert!(intersects(&boxed, &boxed));
    assert!(!intersects(&boxed, &far.bounding_box().unwrap()));
}

#[test]
fn test_odd_polygon_rejected() {
    assert!(BoundingBox::from_polygon(&[0.0, 1.0, 2.0]).is_err());
    assert!(BoundingBox::from_polygon(&[]).is_err());
}

//! Integration tests for certificate rendering

use coo_model::parse_document;
use coo_template::{flatten_line_items, CertificateRenderer};

const SAMPLE_DOCUMENT: &str = include_str!("../data/sample-certificate.json");

#[test]
fn test_render_sample_certificate() {
    let document = parse_document(SAMPLE_DOCUMENT).unwrap();
    let renderer = CertificateRenderer::new().unwrap();
    let html = renderer.render(&document).unwrap();

    // Fixed form chrome
    assert!(html.contains("CERTIFICATE OF ORIGIN"));
    assert!(html.contains("Form for China-Australia Free Trade Agreement"));
    assert!(html.contains("Issued in: AUSTRALIA"));

    // Box 1 - exporter
    assert!(html.contains("TREASURY WINE ESTATES VINTNERS LIMITED"));
    assert!(html.contains("161 Collins Street, MELBOURNE,"));
    assert!(html.contains("VIC 3000 AU"));
    assert!(html.contains("ABN abr.gov.au:abn:55004094599"));

    // Box 2 - producer from the first consignment item
    assert!(html.contains("South Coast Winery"));

    // Box 4 - transport
    assert!(html.contains("2020-04-01"));
    assert!(html.contains("Melbourne"));
    assert!(html.contains("Shanghai"));

    // Goods table - package marks show the identifier suffix only
    assert!(html.contains("59312345670002345"));
    assert!(!html.contains("<td>gs1.org:sscc:59312345670002345</td>"));
    assert!(html.contains("0.55 m3, 450 kg"));
    assert!(html.contains("1122345"));
    assert!(html.contains("2020-01-07"));

    // Box 14 - certification
    assert!(html.contains("ADELAIDE"));
    assert!(html.contains("2020-04-07"));
}

#[test]
fn test_sample_row_count_and_suppression() {
    let document = parse_document(SAMPLE_DOCUMENT).unwrap();
    let items = document
        .supply_chain_consignment
        .map(|c| c.included_consignment_items)
        .unwrap_or_default();

    let rows = flatten_line_items(&items);

    // One row per transport package: 2 for line item 1, 1 for line item 2.
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].sequence_number, Some(1));
    assert_eq!(rows[0].description.as_deref(), Some("Penfolds Bin 23 Pinot Noir 2018"));
    assert_eq!(rows[0].origin_criteria.as_deref(), Some("WP"));

    // Second package of the same line item: line-item fields absent,
    // invoice details repeated.
    assert_eq!(rows[1].sequence_number, None);
    assert_eq!(rows[1].description, None);
    assert_eq!(rows[1].code, None);
    assert_eq!(rows[1].origin_criteria, None);
    assert_eq!(rows[1].marks.as_deref(), Some("59312345670002346"));
    assert_eq!(rows[1].invoice_number.as_deref(), Some("1122345"));

    // New line item restarts the first-row rule.
    assert_eq!(rows[2].sequence_number, Some(2));
    assert_eq!(rows[2].invoice_number.as_deref(), Some("1122346"));
}

#[test]
fn test_render_is_deterministic() {
    let document = parse_document(SAMPLE_DOCUMENT).unwrap();
    let renderer = CertificateRenderer::new().unwrap();

    let first = renderer.render(&document).unwrap();
    let second = renderer.render(&document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_partial_document_leaves_blanks() {
    let document = parse_document(
        r#"{
            "iD": "wfa.org.au:coo:PARTIAL",
            "supplyChainConsignment": {
                "exporter": { "name": "Lone Exporter Pty Ltd" }
            }
        }"#,
    )
    .unwrap();

    let renderer = CertificateRenderer::new().unwrap();
    let html = renderer.render(&document).unwrap();

    assert!(html.contains("Lone Exporter Pty Ltd"));
    assert!(html.contains("wfa.org.au:coo:PARTIAL"));
    // No departure date in the source: the field renders blank, not "Invalid Date".
    assert!(!html.contains("Invalid Date"));
}

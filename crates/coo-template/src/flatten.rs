//! Goods table flattening
//!
//! The document nests its goods three levels deep (consignment item ->
//! trade line item -> transport package) while the printed form shows a
//! single flat table, one row per package. Fields that belong to the
//! line item rather than the package appear only on the first row of
//! that line item.

use coo_model::{ConsignmentItem, TradeLineItem};
use coo_text::{format_calendar_date, format_quantity, reference_suffix};
use serde::Serialize;

/// One row of the goods table (boxes 6-12 of the printed form)
///
/// `sequence_number`, `description`, `code` and `origin_criteria` are
/// attributes of the owning trade line item and are present only on the
/// first row produced for it; later rows of the same line item carry
/// `None`. Invoice number and date repeat on every row, as on the
/// printed form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRow {
    /// Item number (box 6)
    pub sequence_number: Option<u32>,

    /// Marks and numbers on packages (box 7)
    pub marks: Option<String>,

    /// Description of goods (box 8)
    pub description: Option<String>,

    /// HS code (box 9)
    pub code: Option<String>,

    /// Origin criterion (box 10)
    pub origin_criteria: Option<String>,

    /// Gross weight or other quantity (box 11)
    pub quantity: String,

    /// Invoice number (box 12)
    pub invoice_number: Option<String>,

    /// Invoice date (box 12)
    pub invoice_date: Option<String>,
}

/// Expand consignment items into flat goods-table rows.
///
/// Rows preserve strict source order: consignment item, then trade line
/// item, then transport package. The output length always equals the
/// total package count; items without line items or line items without
/// packages contribute nothing. Inputs are not mutated.
pub fn flatten_line_items(items: &[ConsignmentItem]) -> Vec<LineItemRow> {
    let mut rows = Vec::new();

    for item in items {
        let origin_criteria = item
            .cross_border_regulatory_procedure
            .as_ref()
            .and_then(|p| p.origin_criteria_text.as_deref());

        for line in &item.trade_line_items {
            line_item_rows(line, origin_criteria, &mut rows);
        }
    }

    rows
}

fn line_item_rows(line: &TradeLineItem, origin_criteria: Option<&str>, rows: &mut Vec<LineItemRow>) {
    let invoice = line.invoice_reference.as_ref();
    let invoice_number = invoice
        .and_then(|r| r.id.as_deref())
        .map(|id| reference_suffix(id).to_string());
    let invoice_date = invoice
        .and_then(|r| r.formatted_issue_date_time.as_deref())
        .and_then(format_calendar_date);

    for (index, package) in line.transport_packages.iter().enumerate() {
        // Line-item fields show on the first package row only.
        let first = index == 0;

        let product = line.trade_product.as_ref();
        rows.push(LineItemRow {
            sequence_number: if first { line.sequence_number } else { None },
            marks: package
                .id
                .as_deref()
                .map(|id| reference_suffix(id).to_string()),
            description: if first {
                product.and_then(|p| p.description.clone())
            } else {
                None
            },
            code: if first {
                product
                    .and_then(|p| p.harmonised_tariff_classification.as_ref())
                    .and_then(|c| c.class_code.clone())
            } else {
                None
            },
            origin_criteria: if first {
                origin_criteria.map(str::to_string)
            } else {
                None
            },
            quantity: format_quantity(
                package.gross_volume.as_ref().map(|m| m.to_string()).as_deref(),
                package.gross_weight.as_ref().map(|m| m.to_string()).as_deref(),
            ),
            invoice_number: invoice_number.clone(),
            invoice_date: invoice_date.clone(),
        });
    }
}

//! Printable purchase order layout

use super::record::OrderRecord;
use crate::shared::pdf::{FontWeight, LayoutDocument, PageGeometry, PageLayout};

pub const LINE_HEIGHT: f32 = 18.0;
/// Horizontal distance from a key to its value
pub const VALUE_OFFSET: f32 = 150.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;
const SECTION_SIZE: f32 = 14.0;
const HEADER_LINE: f32 = 25.0;
const SECTION_LINE: f32 = 20.0;
const SECTION_GAP: f32 = 15.0;
const LABEL_GAP: f32 = 10.0;

/// (caption, record key) in print order
const ORDER_FIELDS: [(&str, &str); 14] = [
    ("Customer Name", "customer_name"),
    ("Order Number", "order_number"),
    ("Company Order No", "company_order_number"),
    ("PO Number", "po_number"),
    ("Bags", "bags"),
    ("Yarn Count", "yarn_count"),
    ("Content", "content"),
    ("Spun", "spun"),
    ("Knitting Type", "knitting_type"),
    ("Dyeing Type", "dyeing_type"),
    ("Dyeing Color", "dyeing_color"),
    ("Finishing Type", "finishing_type"),
    ("Sizes", "sizes"),
    ("Additional Info", "additional_info"),
];

const LABEL_FIELDS: [(&str, &str); 8] = [
    ("Vendor ID", "vendor_id"),
    ("Quality", "quality"),
    ("Printed/Woven", "printed_woven"),
    ("Elastic Type", "elastic_type"),
    ("Elastic Vendor ID", "elastic_vendor_id"),
    ("Sizes", "sizes"),
    ("Trims", "trims"),
    ("Additional Info", "additional_info"),
];

/// Height of one label block: its header line plus every field line
pub const LABEL_BLOCK_HEIGHT: f32 = LINE_HEIGHT * (LABEL_FIELDS.len() as f32 + 1.0);

/// File name the exported document is saved under
pub fn pdf_file_name(po_number: &str) -> String {
    format!("{}_PurchaseOrder.pdf", po_number.trim())
}

pub fn document_title(po_number: &str) -> String {
    format!("Purchase Order #{}", po_number.trim())
}

/// Lays out header, order fields and labels on A4 pages.
///
/// `generated_at` is printed verbatim in the header.
pub fn layout_purchase_order(
    po_number: &str,
    record: &OrderRecord,
    generated_at: &str,
) -> LayoutDocument {
    layout_on(PageGeometry::A4_PORTRAIT, po_number, record, generated_at)
}

fn layout_on(
    geometry: PageGeometry,
    po_number: &str,
    record: &OrderRecord,
    generated_at: &str,
) -> LayoutDocument {
    let mut layout = PageLayout::new(geometry);

    layout.write(HEADER_LINE, document_title(po_number), TITLE_SIZE, FontWeight::Bold);
    layout.write(
        HEADER_LINE,
        format!("Generated on: {}", generated_at),
        BODY_SIZE,
        FontWeight::Regular,
    );

    for (caption, key) in ORDER_FIELDS {
        layout.write_pair(LINE_HEIGHT, caption, &record.display(key), VALUE_OFFSET, BODY_SIZE);
    }

    let labels = record.labels();
    layout.skip(SECTION_GAP);
    if !labels.is_empty() {
        // the heading moves along with the first label block
        layout.reserve(SECTION_LINE + LABEL_BLOCK_HEIGHT);
    }
    layout.write(SECTION_LINE, "Labels", SECTION_SIZE, FontWeight::Bold);

    for (idx, label) in labels.iter().enumerate() {
        // keep the whole label together when it fits on a page
        layout.reserve(LABEL_BLOCK_HEIGHT);
        layout.write(
            LINE_HEIGHT,
            format!("Label #{}", idx + 1),
            BODY_SIZE,
            FontWeight::Bold,
        );
        for (caption, key) in LABEL_FIELDS {
            layout.write_pair(LINE_HEIGHT, caption, &label.display(key), VALUE_OFFSET, BODY_SIZE);
        }
        layout.skip(LABEL_GAP);
    }

    layout.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with_labels(count: usize) -> OrderRecord {
        let labels: Vec<_> = (0..count)
            .map(|i| json!({ "vendor_id": format!("V{}", i + 1), "quality": "A", "trims": ["zip"] }))
            .collect();
        let value = json!({
            "po_number": "PO-1001",
            "customer_name": "Acme",
            "bags": 12,
            "sizes": ["S", "M"],
            "labels": labels,
        });
        match value {
            serde_json::Value::Object(map) => OrderRecord::new(map),
            _ => unreachable!(),
        }
    }

    fn assert_within_margins(doc: &LayoutDocument) {
        let g = doc.geometry;
        for (_, run) in doc.runs() {
            assert!(run.y >= g.margin, "{} above top margin", run.text);
            assert!(run.y + run.height <= g.bottom_limit(), "{} past bottom margin", run.text);
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(pdf_file_name("PO-1001"), "PO-1001_PurchaseOrder.pdf");
    }

    #[test]
    fn test_two_labels_fit_on_one_page() {
        let doc = layout_purchase_order("PO-1001", &record_with_labels(2), "01.05.2024 09:30:00");
        assert_eq!(doc.page_count(), 1);
        assert_within_margins(&doc);
        assert_eq!(doc.page_of("Purchase Order #PO-1001"), Some(0));
        assert_eq!(doc.page_of("Generated on: 01.05.2024 09:30:00"), Some(0));
        assert_eq!(doc.page_of("Label #2"), Some(0));
    }

    #[test]
    fn test_missing_values_render_as_dash() {
        let doc = layout_purchase_order("PO-1001", &record_with_labels(1), "now");
        let runs = &doc.pages[0].runs;
        let value_after = |caption: &str| {
            let pos = runs
                .iter()
                .position(|r| r.text == format!("{}:", caption))
                .unwrap();
            runs[pos + 1].text.clone()
        };
        assert_eq!(value_after("Customer Name"), "Acme");
        assert_eq!(value_after("Sizes"), "S, M");
        assert_eq!(value_after("Dyeing Color"), "-");
        assert_eq!(value_after("Elastic Type"), "-");
        assert_eq!(value_after("Trims"), "zip");
    }

    #[test]
    fn test_many_labels_paginate_without_splitting_blocks() {
        let count = 9;
        let doc = layout_purchase_order("PO-1001", &record_with_labels(count), "now");
        assert!(doc.page_count() > 1);
        assert_within_margins(&doc);

        for (page, page_runs) in doc.pages.iter().enumerate() {
            for (i, run) in page_runs.runs.iter().enumerate() {
                if run.text.starts_with("Label #") {
                    // header and its 8 key/value pairs share the page
                    assert!(page_runs.runs.len() >= i + 1 + 16, "label split on page {}", page);
                    assert_eq!(page_runs.runs[i + 1].text, "Vendor ID:");
                    assert_eq!(page_runs.runs[i + 15].text, "Additional Info:");
                }
            }
        }
    }

    #[test]
    fn test_labels_heading_stays_with_first_label() {
        // the section gap ends at 357pt: the heading alone fits above 420pt, heading plus a label does not
        let short_page = PageGeometry {
            width: 595.28,
            height: 460.0,
            margin: 40.0,
        };
        let doc = layout_on(short_page, "PO-1001", &record_with_labels(1), "now");
        assert_within_margins(&doc);
        assert_eq!(doc.page_of("Finishing Type:"), Some(0));
        assert_eq!(doc.page_of("Labels"), Some(1));
        assert_eq!(doc.page_of("Label #1"), Some(1));
    }

    #[test]
    fn test_page_count_follows_content_height() {
        // header 50 + 14 fields + gap 15 + heading 20 = 337pt, then 172pt per label
        // 761.89pt are printable; 2 labels fit on page one, every further page holds 4
        let doc = layout_purchase_order("PO-1", &record_with_labels(6), "now");
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page_of("Label #2"), Some(0));
        assert_eq!(doc.page_of("Label #3"), Some(1));
        assert_eq!(doc.page_of("Label #6"), Some(1));
    }
}

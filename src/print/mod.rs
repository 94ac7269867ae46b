//! Printable Requisition Form
//!
//! Renders a request as the paper RIS form: letterhead, one row per line
//! item, then blank ruled rows so the last page is always full.

mod frame;

pub use frame::print_request;

use crate::config::Letterhead;
use crate::format::{escape_html, format_price, format_short_date};
use crate::models::{LineItem, RequestRecord};

const COLUMNS: usize = 8;

const STYLE: &str = r#"
    @page { size: A4; margin: 1.5cm; }
    body { font-family: Arial, sans-serif; margin: 0; }
    .print-table { width: 100%; border-collapse: collapse; font-size: 9px; }
    .print-table thead { display: table-header-group; }
    .print-table tfoot { display: table-footer-group; }
    .print-table th, .print-table td { border: 1px solid #888; padding: 4px 6px; text-align: left; vertical-align: top; }
    .print-table .filler-row td { border-top: none; }
    .print-table th { font-weight: bold; }
    .print-table .item-row { page-break-inside: avoid; }
    .no-border, .no-border td { border: none !important; padding: 1px 2px; }
    .header-main-title { font-size: 14px; font-weight: bold; }
    .header-sub-title { font-size: 11px; }
    .header-note { font-size: 10px; font-weight: bold; }
    .text-right { text-align: right; }
    .text-center { text-align: center; }
    .sign-line { border-bottom: 1px solid black; padding-bottom: 2px; }
"#;

/// Blank rows needed to fill the last page. An empty request still
/// prints one full page of rows.
pub fn filler_rows(item_count: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    if item_count == 0 {
        return rows_per_page;
    }
    match item_count % rows_per_page {
        0 => 0,
        on_last_page => rows_per_page - on_last_page,
    }
}

/// Description cell: name, then brand and supplier in italics when known
fn description_cell(item: &LineItem) -> String {
    let mut html = escape_html(&item.item_description);
    for extra in [&item.item_brand, &item.supplier].into_iter().flatten() {
        if !extra.is_empty() && extra != "N/A" {
            html.push_str(&format!(r#"<br><span style="font-style: italic;">{}</span>"#, escape_html(extra)));
        }
    }
    html
}

fn item_row(item: &LineItem) -> String {
    format!(
        r#"<tr class="item-row"><td></td><td></td><td>{}</td><td class="text-center">{}</td><td></td><td class="text-right">{}</td><td></td><td></td></tr>"#,
        description_cell(item),
        item.quantity,
        format_price(item.unit_cost),
    )
}

fn filler_row() -> String {
    format!(r#"<tr class="filler-row">{}</tr>"#, "<td>&nbsp;</td>".repeat(COLUMNS))
}

fn header(record: &RequestRecord, letterhead: &Letterhead, logo_url: Option<&str>) -> String {
    let logo = logo_url
        .map(|url| format!(r#"<img src="{}" style="width: 70px; height: auto;">"#, escape_html(url)))
        .unwrap_or_default();
    let sub_titles: String = letterhead
        .sub_titles
        .iter()
        .map(|line| format!(r#"<div class="header-sub-title">{}</div>"#, escape_html(line)))
        .collect();
    let notes: String = letterhead
        .accreditations
        .iter()
        .map(|line| format!(r#"<div class="header-note">{}</div>"#, escape_html(line)))
        .collect();

    format!(
        r#"<tr><td colspan="{cols}" style="border: none !important; padding: 0 0 10px 0;">
<table class="no-border" style="width: 100%;"><tr>
<td style="width: 20%; text-align: left;">{logo}</td>
<td style="text-align: center;"><div class="header-main-title">{institution}</div>{sub_titles}{notes}</td>
<td style="width: 20%; text-align: right; font-size: 9px; vertical-align: top;">{form_number}<br>{form_revision}</td>
</tr></table>
<h2 style="text-align: center; font-size: 14px; margin: 10px 0; font-weight: bold;">{form_title}</h2>
<table class="no-border" style="width: 100%; font-size: 11px;">
<tr><td style="width: 60%;"><strong>Division:</strong> {division}</td><td style="width: 40%;"><strong>RIS No.:</strong> {control_number}</td></tr>
<tr><td><strong>Office:</strong> {office}</td><td><strong>SAI No.:</strong></td></tr>
</table>
</td></tr>
<tr>
<th class="text-center" style="width: 10%;">Quantity on Hand</th><th class="text-center" style="width: 10%;">Medicine Code</th>
<th style="width: 40%;">Item/Description</th><th class="text-center">Quantity Requested</th><th class="text-center">Quantity Issued</th>
<th class="text-right">Unit Cost</th><th class="text-right">Selling Price</th><th class="text-right">Sub-Total</th>
</tr>"#,
        cols = COLUMNS,
        institution = escape_html(&letterhead.institution),
        form_number = escape_html(&letterhead.form_number),
        form_revision = escape_html(&letterhead.form_revision),
        form_title = escape_html(&letterhead.form_title),
        division = escape_html(&letterhead.division),
        office = escape_html(&letterhead.office),
        control_number = escape_html(&record.control_number),
    )
}

/// Four signature columns; `names` fills the first printed-name line
fn signature_block(names: [&str; 4], request_date: &str) -> String {
    let cell = |content: &str, top: u32, first: bool| {
        let pad = if first { String::new() } else { " padding-left: 30px;".to_string() };
        format!(r#"<td style="padding-top: {top}px;{pad}">{content}</td>"#)
    };
    let row = |style: &str, cells: Vec<String>| format!(r#"<tr style="{style}">{}</tr>"#, cells.concat());

    let roles = ["Requested by:", "Approved by:", "Issued by:", "Received by:"];
    let role_row = row(
        "text-align: left;",
        roles.iter().enumerate().map(|(i, r)| cell(&format!("<strong>{r}</strong>"), 0, i == 0)).collect(),
    );
    let name_row = row(
        "vertical-align: bottom; text-align: center;",
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let name = if name.is_empty() { "&nbsp;".to_string() } else { format!("<strong>{}</strong>", escape_html(name)) };
                cell(&format!(r#"<div class="sign-line">{name}</div>"#), 40, i == 0)
            })
            .collect(),
    );
    let caption_row = |caption: &str| {
        row("text-align: center;", (0..4).map(|i| cell(caption, 2, i == 0)).collect())
    };
    let designation_row = row(
        "text-align: center;",
        (0..4).map(|i| cell(r#"<div class="sign-line">&nbsp;</div>"#, 25, i == 0)).collect(),
    );
    let date_row = row(
        "text-align: left;",
        (0..4)
            .map(|i| {
                let value = if i == 0 { escape_html(request_date) } else { "&nbsp;".to_string() };
                let width = if i == 0 { 20 } else { 50 };
                cell(
                    &format!(r#"<strong>Date:</strong> <span style="border-bottom: 1px solid black; padding-right: {width}px;">{value}</span>"#),
                    20,
                    i == 0,
                )
            })
            .collect(),
    );

    format!(
        r#"<table class="no-border" style="width: 100%; font-size: 10px;">{role_row}{name_row}{}{designation_row}{}{date_row}</table>"#,
        caption_row("Signature Over Printed Name"),
        caption_row("Designation"),
    )
}

fn footer(record: &RequestRecord, letterhead: &Letterhead) -> String {
    let underline = "_".repeat(100);
    format!(
        r#"<tr><td colspan="{COLUMNS}" style="border: none !important; padding-top: 10px;">
<div style="font-size: 11px; padding-bottom: 10px;"><strong>Purpose:</strong> {underline}</div>
{}
</td></tr>"#,
        signature_block(
            [letterhead.requested_by.as_str(), letterhead.approved_by.as_str(), "", ""],
            &format_short_date(&record.request_date),
        ),
    )
}

/// Complete standalone HTML document for one request
pub fn render_document(
    record: &RequestRecord,
    letterhead: &Letterhead,
    logo_url: Option<&str>,
    rows_per_page: usize,
) -> String {
    let items: String = record.items.iter().map(item_row).collect();
    let fillers = filler_row().repeat(filler_rows(record.items.len(), rows_per_page));

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>RIS: {title}</title>
<style>{STYLE}</style>
</head>
<body>
<table class="print-table">
<thead>{header}</thead>
<tfoot>{footer}</tfoot>
<tbody>{items}{fillers}</tbody>
</table>
</body>
</html>"#,
        title = escape_html(&record.control_number),
        header = header(record, letterhead, logo_url),
        footer = footer(record, letterhead),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestStatus;

    fn line(description: &str, brand: Option<&str>, supplier: Option<&str>) -> LineItem {
        LineItem {
            item_description: description.to_string(),
            item_brand: brand.map(str::to_string),
            supplier: supplier.map(str::to_string),
            unit_cost: 1250.0,
            quantity: 2,
        }
    }

    fn record(items: Vec<LineItem>) -> RequestRecord {
        RequestRecord {
            id: None,
            control_number: "CREQ-2405001".to_string(),
            request_date: "2024-05-03T08:15:00".to_string(),
            items,
            last_edited: None,
            status: RequestStatus::Active,
            deleted_date: None,
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_filler_rows() {
        assert_eq!(filler_rows(0, 25), 25);
        assert_eq!(filler_rows(1, 25), 24);
        assert_eq!(filler_rows(24, 25), 1);
        assert_eq!(filler_rows(25, 25), 0);
        assert_eq!(filler_rows(26, 25), 24);
        assert_eq!(filler_rows(50, 25), 0);
        assert_eq!(filler_rows(3, 0), 0);
    }

    #[test]
    fn test_description_cell_skips_unknown_parts() {
        assert_eq!(description_cell(&line("Gauze", None, None)), "Gauze");
        assert_eq!(
            description_cell(&line("Gauze", Some("N/A"), Some("Medline"))),
            r#"Gauze<br><span style="font-style: italic;">Medline</span>"#
        );
        assert_eq!(count(&description_cell(&line("Gauze", Some("Acme"), Some("Medline"))), "<br>"), 2);
    }

    #[test]
    fn test_document_rows_fill_page() {
        let doc = render_document(&record(vec![line("Gauze", Some("A"), None); 3]), &Letterhead::default(), None, 25);

        assert_eq!(count(&doc, r#"<tr class="item-row">"#), 3);
        assert_eq!(count(&doc, r#"<tr class="filler-row">"#), 22);
        assert!(doc.contains("<title>RIS: CREQ-2405001</title>"));
        assert!(doc.contains("<strong>RIS No.:</strong> CREQ-2405001"));
        assert!(doc.contains("1,250.00"));
        assert!(doc.contains("5/3/2024"));
        assert!(!doc.contains("<img"));
    }

    #[test]
    fn test_empty_request_prints_blank_page() {
        let doc = render_document(&record(vec![]), &Letterhead::default(), Some("blob:abc"), 25);

        assert_eq!(count(&doc, r#"<tr class="filler-row">"#), 25);
        assert!(doc.contains(r#"<img src="blob:abc""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = render_document(
            &record(vec![line("<script>x</script>", None, None)]),
            &Letterhead::default(),
            None,
            25,
        );
        assert!(doc.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn test_signatories_from_letterhead() {
        let letterhead = Letterhead { requested_by: "DELA CRUZ, JUAN".to_string(), ..Letterhead::default() };
        let doc = render_document(&record(vec![]), &letterhead, None, 25);

        assert!(doc.contains("<strong>DELA CRUZ, JUAN</strong>"));
        assert!(doc.contains("<strong>ERIC OLIVER SISON, MD</strong>"));
        assert_eq!(count(&doc, "Signature Over Printed Name"), 4);
    }
}

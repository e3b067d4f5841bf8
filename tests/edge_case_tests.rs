//! Malformed and unusual input: everything is coerced, nothing panics.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scrada::core::*;
use serde_json::{Value, json};

fn rec(v: Value) -> Record {
    v.as_object().cloned().unwrap()
}

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

#[test]
fn empty_line_record() {
    let line = InvoiceLine::from_record(&Record::new());
    assert_eq!(line.description, "");
    assert_eq!(line.quantity, Decimal::ZERO);
    assert_eq!(line.vat_type, VatType::Exempt);
    assert_eq!(line.line_total(), Decimal::ZERO);
    assert_eq!(line.vat(), Decimal::ZERO);
}

#[test]
fn null_alias_falls_through_to_next() {
    let line = InvoiceLine::from_record(&rec(json!({
        "unitPrice": null,
        "itemExclVat": 12.5,
        "vatPerc": null,
        "vatPercentage": "6",
    })));
    assert_eq!(line.unit_price, dec!(12.5));
    assert_eq!(line.vat_percentage, dec!(6));
}

#[test]
fn negative_percentage_is_not_standard() {
    let line = InvoiceLine::from_record(&rec(json!({"vatPerc": -5})));
    assert_eq!(line.vat_type, VatType::Exempt);
    assert_eq!(classify_cross_border_b2b(dec!(-5), false), VatType::IcdGoods);
}

#[test]
fn fractional_vat_code_truncates() {
    let line = InvoiceLine::from_record(&rec(json!({"vatType": 50.7, "vatPerc": 0})));
    assert_eq!(line.vat_type, VatType::ReverseCharge);
}

#[test]
fn huge_quantity_rounds_to_four_places() {
    let line = InvoiceLineBuilder::new("bulk", dec!(123456.123456), dec!(0.01), dec!(21)).build();
    assert_eq!(line.to_record()["quantity"], json!(123456.1235));
}

#[test]
fn half_cent_rounds_away_from_zero() {
    let up = InvoiceLineBuilder::new("x", dec!(1), dec!(0.125), dec!(0)).build();
    let down = InvoiceLineBuilder::new("x", dec!(1), dec!(-0.125), dec!(0)).build();
    assert_eq!(up.to_record()["itemExclVat"], json!(0.13));
    assert_eq!(down.to_record()["itemExclVat"], json!(-0.13));
}

#[test]
fn zero_line_number_is_kept() {
    let line = InvoiceLine::from_record(&rec(json!({"lineNumber": 0})));
    assert_eq!(line.to_record()["lineNumber"], json!("0"));
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[test]
fn empty_invoice_record() {
    let invoice = Invoice::from_record(&Record::new());
    assert!(invoice.lines.is_empty());
    assert!(!invoice.has_attachments());
    assert_eq!(invoice.customer, Customer::default());

    let payload = invoice.to_record();
    assert_eq!(payload["totalInclVat"], json!(0.0));
    assert_eq!(payload["vatTotals"], json!([]));
    assert_eq!(payload["alreadySendToCustomer"], json!(false));
}

#[test]
fn wrong_shapes_are_ignored() {
    let invoice = Invoice::from_record(&rec(json!({
        "lines": "not a list",
        "attachments": {"filename": "x"},
        "paymentMethods": [1, 2, 3],
        "customer": [],
        "number": 17,
    })));
    assert!(invoice.lines.is_empty());
    assert!(invoice.attachments.is_empty());
    assert!(invoice.payment_methods.is_empty());
    assert_eq!(invoice.number, "");
}

#[test]
fn legacy_pdf_needs_a_string() {
    let invoice = Invoice::from_record(&rec(json!({"base64Data": 42})));
    assert!(invoice.attachments.is_empty());

    let invoice = Invoice::from_record(&rec(json!({"base64Data": "AAAA", "filename": "f.pdf"})));
    assert_eq!(invoice.attachments[0].filename, "f.pdf");
    assert_eq!(invoice.attachments[0].file_type, FileType::Pdf);
}

#[test]
fn sent_flag_truthiness() {
    for (value, expected) in [
        (json!("0"), false),
        (json!(""), false),
        (json!(0), false),
        (json!("yes"), true),
        (json!(1), true),
    ] {
        let invoice = Invoice::from_record(&rec(json!({"alreadySendToCustomer": value})));
        assert_eq!(invoice.already_sent_to_customer, expected);
    }
}

#[test]
fn raw_input_without_lines_passes_through() {
    let raw = rec(json!({"number": "X", "lines": "keep me"}));
    let payload = InvoiceInput::from(raw.clone()).into_payload();
    assert_eq!(payload, raw);
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[test]
fn unknown_codes_decode_to_none() {
    assert_eq!(VatType::from_code(11), None);
    assert_eq!(UnitType::from_code(0), None);
    assert_eq!(FileType::from_code(4), None);
    assert_eq!(TaxNumberType::from_code(9), None);
    assert_eq!(ItemIdentificationType::from_code(4), None);
    assert_eq!(SendStatus::from_code("processed"), None);
    assert_eq!(SendMethod::from_code(""), None);
}

#[test]
fn mime_fallback_is_pdf() {
    assert_eq!(FileType::from_mime_type("application/octet-stream"), FileType::Pdf);
    assert_eq!(FileType::from_mime_type("image/svg+xml"), FileType::Image);
    assert_eq!(FileType::from_mime_type("text/xml"), FileType::Xml);
}

#[test]
fn attachment_bad_base64_does_not_decode() {
    assert_eq!(Attachment::pdf("x.pdf", "***").decode(), None);
}

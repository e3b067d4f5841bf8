use chrono::NaiveDate;
use rust_decimal_macros::dec;
use scrada::core::*;
use serde_json::{Value, json};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn customer() -> Customer {
    CustomerBuilder::new(
        "CUST01",
        "Klant BV",
        AddressBuilder::new("Kerkstraat", "12", "Gent", "9000", "BE")
            .street_box("B1")
            .build(),
    )
    .email("facturen@klant.be")
    .vat_number("BE0123456789")
    .build()
}

fn rec(v: Value) -> Record {
    v.as_object().cloned().unwrap()
}

// --- Classification ---

#[test]
fn domestic_classification() {
    assert_eq!(classify_domestic(dec!(21)), VatType::Standard);
    assert_eq!(classify_domestic(dec!(0.01)), VatType::Standard);
    assert_eq!(classify_domestic(dec!(0)), VatType::Exempt);
}

#[test]
fn cross_border_classification() {
    assert_eq!(classify_cross_border_b2b(dec!(21), true), VatType::Standard);
    assert_eq!(classify_cross_border_b2b(dec!(0), true), VatType::IcdServicesB2b);
    assert_eq!(classify_cross_border_b2b(dec!(0), false), VatType::IcdGoods);
}

// --- Lines ---

#[test]
fn line_payload_scenario() {
    let line = InvoiceLineBuilder::new("Consulting", dec!(2), dec!(100), dec!(21))
        .total_excl_vat(dec!(200))
        .vat_amount(dec!(42))
        .line_number(1)
        .build();

    let payload = line.to_record();
    assert_eq!(payload["itemName"], json!("Consulting"));
    assert_eq!(payload["quantity"], json!(2.0));
    assert_eq!(payload["itemExclVat"], json!(100.0));
    assert_eq!(payload["vatPercentage"], json!(21.0));
    assert_eq!(payload["vatType"], json!(1));
    assert_eq!(payload["totalExclVat"], json!(200.0));
    assert_eq!(payload["vatAmount"], json!(42.0));
    assert_eq!(payload["lineNumber"], json!("1"));

    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "itemName",
            "quantity",
            "unitType",
            "itemExclVat",
            "vatType",
            "vatPercentage",
            "totalDiscountExclVat",
            "totalExclVat",
            "vatAmount",
            "lineNumber",
        ]
    );
}

#[test]
fn line_incl_total_scenario() {
    let line = InvoiceLineBuilder::new("x", dec!(1), dec!(150.50), dec!(21))
        .total_excl_vat(dec!(150.50))
        .vat_amount(dec!(31.61))
        .build();
    assert_eq!(round(line.line_total() + line.vat(), 2), dec!(182.11));
}

#[test]
fn canonical_line_payload_is_stable() {
    let line = InvoiceLineBuilder::new("Widget", dec!(3), dec!(9.99), dec!(6))
        .unit_type(UnitType::Piece)
        .line_number(4)
        .build();
    let first = line.to_record();
    let again = InvoiceLine::from_record(&first).to_record();
    assert_eq!(first, again);
}

// --- Invoice assembly ---

#[test]
fn assembled_invoice_payload() {
    let invoice = InvoiceBuilder::new("2025", "SALES", "2025-0001", customer())
        .invoice_date(date(2025, 3, 1))
        .invoice_expiry_date(date(2025, 3, 31))
        .add_line(
            InvoiceLineBuilder::new("Consulting", dec!(10), dec!(95), dec!(21))
                .unit_type(UnitType::Hour)
                .build(),
        )
        .add_line(InvoiceLineBuilder::new("Books", dec!(2), dec!(25), dec!(6)).build())
        .totals_from_lines()
        .build();

    let payload = invoice.to_record();
    assert_eq!(payload["invoiceDate"], json!("2025-03-01"));
    assert_eq!(payload["invoiceExpiryDate"], json!("2025-03-31"));
    assert_eq!(payload["creditInvoice"], json!(false));
    assert_eq!(payload["totalExclVat"], json!(1000.0));
    assert_eq!(payload["totalVat"], json!(202.5));
    assert_eq!(payload["totalInclVat"], json!(1202.5));
    assert_eq!(payload["customer"]["address"]["streetBox"], json!("B1"));
    assert_eq!(payload["lines"].as_array().unwrap().len(), 2);
    assert_eq!(payload["lines"][0]["unitType"], json!(102));
    assert_eq!(
        payload["vatTotals"],
        json!([
            {"vatType": 1, "vatPercentage": 21.0, "totalExclVat": 950.0, "totalVat": 199.5, "totalInclVat": 1149.5},
            {"vatType": 1, "vatPercentage": 6.0, "totalExclVat": 50.0, "totalVat": 3.0, "totalInclVat": 53.0},
        ])
    );
}

#[test]
fn empty_invoice_has_no_vat_totals_or_attachments() {
    let invoice = InvoiceBuilder::new("2025", "SALES", "1", customer()).build();
    assert!(invoice.vat_totals().is_empty());
    assert!(!invoice.has_attachments());
    assert!(!invoice.has_payment_methods());
}

#[test]
fn with_attachment_is_a_new_value() {
    let original = InvoiceBuilder::new("2025", "SALES", "1", customer()).build();
    let extended = original
        .with_attachment(Attachment::pdf("invoice.pdf", "JVBERi0xLjQ="))
        .with_attachment(Attachment::from_bytes("terms.txt", b"terms", "text/plain"));

    assert!(original.attachments.is_empty());
    assert_eq!(extended.attachments.len(), 2);
    assert_eq!(extended.attachments[1].file_type, FileType::Pdf);

    let payload = extended.to_record();
    assert_eq!(payload["attachments"][0]["filename"], json!("invoice.pdf"));
    assert!(!original.to_record().contains_key("attachments"));
}

#[test]
fn credit_invoice_aggregates_negative_totals() {
    let invoice = InvoiceBuilder::new("2025", "SALES", "CN-1", customer())
        .credit_invoice(true)
        .add_line(InvoiceLineBuilder::new("Refund", dec!(1), dec!(-100), dec!(21)).build())
        .totals_from_lines()
        .build();

    let totals = invoice.vat_totals();
    assert_eq!(totals[0].total_excl_vat, dec!(-100));
    assert_eq!(totals[0].total_vat, dec!(-21));
    assert_eq!(invoice.total_incl_vat, dec!(-121));
    assert_eq!(invoice.to_record()["creditInvoice"], json!(true));
}

#[test]
fn payment_methods_emitted_when_present() {
    let invoice = InvoiceBuilder::new("2025", "SALES", "1", customer())
        .add_payment_method(
            InvoicePaymentMethod::new(1, "Bank transfer")
                .paid(dec!(50))
                .to_pay(dec!(71)),
        )
        .build();
    assert_eq!(
        invoice.to_record()["paymentMethods"],
        json!([{"paymentType": 1, "name": "Bank transfer", "totalPaid": 50.0, "totalToPay": 71.0}])
    );
}

// --- Records from callers ---

#[test]
fn invoice_from_record() {
    let invoice = Invoice::from_record(&rec(json!({
        "bookYear": "2025",
        "journal": "SALES",
        "number": "2025-0002",
        "creditInvoice": 0,
        "invoiceDate": "2025-04-01",
        "invoiceExpiryDate": "2025-04-30",
        "totalInclVat": "121.00",
        "totalExclVat": 100,
        "totalVat": 21,
        "customer": {"code": "C1", "customerName": "Klant", "address": {"countryCode": "BE"}},
        "lines": [
            {"itemName": "Legacy", "quantity": 1, "itemExclVat": 100, "vatPercentage": 21, "vatTypeID": 1},
        ],
        "alreadySentToCustomer": true,
        "note": "Thanks",
    })));

    assert_eq!(invoice.number, "2025-0002");
    assert!(!invoice.credit_invoice);
    assert_eq!(invoice.total_incl_vat, dec!(121));
    assert_eq!(invoice.customer.name, "Klant");
    assert_eq!(invoice.customer.address.country_code, "BE");
    assert_eq!(invoice.lines[0].description, "Legacy");
    assert!(invoice.already_sent_to_customer);

    let payload = invoice.to_record();
    assert_eq!(payload["alreadySendToCustomer"], json!(true));
    assert_eq!(payload["note"], json!("Thanks"));
    assert_eq!(payload["vatTotals"][0]["totalInclVat"], json!(121.0));
}

#[test]
fn line_totals_flag_diverging_declared_totals() {
    let invoice = Invoice::from_record(&rec(json!({
        "totalInclVat": 500,
        "lines": [{"description": "x", "quantity": 1, "unitPrice": 100, "vatPerc": 21}],
    })));
    let derived = invoice.line_totals();
    assert_eq!(derived.total_incl_vat, dec!(121));
    assert_ne!(derived.total_incl_vat, invoice.total_incl_vat);
    assert_eq!(invoice.to_record()["totalInclVat"], json!(500.0));
}

// --- Codes ---

#[test]
fn vat_type_codes_round_trip() {
    for vat in VatType::ALL {
        assert_eq!(VatType::from_code(vat.code()), Some(vat));
    }
    assert_eq!(VatType::from_code(0), None);
}

#[test]
fn enums_serialize_as_codes() {
    assert_eq!(serde_json::to_value(VatType::OssGoods).unwrap(), json!(70));
    assert_eq!(
        serde_json::to_value(SendStatus::BlockedSendByEmail).unwrap(),
        json!("Blocked - send by email")
    );
    let unit: UnitType = serde_json::from_value(json!(202)).unwrap();
    assert_eq!(unit, UnitType::Kilogram);
    assert!(serde_json::from_value::<VatType>(json!(99)).is_err());
}

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use scrada::core::*;

fn main() {
    // A Belgian domestic invoice with two VAT rates
    let customer = CustomerBuilder::new(
        "CUST01",
        "Klant BV",
        AddressBuilder::new("Kerkstraat", "12", "Gent", "9000", "BE").build(),
    )
    .email("facturen@klant.be")
    .vat_number("BE0123456789")
    .build();

    let invoice = InvoiceBuilder::new("2025", "SALES", "2025-0001", customer)
        .invoice_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .invoice_expiry_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
        .add_line(
            InvoiceLineBuilder::new("Consulting", dec!(8), dec!(95), dec!(21))
                .unit_type(UnitType::Hour)
                .line_number(1)
                .build(),
        )
        .add_line(
            InvoiceLineBuilder::new("Handbook", dec!(2), dec!(24.50), dec!(6))
                .unit_type(UnitType::Piece)
                .line_number(2)
                .build(),
        )
        .totals_from_lines()
        .note("Thank you for your business")
        .build();

    println!("Invoice {} for {}", invoice.number, invoice.customer.name);
    for total in invoice.vat_totals() {
        println!(
            "  {}% ({}): excl {} + VAT {} = {}",
            total.vat_percentage,
            total.vat_type.label(),
            total.total_excl_vat,
            total.total_vat,
            total.total_incl_vat
        );
    }
    println!("Total incl. VAT: {}", invoice.total_incl_vat);

    let payload = serde_json::Value::Object(invoice.to_record());
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
}

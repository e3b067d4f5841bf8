//! Requires SCRADA_API_KEY, SCRADA_API_SECRET and SCRADA_COMPANY_ID.
//! Set SCRADA_BASE_URL=https://apitest.scrada.be to use the test environment.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use scrada::client::{ClientConfig, Scrada};
use scrada::core::*;

#[tokio::main]
async fn main() -> Result<(), ScradaError> {
    let scrada = Scrada::new(ClientConfig::from_env()?)?;

    let customer = CustomerBuilder::new(
        "CUST01",
        "Klant BV",
        AddressBuilder::new("Kerkstraat", "12", "Gent", "9000", "BE").build(),
    )
    .vat_number("BE0123456789")
    .build();

    let lookup = scrada.peppol().lookup_party(&customer).await?;
    println!("Customer reachable on Peppol: {}", lookup.can_receive_invoices());

    let invoice = InvoiceBuilder::new("2025", "SALES", "2025-0002", customer)
        .invoice_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .invoice_expiry_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
        .add_line(InvoiceLineBuilder::new("Consulting", dec!(1), dec!(950), dec!(21)).build())
        .totals_from_lines()
        .build();

    match scrada.sales_invoices().create(invoice).await {
        Ok(created) => {
            println!("Created sales invoice {}", created.id);
            let status = scrada.sales_invoices().send_status(&created.id).await?;
            println!("Send status: {:?} via {:?}", status.status, status.send_method);
        }
        Err(ScradaError::Validation { message, errors }) => {
            eprintln!("Rejected: {message}");
            for (field, messages) in errors {
                eprintln!("  {field}: {}", messages.join(", "));
            }
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

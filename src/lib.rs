//! # scrada
//!
//! Typed client for the [Scrada](https://www.scrada.be) invoicing API:
//! sales invoices, daily receipts, Peppol lookups and inbound documents.
//!
//! All amounts use [`rust_decimal::Decimal`]; they become JSON floats only
//! when a payload is written. VAT totals per rate are computed from the
//! invoice lines when the payload is assembled.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use scrada::core::*;
//!
//! let customer = CustomerBuilder::new(
//!     "CUST01",
//!     "Klant BV",
//!     AddressBuilder::new("Kerkstraat", "1", "Gent", "9000", "BE").build(),
//! )
//! .vat_number("BE0123456789")
//! .build();
//!
//! let invoice = InvoiceBuilder::new("2025", "SALES", "2025-0001", customer)
//!     .invoice_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
//!     .invoice_expiry_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
//!     .add_line(InvoiceLineBuilder::new("Consulting", dec!(10), dec!(95), dec!(21)).build())
//!     .add_line(InvoiceLineBuilder::new("Books", dec!(2), dec!(25), dec!(6)).build())
//!     .totals_from_lines()
//!     .build();
//!
//! let totals = invoice.vat_totals();
//! assert_eq!(totals.len(), 2);
//! assert_eq!(totals[0].total_vat, dec!(199.50));
//! assert_eq!(invoice.total_incl_vat, dec!(1202.50));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice model, VAT classification and totals, response models |
//! | `client` | Async HTTP client (`reqwest`) with resource facades |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

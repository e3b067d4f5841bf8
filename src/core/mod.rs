//! Invoice model, VAT classification and totals.
//!
//! Everything here is synchronous and total: records coming from callers or
//! from the API are coerced into typed values, never rejected.

mod attachment;
mod classify;
pub mod codes;
mod daily_receipts;
mod error;
mod invoice;
mod line;
mod party;
pub mod record;
mod responses;
mod status;
mod vat_totals;

pub use attachment::*;
pub use classify::*;
pub use codes::*;
pub use daily_receipts::*;
pub use error::*;
pub use invoice::*;
pub use line::*;
pub use party::*;
pub use record::{Record, round};
pub use responses::*;
pub use status::*;
pub use vat_totals::*;

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrada::core::{Invoice, InvoiceInput};

fuzz_target!(|data: &[u8]| {
    if let Ok(serde_json::Value::Object(record)) = serde_json::from_slice(data) {
        // Normalization is total: any object must produce a payload.
        let invoice = Invoice::from_record(&record);
        let _ = invoice.to_record();
        let _ = invoice.line_totals();
        let _ = InvoiceInput::Record(record).into_payload();
    }
});

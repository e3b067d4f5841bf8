#![no_main]

use libfuzzer_sys::fuzz_target;
use scrada::core::CreateSalesInvoiceResponse;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = CreateSalesInvoiceResponse::from_body(s);
    }
});

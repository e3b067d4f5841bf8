use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

use scrada::core::*;

fn customer() -> Customer {
    CustomerBuilder::new(
        "BENCH",
        "Benchmark BV",
        AddressBuilder::new("Kerkstraat", "1", "Gent", "9000", "BE").build(),
    )
    .vat_number("BE0123456789")
    .build()
}

fn raw_lines(n: usize) -> Vec<Value> {
    let rates = [21, 6, 12, 0];
    (0..n)
        .map(|i| {
            json!({
                "itemName": format!("Item {i}"),
                "quantity": (i % 7) + 1,
                "itemExclVat": format!("{}.{:02}", 10 + i, i % 100),
                "vatPercentage": rates[i % rates.len()],
                "vatTypeID": if rates[i % rates.len()] == 0 { 3 } else { 1 },
            })
        })
        .collect()
}

fn build_invoice(n: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new("2025", "SALES", "BENCH-001", customer());
    for i in 0..n {
        builder = builder.add_line(
            InvoiceLineBuilder::new(
                format!("Item {i}"),
                Decimal::from(i % 7 + 1),
                dec!(19.99),
                if i % 2 == 0 { dec!(21) } else { dec!(6) },
            )
            .line_number(i as i64 + 1)
            .build(),
        );
    }
    builder.totals_from_lines().build()
}

fn bench_normalize(c: &mut Criterion) {
    let raw = json!({"lines": raw_lines(100)});
    let record = raw.as_object().cloned().unwrap_or_default();
    c.bench_function("normalize_100_line_record", |b| {
        b.iter(|| Invoice::from_record(black_box(&record)))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let invoice = build_invoice(100);
    c.bench_function("vat_totals_100_lines", |b| {
        b.iter(|| aggregate_vat_totals(black_box(&invoice.lines)))
    });
}

fn bench_payload(c: &mut Criterion) {
    let invoice = build_invoice(10);
    c.bench_function("invoice_payload_10_lines", |b| {
        b.iter(|| black_box(&invoice).to_record())
    });
}

criterion_group!(benches, bench_normalize, bench_aggregate, bench_payload);
criterion_main!(benches);

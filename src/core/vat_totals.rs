//! Per-rate VAT summary carried in the invoice payload (`vatTotals`).

use rust_decimal::Decimal;
use serde_json::Value;

use super::codes::VatType;
use super::line::InvoiceLine;
use super::record::{self, Record};

/// Aggregate of all lines sharing one VAT percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct VatTotal {
    /// Type of the first line seen at this percentage.
    pub vat_type: VatType,
    /// Percentage rounded to 2 decimals; the grouping key.
    pub vat_percentage: Decimal,
    pub total_excl_vat: Decimal,
    pub total_vat: Decimal,
    pub total_incl_vat: Decimal,
}

impl VatTotal {
    pub fn to_record(&self) -> Record {
        let mut payload = Record::new();
        payload.insert("vatType".into(), Value::from(self.vat_type.code()));
        payload.insert("vatPercentage".into(), record::number(self.vat_percentage, 2));
        payload.insert("totalExclVat".into(), record::number(self.total_excl_vat, 2));
        payload.insert("totalVat".into(), record::number(self.total_vat, 2));
        payload.insert("totalInclVat".into(), record::number(self.total_incl_vat, 2));
        payload
    }
}

/// Group lines by VAT percentage (rounded to 2 decimals) and sum them.
///
/// Buckets come out in the order their percentage is first seen. The VAT
/// type of a bucket is taken from its first line; later lines at the same
/// percentage with another type are folded in silently, since the payload
/// carries a single type per rate. Sums are exact and rounded once, when the
/// bucket is emitted. Credit lines simply produce negative sums.
/// Sums saturate rather than overflow.
pub fn aggregate_vat_totals(lines: &[InvoiceLine]) -> Vec<VatTotal> {
    let mut buckets: Vec<VatTotal> = Vec::new();

    for line in lines {
        let key = record::round(line.vat_percentage, 2);
        let line_total = line.line_total();
        let line_vat = line.vat();

        let idx = match buckets.iter().position(|b| b.vat_percentage == key) {
            Some(i) => i,
            None => {
                buckets.push(VatTotal {
                    vat_type: line.vat_type,
                    vat_percentage: key,
                    total_excl_vat: Decimal::ZERO,
                    total_vat: Decimal::ZERO,
                    total_incl_vat: Decimal::ZERO,
                });
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[idx];
        bucket.total_excl_vat = bucket.total_excl_vat.saturating_add(line_total);
        bucket.total_vat = bucket.total_vat.saturating_add(line_vat);
        bucket.total_incl_vat = bucket
            .total_incl_vat
            .saturating_add(line_total.saturating_add(line_vat));
    }

    buckets
        .into_iter()
        .map(|b| VatTotal {
            total_excl_vat: record::round(b.total_excl_vat, 2),
            total_vat: record::round(b.total_vat, 2),
            total_incl_vat: record::round(b.total_incl_vat, 2),
            ..b
        })
        .collect()
}

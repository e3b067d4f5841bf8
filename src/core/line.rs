use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use super::classify::classify_domestic;
use super::codes::{UnitType, VatType};
use super::record::{self, Record};

/// A sales invoice line in its canonical shape.
///
/// Built once, from a [`InvoiceLineBuilder`] or an upstream record, and never
/// mutated afterwards. Totals left unset are derived on demand:
/// `quantity × unit_price` for the net amount and
/// `net × vat_percentage / 100` for the VAT.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    /// Item name shown on the invoice.
    pub description: String,
    pub quantity: Decimal,
    /// Net unit price. Negative for credit adjustments.
    pub unit_price: Decimal,
    /// VAT rate, 0–100 (not enforced).
    pub vat_percentage: Decimal,
    pub vat_type: VatType,
    pub line_number: Option<i64>,
    pub unit_type: Option<UnitType>,
    pub total_excl_vat: Option<Decimal>,
    pub total_discount_excl_vat: Option<Decimal>,
    pub vat_amount: Option<Decimal>,
}

/// Historical spellings accepted on input, most recent first.
const DESCRIPTION: &[&str] = &["description", "itemName"];
const UNIT_PRICE: &[&str] = &["unitPrice", "itemExclVat"];
const VAT_PERCENTAGE: &[&str] = &["vatPerc", "vatPercentage"];
const VAT_TYPE: &[&str] = &["vatType", "vatTypeID", "vatTypeId"];
const TOTAL_EXCL_VAT: &[&str] = &["totalExclVat", "amountExclVat"];

impl InvoiceLine {
    /// Normalize an upstream or caller-supplied record.
    ///
    /// Never fails: missing or malformed fields fall back to `0`, `""` or
    /// `None`. An unknown VAT type code is replaced by domestic
    /// classification of the percentage.
    pub fn from_record(data: &Record) -> Self {
        let vat_percentage = record::decimal_or_zero(data, VAT_PERCENTAGE);

        let vat_type = match record::first(data, VAT_TYPE).and_then(record::as_int) {
            Some(code) => u16::try_from(code)
                .ok()
                .and_then(VatType::from_code)
                .unwrap_or_else(|| {
                    debug!(code, "unknown VAT type code, classifying by percentage");
                    classify_domestic(vat_percentage)
                }),
            None => classify_domestic(vat_percentage),
        };

        let unit_type = record::opt_int(data, &["unitType"])
            .and_then(|c| u16::try_from(c).ok())
            .and_then(UnitType::from_code);

        Self {
            description: record::text(data, DESCRIPTION),
            quantity: record::decimal_or_zero(data, &["quantity"]),
            unit_price: record::decimal_or_zero(data, UNIT_PRICE),
            vat_percentage,
            vat_type,
            line_number: record::opt_int(data, &["lineNumber"]),
            unit_type,
            total_excl_vat: record::opt_decimal(data, TOTAL_EXCL_VAT),
            total_discount_excl_vat: record::opt_decimal(data, &["totalDiscountExclVat"]),
            vat_amount: record::opt_decimal(data, &["vatAmount"]),
        }
    }

    /// Net amount: the explicit total, else `quantity × unit_price`.
    ///
    /// Arithmetic saturates at the bounds of [`Decimal`].
    pub fn line_total(&self) -> Decimal {
        self.total_excl_vat
            .unwrap_or_else(|| self.quantity.saturating_mul(self.unit_price))
    }

    /// VAT amount: the explicit amount, else derived from [`Self::line_total`].
    pub fn vat(&self) -> Decimal {
        self.vat_amount.unwrap_or_else(|| {
            self.line_total().saturating_mul(self.vat_percentage) / Decimal::ONE_HUNDRED
        })
    }

    /// Serialize to the upstream line payload.
    pub fn to_record(&self) -> Record {
        let mut payload = Record::new();
        payload.insert("itemName".into(), Value::from(self.description.as_str()));
        payload.insert("quantity".into(), record::number(self.quantity, 4));
        payload.insert(
            "unitType".into(),
            Value::from(self.unit_type.unwrap_or(UnitType::Unit).code()),
        );
        payload.insert("itemExclVat".into(), record::number(self.unit_price, 2));
        payload.insert("vatType".into(), Value::from(self.vat_type.code()));
        payload.insert("vatPercentage".into(), record::number(self.vat_percentage, 2));
        payload.insert(
            "totalDiscountExclVat".into(),
            record::number(self.total_discount_excl_vat.unwrap_or_default(), 2),
        );
        payload.insert("totalExclVat".into(), record::number(self.line_total(), 2));
        payload.insert("vatAmount".into(), record::number(self.vat(), 2));

        if let Some(n) = self.line_number {
            payload.insert("lineNumber".into(), Value::from(n.to_string()));
        }

        payload
    }
}

/// A line as callers may hand it over: a raw record or a built line.
#[derive(Debug, Clone)]
pub enum LineInput {
    Record(Record),
    Line(InvoiceLine),
}

impl LineInput {
    pub fn normalize(self) -> InvoiceLine {
        match self {
            Self::Record(r) => InvoiceLine::from_record(&r),
            Self::Line(l) => l,
        }
    }
}

impl From<Record> for LineInput {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl From<InvoiceLine> for LineInput {
    fn from(l: InvoiceLine) -> Self {
        Self::Line(l)
    }
}

/// Builder for [`InvoiceLine`].
///
/// ```
/// use scrada::core::*;
/// use rust_decimal_macros::dec;
///
/// let line = InvoiceLineBuilder::new("Consulting", dec!(8), dec!(95), dec!(21))
///     .line_number(1)
///     .unit_type(UnitType::Hour)
///     .build();
/// assert_eq!(line.vat_type, VatType::Standard);
/// assert_eq!(line.line_total(), dec!(760));
/// ```
pub struct InvoiceLineBuilder {
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    vat_percentage: Decimal,
    vat_type: Option<VatType>,
    line_number: Option<i64>,
    unit_type: Option<UnitType>,
    total_excl_vat: Option<Decimal>,
    total_discount_excl_vat: Option<Decimal>,
    vat_amount: Option<Decimal>,
}

impl InvoiceLineBuilder {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        vat_percentage: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            vat_percentage,
            vat_type: None,
            line_number: None,
            unit_type: None,
            total_excl_vat: None,
            total_discount_excl_vat: None,
            vat_amount: None,
        }
    }

    /// Explicit VAT type. Without it the type is classified as domestic.
    pub fn vat_type(mut self, vat_type: VatType) -> Self {
        self.vat_type = Some(vat_type);
        self
    }

    pub fn line_number(mut self, n: i64) -> Self {
        self.line_number = Some(n);
        self
    }

    pub fn unit_type(mut self, unit: UnitType) -> Self {
        self.unit_type = Some(unit);
        self
    }

    pub fn total_excl_vat(mut self, total: Decimal) -> Self {
        self.total_excl_vat = Some(total);
        self
    }

    pub fn discount_excl_vat(mut self, discount: Decimal) -> Self {
        self.total_discount_excl_vat = Some(discount);
        self
    }

    pub fn vat_amount(mut self, amount: Decimal) -> Self {
        self.vat_amount = Some(amount);
        self
    }

    pub fn build(self) -> InvoiceLine {
        InvoiceLine {
            vat_type: self
                .vat_type
                .unwrap_or_else(|| classify_domestic(self.vat_percentage)),
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            vat_percentage: self.vat_percentage,
            line_number: self.line_number,
            unit_type: self.unit_type,
            total_excl_vat: self.total_excl_vat,
            total_discount_excl_vat: self.total_discount_excl_vat,
            vat_amount: self.vat_amount,
        }
    }
}

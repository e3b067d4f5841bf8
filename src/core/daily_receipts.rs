//! Daily receipts journal: point-of-sale totals booked per day.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::record::{self, Record};

/// One booked amount in a daily receipts journal.
///
/// Amounts are sent as given, without rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReceiptLine {
    pub line_type: i64,
    /// VAT type as Scrada's journal identifies it; kept as text.
    #[serde(rename = "vatTypeID")]
    pub vat_type_id: String,
    #[serde(rename = "vatPerc", serialize_with = "record::ser::exact")]
    pub vat_percentage: Decimal,
    #[serde(serialize_with = "record::ser::exact")]
    pub amount: Decimal,
    #[serde(rename = "categoryID", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl DailyReceiptLine {
    pub fn new(
        line_type: i64,
        vat_type_id: impl Into<String>,
        vat_percentage: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            line_type,
            vat_type_id: vat_type_id.into(),
            vat_percentage,
            amount,
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn from_record(data: &Record) -> Self {
        Self {
            line_type: record::opt_int(data, &["lineType"]).unwrap_or(0),
            vat_type_id: record::text(data, &["vatTypeID", "vatTypeId"]),
            vat_percentage: record::decimal_or_zero(data, &["vatPerc"]),
            amount: record::decimal_or_zero(data, &["amount"]),
            category_id: record::opt_text(data, &["categoryID", "categoryId"]),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Body of `PUT journal/{journal}/lines`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDailyReceiptLines {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub lines: Vec<DailyReceiptLine>,
    /// Passed through as given (`paymentMethodID`, `amount`).
    pub payment_methods: Vec<Record>,
}

impl AddDailyReceiptLines {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            lines: Vec::new(),
            payment_methods: Vec::new(),
        }
    }

    pub fn add_line(mut self, line: DailyReceiptLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn add_payment(mut self, payment_method_id: impl Into<String>, amount: Decimal) -> Self {
        let mut payment = Record::new();
        payment.insert("paymentMethodID".into(), Value::from(payment_method_id.into()));
        payment.insert("amount".into(), record::float(amount));
        self.payment_methods.push(payment);
        self
    }

    pub fn from_record(data: &Record) -> Self {
        Self {
            date: record::text(data, &["date"]),
            lines: record::objects(data, "lines")
                .map(DailyReceiptLine::from_record)
                .collect(),
            payment_methods: record::objects(data, "paymentMethods").cloned().collect(),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Daily receipt lines as callers may hand them over.
#[derive(Debug, Clone)]
pub enum DailyReceiptsInput {
    Record(Record),
    Lines(AddDailyReceiptLines),
}

impl DailyReceiptsInput {
    /// Request payload. A raw record keeps its shape apart from `lines`,
    /// whose object entries are normalized and whose other entries are dropped.
    pub fn into_payload(self) -> Record {
        match self {
            Self::Lines(l) => l.to_record(),
            Self::Record(mut data) => {
                if let Some(Value::Array(lines)) = data.get_mut("lines") {
                    let normalized: Vec<Value> = lines
                        .iter()
                        .filter_map(Value::as_object)
                        .map(|l| Value::Object(DailyReceiptLine::from_record(l).to_record()))
                        .collect();
                    *lines = normalized;
                }
                data
            }
        }
    }
}

impl From<Record> for DailyReceiptsInput {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl From<AddDailyReceiptLines> for DailyReceiptsInput {
    fn from(l: AddDailyReceiptLines) -> Self {
        Self::Lines(l)
    }
}

/// Payment method configured on a daily receipts journal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub payment_type: String,
    /// Record as received.
    pub raw: Record,
}

impl PaymentMethod {
    pub fn from_record(data: &Record) -> Self {
        Self {
            id: record::text(data, &["id", "paymentMethodID"]),
            name: record::text(data, &["name"]),
            payment_type: record::text(data, &["type"]),
            raw: data.clone(),
        }
    }

    /// The received record when there is one, else the typed fields.
    pub fn to_record(&self) -> Record {
        if !self.raw.is_empty() {
            return self.raw.clone();
        }
        let mut payload = Record::new();
        payload.insert("paymentMethodID".into(), Value::from(self.id.as_str()));
        payload.insert("name".into(), Value::from(self.name.as_str()));
        payload.insert("type".into(), Value::from(self.payment_type.as_str()));
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn line_aliases() {
        let line = DailyReceiptLine::from_record(&rec(json!({
            "lineType": 1,
            "vatTypeId": "1",
            "vatPerc": 21,
            "amount": "12.10",
            "categoryId": "cat",
        })));
        assert_eq!(line.vat_type_id, "1");
        assert_eq!(line.amount, dec!(12.10));
        assert_eq!(line.category_id.as_deref(), Some("cat"));

        let payload = line.to_record();
        assert!(payload.contains_key("vatTypeID"));
        assert!(payload.contains_key("categoryID"));
        assert!(!payload.contains_key("vatTypeId"));
    }

    #[test]
    fn category_omitted_when_absent() {
        let payload = DailyReceiptLine::new(1, "1", dec!(21), dec!(10)).to_record();
        assert!(!payload.contains_key("categoryID"));
    }

    #[test]
    fn non_object_entries_skipped() {
        let data = AddDailyReceiptLines::from_record(&rec(json!({
            "date": "2025-01-31",
            "lines": [{"lineType": 1}, 3, "x"],
            "paymentMethods": [{"paymentMethodID": "p1", "amount": 5}, null],
        })));
        assert_eq!(data.lines.len(), 1);
        assert_eq!(data.payment_methods.len(), 1);
    }

    #[test]
    fn raw_input_normalizes_lines_only() {
        let payload = DailyReceiptsInput::from(rec(json!({
            "date": "2025-01-31",
            "lines": [{"vatTypeId": "2", "amount": 3}, 7],
            "extra": true,
        })))
        .into_payload();
        assert_eq!(
            payload["lines"],
            json!([{"lineType": 0, "vatTypeID": "2", "vatPerc": 0.0, "amount": 3.0}])
        );
        assert_eq!(payload["extra"], json!(true));
    }

    #[test]
    fn amounts_are_not_rounded() {
        let payload = DailyReceiptsInput::from(rec(json!({
            "date": "2025-01-31",
            "lines": [{"lineType": 1, "vatTypeID": "1", "vatPerc": 5.5, "amount": 12.345}],
        })))
        .into_payload();
        assert_eq!(payload["lines"][0]["amount"], json!(12.345));
        assert_eq!(payload["lines"][0]["vatPerc"], json!(5.5));

        let typed = AddDailyReceiptLines::new("2025-01-31")
            .add_line(DailyReceiptLine::new(1, "1", dec!(21), dec!(0.125)))
            .add_payment("pm-1", dec!(99.999))
            .to_record();
        assert_eq!(typed["lines"][0]["amount"], json!(0.125));
        assert_eq!(typed["paymentMethods"][0]["amount"], json!(99.999));
    }

    #[test]
    fn payment_method_raw_passthrough() {
        let raw = rec(json!({
            "paymentMethodID": "pm-1",
            "name": "Cash",
            "type": "cash",
            "extra": 1,
        }));
        let pm = PaymentMethod::from_record(&raw);
        assert_eq!(pm.id, "pm-1");
        assert_eq!(pm.to_record(), raw);

        let bare = PaymentMethod {
            id: "x".into(),
            ..Default::default()
        };
        assert_eq!(bare.to_record()["paymentMethodID"], json!("x"));
    }
}

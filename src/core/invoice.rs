use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::attachment::Attachment;
use super::line::{InvoiceLine, LineInput};
use super::party::Customer;
use super::record::{self, Record};
use super::vat_totals::{VatTotal, aggregate_vat_totals};

/// Payment registered on the invoice at creation time (fully or partly paid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePaymentMethod {
    /// Payment type code as configured in Scrada.
    pub payment_type: i64,
    pub name: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "record::ser::opt_money"
    )]
    pub total_paid: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "record::ser::opt_money"
    )]
    pub total_to_pay: Option<Decimal>,
}

impl InvoicePaymentMethod {
    pub fn new(payment_type: i64, name: impl Into<String>) -> Self {
        Self {
            payment_type,
            name: name.into(),
            total_paid: None,
            total_to_pay: None,
        }
    }

    pub fn paid(mut self, amount: Decimal) -> Self {
        self.total_paid = Some(amount);
        self
    }

    pub fn to_pay(mut self, amount: Decimal) -> Self {
        self.total_to_pay = Some(amount);
        self
    }

    pub fn from_record(data: &Record) -> Self {
        Self {
            payment_type: record::opt_int(data, &["paymentType"]).unwrap_or(0),
            name: record::text(data, &["name"]),
            total_paid: record::opt_decimal(data, &["totalPaid"]),
            total_to_pay: record::opt_decimal(data, &["totalToPay"]),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Totals recomputed from the lines of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTotals {
    pub total_excl_vat: Decimal,
    pub total_vat: Decimal,
    pub total_incl_vat: Decimal,
}

/// Outbound sales invoice, as posted to `salesInvoice`.
///
/// The declared totals are whatever the caller supplied; they are not
/// reconciled with the lines. Use [`Invoice::line_totals`] to check them.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub book_year: String,
    pub journal: String,
    pub number: String,
    pub credit_invoice: bool,
    /// `YYYY-MM-DD`.
    pub invoice_date: String,
    /// Due date, `YYYY-MM-DD`.
    pub invoice_expiry_date: String,
    pub total_incl_vat: Decimal,
    pub total_excl_vat: Decimal,
    pub total_vat: Decimal,
    pub customer: Customer,
    pub lines: Vec<InvoiceLine>,
    /// Marks the invoice as already delivered, so Scrada does not send it.
    pub already_sent_to_customer: bool,
    pub attachments: Vec<Attachment>,
    pub payment_methods: Vec<InvoicePaymentMethod>,
    pub payable_rounding_amount: Option<Decimal>,
    pub note: Option<String>,
}

impl Invoice {
    /// Normalize a caller or upstream record. Never fails.
    ///
    /// Accepts both spellings of the sent flag and the legacy single-PDF
    /// shape (`base64Data` + `filename` at the top level).
    pub fn from_record(data: &Record) -> Self {
        let lines = record::objects(data, "lines")
            .map(InvoiceLine::from_record)
            .collect();

        let mut attachments: Vec<Attachment> = record::objects(data, "attachments")
            .map(Attachment::from_record)
            .collect();

        if attachments.is_empty() {
            if let Some(base64) = record::opt_text(data, &["base64Data"]) {
                let filename = record::opt_text(data, &["filename"])
                    .unwrap_or_else(|| "invoice.pdf".into());
                attachments.push(Attachment::pdf(filename, base64));
            }
        }

        let payment_methods = record::objects(data, "paymentMethods")
            .map(InvoicePaymentMethod::from_record)
            .collect();

        Self {
            book_year: record::text(data, &["bookYear"]),
            journal: record::text(data, &["journal"]),
            number: record::text(data, &["number"]),
            credit_invoice: record::flag(data, &["creditInvoice"]),
            invoice_date: record::text(data, &["invoiceDate"]),
            invoice_expiry_date: record::text(data, &["invoiceExpiryDate"]),
            total_incl_vat: record::decimal_or_zero(data, &["totalInclVat"]),
            total_excl_vat: record::decimal_or_zero(data, &["totalExclVat"]),
            total_vat: record::decimal_or_zero(data, &["totalVat"]),
            customer: Customer::from_record(&record::object(data, "customer")),
            lines,
            already_sent_to_customer: record::flag(
                data,
                &["alreadySendToCustomer", "alreadySentToCustomer"],
            ),
            attachments,
            payment_methods,
            payable_rounding_amount: record::opt_decimal(data, &["payableRoundingAmount"]),
            note: record::opt_text(data, &["note"]),
        }
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn has_payment_methods(&self) -> bool {
        !self.payment_methods.is_empty()
    }

    /// A copy of this invoice with one more attachment.
    #[must_use]
    pub fn with_attachment(&self, attachment: Attachment) -> Self {
        let mut next = self.clone();
        next.attachments.push(attachment);
        next
    }

    /// VAT summary per rate, as emitted under `vatTotals`.
    pub fn vat_totals(&self) -> Vec<VatTotal> {
        aggregate_vat_totals(&self.lines)
    }

    /// Totals derived from the lines, rounded to 2 decimals.
    pub fn line_totals(&self) -> LineTotals {
        let (excl, vat) = self
            .lines
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(excl, vat), line| {
                (
                    excl.saturating_add(line.line_total()),
                    vat.saturating_add(line.vat()),
                )
            });
        LineTotals {
            total_excl_vat: record::round(excl, 2),
            total_vat: record::round(vat, 2),
            total_incl_vat: record::round(excl.saturating_add(vat), 2),
        }
    }

    /// The request payload.
    ///
    /// Key order is fixed: header, customer, declared totals, lines,
    /// `vatTotals`, the sent flag, then the optional sections, which are
    /// omitted entirely when absent or empty.
    pub fn to_record(&self) -> Record {
        let lines: Vec<Value> = self
            .lines
            .iter()
            .map(|l| Value::Object(l.to_record()))
            .collect();
        let vat_totals: Vec<Value> = self
            .vat_totals()
            .iter()
            .map(|t| Value::Object(t.to_record()))
            .collect();

        let mut payload = Record::new();
        payload.insert("bookYear".into(), Value::from(self.book_year.as_str()));
        payload.insert("journal".into(), Value::from(self.journal.as_str()));
        payload.insert("number".into(), Value::from(self.number.as_str()));
        payload.insert("creditInvoice".into(), Value::Bool(self.credit_invoice));
        payload.insert("invoiceDate".into(), Value::from(self.invoice_date.as_str()));
        payload.insert(
            "invoiceExpiryDate".into(),
            Value::from(self.invoice_expiry_date.as_str()),
        );
        payload.insert("customer".into(), Value::Object(self.customer.to_record()));
        payload.insert("totalInclVat".into(), record::number(self.total_incl_vat, 2));
        payload.insert("totalExclVat".into(), record::number(self.total_excl_vat, 2));
        payload.insert("totalVat".into(), record::number(self.total_vat, 2));
        payload.insert("lines".into(), Value::Array(lines));
        payload.insert("vatTotals".into(), Value::Array(vat_totals));
        // Upstream spelling, "Send" not "Sent".
        payload.insert(
            "alreadySendToCustomer".into(),
            Value::Bool(self.already_sent_to_customer),
        );

        if let Some(r) = self.payable_rounding_amount {
            payload.insert("payableRoundingAmount".into(), record::number(r, 2));
        }
        if let Some(n) = &self.note {
            payload.insert("note".into(), Value::from(n.as_str()));
        }
        if self.has_attachments() {
            payload.insert(
                "attachments".into(),
                self.attachments
                    .iter()
                    .map(|a| Value::Object(a.to_record()))
                    .collect(),
            );
        }
        if self.has_payment_methods() {
            payload.insert(
                "paymentMethods".into(),
                self.payment_methods
                    .iter()
                    .map(|m| Value::Object(m.to_record()))
                    .collect(),
            );
        }

        payload
    }
}

/// An invoice as callers may hand it to the client: a raw record or an
/// assembled [`Invoice`].
#[derive(Debug, Clone)]
pub enum InvoiceInput {
    Record(Record),
    Invoice(Invoice),
}

impl InvoiceInput {
    /// Request payload. Raw records keep their shape; only their lines are
    /// normalized, and non-object lines are dropped.
    pub fn into_payload(self) -> Record {
        match self {
            Self::Invoice(invoice) => invoice.to_record(),
            Self::Record(mut data) => {
                normalize_lines(&mut data);
                data
            }
        }
    }
}

impl From<Record> for InvoiceInput {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl From<Invoice> for InvoiceInput {
    fn from(i: Invoice) -> Self {
        Self::Invoice(i)
    }
}

/// Rewrite `data["lines"]` into canonical line payloads, if it is an array.
pub(crate) fn normalize_lines(data: &mut Record) {
    if let Some(Value::Array(lines)) = data.get_mut("lines") {
        let normalized: Vec<Value> = lines
            .drain(..)
            .filter_map(|l| match l {
                Value::Object(r) => {
                    Some(Value::Object(LineInput::Record(r).normalize().to_record()))
                }
                _ => None,
            })
            .collect();
        *lines = normalized;
    }
}

/// Builder for [`Invoice`].
///
/// ```
/// use scrada::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let customer = CustomerBuilder::new(
///     "CUST01",
///     "Customer BV",
///     AddressBuilder::new("Main", "1", "Brussels", "1000", "BE").build(),
/// )
/// .build();
///
/// let invoice = InvoiceBuilder::new("2025", "SALES", "2025-001", customer)
///     .invoice_date(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap())
///     .add_line(InvoiceLineBuilder::new("Service", dec!(1), dec!(100), dec!(21)).build())
///     .totals_from_lines()
///     .build();
///
/// assert_eq!(invoice.invoice_date, "2025-06-03");
/// assert_eq!(invoice.total_incl_vat, dec!(121));
/// ```
pub struct InvoiceBuilder {
    book_year: String,
    journal: String,
    number: String,
    credit_invoice: bool,
    invoice_date: String,
    invoice_expiry_date: String,
    totals: Option<(Decimal, Decimal, Decimal)>,
    derive_totals: bool,
    customer: Customer,
    lines: Vec<InvoiceLine>,
    already_sent_to_customer: bool,
    attachments: Vec<Attachment>,
    payment_methods: Vec<InvoicePaymentMethod>,
    payable_rounding_amount: Option<Decimal>,
    note: Option<String>,
}

impl InvoiceBuilder {
    pub fn new(
        book_year: impl Into<String>,
        journal: impl Into<String>,
        number: impl Into<String>,
        customer: Customer,
    ) -> Self {
        Self {
            book_year: book_year.into(),
            journal: journal.into(),
            number: number.into(),
            credit_invoice: false,
            invoice_date: String::new(),
            invoice_expiry_date: String::new(),
            totals: None,
            derive_totals: false,
            customer,
            lines: Vec::new(),
            already_sent_to_customer: false,
            attachments: Vec::new(),
            payment_methods: Vec::new(),
            payable_rounding_amount: None,
            note: None,
        }
    }

    pub fn credit_invoice(mut self, credit: bool) -> Self {
        self.credit_invoice = credit;
        self
    }

    pub fn invoice_date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = date.format("%Y-%m-%d").to_string();
        self
    }

    pub fn invoice_expiry_date(mut self, date: NaiveDate) -> Self {
        self.invoice_expiry_date = date.format("%Y-%m-%d").to_string();
        self
    }

    /// Declared totals, taken as given.
    pub fn totals(mut self, incl_vat: Decimal, excl_vat: Decimal, vat: Decimal) -> Self {
        self.totals = Some((incl_vat, excl_vat, vat));
        self.derive_totals = false;
        self
    }

    /// Declare the totals computed from the lines at build time.
    pub fn totals_from_lines(mut self) -> Self {
        self.derive_totals = true;
        self
    }

    pub fn add_line(mut self, line: impl Into<LineInput>) -> Self {
        self.lines.push(line.into().normalize());
        self
    }

    pub fn already_sent_to_customer(mut self, sent: bool) -> Self {
        self.already_sent_to_customer = sent;
        self
    }

    pub fn add_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn add_payment_method(mut self, method: InvoicePaymentMethod) -> Self {
        self.payment_methods.push(method);
        self
    }

    pub fn payable_rounding_amount(mut self, amount: Decimal) -> Self {
        self.payable_rounding_amount = Some(amount);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn build(self) -> Invoice {
        let mut invoice = Invoice {
            book_year: self.book_year,
            journal: self.journal,
            number: self.number,
            credit_invoice: self.credit_invoice,
            invoice_date: self.invoice_date,
            invoice_expiry_date: self.invoice_expiry_date,
            total_incl_vat: Decimal::ZERO,
            total_excl_vat: Decimal::ZERO,
            total_vat: Decimal::ZERO,
            customer: self.customer,
            lines: self.lines,
            already_sent_to_customer: self.already_sent_to_customer,
            attachments: self.attachments,
            payment_methods: self.payment_methods,
            payable_rounding_amount: self.payable_rounding_amount,
            note: self.note,
        };

        if self.derive_totals {
            let t = invoice.line_totals();
            invoice.total_incl_vat = t.total_incl_vat;
            invoice.total_excl_vat = t.total_excl_vat;
            invoice.total_vat = t.total_vat;
        } else if let Some((incl, excl, vat)) = self.totals {
            invoice.total_incl_vat = incl;
            invoice.total_excl_vat = excl;
            invoice.total_vat = vat;
        }

        invoice
    }
}

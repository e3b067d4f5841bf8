//! Models decoded from API responses.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::record::{self, Record};
use super::status::{SendMethod, SendStatus};

/// Result of creating a sales invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSalesInvoiceResponse {
    pub id: String,
    /// `draft` unless the API says otherwise.
    pub status: String,
    pub raw: Record,
}

impl CreateSalesInvoiceResponse {
    pub fn from_record(data: &Record) -> Self {
        Self {
            id: record::text(data, &["id"]),
            status: record::opt_text(data, &["status"]).unwrap_or_else(|| "draft".into()),
            raw: data.clone(),
        }
    }

    /// Decode a response body.
    ///
    /// Scrada answers either with a JSON object or with the bare invoice id,
    /// quoted or not.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(data)) => Self::from_record(&data),
            Ok(Value::String(id)) => Self::draft(id),
            _ => Self::draft(body.trim().trim_matches('"')),
        }
    }

    fn draft(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: "draft".into(),
            raw: Record::new(),
        }
    }

    pub fn to_record(&self) -> Record {
        if !self.raw.is_empty() {
            return self.raw.clone();
        }
        let mut payload = Record::new();
        payload.insert("id".into(), Value::from(self.id.as_str()));
        payload.insert("status".into(), Value::from(self.status.as_str()));
        payload
    }
}

/// Delivery status of a sales invoice.
///
/// Text fields are `None` when absent or empty. An unknown `status` or
/// `sendMethod` string also decodes to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SendStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_method: Option<SendMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(rename = "peppolSenderID", skip_serializing_if = "Option::is_none")]
    pub peppol_sender_id: Option<String>,
    #[serde(rename = "peppolReceiverID", skip_serializing_if = "Option::is_none")]
    pub peppol_receiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_c1_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_c2_timestamp: Option<String>,
    #[serde(rename = "peppolC2SeatID", skip_serializing_if = "Option::is_none")]
    pub peppol_c2_seat_id: Option<String>,
    #[serde(rename = "peppolC2MessageID", skip_serializing_if = "Option::is_none")]
    pub peppol_c2_message_id: Option<String>,
    #[serde(rename = "peppolC3MessageID", skip_serializing_if = "Option::is_none")]
    pub peppol_c3_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_c3_timestamp: Option<String>,
    #[serde(rename = "peppolC3SeatID", skip_serializing_if = "Option::is_none")]
    pub peppol_c3_seat_id: Option<String>,
    #[serde(rename = "peppolConversationID", skip_serializing_if = "Option::is_none")]
    pub peppol_conversation_id: Option<String>,
    #[serde(rename = "peppolSbdhInstanceID", skip_serializing_if = "Option::is_none")]
    pub peppol_sbdh_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_document_type_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_document_type_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_process_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peppol_process_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(rename = "peppolOutboundDocumentID", skip_serializing_if = "Option::is_none")]
    pub peppol_outbound_document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_email_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_email_status: Option<String>,
}

impl SendStatusResponse {
    pub fn from_record(data: &Record) -> Self {
        let text = |key: &str| record::non_empty_text(data, &[key]);

        Self {
            id: text("id"),
            status: record::opt_text(data, &["status"])
                .and_then(|s| SendStatus::from_code(&s)),
            send_method: record::opt_text(data, &["sendMethod"])
                .and_then(|s| SendMethod::from_code(&s)),
            created_on: text("createdOn"),
            external_reference: text("externalReference"),
            peppol_sender_id: text("peppolSenderID"),
            peppol_receiver_id: text("peppolReceiverID"),
            peppol_c1_country_code: text("peppolC1CountryCode"),
            peppol_c2_timestamp: text("peppolC2Timestamp"),
            peppol_c2_seat_id: text("peppolC2SeatID"),
            peppol_c2_message_id: text("peppolC2MessageID"),
            peppol_c3_message_id: text("peppolC3MessageID"),
            peppol_c3_timestamp: text("peppolC3Timestamp"),
            peppol_c3_seat_id: text("peppolC3SeatID"),
            peppol_conversation_id: text("peppolConversationID"),
            peppol_sbdh_instance_id: text("peppolSbdhInstanceID"),
            peppol_document_type_scheme: text("peppolDocumentTypeScheme"),
            peppol_document_type_value: text("peppolDocumentTypeValue"),
            peppol_process_scheme: text("peppolProcessScheme"),
            peppol_process_value: text("peppolProcessValue"),
            attempt: record::opt_int(data, &["attempt"]),
            error_message: text("errorMessage"),
            peppol_outbound_document_id: text("peppolOutboundDocumentID"),
            receiver_email_address: text("receiverEmailAddress"),
            receiver_email_time: text("receiverEmailTime"),
            receiver_email_status: text("receiverEmailStatus"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|s| s.is_success())
    }

    pub fn is_error(&self) -> bool {
        self.status.is_some_and(|s| s.is_error())
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_some_and(|s| s.is_pending())
    }

    pub fn was_sent_via_peppol(&self) -> bool {
        self.send_method.is_some_and(|m| m.uses_peppol())
    }

    pub fn was_sent_via_email(&self) -> bool {
        self.send_method.is_some_and(|m| m.uses_email())
    }

    /// Present fields only.
    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Peppol capabilities of a party.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeppolLookupResult {
    pub registered: bool,
    pub support_invoice: bool,
    pub support_credit_invoice: bool,
    pub support_self_billing_invoice: bool,
    pub support_self_billing_credit_invoice: bool,
    /// The full response.
    #[serde(skip)]
    pub meta: Record,
}

impl PeppolLookupResult {
    /// Older API versions answered with `invoice`/`canReceiveInvoices` and
    /// `creditNote`/`canReceiveCreditNotes` and no `registered` flag; those
    /// imply registration. Order and despatch capabilities are only kept in
    /// `meta`.
    pub fn from_record(data: &Record) -> Self {
        let legacy_invoice = record::flag(data, &["invoice", "canReceiveInvoices"]);
        let legacy_credit = record::flag(data, &["creditNote", "canReceiveCreditNotes"]);
        let registered = match record::first(data, &["registered"]) {
            Some(v) => record::truthy(v),
            None => legacy_invoice || legacy_credit,
        };

        Self {
            registered,
            support_invoice: record::flag(data, &["supportInvoice"]) || legacy_invoice,
            support_credit_invoice: record::flag(data, &["supportCreditInvoice"]) || legacy_credit,
            support_self_billing_invoice: record::flag(data, &["supportSelfBillingInvoice"]),
            support_self_billing_credit_invoice: record::flag(
                data,
                &["supportSelfBillingCreditInvoice"],
            ),
            meta: data.clone(),
        }
    }

    pub fn can_receive_invoices(&self) -> bool {
        self.registered && self.support_invoice
    }

    pub fn can_receive_credit_invoices(&self) -> bool {
        self.registered && self.support_credit_invoice
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Document received over Peppol.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundDocument {
    pub id: String,
    pub document_number: String,
    pub supplier_name: String,
    pub status: String,
    pub received_at: String,
    #[serde(serialize_with = "record::ser::money")]
    pub total_incl_vat: Decimal,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "record::ser::opt_money"
    )]
    pub total_excl_vat: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Record as received. Not part of [`Self::to_record`].
    #[serde(skip)]
    pub raw: Record,
}

impl InboundDocument {
    pub fn from_record(data: &Record) -> Self {
        Self {
            id: record::text(data, &["id"]),
            document_number: record::text(data, &["documentNumber", "number"]),
            supplier_name: record::text(data, &["supplierName"]),
            status: record::text(data, &["status"]),
            received_at: record::text(data, &["receivedAt", "createdAt"]),
            total_incl_vat: record::decimal_or_zero(data, &["totalInclVat"]),
            total_excl_vat: record::opt_decimal(data, &["totalExclVat"]),
            currency: record::opt_text(data, &["currency"]),
            raw: data.clone(),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

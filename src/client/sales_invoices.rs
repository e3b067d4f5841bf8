use serde_json::Value;

use super::errors::Subject;
use super::transport::{ApiRequest, Transport};
use super::Scrada;
use crate::core::{CreateSalesInvoiceResponse, InvoiceInput, ScradaError, SendStatusResponse};

const RESOURCE: &str = "Sales invoice";

/// `salesInvoice` endpoints.
pub struct SalesInvoices<'a, T: Transport> {
    client: &'a Scrada<T>,
}

impl<'a, T: Transport> SalesInvoices<'a, T> {
    pub(crate) fn new(client: &'a Scrada<T>) -> Self {
        Self { client }
    }

    /// Create a sales invoice from a raw record or an assembled invoice.
    pub async fn create(
        &self,
        invoice: impl Into<InvoiceInput>,
    ) -> Result<CreateSalesInvoiceResponse, ScradaError> {
        let payload = invoice.into().into_payload();
        let request = ApiRequest::post(self.client.path("/salesInvoice"), Value::Object(payload));
        let response = self.client.send(request, Subject::default()).await?;
        Ok(CreateSalesInvoiceResponse::from_body(&response.text()))
    }

    pub async fn send_status(&self, id: &str) -> Result<SendStatusResponse, ScradaError> {
        let request = ApiRequest::get(self.client.path(&format!("/salesInvoice/{id}/sendStatus")));
        let response = self
            .client
            .send(request, Subject { resource: RESOURCE, id })
            .await?;
        Ok(match response.json() {
            Some(Value::Object(data)) => SendStatusResponse::from_record(&data),
            _ => SendStatusResponse::default(),
        })
    }

    /// UBL XML of the invoice, as returned.
    pub async fn ubl(&self, id: &str) -> Result<String, ScradaError> {
        let request = ApiRequest::get(self.client.path(&format!("/salesInvoice/{id}/ubl")));
        let response = self
            .client
            .send(request, Subject { resource: RESOURCE, id })
            .await?;
        Ok(response.text())
    }
}

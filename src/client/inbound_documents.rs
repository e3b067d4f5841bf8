use serde_json::Value;

use super::errors::Subject;
use super::transport::{ApiRequest, Transport};
use super::{Scrada, object_items};
use crate::core::{InboundDocument, ScradaError};

const RESOURCE: &str = "Inbound document";

/// Documents received over Peppol.
pub struct InboundDocuments<'a, T: Transport> {
    client: &'a Scrada<T>,
}

impl<'a, T: Transport> InboundDocuments<'a, T> {
    pub(crate) fn new(client: &'a Scrada<T>) -> Self {
        Self { client }
    }

    fn document_path(&self, id: &str, suffix: &str) -> String {
        self.client
            .path(&format!("/peppol/inbound/document/{id}{suffix}"))
    }

    /// Documents not yet confirmed as handled.
    pub async fn unconfirmed(&self) -> Result<Vec<InboundDocument>, ScradaError> {
        let request = ApiRequest::get(self.client.path("/peppol/inbound/document/unconfirmed"));
        let response = self.client.send(request, Subject::default()).await?;
        Ok(object_items(response.json())
            .iter()
            .map(InboundDocument::from_record)
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<InboundDocument, ScradaError> {
        let request = ApiRequest::get(self.document_path(id, ""));
        let response = self
            .client
            .send(request, Subject { resource: RESOURCE, id })
            .await?;
        Ok(match response.json() {
            Some(Value::Object(data)) => InboundDocument::from_record(&data),
            _ => InboundDocument {
                id: id.to_string(),
                ..Default::default()
            },
        })
    }

    /// The document rendered as PDF.
    pub async fn pdf(&self, id: &str) -> Result<Vec<u8>, ScradaError> {
        let request = ApiRequest::get(self.document_path(id, "/pdf")).accept("application/pdf");
        let response = self
            .client
            .send(request, Subject { resource: RESOURCE, id })
            .await?;
        Ok(response.body)
    }

    /// Mark the document as handled.
    ///
    /// Returns the `confirmed` flag when the API sends one, else whether
    /// `status` is `confirmed`, else `true`.
    pub async fn confirm(&self, id: &str) -> Result<bool, ScradaError> {
        let request = ApiRequest::put(self.document_path(id, "/confirm"), None);
        let response = self
            .client
            .send(request, Subject { resource: RESOURCE, id })
            .await?;

        let Some(Value::Object(data)) = response.json() else {
            return Ok(true);
        };
        if let Some(confirmed) = data.get("confirmed") {
            return Ok(crate::core::record::truthy(confirmed));
        }
        if let Some(status) = data.get("status") {
            return Ok(status.as_str() == Some("confirmed"));
        }
        Ok(true)
    }
}

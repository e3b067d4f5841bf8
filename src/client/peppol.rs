use serde_json::Value;

use super::errors::Subject;
use super::transport::{ApiRequest, Transport};
use super::Scrada;
use crate::core::{Customer, PeppolLookupResult, ScradaError};

/// Peppol directory endpoints.
pub struct Peppol<'a, T: Transport> {
    client: &'a Scrada<T>,
}

impl<'a, T: Transport> Peppol<'a, T> {
    pub(crate) fn new(client: &'a Scrada<T>) -> Self {
        Self { client }
    }

    /// Whether `customer` can receive documents over Peppol.
    pub async fn lookup_party(
        &self,
        customer: &Customer,
    ) -> Result<PeppolLookupResult, ScradaError> {
        let request = ApiRequest::post(
            self.client.path("/peppol/lookup"),
            Value::Object(customer.to_record()),
        );
        let response = self.client.send(request, Subject::default()).await?;
        Ok(match response.json() {
            Some(Value::Object(data)) => PeppolLookupResult::from_record(&data),
            _ => PeppolLookupResult::default(),
        })
    }
}

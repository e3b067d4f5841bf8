use serde_json::Value;

use super::errors::Subject;
use super::transport::{ApiRequest, Transport};
use super::{Scrada, object_items};
use crate::core::{DailyReceiptsInput, PaymentMethod, ScradaError};

/// Daily receipts journal endpoints.
pub struct DailyReceipts<'a, T: Transport> {
    client: &'a Scrada<T>,
}

impl<'a, T: Transport> DailyReceipts<'a, T> {
    pub(crate) fn new(client: &'a Scrada<T>) -> Self {
        Self { client }
    }

    /// Payment methods configured on a journal.
    pub async fn payment_methods(&self, journal: &str) -> Result<Vec<PaymentMethod>, ScradaError> {
        let request =
            ApiRequest::get(self.client.path(&format!("/journal/{journal}/paymentMethod")));
        let response = self.client.send(request, Subject::default()).await?;
        Ok(object_items(response.json())
            .iter()
            .map(PaymentMethod::from_record)
            .collect())
    }

    /// Book receipt lines on a journal.
    pub async fn add_lines(
        &self,
        journal: &str,
        lines: impl Into<DailyReceiptsInput>,
    ) -> Result<(), ScradaError> {
        let payload = lines.into().into_payload();
        let request = ApiRequest::put(
            self.client.path(&format!("/journal/{journal}/lines")),
            Some(Value::Object(payload)),
        );
        self.client.send(request, Subject::default()).await?;
        Ok(())
    }
}

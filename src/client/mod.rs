//! Async client for the Scrada REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), scrada::ScradaError> {
//! use scrada::client::{ClientConfig, Scrada};
//!
//! let scrada = Scrada::new(ClientConfig::from_env()?)?;
//! let status = scrada.sales_invoices().send_status("1b1c5b7a").await?;
//! println!("{:?}", status.status);
//! # Ok(())
//! # }
//! ```

mod config;
mod daily_receipts;
mod errors;
mod inbound_documents;
mod peppol;
mod sales_invoices;
mod transport;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use daily_receipts::DailyReceipts;
pub use inbound_documents::InboundDocuments;
pub use peppol::Peppol;
pub use sales_invoices::SalesInvoices;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

use serde_json::Value;
use tracing::warn;

use crate::core::ScradaError;
use errors::Subject;

/// Entry point: one company, one transport.
#[derive(Debug, Clone)]
pub struct Scrada<T: Transport = HttpTransport> {
    transport: T,
    company_id: String,
}

impl Scrada<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ScradaError> {
        let company_id = config.company_id().to_string();
        Ok(Self {
            transport: HttpTransport::new(config)?,
            company_id,
        })
    }
}

impl<T: Transport> Scrada<T> {
    /// Use a custom transport.
    pub fn with_transport(company_id: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            company_id: company_id.into(),
        }
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sales_invoices(&self) -> SalesInvoices<'_, T> {
        SalesInvoices::new(self)
    }

    pub fn daily_receipts(&self) -> DailyReceipts<'_, T> {
        DailyReceipts::new(self)
    }

    pub fn peppol(&self) -> Peppol<'_, T> {
        Peppol::new(self)
    }

    pub fn inbound_documents(&self) -> InboundDocuments<'_, T> {
        InboundDocuments::new(self)
    }

    /// `/v1/company/{companyId}` followed by `suffix`.
    pub(crate) fn path(&self, suffix: &str) -> String {
        format!("/v1/company/{}{}", self.company_id, suffix)
    }

    /// Execute and translate failures.
    pub(crate) async fn send(
        &self,
        request: ApiRequest,
        subject: Subject<'_>,
    ) -> Result<ApiResponse, ScradaError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        let response = self.transport.execute(request).await?;
        errors::check(response, subject).inspect_err(|e| {
            warn!(method, path = %path, status = e.status(), error = %e, "request failed");
        })
    }
}

/// Array entries that are objects; anything else yields nothing.
pub(crate) fn object_items(body: Option<Value>) -> Vec<crate::core::Record> {
    match body {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(o) => Some(o),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::debug;

use crate::core::{Error, Result};
use crate::methods::Fields;
use crate::response::Transaction;

/// Transport seam for the gateway exchange.
///
/// Connection handling, TLS and timeouts live behind this trait; the core
/// only issues one POST per call and propagates whatever fails.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `fields` as `multipart/form-data` and decode the response body
    async fn post_form(&self, url: &str, fields: &Fields) -> Result<Transaction>;
}

/// Default transport over a shared `reqwest` client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(&self, url: &str, fields: &Fields) -> Result<Transaction> {
        let mut form = multipart::Form::new();
        for (key, value) in fields {
            form = form.text(key.clone(), value.clone());
        }

        debug!(url, field_count = fields.len(), "posting form to gateway");

        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::gateway(format!(
                "Gateway returned HTTP {} ({})",
                status.as_u16(),
                body
            )));
        }

        Ok(Transaction::from_body(&body))
    }
}

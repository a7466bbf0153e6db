use std::str::FromStr;

use tracing::{error, info};

use crate::config::Config;
use crate::core::{Error, Result};
use crate::methods::{Fields, Method, PaymentMethod};
use crate::response::Transaction;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Production gateway endpoint
pub const LIVE_URL: &str = "https://n.gomypay.asia/ShuntClass.aspx";
/// Sandbox gateway endpoint
pub const TEST_URL: &str = "https://n.gomypay.asia/TestShuntClass.aspx";

/// Response format requested from the gateway.
///
/// `Json` asks for the checksum-bearing JSON format and enables integrity
/// verification; `Default` leaves the gateway's native format untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    #[default]
    Default,
    Json,
}

/// Orchestrates one payment method against the gateway.
///
/// A facade is bound to exactly one payment-method variant for its
/// lifetime; submitting through a different method requires a new facade.
/// `execute` may be called repeatedly, each call assembling a fresh request
/// from the currently configured payload.
pub struct PaymentFacade {
    config: Config,
    method: Method,
    strategy: Box<dyn PaymentMethod>,
    transport: Box<dyn HttpTransport>,
}

impl std::fmt::Debug for PaymentFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentFacade")
            .field("config", &self.config)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

impl PaymentFacade {
    /// Resolve `method` by name and bind the facade to it.
    ///
    /// Fails with [`Error::UnknownPaymentMethod`] when the name matches no
    /// known variant; this is fatal and non-retryable.
    pub fn new(config: Config, method: &str) -> Result<Self> {
        Self::with_transport(config, method, Box::new(ReqwestTransport::new()))
    }

    /// Like [`PaymentFacade::new`] with a caller-supplied transport
    pub fn with_transport(
        config: Config,
        method: &str,
        transport: Box<dyn HttpTransport>,
    ) -> Result<Self> {
        let method = Method::from_str(method)?;

        Ok(Self {
            strategy: method.strategy(),
            config,
            method,
            transport,
        })
    }

    /// The payment method this facade is bound to
    pub fn method(&self) -> Method {
        self.method
    }

    /// Forward method-specific fields to the active strategy.
    ///
    /// No local validation happens here; unknown or missing fields are
    /// discovered only at the gateway. Returns the facade for chaining.
    pub fn configure<K, V, I>(&mut self, fields: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields: Fields = fields
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.strategy.configure(fields);
        self
    }

    /// Endpoint chosen for the next submission: the configured override if
    /// any, otherwise the live or sandbox constant per the live-mode flag
    pub fn endpoint(&self) -> &str {
        match &self.config.base_url {
            Some(url) => url,
            None if self.config.live_mode => LIVE_URL,
            None => TEST_URL,
        }
    }

    /// Assemble the full request field set for one submission.
    ///
    /// Merges the strategy payload with the account identifiers and the
    /// method's `Send_Type`, then defaults `Return_url` and `Callback_Url`
    /// from the configuration only where the strategy did not set them; a
    /// caller-supplied value always wins. JSON mode additionally requests
    /// the checksum-bearing response format.
    pub fn request_payload(&self, mode: ResponseMode) -> Fields {
        let mut queries = self.strategy.payload().clone();

        queries.insert("CustomerId".to_string(), self.config.customer_id.clone());
        queries.insert("Send_Type".to_string(), self.strategy.send_type().to_string());

        if !queries.contains_key("Return_url") {
            if let Some(url) = &self.config.return_url {
                queries.insert("Return_url".to_string(), url.clone());
            }
        }
        if !queries.contains_key("Callback_Url") {
            if let Some(url) = &self.config.callback_url {
                queries.insert("Callback_Url".to_string(), url.clone());
            }
        }

        if mode == ResponseMode::Json {
            queries.insert("e_return".to_string(), "1".to_string());
            queries.insert("Str_Check".to_string(), self.config.secret_key.clone());
        }

        queries
    }

    /// Submit one payment request and interpret the gateway's answer.
    ///
    /// Transport failures propagate unchanged. In JSON mode a successful
    /// response is checksum-verified before it is returned; a gateway-side
    /// rejection (`result == "0"`) raises [`Error::Gateway`] with the
    /// gateway's message verbatim.
    pub async fn execute(&self, mode: ResponseMode) -> Result<Transaction> {
        let url = self.endpoint();
        let queries = self.request_payload(mode);

        info!(
            method = %self.method,
            mode = ?mode,
            url,
            "Submitting payment request"
        );

        let response = self.transport.post_form(url, &queries).await?;

        // Verification is deliberately limited to result == "1": the
        // gateway's checksum behavior for other result codes is
        // undocumented, so those responses pass through unverified.
        if mode == ResponseMode::Json
            && response.result() == Some("1")
            && !self.response_is_valid(&response)
        {
            error!(method = %self.method, "Response checksum mismatch");
            return Err(Error::InvalidResponseSignature);
        }

        if response.result() == Some("0") {
            let message = response.return_message().to_string();
            error!(method = %self.method, message = %message, "Gateway rejected the request");
            return Err(Error::Gateway(message));
        }

        info!(
            method = %self.method,
            order = ?response.get("e_orderno"),
            "Payment request accepted"
        );

        Ok(response)
    }

    /// Recompute the response checksum and compare it to the value the
    /// gateway supplied. Absent fields concatenate as empty strings,
    /// matching the gateway's own computation.
    fn response_is_valid(&self, response: &Transaction) -> bool {
        let expected = response_checksum(
            response.get("result").unwrap_or(""),
            response.get("e_orderno").unwrap_or(""),
            &self.config.store_id,
            response.get("e_money").unwrap_or(""),
            response.get("OrderID").unwrap_or(""),
            &self.config.secret_key,
        );

        response.get("str_check") == Some(expected.as_str())
    }
}

/// Expected checksum for a JSON-mode gateway response.
///
/// The six fields concatenate in this exact order with no separators and
/// pass through MD5, compared as a lowercase hex string. MD5 is what the
/// gateway's wire protocol mandates; it must be reproduced bit-exactly and
/// never swapped for a stronger hash, or verification breaks against the
/// remote side.
pub fn response_checksum(
    result: &str,
    e_orderno: &str,
    store_id: &str,
    e_money: &str,
    order_id: &str,
    secret_key: &str,
) -> String {
    let message = format!(
        "{}{}{}{}{}{}",
        result, e_orderno, store_id, e_money, order_id, secret_key
    );
    let digest = md5::compute(message.as_bytes());

    format!("{:x}", digest)
}

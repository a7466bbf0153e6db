//! GoMyPay Gateway Client Library
//!
//! This library assembles and submits payment requests to the GoMyPay
//! gateway and validates the authenticity of its responses.
//!
//! ```no_run
//! use gomypay::{Config, PaymentFacade, ResponseMode};
//!
//! # async fn run() -> gomypay::Result<()> {
//! let config = Config::from_env()?;
//! let mut facade = PaymentFacade::new(config, "credit-card")?;
//!
//! facade.configure([
//!     ("Order_No", "ORD-2026-0001"),
//!     ("Amount", "1500"),
//!     ("TransCode", "00"),
//! ]);
//!
//! let transaction = facade.execute(ResponseMode::Json).await?;
//! println!("order {:?}", transaction.get("e_orderno"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod facade;
pub mod methods;
pub mod response;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use core::{Error, Result};
pub use facade::{PaymentFacade, ResponseMode};
pub use methods::{Method, PaymentMethod};
pub use response::Transaction;
pub use transport::{HttpTransport, ReqwestTransport};

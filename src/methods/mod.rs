use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::Error;

pub mod credit_card;
pub mod line_pay;
pub mod regular_deduction;
pub mod supermarket;
pub mod union_pay;
pub mod virtual_account;
pub mod web_atm;

pub use credit_card::CreditCard;
pub use line_pay::LinePay;
pub use regular_deduction::RegularDeduction;
pub use supermarket::{Barcode, CvsCode};
pub use union_pay::UnionPay;
pub use virtual_account::VirtualAccount;
pub use web_atm::WebAtm;

/// Request field mapping: gateway parameter name to value.
///
/// The wire protocol is untyped form text, so values travel as strings;
/// numeric flags are transmitted as their decimal representation.
pub type Fields = HashMap<String, String>;

/// Payment method strategy.
///
/// One implementation per gateway payment method. A strategy stores the
/// caller-supplied fields untouched and declares the protocol `Send_Type`
/// constant the gateway routes on. Field-level validation is the gateway's
/// job, not ours.
pub trait PaymentMethod: Send + Sync {
    /// Merge caller-supplied fields into the payload. Later calls win on
    /// duplicate keys.
    fn configure(&mut self, fields: Fields);

    /// The current payload mapping, exactly as configured
    fn payload(&self) -> &Fields;

    /// Fixed protocol constant identifying this method to the gateway
    fn send_type(&self) -> &'static str;
}

/// The known payment method variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    CreditCard,
    UnionPay,
    Barcode,
    CvsCode,
    WebAtm,
    VirtualAccount,
    RegularDeduction,
    LinePay,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::CreditCard,
        Method::UnionPay,
        Method::Barcode,
        Method::CvsCode,
        Method::WebAtm,
        Method::VirtualAccount,
        Method::RegularDeduction,
        Method::LinePay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::CreditCard => "credit-card",
            Method::UnionPay => "union-pay",
            Method::Barcode => "barcode",
            Method::CvsCode => "code",
            Method::WebAtm => "web-atm",
            Method::VirtualAccount => "virtual-account",
            Method::RegularDeduction => "regular-deduction",
            Method::LinePay => "line-pay",
        }
    }

    /// Instantiate the strategy for this variant
    pub(crate) fn strategy(&self) -> Box<dyn PaymentMethod> {
        match self {
            Method::CreditCard => Box::new(CreditCard::default()),
            Method::UnionPay => Box::new(UnionPay::default()),
            Method::Barcode => Box::new(Barcode::default()),
            Method::CvsCode => Box::new(CvsCode::default()),
            Method::WebAtm => Box::new(WebAtm::default()),
            Method::VirtualAccount => Box::new(VirtualAccount::default()),
            Method::RegularDeduction => Box::new(RegularDeduction::default()),
            Method::LinePay => Box::new(LinePay::default()),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit-card" => Ok(Method::CreditCard),
            "union-pay" => Ok(Method::UnionPay),
            "barcode" => Ok(Method::Barcode),
            "code" => Ok(Method::CvsCode),
            "web-atm" => Ok(Method::WebAtm),
            "virtual-account" => Ok(Method::VirtualAccount),
            "regular-deduction" => Ok(Method::RegularDeduction),
            "line-pay" => Ok(Method::LinePay),
            other => Err(Error::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

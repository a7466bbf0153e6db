use super::{Fields, PaymentMethod};

/// Credit card payment (`Send_Type` 0).
///
/// The gateway expects the order fields (`Order_No`, `Amount`, `TransCode`)
/// plus either raw card data or a stored-card token; installment purchases
/// add `Installment`. All of that is caller-supplied and passed through
/// unmodified.
#[derive(Debug, Default)]
pub struct CreditCard {
    fields: Fields,
}

impl PaymentMethod for CreditCard {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "0"
    }
}

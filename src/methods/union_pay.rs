use super::{Fields, PaymentMethod};

/// UnionPay card payment (`Send_Type` 1)
#[derive(Debug, Default)]
pub struct UnionPay {
    fields: Fields,
}

impl PaymentMethod for UnionPay {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "1"
    }
}

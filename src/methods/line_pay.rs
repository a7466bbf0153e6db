use super::{Fields, PaymentMethod};

/// LINE Pay mobile payment (`Send_Type` 7)
#[derive(Debug, Default)]
pub struct LinePay {
    fields: Fields,
}

impl PaymentMethod for LinePay {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "7"
    }
}

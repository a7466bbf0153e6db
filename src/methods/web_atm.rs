use super::{Fields, PaymentMethod};

/// Web ATM transfer (`Send_Type` 4)
#[derive(Debug, Default)]
pub struct WebAtm {
    fields: Fields,
}

impl PaymentMethod for WebAtm {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "4"
    }
}

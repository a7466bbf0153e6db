use super::{Fields, PaymentMethod};

/// Virtual account transfer (`Send_Type` 5). The gateway allocates a
/// one-off bank account number for the customer to wire against.
#[derive(Debug, Default)]
pub struct VirtualAccount {
    fields: Fields,
}

impl PaymentMethod for VirtualAccount {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "5"
    }
}

use super::{Fields, PaymentMethod};

/// Supermarket barcode payment (`Send_Type` 2). The gateway responds with
/// the barcode strips the customer prints and pays at the counter.
#[derive(Debug, Default)]
pub struct Barcode {
    fields: Fields,
}

impl PaymentMethod for Barcode {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "2"
    }
}

/// Supermarket code-based payment (`Send_Type` 3): the customer keys a
/// payment code into an in-store kiosk.
#[derive(Debug, Default)]
pub struct CvsCode {
    fields: Fields,
}

impl PaymentMethod for CvsCode {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "3"
    }
}

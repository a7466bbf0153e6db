use super::{Fields, PaymentMethod};

/// Recurring deduction (`Send_Type` 6).
///
/// Charges a stored card on a schedule; the caller supplies the period
/// fields (`TransMode`, `Installment`) along with the card data on the
/// first request.
#[derive(Debug, Default)]
pub struct RegularDeduction {
    fields: Fields,
}

impl PaymentMethod for RegularDeduction {
    fn configure(&mut self, fields: Fields) {
        self.fields.extend(fields);
    }

    fn payload(&self) -> &Fields {
        &self.fields
    }

    fn send_type(&self) -> &'static str {
        "6"
    }
}

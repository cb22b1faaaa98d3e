use crate::types::{Amount, Invoice, InvoiceStatus};
use std::collections::HashSet;

/// Summary tiles shown above the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub total_paid: Amount,
    pub total_pending: Amount,
    pub invoice_count: usize,
    pub customer_count: usize,
}

impl CardData {
    /// Aggregate invoice totals; customers are counted once per email
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        let total_for = |status: InvoiceStatus| -> Amount {
            invoices
                .iter()
                .filter(|invoice| invoice.status == status)
                .map(|invoice| invoice.amount)
                .sum()
        };

        let customer_count = invoices
            .iter()
            .map(|invoice| invoice.email.to_ascii_lowercase())
            .collect::<HashSet<_>>()
            .len();

        CardData {
            total_paid: total_for(InvoiceStatus::Paid),
            total_pending: total_for(InvoiceStatus::Pending),
            invoice_count: invoices.len(),
            customer_count,
        }
    }
}

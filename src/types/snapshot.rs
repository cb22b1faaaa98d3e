use super::amount::Amount;
use super::revenue::Revenue;
use serde::{Deserialize, Serialize};

/// Dashboard data handed to the renderer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub revenue: Vec<Revenue>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub amount: Amount,
    pub date: String,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_parsing() {
        let json_str = r#"{
            "locale": "en-GB",
            "currentPage": 2,
            "totalPages": 9,
            "revenue": [{ "month": "Jan", "revenue": 2000 }],
            "invoices": [{
                "id": "inv_1",
                "name": "Delba de Oliveira",
                "email": "delba@oliveira.com",
                "amount": 15795,
                "date": "2022-12-06",
                "status": "pending"
            }]
        }"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(json_str).unwrap();

        assert_eq!(snapshot.locale.as_deref(), Some("en-GB"));
        assert_eq!(snapshot.current_page, 2);
        assert_eq!(snapshot.total_pages, 9);
        assert_eq!(snapshot.revenue, vec![Revenue::new("Jan", 2000)]);

        let invoice = &snapshot.invoices[0];
        assert_eq!(invoice.id.as_deref(), Some("inv_1"));
        assert_eq!(invoice.amount, Amount::from_cents(15795));
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot: DashboardSnapshot = serde_json::from_str("{}").unwrap();

        assert!(snapshot.locale.is_none());
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(snapshot.total_pages, 1);
        assert!(snapshot.revenue.is_empty());
        assert!(snapshot.invoices.is_empty());
    }
}

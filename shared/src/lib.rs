use serde::{Deserialize, Serialize};

/// A customer record from the dashboard API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Display name shown in the table and matched by the filter
    pub name: String,
}

/// A single transaction belonging to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// ID of the customer this transaction belongs to
    pub customer_id: i64,
    /// Opaque date label, rendered verbatim on the chart axis (never parsed)
    pub date: String,
    /// Transaction amount
    pub amount: f64,
}

/// The full payload served by `GET /api/data`.
///
/// Replaced wholesale on every successful fetch; never partially merged.
/// A body that does not match this schema is rejected at the fetch
/// boundary instead of propagating missing values into the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let body = r#"{
            "customers": [
                {"id": 1, "name": "Alice"},
                {"id": 2, "name": "Bob"}
            ],
            "transactions": [
                {"id": 1, "customer_id": 1, "date": "2024-01-01", "amount": 50},
                {"id": 2, "customer_id": 1, "date": "2024-01-02", "amount": 30.5}
            ]
        }"#;

        let data: DashboardData = serde_json::from_str(body).unwrap();
        assert_eq!(data.customers.len(), 2);
        assert_eq!(data.customers[0].name, "Alice");
        assert_eq!(data.transactions.len(), 2);
        assert_eq!(data.transactions[0].amount, 50.0);
        assert_eq!(data.transactions[1].amount, 30.5);
        // Date labels are carried verbatim
        assert_eq!(data.transactions[0].date, "2024-01-01");
    }

    #[test]
    fn test_parse_empty_payload() {
        let data: DashboardData =
            serde_json::from_str(r#"{"customers": [], "transactions": []}"#).unwrap();
        assert!(data.customers.is_empty());
        assert!(data.transactions.is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // A transaction without an amount must not parse into a zero
        let body = r#"{
            "customers": [],
            "transactions": [{"id": 1, "customer_id": 1, "date": "2024-01-01"}]
        }"#;
        assert!(serde_json::from_str::<DashboardData>(body).is_err());
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        let body = r#"{
            "customers": [],
            "transactions": [{"id": 1, "customer_id": 1, "date": "2024-01-01", "amount": "fifty"}]
        }"#;
        assert!(serde_json::from_str::<DashboardData>(body).is_err());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<DashboardData>(r#"{"customers": "nope"}"#).is_err());
        assert!(serde_json::from_str::<DashboardData>("[]").is_err());
    }
}

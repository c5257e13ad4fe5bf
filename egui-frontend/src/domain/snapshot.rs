//! # Dataset Snapshot
//!
//! The in-memory dataset backing the view, with per-customer aggregation
//! built once per load.
//!
//! ## Key Types:
//! - `DatasetSnapshot` - fetched data plus totals and transaction index
//!
//! ## Purpose:
//! The dataset is replaced wholesale on a successful fetch and immutable
//! afterwards, so transactions are grouped by `customer_id` a single time
//! here instead of rescanning the full transaction list for every visible
//! row on every frame. Lookups are O(1) per row and observable values are
//! identical to the naive per-frame recomputation.

use std::collections::HashMap;

use log::info;
use shared::{Customer, DashboardData, Transaction};

/// The dataset currently held by the dashboard.
///
/// Orphaned transactions (a `customer_id` no customer carries) stay in the
/// index; they contribute to no displayed total and no chart because
/// nothing ever looks their key up.
#[derive(Debug, Default)]
pub struct DatasetSnapshot {
    data: DashboardData,
    totals: HashMap<i64, f64>,
    by_customer: HashMap<i64, Vec<usize>>,
}

impl DatasetSnapshot {
    /// Build a snapshot and its aggregation index from a fetched payload.
    pub fn new(data: DashboardData) -> Self {
        let mut totals: HashMap<i64, f64> = HashMap::new();
        let mut by_customer: HashMap<i64, Vec<usize>> = HashMap::new();

        for (index, transaction) in data.transactions.iter().enumerate() {
            *totals.entry(transaction.customer_id).or_insert(0.0) += transaction.amount;
            by_customer
                .entry(transaction.customer_id)
                .or_default()
                .push(index);
        }

        info!(
            "Indexed {} transactions across {} customers",
            data.transactions.len(),
            by_customer.len()
        );

        Self {
            data,
            totals,
            by_customer,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.data.customers
    }

    /// Sum of all transaction amounts for the given customer, 0.0 when the
    /// customer has none.
    pub fn customer_total(&self, customer_id: i64) -> f64 {
        self.totals.get(&customer_id).copied().unwrap_or(0.0)
    }

    /// The customer's transactions in source dataset order.
    pub fn transactions_for(&self, customer_id: i64) -> Vec<&Transaction> {
        self.by_customer
            .get(&customer_id)
            .map(|indices| indices.iter().map(|&i| &self.data.transactions[i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transaction(id: i64, customer_id: i64, date: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            customer_id,
            date: date.to_string(),
            amount,
        }
    }

    fn create_test_data() -> DashboardData {
        DashboardData {
            customers: vec![
                Customer { id: 1, name: "Alice".to_string() },
                Customer { id: 2, name: "Bob".to_string() },
                Customer { id: 3, name: "Carol".to_string() },
            ],
            transactions: vec![
                create_test_transaction(1, 1, "2024-01-01", 50.0),
                create_test_transaction(2, 2, "2024-01-01", 10.0),
                create_test_transaction(3, 1, "2024-01-02", 30.0),
                create_test_transaction(4, 1, "2024-01-03", -12.5),
            ],
        }
    }

    #[test]
    fn test_totals_match_naive_sum() {
        let data = create_test_data();
        let snapshot = DatasetSnapshot::new(data.clone());

        for customer in &data.customers {
            let naive: f64 = data
                .transactions
                .iter()
                .filter(|t| t.customer_id == customer.id)
                .map(|t| t.amount)
                .sum();
            assert_eq!(snapshot.customer_total(customer.id), naive);
        }
        assert_eq!(snapshot.customer_total(1), 67.5);
        assert_eq!(snapshot.customer_total(2), 10.0);
    }

    #[test]
    fn test_customer_without_transactions_totals_zero() {
        let snapshot = DatasetSnapshot::new(create_test_data());
        assert_eq!(snapshot.customer_total(3), 0.0);
        assert!(snapshot.transactions_for(3).is_empty());
    }

    #[test]
    fn test_transactions_for_preserves_source_order() {
        let snapshot = DatasetSnapshot::new(create_test_data());
        let ids: Vec<i64> = snapshot.transactions_for(1).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_orphaned_transactions_reach_no_customer() {
        let mut data = create_test_data();
        // customer_id 99 exists in no customer record
        data.transactions.push(create_test_transaction(5, 99, "2024-02-01", 1000.0));
        let snapshot = DatasetSnapshot::new(data);

        assert_eq!(snapshot.customer_total(1), 67.5);
        assert_eq!(snapshot.customer_total(2), 10.0);
        assert_eq!(snapshot.customer_total(3), 0.0);
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = DatasetSnapshot::default();
        assert!(snapshot.customers().is_empty());
        assert_eq!(snapshot.customer_total(1), 0.0);
    }
}

//! # Chart State Module
//!
//! Selection state and the chart series derived from it.
//!
//! ## Purpose:
//! Holds which customer row is focused and the projected (labels, values)
//! series the bar chart renders. Selection starts empty and is only ever
//! replaced by another selection; there is no deselect transition.

use log::info;
use shared::Customer;

use crate::domain::{ChartSeries, DatasetSnapshot};

/// Selection plus the chart projection derived from it.
#[derive(Debug, Default)]
pub struct ChartState {
    selected: Option<Customer>,
    series: ChartSeries,
}

impl ChartState {
    /// Create new chart state with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection and re-project that customer's transactions.
    ///
    /// A full replace, not a toggle: re-selecting the current customer
    /// re-sets the same value and the displayed series is unchanged.
    pub fn select(&mut self, customer: Customer, snapshot: &DatasetSnapshot) {
        info!("Selected customer {} ({})", customer.name, customer.id);
        self.series = ChartSeries::from_transactions(&snapshot.transactions_for(customer.id));
        self.selected = Some(customer);
    }

    /// The currently focused customer, if any
    pub fn selected(&self) -> Option<&Customer> {
        self.selected.as_ref()
    }

    /// The series backing the bar chart
    pub fn series(&self) -> &ChartSeries {
        &self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DashboardData, Transaction};

    fn create_test_snapshot() -> DatasetSnapshot {
        DatasetSnapshot::new(DashboardData {
            customers: vec![
                Customer { id: 1, name: "Alice".to_string() },
                Customer { id: 2, name: "Bob".to_string() },
            ],
            transactions: vec![
                Transaction { id: 1, customer_id: 1, date: "2024-01-01".to_string(), amount: 50.0 },
                Transaction { id: 2, customer_id: 1, date: "2024-01-02".to_string(), amount: 30.0 },
                Transaction { id: 3, customer_id: 2, date: "2024-01-01".to_string(), amount: 10.0 },
            ],
        })
    }

    #[test]
    fn test_initial_state_has_no_selection() {
        let chart = ChartState::new();
        assert!(chart.selected().is_none());
        assert!(chart.series().is_empty());
    }

    #[test]
    fn test_switching_selection_replaces_series() {
        let snapshot = create_test_snapshot();
        let mut chart = ChartState::new();

        chart.select(snapshot.customers()[0].clone(), &snapshot);
        assert_eq!(chart.series().values, vec![50.0, 30.0]);

        // Selecting Bob must reflect only Bob's transactions, never a union
        chart.select(snapshot.customers()[1].clone(), &snapshot);
        assert_eq!(chart.selected().unwrap().name, "Bob");
        assert_eq!(chart.series().labels, vec!["2024-01-01"]);
        assert_eq!(chart.series().values, vec![10.0]);
    }

    #[test]
    fn test_reselecting_same_customer_is_idempotent() {
        let snapshot = create_test_snapshot();
        let mut chart = ChartState::new();

        chart.select(snapshot.customers()[0].clone(), &snapshot);
        let before = chart.series().clone();

        chart.select(snapshot.customers()[0].clone(), &snapshot);
        assert_eq!(chart.series(), &before);
        assert_eq!(chart.selected().unwrap().id, 1);
    }

    #[test]
    fn test_selecting_customer_without_transactions_shows_empty_series() {
        let snapshot = DatasetSnapshot::new(DashboardData {
            customers: vec![Customer { id: 7, name: "Dora".to_string() }],
            transactions: vec![],
        });
        let mut chart = ChartState::new();

        chart.select(snapshot.customers()[0].clone(), &snapshot);
        assert!(chart.selected().is_some());
        assert!(chart.series().is_empty());
    }
}

use shared::Transaction;

/// Legend label of the single chart data series.
pub const SERIES_LABEL: &str = "Transaction Amount";

/// The (labels, values) pair fed to the bar-chart renderer.
///
/// Labels are the transaction date strings verbatim, in source dataset
/// order; no chronological sort is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Project transactions into the chart series.
    pub fn from_transactions(transactions: &[&Transaction]) -> Self {
        Self {
            labels: transactions.iter().map(|t| t.date.clone()).collect(),
            values: transactions.iter().map(|t| t.amount).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

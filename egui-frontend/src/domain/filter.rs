use shared::Customer;

/// Customers whose name contains `filter` as a case-insensitive substring.
///
/// An empty filter matches every customer. Source order is preserved;
/// filtering never reorders.
pub fn filter_customers<'a>(customers: &'a [Customer], filter: &str) -> Vec<&'a Customer> {
    let needle = filter.to_lowercase();
    customers
        .iter()
        .filter(|customer| customer.name.to_lowercase().contains(&needle))
        .collect()
}

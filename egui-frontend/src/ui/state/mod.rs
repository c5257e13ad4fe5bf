pub mod chart_state;
pub mod table_state;

pub use chart_state::ChartState;
pub use table_state::TableState;

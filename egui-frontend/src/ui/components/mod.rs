//! # UI Components Module
//!
//! This module organizes the UI components of the customer dashboard.
//!
//! ## Module Organization:
//! - `data_loading` - applying the startup fetch result to app state
//! - `customer_table` - filter input and clickable customer table
//! - `chart_renderer` - bar chart of the selected customer's transactions
//! - `styling` - global visual styling and card containers
//! - `theme` - color constants

pub mod chart_renderer;
pub mod customer_table;
pub mod data_loading;
pub mod styling;
pub mod theme;

pub use styling::{card_frame, setup_dashboard_style};
pub use theme::*;

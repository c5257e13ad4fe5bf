//! # Chart Renderer Module
//!
//! Bar chart of the selected customer's transactions.
//!
//! ## Key Functions:
//! - `render_chart_card()` - the "Transactions for {name}" card
//! - `render_transaction_chart()` - the actual plot
//!
//! ## Purpose:
//! While a customer is selected, their transactions are shown as one bar
//! per transaction: x-axis labels are the date strings verbatim in dataset
//! order, bar heights are the amounts. The card only exists while a
//! selection exists; nothing is rendered in its place otherwise.

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::domain::series::SERIES_LABEL;
use crate::ui::app_state::CustomerDashboardApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::colors;

impl CustomerDashboardApp {
    /// Render the chart card for the currently selected customer.
    pub fn render_chart_card(&self, ui: &mut egui::Ui) {
        let Some(customer) = self.chart.selected() else {
            return;
        };
        let title = format!("Transactions for {}", customer.name);

        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    colors::CHART_TEXT,
                    egui::RichText::new("Daily Transaction Amounts").strong(),
                );
            });
            ui.add_space(8.0);

            self.render_transaction_chart(ui);
        });
    }

    /// Render the bar chart for the current series.
    fn render_transaction_chart(&self, ui: &mut egui::Ui) {
        let series = self.chart.series();

        let bars: Vec<Bar> = series
            .values
            .iter()
            .enumerate()
            .map(|(index, &amount)| {
                Bar::new(index as f64, amount)
                    .width(0.6)
                    .fill(colors::CHART_FILL)
                    .stroke(egui::Stroke::new(1.0, colors::CHART_BORDER))
            })
            .collect();

        let chart = BarChart::new(bars).name(SERIES_LABEL);

        // Labels are positional: bar i carries the i-th date string
        let labels = series.labels.clone();

        Plot::new("transaction_chart")
            .height(320.0)
            .legend(Legend::default())
            .include_y(0.0)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                // Only integral marks correspond to bars
                let rounded = mark.value.round();
                if (mark.value - rounded).abs() > 0.001 || rounded < 0.0 {
                    return String::new();
                }
                labels.get(rounded as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}

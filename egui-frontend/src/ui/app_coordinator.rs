//! # App Coordinator Module
//!
//! The main update loop, implementing the `eframe::App` trait.
//!
//! ## Application Flow:
//! 1. Poll the startup fetch and apply its result once it lands
//! 2. Render the customer card (filter box + table)
//! 3. Render the chart card, but only while a customer is selected
//!
//! There is no loading screen and no error banner: until data arrives (or
//! if the fetch failed) the table simply renders empty, and the only
//! failure signal is the log line from the data-loading seam.

use eframe::egui;

use crate::ui::app_state::CustomerDashboardApp;

impl eframe::App for CustomerDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending_fetch();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_customer_card(ui);

                // Conditionally rendered: nothing stands in for the chart
                // while no customer is selected
                if self.chart.selected().is_some() {
                    ui.add_space(16.0);
                    self.render_chart_card(ui);
                }
            });
        });
    }
}

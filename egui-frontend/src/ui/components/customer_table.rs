use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::Customer;

use crate::domain::filter_customers;
use crate::ui::app_state::CustomerDashboardApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::colors;

impl CustomerDashboardApp {
    /// Render the "Customer Transactions" card: filter box plus table.
    pub fn render_customer_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("Customer Transactions")
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.add_space(8.0);

            ui.add(
                egui::TextEdit::singleline(&mut self.table.filter)
                    .hint_text("Filter by customer name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            self.render_customer_table(ui);
        });
    }

    /// Render the two-column customer table with per-customer totals.
    ///
    /// Rows are clickable; a click replaces the chart selection. Rows that
    /// match nothing render an empty body, never a placeholder.
    fn render_customer_table(&mut self, ui: &mut egui::Ui) {
        let visible: Vec<Customer> = filter_customers(self.snapshot.customers(), &self.table.filter)
            .into_iter()
            .cloned()
            .collect();
        let selected_id = self.chart.selected().map(|c| c.id);
        let mut clicked: Option<Customer> = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder())
            .column(Column::exact(160.0))
            .header(28.0, |mut header| {
                header.col(|ui| {
                    ui.colored_label(
                        colors::TABLE_HEADER_TEXT,
                        egui::RichText::new("Customer Name").strong(),
                    );
                });
                header.col(|ui| {
                    ui.colored_label(
                        colors::TABLE_HEADER_TEXT,
                        egui::RichText::new("Total Transactions").strong(),
                    );
                });
            })
            .body(|mut body| {
                for customer in &visible {
                    body.row(28.0, |mut row| {
                        row.set_selected(selected_id == Some(customer.id));

                        row.col(|ui| {
                            ui.label(&customer.name);
                        });
                        row.col(|ui| {
                            // Plain additive sum, displayed as-is
                            ui.label(format!("{}", self.snapshot.customer_total(customer.id)));
                        });

                        let response = row.response();
                        if response.clicked() {
                            clicked = Some(customer.clone());
                        }
                        response.on_hover_cursor(egui::CursorIcon::PointingHand);
                    });
                }
            });

        if let Some(customer) = clicked {
            self.chart.select(customer, &self.snapshot);
        }
    }
}

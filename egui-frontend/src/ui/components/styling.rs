//! # Styling Module
//!
//! Global visual styling for the dashboard.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - configure the dark egui style once
//! - `card_frame()` - card-style container for the table and chart panels
//!
//! The dashboard renders as light text on dark cards, so the chart's axis
//! labels and legend come out white without per-widget overrides.

use eframe::egui;

use super::theme::colors;

/// Configure the global dark dashboard styling
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::PANEL_BACKGROUND;
        style.visuals.extreme_bg_color = egui::Color32::from_rgb(17, 19, 23); // Text edit background

        // Rounded corners and a little breathing room
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Card-style container used for the table and chart sections
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_STROKE))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
}

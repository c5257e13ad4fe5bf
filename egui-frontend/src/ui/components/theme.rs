//! # Theme Configuration
//!
//! Centralized color constants for the dashboard. All visual styling uses
//! these to keep the dark look consistent across table and chart.

/// Color constants for the dark dashboard theme
pub mod colors {
    use eframe::egui::Color32;

    // Card and panel surfaces
    pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(24, 26, 30);
    pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(33, 37, 43);
    pub const CARD_STROKE: Color32 = Color32::from_rgb(55, 59, 66);

    // Table header
    pub const TABLE_HEADER_TEXT: Color32 = Color32::WHITE;

    // Chart series (teal at 60% alpha, matching the fixed dashboard palette)
    pub const CHART_FILL: Color32 = Color32::from_rgba_premultiplied(45, 115, 115, 153);
    pub const CHART_BORDER: Color32 = Color32::from_rgb(75, 192, 192);

    // Axis and legend text on the dark chart background
    pub const CHART_TEXT: Color32 = Color32::WHITE;
}

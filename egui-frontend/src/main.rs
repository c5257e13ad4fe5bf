use eframe::egui;
use log::info;

mod domain;
mod services;
mod ui;

use ui::app_state::CustomerDashboardApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting customer dashboard application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])   // Table plus chart without scrolling
            .with_min_inner_size([640.0, 480.0]) // Minimum usable size
            .with_title("Customer Transactions")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Customer Transactions",
        options,
        Box::new(|cc| Ok(Box::new(CustomerDashboardApp::new(cc)))),
    )
}

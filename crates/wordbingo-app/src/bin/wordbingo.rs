//! Wordbingo desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Wordbingo application.

use wordbingo_app::WordbingoApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.wordbingo.wordbingo";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((480.0, 720.0))
            .with_min_inner_size((320.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Wordbingo",
        options,
        Box::new(|cc| Ok(Box::new(WordbingoApp::new(cc)))),
    )
}

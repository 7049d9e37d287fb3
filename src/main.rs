use study_centre::StudyApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([980.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Study Centre",
        options,
        Box::new(|cc| {
            let mut app: StudyApp = cc
                .storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
                .unwrap_or_default();
            app.after_restore();
            Ok(Box::new(app))
        }),
    )
}

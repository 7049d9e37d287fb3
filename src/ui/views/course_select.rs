use crate::StudyApp;
use egui::{Align, Button, CentralPanel, Context, RichText, Vec2};

pub fn ui_course_select(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 560.0;
        let content_width = ui.available_width().min(max_width);

        let course_count = app.curriculum.courses.len() as f32;
        let estimated_h = 120.0 + course_count * 86.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("📚 Study Centre");
                        ui.label("Choose a course to begin");
                        ui.add_space(18.0);

                        let choices: Vec<(String, String, String)> = app
                            .curriculum
                            .courses
                            .iter()
                            .map(|c| (c.slug.clone(), c.title.clone(), c.summary.clone()))
                            .collect();

                        for (slug, title, summary) in choices {
                            let clicked = ui
                                .add(
                                    Button::new(RichText::new(&title).heading())
                                        .min_size(Vec2::new(content_width, 44.0)),
                                )
                                .clicked();
                            ui.label(RichText::new(summary).weak());
                            ui.add_space(12.0);
                            if clicked {
                                app.select_course(&slug);
                            }
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}

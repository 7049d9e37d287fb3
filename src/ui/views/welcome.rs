use crate::StudyApp;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_welcome(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        let estimated_h = 250.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        let course_title = app
                            .course()
                            .map(|c| c.title.clone())
                            .unwrap_or_else(|| "Study Centre".to_owned());
                        ui.heading(course_title);
                        ui.add_space(18.0);

                        let has_saved = app.has_saved_progress;
                        let has_pending = !app.is_course_completed();

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        let btn_continue = if has_saved && has_pending {
                            Some(ui.add_sized([btn_w, btn_h], Button::new("▶ Continue where I left off")))
                        } else {
                            None
                        };
                        ui.add_space(5.0);
                        let btn_start = ui.add_sized([btn_w, btn_h], Button::new("🔄 Start from the beginning"));
                        ui.add_space(5.0);
                        let btn_menu = ui.add_sized([btn_w, btn_h], Button::new("📅 Choose a module"));
                        ui.add_space(5.0);
                        let btn_summary = ui.add_sized([btn_w, btn_h], Button::new("📊 Course summary"));
                        ui.add_space(5.0);
                        let btn_exit = ui.add_sized([btn_w, btn_h], Button::new("🔙 Back to courses"));

                        if let Some(b) = btn_continue {
                            if b.clicked() {
                                app.continue_course();
                            }
                        }
                        if btn_start.clicked() {
                            if has_saved {
                                app.confirm_reset = true;
                            } else {
                                app.start_over();
                            }
                        }
                        if btn_menu.clicked() {
                            app.open_module_menu();
                        }
                        if btn_summary.clicked() {
                            app.view_progress();
                        }
                        if btn_exit.clicked() {
                            app.change_course();
                        }

                        if app.is_course_completed() {
                            ui.add_space(10.0);
                            ui.label(
                                RichText::new("🏆 Course complete. Well done!")
                                    .color(egui::Color32::YELLOW)
                                    .heading()
                                    .strong(),
                            );
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}

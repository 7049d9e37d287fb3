use crate::StudyApp;
use crate::ui::helpers::split_button_with_restart;
use egui::{Align, Button, CentralPanel, Context};

pub fn ui_section_menu(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 500.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 40.0;

        let infos = match app.section_infos_in_current_module() {
            Some(infos) => infos,
            None => {
                ui.label("No module selected.");
                return;
            }
        };
        let mi = app.progress().current_module.unwrap_or(0);
        let module_title = app
            .module(mi)
            .map(|m| format!("Module {} — {}", m.number, m.title))
            .unwrap_or_default();

        let estimated_h = 80.0 + (button_h + 8.0) * (infos.len() as f32 + 1.0);
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading(module_title);
                        ui.add_space(20.0);

                        for info in &infos {
                            if info.unlocked {
                                let (open, restart) = split_button_with_restart(
                                    ui,
                                    &info.label(),
                                    content_width,
                                    button_h,
                                    info.completed,
                                );
                                if open {
                                    app.select_section(mi, info.idx);
                                }
                                if restart {
                                    app.restart_section(mi, info.idx);
                                }
                            } else {
                                ui.add_enabled(
                                    false,
                                    Button::new(info.label())
                                        .min_size(egui::Vec2::new(content_width, button_h)),
                                );
                            }
                            ui.add_space(8.0);
                        }

                        ui.add_space(16.0);
                        if ui
                            .add_sized([content_width, button_h], Button::new("Back to modules"))
                            .clicked()
                        {
                            app.open_module_menu();
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}

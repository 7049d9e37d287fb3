use crate::StudyApp;
use crate::ui::helpers::big_list_button;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_module_menu(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 460.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 40.0;

        let module_count = app.course().map(|c| c.modules.len()).unwrap_or(0) as f32;
        let estimated_h = 80.0 + (button_h + 8.0) * (module_count + 1.0);
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        // Precompute per-module data so the borrow is not held while drawing
        let module_infos = app.module_infos();

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("Choose a module");
                        ui.add_space(20.0);

                        if !app.message.is_empty() {
                            ui.add_space(8.0);
                            ui.label(
                                RichText::new(&app.message)
                                    .color(egui::Color32::YELLOW)
                                    .strong(),
                            );
                            ui.add_space(8.0);
                        }

                        for info in &module_infos {
                            if big_list_button(ui, info.label(), content_width, button_h, info.unlocked)
                            {
                                {
                                    let prog = app.progress_mut();
                                    prog.current_module = Some(info.idx);
                                }
                                app.open_section_menu();
                            }
                            ui.add_space(8.0);
                        }

                        ui.add_space(16.0);
                        if ui
                            .add_sized([content_width, button_h], Button::new("Back to main menu"))
                            .clicked()
                        {
                            app.back_to_welcome();
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}

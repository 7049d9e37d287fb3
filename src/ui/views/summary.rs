use crate::StudyApp;
use crate::view_models::ScoreRow;
use egui::{Button, CentralPanel, Context, Grid, ScrollArea};

pub fn ui_course_summary(app: &mut StudyApp, ctx: &Context) {
    // Without a course we cannot build rows; send the user back.
    if app.selected_course.is_none() {
        app.change_course();
        return;
    }

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 620.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;
        let total_height = 640.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        ui.add_space(extra_space);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 40))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    let course_title = app.course().map(|c| c.title.clone()).unwrap_or_default();
                    ui.heading(format!("Course summary — {course_title}"));
                    ui.add_space(10.0);

                    let rows: Vec<ScoreRow> = app.score_rows_for_course();

                    ScrollArea::vertical()
                        .max_height(440.0)
                        .max_width(panel_width)
                        .show(ui, |ui| {
                            if rows.is_empty() {
                                ui.label("No progress data for this course.");
                                return;
                            }

                            Grid::new("course_results_grid")
                                .striped(true)
                                .spacing([12.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label("Module");
                                    ui.label("Section");
                                    ui.label("Last score");
                                    ui.label("Status");
                                    ui.end_row();

                                    for r in &rows {
                                        ui.label(r.module_number.to_string());
                                        ui.label(format!("{}. {}", r.section_number, r.title));
                                        ui.label(r.score_label());
                                        ui.label(if r.completed {
                                            "✅ Done"
                                        } else {
                                            "⏳ Pending"
                                        });
                                        ui.end_row();
                                    }
                                });
                        });

                    ui.add_space(10.0);

                    ui.vertical_centered(|ui| {
                        if !app.is_course_completed() {
                            if ui
                                .add_sized([button_width, button_height], Button::new("Continue ▶"))
                                .clicked()
                            {
                                app.continue_course();
                            }
                            ui.add_space(6.0);
                        }
                        if ui
                            .add_sized([button_width, button_height], Button::new("Main menu"))
                            .clicked()
                        {
                            app.back_to_welcome();
                        }
                    });
                });
        });
    });
}

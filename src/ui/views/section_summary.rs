use crate::StudyApp;
use egui::{Button, CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_section_summary(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;
        let total_height = 560.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        ui.add_space(extra_space);

        let section_title = app
            .current_section()
            .map(|s| s.title.clone())
            .unwrap_or_default();

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 40))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("Section summary");
                    ui.label(RichText::new(section_title).weak());
                    ui.add_space(10.0);

                    match app.session.as_ref() {
                        Some(session) if session.total() > 0 => {
                            let score = session.score();
                            let total = session.total();
                            let pct = session
                                .percent()
                                .map(|p| format!("{p:.1}%"))
                                .unwrap_or_else(|| "N/A".to_owned());
                            ui.label(
                                RichText::new(format!("Result: {score}/{total} ({pct})"))
                                    .heading()
                                    .strong(),
                            );
                            ui.add_space(10.0);

                            ScrollArea::vertical()
                                .max_height(320.0)
                                .max_width(panel_width)
                                .show(ui, |ui| {
                                    Grid::new("quiz_results_grid")
                                        .striped(true)
                                        .spacing([12.0, 4.0])
                                        .show(ui, |ui| {
                                            ui.label("Question");
                                            ui.label("Your answer");
                                            ui.label("Result");
                                            ui.end_row();

                                            for (qi, q) in session.questions().iter().enumerate() {
                                                let picked = session.selection_for(qi);
                                                let answer = picked
                                                    .and_then(|p| q.options.get(p))
                                                    .cloned()
                                                    .unwrap_or_else(|| "—".to_owned());
                                                let result = match picked {
                                                    Some(p) if p == q.correct_index => "✅",
                                                    Some(_) => "❌",
                                                    None => "–",
                                                };
                                                ui.label(format!("{}", qi + 1));
                                                ui.label(answer);
                                                ui.label(result);
                                                ui.end_row();
                                            }
                                        });
                                });
                        }
                        Some(_) => {
                            // Reading-only section: nothing to score.
                            ui.label("Section marked as read. (No quiz questions.)");
                        }
                        None => {
                            ui.label("No quiz data for this section.");
                        }
                    }

                    ui.add_space(14.0);

                    ui.vertical_centered(|ui| {
                        let course_done = app.is_course_completed();
                        if course_done {
                            ui.label("🏆 That was the last section. Course complete!");
                            ui.add_space(8.0);
                            if ui
                                .add_sized(
                                    [button_width, button_height],
                                    Button::new("Course summary"),
                                )
                                .clicked()
                            {
                                app.view_progress();
                            }
                        } else if ui
                            .add_sized([button_width, button_height], Button::new("Continue ▶"))
                            .clicked()
                        {
                            app.advance_to_next_section();
                        }
                        ui.add_space(6.0);
                        if ui
                            .add_sized(
                                [button_width, button_height],
                                Button::new("Back to sections"),
                            )
                            .clicked()
                        {
                            app.back_to_sections();
                        }
                    });
                });
        });
    });
}

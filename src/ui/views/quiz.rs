use crate::StudyApp;
use crate::model::AppState;
use crate::session::QuizPhase;
use crate::ui::helpers::{option_button, option_state};
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 680.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        // Snapshot what the frame needs; the session is mutated only
        // through the click handlers below.
        let view = match app.session.as_ref() {
            Some(session) if session.phase() != QuizPhase::Finished => {
                let q = session
                    .current_question()
                    .expect("unfinished session has a current question")
                    .clone();
                (
                    q,
                    session.current_index(),
                    session.total(),
                    session.score(),
                    session.selected(),
                    session.was_correct(),
                )
            }
            _ => {
                // No running quiz; fall back to the article page.
                app.state = AppState::Section;
                return;
            }
        };
        let (question, index, total, score, selected, was_correct) = view;
        let revealed = selected.is_some();

        let total_height = 520.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(80, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);
                    ui.heading(format!("Question {} of {}", index + 1, total));
                    ui.label(RichText::new(format!("Score so far: {score}")).weak());
                    ui.add_space(10.0);

                    ScrollArea::vertical()
                        .max_height(total_height - 120.0)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.label(RichText::new(&question.prompt).strong().size(17.0));
                            ui.add_space(10.0);

                            let mut clicked: Option<usize> = None;
                            for (oi, option) in question.options.iter().enumerate() {
                                let state = option_state(oi, selected, question.correct_index);
                                if option_button(ui, option, panel_width - 24.0, state) {
                                    clicked = Some(oi);
                                }
                                ui.add_space(4.0);
                            }
                            if let Some(oi) = clicked {
                                app.answer_current(oi);
                            }

                            if revealed {
                                ui.add_space(8.0);
                                match was_correct {
                                    Some(true) => {
                                        ui.label(
                                            RichText::new("✅ Correct!")
                                                .color(egui::Color32::LIGHT_GREEN)
                                                .strong(),
                                        );
                                    }
                                    _ => {
                                        ui.label(
                                            RichText::new("❌ Incorrect.")
                                                .color(egui::Color32::LIGHT_RED)
                                                .strong(),
                                        );
                                    }
                                }
                                ui.add_space(4.0);
                                ui.label(RichText::new(&question.explanation).italics());
                            }
                        });

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(8.0);

                    if revealed {
                        let label = if index + 1 < total {
                            "Next question ▶"
                        } else {
                            "Finish quiz 🏁"
                        };
                        if ui
                            .add_sized([panel_width / 2.0, 36.0], egui::Button::new(label))
                            .clicked()
                        {
                            app.advance_question();
                        }
                    } else if ui
                        .add_sized(
                            [panel_width / 2.0, 36.0],
                            egui::Button::new("⬅ Back to the article"),
                        )
                        .clicked()
                    {
                        // Abandons the run; a new attempt starts fresh.
                        app.session = None;
                        app.state = AppState::Section;
                    }

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}

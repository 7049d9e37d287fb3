use crate::StudyApp;
use crate::ui::helpers::{option_button, option_state};
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, RichText, ScrollArea};
use egui_commonmark::CommonMarkViewer;

pub fn ui_section(app: &mut StudyApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 700.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        let section = match app.current_section() {
            Some(s) => s.clone(),
            None => {
                ui.label("No section selected.");
                return;
            }
        };
        let quiz_len = section.quiz.len();
        let heading = format!("{}.  {}", section.number, section.title);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(60, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);
                    ui.heading(heading);
                    ui.add_space(10.0);

                    let footer_h = 60.0;
                    let text_h = (ui.available_height() - footer_h).max(120.0);

                    ScrollArea::vertical()
                        .max_height(text_h)
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            CommonMarkViewer::new().show(ui, &mut app.cm_cache, &section.body);

                            // Inline knowledge checks
                            if !app.checks.is_empty() {
                                ui.add_space(12.0);
                                ui.separator();
                                ui.heading("🔎 Quick checks");
                                ui.add_space(6.0);
                            }
                            let mut clicks: Vec<(usize, usize)> = Vec::new();
                            for (ci, check) in app.checks.iter().enumerate() {
                                let q = check.question();
                                ui.label(RichText::new(&q.prompt).strong());
                                ui.add_space(4.0);
                                for (oi, option) in q.options.iter().enumerate() {
                                    let state =
                                        option_state(oi, check.selected(), q.correct_index);
                                    if option_button(ui, option, panel_width - 24.0, state) {
                                        clicks.push((ci, oi));
                                    }
                                    ui.add_space(2.0);
                                }
                                if let Some(correct) = check.was_correct() {
                                    ui.add_space(4.0);
                                    ui.label(if correct {
                                        RichText::new("✅ Correct!")
                                            .color(egui::Color32::LIGHT_GREEN)
                                    } else {
                                        RichText::new("❌ Not quite.")
                                            .color(egui::Color32::LIGHT_RED)
                                    });
                                    ui.label(RichText::new(&q.explanation).italics());
                                }
                                ui.add_space(12.0);
                            }
                            for (ci, oi) in clicks {
                                app.answer_check(ci, oi);
                            }

                            // FAQs
                            if !section.faqs.is_empty() {
                                ui.add_space(8.0);
                                ui.separator();
                                ui.heading("❓ FAQs");
                                ui.add_space(6.0);
                                for faq in &section.faqs {
                                    egui::CollapsingHeader::new(&faq.question)
                                        .default_open(false)
                                        .show(ui, |ui| {
                                            ui.label(&faq.answer);
                                        });
                                }
                            }
                        });

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    let quiz_label = if quiz_len > 0 {
                        format!("Start section quiz ({quiz_len} questions) ▶")
                    } else {
                        "Mark section as read ✔".to_owned()
                    };
                    let (back, start) =
                        two_button_row(ui, panel_width, "⬅ Back to sections", &quiz_label);
                    if back {
                        app.back_to_sections();
                    }
                    if start {
                        app.start_quiz();
                    }
                });
            });
    });
}

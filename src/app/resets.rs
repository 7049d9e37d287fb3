use super::*;

impl StudyApp {
    /// Wipes the progress of the selected course and starts it from the top.
    pub fn reset_progress(&mut self) {
        let slug = match self.selected_course.clone() {
            Some(s) => s,
            None => return,
        };
        log::info!("resetting progress for course {slug}");
        self.progresses.insert(slug, CourseProgress::default());
        self.session = None;
        self.checks.clear();
        self.confirm_reset = false;
        self.has_saved_progress = false;
        self.message.clear();
        self.select_section(0, 0);
    }

    pub fn start_over(&mut self) {
        self.reset_progress();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Delete all progress for this course? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, delete").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }

    /// Forgets one section's completion and score and reopens its article,
    /// so the quiz can be retaken with a fresh session.
    pub fn restart_section(&mut self, module_idx: usize, section_idx: usize) {
        let slug = match self.section(module_idx, section_idx) {
            Some(s) => s.slug.clone(),
            None => return,
        };
        {
            let prog = self.progress_mut();
            prog.completed_sections.remove(&slug);
            prog.scores.remove(&slug);
        }
        self.select_section(module_idx, section_idx);
    }

    pub fn view_progress(&mut self) {
        self.state = AppState::CourseSummary;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::StudyApp;

    #[test]
    fn restart_section_clears_completion_and_score() {
        let mut app = StudyApp::new();
        app.select_course("first-aid");
        app.select_section(0, 0);
        app.start_quiz();
        let answers: Vec<usize> = app
            .session
            .as_ref()
            .unwrap()
            .questions()
            .iter()
            .map(|q| q.correct_index)
            .collect();
        for a in answers {
            app.answer_current(a);
            app.advance_question();
        }
        assert!(app.is_section_completed(0, 0));

        app.restart_section(0, 0);
        assert!(!app.is_section_completed(0, 0));
        let slug = app.section(0, 0).unwrap().slug.clone();
        assert!(app.progress().scores.get(&slug).is_none());
        // A fresh session starts from scratch.
        app.start_quiz();
        assert_eq!(app.session.as_ref().unwrap().score(), 0);
        assert_eq!(app.session.as_ref().unwrap().current_index(), 0);
    }
}

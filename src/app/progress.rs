use super::*;

impl StudyApp {
    // Accesores seguros
    pub fn progress(&self) -> &CourseProgress {
        let slug = self.selected_course.as_ref().expect("No course selected");
        self.progresses
            .get(slug)
            .expect("No progress for selected course")
    }
    pub fn progress_mut(&mut self) -> &mut CourseProgress {
        let slug = self.selected_course.clone().expect("No course selected");
        self.progresses
            .get_mut(&slug)
            .expect("No progress for selected course")
    }
    // Optional variants, useful as guards in the UI
    pub fn progress_opt(&self) -> Option<&CourseProgress> {
        self.selected_course
            .as_ref()
            .and_then(|s| self.progresses.get(s))
    }

    /// Drops progress entries that no longer match the embedded curriculum
    /// (slugs can disappear between content versions).
    pub fn sync_completed(&mut self) {
        if self.selected_course.is_none() {
            return;
        }
        let valid: HashSet<String> = self.all_section_slugs();
        let prog = self.progress_mut();
        prog.completed_sections.retain(|slug| valid.contains(slug));
        prog.scores.retain(|slug, _| valid.contains(slug));
    }

    /// Records the outcome of a finished quiz session against the current
    /// section and unlocks whatever follows it.
    pub fn record_quiz_result(&mut self, score: usize, total: usize) {
        let (mi, si) = match self.current_position() {
            Some(pos) => pos,
            None => return,
        };
        let slug = match self.section(mi, si) {
            Some(s) => s.slug.clone(),
            None => return,
        };

        log::info!("section {slug} finished: {score}/{total}");
        {
            let prog = self.progress_mut();
            prog.completed_sections.insert(slug.clone());
            prog.scores.insert(slug, (score, total));
        }
        self.complete_section(mi, si);
        self.has_saved_progress = true;
    }
}

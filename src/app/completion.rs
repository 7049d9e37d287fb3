use super::*;

impl StudyApp {
    pub fn is_section_completed(&self, module_idx: usize, section_idx: usize) -> bool {
        self.section(module_idx, section_idx)
            .map(|s| self.progress().completed_sections.contains(&s.slug))
            .unwrap_or(false)
    }

    /// A module is complete once every one of its sections is.
    pub fn is_module_completed(&self, module_idx: usize) -> bool {
        match self.module(module_idx) {
            Some(module) => {
                !module.sections.is_empty()
                    && module
                        .sections
                        .iter()
                        .all(|s| self.progress().completed_sections.contains(&s.slug))
            }
            None => false,
        }
    }

    pub fn is_course_completed(&self) -> bool {
        match self.course() {
            Some(course) => (0..course.modules.len()).all(|mi| self.is_module_completed(mi)),
            None => false,
        }
    }

    pub fn is_module_unlocked(&self, module_idx: usize) -> bool {
        self.progress().unlocked_modules.contains(&module_idx)
    }

    pub fn is_section_unlocked(&self, module_idx: usize, section_idx: usize) -> bool {
        self.progress()
            .unlocked_sections
            .get(&module_idx)
            .map(|secs| secs.contains(&section_idx))
            .unwrap_or(false)
    }

    /// On section completion, unlocks the next section in the module; when
    /// the module is exhausted, falls through to module completion.
    pub fn complete_section(&mut self, module_idx: usize, section_idx: usize) {
        if !self.is_section_completed(module_idx, section_idx) {
            return;
        }
        let next_section = section_idx + 1;
        let has_next = self
            .module(module_idx)
            .map(|m| next_section < m.sections.len())
            .unwrap_or(false);

        if has_next {
            let progress = self.progress_mut();
            let sections = progress
                .unlocked_sections
                .entry(module_idx)
                .or_insert_with(|| vec![0]);
            if !sections.contains(&next_section) {
                sections.push(next_section);
                sections.sort_unstable();
            }
            let max_section = progress.max_unlocked_section.entry(module_idx).or_insert(0);
            if next_section > *max_section {
                *max_section = next_section;
            }
        } else {
            self.complete_module(module_idx);
        }
    }

    pub fn complete_module(&mut self, module_idx: usize) {
        if self.is_module_completed(module_idx) {
            let next_module = module_idx + 1;
            let exists = self.module(next_module).is_some();

            if exists {
                let progress = self.progress_mut();
                if next_module > progress.max_unlocked_module {
                    progress.max_unlocked_module = next_module;
                }
                progress
                    .unlocked_sections
                    .entry(next_module)
                    .or_insert_with(|| vec![0]);
                progress.max_unlocked_section.entry(next_module).or_insert(0);
            }
            self.recalculate_unlocked_modules();
        }
    }

    /// Unlocks every module from 0 up to max_unlocked_module (inclusive).
    pub fn recalculate_unlocked_modules(&mut self) {
        let prog = self.progress_mut();
        prog.unlocked_modules = (0..=prog.max_unlocked_module).collect();
    }

    /// Must be called after changing max_unlocked_section or restoring progress.
    pub fn recalculate_unlocked_sections(&mut self, module_idx: usize) {
        let progress = self.progress_mut();
        let max_section = *progress.max_unlocked_section.get(&module_idx).unwrap_or(&0);
        progress
            .unlocked_sections
            .insert(module_idx, (0..=max_section).collect());
    }

    pub fn pending_sections_in_module(&self, module_idx: usize) -> usize {
        let completed = &self.progress().completed_sections;
        self.module(module_idx)
            .map(|m| {
                m.sections
                    .iter()
                    .filter(|s| !completed.contains(&s.slug))
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn has_next_module(&self) -> bool {
        let current = self.progress().current_module.unwrap_or(0);
        self.course()
            .map(|c| current + 1 < c.modules.len())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::StudyApp;

    fn app_on_course(slug: &str) -> StudyApp {
        let mut app = StudyApp::new();
        app.select_course(slug);
        app
    }

    fn complete(app: &mut StudyApp, mi: usize, si: usize) {
        let slug = app.section(mi, si).unwrap().slug.clone();
        app.progress_mut().completed_sections.insert(slug);
        app.complete_section(mi, si);
    }

    #[test]
    fn only_first_section_is_unlocked_at_start() {
        let app = app_on_course("fire-safety");
        assert!(app.is_section_unlocked(0, 0));
        assert!(!app.is_section_unlocked(0, 1));
        assert!(app.is_module_unlocked(0));
        assert!(!app.is_module_unlocked(1));
    }

    #[test]
    fn completing_a_section_unlocks_the_next_one() {
        let mut app = app_on_course("fire-safety");
        complete(&mut app, 0, 0);
        assert!(app.is_section_completed(0, 0));
        assert!(app.is_section_unlocked(0, 1));
        assert!(!app.is_module_completed(0));
    }

    #[test]
    fn finishing_a_module_unlocks_the_next_module() {
        let mut app = app_on_course("fire-safety");
        let sections = app.module(0).unwrap().sections.len();
        for si in 0..sections {
            complete(&mut app, 0, si);
        }
        assert!(app.is_module_completed(0));
        assert!(app.is_module_unlocked(1));
        assert!(app.is_section_unlocked(1, 0));
    }

    #[test]
    fn course_completed_only_when_every_module_is() {
        let mut app = app_on_course("first-aid");
        assert!(!app.is_course_completed());
        let modules = app.course().unwrap().modules.len();
        for mi in 0..modules {
            let sections = app.module(mi).unwrap().sections.len();
            for si in 0..sections {
                complete(&mut app, mi, si);
            }
        }
        assert!(app.is_course_completed());
    }
}

use super::*;
use crate::session::InlineCheck;

impl StudyApp {
    pub fn change_course(&mut self) {
        self.has_saved_progress = true;
        self.session = None;
        self.checks.clear();
        self.state = AppState::CourseSelect;
    }

    pub fn open_module_menu(&mut self) {
        self.sync_completed();
        self.recalculate_unlocked_modules();
        self.state = AppState::ModuleMenu;
        self.message.clear();
    }

    pub fn open_section_menu(&mut self) {
        let module_idx = match self.progress().current_module {
            Some(m) => m,
            None => return,
        };

        {
            let prog = self.progress_mut();
            prog.max_unlocked_section.entry(module_idx).or_insert(0);
        }
        self.recalculate_unlocked_sections(module_idx);

        {
            let prog = self.progress_mut();
            prog.current_section = None;
        }

        self.state = AppState::SectionMenu;
        self.message.clear();
    }

    /// Opens a module at its first unfinished unlocked section.
    pub fn select_module(&mut self, module_idx: usize) {
        let module = match self.module(module_idx) {
            Some(m) => m,
            None => return,
        };

        let unlocked = self
            .progress()
            .unlocked_sections
            .get(&module_idx)
            .cloned()
            .unwrap_or_else(|| vec![0]);

        let first_pending = unlocked
            .iter()
            .copied()
            .find(|&si| {
                module
                    .sections
                    .get(si)
                    .map(|s| !self.progress().completed_sections.contains(&s.slug))
                    .unwrap_or(false)
            })
            .or_else(|| unlocked.first().copied());

        {
            let prog = self.progress_mut();
            prog.current_module = Some(module_idx);
        }
        if let Some(si) = first_pending {
            self.select_section(module_idx, si);
        } else {
            self.open_section_menu();
        }
    }

    /// Positions on a section and opens its article page. The inline checks
    /// are rebuilt fresh, so any earlier reveals are forgotten.
    pub fn select_section(&mut self, module_idx: usize, section_idx: usize) {
        let section = match self.section(module_idx, section_idx) {
            Some(s) => s.clone(),
            None => return,
        };

        {
            let prog = self.progress_mut();
            prog.current_module = Some(module_idx);
            prog.current_section = Some(section_idx);
        }

        self.checks = section
            .checks
            .iter()
            .cloned()
            .map(|q| InlineCheck::new(q).expect("curriculum validated at startup"))
            .collect();
        self.session = None;
        self.state = AppState::Section;
        self.message.clear();
    }

    /// Continue where the learner left off: the first unfinished section
    /// across the course, or the very first section when everything is done.
    pub fn continue_course(&mut self) {
        let completed = self.progress().completed_sections.clone();
        let position = self.course().and_then(|course| {
            course.modules.iter().enumerate().find_map(|(mi, module)| {
                module
                    .sections
                    .iter()
                    .position(|s| !completed.contains(&s.slug))
                    .map(|si| (mi, si))
            })
        });

        match position {
            Some((mi, si)) => self.select_section(mi, si),
            None => self.select_section(0, 0),
        }
    }

    pub fn back_to_welcome(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }

    pub fn back_to_sections(&mut self) {
        self.has_saved_progress = true;
        self.session = None;
        self.open_section_menu();
    }

    /// From a section summary onwards: next section in the module, next
    /// module, or the course summary when nothing is left.
    pub fn advance_to_next_section(&mut self) {
        let (mi, si) = match self.current_position() {
            Some(pos) => pos,
            None => return,
        };

        let sections_in_module = self.module(mi).map(|m| m.sections.len()).unwrap_or(0);
        if si + 1 < sections_in_module {
            self.select_section(mi, si + 1);
            return;
        }
        if self.is_module_completed(mi) {
            self.advance_to_next_module();
        } else {
            // Last section reached but something earlier is unfinished.
            self.open_section_menu();
        }
    }

    pub fn advance_to_next_module(&mut self) {
        let mi = match self.progress().current_module {
            Some(m) => m,
            None => return,
        };
        if self.has_next_module() {
            self.select_module(mi + 1);
        } else {
            self.state = AppState::CourseSummary;
            self.message.clear();
        }
    }
}

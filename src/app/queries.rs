use super::*;
use crate::model::{Course, Module, Section};

impl StudyApp {
    pub fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        self.curriculum.courses.iter().find(|c| c.slug == slug)
    }

    /// The currently selected course.
    pub fn course(&self) -> Option<&Course> {
        self.selected_course
            .as_deref()
            .and_then(|slug| self.course_by_slug(slug))
    }

    pub fn module(&self, module_idx: usize) -> Option<&Module> {
        self.course()?.modules.get(module_idx)
    }

    pub fn section(&self, module_idx: usize, section_idx: usize) -> Option<&Section> {
        self.module(module_idx)?.sections.get(section_idx)
    }

    pub fn current_section(&self) -> Option<&Section> {
        let (mi, si) = self.current_position()?;
        self.section(mi, si)
    }

    pub fn all_section_slugs(&self) -> HashSet<String> {
        self.course()
            .into_iter()
            .flat_map(|c| &c.modules)
            .flat_map(|m| &m.sections)
            .map(|s| s.slug.clone())
            .collect()
    }

    pub(crate) fn current_position(&self) -> Option<(usize, usize)> {
        let prog = self.progress_opt()?;
        match (prog.current_module, prog.current_section) {
            (Some(m), Some(s)) => Some((m, s)),
            _ => None,
        }
    }
}

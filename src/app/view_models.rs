use super::*;

impl StudyApp {
    pub fn module_infos(&self) -> Vec<ModuleInfo> {
        self.course()
            .into_iter()
            .flat_map(|c| c.modules.iter().enumerate())
            .map(|(mi, module)| ModuleInfo {
                idx: mi,
                number: module.number,
                title: module.title.clone(),
                unlocked: self.is_module_unlocked(mi),
                completed: self.is_module_completed(mi),
                pending: self.pending_sections_in_module(mi),
            })
            .collect()
    }

    pub fn section_infos_in_current_module(&self) -> Option<Vec<SectionInfo>> {
        let mi = self.progress().current_module?;
        let module = self.module(mi)?;
        Some(
            module
                .sections
                .iter()
                .enumerate()
                .map(|(si, section)| SectionInfo {
                    idx: si,
                    number: section.number,
                    title: section.title.clone(),
                    unlocked: self.is_section_unlocked(mi, si),
                    completed: self.is_section_completed(mi, si),
                    quiz_len: section.quiz.len(),
                })
                .collect(),
        )
    }

    pub fn score_rows_for_course(&self) -> Vec<ScoreRow> {
        let mut rows = Vec::new();
        let course = match self.course() {
            Some(c) => c,
            None => return rows,
        };
        let prog = self.progress();
        for module in &course.modules {
            for section in &module.sections {
                rows.push(ScoreRow {
                    module_number: module.number,
                    section_number: section.number,
                    title: section.title.clone(),
                    score: prog.scores.get(&section.slug).copied(),
                    completed: prog.completed_sections.contains(&section.slug),
                });
            }
        }
        rows
    }
}

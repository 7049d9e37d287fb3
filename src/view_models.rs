// src/view_models.rs

#[derive(Clone, Debug)]
pub struct ModuleInfo {
    pub idx: usize,      // 0-based index into course.modules
    pub number: usize,   // human number (1,2,3…)
    pub title: String,
    pub unlocked: bool,
    pub completed: bool,
    pub pending: usize,  // sections not yet completed
}

#[derive(Clone, Debug)]
pub struct SectionInfo {
    pub idx: usize,
    pub number: usize,
    pub title: String,
    pub unlocked: bool,
    pub completed: bool,
    pub quiz_len: usize,
}

/// One row of the course summary table.
#[derive(Clone, Debug)]
pub struct ScoreRow {
    pub module_number: usize,
    pub section_number: usize,
    pub title: String,
    pub score: Option<(usize, usize)>, // (correct, total) of the last finished quiz
    pub completed: bool,
}

impl ModuleInfo {
    pub fn label(&self) -> String {
        if self.completed && self.pending == 0 {
            format!("Module {} — {} ✅", self.number, self.title)
        } else if self.unlocked {
            if self.pending > 0 {
                format!("Module {} — {} 🔓 ({} to do)", self.number, self.title, self.pending)
            } else {
                format!("Module {} — {} 🔓", self.number, self.title)
            }
        } else {
            format!("Module {} — {} 🔒", self.number, self.title)
        }
    }
}

impl SectionInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{}.  {} ✅", self.number, self.title)
        } else if self.unlocked {
            format!("{}.  {} 🔓", self.number, self.title)
        } else {
            format!("{}.  {} 🔒", self.number, self.title)
        }
    }
}

impl ScoreRow {
    pub fn score_label(&self) -> String {
        match self.score {
            Some((_, 0)) => "read".to_owned(),
            Some((correct, total)) => {
                let pct = correct as f32 / total as f32 * 100.0;
                format!("{correct}/{total} ({pct:.0}%)")
            }
            None => "—".to_owned(),
        }
    }
}

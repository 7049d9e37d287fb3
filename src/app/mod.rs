use crate::data::read_curriculum_embedded;
use crate::model::{AppState, Curriculum};
use crate::session::{InlineCheck, QuizSession};
use egui_commonmark::CommonMarkCache;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ModuleInfo, ScoreRow, SectionInfo};

/// Persisted per-course learner progress. Quiz sessions themselves are
/// ephemeral and never land in here; only the outcome of a finished quiz
/// (completion and last score) is recorded.
#[derive(Serialize, Deserialize, Clone)]
pub struct CourseProgress {
    pub completed_sections: HashSet<String>,
    pub scores: HashMap<String, (usize, usize)>, // section slug -> (correct, total)
    pub current_module: Option<usize>,           // index into course.modules
    pub current_section: Option<usize>,          // index within the current module
    pub unlocked_modules: Vec<usize>,
    pub unlocked_sections: HashMap<usize, Vec<usize>>, // module -> unlocked sections
    pub max_unlocked_module: usize,
    pub max_unlocked_section: HashMap<usize, usize>,
}

impl Default for CourseProgress {
    fn default() -> Self {
        let mut unlocked_sections = HashMap::new();
        unlocked_sections.insert(0, vec![0]); // only the first section of module 1
        let mut max_unlocked_section = HashMap::new();
        max_unlocked_section.insert(0, 0);

        Self {
            completed_sections: HashSet::new(),
            scores: HashMap::new(),
            current_module: Some(0),
            current_section: Some(0),
            unlocked_modules: vec![0],
            unlocked_sections,
            max_unlocked_module: 0,
            max_unlocked_section,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct StudyApp {
    pub progresses: HashMap<String, CourseProgress>,
    pub selected_course: Option<String>, // course slug
    pub message: String,
    #[serde(skip)]
    pub curriculum: Curriculum,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub session: Option<QuizSession>,
    #[serde(skip)]
    pub checks: Vec<InlineCheck>,
    #[serde(skip)]
    pub cm_cache: CommonMarkCache,
    #[serde(skip)]
    pub confirm_reset: bool,
    #[serde(skip)]
    pub has_saved_progress: bool,
    #[serde(skip)]
    pub window_title: String,
}

impl Default for StudyApp {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyApp {
    pub fn new() -> Self {
        Self {
            progresses: HashMap::new(),
            selected_course: None,
            message: String::new(),
            curriculum: read_curriculum_embedded(),
            state: AppState::CourseSelect,
            session: None,
            checks: Vec::new(),
            cm_cache: CommonMarkCache::default(),
            confirm_reset: false,
            has_saved_progress: false,
            window_title: String::new(),
        }
    }

    /// Rebuilds the transient state after a restore from eframe storage.
    /// The curriculum always comes fresh from the embedded bank, so stale
    /// slugs from an older content version are pruned from the progress.
    pub fn after_restore(&mut self) {
        self.curriculum = read_curriculum_embedded();
        if let Some(slug) = self.selected_course.clone() {
            if self.course_by_slug(&slug).is_some() {
                self.progresses.entry(slug).or_default();
                self.sync_completed();
                self.has_saved_progress = self
                    .progress_opt()
                    .map(|p| !p.completed_sections.is_empty())
                    .unwrap_or(false);
                self.state = AppState::Welcome;
            } else {
                log::warn!("restored course `{slug}` no longer exists in the curriculum");
                self.selected_course = None;
                self.state = AppState::CourseSelect;
            }
        }
    }

    /// Entrypoint for switching course; keeps any saved progress for it.
    pub fn select_course(&mut self, slug: &str) {
        if self.course_by_slug(slug).is_none() {
            log::warn!("unknown course `{slug}` selected");
            return;
        }
        log::info!("course selected: {slug}");
        self.selected_course = Some(slug.to_owned());
        self.progresses.entry(slug.to_owned()).or_default();
        self.sync_completed();
        self.has_saved_progress = !self.progress().completed_sections.is_empty();
        self.session = None;
        self.checks.clear();
        self.state = AppState::Welcome;
        self.message.clear();
    }
}

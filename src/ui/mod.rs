mod helpers;
pub mod layout;
pub mod views;

use crate::app::StudyApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for StudyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reset + change-course controls only once a course is open
        if matches!(
            self.state,
            AppState::Section | AppState::Quiz | AppState::SectionSummary | AppState::CourseSummary
        ) {
            top_panel(self, ctx, true);
        } else if matches!(self.state, AppState::Welcome) {
            top_panel(self, ctx, false);
        }

        bottom_panel(ctx);
        self.apply_window_title(ctx);

        // Dispatch by state to the view functions
        match self.state {
            AppState::CourseSelect => views::course_select::ui_course_select(self, ctx),
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::ModuleMenu => views::module_menu::ui_module_menu(self, ctx),
            AppState::SectionMenu => views::section_menu::ui_section_menu(self, ctx),
            AppState::Section => views::section::ui_section(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::SectionSummary => views::section_summary::ui_section_summary(self, ctx),
            AppState::CourseSummary => views::summary::ui_course_summary(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}

impl StudyApp {
    /// Fire-and-forget page metadata: keeps the window title in sync with
    /// the page being shown, once per change.
    fn apply_window_title(&mut self, ctx: &Context) {
        let title = self.page_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn page_title(&self) -> String {
        let course_title = self.course().map(|c| c.title.clone());
        match (self.state, course_title) {
            (AppState::CourseSelect, _) | (_, None) => "Study Centre".to_owned(),
            (AppState::Section | AppState::Quiz | AppState::SectionSummary, Some(course)) => {
                match self.current_section() {
                    Some(section) => format!("{} — {} | Study Centre", course, section.title),
                    None => format!("{course} | Study Centre"),
                }
            }
            (_, Some(course)) => format!("{course} | Study Centre"),
        }
    }
}

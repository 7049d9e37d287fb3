use super::*;
use crate::session::QuizSession;

impl StudyApp {
    /// Builds a fresh session for the current section's quiz. A section with
    /// no quiz questions produces a session that is already finished, which
    /// records a 0/0 result and goes straight to the summary.
    pub fn start_quiz(&mut self) {
        let questions = match self.current_section() {
            Some(section) => section.quiz.clone(),
            None => {
                self.message = "No section selected.".into();
                return;
            }
        };

        let session = QuizSession::new(questions).expect("curriculum validated at startup");
        let finished = session.is_finished();
        self.session = Some(session);
        self.message.clear();

        if finished {
            self.finish_quiz();
        } else {
            self.state = AppState::Quiz;
        }
    }

    /// Answer for the current quiz question. The session itself guards the
    /// transition, so a second click while revealed changes nothing.
    pub fn answer_current(&mut self, option_idx: usize) {
        if let Some(session) = self.session.as_mut() {
            session.select_option(option_idx);
        }
    }

    /// Advance past a revealed question; finishing the last one records the
    /// result and shows the section summary.
    pub fn advance_question(&mut self) {
        let finished = match self.session.as_mut() {
            Some(session) => {
                session.next();
                session.is_finished()
            }
            None => return,
        };
        if finished {
            self.finish_quiz();
        }
    }

    /// Selection on one of the inline checks in the current article.
    pub fn answer_check(&mut self, check_idx: usize, option_idx: usize) {
        if let Some(check) = self.checks.get_mut(check_idx) {
            check.select_option(option_idx);
        }
    }

    /// The session stays around for the summary view; it is discarded when
    /// the learner navigates away.
    fn finish_quiz(&mut self) {
        let (score, total) = match self.session.as_ref() {
            Some(session) if session.is_finished() => (session.score(), session.total()),
            _ => return,
        };
        self.record_quiz_result(score, total);
        self.state = AppState::SectionSummary;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::StudyApp;
    use crate::model::AppState;

    fn app_in_first_section() -> StudyApp {
        let mut app = StudyApp::new();
        app.select_course("fire-safety");
        app.select_section(0, 0);
        app
    }

    #[test]
    fn select_section_builds_inline_checks() {
        let app = app_in_first_section();
        assert_eq!(app.state, AppState::Section);
        let expected = app.current_section().unwrap().checks.len();
        assert_eq!(app.checks.len(), expected);
    }

    #[test]
    fn inline_check_reveal_is_one_shot_at_app_level() {
        let mut app = app_in_first_section();
        app.answer_check(0, 0);
        let first = app.checks[0].selected();
        app.answer_check(0, 1);
        assert_eq!(app.checks[0].selected(), first);
    }

    #[test]
    fn perfect_quiz_run_completes_the_section() {
        let mut app = app_in_first_section();
        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        let answers: Vec<usize> = app
            .session
            .as_ref()
            .unwrap()
            .questions()
            .iter()
            .map(|q| q.correct_index)
            .collect();
        for answer in answers {
            app.answer_current(answer);
            app.advance_question();
        }

        assert_eq!(app.state, AppState::SectionSummary);
        assert!(app.is_section_completed(0, 0));
        let slug = app.section(0, 0).unwrap().slug.clone();
        let total = app.session.as_ref().unwrap().total();
        assert_eq!(app.progress().scores.get(&slug), Some(&(total, total)));
        // Next section unlocked by the finished quiz.
        assert!(app.is_section_unlocked(0, 1));
    }

    #[test]
    fn failed_answers_still_complete_but_score_low() {
        let mut app = app_in_first_section();
        app.start_quiz();
        let wrong: Vec<usize> = app
            .session
            .as_ref()
            .unwrap()
            .questions()
            .iter()
            .map(|q| (q.correct_index + 1) % q.options.len())
            .collect();
        for answer in wrong {
            app.answer_current(answer);
            app.advance_question();
        }
        assert_eq!(app.state, AppState::SectionSummary);
        assert!(app.is_section_completed(0, 0));
        assert_eq!(app.session.as_ref().unwrap().score(), 0);
    }

    #[test]
    fn advance_without_session_is_harmless() {
        let mut app = StudyApp::new();
        app.select_course("fire-safety");
        app.advance_question();
        app.answer_current(0);
        assert_eq!(app.state, AppState::Welcome);
    }
}

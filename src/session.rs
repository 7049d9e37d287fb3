//! The quiz state machines. Pure state reducers over a static question set;
//! nothing in here touches egui, the clock or the filesystem.

use crate::model::{ContentError, Question};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Revealed,
    Finished,
}

/// Single-question knowledge check embedded mid-article. The first selection
/// is final: it reveals correctness and the explanation, and every later
/// `select_option` call is a no-op.
#[derive(Clone, Debug)]
pub struct InlineCheck {
    question: Question,
    selected: Option<usize>,
}

impl InlineCheck {
    pub fn new(question: Question) -> Result<Self, ContentError> {
        question.validate()?;
        Ok(Self {
            question,
            selected: None,
        })
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select_option(&mut self, index: usize) {
        if self.selected.is_some() || index >= self.question.options.len() {
            return;
        }
        self.selected = Some(index);
    }

    /// `Some` once revealed, `None` before any selection.
    pub fn was_correct(&self) -> Option<bool> {
        self.selected.map(|s| s == self.question.correct_index)
    }
}

/// Multi-question scored assessment. Lives only in memory for the duration
/// of one run; a retake always builds a fresh session.
///
/// Transitions: `Answering(i) --select_option--> Revealed(i)`,
/// `Revealed(i) --next--> Answering(i+1) | Finished`. There is no way back
/// to an earlier question and no re-answering the current one.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    phase: QuizPhase,
    current: usize,
    selected: Option<usize>,
    selections: Vec<Option<usize>>,
    score: usize,
    answered: HashSet<String>,
}

impl QuizSession {
    /// An empty question list is not an error: the session starts directly
    /// in `Finished` with `total == 0`.
    pub fn new(questions: Vec<Question>) -> Result<Self, ContentError> {
        for q in &questions {
            q.validate()?;
        }
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::Answering
        };
        let selections = vec![None; questions.len()];
        Ok(Self {
            questions,
            phase,
            current: 0,
            selected: None,
            selections,
            score: 0,
            answered: HashSet::new(),
        })
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// 0-based position; equals `total()` once finished.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// What the user picked for question `index`, if it was answered.
    pub fn selection_for(&self, index: usize) -> Option<usize> {
        self.selections.get(index).copied().flatten()
    }

    /// Records the answer for the current question and reveals feedback.
    /// Only reachable from `Answering`; calling it again (or with an index
    /// outside the options) changes nothing, so a question can never be
    /// scored twice.
    pub fn select_option(&mut self, index: usize) {
        if self.phase != QuizPhase::Answering {
            return;
        }
        let q = &self.questions[self.current];
        if index >= q.options.len() {
            return;
        }
        self.selected = Some(index);
        self.selections[self.current] = Some(index);
        let first_answer = self.answered.insert(q.id.clone());
        if first_answer && index == q.correct_index {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealed;
    }

    /// Advances past a revealed question; finishes after the last one.
    pub fn next(&mut self) {
        if self.phase != QuizPhase::Revealed {
            return;
        }
        self.current += 1;
        self.selected = None;
        self.phase = if self.current < self.questions.len() {
            QuizPhase::Answering
        } else {
            QuizPhase::Finished
        };
    }

    /// `Some` while the current question is revealed.
    pub fn was_correct(&self) -> Option<bool> {
        if self.phase != QuizPhase::Revealed {
            return None;
        }
        let q = &self.questions[self.current];
        self.selected.map(|s| s == q.correct_index)
    }

    /// `None` for an empty quiz, where a percentage has no meaning.
    pub fn percent(&self) -> Option<f32> {
        if self.questions.is_empty() {
            None
        } else {
            Some(self.score as f32 / self.questions.len() as f32 * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct: usize) -> Question {
        Question {
            id: id.into(),
            prompt: format!("prompt {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: correct,
            explanation: format!("explanation {id}"),
        }
    }

    #[test]
    fn inline_check_first_choice_is_final() {
        let mut check = InlineCheck::new(question("c1", 1)).unwrap();
        assert!(!check.is_revealed());
        check.select_option(3);
        assert!(check.is_revealed());
        assert_eq!(check.was_correct(), Some(false));
        // Second pick is ignored, even if it would have been right.
        check.select_option(1);
        assert_eq!(check.selected(), Some(3));
        assert_eq!(check.was_correct(), Some(false));
    }

    #[test]
    fn inline_check_wrong_answer_still_shows_explanation() {
        let mut check = InlineCheck::new(question("c1", 1)).unwrap();
        check.select_option(3);
        assert!(check.is_revealed());
        assert!(!check.question().explanation.is_empty());
    }

    #[test]
    fn inline_check_rejects_malformed_question() {
        let mut q = question("bad", 0);
        q.options.truncate(1);
        assert!(InlineCheck::new(q).is_err());
    }

    #[test]
    fn inline_check_ignores_out_of_range_index() {
        let mut check = InlineCheck::new(question("c1", 1)).unwrap();
        check.select_option(17);
        assert!(!check.is_revealed());
    }

    #[test]
    fn three_question_run_scores_two_of_three() {
        // Correct answers [1, 0, 2]; user picks [1, 1, 2].
        let mut quiz = QuizSession::new(vec![
            question("q1", 1),
            question("q2", 0),
            question("q3", 2),
        ])
        .unwrap();

        quiz.select_option(1);
        assert_eq!(quiz.was_correct(), Some(true));
        quiz.next();
        quiz.select_option(1);
        assert_eq!(quiz.was_correct(), Some(false));
        quiz.next();
        quiz.select_option(2);
        quiz.next();

        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 2);
        let pct = quiz.percent().unwrap();
        assert!((pct - 66.666_67).abs() < 0.01);
    }

    #[test]
    fn single_question_quiz_finishes_after_one_next() {
        let mut quiz = QuizSession::new(vec![question("q1", 0)]).unwrap();
        quiz.select_option(0);
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
        quiz.next();
        assert!(quiz.is_finished());
        assert_eq!((quiz.score(), quiz.total()), (1, 1));
        assert_eq!(quiz.percent(), Some(100.0));
    }

    #[test]
    fn empty_quiz_is_finished_immediately() {
        let quiz = QuizSession::new(vec![]).unwrap();
        assert!(quiz.is_finished());
        assert_eq!((quiz.score(), quiz.total()), (0, 0));
        assert_eq!(quiz.percent(), None);
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn second_select_on_revealed_question_is_a_no_op() {
        let mut quiz = QuizSession::new(vec![question("q1", 2)]).unwrap();
        quiz.select_option(0);
        assert_eq!(quiz.score(), 0);
        // Picking the right answer after reveal must not score.
        quiz.select_option(2);
        assert_eq!(quiz.selected(), Some(0));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.was_correct(), Some(false));
    }

    #[test]
    fn next_is_only_reachable_from_revealed() {
        let mut quiz = QuizSession::new(vec![question("q1", 0), question("q2", 0)]).unwrap();
        quiz.next();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        quiz.select_option(0);
        quiz.next();
        assert_eq!(quiz.current_index(), 1);
        // And no way back.
        quiz.next();
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn index_advances_by_one_and_never_decreases() {
        let questions: Vec<Question> = (0..4).map(|i| question(&format!("q{i}"), 0)).collect();
        let mut quiz = QuizSession::new(questions).unwrap();
        let mut last = quiz.current_index();
        for _ in 0..4 {
            quiz.select_option(0);
            assert_eq!(quiz.current_index(), last);
            quiz.next();
            assert_eq!(quiz.current_index(), last + 1);
            last = quiz.current_index();
        }
        assert!(quiz.is_finished());
        assert_eq!(quiz.current_index(), quiz.total());
    }

    #[test]
    fn score_matches_recorded_selections() {
        let mut quiz = QuizSession::new(vec![
            question("q1", 0),
            question("q2", 3),
            question("q3", 1),
        ])
        .unwrap();
        let picks = [0, 2, 1];
        for pick in picks {
            quiz.select_option(pick);
            quiz.next();
        }
        let recomputed = quiz
            .questions()
            .iter()
            .enumerate()
            .filter(|(i, q)| quiz.selection_for(*i) == Some(q.correct_index))
            .count();
        assert_eq!(quiz.score(), recomputed);
        assert!(quiz.score() <= quiz.total());
    }

    #[test]
    fn out_of_range_selection_does_not_reveal() {
        let mut quiz = QuizSession::new(vec![question("q1", 0)]).unwrap();
        quiz.select_option(9);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn malformed_question_fails_construction() {
        let mut bad = question("q1", 0);
        bad.correct_index = 4;
        assert!(QuizSession::new(vec![question("ok", 0), bad]).is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Contract violations in caller-supplied content. These are raised at
/// load/construction time, never during a running session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("question `{id}` needs at least 2 options, got {got}")]
    TooFewOptions { id: String, got: usize },
    #[error("question `{id}` has correct_index {index}, but only {len} options")]
    CorrectIndexOutOfRange { id: String, index: usize, len: usize },
    #[error("duplicate question id `{0}` in curriculum")]
    DuplicateQuestionId(String),
    #[error("duplicate section slug `{0}` in curriculum")]
    DuplicateSectionSlug(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                id: self.id.clone(),
                got: self.options.len(),
            });
        }
        if self.correct_index >= self.options.len() {
            return Err(ContentError::CorrectIndexOutOfRange {
                id: self.id.clone(),
                index: self.correct_index,
                len: self.options.len(),
            });
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// One article page: markdown prose plus its embedded checks, FAQs and
/// the end-of-section quiz.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Section {
    pub slug: String,
    pub number: usize,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub checks: Vec<Question>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub quiz: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Module {
    pub number: usize,
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Course {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub modules: Vec<Module>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Curriculum {
    pub courses: Vec<Course>,
}

impl Curriculum {
    /// Checks every question and rejects duplicate ids/slugs. Called once
    /// when the embedded bank is loaded; a broken bank aborts startup.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for course in &self.courses {
            for module in &course.modules {
                for section in &module.sections {
                    if !slugs.insert(section.slug.clone()) {
                        return Err(ContentError::DuplicateSectionSlug(section.slug.clone()));
                    }
                    for q in section.checks.iter().chain(&section.quiz) {
                        q.validate()?;
                        if !ids.insert(q.id.clone()) {
                            return Err(ContentError::DuplicateQuestionId(q.id.clone()));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    CourseSelect,
    Welcome,
    ModuleMenu,
    SectionMenu,
    Section,
    Quiz,
    SectionSummary,
    CourseSummary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::CourseSelect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, correct: usize) -> Question {
        Question {
            id: "q1".into(),
            prompt: "prompt".into(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            correct_index: correct,
            explanation: "because".into(),
        }
    }

    #[test]
    fn valid_question_passes() {
        assert_eq!(question(4, 3).validate(), Ok(()));
    }

    #[test]
    fn one_option_is_rejected() {
        assert_eq!(
            question(1, 0).validate(),
            Err(ContentError::TooFewOptions {
                id: "q1".into(),
                got: 1
            })
        );
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        assert_eq!(
            question(4, 4).validate(),
            Err(ContentError::CorrectIndexOutOfRange {
                id: "q1".into(),
                index: 4,
                len: 4
            })
        );
    }

    #[test]
    fn duplicate_ids_across_sections_are_rejected() {
        let section = |slug: &str| Section {
            slug: slug.into(),
            number: 1,
            title: "t".into(),
            body: String::new(),
            checks: vec![],
            faqs: vec![],
            quiz: vec![question(2, 0)],
        };
        let curriculum = Curriculum {
            courses: vec![Course {
                slug: "c".into(),
                title: "c".into(),
                summary: String::new(),
                modules: vec![Module {
                    number: 1,
                    title: "m".into(),
                    sections: vec![section("a"), section("b")],
                }],
            }],
        };
        assert_eq!(
            curriculum.validate(),
            Err(ContentError::DuplicateQuestionId("q1".into()))
        );
    }
}

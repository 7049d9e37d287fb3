// src/data.rs

use crate::model::Curriculum;

/// Loads the course bank from the embedded YAML and validates it.
/// A malformed bank is a packaging mistake, so we fail fast at startup.
pub fn read_curriculum_embedded() -> Curriculum {
    let file_content = include_str!("data/curriculum.yaml");
    let curriculum: Curriculum =
        serde_yaml::from_str(file_content).expect("could not parse the embedded curriculum YAML");
    curriculum
        .validate()
        .expect("embedded curriculum failed validation");
    curriculum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_curriculum_parses_and_validates() {
        let curriculum = read_curriculum_embedded();
        assert!(!curriculum.courses.is_empty());
        for course in &curriculum.courses {
            assert!(!course.modules.is_empty(), "course {} is empty", course.slug);
        }
    }

    #[test]
    fn every_section_quiz_has_questions_or_is_reading_only() {
        // Reading-only sections are allowed, but a quiz that exists must
        // have answerable questions.
        let curriculum = read_curriculum_embedded();
        for course in &curriculum.courses {
            for module in &course.modules {
                for section in &module.sections {
                    for q in section.checks.iter().chain(&section.quiz) {
                        assert!(q.options.len() >= 2);
                        assert!(q.correct_index < q.options.len());
                    }
                }
            }
        }
    }
}

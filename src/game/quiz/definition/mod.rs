use anyhow::{anyhow, Context, Result};
use std::ops::Index;

use crate::game::difficulty::Difficulty;

pub mod question;

pub use question::{Question, RawQuestion};


const FALLBACK_EASY: &str = include_str!("../../../../assets/fallback/easy.csv");
const FALLBACK_MEDIUM: &str = include_str!("../../../../assets/fallback/medium.csv");
const FALLBACK_HARD: &str = include_str!("../../../../assets/fallback/hard.csv");

/// The ordered questions of one quiz session. Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionBatch {
    questions: Vec<Question>,
}

impl QuestionBatch {
    pub fn new(questions: Vec<Question>) -> Result<QuestionBatch> {
        if questions.is_empty() {
            return Err(anyhow!("A quiz needs at least one question"));
        }
        Ok(QuestionBatch { questions })
    }

    /// The bundled questions for a difficulty, used verbatim.
    pub fn fallback(difficulty: Difficulty) -> Result<QuestionBatch> {
        let table = match difficulty {
            Difficulty::Easy => FALLBACK_EASY,
            Difficulty::Medium => FALLBACK_MEDIUM,
            Difficulty::Hard => FALLBACK_HARD,
        };
        QuestionBatch::from_csv(table.as_bytes())
            .with_context(|| format!("Could not read {} fallback questions", difficulty))
    }

    pub fn from_csv<R: std::io::Read>(source: R) -> Result<QuestionBatch> {
        let mut questions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(source);
        for question in csv_reader.deserialize() {
            let raw_question: RawQuestion = question?;
            questions.push(raw_question.into());
        }
        QuestionBatch::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl Index<usize> for QuestionBatch {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

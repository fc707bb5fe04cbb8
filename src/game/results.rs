use std::collections::HashMap;

use crate::game::difficulty::Difficulty;
use crate::game::quiz::answer::Answer;
use crate::game::quiz::definition::Question;
use crate::game::quiz::score::{Rating, Score};

pub const NOT_ANSWERED: &str = "Not answered";

/// What a finished quiz hands over to the results screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionReport {
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub answers: HashMap<usize, Answer>,
    pub score: Score,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultLine {
    pub number: usize,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultsView {
    pub difficulty: Difficulty,
    pub score: Score,
    pub rating: Rating,
    pub best_score: u32,
    pub lines: Vec<ResultLine>,
}

impl SessionReport {
    pub fn lines(&self) -> Vec<ResultLine> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let answer = self.answers.get(&index);
                let your_answer = match answer {
                    Some(Answer::Selected(selected)) => crate::text::decode(selected),
                    Some(Answer::Timeout) | None => NOT_ANSWERED.to_owned(),
                };
                ResultLine {
                    number: index + 1,
                    question: question.display_text(),
                    your_answer,
                    correct_answer: question.display_correct_answer(),
                    is_correct: answer
                        .map(|answer| question.is_answer_correct(answer))
                        .unwrap_or(false),
                }
            })
            .collect()
    }

    pub fn view(&self, best_score: u32) -> ResultsView {
        ResultsView {
            difficulty: self.difficulty,
            score: self.score,
            rating: self.score.rating(),
            best_score,
            lines: self.lines(),
        }
    }
}

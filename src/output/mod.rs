use std::time::Duration;

use crate::game::difficulty::Difficulty;
use crate::game::quiz::view::QuestionView;
use crate::game::results::ResultsView;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerReveal(QuestionView),
    Help,
    InvalidAction(String),
    LoadFailed(Difficulty, String),
    Loading(Difficulty),
    QuestionBegins(QuestionView),
    Results(ResultsView),
    TimeRemaining(Duration),
    TimeUp(QuestionView),
    Welcome,
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}

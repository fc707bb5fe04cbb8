use anyhow::{anyhow, Context, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::time::Duration;

use self::answer::*;
use self::countdown::*;
use self::definition::*;
use self::score::*;
use self::view::*;
use crate::game::difficulty::Difficulty;
use crate::game::settings::Settings;
use crate::text;

pub mod answer;
pub mod countdown;
pub mod definition;
pub mod score;
pub mod view;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub answer: Answer,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TickEvent {
    TimeRemaining(Duration),
    TimedOut(AnswerResult),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Progress {
    NextQuestion(usize),
    Finished(Score),
}

/// One quiz session: walks a fixed batch of questions, one countdown per
/// question, one answer per question.
pub struct Quiz {
    batch: QuestionBatch,
    current_index: usize,
    answers: HashMap<usize, Answer>,
    option_orders: HashMap<usize, Vec<String>>,
    countdown: Countdown,
    question_duration: Duration,
    time_warnings: Vec<Duration>,
    rng: StdRng,
}

impl Quiz {
    pub fn new(batch: QuestionBatch, settings: &Settings, rng: StdRng) -> Quiz {
        Quiz {
            batch,
            current_index: 0,
            answers: HashMap::new(),
            option_orders: HashMap::new(),
            countdown: Countdown::new(settings.question_duration),
            question_duration: settings.question_duration,
            time_warnings: settings.time_warnings.clone(),
            rng,
        }
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.batch.len()
    }

    pub fn question(&self) -> &Question {
        &self.batch[self.current_index]
    }

    #[cfg(test)]
    pub fn answers(&self) -> &HashMap<usize, Answer> {
        &self.answers
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(&self.current_index)
    }

    pub fn is_locked(&self) -> bool {
        self.answers.contains_key(&self.current_index)
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.countdown.remaining_seconds()
    }

    #[cfg(test)]
    pub fn is_countdown_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Options of the current question. The order is drawn the first time a
    /// question is shown and kept for the rest of the session.
    pub fn options(&mut self) -> &[String] {
        let question = &self.batch[self.current_index];
        let rng = &mut self.rng;
        self.option_orders
            .entry(self.current_index)
            .or_insert_with(|| {
                let mut options = question.options();
                options.shuffle(rng);
                options
            })
    }

    pub fn select_answer(&mut self, answer: Answer) -> Result<AnswerResult> {
        if self.is_locked() {
            return Err(anyhow!("This question was already answered"));
        }

        let is_correct = self.question().is_answer_correct(&answer);
        self.answers.insert(self.current_index, answer.clone());
        self.countdown.cancel();
        debug!(
            "Question {} locked with `{}`",
            self.current_index + 1,
            answer
        );

        Ok(AnswerResult { answer, is_correct })
    }

    /// Picks an option by its 1-based position in the displayed order.
    pub fn select_option(&mut self, number: usize) -> Result<AnswerResult> {
        let options = self.options();
        let option = number
            .checked_sub(1)
            .and_then(|index| options.get(index))
            .cloned()
            .with_context(|| format!("There is no option {}", number))?;
        self.select_answer(Answer::Selected(option))
    }

    /// Picks the option a free-form guess refers to.
    pub fn guess(&mut self, guess: &str) -> Result<AnswerResult> {
        let options = self.options().to_vec();
        let option = self
            .question()
            .match_guess(&options, guess)
            .cloned()
            .with_context(|| format!("`{}` is not one of the options", guess))?;
        self.select_answer(Answer::Selected(option))
    }

    pub fn tick(&mut self, dt: Duration) -> Option<TickEvent> {
        if self.is_locked() {
            return None;
        }

        let (before, after) = self.countdown.tick(dt)?;
        if self.countdown.is_over() {
            return self.select_answer(Answer::Timeout).ok().map(TickEvent::TimedOut);
        }

        crossed_warning(&self.time_warnings, before, after).map(TickEvent::TimeRemaining)
    }

    pub fn advance(&mut self) -> Result<Progress> {
        if !self.is_locked() {
            return Err(anyhow!("Answer the question before moving on"));
        }

        if self.is_last_question() {
            return Ok(Progress::Finished(self.score()));
        }

        self.current_index += 1;
        self.enter_question();
        Ok(Progress::NextQuestion(self.current_index))
    }

    pub fn retreat(&mut self) -> Result<()> {
        if self.current_index == 0 {
            return Err(anyhow!("This is the first question"));
        }

        self.current_index -= 1;
        self.enter_question();
        Ok(())
    }

    fn enter_question(&mut self) {
        self.countdown = if self.is_locked() {
            Countdown::stopped(self.question_duration)
        } else {
            Countdown::new(self.question_duration)
        };
    }

    pub fn score(&self) -> Score {
        let correct = self
            .batch
            .questions()
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.answers
                    .get(index)
                    .map(|answer| question.is_answer_correct(answer))
                    .unwrap_or(false)
            })
            .count();
        Score {
            correct: correct as u32,
            total: self.batch.len() as u32,
        }
    }

    pub fn view(&mut self, difficulty: Difficulty) -> QuestionView {
        let options = self.options().to_vec();
        let question = self.question();
        let locked_answer = self.current_answer().cloned();
        let marks = mark_options(&options, &question.correct_answer, locked_answer.as_ref());
        QuestionView {
            number: self.current_index + 1,
            total: self.batch.len(),
            difficulty,
            text: question.display_text(),
            options: options
                .iter()
                .zip(marks)
                .map(|(option, mark)| OptionView {
                    label: text::decode(option),
                    mark,
                })
                .collect(),
            remaining_seconds: self.remaining_seconds(),
            correct_answer: question.display_correct_answer(),
            locked_answer,
            is_last: self.is_last_question(),
        }
    }

    pub fn into_parts(self) -> (QuestionBatch, HashMap<usize, Answer>) {
        (self.batch, self.answers)
    }
}

use crate::game::difficulty::Difficulty;
use crate::game::quiz::answer::Answer;
use crate::text;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

/// Highlighting for a question's options. Nothing is marked until an
/// answer is locked in; then the correct option is always marked and a
/// wrong pick is marked too.
pub fn mark_options(
    options: &[String],
    correct_answer: &str,
    locked_answer: Option<&Answer>,
) -> Vec<OptionMark> {
    options
        .iter()
        .map(|option| match locked_answer {
            None => OptionMark::Neutral,
            Some(_) if option == correct_answer => OptionMark::Correct,
            Some(Answer::Selected(selected)) if selected == option => OptionMark::Incorrect,
            Some(_) => OptionMark::Neutral,
        })
        .collect()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub mark: OptionMark,
}

/// Everything needed to draw the current question, already decoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub difficulty: Difficulty,
    pub text: String,
    pub options: Vec<OptionView>,
    pub remaining_seconds: u64,
    pub locked_answer: Option<Answer>,
    pub correct_answer: String,
    pub is_last: bool,
}

impl QuestionView {
    pub fn is_locked(&self) -> bool {
        self.locked_answer.is_some()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.locked_answer.as_ref().map(|answer| match answer {
            Answer::Selected(selected) => text::decode(selected) == self.correct_answer,
            Answer::Timeout => false,
        })
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use unidecode::unidecode;

use crate::game::quiz::answer::Answer;
use crate::text;

lazy_static! {
    static ref FORBIDDEN_GUESS_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

fn sanitize(answer: &str) -> String {
    let answer = unidecode(answer);
    FORBIDDEN_GUESS_CHARACTERS_REGEX
        .replace_all(&answer.to_lowercase(), "")
        .into()
}

/// One row of a bundled fallback table.
#[derive(Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answer_1: String,
    pub incorrect_answer_2: String,
    pub incorrect_answer_3: String,
}

/// A multiple-choice question. Text is kept exactly as the source served
/// it and only decoded for display.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: [String; 3],
}

impl Question {
    #[cfg(test)]
    pub fn new(text: &str, correct_answer: &str, incorrect_answers: [&str; 3]) -> Self {
        let [a, b, c] = incorrect_answers;
        Question {
            text: text.to_owned(),
            correct_answer: correct_answer.to_owned(),
            incorrect_answers: [a.to_owned(), b.to_owned(), c.to_owned()],
        }
    }

    pub fn is_answer_correct(&self, answer: &Answer) -> bool {
        match answer {
            Answer::Selected(selected) => *selected == self.correct_answer,
            Answer::Timeout => false,
        }
    }

    /// Distractors first, correct answer last. Callers shuffle.
    pub fn options(&self) -> Vec<String> {
        let mut options = self.incorrect_answers.to_vec();
        options.push(self.correct_answer.clone());
        options
    }

    pub fn display_text(&self) -> String {
        text::decode(&self.text)
    }

    pub fn display_correct_answer(&self) -> String {
        text::decode(&self.correct_answer)
    }

    /// Finds the option a free-form guess refers to, ignoring case,
    /// accents and punctuation.
    pub fn match_guess<'a>(&self, options: &'a [String], guess: &str) -> Option<&'a String> {
        let sanitized_guess = sanitize(guess);
        if sanitized_guess.is_empty() {
            return None;
        }
        options
            .iter()
            .find(|option| sanitize(&text::decode(option)) == sanitized_guess)
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            text: raw_question.question,
            correct_answer: raw_question.correct_answer,
            incorrect_answers: [
                raw_question.incorrect_answer_1,
                raw_question.incorrect_answer_2,
                raw_question.incorrect_answer_3,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "Who painted the Mona Lisa?",
            "Leonardo da Vinci",
            ["Pablo Picasso", "Vincent van Gogh", "Michelangelo"],
        )
    }

    #[test]
    fn options_contain_every_answer_once() {
        let options = question().options();
        assert_eq!(options.len(), 4);
        assert!(options.contains(&"Leonardo da Vinci".to_owned()));
        assert!(options.contains(&"Michelangelo".to_owned()));
    }

    #[test]
    fn timeout_is_never_correct() {
        let question = Question::new("Is this a trick?", "timeout", ["a", "b", "c"]);
        assert!(!question.is_answer_correct(&Answer::Timeout));
        assert!(question.is_answer_correct(&Answer::Selected("timeout".to_owned())));
    }

    #[test]
    fn matches_guess_loosely() {
        let question = question();
        let options = question.options();
        assert_eq!(
            question.match_guess(&options, "leonardo DA vinci!"),
            Some(&"Leonardo da Vinci".to_owned())
        );
        assert_eq!(question.match_guess(&options, "Dali"), None);
        assert_eq!(question.match_guess(&options, "???"), None);
    }

    #[test]
    fn matches_guess_against_encoded_options() {
        let question = Question::new("Q", "Pok%C3%A9mon", ["a", "b", "c"]);
        let options = question.options();
        assert_eq!(
            question.match_guess(&options, "pokemon"),
            Some(&"Pok%C3%A9mon".to_owned())
        );
    }
}

use itertools::Itertools;

use crate::game::difficulty::Difficulty;
use crate::game::quiz::answer::Answer;
use crate::game::quiz::score::Rating;
use crate::game::quiz::view::{OptionMark, QuestionView};
use crate::game::results::ResultsView;
use crate::output::{Message, QuizOutput};

const HELP: &str = "📋 Commands
- `easy`, `medium` or `hard` starts a quiz.
- `1` to `4` picks an option, `answer <text>` picks the option you type.
- `next` and `prev` move between questions once the current one is answered.
- `retry` fetches the questions again, `results` shows the last summary.
- `home` goes back to the start screen, `quit` leaves.";

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Welcome => {
                let difficulties = Difficulty::ALL
                    .iter()
                    .map(|d| format!("`{}`", d.label()))
                    .join(", ");
                format!(
                    "🎯 Trivia Night\nTest your knowledge! Choose a difficulty to begin: {}.\nType `help` for all commands.",
                    difficulties
                )
            }
            Help => HELP.into(),
            InvalidAction(reason) => format!("⚠️ {}", reason),
            Loading(difficulty) => format!(
                "Loading {} questions... Please wait while we prepare your quiz.",
                difficulty.label()
            ),
            LoadFailed(difficulty, reason) => format!(
                "Oops! Something went wrong while loading {} questions: {}\nType `retry` to try again or `home` to go back.",
                difficulty.label(),
                reason
            ),
            QuestionBegins(view) => self.render_question(view),
            TimeRemaining(remaining) => format!("⏰ {}s remaining!", remaining.as_secs()),
            TimeUp(view) => format!("⌛ Time's up!\n{}", self.render_question(view)),
            AnswerReveal(view) => self.render_question(view),
            Results(view) => self.render_results(view),
        }
    }

    fn render_question(&self, view: &QuestionView) -> String {
        let mut text = format!(
            "\nQuestion {} of {} ({})",
            view.number,
            view.total,
            view.difficulty.display_name()
        );
        if !view.is_locked() {
            text += &format!("  ⏰ {}s", view.remaining_seconds);
        }
        text += &format!("\n{}\n", view.text);

        let options = view
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let mark = match option.mark {
                    OptionMark::Neutral => "  ",
                    OptionMark::Correct => "✅",
                    OptionMark::Incorrect => "❌",
                };
                format!("{} {}. {}", mark, index + 1, option.label)
            })
            .join("\n");
        text += &options;

        match view.is_correct() {
            None => (),
            Some(true) => text += "\n\n✅ Correct!",
            Some(false) => {
                let verdict = match view.locked_answer {
                    Some(Answer::Timeout) => "⌛ Not answered!",
                    _ => "❌ Incorrect!",
                };
                text += &format!(
                    "\n\n{} The correct answer is: {}",
                    verdict, view.correct_answer
                );
            }
        }

        if view.is_locked() {
            let next = if view.is_last { "finish" } else { "next question" };
            text += &format!("\nType `next` for the {}.", next);
        }
        text
    }

    fn render_results(&self, view: &ResultsView) -> String {
        let headline = match view.rating {
            Rating::Perfect => "Perfect! 🎉",
            Rating::Excellent => "Excellent! 🌟",
            Rating::Good => "Good job! 👍",
            Rating::NotBad => "Not bad! 😊",
            Rating::KeepPracticing => "Keep practicing! 💪",
        };
        let mut text = format!(
            "\n{}\nYour Score: {}\nDifficulty: {}",
            headline,
            view.score,
            view.difficulty.display_name()
        );
        if view.best_score > 0 {
            text += &format!("\nHigh Score: {}/{}", view.best_score, view.score.total);
        }

        text += "\n\n📈 Quiz Summary";
        for line in &view.lines {
            let status = if line.is_correct {
                "✓ Correct"
            } else {
                "✗ Incorrect"
            };
            text += &format!(
                "\nQ{}: {}\n    Your answer: {}\n    Correct answer: {}\n    {}",
                line.number, line.question, line.your_answer, line.correct_answer, status
            );
        }
        text += "\n\nType `retry` to try again or `home` for a new quiz.";
        text
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::quiz::score::Score;
    use crate::game::quiz::view::OptionView;
    use crate::game::results::ResultLine;

    fn question_view(locked_answer: Option<Answer>) -> QuestionView {
        let marks = match &locked_answer {
            None => [OptionMark::Neutral, OptionMark::Neutral],
            Some(Answer::Selected(a)) if a == "Paris" => {
                [OptionMark::Correct, OptionMark::Neutral]
            }
            Some(Answer::Selected(_)) => [OptionMark::Correct, OptionMark::Incorrect],
            Some(Answer::Timeout) => [OptionMark::Correct, OptionMark::Neutral],
        };
        QuestionView {
            number: 1,
            total: 10,
            difficulty: Difficulty::Easy,
            text: "What is the capital of France?".to_owned(),
            options: vec![
                OptionView {
                    label: "Paris".to_owned(),
                    mark: marks[0],
                },
                OptionView {
                    label: "London".to_owned(),
                    mark: marks[1],
                },
            ],
            remaining_seconds: 30,
            locked_answer,
            correct_answer: "Paris".to_owned(),
            is_last: false,
        }
    }

    #[test]
    fn renders_open_question_with_timer() {
        let text = TerminalOutput::new().render_question(&question_view(None));
        assert!(text.contains("Question 1 of 10 (Easy)"));
        assert!(text.contains("⏰ 30s"));
        assert!(text.contains("1. Paris"));
        assert!(text.contains("2. London"));
        assert!(!text.contains("Correct"));
    }

    #[test]
    fn renders_incorrect_pick() {
        let view = question_view(Some(Answer::Selected("London".to_owned())));
        let text = TerminalOutput::new().render_question(&view);
        assert!(text.contains("✅ 1. Paris"));
        assert!(text.contains("❌ 2. London"));
        assert!(text.contains("The correct answer is: Paris"));
        assert!(!text.contains("⏰"));
    }

    #[test]
    fn renders_timeout_as_not_answered() {
        let view = question_view(Some(Answer::Timeout));
        let text = TerminalOutput::new().render_question(&view);
        assert!(text.contains("Not answered"));
    }

    #[test]
    fn hides_high_score_when_zero() {
        let view = ResultsView {
            difficulty: Difficulty::Hard,
            score: Score {
                correct: 0,
                total: 1,
            },
            rating: Rating::KeepPracticing,
            best_score: 0,
            lines: vec![ResultLine {
                number: 1,
                question: "What is the derivative of x²?".to_owned(),
                your_answer: "Not answered".to_owned(),
                correct_answer: "2x".to_owned(),
                is_correct: false,
            }],
        };
        let text = TerminalOutput::new().render_results(&view);
        assert!(text.contains("Your Score: 0/1"));
        assert!(!text.contains("High Score"));
        assert!(text.contains("Your answer: Not answered"));
        assert!(text.contains("✗ Incorrect"));
    }
}

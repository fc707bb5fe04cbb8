use anyhow::{anyhow, Result};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;

pub mod difficulty;
pub mod quiz;
pub mod results;
pub mod settings;
pub mod ticker;


use crate::game::difficulty::Difficulty;
use crate::game::quiz::{AnswerResult, Progress, Quiz, TickEvent};
use crate::game::results::SessionReport;
use crate::game::settings::Settings;
use crate::output::{Message, QuizOutput};
use crate::scores::{HighScores, KeyValueStore};
use crate::source::QuestionSource;

pub type ScoreStore = Arc<dyn KeyValueStore + Send + Sync>;

enum Phase {
    Home,
    Quiz { difficulty: Difficulty, quiz: Quiz },
    LoadFailed(Difficulty),
    Results(SessionReport),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Home => "home",
            Phase::Quiz { .. } => "quiz",
            Phase::LoadFailed(_) => "load failed",
            Phase::Results(_) => "results",
        }
    }
}

pub struct Game<O> {
    current_phase: Phase,
    settings: Settings,
    source: Box<dyn QuestionSource + Send>,
    high_scores: HighScores<ScoreStore>,
    output: O,
    rng: StdRng,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(
        settings: Settings,
        source: Box<dyn QuestionSource + Send>,
        store: ScoreStore,
        output: O,
        rng: StdRng,
    ) -> Self {
        Game {
            current_phase: Phase::Home,
            settings,
            source,
            high_scores: HighScores::new(store),
            output,
            rng,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering game phase: {}", phase.name());
        self.current_phase = phase;
    }

    #[cfg(test)]
    pub fn is_home(&self) -> bool {
        matches!(self.current_phase, Phase::Home)
    }

    pub fn is_in_quiz(&self) -> bool {
        matches!(self.current_phase, Phase::Quiz { .. })
    }

    pub fn welcome(&self) {
        self.output.say(&Message::Welcome);
    }

    pub fn help(&self) {
        self.output.say(&Message::Help);
    }

    pub fn reject(&self, error: &anyhow::Error) {
        self.output.say(&Message::InvalidAction(format!("{}", error)));
    }

    pub fn home(&mut self) {
        self.set_current_phase(Phase::Home);
        self.output.say(&Message::Welcome);
    }

    pub fn start(&mut self, difficulty: Difficulty) -> Result<()> {
        if self.is_in_quiz() {
            return Err(anyhow!(
                "A quiz is already in progress, type `home` to abandon it"
            ));
        }
        self.load(difficulty);
        Ok(())
    }

    /// Runs the whole fetch again for the difficulty that was last played.
    pub fn retry(&mut self) -> Result<()> {
        let difficulty = match &self.current_phase {
            Phase::LoadFailed(difficulty) => *difficulty,
            Phase::Results(report) => report.difficulty,
            _ => return Err(anyhow!("There is nothing to retry")),
        };
        self.load(difficulty);
        Ok(())
    }

    fn load(&mut self, difficulty: Difficulty) {
        self.output.say(&Message::Loading(difficulty));
        match self.source.fetch(difficulty, self.settings.question_count) {
            Ok(batch) => {
                let rng = StdRng::seed_from_u64(self.rng.gen());
                let quiz = Quiz::new(batch, &self.settings, rng);
                self.set_current_phase(Phase::Quiz { difficulty, quiz });
                self.announce_question(Message::QuestionBegins);
            }
            Err(e) => {
                warn!("Could not load {} questions: {:#}", difficulty, e);
                self.set_current_phase(Phase::LoadFailed(difficulty));
                self.output
                    .say(&Message::LoadFailed(difficulty, format!("{}", e)));
            }
        }
    }

    fn active_quiz(&mut self) -> Result<&mut Quiz> {
        match &mut self.current_phase {
            Phase::Quiz { quiz, .. } => Ok(quiz),
            _ => Err(anyhow!("There is no active question")),
        }
    }

    fn announce_question<F: FnOnce(quiz::view::QuestionView) -> Message>(&mut self, message: F) {
        if let Phase::Quiz { difficulty, quiz } = &mut self.current_phase {
            let view = quiz.view(*difficulty);
            self.output.say(&message(view));
        }
    }

    pub fn select_option(&mut self, number: usize) -> Result<AnswerResult> {
        let result = self.active_quiz()?.select_option(number)?;
        self.announce_question(Message::AnswerReveal);
        Ok(result)
    }

    pub fn guess(&mut self, guess: &str) -> Result<AnswerResult> {
        let result = self.active_quiz()?.guess(guess)?;
        self.announce_question(Message::AnswerReveal);
        Ok(result)
    }

    pub fn advance(&mut self) -> Result<()> {
        let progress = self.active_quiz()?.advance()?;
        match progress {
            Progress::NextQuestion(_) => {
                self.announce_question(Message::QuestionBegins);
            }
            Progress::Finished(score) => {
                let phase = std::mem::replace(&mut self.current_phase, Phase::Home);
                if let Phase::Quiz { difficulty, quiz } = phase {
                    let (batch, answers) = quiz.into_parts();
                    let report = SessionReport {
                        difficulty,
                        questions: batch.into_questions(),
                        answers,
                        score,
                    };
                    self.show_results(Some(report));
                }
            }
        }
        Ok(())
    }

    pub fn retreat(&mut self) -> Result<()> {
        self.active_quiz()?.retreat()?;
        self.announce_question(Message::QuestionBegins);
        Ok(())
    }

    pub fn tick(&mut self, dt: Duration) {
        let event = match &mut self.current_phase {
            Phase::Quiz { quiz, .. } => quiz.tick(dt),
            _ => None,
        };
        match event {
            Some(TickEvent::TimeRemaining(remaining)) => {
                self.output.say(&Message::TimeRemaining(remaining));
            }
            Some(TickEvent::TimedOut(_)) => {
                self.announce_question(Message::TimeUp);
            }
            None => (),
        }
    }

    /// Shows the summary of a finished quiz. Without a report there is
    /// nothing to show and the player is sent back to the start screen.
    pub fn show_results(&mut self, report: Option<SessionReport>) {
        let report = match report {
            Some(report) => report,
            None => {
                warn!("No finished quiz to summarize, going home");
                self.home();
                return;
            }
        };

        let best_score = self
            .high_scores
            .record_score(report.difficulty, report.score.correct)
            .unwrap_or_else(|e| {
                warn!("Could not record high score: {:#}", e);
                report.score.correct
            });
        self.output.say(&Message::Results(report.view(best_score)));
        self.set_current_phase(Phase::Results(report));
    }

    /// Shows the last summary again, if there is one.
    pub fn results(&mut self) -> Result<()> {
        let report = match &self.current_phase {
            Phase::Quiz { .. } => return Err(anyhow!("Finish the quiz to see your results")),
            Phase::Results(report) => Some(report.clone()),
            _ => None,
        };
        self.show_results(report);
        Ok(())
    }

    #[cfg(test)]
    pub fn best_score(&self, difficulty: Difficulty) -> Result<u32> {
        self.high_scores.best_score(difficulty)
    }
}

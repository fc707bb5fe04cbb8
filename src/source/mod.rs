use anyhow::Result;
use log::{info, warn};

use crate::game::difficulty::Difficulty;
use crate::game::quiz::definition::{Question, QuestionBatch};

pub mod opentdb;

pub use opentdb::OpenTriviaClient;


/// Where a quiz gets its questions from.
pub trait QuestionSource {
    fn fetch(&self, difficulty: Difficulty, count: usize) -> Result<QuestionBatch>;
}

/// A remote service that may or may not hand out questions.
pub trait RemoteQuestions {
    fn request(&self, difficulty: Difficulty, count: usize) -> Result<Vec<Question>>;
}

/// Asks the remote service first and silently swaps in the bundled
/// questions when it fails in any way. Without a remote, always uses the
/// bundled questions.
pub struct FallbackSource<R> {
    remote: Option<R>,
}

impl<R: RemoteQuestions> FallbackSource<R> {
    pub fn new(remote: R) -> Self {
        FallbackSource {
            remote: Some(remote),
        }
    }

    pub fn offline() -> Self {
        FallbackSource { remote: None }
    }
}

impl<R: RemoteQuestions> QuestionSource for FallbackSource<R> {
    fn fetch(&self, difficulty: Difficulty, count: usize) -> Result<QuestionBatch> {
        if let Some(remote) = &self.remote {
            match remote
                .request(difficulty, count)
                .and_then(QuestionBatch::new)
            {
                Ok(batch) => {
                    info!("Fetched {} {} questions", batch.len(), difficulty);
                    return Ok(batch);
                }
                Err(e) => warn!("Using fallback questions: {:#}", e),
            }
        }
        QuestionBatch::fallback(difficulty)
    }
}

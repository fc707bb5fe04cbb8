use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use crate::game::difficulty::Difficulty;
use crate::game::quiz::definition::Question;
use crate::source::RemoteQuestions;

/// Open Trivia DB answers with this code when the request was served.
const RESPONSE_CODE_SUCCESS: i64 = 0;

#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<Question>,
}

impl TriviaResponse {
    pub fn into_questions(self) -> Result<Vec<Question>> {
        if self.response_code != RESPONSE_CODE_SUCCESS {
            return Err(anyhow!(
                "Trivia API error, response code: {}",
                self.response_code
            ));
        }
        if self.results.is_empty() {
            return Err(anyhow!("Trivia API returned no questions"));
        }
        Ok(self.results)
    }
}

pub fn parse_response(body: &str) -> Result<Vec<Question>> {
    let response: TriviaResponse =
        serde_json::from_str(body).context("Malformed trivia API response")?;
    response.into_questions()
}

pub fn check_status(status: StatusCode) -> Result<()> {
    if !status.is_success() {
        return Err(anyhow!("Trivia API returned HTTP status {}", status));
    }
    Ok(())
}

pub struct OpenTriviaClient {
    client: Client,
    api_url: String,
}

impl OpenTriviaClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Could not create HTTP client")?;
        Ok(OpenTriviaClient {
            client,
            api_url: api_url.to_owned(),
        })
    }
}

impl RemoteQuestions for OpenTriviaClient {
    fn request(&self, difficulty: Difficulty, count: usize) -> Result<Vec<Question>> {
        debug!("Requesting {} {} questions", count, difficulty);
        let amount = count.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("amount", amount.as_str()),
                ("difficulty", difficulty.label()),
                ("type", "multiple"),
                ("encode", "url3986"),
            ])
            .send()
            .context("Could not reach trivia API")?;

        check_status(response.status())?;
        let body = response.text().context("Could not read trivia API response")?;
        parse_response(&body)
    }
}

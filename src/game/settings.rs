use std::env;
use std::time::Duration;

pub const OPEN_TRIVIA_API_URL: &str = "https://opentdb.com/api.php";

#[derive(Clone, Debug)]
pub struct Settings {
    pub question_duration: Duration,
    pub question_count: usize,
    pub tick_interval: Duration,
    pub time_warnings: Vec<Duration>,
    pub api_url: String,
    pub request_timeout: Duration,
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_duration: Duration::from_secs(30),
            question_count: 10,
            tick_interval: Duration::from_secs(1),
            time_warnings: vec![
                Duration::from_secs(20),
                Duration::from_secs(10),
                Duration::from_secs(5),
            ],
            api_url: OPEN_TRIVIA_API_URL.to_owned(),
            request_timeout: Duration::from_secs(10),
            offline: false,
        }
    }
}

impl Settings {
    /// Defaults, adjusted by `TRIVIA_API_URL` and `TRIVIA_OFFLINE`.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        if let Ok(api_url) = env::var("TRIVIA_API_URL") {
            settings.api_url = api_url;
        }
        if let Ok(offline) = env::var("TRIVIA_OFFLINE") {
            settings.offline = matches!(offline.trim(), "1" | "true" | "yes");
        }
        settings
    }
}

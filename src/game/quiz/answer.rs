use std::fmt;

pub const TIMEOUT_SENTINEL: &str = "timeout";

/// What was recorded for a question: a picked option, or the countdown
/// running out first.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Answer {
    Selected(String),
    Timeout,
}

impl Answer {
    pub fn as_str(&self) -> &str {
        match self {
            Answer::Selected(answer) => answer,
            Answer::Timeout => TIMEOUT_SENTINEL,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

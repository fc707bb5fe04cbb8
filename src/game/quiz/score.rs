use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }

    pub fn rating(&self) -> Rating {
        let percentage = self.percentage();
        if self.total > 0 && self.correct == self.total {
            Rating::Perfect
        } else if percentage >= 80.0 {
            Rating::Excellent
        } else if percentage >= 60.0 {
            Rating::Good
        } else if percentage >= 40.0 {
            Rating::NotBad
        } else {
            Rating::KeepPracticing
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rating {
    Perfect,
    Excellent,
    Good,
    NotBad,
    KeepPracticing,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(correct: u32, total: u32) -> Score {
        Score { correct, total }
    }

    #[test]
    fn rates_by_percentage() {
        assert_eq!(score(10, 10).rating(), Rating::Perfect);
        assert_eq!(score(8, 10).rating(), Rating::Excellent);
        assert_eq!(score(6, 10).rating(), Rating::Good);
        assert_eq!(score(4, 10).rating(), Rating::NotBad);
        assert_eq!(score(3, 10).rating(), Rating::KeepPracticing);
        assert_eq!(score(0, 0).rating(), Rating::KeepPracticing);
    }

    #[test]
    fn displays_as_fraction() {
        assert_eq!(score(7, 10).to_string(), "7/10");
    }
}

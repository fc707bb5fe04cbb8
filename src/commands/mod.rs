use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::game::difficulty::Difficulty;
use crate::game::Game;
use crate::output::QuizOutput;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Start(Difficulty),
    PickOption(usize),
    Answer(String),
    Next,
    Previous,
    Retry,
    Results,
    Home,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.find(char::is_whitespace) {
            Some(split) => (&line[..split], line[split..].trim()),
            None => (line, ""),
        };

        if let Ok(number) = verb.parse::<usize>() {
            return Ok(Command::PickOption(number));
        }
        if let Ok(difficulty) = verb.parse::<Difficulty>() {
            return Ok(Command::Start(difficulty));
        }

        match verb.to_lowercase().as_ref() {
            "start" | "play" => Ok(Command::Start(Difficulty::coerce(rest))),
            "answer" | "a" if !rest.is_empty() => Ok(Command::Answer(rest.to_owned())),
            "answer" | "a" => Err(anyhow!("Usage: answer <text>")),
            "next" | "n" | "finish" => Ok(Command::Next),
            "prev" | "previous" | "p" | "back" => Ok(Command::Previous),
            "retry" | "again" => Ok(Command::Retry),
            "results" => Ok(Command::Results),
            "home" => Ok(Command::Home),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(anyhow!("Type `help` to see what you can do")),
            other => Err(anyhow!("Unknown command `{}`, type `help`", other)),
        }
    }
}

/// Applies a command to the game. Quitting is left to the caller.
pub fn execute<O: QuizOutput>(game: &mut Game<O>, command: &Command) -> Result<()> {
    match command {
        Command::Start(difficulty) => game.start(*difficulty),
        Command::PickOption(number) => game.select_option(*number).map(|_| ()),
        Command::Answer(guess) => game.guess(guess).map(|_| ()),
        Command::Next => game.advance(),
        Command::Previous => game.retreat(),
        Command::Retry => game.retry(),
        Command::Results => game.results(),
        Command::Home => {
            game.home();
            Ok(())
        }
        Command::Help => {
            game.help();
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

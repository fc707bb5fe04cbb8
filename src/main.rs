use anyhow::Result;
use log::{info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod game;
mod output;
mod scores;
mod source;
mod text;

use crate::commands::Command;
use crate::game::settings::Settings;
use crate::game::ticker;
use crate::game::{Game, ScoreStore};
use crate::output::terminal::TerminalOutput;
use crate::scores::{FileStore, MemoryStore};
use crate::source::{FallbackSource, OpenTriviaClient, QuestionSource};

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn open_score_store() -> Result<ScoreStore> {
    let path = match env::var("TRIVIA_SCORES_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => FileStore::default_path()?,
    };
    match FileStore::open(&path) {
        Ok(store) => {
            info!("High scores are kept in {}", path.display());
            Ok(Arc::new(store))
        }
        Err(e) => {
            warn!("High scores will not be saved: {:#}", e);
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_env();

    let source: Box<dyn QuestionSource + Send> = if settings.offline {
        info!("Offline mode, using bundled questions only");
        Box::new(FallbackSource::<OpenTriviaClient>::offline())
    } else {
        let client = OpenTriviaClient::new(&settings.api_url, settings.request_timeout)?;
        Box::new(FallbackSource::new(client))
    };
    let store = open_score_store()?;

    let game = Arc::new(Mutex::new(Game::new(
        settings.clone(),
        source,
        store,
        TerminalOutput::new(),
        StdRng::from_entropy(),
    )));
    game.lock().welcome();

    ticker::spawn(&game, settings.tick_interval);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut game = game.lock();
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                game.reject(&e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(e) = commands::execute(&mut *game, &command) {
            game.reject(&e);
        }
    }

    Ok(())
}

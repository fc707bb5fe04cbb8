use log::debug;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::game::Game;
use crate::output::QuizOutput;

/// Ticks `game` by `interval` every `interval` until the game is dropped.
///
/// Each tick advances the game by exactly one interval. Time spent waiting
/// for the lock, such as a blocking question fetch, never reaches a countdown.
pub fn spawn<O>(game: &Arc<Mutex<Game<O>>>, interval: Duration) -> JoinHandle<()>
where
    O: QuizOutput + Send + 'static,
{
    let game: Weak<Mutex<Game<O>>> = Arc::downgrade(game);
    thread::spawn(move || loop {
        thread::sleep(interval);
        match game.upgrade() {
            Some(game) => game.lock().tick(interval),
            None => {
                debug!("Game is gone, ticker stops");
                break;
            }
        }
    })
}

//! Engine controller implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error};
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::Rng;

use super::Difficulty;
use crate::board::{EngineError, Move, SearchError};
use crate::game::Game;
use crate::search::{MoveSource, Search, SearchParams, SearchResult};

/// What a finished background search produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search (or the book) chose a move
    Move(Move, MoveSource),
    /// The side to move had no legal moves
    NoMove,
    /// The search was stopped before it finished
    Cancelled,
    /// The worker failed; this is a random legal move instead
    Fallback(Move),
}

impl SearchOutcome {
    /// The move to play, if any
    #[must_use]
    pub fn chosen_move(&self) -> Option<Move> {
        match *self {
            SearchOutcome::Move(mv, _) | SearchOutcome::Fallback(mv) => Some(mv),
            SearchOutcome::NoMove | SearchOutcome::Cancelled => None,
        }
    }
}

/// Random legal move, or `NoMove` when there is none
pub(crate) fn fallback<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> SearchOutcome {
    moves
        .choose(rng)
        .map_or(SearchOutcome::NoMove, |&mv| SearchOutcome::Fallback(mv))
}

/// Active search job state
pub struct SearchJob {
    /// Stop flag for the search
    stop: Arc<AtomicBool>,
    /// Written once by the worker when the search returns
    slot: Arc<Mutex<Option<SearchOutcome>>>,
    /// Legal moves at the root, for the fallback
    root_moves: Vec<Move>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Spawn a worker searching `game` to `depth` plies
    fn spawn(game: Game, params: SearchParams, depth: u32) -> Result<Self, EngineError> {
        let root_moves = game.legal_moves().to_vec();
        Self::spawn_with(root_moves, move |stop| {
            let mut search = Search::new(params);
            match search.run(&game, depth, stop) {
                Ok(SearchResult {
                    best_move: Some(mv),
                    source,
                    ..
                }) => SearchOutcome::Move(mv, source),
                Ok(_) => SearchOutcome::NoMove,
                Err(SearchError::Cancelled) => SearchOutcome::Cancelled,
            }
        })
    }

    /// Run `work` on the search thread and publish what it returns
    fn spawn_with<F>(root_moves: Vec<Move>, work: F) -> Result<Self, EngineError>
    where
        F: FnOnce(&AtomicBool) -> SearchOutcome + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let slot = Arc::new(Mutex::new(None));

        let stop_clone = Arc::clone(&stop);
        let slot_clone = Arc::clone(&slot);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || {
                let outcome = work(stop_clone.as_ref());
                *slot_clone.lock() = Some(outcome);
            })
            .map_err(|err| EngineError::ThreadSpawn {
                reason: err.to_string(),
            })?;

        Ok(SearchJob {
            stop,
            slot,
            root_moves,
            handle,
        })
    }

    /// Whether the worker has returned
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) {
        self.signal_stop();
        let _ = self.join();
    }

    /// Wait for the worker and collect its outcome.
    ///
    /// A worker that panicked or never published is replaced by a random
    /// legal move from the root.
    pub fn join(self) -> SearchOutcome {
        let published = match self.handle.join() {
            Ok(()) => self.slot.lock().take(),
            Err(_) => {
                error!("search thread panicked, playing a random move");
                None
            }
        };
        published.unwrap_or_else(|| fallback(&self.root_moves, &mut rand::thread_rng()))
    }
}

/// Engine controller owning the live game and at most one search job
pub struct EngineController {
    game: Game,
    params: SearchParams,
    difficulty: Difficulty,
    /// Active search job (if any)
    current_job: Option<SearchJob>,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineController {
    /// New game at the default difficulty
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default(), Difficulty::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams, difficulty: Difficulty) -> Self {
        EngineController {
            game: Game::new(),
            params,
            difficulty,
            current_job: None,
        }
    }

    /// Get a reference to the live game
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Takes effect from the next search
    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Takes effect from the next search
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Check if there's an active search
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    /// Start searching a copy of the live game for the side to move
    pub fn start_search(&mut self) -> Result<(), EngineError> {
        if self.current_job.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        if self.game.is_game_over() {
            return Err(EngineError::GameOver);
        }
        let depth = self.difficulty.depth();
        debug!(
            "starting {} search at depth {depth} for {}",
            self.difficulty,
            self.game.side_to_move()
        );
        self.current_job = Some(SearchJob::spawn(
            self.game.clone(),
            self.params.clone(),
            depth,
        )?);
        Ok(())
    }

    /// Outcome of the active search if it has finished, without blocking
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        if self.current_job.as_ref()?.is_finished() {
            self.wait()
        } else {
            None
        }
    }

    /// Block until the active search finishes, `None` if none is running
    pub fn wait(&mut self) -> Option<SearchOutcome> {
        let outcome = self.current_job.take()?.join();
        debug!("search finished: {outcome:?}");
        Some(outcome)
    }

    /// Stop any active search, discarding its result
    pub fn cancel(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.stop_and_wait();
            debug!("search cancelled");
        }
    }

    /// Abandon any search and restore the starting position
    pub fn new_game(&mut self) {
        self.cancel();
        self.game.reset();
    }

    /// Validate and play a human move. Refused while a search is running.
    pub fn play_human(&mut self, mv: Move) -> Result<(), EngineError> {
        if self.current_job.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        self.game.play(mv)?;
        Ok(())
    }

    /// Play the move carried by `outcome` on the live game.
    ///
    /// Returns the move played, `None` for outcomes without one.
    pub fn commit(&mut self, outcome: SearchOutcome) -> Result<Option<Move>, EngineError> {
        if self.current_job.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        let Some(mv) = outcome.chosen_move() else {
            return Ok(None);
        };
        self.game.play(mv)?;
        Ok(Some(mv))
    }

    /// Search the live game to completion and play the result
    pub fn think(&mut self) -> Result<SearchOutcome, EngineError> {
        self.start_search()?;
        let outcome = self.wait().unwrap_or(SearchOutcome::Cancelled);
        self.commit(outcome)?;
        Ok(outcome)
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Adversarial search.
//!
//! Features:
//! - Opening book probe ahead of any search
//! - Minimax with alpha-beta pruning over cloned games
//! - Pluggable move ordering (natural, captures first, MVV-LVA)
//! - Cooperative cancellation through a stop flag polled before every sibling

mod constants;
mod minimax;
mod move_order;
mod params;

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, SearchError};
use crate::book::OpeningBook;
use crate::game::Game;

pub use constants::{INFINITY, MIN_DEPTH};
pub use move_order::{mvv_lva, order_moves};
pub use params::{MoveOrdering, SearchParams};

/// Where a chosen move came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveSource {
    Book,
    Search,
}

/// Result of a completed search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the side to move has no moves
    pub best_move: Option<Move>,
    /// Score from the root mover's side, `None` for book moves and
    /// positions without moves
    pub score: Option<i32>,
    pub source: MoveSource,
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub book_hits: u64,
}

/// A configured searcher.
///
/// Holds the parameters, the opening book to probe and the statistics of
/// the most recent search. Searches never touch the caller's `Game`.
#[derive(Clone, Debug)]
pub struct Search<'b> {
    params: SearchParams,
    book: &'b OpeningBook,
    stats: SearchStats,
}

impl Default for Search<'static> {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Search<'static> {
    /// Searcher backed by the standard opening book
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Search::with_book(params, OpeningBook::standard())
    }
}

impl<'b> Search<'b> {
    #[must_use]
    pub fn with_book(params: SearchParams, book: &'b OpeningBook) -> Self {
        Search {
            params,
            book,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move for the side to move in `game`.
    ///
    /// A legal book move is returned without searching. Otherwise every
    /// root move is scored with a full window and the first best move is
    /// kept. A `depth` of 0 searches one ply.
    pub fn run(&mut self, game: &Game, depth: u32, stop: &AtomicBool) -> Result<SearchResult, SearchError> {
        self.stats = SearchStats::default();
        let depth = depth.max(MIN_DEPTH);

        if let Some(result) = self.probe_book(game) {
            return Ok(result);
        }

        let root = game.side_to_move();
        let mut best: Option<(Move, i32)> = None;

        for mv in self.ordered_moves(game) {
            if stop.load(Ordering::Relaxed) {
                debug!("search cancelled after {} nodes", self.stats.nodes);
                return Err(SearchError::Cancelled);
            }
            let child = self.child(game, mv);
            let maximizing = child.side_to_move() == Color::White;
            let score = root.sign()
                * self.minimax(&child, depth - 1, -INFINITY, INFINITY, maximizing, stop)?;

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((self.with_promotion(game, mv), score));
            }
        }

        debug!(
            "depth {depth}: best {} score {} nodes {} leaves {} cutoffs {}",
            best.map_or_else(|| "none".to_string(), |(mv, _)| mv.to_string()),
            best.map_or(0, |(_, score)| score),
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        Ok(SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, score)| score),
            source: MoveSource::Search,
        })
    }

    /// Best move for the side to move, `None` if it has no moves
    pub fn best_move(&mut self, game: &Game, depth: u32) -> Option<Move> {
        let stop = AtomicBool::new(false);
        self.run(game, depth, &stop)
            .ok()
            .and_then(|result| result.best_move)
    }

    fn probe_book(&mut self, game: &Game) -> Option<SearchResult> {
        if !self.params.use_book {
            return None;
        }
        let mv = self.book.lookup_game(game)?;
        if !game.is_legal(mv) {
            warn!(
                "book move {mv} is illegal after '{}', searching instead",
                game.history_key()
            );
            return None;
        }
        self.stats.book_hits += 1;
        debug!("book move {mv} after '{}'", game.history_key());
        Some(SearchResult {
            best_move: Some(self.with_promotion(game, mv)),
            score: None,
            source: MoveSource::Book,
        })
    }

    fn with_promotion(&self, game: &Game, mv: Move) -> Move {
        if game.is_promotion(mv.from, mv.to) {
            Move::with_promotion(mv.from, mv.to, self.params.promotion)
        } else {
            mv
        }
    }
}

/// Best move with default parameters and the standard book
#[must_use]
pub fn best_move(game: &Game, depth: u32) -> Option<Move> {
    Search::default().best_move(game, depth)
}

//! Pluggable players.
//!
//! A player looks at a read-only board and answers with a cell to play, or
//! `None` to decline. The match controller never trusts that answer: skips
//! are decided by the rules engine and an illegal cell forfeits the match.

use std::collections::VecDeque;

use crate::board::{Board, Color, Move};
use crate::rules::legal_moves;

/// A move-choosing strategy.
pub trait Player {
    /// Choose a cell for `color` on `board`, or `None` for "no move".
    fn place(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Short label used when narrating the match.
    fn name(&self) -> &str {
        "player"
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn place(&mut self, board: &Board, color: Color) -> Option<Move> {
        (**self).place(board, color)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Picks uniformly among the currently legal cells.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    /// A player seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A reproducible player.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn place(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Replays a fixed list of cells, then declines.
///
/// The script is not checked against the rules, so a bad entry forfeits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn place(&mut self, _board: &Board, _color: Color) -> Option<Move> {
        self.moves.pop_front()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Parse a script such as `"3,1 4,2"` into `(x, y)` cells.
pub fn parse_script(s: &str) -> Result<Vec<Move>, String> {
    s.split_whitespace()
        .map(|tok| {
            let (x, y) = tok
                .split_once(',')
                .ok_or_else(|| format!("expected x,y but got {tok:?}"))?;
            let x = x.trim().parse().map_err(|_| format!("bad column in {tok:?}"))?;
            let y = y.trim().parse().map_err(|_| format!("bad row in {tok:?}"))?;
            Ok((x, y))
        })
        .collect()
}

//! Move execution with per-flip snapshots.

use crate::board::{Board, BoardError, Cell, Color};
use crate::rules::captured_runs;

/// Place `stone` at `(x, y)`, flip every captured stone, and return the
/// snapshots taken along the way.
///
/// The first snapshot shows the placed stone before any flip, and one more
/// snapshot follows each individual flip, runs in direction order and each
/// run nearest-first. So the sequence has `1 + flipped` frames and its last
/// frame equals the mutated `board`.
///
/// If the move is illegal nothing is changed and no frames are returned.
pub fn apply(board: &mut Board, stone: Color, x: usize, y: usize) -> Result<Vec<Board>, BoardError> {
    let runs = captured_runs(board, stone, x, y);
    if runs.is_empty() {
        return Ok(Vec::new());
    }

    let cell = Cell::from(stone);
    let flips: usize = runs.iter().map(|r| r.cells.len()).sum();
    let mut frames = Vec::with_capacity(1 + flips);

    board.set(x, y, cell)?;
    frames.push(board.clone());

    for run in &runs {
        for &(fx, fy) in &run.cells {
            board.set(fx, fy, cell)?;
            frames.push(board.clone());
        }
    }

    Ok(frames)
}

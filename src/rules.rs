//! Move legality and directional capture.
//!
//! A placement is legal when the target cell is empty and, in at least one of
//! the 8 directions, a contiguous run of opponent stones is closed off by a
//! stone of the mover's color. Both [`is_legal`] and [`captured_runs`] are
//! built on the same single-direction scan so they cannot disagree.

use crate::board::{Board, Cell, Color, Move};
use crate::constants::DIRECTIONS;

/// The opponent stones captured in one direction, nearest-first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapturedRun {
    pub direction: (isize, isize),
    pub cells: Vec<Move>,
}

/// Step one cell from `(x, y)` along `(dx, dy)`, or `None` if that leaves the board.
#[inline]
fn step(board: &Board, (x, y): Move, (dx, dy): (isize, isize)) -> Option<Move> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    board.in_bounds(nx, ny).then_some((nx, ny))
}

/// Scan outward from `(x, y)` along `dir` and return the run of opponent
/// stones if it is bracketed by a `stone` of the mover's color.
///
/// Does not look at the target cell itself.
fn scan_direction(board: &Board, stone: Color, x: usize, y: usize, dir: (isize, isize)) -> Option<Vec<Move>> {
    let own = Cell::from(stone);
    let opp = Cell::from(stone.opponent());
    let mut run = Vec::new();
    let mut pt = step(board, (x, y), dir)?;

    loop {
        let cell = board.get(pt.0, pt.1).ok()?;
        if cell == opp {
            run.push(pt);
            pt = step(board, pt, dir)?;
        } else if cell == own && !run.is_empty() {
            return Some(run);
        } else {
            return None;
        }
    }
}

/// Whether `stone` may be placed at `(x, y)`.
///
/// Off-board coordinates are simply illegal.
pub fn is_legal(board: &Board, stone: Color, x: usize, y: usize) -> bool {
    if board.get(x, y) != Ok(Cell::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| scan_direction(board, stone, x, y, dir).is_some())
}

/// Whether `stone` has at least one legal placement anywhere on the board.
pub fn has_any_legal_move(board: &Board, stone: Color) -> bool {
    board
        .cells()
        .any(|(x, y, _)| is_legal(board, stone, x, y))
}

/// All legal placements for `stone`, in row-major order.
pub fn legal_moves(board: &Board, stone: Color) -> Vec<Move> {
    board
        .cells()
        .filter(|&(x, y, _)| is_legal(board, stone, x, y))
        .map(|(x, y, _)| (x, y))
        .collect()
}

/// The runs that placing `stone` at `(x, y)` would capture, one per
/// bracketing direction, in [`DIRECTIONS`] order.
///
/// Empty if the target is occupied, off the board, or captures nothing.
pub fn captured_runs(board: &Board, stone: Color, x: usize, y: usize) -> Vec<CapturedRun> {
    if board.get(x, y) != Ok(Cell::Empty) {
        return Vec::new();
    }
    DIRECTIONS
        .iter()
        .filter_map(|&direction| {
            scan_direction(board, stone, x, y, direction)
                .map(|cells| CapturedRun { direction, cells })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let b = Board::starting();
        assert!(!is_legal(&b, Color::Black, 2, 2));
        assert!(!is_legal(&b, Color::Black, 3, 2));
        assert!(captured_runs(&b, Color::Black, 3, 2).is_empty());
    }

    #[test]
    fn test_off_board_is_illegal() {
        let b = Board::starting();
        assert!(!is_legal(&b, Color::Black, 6, 2));
        assert!(!is_legal(&b, Color::White, 0, 100));
        assert!(captured_runs(&b, Color::Black, 6, 2).is_empty());
    }

    #[test]
    fn test_adjacent_own_stone_does_not_bracket() {
        // Black at (0,0) next to (1,0): no opponent stones in between.
        let b = board(
            "X . . . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .",
        );
        assert!(!is_legal(&b, Color::Black, 1, 0));
        assert!(!has_any_legal_move(&b, Color::Black));
    }

    #[test]
    fn test_run_reaching_edge_does_not_bracket() {
        // White run runs off the board to the west with no black stone.
        let b = board(
            "O O . . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .",
        );
        assert!(!is_legal(&b, Color::Black, 2, 0));
    }

    #[test]
    fn test_gap_breaks_run() {
        let b = board(
            "X . O . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .",
        );
        assert!(!is_legal(&b, Color::Black, 3, 0));
    }

    #[test]
    fn test_captured_runs_multiple_directions() {
        let b = board(
            "X . X . . .
             . O O . . .
             X O . O X .
             . . . . . .
             . . . . . .
             . . . . . .",
        );
        let runs = captured_runs(&b, Color::Black, 2, 2);
        assert_eq!(
            runs,
            vec![
                CapturedRun { direction: (-1, -1), cells: vec![(1, 1)] },
                CapturedRun { direction: (-1, 0), cells: vec![(1, 2)] },
                CapturedRun { direction: (0, -1), cells: vec![(2, 1)] },
                CapturedRun { direction: (1, 0), cells: vec![(3, 2)] },
            ]
        );
        assert!(is_legal(&b, Color::Black, 2, 2));
    }

    #[test]
    fn test_captured_run_is_nearest_first() {
        let b = board(
            "X O O O . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .
             . . . . . .",
        );
        let runs = captured_runs(&b, Color::Black, 4, 0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].direction, (-1, 0));
        assert_eq!(runs[0].cells, vec![(3, 0), (2, 0), (1, 0)]);
    }

    #[test]
    fn test_legal_moves_start() {
        let b = Board::starting();
        assert_eq!(legal_moves(&b, Color::Black), vec![(3, 1), (4, 2), (1, 3), (2, 4)]);
        assert_eq!(legal_moves(&b, Color::White), vec![(2, 1), (1, 2), (4, 3), (3, 4)]);
    }
}

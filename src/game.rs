//! Turn-driven match controller.
//!
//! A [`Match`] owns the live board, the two players and the frame log. Each
//! [`Match::tick`] plays exactly one turn for the active color:
//!
//! 1. If the active color has no legal move, the turn is skipped without
//!    asking its player.
//! 2. Otherwise the player is asked for a cell. An illegal cell forfeits the
//!    match; a legal one is executed and its frames appended to the log.
//!    A player that declines while a legal move exists just passes.
//! 3. If neither color can move, the match is finished and scored.
//!
//! Narration and rendering never happen inside the rules; they are driven
//! from [`MatchObserver`] callbacks and from the frame log afterwards.

use std::fmt;

use tracing::{debug, info, warn};

use crate::board::{Board, BoardError, Color, Move};
use crate::executor::apply;
use crate::player::Player;
use crate::rules::{has_any_legal_move, is_legal};

/// Final result of a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWins,
    WhiteWins,
    Draw,
    /// The given color chose an illegal cell.
    ForfeitBy(Color),
}

impl MatchOutcome {
    /// The winning color, if there is one.
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::BlackWins => Some(Color::Black),
            MatchOutcome::WhiteWins => Some(Color::White),
            MatchOutcome::ForfeitBy(c) => Some(c.opponent()),
            MatchOutcome::Draw => None,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::BlackWins => f.write_str("Black wins"),
            MatchOutcome::WhiteWins => f.write_str("White wins"),
            MatchOutcome::Draw => f.write_str("Draw"),
            MatchOutcome::ForfeitBy(c) => write!(f, "{c} forfeits"),
        }
    }
}

/// Controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchState {
    InProgress(Color),
    Forfeited(Color),
    Finished(MatchOutcome),
}

impl MatchState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchState::InProgress(_))
    }
}

/// Stone counts at a point in the match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.count_of(Color::Black),
            white: board.count_of(Color::White),
        }
    }

    /// Compare counts: more stones wins, equal is a draw.
    pub fn outcome(self) -> MatchOutcome {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => MatchOutcome::BlackWins,
            Ordering::Less => MatchOutcome::WhiteWins,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

/// Callbacks fired after each turn event completes. All methods default to no-ops.
pub trait MatchObserver {
    fn on_move(&mut self, _color: Color, _player: &str, _mv: Move, _frames: &[Board]) {}
    fn on_skip(&mut self, _color: Color, _player: &str) {}
    fn on_forfeit(&mut self, _color: Color, _player: &str, _mv: Move) {}
    fn on_finish(&mut self, _outcome: MatchOutcome, _score: Score) {}
}

/// Observer that narrates the match through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Narrator;

impl MatchObserver for Narrator {
    fn on_move(&mut self, color: Color, player: &str, (x, y): Move, frames: &[Board]) {
        info!("{color} ({player}) placed a stone at ({x}, {y})");
        debug!("{} frames, {} flipped", frames.len(), frames.len().saturating_sub(1));
    }

    fn on_skip(&mut self, color: Color, player: &str) {
        info!("{color} ({player}) passes: skip");
    }

    fn on_forfeit(&mut self, color: Color, player: &str, (x, y): Move) {
        warn!("{color} ({player}) tried to play an illegal cell ({x}, {y})");
        warn!("{color} ({player}) forfeits the match");
    }

    fn on_finish(&mut self, outcome: MatchOutcome, score: Score) {
        info!("Game over! Black: {}, White: {}", score.black, score.white);
        info!("{outcome}");
    }
}

/// A single match between two players.
pub struct Match<'a> {
    board: Board,
    black: Box<dyn Player + 'a>,
    white: Box<dyn Player + 'a>,
    state: MatchState,
    frames: Vec<Board>,
    observers: Vec<Box<dyn MatchObserver + 'a>>,
}

impl<'a> Match<'a> {
    /// Start a match on `board` with Black to move. The frame log starts
    /// with a snapshot of `board`.
    pub fn new(board: Board, black: impl Player + 'a, white: impl Player + 'a) -> Self {
        let frames = vec![board.clone()];
        Self {
            board,
            black: Box::new(black),
            white: Box::new(white),
            state: MatchState::InProgress(Color::Black),
            frames,
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn observe(mut self, observer: impl MatchObserver + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every snapshot so far, starting with the initial board.
    pub fn frames(&self) -> &[Board] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Board> {
        self.frames
    }

    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// The outcome, once the match has ended.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.state {
            MatchState::InProgress(_) => None,
            MatchState::Forfeited(c) => Some(MatchOutcome::ForfeitBy(c)),
            MatchState::Finished(outcome) => Some(outcome),
        }
    }

    fn player(&self, color: Color) -> &(dyn Player + 'a) {
        match color {
            Color::Black => self.black.as_ref(),
            Color::White => self.white.as_ref(),
        }
    }

    fn notify(&mut self, f: impl Fn(&mut (dyn MatchObserver + 'a))) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }

    /// Play one turn for the active color.
    ///
    /// Returns the new state. Ticking a match that has already ended
    /// changes nothing. Errors are internal bounds violations and are fatal.
    pub fn tick(&mut self) -> Result<MatchState, BoardError> {
        let color = match self.state {
            MatchState::InProgress(c) => c,
            terminal => return Ok(terminal),
        };

        if has_any_legal_move(&self.board, color) {
            let (proposal, name) = {
                let player = match color {
                    Color::Black => self.black.as_mut(),
                    Color::White => self.white.as_mut(),
                };
                (player.place(&self.board, color), player.name().to_owned())
            };

            match proposal {
                Some((x, y)) if !is_legal(&self.board, color, x, y) => {
                    self.state = MatchState::Forfeited(color);
                    self.notify(|o| o.on_forfeit(color, &name, (x, y)));
                    return Ok(self.state);
                }
                Some((x, y)) => {
                    let frames = apply(&mut self.board, color, x, y)?;
                    self.notify(|o| o.on_move(color, &name, (x, y), &frames));
                    self.frames.extend(frames);
                }
                None => {
                    debug!("{color} ({name}) declined to move although a legal move exists");
                    self.notify(|o| o.on_skip(color, &name));
                }
            }
        } else {
            let name = self.player(color).name().to_owned();
            self.notify(|o| o.on_skip(color, &name));
        }

        if !has_any_legal_move(&self.board, Color::Black)
            && !has_any_legal_move(&self.board, Color::White)
        {
            let score = self.score();
            let outcome = score.outcome();
            self.state = MatchState::Finished(outcome);
            self.notify(|o| o.on_finish(outcome, score));
        } else {
            self.state = MatchState::InProgress(color.opponent());
        }
        Ok(self.state)
    }

    /// Tick until the match ends.
    pub fn run(&mut self) -> Result<MatchOutcome, BoardError> {
        loop {
            self.tick()?;
            if let Some(outcome) = self.outcome() {
                debug!("match ended after {} frames", self.frames.len());
                return Ok(outcome);
            }
        }
    }
}

/// Play one narrated match to completion and return its outcome and frame
/// log. `board` defaults to the canonical starting position.
pub fn run_match<'a>(
    black: impl Player + 'a,
    white: impl Player + 'a,
    board: Option<Board>,
) -> Result<(MatchOutcome, Vec<Board>), BoardError> {
    let mut game = Match::new(board.unwrap_or_else(Board::starting), black, white).observe(Narrator);
    let outcome = game.run()?;
    Ok((outcome, game.into_frames()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{RandomPlayer, ScriptedPlayer};

    #[test]
    fn test_score_outcome() {
        assert_eq!(Score { black: 3, white: 1 }.outcome(), MatchOutcome::BlackWins);
        assert_eq!(Score { black: 1, white: 3 }.outcome(), MatchOutcome::WhiteWins);
        assert_eq!(Score { black: 2, white: 2 }.outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(MatchOutcome::ForfeitBy(Color::Black).winner(), Some(Color::White));
        assert_eq!(MatchOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_initial_state() {
        let game = Match::new(Board::starting(), RandomPlayer::with_seed(1), RandomPlayer::with_seed(2));
        assert_eq!(game.state(), MatchState::InProgress(Color::Black));
        assert_eq!(game.frames(), &[Board::starting()]);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_one_tick_alternates() {
        let mut game = Match::new(
            Board::starting(),
            ScriptedPlayer::new([(3, 1)]),
            RandomPlayer::with_seed(2),
        );
        let state = game.tick().unwrap();
        assert_eq!(state, MatchState::InProgress(Color::White));
        // Initial frame + placement + one flip.
        assert_eq!(game.frames().len(), 3);
        assert_eq!(game.frames().last(), Some(game.board()));
    }

    #[test]
    fn test_decline_is_a_pass_not_a_forfeit() {
        let mut game = Match::new(
            Board::starting(),
            ScriptedPlayer::new([]),
            RandomPlayer::with_seed(2),
        );
        assert_eq!(game.tick().unwrap(), MatchState::InProgress(Color::White));
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.frames().len(), 1);
    }

    #[test]
    fn test_off_board_proposal_forfeits() {
        let mut game = Match::new(
            Board::starting(),
            ScriptedPlayer::new([(9, 9)]),
            RandomPlayer::with_seed(2),
        );
        assert_eq!(game.tick().unwrap(), MatchState::Forfeited(Color::Black));
        assert_eq!(game.outcome(), Some(MatchOutcome::ForfeitBy(Color::Black)));
    }

    #[test]
    fn test_tick_after_end_is_noop() {
        let mut game = Match::new(
            Board::starting(),
            ScriptedPlayer::new([(0, 0)]),
            RandomPlayer::with_seed(2),
        );
        let state = game.tick().unwrap();
        assert_eq!(state, MatchState::Forfeited(Color::Black));
        assert!(state.is_terminal());
        assert_eq!(game.tick().unwrap(), state);
        assert_eq!(game.frames().len(), 1);
    }

    #[test]
    fn test_random_match_terminates() {
        let (outcome, frames) =
            run_match(RandomPlayer::with_seed(3), RandomPlayer::with_seed(4), None).unwrap();
        assert!(!matches!(outcome, MatchOutcome::ForfeitBy(_)));
        let last = frames.last().unwrap();
        assert!(!has_any_legal_move(last, Color::Black));
        assert!(!has_any_legal_move(last, Color::White));
        assert_eq!(Score::of(last).outcome(), outcome);
    }
}

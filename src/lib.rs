//! Othello-Canvas: automated Othello matches on a 6x6 board.
//!
//! This crate provides a rules engine and a turn-driven match controller for
//! two pluggable players, plus renderers that draw the resulting frames.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, rendering defaults, scan directions
//! - [`board`] - Cell occupancy grid
//! - [`rules`] - Legality test and directional capture
//! - [`executor`] - Move execution with per-flip snapshots
//! - [`player`] - Player capability and the shipped strategies
//! - [`game`] - Match controller, outcomes, narration
//! - [`render`] - Text and SVG renderers for the frame log
//!
//! ## Example
//!
//! ```
//! use othello_canvas::game::{run_match, MatchOutcome};
//! use othello_canvas::player::RandomPlayer;
//!
//! let (outcome, frames) =
//!     run_match(RandomPlayer::with_seed(1), RandomPlayer::with_seed(2), None).unwrap();
//! assert!(!matches!(outcome, MatchOutcome::ForfeitBy(_)));
//! assert!(frames.len() > 1);
//! ```

pub mod board;
pub mod constants;
pub mod executor;
pub mod game;
pub mod player;
pub mod render;
pub mod rules;

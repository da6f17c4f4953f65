//! Headless game rules for custom bingo sessions.
//!
//! This crate models a complete bingo session without any UI dependency:
//!
//! - [`PhraseCollector`]: gathers phrases one at a time, capped at N×N
//! - [`Board`]: the frozen N×N board with independent per-cell crossed flags
//! - [`Session`]: the three-phase flow (size selection → phrase collection →
//!   play), forward-only, with every operation returning a typed result
//!
//! # Examples
//!
//! ```
//! use wordbingo_core::Position;
//! use wordbingo_game::Session;
//!
//! let mut session = Session::new();
//! session.submit_size("2").unwrap();
//! for phrase in ["Red Flag", "Safety Car", "Pit Stop", "DNF"] {
//!     session.add_phrase(phrase).unwrap();
//! }
//! session.start_board().unwrap();
//!
//! let crossed = session.toggle_cell(Position::new(1, 0)).unwrap();
//! assert!(crossed);
//! ```

pub use self::{board::*, collector::*, session::*};

mod board;
mod collector;
mod session;

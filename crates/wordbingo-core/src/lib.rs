//! Core data types for custom bingo applications.
//!
//! This crate provides the fundamental, validated value types for a bingo
//! board: the board dimension, board positions, and the player-authored
//! phrases that occupy cells.
//!
//! # Overview
//!
//! - [`grid_size`]: the side length of a square board, validated to be at
//!   least 1, with free-text parsing for user input
//! - [`position`]: (row, column) board coordinates with row-major index
//!   conversion
//! - [`phrase`]: a non-blank, user-authored cell text
//!
//! # Examples
//!
//! ```
//! use wordbingo_core::{GridSize, Phrase, Position};
//!
//! let size: GridSize = "3".parse().unwrap();
//! assert_eq!(size.cell_count(), 9);
//!
//! // Phrases entered in order map to cells in row-major order.
//! let pos = Position::from_index(4, size);
//! assert_eq!(pos, Position::new(1, 1));
//!
//! let phrase = Phrase::new("Pit Stop").unwrap();
//! assert_eq!(phrase.as_str(), "Pit Stop");
//! ```

pub use self::{grid_size::*, phrase::*, position::*};

pub mod grid_size;
pub mod phrase;
pub mod position;

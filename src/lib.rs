//! Wordle Board
//!
//! A Wordle-style word-guessing game: a small deterministic engine plus a
//! terminal UI and a line-oriented mode built on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::dictionary::Dictionary;
//! use wordle_board::game::{GameBoard, GameStatus, VICTORY_MESSAGE};
//!
//! let mut board = GameBoard::new("TESTS", Dictionary::embedded());
//! board.type_text("tests");
//! board.submit();
//!
//! assert_eq!(board.status(), GameStatus::Won);
//! assert_eq!(board.message(), Some(VICTORY_MESSAGE));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Valid words
pub mod dictionary;

// Runtime configuration
pub mod config;

// Logging setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
